use std::io;

use thiserror::Error;
use tracing::debug;

use crate::core::read::TaggedRead;
use crate::core::tag::Tag;
use crate::core::types::{DestinationKey, DEFAULT_MARKER};
use crate::demux::metrics::ReadCounter;
use crate::demux::sink::RecordSink;
use crate::matching::engine::{MatchResult, Matcher};

/// Leading bases shown in logs for reads that match no tag
const UNMATCHED_LOG_BASES: usize = 14;

#[derive(Error, Debug)]
pub enum DemuxError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Paired inputs have different lengths: mate {longer} has more records after {records} pairs")]
    UnpairedMate { records: u64, longer: u8 },
}

/// Where one read (or pair) was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route<'a> {
    pub destination: &'a DestinationKey,
    /// The matched tag, `None` for the default destination
    pub tag: Option<&'a Tag>,
}

impl Route<'_> {
    /// The tag, or `*` for the default
    #[must_use]
    pub fn counter_key(&self) -> &str {
        self.tag.map_or(DEFAULT_MARKER, Tag::as_str)
    }
}

fn leading(sequence: &[u8], n: usize) -> String {
    String::from_utf8_lossy(&sequence[..n.min(sequence.len())]).into_owned()
}

/// Drives reads through a [`Matcher`], trims matched tags and hands reads to
/// a sink.
#[derive(Debug, Clone, Copy)]
pub struct Demultiplexer<'a> {
    matcher: Matcher<'a>,
}

impl<'a> Demultiplexer<'a> {
    pub fn new(matcher: Matcher<'a>) -> Self {
        Self { matcher }
    }

    fn route(&self, result: MatchResult<'a>) -> Route<'a> {
        match result {
            Some(entry) => Route {
                destination: &entry.destination,
                tag: Some(&entry.tag),
            },
            None => Route {
                destination: self.matcher.catalog().default(),
                tag: None,
            },
        }
    }

    /// Match one read and trim the matched tag from its start.
    ///
    /// Unmatched reads are left untouched.
    pub fn route_single<R: TaggedRead>(&self, read: &mut R) -> Route<'a> {
        let route = self.route(self.matcher.select_single(read.sequence()));
        let shown = route.tag.map_or(UNMATCHED_LOG_BASES, Tag::len);
        debug!(
            "Read '{}' starts with {}... and goes to {}",
            read.name(),
            leading(read.sequence(), shown),
            route.counter_key()
        );

        if let Some(tag) = route.tag {
            read.trim_start(tag.len());
        }
        route
    }

    /// Match a read pair and trim the matched tag from both mates
    pub fn route_paired<R: TaggedRead>(&self, read_1: &mut R, read_2: &mut R) -> Route<'a> {
        let route = self.route(
            self.matcher
                .select_paired(read_1.sequence(), read_2.sequence()),
        );
        let shown = route.tag.map_or(UNMATCHED_LOG_BASES, Tag::len);
        debug!(
            "Pair '{}' starts with {}.../{}... and goes to {}",
            read_1.name(),
            leading(read_1.sequence(), shown),
            leading(read_2.sequence(), shown),
            route.counter_key()
        );

        if let Some(tag) = route.tag {
            read_1.trim_start(tag.len());
            read_2.trim_start(tag.len());
        }
        route
    }

    /// Route every read from `source` into `sink`, returning the number of
    /// reads processed.
    ///
    /// # Errors
    ///
    /// Returns `DemuxError::Io` if a read cannot be read or written.
    pub fn run_single<R, I, S>(
        &self,
        source: I,
        sink: &mut S,
        counter: &mut ReadCounter,
    ) -> Result<u64, DemuxError>
    where
        R: TaggedRead,
        I: IntoIterator<Item = io::Result<R>>,
        S: RecordSink<R>,
    {
        let mut n = 0;
        for result in source {
            let mut read = result?;
            let route = self.route_single(&mut read);
            sink.write_single(route.destination, &read)?;
            counter.increment(&route);
            n += 1;
        }
        Ok(n)
    }

    /// Route every pair from two synchronized sources into `sink`, returning
    /// the number of pairs processed.
    ///
    /// # Errors
    ///
    /// Returns `DemuxError::Io` if a read cannot be read or written, or
    /// `DemuxError::UnpairedMate` if one source ends before the other.
    pub fn run_paired<R, I1, I2, S>(
        &self,
        source_1: I1,
        source_2: I2,
        sink: &mut S,
        counter: &mut ReadCounter,
    ) -> Result<u64, DemuxError>
    where
        R: TaggedRead,
        I1: IntoIterator<Item = io::Result<R>>,
        I2: IntoIterator<Item = io::Result<R>>,
        S: RecordSink<R>,
    {
        let mut mates_1 = source_1.into_iter();
        let mut mates_2 = source_2.into_iter();
        let mut n = 0;

        loop {
            let (mut read_1, mut read_2) = match (mates_1.next(), mates_2.next()) {
                (Some(r1), Some(r2)) => (r1?, r2?),
                (None, None) => break,
                (Some(_), None) => {
                    return Err(DemuxError::UnpairedMate {
                        records: n,
                        longer: 1,
                    })
                }
                (None, Some(_)) => {
                    return Err(DemuxError::UnpairedMate {
                        records: n,
                        longer: 2,
                    })
                }
            };

            let route = self.route_paired(&mut read_1, &mut read_2);
            sink.write_paired(route.destination, &read_1, &read_2)?;
            counter.increment(&route);
            n += 1;
        }
        Ok(n)
    }
}
