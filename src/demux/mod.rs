//! The demultiplexing loop and its collaborators.
//!
//! - [`Demultiplexer`]: matches each read or pair, trims the tag and routes it
//! - [`RecordSink`]: destination-keyed output; [`FastqSinks`] writes FASTQ files
//! - [`ReadCounter`]: per-tag counts for the final report
//!
//! Processing is single-pass: each unit is matched, trimmed, written and
//! counted before the next one is read.
//!
//! [`Demultiplexer`]: run::Demultiplexer
//! [`RecordSink`]: sink::RecordSink
//! [`FastqSinks`]: sink::FastqSinks
//! [`ReadCounter`]: metrics::ReadCounter

pub mod metrics;
pub mod run;
pub mod sink;
