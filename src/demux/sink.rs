use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use noodles::fastq;
use tracing::info;

use crate::catalog::store::TagCatalog;
use crate::core::types::{DestinationKey, ReadLayout};
use crate::utils::validation::output_file_name;

/// Where routed reads are written, keyed by destination
pub trait RecordSink<R> {
    /// Write one single-end read
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the destination cannot be written.
    fn write_single(&mut self, destination: &DestinationKey, read: &R) -> io::Result<()>;

    /// Write both mates of a pair
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the destination cannot be written.
    fn write_paired(
        &mut self,
        destination: &DestinationKey,
        read_1: &R,
        read_2: &R,
    ) -> io::Result<()>;
}

enum Outputs {
    Single(BufWriter<File>),
    Paired(BufWriter<File>, BufWriter<File>),
}

/// FASTQ files, one per destination (two for paired-end), created up front.
///
/// Tags sharing a destination share its files.
pub struct FastqSinks {
    layout: ReadLayout,
    outputs: HashMap<DestinationKey, Outputs>,
    paths: Vec<PathBuf>,
}

fn create(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to create {}: {e}", path.display()),
        )
    })
}

fn write_record(out: &mut BufWriter<File>, record: &fastq::Record) -> io::Result<()> {
    fastq::io::Writer::new(out).write_record(record)
}

impl FastqSinks {
    /// Create the output files for every destination in `catalog`.
    ///
    /// Files are named `{prefix}-{name}.fastq`, or `{prefix}-{name}_1.fastq`
    /// and `{prefix}-{name}_2.fastq` for paired-end reads.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if any output file cannot be created.
    pub fn create(catalog: &TagCatalog, prefix: &str, layout: ReadLayout) -> io::Result<Self> {
        let mut outputs = HashMap::new();
        let mut paths = Vec::new();

        for destination in catalog.destinations() {
            let name = destination.as_str();
            let out = match layout {
                ReadLayout::SingleEnd => {
                    let path = PathBuf::from(output_file_name(prefix, name, None));
                    let out = Outputs::Single(create(&path)?);
                    paths.push(path);
                    out
                }
                ReadLayout::PairedEnd => {
                    let path_1 = PathBuf::from(output_file_name(prefix, name, Some(1)));
                    let path_2 = PathBuf::from(output_file_name(prefix, name, Some(2)));
                    let out = Outputs::Paired(create(&path_1)?, create(&path_2)?);
                    paths.push(path_1);
                    paths.push(path_2);
                    out
                }
            };
            outputs.insert(destination.clone(), out);
        }

        info!(files = paths.len(), "Created output files");

        Ok(Self {
            layout,
            outputs,
            paths,
        })
    }

    /// Paths of all created files
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn output(&mut self, destination: &DestinationKey) -> io::Result<&mut Outputs> {
        self.outputs.get_mut(destination).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No output for destination '{destination}'"),
            )
        })
    }

    /// Flush every file
    ///
    /// # Errors
    ///
    /// Returns the first I/O error met while flushing.
    pub fn finish(mut self) -> io::Result<()> {
        for out in self.outputs.values_mut() {
            match out {
                Outputs::Single(w) => w.flush()?,
                Outputs::Paired(w1, w2) => {
                    w1.flush()?;
                    w2.flush()?;
                }
            }
        }
        Ok(())
    }
}

impl RecordSink<fastq::Record> for FastqSinks {
    fn write_single(
        &mut self,
        destination: &DestinationKey,
        read: &fastq::Record,
    ) -> io::Result<()> {
        match self.output(destination)? {
            Outputs::Single(w) => write_record(w, read),
            Outputs::Paired(..) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "single-end read written to paired-end outputs",
            )),
        }
    }

    fn write_paired(
        &mut self,
        destination: &DestinationKey,
        read_1: &fastq::Record,
        read_2: &fastq::Record,
    ) -> io::Result<()> {
        let layout = self.layout;
        match self.output(destination)? {
            Outputs::Paired(w1, w2) => {
                write_record(w1, read_1)?;
                write_record(w2, read_2)
            }
            Outputs::Single(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("read pair written to {layout:?} outputs"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tag_file::parse_tag_text;
    use std::io::Cursor;

    fn read_one(text: &str) -> fastq::Record {
        let mut reader = fastq::io::Reader::new(Cursor::new(text.as_bytes().to_vec()));
        reader.records().next().unwrap().unwrap()
    }

    #[test]
    fn test_single_end_files() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").display().to_string();
        let catalog = parse_tag_text("AAAA pool\nCCCC pool\nGGGG solo\n* trash\n").unwrap();

        let mut sinks = FastqSinks::create(&catalog, &prefix, ReadLayout::SingleEnd).unwrap();
        assert_eq!(sinks.paths().len(), 3);

        let record = read_one("@r1\nACGT\n+\nIIII\n");
        sinks
            .write_single(&DestinationKey::new("pool"), &record)
            .unwrap();
        sinks.finish().unwrap();

        let written = std::fs::read_to_string(dir.path().join("run-pool.fastq")).unwrap();
        assert_eq!(written, "@r1\nACGT\n+\nIIII\n");
        assert!(dir.path().join("run-solo.fastq").exists());
        assert!(dir.path().join("run-trash.fastq").exists());
    }

    #[test]
    fn test_paired_end_files() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").display().to_string();
        let catalog = parse_tag_text("AAAA s\n* trash\n").unwrap();

        let mut sinks = FastqSinks::create(&catalog, &prefix, ReadLayout::PairedEnd).unwrap();
        assert_eq!(sinks.paths().len(), 4);

        let r1 = read_one("@p/1\nAC\n+\nII\n");
        let r2 = read_one("@p/2\nGT\n+\nII\n");
        sinks
            .write_paired(&DestinationKey::new("trash"), &r1, &r2)
            .unwrap();
        assert!(sinks.write_single(&DestinationKey::new("trash"), &r1).is_err());
        sinks.finish().unwrap();

        let m1 = std::fs::read_to_string(dir.path().join("run-trash_1.fastq")).unwrap();
        let m2 = std::fs::read_to_string(dir.path().join("run-trash_2.fastq")).unwrap();
        assert_eq!(m1, "@p/1\nAC\n+\nII\n");
        assert_eq!(m2, "@p/2\nGT\n+\nII\n");
    }

    #[test]
    fn test_unknown_destination() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").display().to_string();
        let catalog = parse_tag_text("AAAA s\n* trash\n").unwrap();
        let mut sinks = FastqSinks::create(&catalog, &prefix, ReadLayout::SingleEnd).unwrap();

        let record = read_one("@r\nA\n+\nI\n");
        let err = sinks
            .write_single(&DestinationKey::new("elsewhere"), &record)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
