use noodles::fastq;

/// A read whose leading bases can be matched against a tag and trimmed.
///
/// Implementors must keep any per-base annotation (quality scores) in
/// lockstep with the sequence when trimming.
pub trait TaggedRead {
    /// Read name, used for logging only
    fn name(&self) -> String;

    /// The bases of the read
    fn sequence(&self) -> &[u8];

    /// Remove the first `len` bases (clamped to the read length)
    fn trim_start(&mut self, len: usize);
}

impl TaggedRead for fastq::Record {
    fn name(&self) -> String {
        String::from_utf8_lossy(fastq::Record::name(self)).into_owned()
    }

    fn sequence(&self) -> &[u8] {
        fastq::Record::sequence(self)
    }

    fn trim_start(&mut self, len: usize) {
        let n = len.min(fastq::Record::sequence(self).len());
        self.sequence_mut().drain(..n);

        let q = n.min(self.quality_scores().len());
        self.quality_scores_mut().drain(..q);
    }
}
