use rust_htslib::bam;

/// Phred 0, written as `!` in SAM text.
pub const ZERO_QUALITY: u8 = 0;

/// The parts of an alignment record the anonymizer touches.
///
/// Everything not reachable through this trait (sequence, flags, position,
/// CIGAR, mate fields, aux tags) must survive `rewrite` unchanged.
pub trait AlignmentRecord {
    fn identifier(&self) -> &[u8];

    fn qualities(&self) -> &[u8];

    /// Replaces the read name and the base qualities in one step.
    /// `qualities` always has the same length as the current ones.
    fn rewrite(&mut self, identifier: &[u8], qualities: &[u8]);
}

impl AlignmentRecord for bam::Record {
    fn identifier(&self) -> &[u8] {
        self.qname()
    }

    fn qualities(&self) -> &[u8] {
        self.qual()
    }

    fn rewrite(&mut self, identifier: &[u8], qualities: &[u8]) {
        // set() rebuilds the variable-length block; aux data is carried over
        let cigar = self.cigar().take();
        let seq = self.seq().as_bytes();
        self.set(identifier, Some(&cigar), &seq, qualities);
    }
}
