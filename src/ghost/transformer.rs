use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rust_htslib::bam;

use super::record::{AlignmentRecord, ZERO_QUALITY};
use super::remapper::IdentifierRemapper;

/// Rewrites records one at a time: surrogate read name, zeroed qualities.
///
/// Owns the run's [`IdentifierRemapper`]; create one transformer per run.
#[derive(Debug, Default)]
pub struct Transformer {
    remapper: IdentifierRemapper,
    qualities: Vec<u8>,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform<R: AlignmentRecord>(&mut self, record: &mut R) {
        let surrogate = self.remapper.surrogate_for(record.identifier());

        self.qualities.clear();
        self.qualities.resize(record.qualities().len(), ZERO_QUALITY);

        record.rewrite(surrogate.as_bytes(), &self.qualities);
    }

    pub fn distinct_identifiers(&self) -> usize {
        self.remapper.len()
    }
}

/// Destination for transformed records.
pub trait RecordSink<R> {
    fn write_record(&mut self, record: &R) -> Result<()>;
}

impl RecordSink<bam::Record> for bam::Writer {
    fn write_record(&mut self, record: &bam::Record) -> Result<()> {
        self.write(record).context("Failed to write BAM record")
    }
}

impl<R: Clone> RecordSink<R> for Vec<R> {
    fn write_record(&mut self, record: &R) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Feeds every record through `transformer` and into `sink`, in input order.
///
/// Stops at the first read or write error. Returns the number of records written.
pub fn transform_records<R, I, S>(
    records: I,
    transformer: &mut Transformer,
    sink: &mut S,
    progress: &ProgressBar,
) -> Result<u64>
where
    R: AlignmentRecord,
    I: IntoIterator<Item = Result<R>>,
    S: RecordSink<R>,
{
    let mut written = 0u64;
    for record_result in records {
        let mut record = record_result
            .with_context(|| format!("Failed to read record {}", written + 1))?;
        transformer.transform(&mut record);
        sink.write_record(&record)?;
        written += 1;

        if written % 10_000 == 0 {
            progress.set_message(format!("Ghosted {} records", written));
        }
    }
    progress.set_message(format!("Ghosted {} records", written));
    Ok(written)
}
