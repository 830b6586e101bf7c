use anyhow::{bail, Context, Result};
use rust_htslib::bam::{self, Read};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ghost::{transform_records, Transformer};
use crate::utils::bgzf::ensure_complete;
use crate::utils::file_times::copy_times;
use crate::utils::inplace::replace_atomically;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use crate::utils::report::SizeReport;

/// Marker for stdin/stdout on the command line.
pub const STDIO_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Stdio,
    File(PathBuf),
}

impl Endpoint {
    pub fn parse(marker: &str) -> Self {
        if marker == STDIO_MARKER {
            Endpoint::Stdio
        } else {
            Endpoint::File(PathBuf::from(marker))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Endpoint::Stdio => None,
            Endpoint::File(path) => Some(path.as_path()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GhostOptions {
    pub input: Endpoint,
    pub output: Endpoint,
    pub in_place: bool,
    pub touch: bool,
    pub report: bool,
    pub compression_level: u32,
    pub threads: usize,
    pub show_progress: bool,
}

impl GhostOptions {
    pub fn new(input: Endpoint, output: Endpoint) -> Self {
        Self {
            input,
            output,
            in_place: false,
            touch: false,
            report: false,
            compression_level: 8,
            threads: 1,
            show_progress: false,
        }
    }

    pub fn in_place(mut self, in_place: bool) -> Self {
        self.in_place = in_place;
        self
    }

    pub fn touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    pub fn compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.in_place && self.input == Endpoint::Stdio {
            bail!("In-place mode requires a regular input file");
        }
        if self.in_place && self.output != Endpoint::Stdio {
            bail!("Cannot use in-place mode with an explicit output");
        }
        if self.compression_level > 9 {
            bail!(
                "Compression level must be between 0 and 9, got {}",
                self.compression_level
            );
        }
        Ok(())
    }

    /// Where the transformed stream ends up once the run has finalized.
    fn destination(&self) -> Option<&Path> {
        if self.in_place {
            self.input.path()
        } else {
            self.output.path()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostSummary {
    pub records: u64,
    pub identifiers: usize,
}

/// Strips read names and qualities from `options.input`.
///
/// In in-place mode the input is only replaced once the whole stream has been
/// written, closed and synced; any failure before that leaves it untouched.
pub fn run(options: &GhostOptions) -> Result<GhostSummary> {
    options.validate()?;

    let original = options
        .input
        .path()
        .filter(|_| options.destination().is_some())
        .map(|path| (path, fs::metadata(path)));

    let summary = match (&options.input, options.in_place) {
        (Endpoint::File(target), true) => replace_atomically(target, |temp_path| {
            ghost_stream(&options.input, &Endpoint::File(temp_path.to_path_buf()), options)
        })?,
        _ => ghost_stream(&options.input, &options.output, options)?,
    };

    log::info!(
        "Ghosted {} records ({} distinct read names)",
        summary.records,
        summary.identifiers
    );

    if let (Some((source, metadata)), Some(destination)) = (original, options.destination()) {
        if options.touch {
            match &metadata {
                Ok(metadata) => copy_times(metadata, destination)?,
                Err(e) => bail!("Failed to stat {}: {}", source.display(), e),
            }
        }

        if options.report {
            let sizes = metadata.and_then(|metadata| {
                Ok(SizeReport::new(metadata.len(), fs::metadata(destination)?.len()))
            });
            match sizes {
                Ok(report) => eprintln!("{}", report),
                Err(e) => log::warn!("Error reporting size reduction: {}", e),
            }
        }
    }

    Ok(summary)
}

fn ghost_stream(input: &Endpoint, output: &Endpoint, options: &GhostOptions) -> Result<GhostSummary> {
    let mut reader = match input {
        Endpoint::Stdio => bam::Reader::from_stdin().context("Failed to read BAM from stdin")?,
        Endpoint::File(path) => bam::Reader::from_path(path)
            .with_context(|| format!("Failed to open input BAM {}", path.display()))?,
    };
    let header = bam::Header::from_template(reader.header());

    let mut writer = match output {
        Endpoint::Stdio => bam::Writer::from_stdout(&header, bam::Format::Bam)
            .context("Failed to write BAM to stdout")?,
        Endpoint::File(path) => bam::Writer::from_path(path, &header, bam::Format::Bam)
            .with_context(|| format!("Failed to create output BAM {}", path.display()))?,
    };
    writer
        .set_compression_level(bam::CompressionLevel::Level(options.compression_level))
        .context("Failed to set compression level")?;
    if options.threads > 1 {
        writer
            .set_threads(options.threads)
            .context("Failed to set writer threads")?;
    }

    let progress = ProgressBarBuilder::new("Ghosting records...")
        .hidden(!options.show_progress)
        .with_tick(Duration::from_millis(200))
        .build()?;

    let mut transformer = Transformer::new();
    let records = reader
        .records()
        .map(|record| record.context("Malformed BAM record"));
    let written = transform_records(records, &mut transformer, &mut writer, &progress)?;

    // The writer flushes and closes on drop; it must be gone before any rename.
    drop(writer);
    drop(reader);
    progress.finish_and_clear();

    if let Endpoint::File(path) = output {
        ensure_complete(path)?;
    }

    Ok(GhostSummary {
        records: written,
        identifiers: transformer.distinct_identifiers(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stdio_marker() {
        assert_eq!(Endpoint::parse("-"), Endpoint::Stdio);
        assert_eq!(
            Endpoint::parse("in.bam"),
            Endpoint::File(PathBuf::from("in.bam"))
        );
        assert_eq!(Endpoint::Stdio.path(), None);
    }

    #[test]
    fn in_place_with_stdin_is_rejected() {
        let options = GhostOptions::new(Endpoint::Stdio, Endpoint::Stdio).in_place(true);
        let err = run(&options).unwrap_err();
        assert!(err.to_string().contains("regular input file"));
    }

    #[test]
    fn in_place_with_output_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bam");
        fs::write(&input, b"not touched").unwrap();
        let options = GhostOptions::new(
            Endpoint::File(input.clone()),
            Endpoint::File(dir.path().join("out.bam")),
        )
        .in_place(true);

        assert!(run(&options).is_err());
        assert_eq!(fs::read(&input).unwrap(), b"not touched");
        assert!(!dir.path().join("out.bam").exists());
    }

    #[test]
    fn destination_follows_mode() {
        let options = GhostOptions::new(Endpoint::parse("a.bam"), Endpoint::parse("b.bam"));
        assert_eq!(options.destination(), Some(Path::new("b.bam")));
        let options = GhostOptions::new(Endpoint::parse("a.bam"), Endpoint::Stdio).in_place(true);
        assert_eq!(options.destination(), Some(Path::new("a.bam")));
        let options = GhostOptions::new(Endpoint::parse("a.bam"), Endpoint::Stdio);
        assert_eq!(options.destination(), None);
    }
}
