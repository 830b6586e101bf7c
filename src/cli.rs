use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::commands::ghost::{Endpoint, GhostOptions, STDIO_MARKER};
use crate::config::Config;

pub const SAFETY_WARNING: &str = "\
WARNING: bamghoster irreversibly removes base quality scores and replaces read names.
This is generally safe for RNA-seq workflows that do not rely on quality scores or read identifiers.
Examples: transcript quantification, gene expression analysis, basic alignment QC.
Do NOT use for workflows that require read-level identity, deduplication, variant calling, or UMI-based processing.";

/// bamghoster: Strip BAM files of read names and base quality scores, preserving only the essentials.
#[derive(Parser, Debug)]
#[command(name = "bamghoster", author, version, about, long_about = None)]
pub struct Args {
    /// Input BAM file (default: stdin)
    #[arg(default_value = STDIO_MARKER)]
    pub input: String,

    /// Output BAM file (default: stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Modify input file in place
    #[arg(short = 'i', long = "inplace")]
    pub inplace: bool,

    /// Set output mtime same as input (for Make/Snakemake)
    #[arg(short = 't', long = "touch")]
    pub touch: bool,

    /// Compression level for BAM output (0-9, default: 8)
    #[arg(short = 'c', long = "compress", value_parser = clap::value_parser!(u32).range(0..=9))]
    pub compress: Option<u32>,

    /// Print original and final size with percentage reduction to stderr
    #[arg(long = "report")]
    pub report: bool,

    /// Extra BGZF compression threads for the output
    #[arg(short = '@', long = "threads")]
    pub threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Checks flag combinations; run after the safety warning is printed.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.inplace && self.input == STDIO_MARKER {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                "In-place mode requires a regular input file.",
            ));
        }
        if self.inplace && self.output_marker() != STDIO_MARKER {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                "Cannot use --inplace with --output.",
            ));
        }
        Ok(())
    }

    fn output_marker(&self) -> &str {
        self.output.as_deref().unwrap_or(STDIO_MARKER)
    }

    pub fn ghost_options(&self, config: &Config) -> GhostOptions {
        GhostOptions::new(Endpoint::parse(&self.input), Endpoint::parse(self.output_marker()))
            .in_place(self.inplace)
            .touch(self.touch)
            .report(self.report)
            .compression_level(self.compress.unwrap_or(config.compression_level))
            .threads(self.threads.unwrap_or(config.threads))
            .show_progress(true)
    }
}
