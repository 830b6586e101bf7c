use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Before/after file sizes for `--report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub original: u64,
    pub reduced: u64,
}

impl SizeReport {
    pub fn new(original: u64, reduced: u64) -> Self {
        Self { original, reduced }
    }

    pub fn from_paths(original: &Path, reduced: &Path) -> io::Result<Self> {
        Ok(Self::new(fs::metadata(original)?.len(), fs::metadata(reduced)?.len()))
    }

    /// Percentage saved. Zero for an empty original; negative if the output grew.
    pub fn reduction_percent(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        100.0 * (self.original as f64 - self.reduced as f64) / self.original as f64
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original size: {} bytes", self.original)?;
        writeln!(f, "Reduced size:  {} bytes", self.reduced)?;
        write!(f, "Reduction:     {:.2}%", self.reduction_percent())
    }
}
