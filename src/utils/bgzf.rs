use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Empty BGZF block htslib appends when a BAM is closed successfully.
pub const BGZF_EOF: [u8; 28] = [
    0x1f, 0x8b, 0x08, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x06, 0x00, 0x42, 0x43,
    0x02, 0x00, 0x1b, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Fails unless `path` is a regular file ending in the BGZF EOF block.
///
/// rust-htslib discards the status of the final close, so a short write on the
/// last blocks only shows up as a missing EOF marker.
pub fn ensure_complete(path: &Path) -> Result<()> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to reopen {}", path.display()))?;
    let metadata = file.metadata()?;
    if !metadata.is_file() || metadata.len() < BGZF_EOF.len() as u64 {
        bail!("Output {} is incomplete: no BGZF EOF block", path.display());
    }

    let mut tail = [0u8; 28];
    file.seek(SeekFrom::End(-(BGZF_EOF.len() as i64)))?;
    file.read_exact(&mut tail)
        .with_context(|| format!("Failed to read the end of {}", path.display()))?;
    if tail != BGZF_EOF {
        bail!("Output {} is incomplete: no BGZF EOF block", path.display());
    }
    Ok(())
}
