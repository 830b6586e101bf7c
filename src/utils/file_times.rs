use anyhow::{Context, Result};
use std::fs::{File, FileTimes, Metadata};
use std::path::Path;

/// Sets the access and modification times of `target` to those in `source`.
pub fn copy_times(source: &Metadata, target: &Path) -> Result<()> {
    let times = FileTimes::new()
        .set_accessed(source.accessed()?)
        .set_modified(source.modified()?);

    File::options()
        .write(true)
        .open(target)
        .and_then(|file| file.set_times(times))
        .with_context(|| format!("Failed to set timestamps on {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime};

    #[test]
    fn copies_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.bam");
        let new = dir.path().join("new.bam");
        fs::write(&old, b"x").unwrap();
        fs::write(&new, b"y").unwrap();

        let past = SystemTime::now() - Duration::from_secs(86_400 * 30);
        File::options()
            .write(true)
            .open(&old)
            .unwrap()
            .set_times(FileTimes::new().set_accessed(past).set_modified(past))
            .unwrap();

        copy_times(&fs::metadata(&old).unwrap(), &new).unwrap();

        assert_eq!(
            fs::metadata(&new).unwrap().modified().unwrap(),
            fs::metadata(&old).unwrap().modified().unwrap()
        );
        assert_eq!(fs::read(&new).unwrap(), b"y");
    }
}
