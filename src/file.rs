// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::config::options::OutputLayout;
use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Create the raw and sticker folders for one set.
pub fn ensure_set_dirs(layout: &OutputLayout, set_id: u32) -> Result<()> {
    ensure_directory(&layout.raw_dir(set_id))?;
    ensure_directory(&layout.sticker_dir(set_id))
}

/// Create/truncate `path` and write `bytes` to it.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(bytes).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Best-effort removal of a half-written output so the next run retries it.
pub fn remove_partial(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!("Removed partial file {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => debug!("Could not remove {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_creates_and_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_directory(&nested).unwrap();

        let file = tmp.path().join("f");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(ensure_directory(&file), Err(Error::NotADirectory(_))));
    }

    #[test]
    fn set_dirs_follow_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(tmp.path());
        ensure_set_dirs(&layout, 12).unwrap();
        assert!(tmp.path().join("raw").join("12").is_dir());
        assert!(tmp.path().join("whatsapp").join("12").is_dir());
    }

    #[test]
    fn write_truncates_and_remove_is_quiet() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("out.bin");
        write_bytes(&p, b"longer contents").unwrap();
        write_bytes(&p, b"short").unwrap();
        assert_eq!(fs::read(&p).unwrap(), b"short");

        remove_partial(&p);
        assert!(!p.exists());
        remove_partial(&p);
    }
}
