//! Shared utilities for docpdf crates.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Atomically write `contents` to `path`, ensuring readers never observe
/// partial content. The write is performed via a temporary file in the same
/// directory followed by an atomic rename. Missing parent directories are
/// created.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Path::new(".").to_path_buf());
    fs::create_dir_all(&parent)?;

    let mut tmp = Builder::new().prefix(".docpdf").tempfile_in(&parent)?;

    tmp.as_file_mut().write_all(contents)?;
    tmp.as_file_mut().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(path) {
            let perm = metadata.permissions().mode();
            let _ = fs::set_permissions(tmp.path(), fs::Permissions::from_mode(perm));
        }
    }

    tmp.persist(path).map(|_| ()).map_err(|err| err.error)
}

/// Same as [`atomic_write`] for string payloads.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
    atomic_write(path, contents.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested/out/doc.pdf");

        atomic_write(&target, b"%PDF-1.7").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn replaces_existing_content() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("README.html");
        fs::write(&target, "old").unwrap();

        atomic_write_str(&target, "<html></html>").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "<html></html>");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".docpdf"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
