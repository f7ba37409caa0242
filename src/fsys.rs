//! Filesystem collaborator
//!
//! All file access in the crate goes through the [`Fsys`] trait so tests can
//! substitute an in-memory filesystem instead of touching disk.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Capability object providing byte-stream access to files.
pub trait Fsys: Send + Sync {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Open a file for reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;

    /// The current working directory.
    fn getwd(&self) -> io::Result<PathBuf>;

    /// Write `data` to a file, creating it if necessary.
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

/// Production filesystem backed by `std::fs`.
#[derive(Debug, Default)]
pub struct OsFs;

impl Fsys for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(fs::File::open(path)?))
    }

    fn getwd(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }
}


#[cfg(test)]
mod tests {
    use super::mem::MemFs;
    use super::*;
    use std::io::Write;

    #[test]
    fn test_os_fs_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"http://foo.bar").unwrap();

        let fsys = OsFs;
        assert!(fsys.exists(file.path()));

        let mut content = String::new();
        fsys.open(file.path())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "http://foo.bar");
    }

    #[test]
    fn test_os_fs_open_missing_file() {
        let fsys = OsFs;
        assert!(!fsys.exists(Path::new("non_existing_file.txt")));
        assert!(fsys.open(Path::new("non_existing_file.txt")).is_err());
    }

    #[test]
    fn test_mem_fs_open_and_exists() {
        let fsys = MemFs::new().with_file("/repo/README.md", "hello");

        assert!(fsys.exists(Path::new("/repo/README.md")));
        assert!(!fsys.exists(Path::new("/repo/missing.md")));

        let mut content = String::new();
        fsys.open(Path::new("/repo/README.md"))
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_mem_fs_broken_file_fails_to_open() {
        let fsys = MemFs::new().with_broken_file("/repo/locked.md");
        assert!(fsys.open(Path::new("/repo/locked.md")).is_err());
    }

    #[test]
    fn test_mem_fs_write_is_observable() {
        let fsys = MemFs::new();
        fsys.write(Path::new("/repo/.deadlink.toml"), b"timeout = 1")
            .unwrap();

        assert!(fsys.exists(Path::new("/repo/.deadlink.toml")));
        assert_eq!(
            fsys.written_content(Path::new("/repo/.deadlink.toml")),
            Some(b"timeout = 1".to_vec())
        );
    }
}
