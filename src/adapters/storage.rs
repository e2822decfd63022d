use crate::core::{Storage, WriteMode};
use crate::utils::error::{Result, RewriteError};
use std::fs;
use std::io::Write;
use std::borrow::Cow;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage {
    mode: WriteMode,
}

impl LocalStorage {
    pub fn new(mode: WriteMode) -> Self {
        Self { mode }
    }

    /// 暫存檔必須和目標同一目錄，rename 才會是原子操作。
    /// Symlink 先解析成實際檔案，rename 蓋掉的是目標檔而不是連結本身
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let target = Self::resolve_symlink(path)?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| RewriteError::file_write(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| RewriteError::file_write(path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| RewriteError::file_write(path, e))?;

        // 保留原檔權限
        if let Ok(metadata) = fs::metadata(&target) {
            fs::set_permissions(tmp.path(), metadata.permissions())
                .map_err(|e| RewriteError::file_write(path, e))?;
        }

        tmp.persist(&target)
            .map_err(|e| RewriteError::file_write(path, e.error))?;
        Ok(())
    }

    fn resolve_symlink(path: &Path) -> Result<Cow<'_, Path>> {
        match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                let resolved =
                    fs::canonicalize(path).map_err(|e| RewriteError::file_write(path, e))?;
                tracing::debug!("{} resolves to {}", path.display(), resolved.display());
                Ok(Cow::Owned(resolved))
            }
            _ => Ok(Cow::Borrowed(path)),
        }
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| RewriteError::file_read(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        tracing::debug!("Writing {} with {:?} mode", path.display(), self.mode);
        match self.mode {
            WriteMode::InPlace => {
                fs::write(path, content).map_err(|e| RewriteError::file_write(path, e))
            }
            WriteMode::Atomic => Self::write_atomic(path, content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_place_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.tsx");
        let storage = LocalStorage::new(WriteMode::InPlace);

        storage.write_text(&path, "first\n").unwrap();
        storage.write_text(&path, "x\n").unwrap();

        assert_eq!(storage.read_text(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_atomic_write_replaces_file_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "old content\n").unwrap();

        let storage = LocalStorage::new(WriteMode::Atomic);
        storage.write_text(&path, "new content\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new content\n");
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_through_symlink_keeps_link() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("page.tsx");
        let link = dir.path().join("page-link.tsx");
        fs::write(&real, "old content\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        LocalStorage::new(WriteMode::Atomic)
            .write_text(&link, "new content\n")
            .unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new content\n");
        assert_eq!(fs::read_to_string(&link).unwrap(), "new content\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = LocalStorage::default()
            .read_text(&dir.path().join("missing.tsx"))
            .unwrap_err();

        match err {
            RewriteError::FileAccess { path, source, .. } => {
                assert!(path.ends_with("missing.tsx"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_atomic_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("page.tsx");
        let err = LocalStorage::new(WriteMode::Atomic)
            .write_text(&path, "x")
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
