use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage resolving relative paths against a working directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn is_dir(&self, path: &Path) -> bool {
        self.resolve(path).is_dir()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.resolve(dir))? {
            let entry = entry?;
            // 跟隨符號連結，指向一般檔案的連結也算模組
            if !entry.path().is_file() {
                continue;
            }
            // 非 UTF-8 檔名不可能符合命名規則
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(self.resolve(path))?;
        Ok(data)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // 先寫暫存檔再 rename，失敗時不留下半截的輸出
        let mut temp_name = full_path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        if let Err(e) = fs::write(&temp_path, data) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&temp_path, &full_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use crate::utils::error::MergeError;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// In-memory storage for unit tests.
    #[derive(Default)]
    pub(crate) struct MemoryStorage {
        files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
        dirs: Vec<PathBuf>,
        pub(crate) fail_writes: bool,
    }

    impl MemoryStorage {
        pub(crate) fn with_dir(dir: &str) -> Self {
            Self {
                dirs: vec![PathBuf::from(dir)],
                ..Self::default()
            }
        }

        pub(crate) fn add_file(&self, path: &str, contents: &str) {
            self.files
                .borrow_mut()
                .insert(PathBuf::from(path), contents.as_bytes().to_vec());
        }

        pub(crate) fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(Path::new(path)).cloned()
        }
    }

    impl Storage for MemoryStorage {
        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.iter().any(|dir| dir.as_path() == path)
        }

        fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
            // 刻意以逆序回傳，確保呼叫端自行排序
            Ok(self
                .files
                .borrow()
                .keys()
                .rev()
                .filter(|path| path.parent() == Some(dir))
                .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
                .collect())
        }

        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                MergeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                ))
            })
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(MergeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only storage",
                )));
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }
}
