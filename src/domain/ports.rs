use crate::utils::error::Result;
use std::path::Path;

/// File access used by the merge pipeline.
pub trait Storage {
    fn is_dir(&self, path: &Path) -> bool;
    /// Names of the regular files directly inside `dir`.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>>;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Replaces `path` with `data`; an interrupted write must not leave a truncated file.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn template_path(&self) -> Option<&str>;
}
