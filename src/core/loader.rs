use crate::domain::model::{Fragment, ModuleInfo};
use crate::domain::ports::Storage;
use crate::utils::error::{MergeError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Deserialize)]
struct RawFragment {
    module_info: ModuleInfo,
    // 缺少 folder 不算載入失敗，合併時才處理
    folder: Option<Value>,
}

pub fn parse_fragment(path: &Path, bytes: &[u8]) -> Result<Fragment> {
    let raw: RawFragment =
        serde_json::from_slice(bytes).map_err(|e| MergeError::FragmentParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(Fragment {
        path: path.to_path_buf(),
        module_info: raw.module_info,
        folder: raw.folder,
    })
}

/// Reads and parses one module file. Any failure is a `FragmentParseError`.
pub fn load_fragment<S: Storage>(storage: &S, path: &Path) -> Result<Fragment> {
    let bytes = storage
        .read_file(path)
        .map_err(|e| MergeError::FragmentParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    parse_fragment(path, &bytes)
}
