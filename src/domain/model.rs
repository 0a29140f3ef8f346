use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Postman Collection v2.1 schema identifier.
pub const POSTMAN_SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleInfo {
    pub name: String,
}

/// One module file after parsing. `folder` is kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub path: PathBuf,
    pub module_info: ModuleInfo,
    pub folder: Option<Value>,
}

impl Fragment {
    pub fn name(&self) -> &str {
        &self.module_info.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub schema: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
}

impl Variable {
    pub fn new(key: &str, value: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListenPhase {
    /// 每個請求送出前
    Prerequest,
    /// 每個回應收到後
    Test,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventScript {
    pub exec: Vec<String>,
    #[serde(rename = "type")]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub listen: ListenPhase,
    pub script: EventScript,
}

impl Event {
    pub fn javascript(listen: ListenPhase, lines: &[&str]) -> Self {
        Self {
            listen,
            script: EventScript {
                exec: lines.iter().map(|line| line.to_string()).collect(),
                content_type: "text/javascript".to_string(),
            },
        }
    }
}

/// The merged output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub info: CollectionInfo,
    pub item: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    pub variable: Vec<Variable>,
}

impl Collection {
    /// 每個 section 的 `item` 陣列長度加總，缺少時視為 0
    pub fn request_count(&self) -> usize {
        self.item.iter().map(section_request_count).sum()
    }
}

pub fn section_request_count(section: &Value) -> usize {
    section
        .get("item")
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    pub modules: usize,
    pub requests: usize,
    pub variables: usize,
    pub events: usize,
}

impl MergeStats {
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            modules: collection.item.len(),
            requests: collection.request_count(),
            variables: collection.variable.len(),
            events: collection.event.len(),
        }
    }
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Statistics:")?;
        writeln!(f, "  - Modules: {}", self.modules)?;
        writeln!(f, "  - Requests: {}", self.requests)?;
        writeln!(f, "  - Global variables: {}", self.variables)?;
        write!(f, "  - Global events: {}", self.events)
    }
}

/// A fragment that could not be used, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFragment {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub collection: Collection,
    pub discovered: usize,
    pub failed: Vec<SkippedFragment>,
    pub without_folder: Vec<SkippedFragment>,
}

#[derive(Debug, Clone)]
pub struct MergeSummary {
    pub output_path: PathBuf,
    pub discovered: usize,
    pub stats: MergeStats,
    pub failed: Vec<SkippedFragment>,
    pub without_folder: Vec<SkippedFragment>,
}
