use crate::core::merger::CollectionMerger;
use crate::domain::model::MergeSummary;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

/// Runs merge then save. Nothing is written unless the merge succeeded.
pub struct MergeEngine<S: Storage> {
    merger: CollectionMerger<S>,
    output_path: PathBuf,
}

impl<S: Storage> MergeEngine<S> {
    pub fn new<P: Into<PathBuf>>(merger: CollectionMerger<S>, output_path: P) -> Self {
        Self {
            merger,
            output_path: output_path.into(),
        }
    }

    pub fn run(&self) -> Result<MergeSummary> {
        self.run_at(Local::now().naive_local())
    }

    pub fn run_at(&self, generated_at: NaiveDateTime) -> Result<MergeSummary> {
        let outcome = self.merger.merge_collections(generated_at)?;
        let stats = self
            .merger
            .save_collection(&outcome.collection, &self.output_path)?;

        tracing::debug!(
            "Run finished: {} discovered, {} failed, {} without folder",
            outcome.discovered,
            outcome.failed.len(),
            outcome.without_folder.len()
        );

        Ok(MergeSummary {
            output_path: self.output_path.clone(),
            discovered: outcome.discovered,
            stats,
            failed: outcome.failed,
            without_folder: outcome.without_folder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::config::MergeProfile;
    use crate::domain::model::MergeStats;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn write_module(dir: &std::path::Path, file: &str, name: &str, requests: usize) {
        let items: Vec<serde_json::Value> = (0..requests)
            .map(|i| serde_json::json!({"name": format!("req-{}", i)}))
            .collect();
        let content = serde_json::json!({
            "module_info": {"name": name},
            "folder": {"name": name, "item": items}
        });
        fs::write(dir.join(file), content.to_string()).unwrap();
    }

    #[test]
    fn test_run_writes_output_and_reports_stats() {
        let temp_dir = TempDir::new().unwrap();
        let modules = temp_dir.path().join("postman-collections");
        fs::create_dir(&modules).unwrap();
        write_module(&modules, "01-auth.json", "Auth", 3);
        write_module(&modules, "02-users.json", "Users", 5);

        let storage = LocalStorage::new(temp_dir.path());
        let merger = CollectionMerger::new(storage, MergeProfile::Full);
        let engine = MergeEngine::new(merger, "collection.json");

        let summary = engine.run_at(at(9)).unwrap();

        assert_eq!(
            summary.stats,
            MergeStats {
                modules: 2,
                requests: 8,
                variables: 3,
                events: 2,
            }
        );
        assert!(temp_dir.path().join("collection.json").exists());
    }

    #[test]
    fn test_rerun_differs_only_in_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let modules = temp_dir.path().join("postman-collections");
        fs::create_dir(&modules).unwrap();
        write_module(&modules, "01-auth.json", "Auth", 2);

        let engine = MergeEngine::new(
            CollectionMerger::new(LocalStorage::new(temp_dir.path()), MergeProfile::Full),
            "collection.json",
        );
        let output = temp_dir.path().join("collection.json");

        engine.run_at(at(9)).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        engine.run_at(at(9)).unwrap();
        let second = fs::read_to_string(&output).unwrap();
        engine.run_at(at(17)).unwrap();
        let third = fs::read_to_string(&output).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, third);
        assert_eq!(
            first.replace("2024-01-15 09:00:00", ""),
            third.replace("2024-01-15 17:00:00", "")
        );
    }

    #[test]
    fn test_failed_run_leaves_existing_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("postman-collections")).unwrap();
        fs::write(temp_dir.path().join("collection.json"), "previous").unwrap();

        let engine = MergeEngine::new(
            CollectionMerger::new(LocalStorage::new(temp_dir.path()), MergeProfile::Full),
            "collection.json",
        );

        assert!(engine.run_at(at(9)).is_err());
        let content = fs::read_to_string(temp_dir.path().join("collection.json")).unwrap();
        assert_eq!(content, "previous");
    }
}
