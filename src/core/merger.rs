use crate::config::defaults::DEFAULT_INPUT_DIR;
use crate::config::template::TemplateConfig;
use crate::config::MergeProfile;
use crate::core::assembler::assemble_envelope;
use crate::core::discovery::discover_fragments;
use crate::core::loader::load_fragment;
use crate::domain::model::{
    section_request_count, Collection, Fragment, MergeOutcome, MergeStats, SkippedFragment,
};
use crate::domain::ports::Storage;
use crate::utils::error::{MergeError, Result};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Owns everything one merge run needs: storage, input directory and template.
pub struct CollectionMerger<S: Storage> {
    storage: S,
    input_dir: PathBuf,
    template: TemplateConfig,
}

impl<S: Storage> CollectionMerger<S> {
    pub fn new(storage: S, profile: MergeProfile) -> Self {
        Self {
            storage,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            template: TemplateConfig::for_profile(profile),
        }
    }

    pub fn with_input_dir<P: Into<PathBuf>>(mut self, input_dir: P) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_template(mut self, template: TemplateConfig) -> Self {
        self.template = template;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn load_module_files(&self) -> Result<Vec<PathBuf>> {
        discover_fragments(
            &self.storage,
            &self.input_dir,
            self.template.fragment_filter(),
        )
    }

    /// Loads one module. A failure is logged and returned as a skip record
    /// so the batch can continue.
    pub fn load_module(&self, path: &Path) -> std::result::Result<Fragment, SkippedFragment> {
        match load_fragment(&self.storage, path) {
            Ok(fragment) => {
                tracing::info!("✓ Loaded module: {}", fragment.name());
                Ok(fragment)
            }
            Err(e) => {
                tracing::warn!("✗ {}", e);
                let reason = match e {
                    MergeError::FragmentParseError { message, .. } => message,
                    other => other.to_string(),
                };
                Err(SkippedFragment {
                    path: path.to_path_buf(),
                    reason,
                })
            }
        }
    }

    pub fn merge_collections(&self, generated_at: NaiveDateTime) -> Result<MergeOutcome> {
        tracing::info!("Merging modules from {}", self.input_dir.display());

        let module_files = self.load_module_files()?;
        tracing::info!("Found {} module files", module_files.len());

        let mut modules = Vec::with_capacity(module_files.len());
        let mut failed = Vec::new();
        for path in &module_files {
            match self.load_module(path) {
                Ok(fragment) => modules.push(fragment),
                Err(skipped) => failed.push(skipped),
            }
        }

        if modules.is_empty() {
            return Err(MergeError::NoFragmentsLoaded {
                found: module_files.len(),
            });
        }

        let mut collection = assemble_envelope(&self.template, generated_at);
        let without_folder = append_sections(&mut collection, modules);

        tracing::info!("✓ Merged {} modules", collection.item.len());
        Ok(MergeOutcome {
            collection,
            discovered: module_files.len(),
            failed,
            without_folder,
        })
    }

    pub fn save_collection(&self, collection: &Collection, output_path: &Path) -> Result<MergeStats> {
        let json = serde_json::to_string_pretty(collection)?;

        self.storage
            .write_file(output_path, json.as_bytes())
            .map_err(|e| match e {
                MergeError::IoError(source) => MergeError::PersistenceError {
                    path: output_path.display().to_string(),
                    source,
                },
                other => other,
            })?;

        tracing::info!("✓ Collection saved to {}", output_path.display());
        Ok(MergeStats::from_collection(collection))
    }
}

/// Appends each module's folder in order. Modules without a folder are
/// skipped and returned.
fn append_sections(collection: &mut Collection, modules: Vec<Fragment>) -> Vec<SkippedFragment> {
    let mut without_folder = Vec::new();

    for module in modules {
        match module.folder {
            Some(folder) => {
                tracing::debug!(
                    "Appending {} ({} requests)",
                    module.module_info.name,
                    section_request_count(&folder)
                );
                collection.item.push(folder);
            }
            None => {
                tracing::warn!(
                    "Module {} has no folder, skipping",
                    module.path.display()
                );
                without_folder.push(SkippedFragment {
                    path: module.path,
                    reason: "missing folder".to_string(),
                });
            }
        }
    }

    without_folder
}
