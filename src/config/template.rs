use crate::config::defaults;
use crate::config::MergeProfile;
use crate::core::discovery::FragmentFilter;
use crate::domain::model::{Event, ListenPhase, Variable, POSTMAN_SCHEMA_V2_1};
use crate::utils::error::{MergeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Static parts of the merged collection: info block, global variables,
/// global events and the fragment naming rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateConfig {
    pub collection: CollectionTemplate,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionTemplate {
    pub name: String,
    /// `${generated_at}` is replaced with the generation time.
    pub description: String,
    #[serde(default = "default_schema")]
    pub schema: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscoveryConfig {
    /// Accept only `01-` .. `NN-` prefixed files. Unset means any `*.json`.
    pub numbered_slots: Option<u32>,
}

fn default_schema() -> String {
    POSTMAN_SCHEMA_V2_1.to_string()
}

fn variables_from(table: &[(&str, &str, &str)]) -> Vec<Variable> {
    table
        .iter()
        .map(|(key, value, description)| Variable::new(key, value, description))
        .collect()
}

impl TemplateConfig {
    pub fn full() -> Self {
        Self {
            collection: CollectionTemplate {
                name: defaults::COLLECTION_NAME.to_string(),
                description: defaults::FULL_DESCRIPTION.to_string(),
                schema: default_schema(),
            },
            variables: variables_from(defaults::FULL_VARIABLES),
            events: vec![
                Event::javascript(ListenPhase::Prerequest, defaults::PREREQUEST_SCRIPT),
                Event::javascript(ListenPhase::Test, defaults::TEST_SCRIPT),
            ],
            discovery: DiscoveryConfig {
                numbered_slots: Some(defaults::FULL_NUMBERED_SLOTS),
            },
        }
    }

    pub fn quick() -> Self {
        Self {
            collection: CollectionTemplate {
                name: defaults::COLLECTION_NAME.to_string(),
                description: defaults::QUICK_DESCRIPTION.to_string(),
                schema: default_schema(),
            },
            variables: variables_from(defaults::QUICK_VARIABLES),
            events: Vec::new(),
            discovery: DiscoveryConfig::default(),
        }
    }

    pub fn for_profile(profile: MergeProfile) -> Self {
        match profile {
            MergeProfile::Full => Self::full(),
            MergeProfile::Quick => Self::quick(),
        }
    }

    /// 從 TOML 檔案載入模板
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MergeError::ConfigError {
            message: format!("cannot read template {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MergeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn fragment_filter(&self) -> FragmentFilter {
        match self.discovery.numbered_slots {
            Some(slots) => FragmentFilter::NumberedPrefix { slots },
            None => FragmentFilter::AnyJson,
        }
    }

    /// 替換描述中的 `${generated_at}`，其他佔位符原樣保留
    pub fn render_description(&self, generated_at: &str) -> String {
        PLACEHOLDER
            .replace_all(&self.collection.description, |caps: &regex::Captures| {
                match &caps[1] {
                    "generated_at" => generated_at.to_string(),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("collection.name", &self.collection.name)?;
        validation::validate_url("collection.schema", &self.collection.schema)?;

        validation::validate_unique_keys(
            "variables.key",
            self.variables.iter().map(|v| v.key.as_str()),
        )?;
        if let Some(base_url) = self.variables.iter().find(|v| v.key == "base_url") {
            validation::validate_url("variables.base_url", &base_url.value)?;
        }

        if let Some(slots) = self.discovery.numbered_slots {
            validation::validate_range("discovery.numbered_slots", slots, 1, 99)?;
        }

        Ok(())
    }
}

impl Validate for TemplateConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
