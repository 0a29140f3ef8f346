use crate::config::defaults;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "collection-merge")]
#[command(about = "Merge per-module Postman collection fragments into one collection")]
pub struct CliConfig {
    /// Directory holding the numbered module files
    #[arg(long, default_value = defaults::DEFAULT_INPUT_DIR)]
    pub input_dir: String,

    /// Output collection file
    #[arg(long, default_value = defaults::DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// TOML file replacing the built-in collection template
    #[arg(long)]
    pub template: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "quick_merge")]
#[command(about = "Quickly merge every *.json module file into one collection")]
pub struct QuickConfig {
    #[arg(long, default_value = defaults::DEFAULT_INPUT_DIR)]
    pub input_dir: String,

    #[arg(long, default_value = defaults::DEFAULT_OUTPUT_FILE)]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn template_path(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

impl ConfigProvider for QuickConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn template_path(&self) -> Option<&str> {
        None
    }
}

fn validate_paths(config: &impl ConfigProvider) -> Result<()> {
    validation::validate_path("input_dir", config.input_dir())?;
    validation::validate_path("output", config.output_path())?;
    if let Some(template) = config.template_path() {
        validation::validate_path("template", template)?;
    }
    Ok(())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(self)
    }
}

impl Validate for QuickConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(self)
    }
}
