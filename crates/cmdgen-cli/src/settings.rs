//! Configuration resolution for CLI runs

use anyhow::{Context, Result};
use cmdgen_codegen::GeneratorConfig;
use std::path::Path;

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cmdgen.toml";

/// Command line values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub languages: Vec<String>,
    pub sequential: bool,
}

/// Load configuration from `path`, `./cmdgen.toml`, or defaults, then apply
/// command line overrides.
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<GeneratorConfig> {
    let config = match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            GeneratorConfig::from_file(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("Failed to load config: {DEFAULT_CONFIG_FILE}"))?
        }
        None => GeneratorConfig::default(),
    };

    apply(config, overrides)
}

fn apply(mut config: GeneratorConfig, overrides: &Overrides) -> Result<GeneratorConfig> {
    if !overrides.languages.is_empty() {
        config = config.with_languages(overrides.languages.iter().map(|l| l.trim()));
    }
    if overrides.sequential {
        config.parallel = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
