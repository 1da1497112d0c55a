//! Generator configuration types

use crate::emit::BUILTIN_LANGUAGES;
use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generator configuration, usually loaded from `cmdgen.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target languages, by built-in language identifier
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Namespace for generated C# and C++ types (dot separated)
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Package for generated Java classes
    #[serde(default = "default_java_package")]
    pub java_package: String,

    /// Crate path generated Rust code imports `Command` from
    #[serde(default = "default_rust_crate")]
    pub rust_crate: String,

    /// Run (command, language) jobs on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Log level used when no `RUST_LOG` or CLI flag is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_languages() -> Vec<String> {
    BUILTIN_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

fn default_namespace() -> String {
    "GeneratedCommands".to_string()
}

fn default_java_package() -> String {
    "generated.commands".to_string()
}

fn default_rust_crate() -> String {
    "cmdgen".to_string()
}

fn default_parallel() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            namespace: default_namespace(),
            java_package: default_java_package(),
            rust_crate: default_rust_crate(),
            parallel: default_parallel(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CodegenError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self, CodegenError> {
        let config: Self =
            toml::from_str(content).map_err(|e| CodegenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Restrict generation to the given languages
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.languages.is_empty() {
            return Err(CodegenError::Config(
                "at least one language must be configured".to_string(),
            ));
        }

        for language in &self.languages {
            if !BUILTIN_LANGUAGES.contains(&language.as_str()) {
                return Err(CodegenError::Config(format!(
                    "unknown language {language:?} (expected one of: {})",
                    BUILTIN_LANGUAGES.join(", ")
                )));
            }
        }

        check_dotted_path("namespace", &self.namespace)?;
        check_dotted_path("java_package", &self.java_package)?;

        if !self
            .rust_crate
            .split("::")
            .all(is_plain_identifier)
        {
            return Err(CodegenError::Config(format!(
                "rust_crate {:?} is not a valid crate path",
                self.rust_crate
            )));
        }

        Ok(())
    }
}

fn check_dotted_path(key: &str, value: &str) -> Result<(), CodegenError> {
    if value.split('.').all(is_plain_identifier) {
        Ok(())
    } else {
        Err(CodegenError::Config(format!(
            "{key} {value:?} must be dot-separated identifiers"
        )))
    }
}

fn is_plain_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
