//! Generation driver: fans every (command, language) pair out to its emitter.
//!
//! Each pair is an independent job that resolves the command model and calls
//! the emitter. Jobs share no mutable state, so they run on the rayon pool
//! when parallel generation is enabled. Every pair ends up in the report
//! exactly once, as an artifact or as a failure.

use crate::config::GeneratorConfig;
use crate::emit::{Emitter, builtin_emitter};
use crate::error::{CodegenError, EmitError, PairFailure};
use crate::ir::CommandDef;
use crate::model::CommandModel;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

/// Source text for one (command, language) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub language: String,

    /// Command type name as written in the schema.
    pub command: String,

    /// Normalized command name baked into the artifact.
    pub command_name: String,

    pub file_name: String,

    /// Normalized field names, in schema order.
    pub members: Vec<String>,

    pub content: String,
}

impl GeneratedArtifact {
    /// Path relative to an output root: `<language>/<file_name>`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.language).join(&self.file_name)
    }
}

/// A runtime file for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportArtifact {
    pub language: String,
    pub file_name: String,
    pub content: String,
}

impl SupportArtifact {
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.language).join(&self.file_name)
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Successful pairs, sorted by (command, language).
    pub artifacts: Vec<GeneratedArtifact>,

    /// Runtime files, one set per registered language.
    pub support_files: Vec<SupportArtifact>,

    /// Failed pairs, sorted by (command, language).
    pub failures: Vec<PairFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Artifacts for one language.
    pub fn artifacts_for<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a GeneratedArtifact> + 'a {
        self.artifacts.iter().filter(move |a| a.language == language)
    }

    /// Fail with every pair failure when any pair failed.
    pub fn into_result(self) -> Result<Self, CodegenError> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(CodegenError::Generation {
                failures: self.failures,
            })
        }
    }
}

/// Registry of emitters keyed by language identifier.
///
/// # Examples
///
/// ```
/// use cmdgen_codegen::{CommandDef, FieldDef, FieldType, Generator, GeneratorConfig};
///
/// let config = GeneratorConfig::default().with_languages(["python", "rust"]);
/// let generator = Generator::from_config(&config).unwrap();
///
/// let commands = [CommandDef::new("PingCommand")
///     .with_field(FieldDef::new("Count", FieldType::Integer))];
/// let report = generator.run(&commands);
///
/// assert!(report.is_success());
/// assert_eq!(report.artifacts.len(), 2);
/// assert!(report.artifacts.iter().all(|a| a.command_name == "ping_command"));
/// ```
#[derive(Clone)]
pub struct Generator {
    emitters: BTreeMap<String, Arc<dyn Emitter>>,
    parallel: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("languages", &self.emitters.keys().collect::<Vec<_>>())
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl Generator {
    /// Create a generator with no emitters.
    pub fn new() -> Self {
        Self {
            emitters: BTreeMap::new(),
            parallel: true,
        }
    }

    /// Create a generator with the built-in emitters `config` selects.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CodegenError> {
        config.validate()?;

        let mut generator = Self::new().with_parallel(config.parallel);
        for language in &config.languages {
            let emitter = builtin_emitter(language, config)
                .ok_or_else(|| CodegenError::Config(format!("unknown language {language:?}")))?;
            generator.register(language.clone(), emitter);
        }
        Ok(generator)
    }

    /// Enable or disable parallel generation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Register an emitter, replacing any previous one for `language`.
    pub fn register(
        &mut self,
        language: impl Into<String>,
        emitter: Arc<dyn Emitter>,
    ) -> Option<Arc<dyn Emitter>> {
        self.emitters.insert(language.into(), emitter)
    }

    /// Registered language identifiers, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.emitters.keys().map(String::as_str)
    }

    /// Generate every (command, language) pair.
    pub fn run(&self, commands: &[CommandDef]) -> GenerationReport {
        let pairs: Vec<(&CommandDef, &str, &Arc<dyn Emitter>)> = commands
            .iter()
            .flat_map(|command| {
                self.emitters
                    .iter()
                    .map(move |(language, emitter)| (command, language.as_str(), emitter))
            })
            .collect();

        tracing::debug!(
            "Generating {} pair(s) for {} command(s), parallel={}",
            pairs.len(),
            commands.len(),
            self.parallel
        );

        let outcomes: Vec<Result<GeneratedArtifact, PairFailure>> = if self.parallel {
            pairs
                .par_iter()
                .map(|&(command, language, emitter)| {
                    generate_pair(command, language, emitter.as_ref())
                })
                .collect()
        } else {
            pairs
                .iter()
                .map(|&(command, language, emitter)| {
                    generate_pair(command, language, emitter.as_ref())
                })
                .collect()
        };

        let mut report = GenerationReport::default();
        for (language, emitter) in &self.emitters {
            for file in emitter.support_files() {
                report.support_files.push(SupportArtifact {
                    language: language.clone(),
                    file_name: file.file_name,
                    content: file.content,
                });
            }
        }

        for outcome in reject_collisions(outcomes, &report.support_files) {
            match outcome {
                Ok(artifact) => report.artifacts.push(artifact),
                Err(failure) => {
                    tracing::warn!("Generation failed: {}", failure);
                    report.failures.push(failure);
                }
            }
        }

        report
            .artifacts
            .sort_by(|a, b| (&a.command, &a.language).cmp(&(&b.command, &b.language)));
        report
            .failures
            .sort_by(|a, b| (&a.command, &a.language).cmp(&(&b.command, &b.language)));

        tracing::info!(
            "Generated {} artifact(s), {} failure(s)",
            report.artifacts.len(),
            report.failures.len()
        );

        report
    }
}

fn generate_pair(
    command: &CommandDef,
    language: &str,
    emitter: &dyn Emitter,
) -> Result<GeneratedArtifact, PairFailure> {
    let failure = |error| PairFailure {
        command: command.name.clone(),
        language: language.to_string(),
        error,
    };

    let model = CommandModel::resolve(command).map_err(failure)?;
    let content = emitter.emit(&model).map_err(failure)?;

    tracing::debug!("Emitted {} for {}", model.type_name, language);

    Ok(GeneratedArtifact {
        language: language.to_string(),
        command: model.type_name.clone(),
        command_name: model.command_name.clone(),
        file_name: emitter.file_name(&model),
        members: model.members(),
        content,
    })
}

/// Fail every artifact that shares its command name with another command, or
/// its output path with another artifact or a support file.
fn reject_collisions(
    outcomes: Vec<Result<GeneratedArtifact, PairFailure>>,
    support_files: &[SupportArtifact],
) -> Vec<Result<GeneratedArtifact, PairFailure>> {
    let mut names: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut writers: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();

    for support in support_files {
        writers
            .entry(support.relative_path())
            .or_default()
            .push(format!("support file {}", support.file_name));
    }
    for artifact in outcomes.iter().flatten() {
        names
            .entry(artifact.command_name.as_str())
            .or_default()
            .insert(artifact.command.as_str());
        writers
            .entry(artifact.relative_path())
            .or_default()
            .push(artifact.command.clone());
    }

    let check = |artifact: &GeneratedArtifact| -> Option<EmitError> {
        let sharing = &names[artifact.command_name.as_str()];
        if let Some(other) = sharing.iter().find(|c| **c != artifact.command) {
            return Some(EmitError::DuplicateCommandName {
                command_name: artifact.command_name.clone(),
                other: (*other).to_string(),
            });
        }

        let path = artifact.relative_path();
        let other = writers[&path].iter().find(|w| **w != artifact.command)?;
        Some(EmitError::OutputCollision {
            path,
            other: other.clone(),
        })
    };

    let rejected: Vec<Option<EmitError>> = outcomes
        .iter()
        .map(|outcome| outcome.as_ref().ok().and_then(check))
        .collect();

    outcomes
        .into_iter()
        .zip(rejected)
        .map(|(outcome, error)| match (outcome, error) {
            (Ok(artifact), Some(error)) => Err(PairFailure {
                command: artifact.command,
                language: artifact.language,
                error,
            }),
            (outcome, _) => outcome,
        })
        .collect()
}
