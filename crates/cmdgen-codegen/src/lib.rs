//! cmdgen-codegen - Multi-language Command code generator
//!
//! This crate turns language-agnostic command definitions into source files
//! for several target languages, all sharing one runtime contract: the
//! normalized command name, field presence that matches the schema, and
//! symmetric JSON encode/decode.
//!
//! # Pipeline
//!
//! ```text
//! CommandDef (ir)
//!     ↓  CommandModel::resolve (naming normalization)
//! CommandModel
//!     ↓  Emitter::emit, one job per (command, language)
//! GeneratedArtifact + SupportArtifact
//!     ↓
//! writer (cmdgen-cli) or golden verifier
//! ```
//!
//! # Example
//!
//! ```
//! use cmdgen_codegen::{CommandDef, FieldDef, FieldType, Generator, GeneratorConfig};
//!
//! let command = CommandDef::new("ExampleCommand")
//!     .with_docs("This is a test command.")
//!     .with_field(FieldDef::new("someMessage", FieldType::String))
//!     .with_field(FieldDef::new("couldBeNothing", FieldType::optional(FieldType::String)));
//!
//! let generator = Generator::from_config(&GeneratorConfig::default()).unwrap();
//! let report = generator.run(&[command]).into_result().unwrap();
//!
//! for artifact in &report.artifacts {
//!     assert_eq!(artifact.members, ["some_message", "could_be_nothing"]);
//! }
//! ```

pub mod config;
pub mod driver;
pub mod emit;
pub mod error;
pub mod golden;
pub mod ir;
pub mod model;

pub use config::GeneratorConfig;
pub use driver::{GeneratedArtifact, GenerationReport, Generator, SupportArtifact};
pub use emit::{BUILTIN_LANGUAGES, Emitter, SupportFile, builtin_emitter};
pub use error::{CodegenError, EmitError, PairFailure};
pub use golden::{GoldenMismatch, bless_report, normalize_whitespace, verify_artifact, verify_report};
pub use ir::{CommandDef, FieldDef, FieldType};
pub use model::{CommandModel, FieldModel, FieldShape, ScalarType};
