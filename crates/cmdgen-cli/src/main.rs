//! cmdgen CLI - Multi-language Command code generator
//!
//! Commands:
//! - `cmdgen generate` - Generate Command sources for every configured language
//! - `cmdgen verify` - Compare generated sources with golden fixtures
//! - `cmdgen check` - Validate a command schema without writing anything

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod logging;
mod schema;
mod settings;
mod verify;

#[derive(Parser)]
#[command(name = "cmdgen")]
#[command(author, version, about = "Generate Command DTOs for several languages from one schema", long_about = None)]
struct Cli {
    /// Path to cmdgen.toml (default: ./cmdgen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Command sources
    Generate {
        /// Schema JSON file, or a directory of schema files
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory; files land in <output>/<language>/
        #[arg(short, long)]
        output: PathBuf,

        /// Restrict to these languages (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        lang: Vec<String>,

        /// Generate one pair at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
    },

    /// Compare generated sources with golden fixtures
    Verify {
        /// Schema JSON file, or a directory of schema files
        #[arg(short, long)]
        source: PathBuf,

        /// Fixture root containing <language>/<file> expectations
        #[arg(short, long)]
        expected: PathBuf,

        /// Restrict to these languages (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        lang: Vec<String>,

        /// Overwrite the fixtures with the current output
        #[arg(long)]
        bless: bool,
    },

    /// Validate a command schema against every configured language
    Check {
        /// Schema JSON file, or a directory of schema files
        #[arg(short, long)]
        source: PathBuf,

        /// Restrict to these languages (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        lang: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = match &cli.command {
        Commands::Generate {
            lang, sequential, ..
        } => settings::Overrides {
            languages: lang.clone(),
            sequential: *sequential,
        },
        Commands::Verify { lang, .. } | Commands::Check { lang, .. } => settings::Overrides {
            languages: lang.clone(),
            sequential: false,
        },
    };

    let config = settings::load(cli.config.as_deref(), &overrides)?;
    logging::init(cli.log_level.as_deref().unwrap_or(&config.log_level));

    match cli.command {
        Commands::Generate { source, output, .. } => {
            generate::run(&source, &output, &config)?;
        }
        Commands::Verify {
            source,
            expected,
            bless,
            ..
        } => {
            verify::run(&source, &expected, &config, bless)?;
        }
        Commands::Check { source, .. } => {
            schema::check(&source, &config)?;
        }
    }

    Ok(())
}
