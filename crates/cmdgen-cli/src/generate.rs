//! `cmdgen generate`

use crate::schema;
use anyhow::{Context, Result, bail};
use cmdgen_codegen::{GenerationReport, Generator, GeneratorConfig};
use std::path::{Path, PathBuf};

/// Generate sources for every command and configured language.
///
/// Successful pairs are written even when other pairs fail; the run still
/// reports an error listing every failure.
pub fn run(source: &Path, output: &Path, config: &GeneratorConfig) -> Result<()> {
    let commands = schema::load(source)?;
    let generator = Generator::from_config(config)?;

    println!(
        "Generating {} command(s) for {}",
        commands.len(),
        generator.languages().collect::<Vec<_>>().join(", ")
    );

    let report = generator.run(&commands);
    let written = write_report(&report, output)?;

    println!("✓ Wrote {} file(s) to {}", written.len(), output.display());

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("✗ {failure}");
        }
        bail!(
            "Generation failed for {} command/language pair(s)",
            report.failures.len()
        );
    }

    Ok(())
}

/// Write artifacts and support files under `output/<language>/`.
pub fn write_report(report: &GenerationReport, output: &Path) -> Result<Vec<PathBuf>> {
    let files = report
        .artifacts
        .iter()
        .map(|a| (a.relative_path(), a.content.as_str()))
        .chain(
            report
                .support_files
                .iter()
                .map(|s| (s.relative_path(), s.content.as_str())),
        );

    let mut written = Vec::new();
    for (relative, content) in files {
        let path = output.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
