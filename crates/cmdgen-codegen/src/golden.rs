//! Golden fixture verification.
//!
//! Fixtures live at `<root>/<language>/<file_name>`. Comparison ignores line
//! ending style, trailing whitespace and leading or trailing blank lines;
//! everything else must match exactly.

use crate::driver::{GeneratedArtifact, GenerationReport};
use crate::error::CodegenError;
use similar::TextDiff;
use std::fmt;
use std::path::{Path, PathBuf};

/// A generated artifact that does not match its fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenMismatch {
    pub command: String,
    pub language: String,

    /// Fixture path that was compared against.
    pub path: PathBuf,

    /// Unified diff from expected to actual, or a note that the fixture is missing.
    pub diff: String,
}

impl fmt::Display for GoldenMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}] differs from {}",
            self.command,
            self.language,
            self.path.display()
        )?;
        write!(f, "{}", self.diff)
    }
}

/// Canonical form used for comparison.
pub fn normalize_whitespace(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let Some(start) = lines.iter().position(|l| !l.is_empty()) else {
        return String::new();
    };
    let end = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(start);

    let mut normalized = lines[start..=end].join("\n");
    normalized.push('\n');
    normalized
}

/// Compare one artifact with its fixture under `expected_root`.
pub fn verify_artifact(
    artifact: &GeneratedArtifact,
    expected_root: &Path,
) -> Result<(), GoldenMismatch> {
    let path = expected_root.join(artifact.relative_path());

    let expected = match std::fs::read_to_string(&path) {
        Ok(expected) => expected,
        Err(e) => {
            return Err(GoldenMismatch {
                command: artifact.command.clone(),
                language: artifact.language.clone(),
                diff: format!("missing fixture {}: {e}\n", path.display()),
                path,
            });
        }
    };

    let expected = normalize_whitespace(&expected);
    let actual = normalize_whitespace(&artifact.content);
    if expected == actual {
        return Ok(());
    }

    Err(GoldenMismatch {
        command: artifact.command.clone(),
        language: artifact.language.clone(),
        diff: unified_diff(&expected, &actual),
        path,
    })
}

/// Compare every artifact in `report`, collecting all mismatches.
pub fn verify_report(report: &GenerationReport, expected_root: &Path) -> Result<(), CodegenError> {
    let mismatches: Vec<GoldenMismatch> = report
        .artifacts
        .iter()
        .filter_map(|artifact| verify_artifact(artifact, expected_root).err())
        .collect();

    tracing::info!(
        "Verified {} artifact(s) against {}: {} mismatch(es)",
        report.artifacts.len(),
        expected_root.display(),
        mismatches.len()
    );

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(CodegenError::Golden { mismatches })
    }
}

/// Write every artifact in `report` as a fixture, returning the count written.
pub fn bless_report(report: &GenerationReport, expected_root: &Path) -> Result<usize, CodegenError> {
    for artifact in &report.artifacts {
        let path = expected_root.join(artifact.relative_path());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CodegenError::io(parent, e))?;
        }
        std::fs::write(&path, &artifact.content).map_err(|e| CodegenError::io(&path, e))?;
        tracing::debug!("Blessed {}", path.display());
    }

    Ok(report.artifacts.len())
}

fn unified_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "golden/golden_tests.rs"]
mod golden_tests;
