//! `cmdgen verify`

use crate::schema;
use anyhow::{Result, bail};
use cmdgen_codegen::{CodegenError, Generator, GeneratorConfig, bless_report, verify_report};
use std::path::Path;

/// Compare generated sources with fixtures under `expected/<language>/`.
///
/// With `bless`, the fixtures are overwritten instead.
pub fn run(source: &Path, expected: &Path, config: &GeneratorConfig, bless: bool) -> Result<()> {
    let commands = schema::load(source)?;
    let report = Generator::from_config(config)?.run(&commands);

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("✗ {failure}");
        }
        bail!(
            "Generation failed for {} command/language pair(s)",
            report.failures.len()
        );
    }

    if bless {
        let count = bless_report(&report, expected)?;
        println!("✓ Blessed {count} fixture(s) in {}", expected.display());
        return Ok(());
    }

    match verify_report(&report, expected) {
        Ok(()) => {
            println!(
                "✓ {} artifact(s) match {}",
                report.artifacts.len(),
                expected.display()
            );
            Ok(())
        }
        Err(CodegenError::Golden { mismatches }) => {
            for mismatch in &mismatches {
                eprintln!("✗ {mismatch}");
            }
            bail!("{} golden fixture mismatch(es)", mismatches.len())
        }
        Err(e) => Err(e.into()),
    }
}
