// This file is auto-generated. Do not edit manually.
use cmdgen::Command;
use serde::{Deserialize, Serialize};

/// This command just shows another example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnotherExampleCommand {}

impl Command for AnotherExampleCommand {
    const COMMAND_NAME: &'static str = "another_example_command";
}
