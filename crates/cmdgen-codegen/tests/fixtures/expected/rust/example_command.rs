// This file is auto-generated. Do not edit manually.
use cmdgen::Command;
use serde::{Deserialize, Serialize};

/// This is a test command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleCommand {
    /// Example message
    pub some_message: String,
    /// Example count
    pub count: i64,
    /// Example bool
    pub some_boolean_example: bool,
    /// Optional string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub could_be_nothing: Option<String>,
}

impl Command for ExampleCommand {
    const COMMAND_NAME: &'static str = "example_command";
}
