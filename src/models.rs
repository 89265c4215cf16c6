// src/models.rs

use crate::core::tokenizer;
use crate::system::executor::{self, ExecutionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- COMMAND SPECIFICATION ---

/// A program to run plus its ordered arguments.
///
/// Arguments are opaque: they are handed to the OS exactly as stored, with no
/// quoting, escaping or expansion. Built by the caller with [`CommandSpec::new`],
/// by tokenizing a command line with [`CommandSpec::parse`], or deserialized
/// from a TOML command definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "TomlCommand", into = "TomlCommandSplit")]
pub struct CommandSpec {
    /// The executable name or path, resolved by the OS against `PATH`.
    pub program: String,
    /// Arguments passed after the program, in order.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a specification from an already split program and argument list.
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokenizes a free-form command line on whitespace.
    /// See [`tokenizer::parse`] for the exact rules.
    pub fn parse(line: &str) -> Result<Self, ExecutionError> {
        tokenizer::parse(line)
    }

    /// Runs the command, capturing stdout and stderr into a single buffer.
    pub fn execute_combined(&self) -> Result<String, ExecutionError> {
        executor::execute_combined(&self.program, &self.args)
    }

    /// Runs the command, capturing stdout and stderr into separate buffers.
    pub fn execute_separated(&self) -> Result<SeparatedOutput, ExecutionError> {
        executor::execute_separated(&self.program, &self.args)
    }
}

impl FromStr for CommandSpec {
    type Err = ExecutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders `program arg1 arg2 ...`. Meant for logs and error messages;
/// arguments containing whitespace do not survive a round trip through `parse`.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

// --- TOML COMMAND MODELS ---
// What a command looks like inside a configuration file. Either form
// converts into a `CommandSpec`.

/// A command definition as written in TOML. Uses `untagged` for flexible syntax:
/// `build = "cargo build"` or `build = { program = "cargo", args = ["build"] }`.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum TomlCommand {
    Line(String),
    Split(TomlCommandSplit),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct TomlCommandSplit {
    program: String,
    #[serde(default)]
    args: Vec<String>,
}

impl TryFrom<TomlCommand> for CommandSpec {
    type Error = ExecutionError;

    fn try_from(value: TomlCommand) -> Result<Self, Self::Error> {
        match value {
            TomlCommand::Line(line) => tokenizer::parse(&line),
            TomlCommand::Split(split) => {
                if split.program.trim().is_empty() {
                    return Err(ExecutionError::EmptyCommand);
                }
                Ok(Self {
                    program: split.program,
                    args: split.args,
                })
            }
        }
    }
}

impl From<CommandSpec> for TomlCommandSplit {
    fn from(spec: CommandSpec) -> Self {
        Self {
            program: spec.program,
            args: spec.args,
        }
    }
}

// --- EXECUTION RESULTS ---

/// Output of a command whose stdout and stderr were captured independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatedOutput {
    /// Everything the child wrote to its standard output.
    pub stdout: String,
    /// Everything the child wrote to its standard error.
    pub stderr: String,
}

/// Whatever a finished command produced, in the shape it was captured.
/// Carried by [`ExecutionError::NonZeroExitStatus`] so output survives a failed exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedOutput {
    /// Stdout and stderr interleaved into one buffer.
    Combined(String),
    /// Stdout and stderr kept apart.
    Separated(SeparatedOutput),
}

impl CapturedOutput {
    /// Returns the captured stdout, or the combined buffer.
    pub fn stdout(&self) -> &str {
        match self {
            Self::Combined(text) => text,
            Self::Separated(output) => &output.stdout,
        }
    }
}
