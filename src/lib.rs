//! Run external commands and capture their output.
//!
//! A command is given either pre-split, as a program plus arguments
//! ([`execute_combined`], [`execute_separated`]), or as a single command line
//! that is split on whitespace ([`dispatch_combined`], [`dispatch_separated`]).
//! Every call blocks until the child exits. There is no shell involved: quotes,
//! globs, pipes and variables are passed through as plain text.
//!
//! ```no_run
//! let listing = cmdexec::dispatch_combined("ls -la")?;
//! let split = cmdexec::execute_separated("git", &["status", "--short"])?;
//! println!("{}{}", listing, split.stdout);
//! # Ok::<(), cmdexec::ExecutionError>(())
//! ```

pub mod core;
pub mod models;
pub mod system;

#[cfg(test)]
mod test_support;

pub use crate::core::config_loader::{CommandsConfig, ConfigError};
pub use crate::core::dispatcher::{dispatch_combined, dispatch_separated};
pub use crate::core::tokenizer::tokenize;
pub use models::{CapturedOutput, CommandSpec, SeparatedOutput};
pub use system::executor::{ExecutionError, execute_combined, execute_separated};
