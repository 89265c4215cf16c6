// src/system/executor.rs

use crate::models::{CapturedOutput, SeparatedOutput};
use std::io::{self, Read};
use std::process::{Child, Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Everything that can go wrong between receiving a command and its exit.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The command line was the empty string.
    #[error("blank command")]
    EmptyCommand,
    /// The command line held nothing but whitespace.
    #[error("whitespace-only command")]
    WhitespaceOnlyCommand,
    /// The OS refused to spawn the program, or its output could not be collected.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, #[source] io::Error),
    /// The program ran but exited unsuccessfully (non-zero code or a signal).
    #[error("Command '{command}' exited with a non-zero status ({status}).")]
    NonZeroExitStatus {
        /// The command as it was run, for display.
        command: String,
        /// The raw exit status reported by the OS.
        status: ExitStatus,
        /// Whatever the program wrote before exiting.
        output: CapturedOutput,
    },
}

impl ExecutionError {
    /// True for errors raised while validating a command line, before any process exists.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyCommand | Self::WhitespaceOnlyCommand)
    }

    /// The output captured before the command failed, if it ran at all.
    pub fn output(&self) -> Option<&CapturedOutput> {
        match self {
            Self::NonZeroExitStatus { output, .. } => Some(output),
            _ => None,
        }
    }

    /// Consumes the error, returning the captured output if the command ran.
    pub fn into_output(self) -> Option<CapturedOutput> {
        match self {
            Self::NonZeroExitStatus { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Executes a program and captures its stdout and stderr into a single buffer.
///
/// Both streams of the child are attached to the write end of the same OS pipe,
/// so the text is interleaved in whatever order the child's writes reached it.
/// No ordering between the two streams is guaranteed beyond that.
///
/// The call blocks until the child exits. Stdin is connected to the null device;
/// environment and working directory are inherited from the current process.
///
/// # Errors
/// - [`ExecutionError::CommandFailed`] if the program could not be spawned
///   (not found, permission denied...) or its output could not be read.
/// - [`ExecutionError::NonZeroExitStatus`] if it ran but did not exit successfully;
///   the captured text travels inside the error.
pub fn execute_combined<S: AsRef<str>>(name: &str, args: &[S]) -> Result<String, ExecutionError> {
    let command_line = render_command_line(name, args);
    log::debug!("Executing '{}' (combined output).", command_line);

    let failed = |e: io::Error| ExecutionError::CommandFailed(command_line.clone(), e);

    let (mut reader, writer) = io::pipe().map_err(failed)?;
    let stderr_writer = writer.try_clone().map_err(failed)?;

    let mut command = build_command(name, args);
    command.stdout(writer).stderr(stderr_writer);
    let child = command.spawn().map_err(failed)?;
    // The Command still owns its copies of the write end; EOF only arrives once they are gone.
    drop(command);

    let mut buffer = Vec::new();
    let read_result = reader.read_to_end(&mut buffer);
    let status = reap(child, read_result).map_err(failed)?;

    let output = String::from_utf8_lossy(&buffer).into_owned();
    log::trace!(
        "'{}' finished with {} ({} bytes captured).",
        command_line,
        status,
        output.len()
    );

    if !status.success() {
        return Err(ExecutionError::NonZeroExitStatus {
            command: command_line,
            status,
            output: CapturedOutput::Combined(output),
        });
    }
    Ok(output)
}

/// Executes a program and captures its stdout and stderr into two separate buffers.
///
/// Spawning, waiting and failure semantics are the same as [`execute_combined`].
/// Both pipes are drained concurrently, so a child filling one of them cannot stall.
///
/// # Errors
/// Same as [`execute_combined`]; a non-zero exit carries
/// [`CapturedOutput::Separated`].
pub fn execute_separated<S: AsRef<str>>(
    name: &str,
    args: &[S],
) -> Result<SeparatedOutput, ExecutionError> {
    let command_line = render_command_line(name, args);
    log::debug!("Executing '{}' (separated output).", command_line);

    let command_output = build_command(name, args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

    let output = SeparatedOutput {
        stdout: String::from_utf8_lossy(&command_output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&command_output.stderr).into_owned(),
    };
    log::trace!(
        "'{}' finished with {} ({} stdout bytes, {} stderr bytes).",
        command_line,
        command_output.status,
        output.stdout.len(),
        output.stderr.len()
    );

    if !command_output.status.success() {
        return Err(ExecutionError::NonZeroExitStatus {
            command: command_line,
            status: command_output.status,
            output: CapturedOutput::Separated(output),
        });
    }
    Ok(output)
}

fn build_command<S: AsRef<str>>(name: &str, args: &[S]) -> StdCommand {
    let mut command = StdCommand::new(name);
    command.args(args.iter().map(AsRef::as_ref)).stdin(Stdio::null());
    command
}

/// Waits for the child even when reading its output failed, so it is never left unreaped.
fn reap(mut child: Child, read_result: io::Result<usize>) -> io::Result<ExitStatus> {
    let status = child.wait();
    read_result?;
    status
}

fn render_command_line<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    let mut line = name.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg.as_ref());
    }
    line
}
