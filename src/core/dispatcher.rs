// src/core/dispatcher.rs

use crate::core::tokenizer;
use crate::models::SeparatedOutput;
use crate::system::executor::{self, ExecutionError};

/// Runs a free-form command line, capturing stdout and stderr into one buffer.
///
/// The line is split on whitespace (no quoting, see [`tokenizer::tokenize`]); the
/// first token names the program. Blank or whitespace-only lines are rejected
/// before anything is spawned.
pub fn dispatch_combined(line: &str) -> Result<String, ExecutionError> {
    let spec = tokenizer::parse(line)?;
    executor::execute_combined(&spec.program, &spec.args)
}

/// Runs a free-form command line, capturing stdout and stderr separately.
/// Validation and tokenization are identical to [`dispatch_combined`].
pub fn dispatch_separated(line: &str) -> Result<SeparatedOutput, ExecutionError> {
    let spec = tokenizer::parse(line)?;
    executor::execute_separated(&spec.program, &spec.args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{hello_world_line, init_logging};
    use rayon::prelude::*;

    #[test]
    fn test_dispatch_combined_valid_command() {
        init_logging();
        let line = if cfg!(windows) {
            "cmd /c echo hello"
        } else {
            "echo hello"
        };
        let output = dispatch_combined(line).unwrap();
        assert!(output.contains("hello"), "Output was: {:?}", output);
    }

    #[test]
    fn test_dispatch_combined_rejects_blank_lines() {
        let err = dispatch_combined("").unwrap_err();
        assert!(matches!(err, ExecutionError::EmptyCommand));
        assert!(err.is_validation());
        assert!(err.output().is_none());

        let err = dispatch_combined("   ").unwrap_err();
        assert!(matches!(err, ExecutionError::WhitespaceOnlyCommand));
        assert!(err.is_validation());
    }

    #[test]
    fn test_dispatch_separated_with_arguments() {
        init_logging();
        let output = dispatch_separated(hello_world_line()).unwrap();
        assert!(
            output.stdout.contains("hello world"),
            "stdout was: {:?}",
            output.stdout
        );
        assert_eq!(output.stderr, "");
    }

    #[test]
    fn test_dispatch_separated_rejects_blank_lines() {
        assert!(matches!(
            dispatch_separated("").unwrap_err(),
            ExecutionError::EmptyCommand
        ));
        assert!(matches!(
            dispatch_separated(" \t\n").unwrap_err(),
            ExecutionError::WhitespaceOnlyCommand
        ));
    }

    #[test]
    fn test_dispatch_nonexistent_command() {
        let err = dispatch_combined("nonexistentcommand --flag").unwrap_err();
        assert!(matches!(err, ExecutionError::CommandFailed(..)));
        assert!(!err.is_validation());
    }

    #[cfg(unix)]
    #[test]
    fn test_interior_runs_of_spaces_do_not_create_empty_arguments() {
        // `printf '[%s]'` repeats the format once per argument, exposing any empty one.
        let output = dispatch_separated("printf   [%s]    a   b").unwrap();
        assert_eq!(output.stdout, "[a][b]");
    }

    #[cfg(unix)]
    #[test]
    fn test_dispatch_matches_direct_execution() {
        let direct = executor::execute_combined::<&str>("pwd", &[]).unwrap();
        let dispatched = dispatch_combined("pwd").unwrap();
        assert_eq!(direct, dispatched);
    }

    #[test]
    fn test_concurrent_dispatches_are_independent() {
        init_logging();
        let results: Vec<(usize, Result<SeparatedOutput, ExecutionError>)> = (0..16usize)
            .into_par_iter()
            .map(|i| {
                let line = if cfg!(windows) {
                    format!("cmd /c echo job-{}", i)
                } else {
                    format!("echo job-{}", i)
                };
                (i, dispatch_separated(&line))
            })
            .collect();

        for (i, result) in results {
            let output = result.unwrap();
            assert!(
                output.stdout.contains(&format!("job-{}", i)),
                "Job {} stdout was: {:?}",
                i,
                output.stdout
            );
            for other in (0..16usize).filter(|other| *other != i) {
                assert!(!output.stdout.contains(&format!("job-{}\n", other)));
            }
        }
    }
}
