// src/test_support.rs

// Helpers shared by the unit tests.

/// Installs `env_logger` once per test binary. `RUST_LOG=trace` shows the executor's logs.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A command that writes exactly "stdout" to its output stream and "stderr" to its error stream.
pub(crate) fn stdout_and_stderr_command() -> (&'static str, Vec<&'static str>) {
    if cfg!(windows) {
        ("cmd", vec!["/c", "echo stdout && echo stderr 1>&2"])
    } else {
        ("sh", vec!["-c", "echo stdout && echo stderr 1>&2"])
    }
}

/// A command line printing "hello world" on stdout, for the dispatch entry points.
pub(crate) fn hello_world_line() -> &'static str {
    if cfg!(windows) {
        "cmd /c echo hello world"
    } else {
        "echo hello world"
    }
}
