#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_args() {
    let runner = ProcessRunner::new("python3")
        .with_arg("-u")
        .with_args(["-", "extra"]);
    assert_eq!(runner.program(), "python3");
    assert_eq!(runner.args(), ["-u", "-", "extra"]);
}

#[test]
fn missing_program_is_spawn_error() {
    let mut runner = ProcessRunner::new("scrib-no-such-interpreter");
    let err = runner.run("print 1").unwrap_err();
    assert!(matches!(err, RunError::Spawn { .. }));
    assert!(err.to_string().contains("scrib-no-such-interpreter"));
}

// === Unix processes ===

#[cfg(unix)]
#[test]
fn script_reaches_stdin() {
    let mut runner = ProcessRunner::new("cat");
    let output = runner.run("print 'hi'\n").unwrap();
    assert_eq!(
        output,
        ScriptOutput {
            stdout: "print 'hi'\n".to_owned(),
            stderr: String::new(),
        }
    );
}

#[cfg(unix)]
#[test]
fn large_script_does_not_deadlock() {
    let script = "x = 1\n".repeat(100_000);
    let mut runner = ProcessRunner::new("cat");
    let output = runner.run(&script).unwrap();
    assert_eq!(output.stdout.len(), script.len());
}

#[cfg(unix)]
#[test]
fn failure_status_goes_to_stderr() {
    let mut runner = ProcessRunner::new("sh").with_args(["-c", "echo oops >&2; exit 3"]);
    let output = runner.run("").unwrap();
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("oops\n"));
    assert!(output.stderr.contains("sh exited with"));
    assert!(output.stderr.ends_with('\n'));
}

#[cfg(unix)]
#[test]
fn interpreter_ignoring_stdin_is_fine() {
    let mut runner = ProcessRunner::new("sh").with_args(["-c", "echo done"]);
    let output = runner.run(&"# filler\n".repeat(50_000)).unwrap();
    assert_eq!(output.stdout, "done\n");
}
