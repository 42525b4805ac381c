//! Script execution.
//!
//! The console only needs "submit text, get two streams of text back", so
//! the interpreter sits behind [`ScriptRunner`]. [`ProcessRunner`] is the
//! real one: it pipes the script into an interpreter process.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Text produced by one script run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Failure to run a script at all.
///
/// A script that runs and fails is not a `RunError`; its diagnostics arrive
/// in [`ScriptOutput::stderr`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("i/o error while running `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("stdin writer for `{program}` panicked")]
    StdinWriter { program: String },
}

/// Executes script text.
pub trait ScriptRunner {
    fn run(&mut self, script: &str) -> Result<ScriptOutput, RunError>;
}

/// Runs scripts by piping them into an interpreter's stdin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessRunner {
    program: String,
    args: Vec<String>,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        ProcessRunner {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn io_error(&self, source: io::Error) -> RunError {
        RunError::Io {
            program: self.program.clone(),
            source,
        }
    }
}

impl ScriptRunner for ProcessRunner {
    #[tracing::instrument(
        level = "debug",
        skip(self, script),
        fields(program = %self.program, bytes = script.len())
    )]
    fn run(&mut self, script: &str) -> Result<ScriptOutput, RunError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Feed stdin from its own thread so a chatty interpreter cannot
        // fill the output pipes while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let script = script.to_owned();
            thread::spawn(move || match stdin.write_all(script.as_bytes()) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            })
        });

        let output = child.wait_with_output().map_err(|e| self.io_error(e))?;
        if let Some(writer) = writer {
            writer
                .join()
                .map_err(|_| RunError::StdinWriter {
                    program: self.program.clone(),
                })?
                .map_err(|e| self.io_error(e))?;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            tracing::debug!(status = %output.status, "interpreter failed");
            if !stderr.is_empty() && !stderr.ends_with('\n') {
                stderr.push('\n');
            }
            let _ = writeln!(stderr, "{} exited with {}", self.program, output.status);
        }
        Ok(ScriptOutput { stdout, stderr })
    }
}

#[cfg(test)]
mod tests;
