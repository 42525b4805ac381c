//! The script console: an input buffer plus accumulated output.

use scrib_highlight::{DirtyRange, Document, Highlighter};

use crate::runner::{RunError, ScriptRunner};

/// Input document, runner and the two output buffers of one console.
///
/// Output only ever grows until [`clear_output`](Self::clear_output).
#[derive(Debug)]
pub struct ScriptConsole<R> {
    input: Document,
    runner: R,
    stdout: String,
    stderr: String,
}

impl<R: ScriptRunner> ScriptConsole<R> {
    pub fn new(highlighter: Highlighter, runner: R) -> Self {
        ScriptConsole {
            input: Document::new(highlighter),
            runner,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn input(&self) -> &Document {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Document {
        &mut self.input
    }

    /// Replace the input text.
    pub fn set_script(&mut self, text: &str) -> DirtyRange {
        self.input.set_text(text)
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Append to the output buffer.
    pub fn out(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    /// Append to the error buffer.
    pub fn err(&mut self, text: &str) {
        self.stderr.push_str(text);
    }

    /// Run the whole input and append what it printed.
    ///
    /// If the runner cannot run the script, the error is also appended to
    /// the error buffer before it is returned.
    pub fn exec(&mut self) -> Result<(), RunError> {
        let script = self.input.text();
        tracing::debug!(blocks = self.input.len(), "executing console input");
        match self.runner.run(&script) {
            Ok(output) => {
                self.out(&output.stdout);
                self.err(&output.stderr);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.err(&format!("{e}\n"));
                Err(e)
            }
        }
    }

    pub fn clear_output(&mut self) {
        self.stdout.clear();
        self.stderr.clear();
    }
}
