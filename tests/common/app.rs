//! Test run harness for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use css_color_extractor::error::ExtractError;
use css_color_extractor::models::ExtractionOptions;
use css_color_extractor::services::io_driver::run_with;
use css_color_extractor::services::MockStdin;

/// One invocation of the extractor against mocked stdin and a scratch
/// directory for input and output files
pub struct TestRun {
    dir: TempDir,
    stdin: MockStdin,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    options: ExtractionOptions,
}

/// What a run produced
#[derive(Debug)]
pub struct TestOutput {
    /// Bytes written to stdout
    pub stdout: String,
    /// Content of the output file, if one was requested
    pub file: Option<String>,
}

impl TestRun {
    /// A run with stdin attached to a terminal
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            stdin: MockStdin::terminal(),
            input: None,
            output: None,
            options: ExtractionOptions::default(),
        }
    }

    /// A run with `css` piped to stdin
    pub fn piped(css: &str) -> Self {
        Self {
            stdin: MockStdin::piped(css),
            ..Self::new()
        }
    }

    /// Write `css` to an input file in the scratch directory and read it
    pub fn with_input_file(mut self, name: &str, css: &str) -> Self {
        let path = self.dir.path().join(name);
        fs::write(&path, css).expect("Failed to write input file");
        self.input = Some(path);
        self
    }

    /// Name a missing input file
    pub fn with_missing_input(mut self, name: &str) -> Self {
        self.input = Some(self.dir.path().join(name));
        self
    }

    /// Write the output to `name` in the scratch directory
    pub fn with_output_file(mut self, name: &str) -> Self {
        self.output = Some(self.dir.path().join(name));
        self
    }

    pub fn with_options(mut self, options: ExtractionOptions) -> Self {
        self.options = options;
        self
    }

    /// Path inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn try_run(&self) -> Result<TestOutput, ExtractError> {
        let mut stdout = Vec::new();
        run_with(
            self.input.as_deref(),
            self.output.as_deref(),
            self.options.clone(),
            &self.stdin,
            &mut stdout,
        )?;

        let file = self
            .output
            .as_deref()
            .map(|path| fs::read_to_string(path).expect("Output file not written"));

        Ok(TestOutput {
            stdout: String::from_utf8(stdout).expect("Output is not UTF-8"),
            file,
        })
    }

    /// Run and panic on error
    pub fn run(&self) -> TestOutput {
        match self.try_run() {
            Ok(output) => output,
            Err(e) => panic!("Run failed: {e}"),
        }
    }

    /// Run and return the error
    pub fn run_err(&self) -> ExtractError {
        match self.try_run() {
            Ok(output) => panic!("Expected an error, got {output:?}"),
            Err(e) => e,
        }
    }
}

impl Default for TestRun {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOutput {
    /// Stdout without the newline appended after the document
    pub fn document(&self) -> &str {
        self.stdout.strip_suffix('\n').unwrap_or(&self.stdout)
    }

    pub fn file(&self) -> &str {
        self.file.as_deref().expect("No output file was requested")
    }
}
