//! Input acquisition and output writing
//!
//! Piped standard input always takes precedence over the input file, so
//! `cat a.css | css-color-extractor b.css` reads `a.css`. Stdin is read
//! through [`StdinReader`] so tests can simulate a terminal or a pipe.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use crate::error::ExtractError;
use crate::models::{ExtractionOptions, ResolvedOptions};
use crate::services::pipeline::ColorPipeline;

/// Abstraction over stdin reading.
pub trait StdinReader {
    /// Returns `true` if stdin is interactive, `false` if piped.
    fn is_terminal(&self) -> bool;

    /// Read all content from stdin.
    fn read_to_string(&self) -> io::Result<String>;
}

/// Real stdin reader using std::io.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Mock stdin reader for testing.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: Option<String>,
}

impl MockStdin {
    /// A terminal: nothing piped.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: None,
        }
    }

    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            is_terminal: false,
            content: Some(content.into()),
        }
    }

    pub fn piped_empty() -> Self {
        Self::piped(String::new())
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.content.clone().unwrap_or_default())
    }
}

/// Run one extraction against the real stdin and stdout.
pub fn run(
    input: Option<&Path>,
    output: Option<&Path>,
    options: ExtractionOptions,
) -> Result<(), ExtractError> {
    let stdout = io::stdout();
    run_with(input, output, options, &RealStdin, &mut stdout.lock())
}

/// Run one extraction with injected stdin and stdout.
pub fn run_with<R, W>(
    input: Option<&Path>,
    output: Option<&Path>,
    options: ExtractionOptions,
    stdin: &R,
    stdout: &mut W,
) -> Result<(), ExtractError>
where
    R: StdinReader + ?Sized,
    W: Write + ?Sized,
{
    let source = read_input(input, stdin)?;
    let pipeline = ColorPipeline::new(ResolvedOptions::resolve(options, output));
    let rendered = pipeline.process(&source)?;
    write_output(&rendered, output, stdout)
}

/// Read the stylesheet from piped stdin, or from `input` when stdin is a
/// terminal.
pub fn read_input<R: StdinReader + ?Sized>(
    input: Option<&Path>,
    stdin: &R,
) -> Result<String, ExtractError> {
    if !stdin.is_terminal() {
        let data = stdin.read_to_string()?;
        if data.is_empty() {
            return Err(ExtractError::NoInput);
        }
        if let Some(path) = input {
            tracing::debug!(path = %path.display(), "Stdin is piped, ignoring input file");
        }
        tracing::debug!(bytes = data.len(), "Read stylesheet from stdin");
        return Ok(data);
    }

    let path = input.ok_or(ExtractError::NoInput)?;
    let data = fs::read_to_string(path).map_err(|e| ExtractError::file(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "Read stylesheet");
    Ok(data)
}

/// Write to `output` (truncating, no trailing newline) or to stdout
/// followed by a newline.
pub fn write_output<W: Write + ?Sized>(
    rendered: &str,
    output: Option<&Path>,
    stdout: &mut W,
) -> Result<(), ExtractError> {
    match output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| ExtractError::file(path, e))?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "Output written");
        }
        None => {
            writeln!(stdout, "{rendered}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
