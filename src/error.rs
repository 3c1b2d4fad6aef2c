use std::path::PathBuf;

use color_notation::ParseColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// No input file was given and nothing was piped in.
    ///
    /// The CLI answers this one with usage text instead of an error message.
    #[error("No input specified.")]
    NoInput,

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot convert color '{token}': {source}")]
    ColorParse {
        token: String,
        #[source]
        source: ParseColorError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateRender(#[from] tera::Error),
}

impl ExtractError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::File {
            path: path.into(),
            source,
        }
    }

    /// Whether the CLI should print usage instead of the message.
    pub fn is_no_input(&self) -> bool {
        matches!(self, ExtractError::NoInput)
    }
}
