use std::path::{Path, PathBuf};

use clap::ValueEnum;
use color_notation::{ColorFormat, Rgba};

use crate::services::format_selector::select_format;

/// Output representation produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Newline-separated color values (default, not selectable by flag)
    #[value(skip)]
    List,
    Css,
    Json,
    Html,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::List => "list",
            OutputFormat::Css => "css",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional ordering applied after extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Ascending hue, achromatic colors first
    Hue,
    /// Most frequently used first
    Frequency,
}

/// Options for one extraction run, built once from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionOptions {
    /// Drop greys (equal channels, black and white excepted)
    pub without_grey: bool,

    /// Drop every achromatic color, black and white included
    pub without_monochrome: bool,

    /// Keep only the colors the grey/monochrome filters would drop
    pub inverse: bool,

    /// Keep repeated colors instead of the first occurrence only
    pub all_colors: bool,

    pub sort: Option<SortOrder>,

    /// Re-encode every color into this notation
    pub color_format: Option<ColorFormat>,

    /// Explicit output format; wins over extension inference
    pub format: Option<OutputFormat>,

    /// User template for the HTML swatch page
    pub template_html: Option<PathBuf>,
}

impl ExtractionOptions {
    /// Whether any achromatic filter is active
    pub fn filters_achromatic(&self) -> bool {
        self.without_grey || self.without_monochrome
    }

    /// Apply the grey/monochrome filters (and `inverse`) to a parsed color.
    ///
    /// With no filter active every color is kept, `inverse` included.
    pub fn keeps(&self, color: Rgba) -> bool {
        if !self.filters_achromatic() {
            return true;
        }

        let filtered = (self.without_monochrome && color.is_monochrome())
            || (self.without_grey && color.is_grey());

        filtered == self.inverse
    }
}

/// Options with the output format decided
///
/// Derived once per run from [`ExtractionOptions`] and the output path. The
/// original options are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub options: ExtractionOptions,
    pub format: OutputFormat,
}

impl ResolvedOptions {
    pub fn resolve(options: ExtractionOptions, output_path: Option<&Path>) -> Self {
        let format = select_format(options.format, output_path);
        tracing::debug!(
            %format,
            explicit = options.format.is_some(),
            output = ?output_path.map(|p| p.display().to_string()),
            "Resolved output format"
        );
        Self { options, format }
    }
}

impl std::ops::Deref for ResolvedOptions {
    type Target = ExtractionOptions;

    fn deref(&self) -> &Self::Target {
        &self.options
    }
}
