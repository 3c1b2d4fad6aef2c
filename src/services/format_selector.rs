use std::path::Path;

use crate::models::OutputFormat;

/// Output format implied by an output file extension.
///
/// The extension is compared case-sensitively, so `out.CSS` infers nothing.
pub fn format_for_extension(extension: &str) -> Option<OutputFormat> {
    match extension {
        "css" | "sass" | "scss" | "less" => Some(OutputFormat::Css),
        "json" | "js" => Some(OutputFormat::Json),
        "html" | "htm" => Some(OutputFormat::Html),
        _ => None,
    }
}

/// Decide the output format for a run.
///
/// An explicit format always wins. Otherwise the output path's extension is
/// consulted; an unknown or missing extension (or no output path at all)
/// falls back to [`OutputFormat::List`].
pub fn select_format(explicit: Option<OutputFormat>, output_path: Option<&Path>) -> OutputFormat {
    if let Some(format) = explicit {
        return format;
    }

    output_path
        .and_then(|path| path.extension())
        .and_then(|ext| ext.to_str())
        .and_then(format_for_extension)
        .unwrap_or(OutputFormat::List)
}
