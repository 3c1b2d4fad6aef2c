//! Asset loading with embedded fallbacks
//!
//! The HTML swatch page needs two assets: the page template and the
//! checkerboard pattern shown behind translucent swatches. Both are embedded
//! in the binary. A user template path overrides the embedded template when
//! the file exists; a missing path silently falls back to the default.

use base64::Engine;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded templates and images
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.tera"]
#[include = "*.svg"]
struct EmbeddedTemplates;

/// Name of the embedded HTML template
pub const HTML_TEMPLATE: &str = "html.tera";

/// Name of the embedded transparency pattern
pub const TRANSPARENT_PATTERN: &str = "transparent_pattern.svg";

/// Where a template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    File(PathBuf),
}

/// Asset loader with optional filesystem override for the HTML template
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// User template (from `--template-html`)
    template_html: Option<PathBuf>,
}

impl AssetLoader {
    pub fn new(template_html: Option<PathBuf>) -> Self {
        Self { template_html }
    }

    /// Resolve which template will be used, without reading it.
    pub fn html_template_source(&self) -> TemplateSource {
        match self.template_html {
            Some(ref path) if path.exists() => TemplateSource::File(path.clone()),
            Some(ref path) => {
                tracing::debug!(
                    path = %path.display(),
                    "Template not found, using embedded default"
                );
                TemplateSource::Embedded
            }
            None => TemplateSource::Embedded,
        }
    }

    /// Read the HTML template
    ///
    /// The user template wins if the file exists; otherwise the embedded
    /// default is used.
    pub fn read_html_template(&self) -> io::Result<(TemplateSource, String)> {
        let source = self.html_template_source();
        let content = match source {
            TemplateSource::File(ref path) => {
                tracing::trace!(path = %path.display(), "Loading template from filesystem");
                fs::read_to_string(path)?
            }
            TemplateSource::Embedded => read_embedded_string(HTML_TEMPLATE)?,
        };
        Ok((source, content))
    }

    /// The transparency pattern as a CSS `url()` value with a base64 data URI
    pub fn transparent_pattern_url(&self) -> io::Result<String> {
        let svg = read_embedded(TRANSPARENT_PATTERN)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_ref());
        Ok(format!("url(\"data:image/svg+xml;base64,{encoded}\")"))
    }
}

/// Read an embedded asset
pub fn read_embedded(name: &str) -> io::Result<Cow<'static, [u8]>> {
    EmbeddedTemplates::get(name)
        .map(|f| {
            tracing::trace!(name, "Loading embedded asset");
            f.data
        })
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Embedded asset not found: {name}"),
            )
        })
}

/// Read an embedded asset as a UTF-8 string
pub fn read_embedded_string(name: &str) -> io::Result<String> {
    let bytes = read_embedded(name)?;
    String::from_utf8(bytes.into_owned()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
