use crate::assets::AssetLoader;
use crate::error::ExtractError;
use crate::models::{ColorSet, OutputFormat, ResolvedOptions};
use crate::services::colors_only::colors_only;
use crate::services::TemplateService;

/// Everything a renderer may look at
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub colors: &'a ColorSet,
    /// The stylesheet as read, for the colors-only transform
    pub source: &'a str,
    pub options: &'a ResolvedOptions,
}

/// One renderer per output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    List,
    Json,
    Css,
    Html,
}

impl From<OutputFormat> for Renderer {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::List => Renderer::List,
            OutputFormat::Json => Renderer::Json,
            OutputFormat::Css => Renderer::Css,
            OutputFormat::Html => Renderer::Html,
        }
    }
}

impl Renderer {
    /// Whether this renderer reads the extracted color set.
    /// The CSS renderer works on the source text directly.
    pub fn needs_colors(self) -> bool {
        !matches!(self, Renderer::Css)
    }

    pub fn render(self, request: &RenderRequest<'_>) -> Result<String, ExtractError> {
        let output = match self {
            Renderer::List => request.colors.as_slice().join("\n"),
            Renderer::Json => serde_json::to_string(request.colors)?,
            Renderer::Css => colors_only(request.source, &request.options.options),
            Renderer::Html => {
                let assets = AssetLoader::new(request.options.template_html.clone());
                TemplateService::new(assets).render(request.colors)?
            }
        };

        tracing::debug!(renderer = ?self, bytes = output.len(), "Rendered output");
        Ok(output)
    }
}
