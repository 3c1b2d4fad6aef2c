use crate::error::ExtractError;
use crate::models::{ColorSet, ResolvedOptions};
use crate::services::extractor;
use crate::services::normalize::normalize;
use crate::services::renderer::{RenderRequest, Renderer};

/// Pipeline that orchestrates extract → normalize → render
pub struct ColorPipeline {
    options: ResolvedOptions,
}

impl ColorPipeline {
    pub fn new(options: ResolvedOptions) -> Self {
        Self { options }
    }

    /// Produce the output document for one stylesheet
    pub fn process(&self, source: &str) -> Result<String, ExtractError> {
        let renderer = Renderer::from(self.options.format);

        let colors = if renderer.needs_colors() {
            let raw = extractor::from_css(source, &self.options);
            normalize(raw, &self.options)?
        } else {
            ColorSet::default()
        };

        tracing::debug!(
            format = %self.options.format,
            colors = colors.len(),
            source_len = source.len(),
            "Colors ready for rendering"
        );

        renderer.render(&RenderRequest {
            colors: &colors,
            source,
            options: &self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractionOptions, OutputFormat};
    use color_notation::ColorFormat;
    use pretty_assertions::assert_eq;

    const SHEET: &str = "a{color:#fff} b{color:rgb(0,0,0)} c{color:red}";

    fn pipeline(options: ExtractionOptions) -> ColorPipeline {
        ColorPipeline::new(ResolvedOptions::resolve(options, None))
    }

    #[test]
    fn test_list_default() {
        let output = pipeline(ExtractionOptions::default()).process(SHEET).unwrap();
        assert_eq!(output, "#fff\nrgb(0,0,0)\nred");
    }

    #[test]
    fn test_without_monochrome_list() {
        let output = pipeline(ExtractionOptions {
            without_monochrome: true,
            ..Default::default()
        })
        .process(SHEET)
        .unwrap();
        assert_eq!(output, "red");
    }

    #[test]
    fn test_json_with_color_format() {
        let output = pipeline(ExtractionOptions {
            format: Some(OutputFormat::Json),
            color_format: Some(ColorFormat::HexString),
            ..Default::default()
        })
        .process(SHEET)
        .unwrap();
        assert_eq!(output, r##"["#FFFFFF","#000000","#FF0000"]"##);
    }

    #[test]
    fn test_css_format() {
        let output = pipeline(ExtractionOptions {
            format: Some(OutputFormat::Css),
            without_monochrome: true,
            ..Default::default()
        })
        .process(SHEET)
        .unwrap();
        assert_eq!(output, "c {\n  color: red;\n}\n");
    }

    #[test]
    fn test_no_colors() {
        let output = pipeline(ExtractionOptions::default())
            .process("a { margin: 0 }")
            .unwrap();
        assert_eq!(output, "");
    }
}
