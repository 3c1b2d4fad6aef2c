use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera};

use crate::assets::{AssetLoader, TemplateSource};
use crate::error::ExtractError;
use crate::models::ColorSet;

const TEMPLATE_NAME: &str = "swatches";

/// Values bound into the HTML template
#[derive(Debug, Serialize)]
struct SwatchPage<'a> {
    colors: &'a ColorSet,
    /// CSS `url()` of the checkerboard shown behind translucent colors
    transparent: String,
}

/// Service for rendering the HTML swatch page with Tera
pub struct TemplateService {
    assets: AssetLoader,
}

impl TemplateService {
    pub fn new(assets: AssetLoader) -> Self {
        Self { assets }
    }

    /// Register custom Tera functions
    fn register_functions(tera: &mut Tera) {
        // is_dark(color="#336699")
        tera.register_function(
            "is_dark",
            |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
                let value = args
                    .get("color")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| tera::Error::msg("is_dark requires a `color` string argument"))?;

                let color = color_notation::parse_color(value)
                    .map_err(|e| tera::Error::msg(format!("is_dark: '{value}': {e}")))?;

                Ok(tera::Value::Bool(color.is_dark()))
            },
        );
    }

    /// Render the swatch page for `colors`.
    /// The template is read fresh on every call.
    pub fn render(&self, colors: &ColorSet) -> Result<String, ExtractError> {
        let (source, template_content) = self.assets.read_html_template().map_err(|e| {
            match self.assets.html_template_source() {
                TemplateSource::File(path) => ExtractError::file(path, e),
                TemplateSource::Embedded => ExtractError::Io(e),
            }
        })?;

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &template_content)?;
        Self::register_functions(&mut tera);

        let page = SwatchPage {
            colors,
            transparent: self.assets.transparent_pattern_url()?,
        };
        let context = Context::from_serialize(&page)?;
        let html = tera.render(TEMPLATE_NAME, &context)?;

        tracing::debug!(
            template = ?source,
            colors = colors.len(),
            html_len = html.len(),
            "Template rendered successfully"
        );

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn colors(values: &[&str]) -> ColorSet {
        ColorSet::new(values.iter().map(|s| s.to_string()))
    }

    fn user_template(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_template() {
        let service = TemplateService::new(AssetLoader::default());
        let html = service.render(&colors(&["#000", "#fff"])).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("2 colors"));
        assert!(html.contains(r#"class="swatch dark" style="background-color: #000""#));
        assert!(html.contains(r#"class="swatch light" style="background-color: #fff""#));
        assert!(html.contains("url(\"data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_user_template() {
        let file = user_template(
            "{% for c in colors %}{{ c }}={{ is_dark(color=c) }};{% endfor %}",
        );
        let service = TemplateService::new(AssetLoader::new(Some(file.path().to_path_buf())));

        let html = service.render(&colors(&["navy", "rgb(255, 255, 0)"])).unwrap();
        assert_eq!(html, "navy=true;rgb(255, 255, 0)=false;");
    }

    #[test]
    fn test_missing_template_uses_default() {
        let service =
            TemplateService::new(AssetLoader::new(Some(PathBuf::from("/nonexistent/page.tera"))));
        let html = service.render(&colors(&["red"])).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_transparent_binding() {
        let file = user_template("{{ transparent }}");
        let service = TemplateService::new(AssetLoader::new(Some(file.path().to_path_buf())));

        let html = service.render(&colors(&[])).unwrap();
        assert!(html.starts_with("url(\"data:image/svg+xml;base64,"));
        assert!(html.ends_with("\")"));
    }

    #[test]
    fn test_broken_template_is_template_error() {
        let file = user_template("{% for c in colors %}");
        let service = TemplateService::new(AssetLoader::new(Some(file.path().to_path_buf())));

        let err = service.render(&colors(&["red"])).unwrap_err();
        assert!(matches!(err, ExtractError::TemplateRender(_)));
    }

    #[test]
    fn test_is_dark_rejects_non_colors() {
        let file = user_template("{{ is_dark(color=\"nope\") }}");
        let service = TemplateService::new(AssetLoader::new(Some(file.path().to_path_buf())));

        let err = service.render(&colors(&[])).unwrap_err();
        assert!(matches!(err, ExtractError::TemplateRender(_)));
    }
}
