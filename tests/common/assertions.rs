//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert a list document holds exactly `expected`, in order
pub fn assert_list(document: &str, expected: &[&str]) {
    let actual: Vec<&str> = if document.is_empty() {
        Vec::new()
    } else {
        document.split('\n').collect()
    };
    assert_eq!(actual, expected, "Unexpected list output: {document:?}");
}

/// Parse a JSON document as an array of color strings
pub fn json_colors(document: &str) -> Vec<String> {
    match serde_json::from_str(document) {
        Ok(colors) => colors,
        Err(e) => panic!("Expected a JSON array of strings ({e}), got: {document}"),
    }
}

/// Assert a document is a complete HTML page
pub fn assert_html_page(document: &str) {
    assert!(
        document.starts_with("<!DOCTYPE html>"),
        "Expected an HTML document, got: {}",
        &document[..80.min(document.len())]
    );
    assert!(document.trim_end().ends_with("</html>"));
}

/// Assert a document is a colors-only stylesheet: every declaration line
/// names a color-bearing property
pub fn assert_colors_only_css(document: &str) {
    for line in document.lines().filter(|l| l.trim_end().ends_with(';')) {
        let property = line.trim().split(':').next().unwrap_or_default();
        assert!(
            property.starts_with("--")
                || property.ends_with("color")
                || ["box-shadow", "text-shadow", "background-image", "fill", "stroke"]
                    .contains(&property),
            "Unexpected declaration in colors-only output: {line}"
        );
    }
}
