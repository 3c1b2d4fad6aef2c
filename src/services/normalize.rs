use color_notation::parse_color;

use crate::error::ExtractError;
use crate::models::{ColorSet, ExtractionOptions};

/// Re-encode extracted colors into the requested notation.
///
/// Without a `color_format` the values pass through untouched. Order is
/// preserved and no deduplication happens here, even when two spellings
/// encode to the same string.
pub fn normalize(raw: Vec<String>, options: &ExtractionOptions) -> Result<ColorSet, ExtractError> {
    let Some(format) = options.color_format else {
        return Ok(ColorSet::new(raw));
    };

    let encoded = raw
        .into_iter()
        .map(|token| match parse_color(&token) {
            Ok(color) => Ok(format.encode(color)),
            Err(source) => Err(ExtractError::ColorParse { token, source }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(%format, count = encoded.len(), "Normalized colors");
    Ok(ColorSet::new(encoded))
}
