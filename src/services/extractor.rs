//! Color token extraction from stylesheets
//!
//! Walks the declarations of color-bearing properties and returns the color
//! tokens exactly as written in the source. Filters come from
//! [`ExtractionOptions::keeps`]; repeated tokens are collapsed to their first
//! occurrence unless `all_colors` is set.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use color_notation::Rgba;

use crate::models::{ExtractionOptions, SortOrder};
use crate::services::stylesheet::{is_color_property, parse_stylesheet, Node};

/// A color token found in the stylesheet
#[derive(Debug, Clone, PartialEq)]
pub struct FoundColor {
    pub text: String,
    pub color: Rgba,
}

/// Extract the color tokens of `css`, in document order.
///
/// Malformed CSS never fails: rules that cannot be parsed are skipped and
/// whatever parsed is searched.
pub fn from_css(css: &str, options: &ExtractionOptions) -> Vec<String> {
    let nodes = parse_stylesheet(css);

    let mut found = Vec::new();
    collect(&nodes, options, &mut found);

    let total = found.len();
    let colors = order(found, options);
    tracing::debug!(total, kept = colors.len(), "Extracted colors");

    colors.into_iter().map(|c| c.text).collect()
}

fn collect(nodes: &[Node], options: &ExtractionOptions, found: &mut Vec<FoundColor>) {
    for node in nodes {
        match node {
            Node::Rule { declarations, .. } => {
                for decl in declarations
                    .iter()
                    .filter(|d| is_color_property(&d.property))
                {
                    found.extend(
                        decl.colors()
                            .filter(|(_, color)| options.keeps(*color))
                            .map(|(text, color)| FoundColor {
                                text: text.to_string(),
                                color,
                            }),
                    );
                }
            }
            Node::AtRule { children, .. } => collect(children, options, found),
        }
    }
}

/// Deduplicate and sort according to the options.
fn order(found: Vec<FoundColor>, options: &ExtractionOptions) -> Vec<FoundColor> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for color in &found {
        *counts.entry(color.text.clone()).or_default() += 1;
    }

    let mut colors = if options.all_colors {
        found
    } else {
        let mut seen = HashSet::new();
        found
            .into_iter()
            .filter(|c| seen.insert(c.text.clone()))
            .collect()
    };

    // Both sorts are stable: ties keep document order
    match options.sort {
        Some(SortOrder::Hue) => colors.sort_by(|a, b| compare_hue(a.color, b.color)),
        Some(SortOrder::Frequency) => {
            colors.sort_by(|a, b| counts[&b.text].cmp(&counts[&a.text]))
        }
        None => {}
    }

    colors
}

/// Achromatic colors first (dark to light), then ascending hue.
fn compare_hue(a: Rgba, b: Rgba) -> Ordering {
    let key = |c: Rgba| {
        let hsl = c.to_hsl();
        if c.is_monochrome() {
            (0u8, hsl.l)
        } else {
            (1u8, hsl.h)
        }
    };
    let (a_group, a_value) = key(a);
    let (b_group, b_value) = key(b);
    a_group
        .cmp(&b_group)
        .then_with(|| a_value.total_cmp(&b_value))
}
