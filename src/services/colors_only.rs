//! Colors-only CSS transform
//!
//! Reduces a stylesheet to the declarations that carry colors. Shorthands
//! are narrowed to their color longhand, so `border: 1px solid red` becomes
//! `border-color: red`. Rules left without declarations disappear, as do
//! at-rule blocks left without rules.

use color_notation::Rgba;

use crate::models::ExtractionOptions;
use crate::services::stylesheet::{is_color_property, parse_stylesheet, Declaration, Node, ValuePiece};

const INDENT: &str = "  ";

/// Color longhand a shorthand property narrows to.
fn color_longhand(property: &str) -> Option<&'static str> {
    Some(match property {
        "background" => "background-color",
        "border" => "border-color",
        "border-top" => "border-top-color",
        "border-right" => "border-right-color",
        "border-bottom" => "border-bottom-color",
        "border-left" => "border-left-color",
        "border-block" => "border-block-color",
        "border-block-start" => "border-block-start-color",
        "border-block-end" => "border-block-end-color",
        "border-inline" => "border-inline-color",
        "border-inline-start" => "border-inline-start-color",
        "border-inline-end" => "border-inline-end-color",
        "outline" => "outline-color",
        "column-rule" => "column-rule-color",
        "text-decoration" => "text-decoration-color",
        "text-emphasis" => "text-emphasis-color",
        _ => return None,
    })
}

/// Transform `css` into a stylesheet holding only color declarations.
pub fn colors_only(css: &str, options: &ExtractionOptions) -> String {
    let nodes = parse_stylesheet(css);
    render_nodes(&nodes, options, 0)
}

fn render_nodes(nodes: &[Node], options: &ExtractionOptions, depth: usize) -> String {
    nodes
        .iter()
        .filter_map(|node| render_node(node, options, depth))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_node(node: &Node, options: &ExtractionOptions, depth: usize) -> Option<String> {
    let indent = INDENT.repeat(depth);

    match node {
        Node::Rule {
            selectors,
            declarations,
        } => {
            let kept: Vec<String> = declarations
                .iter()
                .filter_map(|decl| color_declaration(decl, options))
                .collect();
            if kept.is_empty() {
                return None;
            }

            let mut out = format!("{indent}{selectors} {{\n");
            for decl in kept {
                out.push_str(&format!("{indent}{INDENT}{decl};\n"));
            }
            out.push_str(&format!("{indent}}}\n"));
            Some(out)
        }
        Node::AtRule { prelude, children } => {
            let body = render_nodes(children, options, depth + 1);
            if body.is_empty() {
                return None;
            }
            Some(format!("{indent}{prelude} {{\n{body}{indent}}}\n"))
        }
    }
}

fn encode(text: &str, color: Rgba, options: &ExtractionOptions) -> String {
    match options.color_format {
        Some(format) => format.encode(color),
        None => text.to_string(),
    }
}

/// Render one declaration as `property: value`, or `None` when it keeps no
/// color.
///
/// Shorthands keep only their first surviving color. Other properties lose
/// every comma-separated layer or gradient stop holding a filtered color,
/// and are dropped when no color survives.
fn color_declaration(decl: &Declaration, options: &ExtractionOptions) -> Option<String> {
    if !is_color_property(&decl.property) {
        return None;
    }

    let (property, value) = match color_longhand(&decl.property) {
        Some(longhand) => {
            let (text, color) = decl.colors().find(|(_, color)| options.keeps(*color))?;
            (longhand, encode(text, color, options))
        }
        None => {
            let kept = retain_kept(split_segments(&decl.value), options);
            if !has_color(&kept) {
                return None;
            }
            (decl.property.as_str(), render_segments(&kept, options))
        }
    };

    if decl.important {
        Some(format!("{property}: {value} !important"))
    } else {
        Some(format!("{property}: {value}"))
    }
}

/// A value item. Parenthesized contents nest as their own segment lists.
#[derive(Debug)]
enum Item<'a> {
    Text(String),
    Color { text: &'a str, color: Rgba },
    Group(Vec<Vec<Item<'a>>>),
}

/// The last segment of `segments`, created if needed.
fn last_segment<'s, 'a>(segments: &'s mut Vec<Vec<Item<'a>>>) -> &'s mut Vec<Item<'a>> {
    if segments.is_empty() {
        segments.push(Vec::new());
    }
    let last = segments.len() - 1;
    &mut segments[last]
}

fn push_char(segments: &mut Vec<Vec<Item<'_>>>, ch: char) {
    let segment = last_segment(segments);
    match segment.last_mut() {
        Some(Item::Text(text)) => text.push(ch),
        _ => segment.push(Item::Text(ch.to_string())),
    }
}

/// Split a value into comma-separated segments, nesting at parentheses.
fn split_segments(pieces: &[ValuePiece]) -> Vec<Vec<Item<'_>>> {
    let mut current: Vec<Vec<Item>> = vec![Vec::new()];
    let mut parents: Vec<Vec<Vec<Item>>> = Vec::new();
    let mut quote: Option<char> = None;

    for piece in pieces {
        let text = match piece {
            ValuePiece::Color { text, color } => {
                last_segment(&mut current).push(Item::Color {
                    text: text.as_str(),
                    color: *color,
                });
                continue;
            }
            ValuePiece::Text(text) => text,
        };

        for ch in text.chars() {
            match (quote, ch) {
                (Some(open), _) => {
                    if ch == open {
                        quote = None;
                    }
                    push_char(&mut current, ch);
                }
                (None, '"' | '\'') => {
                    quote = Some(ch);
                    push_char(&mut current, ch);
                }
                (None, '(') => {
                    push_char(&mut current, ch);
                    parents.push(std::mem::replace(&mut current, vec![Vec::new()]));
                }
                (None, ')') if !parents.is_empty() => {
                    close_group(&mut current, &mut parents);
                    push_char(&mut current, ch);
                }
                (None, ',') => current.push(Vec::new()),
                _ => push_char(&mut current, ch),
            }
        }
    }

    while !parents.is_empty() {
        close_group(&mut current, &mut parents);
    }
    current
}

fn close_group<'a>(current: &mut Vec<Vec<Item<'a>>>, parents: &mut Vec<Vec<Vec<Item<'a>>>>) {
    if let Some(parent) = parents.pop() {
        let inner = std::mem::replace(current, parent);
        last_segment(current).push(Item::Group(inner));
    }
}

/// Drop every segment holding a filtered color. A group left empty takes
/// its enclosing segment with it.
fn retain_kept<'a>(segments: Vec<Vec<Item<'a>>>, options: &ExtractionOptions) -> Vec<Vec<Item<'a>>> {
    let count = segments.len();
    let mut kept: Vec<(usize, Vec<Item<'a>>)> = segments
        .into_iter()
        .enumerate()
        .filter_map(|(index, segment)| Some((index, retain_segment(segment, options)?)))
        .collect();

    // Separator whitespace of dropped neighbours
    if let Some((index, segment)) = kept.first_mut() {
        if *index != 0 {
            if let Some(Item::Text(text)) = segment.first_mut() {
                *text = text.trim_start().to_string();
            }
        }
    }
    if let Some((index, segment)) = kept.last_mut() {
        if *index != count - 1 {
            if let Some(Item::Text(text)) = segment.last_mut() {
                *text = text.trim_end().to_string();
            }
        }
    }

    kept.into_iter().map(|(_, segment)| segment).collect()
}

fn retain_segment<'a>(segment: Vec<Item<'a>>, options: &ExtractionOptions) -> Option<Vec<Item<'a>>> {
    segment
        .into_iter()
        .map(|item| match item {
            Item::Color { color, .. } if !options.keeps(color) => None,
            Item::Group(inner) => {
                let inner = retain_kept(inner, options);
                (!inner.is_empty()).then_some(Item::Group(inner))
            }
            item => Some(item),
        })
        .collect()
}

fn has_color(segments: &[Vec<Item<'_>>]) -> bool {
    segments.iter().flatten().any(|item| match item {
        Item::Color { .. } => true,
        Item::Group(inner) => has_color(inner),
        Item::Text(_) => false,
    })
}

fn render_segments(segments: &[Vec<Item<'_>>], options: &ExtractionOptions) -> String {
    segments
        .iter()
        .map(|segment| {
            segment
                .iter()
                .map(|item| match item {
                    Item::Text(text) => text.clone(),
                    Item::Color { text, color } => encode(text, *color, options),
                    Item::Group(inner) => render_segments(inner, options),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(",")
}
