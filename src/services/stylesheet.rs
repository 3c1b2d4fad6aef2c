//! Stylesheet structure used for color extraction.
//!
//! The stylesheet is tokenized with `cssparser` and reduced to the little
//! structure the extractor and the colors-only transform need: style rules
//! with their selector text, at-rules with nested children, and declarations
//! whose values are split into color tokens and surrounding text.
//!
//! Color tokens inside a value are:
//!
//! - hash tokens of 3, 4, 6 or 8 hex digits (`#fff`, `#ff000080`)
//! - `rgb()`, `rgba()`, `hsl()`, `hsla()` and `hwb()` functions that parse
//! - named color keywords, matched case-insensitively
//!
//! `transparent`, `currentcolor` and the CSS-wide keywords are not palette
//! colors and stay plain text. Other functions (`linear-gradient()`,
//! `var()`, …) are descended into, so colors inside gradients are found.
//!
//! At-rules without a block (`@import`, `@charset`) are discarded. Blocks of
//! other at-rules are parsed as nested stylesheets.

use color_notation::{is_color_function, named_color, parse, parse_color, Rgba};
use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};

/// A rule of the reduced stylesheet tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rule {
        selectors: String,
        declarations: Vec<Declaration>,
    },
    AtRule {
        /// Full prelude including the at-keyword, e.g. `@media (min-width: 40em)`
        prelude: String,
        children: Vec<Node>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: Vec<ValuePiece>,
    pub important: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValuePiece {
    Color { text: String, color: Rgba },
    Text(String),
}

impl Declaration {
    /// Color tokens of the value, in source order
    pub fn colors(&self) -> impl Iterator<Item = (&str, Rgba)> {
        self.value.iter().filter_map(|piece| match piece {
            ValuePiece::Color { text, color } => Some((text.as_str(), *color)),
            ValuePiece::Text(_) => None,
        })
    }
}

/// Properties whose values may carry colors.
const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "background",
    "background-color",
    "background-image",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-block",
    "border-block-start",
    "border-block-end",
    "border-inline",
    "border-inline-start",
    "border-inline-end",
    "border-image",
    "border-image-source",
    "outline",
    "box-shadow",
    "text-shadow",
    "column-rule",
    "text-decoration",
    "text-emphasis",
    "fill",
    "stroke",
];

/// Whether declarations of `property` are examined for colors.
///
/// Every `*-color` longhand and every custom property counts as well.
pub fn is_color_property(property: &str) -> bool {
    property.starts_with("--")
        || property.ends_with("-color")
        || COLOR_PROPERTIES.contains(&property)
}

/// Parse a stylesheet. Rules and declarations that fail to parse are skipped.
pub fn parse_stylesheet(css: &str) -> Vec<Node> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = TopLevelParser;

    let nodes: Vec<Node> = cssparser::StyleSheetParser::new(&mut parser, &mut rules)
        .filter_map(|result| match result {
            Ok(node) => Some(node),
            Err((error, text)) => {
                tracing::trace!(?error, text, "Skipping rule");
                None
            }
        })
        .collect();

    tracing::debug!(rules = nodes.len(), "Parsed stylesheet");
    nodes
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct TopLevelParser;

impl<'i> QualifiedRuleParser<'i> for TopLevelParser {
    type Prelude = String;
    type QualifiedRule = Node;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(collapse_whitespace(input.slice_from(start)))
    }

    fn parse_block<'t>(
        &mut self,
        selectors: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = StyleDeclarationParser;
        let declarations = RuleBodyParser::new(input, &mut decl_parser)
            .filter_map(Result::ok)
            .collect();

        Ok(Node::Rule {
            selectors,
            declarations,
        })
    }
}

impl<'i> AtRuleParser<'i> for TopLevelParser {
    type Prelude = String;
    type AtRule = Node;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let rest = collapse_whitespace(input.slice_from(start));

        if rest.is_empty() {
            Ok(format!("@{}", name.as_ref()))
        } else {
            Ok(format!("@{} {}", name.as_ref(), rest))
        }
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let children = cssparser::StyleSheetParser::new(input, self)
            .filter_map(Result::ok)
            .collect();

        Ok(Node::AtRule { prelude, children })
    }
}

struct StyleDeclarationParser;

impl<'i> DeclarationParser<'i> for StyleDeclarationParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let mut value = ValueBuilder::default();
        scan_tokens(input, &mut value)?;

        // Custom property names are case-sensitive
        let property = if name.starts_with("--") {
            name.as_ref().to_string()
        } else {
            name.as_ref().to_ascii_lowercase()
        };

        Ok(Declaration {
            property,
            important: value.important,
            value: value.finish(),
        })
    }
}

impl<'i> AtRuleParser<'i> for StyleDeclarationParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for StyleDeclarationParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for StyleDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct ValueBuilder {
    pieces: Vec<ValuePiece>,
    important: bool,
}

impl ValueBuilder {
    fn push_text(&mut self, text: &str) {
        if let Some(ValuePiece::Text(last)) = self.pieces.last_mut() {
            last.push_str(text);
        } else {
            self.pieces.push(ValuePiece::Text(text.to_string()));
        }
    }

    fn push_color(&mut self, text: &str, color: Rgba) {
        self.pieces.push(ValuePiece::Color {
            text: text.to_string(),
            color,
        });
    }

    /// Trim surrounding whitespace and drop pieces that become empty.
    fn finish(mut self) -> Vec<ValuePiece> {
        if let Some(ValuePiece::Text(first)) = self.pieces.first_mut() {
            *first = first.trim_start().to_string();
        }
        if let Some(ValuePiece::Text(last)) = self.pieces.last_mut() {
            *last = last.trim_end().to_string();
        }
        self.pieces
            .retain(|piece| !matches!(piece, ValuePiece::Text(text) if text.is_empty()));
        self.pieces
    }
}

/// Split the remaining tokens of `input` into color tokens and text.
fn scan_tokens<'i, 't>(
    input: &mut Parser<'i, 't>,
    out: &mut ValueBuilder,
) -> Result<(), ParseError<'i, ()>> {
    loop {
        let start = input.position();
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };

        match token {
            Token::WhiteSpace(_) => out.push_text(" "),
            Token::Delim('!') => {
                if input
                    .try_parse(|i| i.expect_ident_matching("important"))
                    .is_ok()
                {
                    out.important = true;
                } else {
                    out.push_text("!");
                }
            }
            Token::Hash(ref digits) | Token::IDHash(ref digits) => {
                let text = input.slice_from(start);
                match parse::parse_hex(digits) {
                    Ok(color) => out.push_color(text, color),
                    Err(_) => out.push_text(text),
                }
            }
            Token::Ident(ref name) => {
                let text = input.slice_from(start);
                match named_color(name) {
                    Some(color) => out.push_color(text, color),
                    None => out.push_text(text),
                }
            }
            Token::Function(ref name) if is_color_function(name) => {
                input.parse_nested_block(|nested| {
                    while nested.next_including_whitespace_and_comments().is_ok() {}
                    Ok::<(), ParseError<'i, ()>>(())
                })?;
                let text = input.slice_from(start);
                match parse_color(text) {
                    Ok(color) => out.push_color(text, color),
                    Err(_) => out.push_text(text),
                }
            }
            Token::Function(ref name) => {
                out.push_text(&format!("{}(", name.as_ref()));
                input.parse_nested_block(|nested| scan_tokens(nested, out))?;
                out.push_text(")");
            }
            Token::ParenthesisBlock => {
                out.push_text("(");
                input.parse_nested_block(|nested| scan_tokens(nested, out))?;
                out.push_text(")");
            }
            Token::SquareBracketBlock => {
                out.push_text("[");
                input.parse_nested_block(|nested| scan_tokens(nested, out))?;
                out.push_text("]");
            }
            Token::CurlyBracketBlock => {
                out.push_text("{");
                input.parse_nested_block(|nested| scan_tokens(nested, out))?;
                out.push_text("}");
            }
            _ => out.push_text(input.slice_from(start)),
        }
    }
}
