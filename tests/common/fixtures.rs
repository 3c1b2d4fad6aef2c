//! Test fixtures and constants.

/// Stylesheets used across scenarios
pub mod sheets {
    /// White, black and red, one rule each
    pub const MIXED: &str = "a{color:#fff} b{color:rgb(0,0,0)} c{color:red}";

    /// Two saturated colors
    pub const TWO_HEX: &str = "a { color: #ff0000 } b { background-color: #00ff00 }";

    /// A realistic stylesheet with shorthands, at-rules and repeats
    pub const SITE: &str = r#"
@charset "utf-8";

:root {
  --brand: #336699;
  --muted: #999;
}

body {
  margin: 0;
  color: #333;
  background: #fff url(noise.png) repeat;
  font: 16px/1.5 "Helvetica Neue", Arial, sans-serif;
}

a,
a:visited {
  color: #336699;
  text-decoration: underline dotted tomato;
}

.card {
  border: 1px solid #ddd;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);
  padding: 1em;
}

@media (prefers-color-scheme: dark) {
  body {
    color: #eee;
    background: hsl(210, 20%, 12%);
  }
}
"#;

    /// Valid CSS without a single color
    pub const COLORLESS: &str = "p { margin: 0; padding: 1em; font-weight: bold }";
}

/// Every output extension and the format it implies
pub const EXTENSIONS: &[(&str, &str)] = &[
    ("css", "css"),
    ("sass", "css"),
    ("scss", "css"),
    ("less", "css"),
    ("json", "json"),
    ("js", "json"),
    ("html", "html"),
    ("htm", "html"),
];
