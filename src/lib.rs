//! css-color-extractor
//!
//! Extracts the colors used in a CSS stylesheet and writes them as a plain
//! list, a JSON array, a colors-only stylesheet or an HTML swatch page.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
