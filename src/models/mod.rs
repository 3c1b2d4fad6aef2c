pub mod color_set;
pub mod options;

pub use color_set::ColorSet;
pub use options::{ExtractionOptions, OutputFormat, ResolvedOptions, SortOrder};
