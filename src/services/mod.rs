pub mod colors_only;
pub mod extractor;
pub mod format_selector;
pub mod io_driver;
pub mod normalize;
pub mod pipeline;
pub mod renderer;
pub mod stylesheet;
pub mod template_service;

pub use io_driver::{MockStdin, RealStdin, StdinReader};
pub use pipeline::ColorPipeline;
pub use renderer::{RenderRequest, Renderer};
pub use template_service::TemplateService;
