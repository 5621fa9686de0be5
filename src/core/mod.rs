mod build;
mod query;
mod render;

pub use build::{DiagnosticSink, HIDDEN_MARKER, TracingSink, TreeBuilder};
pub use render::{MAX_RENDER_DEPTH, Rendered};
