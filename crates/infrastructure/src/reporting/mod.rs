//! Suite report rendering.

mod text;

pub use text::TextReporter;
