//! UI channel infrastructure module

mod json_lines;
mod transport;

pub use json_lines::{JsonLinesSink, JsonLinesSource};
pub use transport::{connect_unix, open, stdio, UiEndpoints};
