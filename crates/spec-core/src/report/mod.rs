//! Reporte inmutable de una corrida y su representación de salida.

mod render;
mod types;

pub use render::{render_json, render_text, TextReport};
pub use types::{ExampleRecord, Report, Summary};
