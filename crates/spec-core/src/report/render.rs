//! Salidas del reporte: texto para la terminal y JSON.
use std::fmt;

use super::Report;
use crate::model::Outcome;

/// Vista de texto: un bloque por ejemplo que no pasó y la línea de resumen.
pub struct TextReport<'a>(pub &'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.0.failures() {
            match &record.outcome {
                Outcome::Fail(failure) => {
                    writeln!(f, "FAIL  {}", record.id())?;
                    writeln!(f, "      {} failed", failure.assertion)?;
                    writeln!(f, "      expected: {}", failure.expected)?;
                    writeln!(f, "      actual:   {}", failure.actual)?;
                    if let Some(message) = &failure.message {
                        writeln!(f, "      message:  {message}")?;
                    }
                }
                Outcome::Error(info) => {
                    writeln!(f, "ERROR {}", record.id())?;
                    let what = if info.panicked { "panic" } else { "fault" };
                    writeln!(f, "      {what} in {}: {}", info.phase, info.detail)?;
                }
                Outcome::Pass => {}
            }
        }
        write!(f, "{}", self.0.summary())
    }
}

pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
