//! Ejecución de la suite de aprendizaje y escritura del reporte.
use std::io::Write;
use std::panic;

use log::{debug, info};
use spec_core::assertion::is_active;
use spec_core::{render_json, ExampleId, Report, SpecEngine, TextReport};

use crate::config::{ReportFormat, RunnerConfig};
use crate::errors::AppError;
use crate::suites::{learning_suite, FIXTURE_FILE};

/// Ejecuta todos los ejemplos y escribe el reporte en `out`.
///
/// Un fallo de configuración de la suite se devuelve como
/// `AppError::Spec`; los fallos de los ejemplos quedan en el `Report`.
pub fn execute<W: Write>(config: &RunnerConfig, out: &mut W) -> Result<Report, AppError> {
    let suite = learning_suite(&config.fixture_dir)?;
    info!("suite lista: {} ejemplos, fixture {}", suite.example_count(), config.fixture_path(FIXTURE_FILE).display());

    let mut engine = SpecEngine::new();
    let report = engine.run(&suite)?;
    write_report(&report, config.format, out)?;
    Ok(report)
}

pub fn write_report<W: Write>(report: &Report, format: ReportFormat, out: &mut W) -> Result<(), AppError> {
    match format {
        ReportFormat::Text => writeln!(out, "{}", TextReport(report))?,
        ReportFormat::Json => writeln!(out, "{}", render_json(report)?)?,
    }
    Ok(())
}

/// Escribe los ejemplos declarados sin ejecutarlos. Devuelve cuántos son.
pub fn list_examples<W: Write>(config: &RunnerConfig, out: &mut W) -> Result<usize, AppError> {
    let ids: Vec<ExampleId> = learning_suite(&config.fixture_dir)?.example_ids();
    match config.format {
        ReportFormat::Text => {
            for id in &ids {
                writeln!(out, "{id}")?;
            }
        }
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&ids)?)?,
    }
    Ok(ids.len())
}

/// Los panics capturados dentro de un ejemplo ya quedan en el reporte: se
/// registran sólo a nivel `debug`. Cualquier otro panic va al hook previo.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
                        if is_active() {
                            debug!("panic capturado en un ejemplo: {info}");
                        } else {
                            previous(info);
                        }
                    }));
}
