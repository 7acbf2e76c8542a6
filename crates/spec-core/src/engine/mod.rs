//! Engine module: ejecución secuencial de la suite.
//!
//! Provee `SpecEngine` (ejecución + log de eventos) y el atajo `run`, que usa
//! un store en memoria y devuelve el `Report` final.

pub mod core;

pub use core::SpecEngine;

use crate::errors::SpecConfigError;
use crate::report::Report;
use crate::suite::Suite;

/// Ejecuta todos los ejemplos de `suite` una vez, en orden de declaración.
///
/// Los fallos de aserción y los errores inesperados quedan en el reporte; un
/// fallo de configuración aborta la corrida y se devuelve como `Err`.
pub fn run<S: Default>(suite: &Suite<S>) -> Result<Report, SpecConfigError> {
    SpecEngine::new().run(suite)
}
