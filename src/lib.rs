//! specflow Rust Library
//!
//! Este crate arma la aplicación alrededor de `spec-core`:
//! - Expone `config` para leer la configuración del runner (.env + entorno).
//! - Expone `errors` con los errores de la aplicación.
//! - Expone `suites` con las suites de aprendizaje.
//! - Expone `runner` para ejecutar la suite y escribir el reporte.
//!
//! Puede usarse desde `main.rs` o desde los tests de integración.

pub mod config;
pub mod errors;
pub mod runner;
pub mod suites;
