use spec_core::SpecConfigError;
use thiserror::Error;

/// Errores de la aplicación `specflow`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Suite mal formada: {0}")]
    Spec(#[from] SpecConfigError),
    #[error("Error al serializar el reporte: {0}")]
    Report(#[from] serde_json::Error),
}

impl AppError {
    /// Código de salida del proceso: 2 para suites o configuración mal
    /// formadas, 1 para el resto.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) | AppError::Spec(_) => 2,
            AppError::Io(_) | AppError::Report(_) => 1,
        }
    }
}
