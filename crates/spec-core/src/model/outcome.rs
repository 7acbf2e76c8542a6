//! Resultado registrado de un ejemplo.
//!
//! Un ejemplo termina en `Pass`, `Fail` (expectativa rota, con los valores
//! esperado y obtenido tal como se muestran con `Debug`) o `Error` (el código
//! bajo prueba falló de forma no prevista). Los valores se guardan como texto
//! para que el `Report` sea dato plano serializable.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Expectativa rota por una primitiva de aserción.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionFailure {
    /// Nombre de la primitiva que falló (`assert_equal`, ...).
    pub assertion: String,
    pub expected: String,
    pub actual: String,
    /// Mensaje opcional provisto por quien escribe el ejemplo.
    pub message: Option<String>,
}

impl AssertionFailure {
    pub fn new(assertion: &str, expected: impl Into<String>, actual: impl Into<String>, message: Option<String>) -> Self {
        Self { assertion: assertion.to_string(),
               expected: expected.into(),
               actual: actual.into(),
               message }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: expected {}, actual {}", self.assertion, self.expected, self.actual)?;
        if let Some(message) = &self.message {
            write!(f, " ({message})")?;
        }
        Ok(())
    }
}

/// Fase del ejemplo en la que ocurrió un fallo inesperado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Setup heredado; `depth` es la posición en la cadena (0 = el más
    /// externo).
    Setup { depth: usize },
    Body,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup { depth } => write!(f, "setup[{depth}]"),
            Phase::Body => write!(f, "body"),
        }
    }
}

/// Información de un fallo no previsto (error devuelto o panic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultInfo {
    pub phase: Phase,
    pub detail: String,
    pub panicked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Pass,
    Fail(AssertionFailure),
    Error(FaultInfo),
}

/// Discriminante sin datos, útil para contar y filtrar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Pass,
    Fail,
    Error,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Pass => OutcomeKind::Pass,
            Outcome::Fail(_) => OutcomeKind::Fail,
            Outcome::Error(_) => OutcomeKind::Error,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}
