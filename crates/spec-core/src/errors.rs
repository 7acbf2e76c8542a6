//! Errores del runner.
//!
//! Se distinguen tres familias:
//! - `Fault::Assertion`: una expectativa no se cumplió. Se recupera en el
//!   borde del ejemplo y queda registrada como `Outcome::Fail`.
//! - `Fault::Unexpected`: cualquier otro fallo del código bajo prueba. También
//!   local al ejemplo, registrado como `Outcome::Error`.
//! - `SpecConfigError`: la suite está mal construida. No se recupera: aborta
//!   la construcción de la suite o la ejecución completa.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::AssertionFailure;

/// Uso incorrecto de la API de registro o de las aserciones.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SpecConfigError {
    #[error("context name must not be empty (declared under `{parent}`)")]
    EmptyContextName { parent: String },
    #[error("example name must not be empty (declared in `{context}`)")]
    EmptyExampleName { context: String },
    #[error("assertion `{assertion}` called outside of an active example")]
    AssertionOutsideExample { assertion: String },
    #[error("configuration fault raised by `{path} > {example}`: {reason}")]
    RaisedByExample { path: String, example: String, reason: String },
}

/// Resultado de un setup o del cuerpo de un ejemplo.
pub type ExampleResult = Result<(), Fault>;

/// Fallo que interrumpe el ejemplo en curso.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Fault {
    #[error("{0}")]
    Assertion(AssertionFailure),
    #[error("unexpected fault: {0}")]
    Unexpected(String),
    #[error(transparent)]
    Configuration(#[from] SpecConfigError),
}

impl Fault {
    /// Envuelve cualquier error del colaborador como fallo inesperado.
    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        Fault::Unexpected(detail.to_string())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Fault::Configuration(_))
    }
}

impl From<AssertionFailure> for Fault {
    fn from(failure: AssertionFailure) -> Self {
        Fault::Assertion(failure)
    }
}

// Errores habituales de colaboradores: permiten usar `?` dentro del cuerpo.
impl From<std::io::Error> for Fault {
    fn from(err: std::io::Error) -> Self {
        Fault::Unexpected(format!("io: {err}"))
    }
}

impl From<serde_json::Error> for Fault {
    fn from(err: serde_json::Error) -> Self {
        Fault::Unexpected(format!("json: {err}"))
    }
}

impl From<std::num::ParseIntError> for Fault {
    fn from(err: std::num::ParseIntError) -> Self {
        Fault::Unexpected(format!("parse int: {err}"))
    }
}

impl From<std::num::ParseFloatError> for Fault {
    fn from(err: std::num::ParseFloatError) -> Self {
        Fault::Unexpected(format!("parse float: {err}"))
    }
}

impl From<std::fmt::Error> for Fault {
    fn from(err: std::fmt::Error) -> Self {
        Fault::Unexpected(format!("fmt: {err}"))
    }
}

/// Texto legible de un payload de panic (`&str` o `String`).
pub(crate) fn describe_panic(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let e = SpecConfigError::EmptyContextName { parent: "<root>".into() };
        assert_eq!(e.to_string(), "context name must not be empty (declared under `<root>`)");

        let e = SpecConfigError::AssertionOutsideExample { assertion: "assert_equal".into() };
        assert_eq!(e.to_string(), "assertion `assert_equal` called outside of an active example");
    }

    #[test]
    fn io_error_converts_to_unexpected_fault() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let fault: Fault = io_err.into();
        assert_eq!(fault, Fault::Unexpected("io: missing.txt".into()));
        assert!(!fault.is_configuration());
    }

    #[test]
    fn configuration_fault_is_transparent() {
        let fault: Fault = SpecConfigError::EmptyExampleName { context: "Math".into() }.into();
        assert!(fault.is_configuration());
        assert_eq!(fault.to_string(), "example name must not be empty (declared in `Math`)");
    }
}
