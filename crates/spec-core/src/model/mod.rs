//! Modelos neutrales del runner (resultado por ejemplo, fallos registrados).

pub mod outcome;

pub use outcome::{AssertionFailure, FaultInfo, Outcome, OutcomeKind, Phase};
