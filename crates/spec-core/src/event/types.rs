//! Tipos de evento de una corrida y estructura `RunEvent`.
//!
//! Rol en la corrida:
//! - Cada ejecución del `SpecEngine` emite eventos a un `EventStore`
//!   append-only.
//! - El `Report` final se reconstruye a partir de estos eventos (replay), sin
//!   depender de estructuras mutables compartidas.
//! - El enum `RunEventKind` define el contrato observable del runner.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Primer evento de un `run_id`: fija el fingerprint de la suite y la
    /// cantidad de ejemplos declarados.
    RunInitialized { suite_fingerprint: String, example_count: usize },
    /// Un ejemplo comenzó (antes de su cadena de setups). No implica éxito.
    ExampleStarted { index: usize, path: Vec<String>, name: String },
    /// Un ejemplo terminó con su resultado (pass, fail o error).
    ExampleFinished {
        index: usize,
        path: Vec<String>,
        name: String,
        outcome: Outcome,
    },
    /// Fallo de configuración durante la corrida; no habrá `RunCompleted`.
    RunAborted { index: usize, reason: String },
    /// Cierre de la corrida con sus conteos.
    RunCompleted { passed: usize, failed: usize, errored: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>,
}
