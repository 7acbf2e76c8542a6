//! `Report`: proyección inmutable del log de eventos de una corrida.
//!
//! El reporte se obtiene con `Report::replay`, que consume los eventos en
//! orden de `seq`. Los conteos se recalculan a partir de los registros, no se
//! toman de `RunCompleted`.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::{RunEvent, RunEventKind};
use crate::model::{Outcome, OutcomeKind};
use crate::suite::ExampleId;

/// Resultado registrado de un ejemplo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub index: usize,
    pub path: Vec<String>,
    pub name: String,
    pub outcome: Outcome,
}

impl ExampleRecord {
    pub fn id(&self) -> ExampleId {
        ExampleId { path: self.path.clone(),
                    name: self.name.clone() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    fn count(&mut self, kind: OutcomeKind) {
        self.total += 1;
        match kind {
            OutcomeKind::Pass => self.passed += 1,
            OutcomeKind::Fail => self.failed += 1,
            OutcomeKind::Error => self.errored += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{} examples, {} passed, {} failed, {} errors",
               self.total, self.passed, self.failed, self.errored)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    run_id: Uuid,
    suite_fingerprint: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    records: Vec<ExampleRecord>,
    summary: Summary,
}

impl Report {
    /// Reconstruye el reporte a partir de los eventos de `run_id`.
    pub fn replay(run_id: Uuid, events: &[RunEvent]) -> Self {
        let mut report = Report { run_id,
                                  suite_fingerprint: None,
                                  started_at: None,
                                  finished_at: None,
                                  records: Vec::new(),
                                  summary: Summary::default() };
        for ev in events.iter().filter(|e| e.run_id == run_id) {
            match &ev.kind {
                RunEventKind::RunInitialized { suite_fingerprint, .. } => {
                    report.suite_fingerprint = Some(suite_fingerprint.clone());
                    report.started_at = Some(ev.ts);
                }
                RunEventKind::ExampleStarted { .. } => {}
                RunEventKind::ExampleFinished { index, path, name, outcome } => {
                    report.summary.count(outcome.kind());
                    report.records.push(ExampleRecord { index: *index,
                                                        path: path.clone(),
                                                        name: name.clone(),
                                                        outcome: outcome.clone() });
                }
                RunEventKind::RunAborted { .. } => {}
                RunEventKind::RunCompleted { .. } => report.finished_at = Some(ev.ts),
            }
        }
        report
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn suite_fingerprint(&self) -> Option<&str> {
        self.suite_fingerprint.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Registros en orden de ejecución (profundidad, orden de declaración).
    pub fn records(&self) -> &[ExampleRecord] {
        &self.records
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn is_success(&self) -> bool {
        self.summary.is_success()
    }

    /// La corrida llegó a `RunCompleted`.
    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Registros que no pasaron (fail o error).
    pub fn failures(&self) -> impl Iterator<Item = &ExampleRecord> {
        self.records.iter().filter(|r| !r.outcome.is_pass())
    }

    pub fn outcome_of(&self, path: &[&str], name: &str) -> Option<&Outcome> {
        self.records
            .iter()
            .find(|r| r.name == name && r.path.iter().map(String::as_str).eq(path.iter().copied()))
            .map(|r| &r.outcome)
    }
}
