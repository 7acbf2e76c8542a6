//! Core SpecEngine implementation

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, error, info, warn};
use uuid::Uuid;

use crate::assertion::ActiveExample;
use crate::errors::{describe_panic, ExampleResult, Fault, SpecConfigError};
use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
use crate::hashing::suite_fingerprint;
use crate::model::{FaultInfo, Outcome, Phase};
use crate::report::{Report, Summary};
use crate::suite::{ExampleId, PlannedExample, Suite};

/// Motor de ejecución de suites.
///
/// Recorre el árbol en profundidad, corre cada ejemplo sobre un contenedor
/// de estado nuevo (`S::default()` + cadena de setups, raíz primero) y emite
/// un evento por transición al `EventStore`. El `Report` se obtiene por replay
/// del log al terminar.
#[derive(Debug)]
pub struct SpecEngine<E: EventStore> {
    event_store: E,
    last_run_id: Option<Uuid>,
}

impl SpecEngine<InMemoryEventStore> {
    /// Crea un engine con store en memoria.
    pub fn new() -> Self {
        Self::new_with_store(InMemoryEventStore::default())
    }
}

impl Default for SpecEngine<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventStore> SpecEngine<E> {
    pub fn new_with_store(event_store: E) -> Self {
        Self { event_store,
               last_run_id: None }
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// `run_id` de la última corrida iniciada (completa o abortada).
    pub fn last_run_id(&self) -> Option<Uuid> {
        self.last_run_id
    }

    pub fn events_for(&self, run_id: Uuid) -> Vec<RunEvent> {
        self.event_store.list(run_id)
    }

    /// Ejecuta la suite completa y devuelve el reporte finalizado.
    pub fn run<S: Default>(&mut self, suite: &Suite<S>) -> Result<Report, SpecConfigError> {
        let run_id = Uuid::new_v4();
        self.last_run_id = Some(run_id);

        let plan = suite.plan();
        let ids: Vec<ExampleId> = plan.iter().map(PlannedExample::id).collect();
        let fingerprint = suite_fingerprint(&ids);
        info!("run:start run_id={run_id} examples={} fingerprint={fingerprint}", plan.len());
        self.event_store.append_kind(run_id,
                                     RunEventKind::RunInitialized { suite_fingerprint: fingerprint,
                                                                    example_count: plan.len() });

        let mut summary = Summary::default();
        for planned in &plan {
            let label = planned.id().to_string();
            self.event_store.append_kind(run_id,
                                         RunEventKind::ExampleStarted { index: planned.index,
                                                                        path: planned.path.clone(),
                                                                        name: planned.name.to_string() });
            debug!("example:start run_id={run_id} index={} {label}", planned.index);

            let outcome = match execute(planned) {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!("run:aborted run_id={run_id} index={} {label}: {err}", planned.index);
                    self.event_store.append_kind(run_id,
                                                 RunEventKind::RunAborted { index: planned.index,
                                                                            reason: err.to_string() });
                    return Err(err);
                }
            };

            match &outcome {
                Outcome::Pass => summary.passed += 1,
                Outcome::Fail(failure) => {
                    summary.failed += 1;
                    warn!("example:fail {label}: {failure}");
                }
                Outcome::Error(info) => {
                    summary.errored += 1;
                    warn!("example:error {label} ({}): {}", info.phase, info.detail);
                }
            }
            debug!("example:done run_id={run_id} index={} kind={:?}", planned.index, outcome.kind());
            self.event_store.append_kind(run_id,
                                         RunEventKind::ExampleFinished { index: planned.index,
                                                                         path: planned.path.clone(),
                                                                         name: planned.name.to_string(),
                                                                         outcome });
        }

        self.event_store.append_kind(run_id,
                                     RunEventKind::RunCompleted { passed: summary.passed,
                                                                  failed: summary.failed,
                                                                  errored: summary.errored });
        let report = Report::replay(run_id, &self.event_store.list(run_id));
        info!("run:done run_id={run_id} {}", report.summary());
        Ok(report)
    }
}

/// Corre setups + cuerpo de un ejemplo, aislando fallos y panics.
fn execute<S: Default>(planned: &PlannedExample<'_, S>) -> Result<Outcome, SpecConfigError> {
    let phase = Cell::new(Phase::Setup { depth: 0 });
    let result = {
        let _active = ActiveExample::enter();
        catch_unwind(AssertUnwindSafe(|| -> ExampleResult {
            let mut state = S::default();
            for (depth, setup) in planned.setups.iter().enumerate() {
                phase.set(Phase::Setup { depth });
                setup(&mut state)?;
            }
            phase.set(Phase::Body);
            (planned.body)(&mut state)
        }))
    };

    let outcome = match result {
        Ok(Ok(())) => Outcome::Pass,
        Ok(Err(Fault::Assertion(failure))) => Outcome::Fail(failure),
        Ok(Err(Fault::Unexpected(detail))) => Outcome::Error(FaultInfo { phase: phase.get(),
                                                                         detail,
                                                                         panicked: false }),
        Ok(Err(Fault::Configuration(err))) => {
            return Err(SpecConfigError::RaisedByExample { path: planned.path.join(" > "),
                                                          example: planned.name.to_string(),
                                                          reason: err.to_string() })
        }
        Err(payload) => Outcome::Error(FaultInfo { phase: phase.get(),
                                                   detail: describe_panic(payload.as_ref()),
                                                   panicked: true }),
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        hits: u32,
    }

    fn sample_suite() -> Suite<Counter> {
        Suite::build(|s| {
            s.context("Counter", |c| {
                 c.setup(|st: &mut Counter| {
                      st.hits += 1;
                      Ok(())
                  });
                 c.should("sees one hit", |st| {
                      crate::assert_equal!(1, st.hits);
                      Ok(())
                  });
                 c.should("fails on purpose", |st| {
                      crate::assert_equal!(2, st.hits, "only one setup ran");
                      Ok(())
                  });
             });
        }).expect("suite should build")
    }

    #[test]
    fn run_emits_events_in_order() {
        let mut engine = SpecEngine::new();
        let report = engine.run(&sample_suite()).expect("run should complete");
        let run_id = engine.last_run_id().expect("run id");
        assert_eq!(report.run_id(), run_id);

        let kinds: Vec<&'static str> = engine.events_for(run_id)
                                             .iter()
                                             .map(|e| match e.kind {
                                                 RunEventKind::RunInitialized { .. } => "I",
                                                 RunEventKind::ExampleStarted { .. } => "S",
                                                 RunEventKind::ExampleFinished { .. } => "F",
                                                 RunEventKind::RunAborted { .. } => "A",
                                                 RunEventKind::RunCompleted { .. } => "C",
                                             })
                                             .collect();
        assert_eq!(kinds, vec!["I", "S", "F", "S", "F", "C"]);
        assert!(report.is_complete());
        assert_eq!(report.summary().passed, 1);
        assert_eq!(report.summary().failed, 1);
    }

    #[test]
    fn fault_in_setup_records_phase() {
        let suite = Suite::<Counter>::build(|s| {
                        s.context("Broken", |c| {
                             c.setup(|_| Err(Fault::unexpected("db down")));
                             c.should("never reaches body", |_| Ok(()));
                         });
                    }).expect("suite should build");
        let report = SpecEngine::new().run(&suite).expect("run should complete");
        assert_eq!(report.records()[0].outcome,
                   Outcome::Error(FaultInfo { phase: Phase::Setup { depth: 0 },
                                              detail: "db down".into(),
                                              panicked: false }));
    }
}
