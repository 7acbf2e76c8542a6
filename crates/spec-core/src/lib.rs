//! spec-core: runner de especificaciones por ejemplos.
//!
//! Se declaran contextos anidados con setups y ejemplos (`should`), las
//! aserciones cortan el ejemplo en el primer fallo y el engine ejecuta todo
//! secuencialmente, aislando cada ejemplo y registrando un evento por
//! transición. El reporte final es una proyección del log de eventos.
pub mod assertion;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod report;
pub mod suite;

pub use assertion::{RaisesKind, Truthy};
pub use engine::{run, SpecEngine};
pub use errors::{ExampleResult, Fault, SpecConfigError};
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use hashing::suite_fingerprint;
pub use model::{AssertionFailure, FaultInfo, Outcome, OutcomeKind, Phase};
pub use report::{render_json, render_text, ExampleRecord, Report, Summary, TextReport};
pub use suite::{ContextBuilder, ExampleId, Suite, SuiteBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MathState {
        a: i64,
        b: i64,
    }

    fn math_suite() -> Suite<MathState> {
        Suite::build(|s| {
            s.context("Math", |c| {
                 c.setup(|st: &mut MathState| {
                      st.a = 2;
                      st.b = 3;
                      Ok(())
                  });
                 c.should("add", |st| {
                      crate::assert_equal!(5, st.a + st.b);
                      Ok(())
                  });
                 c.should("mul", |st| {
                      crate::assert_equal!(7, st.a * st.b);
                      Ok(())
                  });
             });
        }).expect("suite should build")
    }

    #[test]
    fn math_suite_reports_one_pass_one_fail() {
        let report = run(&math_suite()).expect("run should complete");
        assert_eq!(report.summary(),
                   Summary { total: 2,
                             passed: 1,
                             failed: 1,
                             errored: 0 });
        assert_eq!(report.outcome_of(&["Math"], "add"), Some(&Outcome::Pass));

        match report.outcome_of(&["Math"], "mul") {
            Some(Outcome::Fail(failure)) => {
                assert_eq!(failure.assertion, "assert_equal");
                assert_eq!(failure.expected, "7");
                assert_eq!(failure.actual, "6");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn report_is_reproducible_from_events() {
        let mut engine = SpecEngine::new();
        let report = engine.run(&math_suite()).expect("run should complete");
        let replayed = Report::replay(report.run_id(), &engine.events_for(report.run_id()));
        assert_eq!(replayed.records(), report.records());
        assert_eq!(replayed.summary(), report.summary());
        assert_eq!(replayed.suite_fingerprint(), report.suite_fingerprint());
    }
}
