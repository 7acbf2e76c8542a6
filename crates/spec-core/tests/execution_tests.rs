use spec_core::event::{EventStore, RunEventKind};
use spec_core::{assert_equal, assert_nothing_raised, assert_true, Fault, Outcome, Phase, SpecConfigError, SpecEngine, Suite};

#[derive(Default, Debug)]
struct State {
    x: i32,
    trail: Vec<&'static str>,
}

#[test]
fn setup_reruns_for_every_example() {
    let suite = Suite::<State>::build(|s| {
                    s.context("Math", |c| {
                         c.setup(|st| {
                              st.x = 1;
                              Ok(())
                          });
                         c.should("doubles x", |st| {
                              st.x *= 2;
                              assert_equal!(2, st.x);
                              Ok(())
                          });
                         c.should("x stays 1", |st| {
                              assert_equal!(1, st.x);
                              Ok(())
                          });
                     });
                }).expect("suite should build");

    let report = spec_core::run(&suite).expect("run should complete");
    assert_eq!(report.summary().passed, 2);
    assert!(report.is_success());
}

#[test]
fn setup_chain_runs_root_first() {
    let suite = Suite::<State>::build(|s| {
                    s.context("Outer", |c| {
                         c.setup(|st| {
                              st.trail.push("outer");
                              Ok(())
                          });
                         c.context("Middle without setup", |c| {
                              c.context("Inner", |c| {
                                   c.setup(|st| {
                                        st.trail.push("inner");
                                        Ok(())
                                    });
                                   c.should("sees both setups in order", |st| {
                                        assert_equal!(vec!["outer", "inner"], st.trail);
                                        Ok(())
                                    });
                               });
                          });
                         c.should("sees only the outer setup", |st| {
                              assert_equal!(vec!["outer"], st.trail);
                              Ok(())
                          });
                     });
                }).expect("suite should build");

    let report = spec_core::run(&suite).expect("run should complete");
    assert!(report.is_success(), "{}", spec_core::render_text(&report));
}

#[test]
fn records_follow_declaration_order_and_count() {
    let suite = Suite::<State>::build(|s| {
                    s.context("A", |c| {
                         c.should("1", |_| Ok(()));
                         c.context("B", |c| {
                              c.should("2", |_| Ok(()));
                              c.should("3", |_| Ok(()));
                          });
                         c.should("4", |_| Ok(()));
                     });
                    s.context("C", |c| {
                         c.should("5", |_| Ok(()));
                     });
                }).expect("suite should build");

    let report = spec_core::run(&suite).expect("run should complete");
    let names: Vec<&str> = report.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(report.records().len(), suite.example_count());
    let indexes: Vec<usize> = report.records().iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3, 4]);
    assert_eq!(report.records()[2].path, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn faults_and_panics_do_not_stop_the_run() {
    let suite = Suite::<State>::build(|s| {
                    s.context("Isolation", |c| {
                         c.should("returns an unexpected fault", |_| {
                              let n: i32 = "not a number".parse()?;
                              assert_equal!(0, n);
                              Ok(())
                          });
                         c.should("panics", |_| panic!("kaboom"));
                         c.should("fails an assertion", |st| {
                              assert_true!(st.x > 0, "x was {}", st.x);
                              Ok(())
                          });
                     });
                    s.context("Later", |c| {
                         c.should("still runs", |_| Ok(()));
                     });
                }).expect("suite should build");

    let report = spec_core::run(&suite).expect("run should complete");
    let summary = report.summary();
    assert_eq!((summary.total, summary.passed, summary.failed, summary.errored), (4, 1, 1, 2));

    match &report.records()[0].outcome {
        Outcome::Error(info) => {
            assert_eq!(info.phase, Phase::Body);
            assert!(!info.panicked);
            assert!(info.detail.starts_with("parse int:"), "{}", info.detail);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    match &report.records()[1].outcome {
        Outcome::Error(info) => {
            assert!(info.panicked);
            assert_eq!(info.detail, "kaboom");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    match &report.records()[2].outcome {
        Outcome::Fail(failure) => {
            assert_eq!(failure.assertion, "assert_true");
            assert_eq!(failure.actual, "false");
            assert_eq!(failure.message.as_deref(), Some("x was 0"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(report.outcome_of(&["Later"], "still runs"), Some(&Outcome::Pass));
}

#[test]
fn panic_in_nested_setup_reports_its_position() {
    let suite = Suite::<State>::build(|s| {
                    s.context("Outer", |c| {
                         c.setup(|_| Ok(()));
                         c.context("Inner", |c| {
                              c.setup(|_| panic!("setup exploded"));
                              c.should("never reaches the body", |_| Ok(()));
                          });
                     });
                }).expect("suite should build");

    let report = spec_core::run(&suite).expect("run should complete");
    match &report.records()[0].outcome {
        Outcome::Error(info) => assert_eq!(info.phase, Phase::Setup { depth: 1 }),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn configuration_fault_from_a_body_aborts_the_run() {
    let suite = Suite::<State>::build(|s| {
                    s.context("Malformed", |c| {
                         c.should("ok before", |_| Ok(()));
                         c.should("builds a broken suite", |_| {
                             Suite::<()>::build(|s| {
                                 s.context("", |_| {});
                             })?;
                             Ok(())
                         });
                         c.should("never runs", |_| Ok(()));
                     });
                }).expect("suite should build");

    let mut engine = SpecEngine::new();
    let err = engine.run(&suite).expect_err("run should abort");
    assert_eq!(err,
               SpecConfigError::RaisedByExample { path: "Malformed".into(),
                                                  example: "builds a broken suite".into(),
                                                  reason: "context name must not be empty (declared under `<root>`)".into() });

    let run_id = engine.last_run_id().expect("run id");
    let events = engine.event_store().list(run_id);
    assert!(matches!(events.last().map(|e| &e.kind), Some(RunEventKind::RunAborted { index: 1, .. })));
    let finished = events.iter()
                         .filter(|e| matches!(e.kind, RunEventKind::ExampleFinished { .. }))
                         .count();
    assert_eq!(finished, 1);
}

#[test]
fn configuration_fault_is_not_swallowed_by_nothing_raised() {
    let suite = Suite::<State>::build(|s| {
                    s.context("Wrapped", |c| {
                         c.should("builds a broken suite inside nothing_raised", |_| {
                             assert_nothing_raised!(|| -> Result<(), Fault> {
                                 Suite::<()>::build(|s| {
                                     s.context("", |_| {});
                                 })?;
                                 Ok(())
                             });
                             Ok(())
                         });
                         c.should("never runs", |_| Ok(()));
                     });
                }).expect("suite should build");

    let mut engine = SpecEngine::new();
    let err = engine.run(&suite).expect_err("run should abort");
    assert_eq!(err,
               SpecConfigError::RaisedByExample { path: "Wrapped".into(),
                                                  example: "builds a broken suite inside nothing_raised".into(),
                                                  reason: "context name must not be empty (declared under `<root>`)".into() });
    let run_id = engine.last_run_id().expect("run id");
    let events = engine.event_store().list(run_id);
    assert!(matches!(events.last().map(|e| &e.kind), Some(RunEventKind::RunAborted { index: 0, .. })));
}

#[test]
fn unexpected_fault_helper_records_error() {
    let suite = Suite::<State>::build(|s| {
                    s.context("Collaborator", |c| {
                         c.should("reports its own error", |_| Err(Fault::unexpected("service unavailable")));
                     });
                }).expect("suite should build");
    let report = spec_core::run(&suite).expect("run should complete");
    assert!(!report.is_success());
    assert_eq!(report.failures().count(), 1);
}
