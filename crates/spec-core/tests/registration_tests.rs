use spec_core::{Outcome, SpecConfigError, Suite, SuiteBuilder};

#[test]
fn duplicate_sibling_names_are_independent() {
    let suite = Suite::<()>::build(|s| {
                    s.context("Dup", |c| {
                         c.should("same", |_| Ok(()));
                     });
                    s.context("Dup", |c| {
                         c.should("same", |_| Err(spec_core::Fault::unexpected("second sibling")));
                     });
                }).expect("suite should build");

    assert_eq!(suite.contexts().len(), 2);
    let report = spec_core::run(&suite).expect("run should complete");
    assert_eq!(report.records().len(), 2);
    assert_eq!(report.records()[0].outcome, Outcome::Pass);
    assert!(!report.records()[1].outcome.is_pass());
}

#[test]
fn blank_example_name_is_a_configuration_fault() {
    let result = Suite::<()>::build(|s| {
                     s.context("Outer", |c| {
                          c.context("Inner", |c| {
                               c.should(" \t", |_| Ok(()));
                           });
                      });
                 });
    assert_eq!(result.err(),
               Some(SpecConfigError::EmptyExampleName { context: "Outer > Inner".into() }));
}

#[test]
fn nested_blank_context_name_reports_parent_path() {
    let result = Suite::<()>::build(|s| {
                     s.context("Outer", |c| {
                          c.context("", |_| {});
                      });
                 });
    assert_eq!(result.err(),
               Some(SpecConfigError::EmptyContextName { parent: "Outer".into() }));
}

#[test]
fn builder_exposes_context_path_while_declaring() {
    let mut seen = Vec::new();
    let mut builder = SuiteBuilder::<()>::new();
    builder.context("A", |c| {
               c.context("B", |c| {
                    seen.push(c.path().join("/"));
                    c.should("leaf", |_| Ok(()));
                });
           });
    let suite = builder.finish().expect("suite should build");
    assert_eq!(seen, vec!["A/B".to_string()]);
    assert_eq!(suite.example_count(), 1);
    assert!(!suite.is_empty());
    assert!(!suite.contexts()[0].has_setup());
}

#[test]
fn empty_suite_builds_and_runs() {
    let suite = Suite::<()>::build(|_| {}).expect("suite should build");
    assert!(suite.is_empty());
    let report = spec_core::run(&suite).expect("run should complete");
    assert!(report.records().is_empty());
    assert!(report.is_success());
    assert!(report.is_complete());
}
