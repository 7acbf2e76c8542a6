use spec_core::{assert_equal, render_json, render_text, Fault, Suite};

fn mixed_suite(second_name: &'static str) -> Suite<Vec<i32>> {
    Suite::build(|s| {
        s.context("Arrays", |c| {
             c.setup(|st: &mut Vec<i32>| {
                  st.extend([1, 2, 3]);
                  Ok(())
              });
             c.should("keep order", |st| {
                  assert_equal!(vec![3, 2, 1], *st, "reversed on purpose");
                  Ok(())
              });
             c.context("Nested", move |c| {
                  c.should(second_name, |_| Err(Fault::unexpected("collaborator down")));
              });
         });
    }).expect("suite should build")
}

#[test]
fn text_report_lists_failures_with_full_path() {
    let report = spec_core::run(&mixed_suite("reads file")).expect("run should complete");
    let text = render_text(&report);
    let expected = "FAIL  Arrays > keep order\n\
                    \x20     assert_equal failed\n\
                    \x20     expected: [3, 2, 1]\n\
                    \x20     actual:   [1, 2, 3]\n\
                    \x20     message:  reversed on purpose\n\
                    ERROR Arrays > Nested > reads file\n\
                    \x20     fault in body: collaborator down\n\
                    2 examples, 0 passed, 1 failed, 1 errors";
    assert_eq!(text, expected);
}

#[test]
fn json_report_carries_summary_and_records() {
    let report = spec_core::run(&mixed_suite("reads file")).expect("run should complete");
    let json = render_json(&report).expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["summary"]["total"], 2);
    assert_eq!(value["summary"]["failed"], 1);
    assert_eq!(value["records"][1]["path"][1], "Nested");
    assert_eq!(value["suite_fingerprint"].as_str().map(str::len), Some(64));
}

#[test]
fn fingerprint_tracks_suite_shape() {
    let a = spec_core::run(&mixed_suite("reads file")).expect("run should complete");
    let b = spec_core::run(&mixed_suite("reads file")).expect("run should complete");
    let c = spec_core::run(&mixed_suite("writes file")).expect("run should complete");
    assert_ne!(a.run_id(), b.run_id());
    assert_eq!(a.suite_fingerprint(), b.suite_fingerprint());
    assert_ne!(a.suite_fingerprint(), c.suite_fingerprint());
    assert!(a.started_at() <= a.finished_at());
}
