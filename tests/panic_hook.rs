use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};

use spec_core::assertion::within_example;
use specflow_rust::runner;

static REPORTED: AtomicUsize = AtomicUsize::new(0);

// Único test del binario: el hook de panic es global al proceso.
#[test]
fn only_panics_outside_an_example_reach_the_previous_hook() {
    panic::set_hook(Box::new(|_| {
                        REPORTED.fetch_add(1, Ordering::SeqCst);
                    }));
    runner::install_panic_hook();

    let inside = panic::catch_unwind(|| within_example(|| panic!("inside an example")));
    assert!(inside.is_err());
    assert_eq!(REPORTED.load(Ordering::SeqCst), 0);

    let outside = panic::catch_unwind(|| panic!("runner bug"));
    assert!(outside.is_err());
    assert_eq!(REPORTED.load(Ordering::SeqCst), 1);

    drop(panic::take_hook());
}
