use std::collections::HashMap;

use spec_core::{assert_equal, assert_false, assert_same_elements, SuiteBuilder};

use super::LearningState;

const WILD: [&str; 2] = ["lion", "ñu"];
const TAME: [&str; 2] = ["cat", "cow"];

fn continent(animal: &str) -> Option<&'static str> {
    if WILD.contains(&animal) {
        Some("Africa")
    } else if TAME.contains(&animal) {
        Some("Europe")
    } else {
        None
    }
}

fn min_max(values: &[i32]) -> Option<(i32, i32)> {
    let min = values.iter().min()?;
    let max = values.iter().max()?;
    Some((*min, *max))
}

fn results_or_empty(results: Option<Vec<i32>>) -> Vec<i32> {
    results.unwrap_or_default()
}

/// Registra una línea al salir del scope, también en el camino de error.
struct Ensure<'a>(&'a mut Vec<&'static str>);

impl Drop for Ensure<'_> {
    fn drop(&mut self) {
        self.0.push("ensure");
    }
}

fn with_cleanup(log: &mut Vec<&'static str>, fail: bool) -> Result<i32, String> {
    let mut guard = Ensure(log);
    guard.0.push("body");
    if fail {
        return Err("boom".to_string());
    }
    Ok(1)
}

pub(crate) fn register(suite: &mut SuiteBuilder<LearningState>) {
    suite.context("Assignment", |c| {
             c.context("Destructuring", |c| {
                  c.should("bind tuples and arrays", |_| {
                       let (x, y, z) = (1, 2, 3);
                       assert_equal!((1, 2, 3), (x, y, z));

                       let [first, rest @ ..] = [1, 2, 3];
                       assert_equal!(1, first);
                       assert_equal!([2, 3], rest);
                       Ok(())
                   });

                  c.should("nest patterns", |_| {
                       let (x, (y, z)) = (3, (4, 5));
                       assert_equal!((3, 4, 5), (x, y, z));

                       let (x, pair) = (3, [4, 5]);
                       assert_equal!(3, x);
                       assert_equal!([4, 5], pair);
                       Ok(())
                   });

                  c.should("leave missing values empty", |_| {
                       let values = [1, 2];
                       let mut it = values.iter().copied();
                       let (x, y, z) = (it.next(), it.next(), it.next());
                       assert_equal!((Some(1), Some(2)), (x, y));
                       assert_false!(z);
                       Ok(())
                   });

                  c.should("swap and return several values", |_| {
                       let (mut a, mut b) = (1, 2);
                       std::mem::swap(&mut a, &mut b);
                       assert_equal!((2, 1), (a, b));
                       assert_equal!(Some((1, 5)), min_max(&[2, 5, 1]));
                       assert_false!(min_max(&[]));
                       Ok(())
                   });
              });

             c.context("Operators", |c| {
                  c.should("default a missing value", |_| {
                       assert_equal!(Vec::<i32>::new(), results_or_empty(None));
                       assert_equal!(vec![1, 2, 3], results_or_empty(Some(vec![1, 2, 3])));
                       Ok(())
                   });

                  c.should("match against groups of values", |_| {
                       assert_equal!(Some("Africa"), continent("ñu"));
                       assert_equal!(Some("Europe"), continent("cow"));
                       assert_false!(continent("dodo"));
                       Ok(())
                   });

                  c.should("treat a missing value as falsy", |_| {
                       let fishy: Option<i32> = None;
                       assert_false!(fishy, "the value is evaluated as false");
                       assert_equal!(false, fishy.is_some());
                       Ok(())
                   });

                  c.should("build maps from pairs", |_| {
                       let vehicles: HashMap<&str, i32> = [("planes", 21), ("cars", 36)].into_iter().collect();
                       assert_equal!(HashMap::from([("cars", 36), ("planes", 21)]), vehicles);

                       let flat = [1, 2, 3, 4, 5, 6];
                       let pairs: HashMap<i32, i32> = flat.chunks_exact(2).map(|p| (p[0], p[1])).collect();
                       assert_same_elements!(vec![(5, 6), (1, 2), (3, 4)], pairs);
                       Ok(())
                   });
              });

             c.context("Closures", |c| {
                  c.should("capture outer variables", |_| {
                       let mut counter = 5;
                       let mut bump = || counter += 1;
                       bump();
                       bump();
                       bump();
                       assert_equal!(8, counter);
                       Ok(())
                   });

                  c.should("fold into several accumulators", |_| {
                       let groups = [(vec!["à", "ä", "á"], 'a'), (vec!["é", "è", "ê", "ë"], 'e')];
                       let (accented, plain) = groups.iter().fold((String::new(), String::new()), |(mut from, mut to), (chars, base)| {
                                                                 from.push_str(&chars.concat());
                                                                 to.extend(std::iter::repeat(*base).take(chars.len()));
                                                                 (from, to)
                                                             });
                       assert_equal!("àäáéèêë", accented);
                       assert_equal!("aaaeeee", plain);
                       Ok(())
                   });

                  c.should("run cleanup on every exit path", |_| {
                       let mut log = Vec::new();
                       assert_equal!(Ok::<i32, String>(1), with_cleanup(&mut log, false));
                       assert_equal!(Err::<i32, String>("boom".to_string()), with_cleanup(&mut log, true));
                       assert_equal!(vec!["body", "ensure", "body", "ensure"], log);
                       Ok(())
                   });
              });
         });
}
