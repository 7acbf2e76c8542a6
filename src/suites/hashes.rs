use std::collections::{BTreeMap, HashMap};

use spec_core::{assert_equal, assert_false, assert_same_elements, assert_valid_keys, SuiteBuilder};

use super::LearningState;

const VEHICLE_KINDS: [&str; 4] = ["cars", "boats", "trains", "planes"];

pub(crate) fn register(suite: &mut SuiteBuilder<LearningState>) {
    suite.context("Hash", |c| {
             c.setup(|st| {
                  st.vehicles = [("cars", 36), ("boats", 8), ("trains", 12), ("planes", 21)].into_iter().collect();
                  Ok(())
              });

             c.should("select the matching pairs", |st| {
                  let big: Vec<(&str, u32)> = st.vehicles
                                                .iter()
                                                .filter(|&(_, &count)| count > 20)
                                                .map(|(k, v)| (*k, *v))
                                                .collect();
                  assert_same_elements!(vec![("planes", 21), ("cars", 36)], big);
                  Ok(())
              });

             c.should("fetch several values at once", |st| {
                  let values: Vec<u32> = ["cars", "boats"].iter().filter_map(|k| st.vehicles.get(k).copied()).collect();
                  assert_equal!(vec![36, 8], values);
                  Ok(())
              });

             c.should("remove a key and return its value", |st| {
                  assert_equal!(Some(36), st.vehicles.shift_remove("cars"));
                  assert_false!(st.vehicles.contains_key("cars"));
                  assert_equal!(3, st.vehicles.len());
                  Ok(())
              });

             c.should("shift the first pair in insertion order", |st| {
                  assert_equal!(Some(("cars", 36)), st.vehicles.shift_remove_index(0));
                  assert_equal!(vec!["boats", "trains", "planes"], st.vehicles.keys().copied().collect::<Vec<_>>());
                  Ok(())
              });

             c.should("only hold known keys", |st| {
                  assert_valid_keys!(st.vehicles.keys(), &VEHICLE_KINDS);
                  Ok(())
              });

             c.should("merge from the right and reverse merge from the left", |_| {
                  let mut h1: HashMap<&str, i32> = HashMap::from([("a", 100), ("b", 200)]);
                  h1.extend(HashMap::from([("b", 300), ("c", 400)]));
                  assert_equal!(HashMap::from([("a", 100), ("b", 300), ("c", 400)]), h1);

                  let mut left = HashMap::from([("a", "max"), ("b", "average")]);
                  for (k, v) in HashMap::from([("b", "regular"), ("c", "min")]) {
                      left.entry(k).or_insert(v);
                  }
                  assert_equal!(HashMap::from([("a", "max"), ("b", "average"), ("c", "min")]), left);
                  Ok(())
              });

             c.should("compare maps regardless of key order", |_| {
                  let a = HashMap::from([("a", 1), ("b", 2)]);
                  let b = HashMap::from([("b", 2), ("a", 1)]);
                  assert_equal!(a, b);
                  assert_same_elements!(a, b);
                  Ok(())
              });

             c.should("slice and except", |_| {
                  let options: HashMap<&str, i32> = HashMap::from([("a", 3), ("b", 4), ("c", 5)]);
                  let slice: HashMap<&str, i32> = options.iter()
                                                         .filter(|&(k, _)| ["a", "c"].contains(k))
                                                         .map(|(k, v)| (*k, *v))
                                                         .collect();
                  assert_equal!(HashMap::from([("c", 5), ("a", 3)]), slice);

                  let except: HashMap<&str, i32> = options.iter().filter(|&(k, _)| *k != "a").map(|(k, v)| (*k, *v)).collect();
                  assert_equal!(HashMap::from([("c", 5), ("b", 4)]), except);
                  Ok(())
              });

             c.should("diff keeps the pairs present on only one side", |_| {
                  let a = HashMap::from([("a", "b"), ("c", "d")]);
                  let b = HashMap::from([("e", "f"), ("c", "d")]);
                  let diff: HashMap<&str, &str> = a.iter()
                                                   .filter(|(k, v)| b.get(*k) != Some(*v))
                                                   .chain(b.iter().filter(|(k, v)| a.get(*k) != Some(*v)))
                                                   .map(|(k, v)| (*k, *v))
                                                   .collect();
                  assert_equal!(HashMap::from([("e", "f"), ("a", "b")]), diff);
                  Ok(())
              });

             c.should("sort by value or keep keys ordered", |_| {
                  let mut pairs: Vec<(&str, i32)> = HashMap::from([("a", 5), ("b", 3)]).into_iter().collect();
                  pairs.sort_by_key(|&(_, v)| v);
                  assert_equal!(vec![("b", 3), ("a", 5)], pairs);

                  let sorted: BTreeMap<&str, i32> = HashMap::from([("b", 3), ("a", 5)]).into_iter().collect();
                  assert_equal!(vec![("a", 5), ("b", 3)], sorted.into_iter().collect::<Vec<_>>());
                  Ok(())
              });

             c.should("clone into an independent copy", |_| {
                  let original = HashMap::from([("a", 1), ("b", 2)]);
                  let mut dupped = original.clone();
                  let removed = dupped.remove("a");
                  assert_equal!(Some(1), removed);
                  assert_same_elements!(HashMap::from([("b", 2)]), dupped, "dupped");
                  assert_same_elements!(HashMap::from([("a", 1), ("b", 2)]), original, "original");
                  Ok(())
              });
         });
}
