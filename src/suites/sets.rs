use std::collections::{BTreeSet, HashSet};

use spec_core::{assert_contains, assert_equal, assert_false, assert_true, SuiteBuilder};

use super::LearningState;

pub(crate) fn register(suite: &mut SuiteBuilder<LearningState>) {
    suite.context("Set", |c| {
             c.should("be collected from any iterator", |_| {
                  assert_equal!(BTreeSet::from([5, 1, 2, 3, 4]), (1..=5).collect::<BTreeSet<_>>());
                  assert_equal!(BTreeSet::from([1, 2, 5]), [1, 2, 5, 5].into_iter().collect::<BTreeSet<_>>());
                  assert_equal!(BTreeSet::from([2, 3, 4]), [1, 2, 3].iter().map(|x| x + 1).collect::<BTreeSet<_>>());
                  Ok(())
              });

             c.should("support the usual set operations", |_| {
                  let primes = BTreeSet::from([2, 3, 5, 7]);
                  let odds = BTreeSet::from([1, 3, 5, 7, 9]);
                  assert_equal!(BTreeSet::from([5, 7, 3]), &primes & &odds, "intersection");
                  assert_equal!(BTreeSet::from([5, 7, 3, 1, 2, 9]), &primes | &odds, "union");
                  assert_equal!(BTreeSet::from([2]), &primes - &odds, "difference");
                  assert_equal!(BTreeSet::from([1, 2, 9]), &primes ^ &odds, "symmetric difference");
                  Ok(())
              });

             c.should("ignore duplicate inserts", |_| {
                  let mut primes = BTreeSet::from([2, 3, 5, 7]);
                  assert_true!(primes.insert(11));
                  assert_false!(primes.insert(11), "11 was already there");
                  assert_equal!(BTreeSet::from([2, 3, 5, 7, 11]), primes);
                  Ok(())
              });

             c.should("compare without caring about order", |_| {
                  let a: HashSet<&str> = ["x", "y"].into_iter().collect();
                  let b: HashSet<&str> = ["y", "x"].into_iter().collect();
                  assert_equal!(a, b);
                  assert_contains!(&a, "x");
                  Ok(())
              });

             c.should("check membership in ranges and arrays", |_| {
                  assert_true!((1..=100).contains(&79));
                  assert_contains!([1, 50, 79, 100], 79);
                  Ok(())
              });
         });
}
