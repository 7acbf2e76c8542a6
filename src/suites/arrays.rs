use indexmap::IndexMap;
use spec_core::{assert_contains, assert_equal, assert_false, assert_same_elements, assert_true, SuiteBuilder};

use super::LearningState;

/// Intersección sin duplicados, en el orden de `a`.
fn intersection(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for x in a {
        if b.contains(x) && !out.contains(x) {
            out.push(*x);
        }
    }
    out
}

fn union(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for x in a.iter().chain(b) {
        if !out.contains(x) {
            out.push(*x);
        }
    }
    out
}

fn difference(a: &[i32], b: &[i32]) -> Vec<i32> {
    a.iter().filter(|x| !b.contains(x)).copied().collect()
}

/// Agrupa en bloques de `size`, completando el último con `fill`.
fn in_groups_of<T: Clone>(items: &[T], size: usize, fill: T) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size)
         .map(|chunk| {
             let mut group = chunk.to_vec();
             group.resize(size, fill.clone());
             group
         })
         .collect()
}

pub(crate) fn register(suite: &mut SuiteBuilder<LearningState>) {
    suite.context("Array", |c| {
             c.setup(|st| {
                  st.numbers = vec![1, 2, 3];
                  Ok(())
              });

             c.should("intersect, unite and subtract like sets", |st| {
                  assert_equal!(vec![1, 2], intersection(&st.numbers, &[1, 2, 4]));
                  assert_equal!(vec![1, 2, 3, 4], union(&st.numbers, &[1, 2, 4]));
                  assert_equal!(vec![3], difference(&st.numbers, &[1, 2]));
                  Ok(())
              });

             c.should("insert at the front and push or pop at the back", |st| {
                  st.numbers.insert(0, 0);
                  assert_equal!(vec![0, 1, 2, 3], st.numbers);
                  assert_equal!(0, st.numbers.remove(0));
                  assert_equal!(Some(3), st.numbers.pop());
                  assert_equal!(vec![1, 2], st.numbers);
                  st.numbers.push(4);
                  assert_equal!(vec![1, 2, 4], st.numbers);
                  Ok(())
              });

             c.should("start from a fresh vector after another example mutated it", |st| {
                  assert_equal!(vec![1, 2, 3], st.numbers);
                  Ok(())
              });

             c.should("join elements into a string", |_| {
                  let letters = ["a", "b", "c"];
                  assert_equal!("a-b-c", letters.join("-"));
                  let upper: Vec<String> = letters.iter().map(|l| l.to_uppercase()).collect();
                  assert_equal!("A-B-C", upper.join("-"));
                  Ok(())
              });

             c.should("drop missing values with flatten", |_| {
                  let with_gaps = vec![Some(1), None, Some(2), None, Some(3)];
                  assert_equal!(vec![1, 2, 3], with_gaps.into_iter().flatten().collect::<Vec<_>>());
                  Ok(())
              });

             c.should("delete every matching element", |_| {
                  let mut arr = vec![1, 2, 3, 2, 4, 2];
                  arr.retain(|&x| x != 2);
                  assert_equal!(vec![1, 3, 4], arr);
                  Ok(())
              });

             c.should("sort naturally or with a comparator", |_| {
                  let mut arr = vec![2, 4, 3, 5, 1];
                  arr.sort();
                  assert_equal!(vec![1, 2, 3, 4, 5], arr);
                  arr.sort_by(|a, b| b.cmp(a));
                  assert_equal!(vec![5, 4, 3, 2, 1], arr);
                  Ok(())
              });

             c.should("find pairs by key or by value", |_| {
                  let pairs = [("a", 3), ("b", 4), ("c", 5)];
                  assert_equal!(Some(&("a", 3)), pairs.iter().find(|(k, _)| *k == "a"));
                  assert_equal!(Some(&("b", 4)), pairs.iter().find(|(_, v)| *v == 4));
                  assert_false!(pairs.iter().find(|(k, _)| *k == "z"));
                  Ok(())
              });

             c.should("zip sequences and truncate to the shortest", |_| {
                  let a = [4, 5, 6];
                  let b = [7, 8, 9];
                  let zipped: Vec<(i32, i32, i32)> = [1, 2, 3].iter()
                                                              .zip(a.iter())
                                                              .zip(b.iter())
                                                              .map(|((x, y), z)| (*x, *y, *z))
                                                              .collect();
                  assert_equal!(vec![(1, 4, 7), (2, 5, 8), (3, 6, 9)], zipped);
                  assert_equal!(2, [1, 2].iter().zip(a.iter()).count());
                  Ok(())
              });

             c.should("split into fixed-size groups and on a separator", |_| {
                  let items: Vec<i32> = (1..=8).collect();
                  assert_equal!(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, -1]], in_groups_of(&items, 3, -1));

                  let optional: Vec<Option<i32>> = items.iter().copied().map(Some).collect();
                  assert_equal!(vec![Some(7), Some(8), None], in_groups_of(&optional, 3, None)[2]);

                  let parts: Vec<Vec<i32>> = items.split(|&x| x == 4).map(<[i32]>::to_vec).collect();
                  assert_equal!(vec![vec![1, 2, 3], vec![5, 6, 7, 8]], parts);
                  assert_false!(items.get(10));
                  assert_contains!(&items, 8);
                  Ok(())
              });

             c.should("map and fold like collect and inject", |_| {
                  let data = [2, 5, 3, 4];
                  assert_equal!(vec![4, 25, 9, 16], data.iter().map(|x| x * x).collect::<Vec<_>>());
                  assert_equal!(14, data.iter().sum::<i32>());
                  assert_equal!(120, data.iter().fold(1, |acc, x| acc * x));
                  assert_equal!(Some(&5), data.iter().max());

                  let as_map: IndexMap<i32, i32> = [[1, 2], [3, 4], [5, 6]].iter().map(|pair| (pair[0], pair[1])).collect();
                  assert_same_elements!(vec![(5, 6), (1, 2), (3, 4)], as_map);
                  Ok(())
              });

             c.should("answer any and all", |_| {
                  let words = ["ant", "bear", "cat"];
                  assert_true!(words.iter().any(|w| w.len() >= 3));
                  assert_false!(words.iter().all(|w| w.len() > 3));
                  assert_false!(Vec::<i32>::new().iter().any(|_| true), "empty collections have no matches");
                  Ok(())
              });
         });
}
