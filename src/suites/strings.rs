use std::num::IntErrorKind;

use spec_core::{assert_equal, assert_nothing_raised, assert_not_equal, assert_raises, assert_true, SuiteBuilder};

use super::LearningState;

pub(crate) fn register(suite: &mut SuiteBuilder<LearningState>) {
    suite.context("String", |c| {
             c.setup(|st| {
                  st.greeting = "hola".to_string();
                  Ok(())
              });

             c.should("append in place", |_| {
                  let mut joined = String::new();
                  for part in ["Nava", "laga", "mella"] {
                      joined.push_str(part);
                  }
                  assert_equal!("Navalagamella", joined);

                  let mut greeting = String::from("A bananeira");
                  greeting += " caiu";
                  assert_equal!("A bananeira caiu", greeting);
                  Ok(())
              });

             c.should("apply a list of operations to the same string", |st| {
                  let shout: fn(&mut String) = |s| s.make_ascii_uppercase();
                  let chop: fn(&mut String) = |s| {
                      s.pop();
                  };
                  for op in [shout, chop] {
                      op(&mut st.greeting);
                  }
                  assert_equal!("HOL", st.greeting);
                  Ok(())
              });

             c.should("format and repeat", |st| {
                  assert_equal!("9.50", format!("{:.2}", 9.5));
                  assert_equal!("<p>hello</p>", format!("<{0}>{1}</{0}>", "p", "hello"));
                  assert_equal!("holahola", st.greeting.repeat(2));
                  Ok(())
              });

             c.should("count chars and bytes differently", |_| {
                  assert_not_equal!(3, "así".len());
                  assert_equal!(3, "así".chars().count());
                  assert_equal!(vec![195u8, 169], "é".as_bytes().to_vec());
                  assert_equal!(233, 'é' as u32);
                  assert_equal!(Some('é'), char::from_u32(233));
                  assert_equal!(233, u32::from_str_radix("e9", 16)?);
                  Ok(())
              });

             c.should("iterate over unicode chars", |_| {
                  assert_equal!(vec!['ñ', 'é'], "ñé".chars().collect::<Vec<_>>());
                  assert_equal!("á", "Á".to_lowercase());
                  assert_equal!("jabón", "JABÓN".to_lowercase());
                  Ok(())
              });

             c.should("find and slice substrings", |_| {
                  let text = "hello there";
                  assert_equal!(Some(1), text.find(['a', 'e', 'i', 'o', 'u']));
                  assert_equal!(Some("ell"), text.get(1..4));
                  assert_equal!(Some(3), text.find("lo"));
                  assert_true!(text.contains("there"));
                  Ok(())
              });

             c.should("replace or drop characters", |_| {
                  let without_vowels: String = "hola".chars().filter(|&ch| !matches!(ch, 'o' | 'a')).collect();
                  assert_equal!("hl", without_vowels);
                  assert_equal!("h*l*", "hola".replace(['o', 'a'], "*"));
                  Ok(())
              });

             c.should("split words and lines", |_| {
                  assert_equal!(vec!["a", "b", "c"], "a b c".split_whitespace().collect::<Vec<_>>());
                  let text = "        Hola\n        Paco\n";
                  assert_equal!(vec!["Hola", "Paco"], text.lines().map(str::trim).collect::<Vec<_>>());
                  Ok(())
              });

             c.should("report parse failures by kind", |_| {
                  assert_raises!(IntErrorKind::InvalidDigit, || "0xe9".parse::<u32>());
                  assert_raises!(IntErrorKind::Empty, || "".parse::<i32>());
                  let n = assert_nothing_raised!(|| "233".parse::<u32>());
                  assert_equal!(233, n);
                  Ok(())
              });
         });
}
