use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use spec_core::{assert_equal, assert_raises, assert_true, SuiteBuilder};

use super::LearningState;

/// Nombre del fixture de texto leído por el contexto "File".
pub const FIXTURE_FILE: &str = "empty_file.txt";

pub(crate) fn register(suite: &mut SuiteBuilder<LearningState>, fixture_dir: PathBuf) {
    suite.context("File", move |c| {
             c.setup(move |st| {
                  st.fixture_dir = fixture_dir.clone();
                  Ok(())
              });

             c.should("exist in the fixture directory", |st| {
                  let path = st.fixture_dir.join(FIXTURE_FILE);
                  assert_true!(path.is_file(), "missing fixture {}", path.display());
                  Ok(())
              });

             c.should("be read line by line", |st| {
                  let file = File::open(st.fixture_dir.join(FIXTURE_FILE))?;
                  let mut words = String::new();
                  for line in BufReader::new(file).lines() {
                      words.push_str(&line?);
                  }
                  assert_equal!("¡Hola João!", words);
                  Ok(())
              });

             c.should("report a missing file as not found", |st| {
                  assert_raises!(io::ErrorKind::NotFound, || fs::read_to_string(st.fixture_dir.join("missing.txt")));
                  Ok(())
              });
         });
}
