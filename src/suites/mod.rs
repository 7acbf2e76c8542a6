//! Suites de aprendizaje.
//!
//! Cada módulo registra un contexto de primer nivel con ejemplos que
//! documentan el comportamiento de los tipos de Rust (colecciones, strings,
//! destructuring, traits) usando el runner de `spec-core`. Todos los ejemplos
//! deben pasar: el binario `specflow` los ejecuta como demostración.
mod arrays;
mod assignment;
mod files;
mod hashes;
mod object_model;
mod sets;
mod strings;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use spec_core::{SpecConfigError, Suite};

pub use files::FIXTURE_FILE;
pub use object_model::{ObjectError, ObjectErrorKind};

/// Contenedor de estado de cada ejemplo. Se crea vacío y lo completan los
/// setups de cada contexto.
#[derive(Debug, Default)]
pub struct LearningState {
    pub numbers: Vec<i32>,
    /// Mapa con orden de inserción.
    pub vehicles: IndexMap<&'static str, u32>,
    pub greeting: String,
    pub fixture_dir: PathBuf,
}

/// Construye la suite completa. `fixture_dir` es el directorio donde se
/// busca `empty_file.txt`.
pub fn learning_suite(fixture_dir: &Path) -> Result<Suite<LearningState>, SpecConfigError> {
    let fixture_dir = fixture_dir.to_path_buf();
    Suite::build(|s| {
        arrays::register(s);
        hashes::register(s);
        strings::register(s);
        sets::register(s);
        assignment::register(s);
        object_model::register(s);
        files::register(s, fixture_dir);
    })
}
