//! Árbol de la suite y API de registro.
//!
//! Una `Suite` es una secuencia ordenada de `Context`s; cada contexto contiene
//! ejemplos y contextos hijos en orden de declaración, y a lo sumo un setup.
//! El árbol se construye una sola vez con `Suite::build` y es de sólo lectura
//! durante la ejecución.

mod builder;
mod definition;

pub use builder::{ContextBuilder, SuiteBuilder};
pub use definition::{Action, Context, Example, ExampleId, PlannedExample, Suite};
