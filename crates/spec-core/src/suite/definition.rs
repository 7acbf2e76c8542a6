use std::fmt;

use serde::{Deserialize, Serialize};

use super::builder::SuiteBuilder;
use crate::errors::{ExampleResult, SpecConfigError};

/// Acción ejecutable sobre el contenedor de estado del ejemplo (setup o
/// cuerpo).
pub type Action<S> = Box<dyn Fn(&mut S) -> ExampleResult>;

/// Caso nombrado con su cuerpo de aserciones.
pub struct Example<S> {
    pub(crate) name: String,
    pub(crate) body: Action<S>,
}

impl<S> Example<S> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

pub(crate) enum Entry<S> {
    Example(Example<S>),
    Context(Context<S>),
}

/// Agrupación nombrada de ejemplos y contextos hijos.
///
/// Ejemplos e hijos se guardan intercalados para preservar el orden de
/// declaración en el recorrido en profundidad.
pub struct Context<S> {
    pub(crate) name: String,
    pub(crate) setup: Option<Action<S>>,
    pub(crate) entries: Vec<Entry<S>>,
}

impl<S> Context<S> {
    pub(crate) fn new(name: String) -> Self {
        Self { name,
               setup: None,
               entries: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_setup(&self) -> bool {
        self.setup.is_some()
    }

    /// Ejemplos propios (no incluye los de contextos hijos).
    pub fn examples(&self) -> impl Iterator<Item = &Example<S>> {
        self.entries.iter().filter_map(|e| match e {
                                   Entry::Example(ex) => Some(ex),
                                   Entry::Context(_) => None,
                               })
    }

    pub fn children(&self) -> impl Iterator<Item = &Context<S>> {
        self.entries.iter().filter_map(|e| match e {
                                   Entry::Context(ctx) => Some(ctx),
                                   Entry::Example(_) => None,
                               })
    }

    /// Total de ejemplos en este contexto y sus descendientes.
    pub fn example_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e {
                Entry::Example(_) => 1,
                Entry::Context(ctx) => ctx.example_count(),
            })
            .sum()
    }
}

/// Identidad estable de un ejemplo: ruta de contextos + nombre.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExampleId {
    pub path: Vec<String>,
    pub name: String,
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{segment} > ")?;
        }
        write!(f, "{}", self.name)
    }
}

/// Ejemplo listo para ejecutar: su cadena de setups ya resuelta (raíz
/// primero).
pub struct PlannedExample<'a, S> {
    pub index: usize,
    pub path: Vec<String>,
    pub name: &'a str,
    pub setups: Vec<&'a Action<S>>,
    pub body: &'a Action<S>,
}

impl<S> PlannedExample<'_, S> {
    pub fn id(&self) -> ExampleId {
        ExampleId { path: self.path.clone(),
                    name: self.name.to_string() }
    }
}

/// Árbol completo de contextos declarado por quien escribe los ejemplos.
pub struct Suite<S> {
    pub(crate) contexts: Vec<Context<S>>,
}

impl<S: 'static> Suite<S> {
    /// Construye la suite ejecutando `declare` de inmediato.
    ///
    /// El primer fallo de configuración (nombre vacío, ...) aborta la
    /// construcción y se devuelve como `Err`.
    pub fn build<F>(declare: F) -> Result<Self, SpecConfigError>
        where F: FnOnce(&mut SuiteBuilder<S>)
    {
        let mut builder = SuiteBuilder::new();
        declare(&mut builder);
        builder.finish()
    }
}

impl<S> Suite<S> {
    pub fn contexts(&self) -> &[Context<S>] {
        &self.contexts
    }

    pub fn example_count(&self) -> usize {
        self.contexts.iter().map(Context::example_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.example_count() == 0
    }

    /// Recorrido en profundidad, pre-orden, en orden de declaración.
    pub fn plan(&self) -> Vec<PlannedExample<'_, S>> {
        let mut out = Vec::with_capacity(self.example_count());
        let mut path = Vec::new();
        let mut setups = Vec::new();
        for ctx in &self.contexts {
            plan_context(ctx, &mut path, &mut setups, &mut out);
        }
        out
    }

    pub fn example_ids(&self) -> Vec<ExampleId> {
        self.plan().iter().map(PlannedExample::id).collect()
    }
}

fn plan_context<'a, S>(ctx: &'a Context<S>,
                       path: &mut Vec<String>,
                       setups: &mut Vec<&'a Action<S>>,
                       out: &mut Vec<PlannedExample<'a, S>>) {
    path.push(ctx.name.clone());
    if let Some(setup) = &ctx.setup {
        setups.push(setup);
    }
    for entry in &ctx.entries {
        match entry {
            Entry::Example(ex) => out.push(PlannedExample { index: out.len(),
                                                            path: path.clone(),
                                                            name: &ex.name,
                                                            setups: setups.clone(),
                                                            body: &ex.body }),
            Entry::Context(child) => plan_context(child, path, setups, out),
        }
    }
    if ctx.setup.is_some() {
        setups.pop();
    }
    path.pop();
}
