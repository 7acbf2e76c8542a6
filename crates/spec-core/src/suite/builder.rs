//! Builders de registro (`context` / `setup` / `should`).
//!
//! El cuerpo de cada `context` se ejecuta en el momento del registro. El
//! primer `SpecConfigError` queda latcheado en el builder raíz: a partir de
//! ahí el resto de registros se ignora y `finish` devuelve el error.

use log::warn;

use super::definition::{Context, Entry, Example, Suite};
use crate::errors::{ExampleResult, SpecConfigError};

const ROOT_LABEL: &str = "<root>";

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Builder de la raíz de la suite: sólo admite contextos.
pub struct SuiteBuilder<S> {
    contexts: Vec<Context<S>>,
    fault: Option<SpecConfigError>,
}

impl<S> Default for SuiteBuilder<S> {
    fn default() -> Self {
        Self { contexts: Vec::new(),
               fault: None }
    }
}

impl<S: 'static> SuiteBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declara un contexto de primer nivel y ejecuta `body` de inmediato.
    pub fn context<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
        where F: FnOnce(&mut ContextBuilder<'_, S>)
    {
        if self.fault.is_some() {
            return self;
        }
        let name = name.into();
        if is_blank(&name) {
            self.fault = Some(SpecConfigError::EmptyContextName { parent: ROOT_LABEL.to_string() });
            return self;
        }
        let context = {
            let mut builder = ContextBuilder { path: vec![name.clone()],
                                               context: Context::new(name),
                                               fault: &mut self.fault };
            body(&mut builder);
            builder.context
        };
        if self.fault.is_none() {
            self.contexts.push(context);
        }
        self
    }

    /// Primer fallo de configuración registrado, si lo hay.
    pub fn fault(&self) -> Option<&SpecConfigError> {
        self.fault.as_ref()
    }

    pub fn finish(self) -> Result<Suite<S>, SpecConfigError> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(Suite { contexts: self.contexts }),
        }
    }
}

/// Ámbito de declaración de un contexto.
pub struct ContextBuilder<'a, S> {
    path: Vec<String>,
    context: Context<S>,
    fault: &'a mut Option<SpecConfigError>,
}

impl<S: 'static> ContextBuilder<'_, S> {
    /// Ruta de contextos desde la raíz hasta éste (inclusive).
    pub fn path(&self) -> &[String] {
        &self.path
    }

    fn path_label(&self) -> String {
        self.path.join(" > ")
    }

    /// Fija el setup del contexto. Un segundo `setup` reemplaza al primero.
    pub fn setup<F>(&mut self, body: F) -> &mut Self
        where F: Fn(&mut S) -> ExampleResult + 'static
    {
        if self.fault.is_some() {
            return self;
        }
        if self.context.setup.is_some() {
            warn!("setup replaced in context `{}`", self.path_label());
        }
        self.context.setup = Some(Box::new(body));
        self
    }

    /// Declara un ejemplo en este contexto.
    pub fn should<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
        where F: Fn(&mut S) -> ExampleResult + 'static
    {
        if self.fault.is_some() {
            return self;
        }
        let name = name.into();
        if is_blank(&name) {
            *self.fault = Some(SpecConfigError::EmptyExampleName { context: self.path_label() });
            return self;
        }
        self.context.entries.push(Entry::Example(Example { name,
                                                           body: Box::new(body) }));
        self
    }

    /// Declara un contexto hijo; hereda los setups de éste.
    pub fn context<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
        where F: FnOnce(&mut ContextBuilder<'_, S>)
    {
        if self.fault.is_some() {
            return self;
        }
        let name = name.into();
        if is_blank(&name) {
            *self.fault = Some(SpecConfigError::EmptyContextName { parent: self.path_label() });
            return self;
        }
        let mut path = self.path.clone();
        path.push(name.clone());
        let context = {
            let mut child = ContextBuilder { path,
                                             context: Context::new(name),
                                             fault: &mut *self.fault };
            body(&mut child);
            child.context
        };
        if self.fault.is_none() {
            self.context.entries.push(Entry::Context(context));
        }
        self
    }
}
