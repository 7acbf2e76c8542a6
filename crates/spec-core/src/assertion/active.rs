//! Marca de "ejemplo activo" por hilo.
//!
//! El engine entra en un `ActiveExample` antes de correr setups y cuerpo; las
//! primitivas de aserción la consultan y devuelven un fallo de configuración
//! si se llaman fuera de un ejemplo.
use std::cell::Cell;

use crate::errors::{Fault, SpecConfigError};

thread_local! {
    static ACTIVE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Guard RAII: el ejemplo está activo mientras viva. Se restaura también si
/// el cuerpo hace panic.
pub struct ActiveExample {
    _private: (),
}

impl ActiveExample {
    pub fn enter() -> Self {
        ACTIVE_DEPTH.with(|d| d.set(d.get() + 1));
        Self { _private: () }
    }
}

impl Drop for ActiveExample {
    fn drop(&mut self) {
        ACTIVE_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

pub fn is_active() -> bool {
    ACTIVE_DEPTH.with(|d| d.get() > 0)
}

/// Ejecuta `f` como si fuera el cuerpo de un ejemplo.
pub fn within_example<R>(f: impl FnOnce() -> R) -> R {
    let _guard = ActiveExample::enter();
    f()
}

pub(crate) fn ensure_active(assertion: &str) -> Result<(), Fault> {
    if is_active() {
        Ok(())
    } else {
        Err(Fault::Configuration(SpecConfigError::AssertionOutsideExample { assertion: assertion.to_string() }))
    }
}
