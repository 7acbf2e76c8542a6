//! Primitivas de aserción.
//!
//! Cada primitiva devuelve `Result<(), Fault>`: en caso de fallo registra el
//! valor esperado y el obtenido (su representación `Debug`) más un mensaje
//! opcional. Las macros exportadas (`assert_equal!`, ...) propagan con `?`, de
//! modo que la primera aserción fallida corta el ejemplo en curso.
//!
//! Llamar una primitiva fuera de un ejemplo activo devuelve
//! `Fault::Configuration(SpecConfigError::AssertionOutsideExample)`.

mod active;
pub mod macros;

use std::any::Any;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub use active::{is_active, within_example, ActiveExample};

use crate::errors::{describe_panic, Fault};
use crate::model::AssertionFailure;
use active::ensure_active;

/// Coerción a booleano del valor bajo prueba.
///
/// `bool` se evalúa tal cual, `Option` es verdadero si es `Some` y `Result`
/// si es `Ok`. La decisión de la aserción es estricta sobre el resultado.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Truthy for Result<T, E> {
    fn truthy(&self) -> bool {
        self.is_ok()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

/// Errores que exponen una "clase" comparable, usada por `assert_raises`.
pub trait RaisesKind {
    type Kind: PartialEq + Debug;
    fn raised_kind(&self) -> Self::Kind;
}

impl RaisesKind for std::io::Error {
    type Kind = std::io::ErrorKind;
    fn raised_kind(&self) -> Self::Kind {
        self.kind()
    }
}

impl RaisesKind for std::num::ParseIntError {
    type Kind = std::num::IntErrorKind;
    fn raised_kind(&self) -> Self::Kind {
        self.kind().clone()
    }
}

fn failure(assertion: &str, expected: impl Into<String>, actual: impl Into<String>, message: Option<String>) -> Result<(), Fault> {
    Err(Fault::Assertion(AssertionFailure::new(assertion, expected, actual, message)))
}

/// Igualdad estructural (`PartialEq`): secuencias sensibles al orden, mapas
/// no.
pub fn assert_equal<E, A>(expected: &E, actual: &A, message: Option<String>) -> Result<(), Fault>
    where E: Debug + ?Sized,
          A: PartialEq<E> + Debug + ?Sized
{
    ensure_active("assert_equal")?;
    if actual.eq(expected) {
        Ok(())
    } else {
        failure("assert_equal", format!("{expected:?}"), format!("{actual:?}"), message)
    }
}

pub fn assert_not_equal<E, A>(expected: &E, actual: &A, message: Option<String>) -> Result<(), Fault>
    where E: Debug + ?Sized,
          A: PartialEq<E> + Debug + ?Sized
{
    ensure_active("assert_not_equal")?;
    if actual.ne(expected) {
        Ok(())
    } else {
        failure("assert_not_equal", format!("anything but {expected:?}"), format!("{actual:?}"), message)
    }
}

/// Mismo multiconjunto de elementos, sin importar el orden.
pub fn assert_same_elements<E, A, T>(expected: E, actual: A, message: Option<String>) -> Result<(), Fault>
    where E: IntoIterator<Item = T>,
          A: IntoIterator<Item = T>,
          T: PartialEq + Debug
{
    ensure_active("assert_same_elements")?;
    let expected: Vec<T> = expected.into_iter().collect();
    let actual: Vec<T> = actual.into_iter().collect();
    if same_multiset(&expected, &actual) {
        Ok(())
    } else {
        failure("assert_same_elements", format!("{expected:?}"), format!("{actual:?}"), message)
    }
}

// Cuadrático, pero sólo exige `PartialEq` (sin Hash ni Ord).
fn same_multiset<T: PartialEq>(expected: &[T], actual: &[T]) -> bool {
    if expected.len() != actual.len() {
        return false;
    }
    let mut used = vec![false; actual.len()];
    expected.iter().all(|item| {
                       match (0..actual.len()).find(|&i| !used[i] && actual[i] == *item) {
                           Some(i) => {
                               used[i] = true;
                               true
                           }
                           None => false,
                       }
                   })
}

pub fn assert_true<V: Truthy + Debug>(value: V, message: Option<String>) -> Result<(), Fault> {
    ensure_active("assert_true")?;
    if value.truthy() {
        Ok(())
    } else {
        failure("assert_true", "truthy value", format!("{value:?}"), message)
    }
}

pub fn assert_false<V: Truthy + Debug>(value: V, message: Option<String>) -> Result<(), Fault> {
    ensure_active("assert_false")?;
    if value.truthy() {
        failure("assert_false", "falsy value", format!("{value:?}"), message)
    } else {
        Ok(())
    }
}

/// Alias de `assert_true`.
pub fn assert<V: Truthy + Debug>(value: V, message: Option<String>) -> Result<(), Fault> {
    ensure_active("assert")?;
    if value.truthy() {
        Ok(())
    } else {
        failure("assert", "truthy value", format!("{value:?}"), message)
    }
}

/// Pasa sólo si `body` falla con un error de la clase `kind`.
pub fn assert_raises<T, E, F>(kind: E::Kind, body: F) -> Result<(), Fault>
    where E: RaisesKind,
          F: FnOnce() -> Result<T, E>
{
    ensure_active("assert_raises")?;
    let expected = format!("{kind:?}");
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Err(err)) => {
            let raised = err.raised_kind();
            if raised == kind {
                Ok(())
            } else {
                failure("assert_raises", expected, format!("{raised:?}"), None)
            }
        }
        Ok(Ok(_)) => failure("assert_raises", expected, "nothing raised", None),
        Err(payload) => failure("assert_raises", expected, format!("panic: {}", describe_panic(payload.as_ref())), None),
    }
}

/// Falla si `body` devuelve error o hace panic; si no, devuelve su valor.
///
/// Un `Fault` de configuración o de aserción devuelto por `body` se propaga
/// tal cual.
pub fn assert_nothing_raised<T, E, F>(body: F) -> Result<T, Fault>
    where E: Debug + 'static,
          F: FnOnce() -> Result<T, E>
{
    ensure_active("assert_nothing_raised")?;
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => match (&err as &dyn Any).downcast_ref::<Fault>() {
            Some(fault @ (Fault::Configuration(_) | Fault::Assertion(_))) => Err(fault.clone()),
            _ => Err(Fault::Assertion(AssertionFailure::new("assert_nothing_raised",
                                                            "nothing raised",
                                                            format!("{err:?}"),
                                                            None))),
        },
        Err(payload) => Err(Fault::Assertion(AssertionFailure::new("assert_nothing_raised",
                                                                   "nothing raised",
                                                                   format!("panic: {}", describe_panic(payload.as_ref())),
                                                                   None))),
    }
}

pub fn assert_contains<C, T>(collection: C, item: &T, message: Option<String>) -> Result<(), Fault>
    where C: IntoIterator,
          C::Item: Borrow<T> + Debug,
          T: PartialEq + Debug + ?Sized
{
    ensure_active("assert_contains")?;
    let items: Vec<C::Item> = collection.into_iter().collect();
    if items.iter().any(|i| Borrow::<T>::borrow(i) == item) {
        Ok(())
    } else {
        failure("assert_contains", format!("collection containing {item:?}"), format!("{items:?}"), message)
    }
}

pub fn assert_does_not_contain<C, T>(collection: C, item: &T, message: Option<String>) -> Result<(), Fault>
    where C: IntoIterator,
          C::Item: Borrow<T> + Debug,
          T: PartialEq + Debug + ?Sized
{
    ensure_active("assert_does_not_contain")?;
    let items: Vec<C::Item> = collection.into_iter().collect();
    if items.iter().any(|i| Borrow::<T>::borrow(i) == item) {
        failure("assert_does_not_contain", format!("collection without {item:?}"), format!("{items:?}"), message)
    } else {
        Ok(())
    }
}

/// Falla listando las claves desconocidas si `keys` contiene alguna fuera de
/// `valid`.
pub fn assert_valid_keys<M, K>(keys: M, valid: &[K], message: Option<String>) -> Result<(), Fault>
    where M: IntoIterator,
          M::Item: Borrow<K>,
          K: PartialEq + Debug
{
    ensure_active("assert_valid_keys")?;
    let unknown: Vec<String> = keys.into_iter()
                                   .filter(|k| !valid.contains(Borrow::<K>::borrow(k)))
                                   .map(|k| format!("{:?}", Borrow::<K>::borrow(&k)))
                                   .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        failure("assert_valid_keys", format!("keys within {valid:?}"), format!("unknown key(s): {}", unknown.join(", ")), message)
    }
}

/// Fallo incondicional (equivale a una aserción que nunca se cumple).
pub fn flunk(message: impl Into<String>) -> Fault {
    match ensure_active("flunk") {
        Ok(()) => Fault::Assertion(AssertionFailure::new("flunk", "not to be reached", "flunk", Some(message.into()))),
        Err(fault) => fault,
    }
}
