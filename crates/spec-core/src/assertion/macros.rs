//! Macros de aserción para usar dentro de setups y cuerpos de ejemplo.
//!
//! Exportadas en la raíz del crate:
//!   use spec_core::{assert_equal, assert_same_elements};
//!
//! Todas propagan el fallo con `?`, por lo que sólo pueden usarse en
//! closures/funciones que devuelven `ExampleResult` (o un `Result` cuyo error
//! se construya desde `Fault`). El mensaje opcional acepta la sintaxis de
//! `format!`.

#[macro_export]
macro_rules! assert_equal {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assertion::assert_equal(&$expected, &$actual, ::std::option::Option::None)?
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        $crate::assertion::assert_equal(&$expected, &$actual, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

#[macro_export]
macro_rules! assert_not_equal {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assertion::assert_not_equal(&$expected, &$actual, ::std::option::Option::None)?
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        $crate::assertion::assert_not_equal(&$expected, &$actual, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

#[macro_export]
macro_rules! assert_same_elements {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assertion::assert_same_elements($expected, $actual, ::std::option::Option::None)?
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        $crate::assertion::assert_same_elements($expected, $actual, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

#[macro_export]
macro_rules! assert_true {
    ($value:expr $(,)?) => {
        $crate::assertion::assert_true($value, ::std::option::Option::None)?
    };
    ($value:expr, $($msg:tt)+) => {
        $crate::assertion::assert_true($value, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

#[macro_export]
macro_rules! assert_false {
    ($value:expr $(,)?) => {
        $crate::assertion::assert_false($value, ::std::option::Option::None)?
    };
    ($value:expr, $($msg:tt)+) => {
        $crate::assertion::assert_false($value, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

#[macro_export]
macro_rules! assert_raises {
    ($kind:expr, $body:expr $(,)?) => {
        $crate::assertion::assert_raises($kind, $body)?
    };
}

/// Devuelve el valor producido por el cuerpo si no hubo error.
#[macro_export]
macro_rules! assert_nothing_raised {
    ($body:expr $(,)?) => {
        $crate::assertion::assert_nothing_raised($body)?
    };
}

#[macro_export]
macro_rules! assert_contains {
    ($collection:expr, $item:expr $(,)?) => {
        $crate::assertion::assert_contains($collection, &$item, ::std::option::Option::None)?
    };
    ($collection:expr, $item:expr, $($msg:tt)+) => {
        $crate::assertion::assert_contains($collection, &$item, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

#[macro_export]
macro_rules! assert_does_not_contain {
    ($collection:expr, $item:expr $(,)?) => {
        $crate::assertion::assert_does_not_contain($collection, &$item, ::std::option::Option::None)?
    };
    ($collection:expr, $item:expr, $($msg:tt)+) => {
        $crate::assertion::assert_does_not_contain($collection, &$item, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

#[macro_export]
macro_rules! assert_valid_keys {
    ($keys:expr, $valid:expr $(,)?) => {
        $crate::assertion::assert_valid_keys($keys, $valid, ::std::option::Option::None)?
    };
    ($keys:expr, $valid:expr, $($msg:tt)+) => {
        $crate::assertion::assert_valid_keys($keys, $valid, ::std::option::Option::Some(::std::format!($($msg)+)))?
    };
}

/// Corta el ejemplo con un fallo incondicional.
#[macro_export]
macro_rules! flunk {
    ($($msg:tt)+) => {
        return ::std::result::Result::Err(::std::convert::From::from($crate::assertion::flunk(::std::format!($($msg)+))))
    };
}
