//! Fingerprint determinista de la forma de una suite.

mod hash;

pub use hash::suite_fingerprint;
