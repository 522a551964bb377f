//! "Brain rot" text mutation library.
//!
//! This crate provides a small randomized text pipeline including:
//! - A slang/symbol corpus loaded once from a JSON document (with an embedded fallback)
//! - Intensity scaling driven by a 1-10 "rot level"
//! - Phrase collection, letter perturbation and phrase splicing
//! - Injectable randomness for deterministic replay
//!
//! Callers see the corpus, the options and `Rottifier`; sampling, scaling
//! and splicing helpers stay private to the `rot` module.

/// Corpus, options and the `Rottifier` composer.
///
/// This module exposes the high-level transformation interface while keeping
/// the random building blocks private.
pub mod rot;

/// I/O utilities (corpus file reading).
///
/// Not exposed
pub(crate) mod io;

pub use rot::corpus::{Category, Corpus};
pub use rot::error::CorpusError;
pub use rot::options::{RotConfig, RotOptions, Slang};
pub use rot::rottifier::Rottifier;
