//! Top-level module for the rottification pipeline.
//!
//! This module provides the full text mutation system, including:
//! - The slang/symbol corpus (`Corpus`)
//! - Option normalization (`RotOptions` -> `RotConfig`)
//! - Random selection and intensity scaling primitives
//! - Phrase collection and letter perturbation
//! - A high-level composition interface (`Rottifier`)

/// Five named word/symbol lists used as source material.
///
/// Supports loading from a JSON document with a built-in fallback.
pub mod corpus;

/// Errors raised while loading a corpus.
pub mod error;

/// Partial options and their normalized configuration.
///
/// Rot level clamping, slang selectors and flag defaults live here.
pub mod options;

/// High-level interface that either generates a random phrase
/// or splices noise into an input text.
pub mod rottifier;

/// Gathers the phrase pool for one call from the enabled categories.
mod collector;

/// Maps a rot level and a maximum count to a randomized element count.
mod intensity;

/// Per-character leetspeak substitution and case flipping.
mod perturbation;

/// Shuffle and sampling building blocks.
mod selection;
