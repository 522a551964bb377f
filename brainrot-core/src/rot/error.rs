//! Error types for corpus loading.

use thiserror::Error;

/// Reasons a corpus document could not be used.
///
/// This is the only failure kind of the crate, and it never reaches
/// callers of `Rottifier::transform`: `Corpus::load_or_default` recovers
/// from it by substituting the embedded corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
	/// The corpus file could not be read.
	#[error("failed to read corpus: {0}")]
	Io(#[from] std::io::Error),

	/// The corpus document is not valid JSON or misses a category.
	#[error("failed to parse corpus: {0}")]
	Parse(#[from] serde_json::Error),

	/// Both slang lists are empty, so random phrases would come out empty.
	#[error("corpus has no GenZ or Millennial slang")]
	EmptySlang,
}
