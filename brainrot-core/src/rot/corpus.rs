use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::error::CorpusError;
use crate::io::read_file;

/// The five fixed corpus categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	GenZSlang,
	MillennialSlang,
	ExistentialDread,
	GlitchySymbol,
	InternetSlang,
}

impl Category {
	/// Every category, in document order.
	pub const ALL: [Category; 5] = [
		Category::GenZSlang,
		Category::MillennialSlang,
		Category::ExistentialDread,
		Category::GlitchySymbol,
		Category::InternetSlang,
	];

	/// Key of the category in the JSON corpus document.
	pub fn key(&self) -> &'static str {
		match self {
			Category::GenZSlang => "genZSlang",
			Category::MillennialSlang => "millennialSlang",
			Category::ExistentialDread => "existentialDread",
			Category::GlitchySymbol => "glitchySymbols",
			Category::InternetSlang => "internetSlang",
		}
	}
}

/// Source material of every transformation.
///
/// A `Corpus` is loaded once at start-up and only ever read afterward,
/// so a single instance can be shared by reference between threads.
///
/// # Invariants
/// - All five categories are present (lists may be empty)
/// - Entry order is preserved from the source document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Corpus {
	gen_z_slang: Vec<String>,
	millennial_slang: Vec<String>,
	existential_dread: Vec<String>,
	glitchy_symbols: Vec<String>,
	internet_slang: Vec<String>,
}

impl Default for Corpus {
	/// Returns the small embedded corpus used when no document is available.
	fn default() -> Self {
		fn owned(items: &[&str]) -> Vec<String> {
			items.iter().map(|s| (*s).to_owned()).collect()
		}

		Self {
			gen_z_slang: owned(&["no cap", "fr", "based", "yeet", "sus"]),
			millennial_slang: owned(&["literally", "I can't even", "adulting", "savage"]),
			existential_dread: owned(&["existence is pain", "we live in a society"]),
			glitchy_symbols: owned(&["💀", "👁️👄👁️", "🤡", "✨"]),
			internet_slang: owned(&["lol", "lmao", "idk", "tbh", "omg"]),
		}
	}
}

impl Corpus {
	/// Parses a corpus from a JSON document.
	///
	/// The document must be an object holding the five category arrays
	/// (see `Category::key`). Unknown keys are ignored.
	///
	/// # Errors
	/// - `CorpusError::Parse` if the document is malformed or a category is missing
	/// - `CorpusError::EmptySlang` if GenZ and Millennial slang are both empty
	pub fn from_json(json: &str) -> Result<Self, CorpusError> {
		let corpus: Self = serde_json::from_str(json)?;
		// Random phrases fall back on these two lists
		if corpus.gen_z_slang.is_empty() && corpus.millennial_slang.is_empty() {
			return Err(CorpusError::EmptySlang);
		}
		Ok(corpus)
	}

	/// Loads a corpus from a JSON file.
	///
	/// # Errors
	/// - `CorpusError::Io` if the file cannot be read
	/// - `CorpusError::Parse` or `CorpusError::EmptySlang` if its content is not a valid corpus
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, CorpusError> {
		let contents = read_file(&filepath)?;
		let corpus = Self::from_json(&contents)?;
		debug!(
			"Loaded corpus from {} ({} entries)",
			filepath.as_ref().display(),
			corpus.len()
		);
		Ok(corpus)
	}

	/// Loads a corpus from a JSON file, falling back to `Corpus::default()`.
	///
	/// Never fails: the load error is logged and the embedded corpus is returned.
	pub fn load_or_default<P: AsRef<Path>>(filepath: P) -> Self {
		match Self::load(&filepath) {
			Ok(corpus) => corpus,
			Err(e) => {
				warn!(
					"Failed to load corpus from {}: {e}, using the embedded corpus",
					filepath.as_ref().display()
				);
				Self::default()
			}
		}
	}

	/// Returns the entries of a category.
	pub fn get(&self, category: Category) -> &[String] {
		match category {
			Category::GenZSlang => &self.gen_z_slang,
			Category::MillennialSlang => &self.millennial_slang,
			Category::ExistentialDread => &self.existential_dread,
			Category::GlitchySymbol => &self.glitchy_symbols,
			Category::InternetSlang => &self.internet_slang,
		}
	}

	/// Total number of entries across all categories.
	pub fn len(&self) -> usize {
		Category::ALL.iter().map(|c| self.get(*c).len()).sum()
	}

	/// Returns `true` if every category is empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;
	use std::fs;

	const DOCUMENT: &str = r#"{
		"genZSlang": ["rizz", "mid"],
		"millennialSlang": ["on fleek"],
		"existentialDread": [],
		"glitchySymbols": ["⛧"],
		"internetSlang": ["brb", "afk", "smh"],
		"comment": "extra keys are ignored"
	}"#;

	#[test]
	fn parses_all_categories() {
		let corpus = Corpus::from_json(DOCUMENT).unwrap();
		assert_eq!(corpus.get(Category::GenZSlang), ["rizz", "mid"]);
		assert_eq!(corpus.get(Category::MillennialSlang), ["on fleek"]);
		assert!(corpus.get(Category::ExistentialDread).is_empty());
		assert_eq!(corpus.get(Category::GlitchySymbol), ["⛧"]);
		assert_eq!(corpus.get(Category::InternetSlang).len(), 3);
		assert_eq!(corpus.len(), 7);
	}

	#[test]
	fn missing_category_is_a_parse_error() {
		let err = Corpus::from_json(r#"{"genZSlang": ["fr"]}"#).unwrap_err();
		assert!(matches!(err, CorpusError::Parse(_)));
	}

	#[test]
	fn malformed_document_is_a_parse_error() {
		assert!(matches!(Corpus::from_json("not json"), Err(CorpusError::Parse(_))));
		assert!(matches!(
			Corpus::from_json(r#"{"genZSlang": 3}"#),
			Err(CorpusError::Parse(_))
		));
	}

	#[test]
	fn corpus_without_slang_is_rejected() {
		let json = r#"{"genZSlang": [], "millennialSlang": [], "existentialDread": ["void"],
			"glitchySymbols": ["💀"], "internetSlang": ["lol"]}"#;
		assert!(matches!(Corpus::from_json(json), Err(CorpusError::EmptySlang)));

		let path = env::temp_dir().join(format!("brainrot-noslang-{}.json", std::process::id()));
		fs::write(&path, json).unwrap();
		let corpus = Corpus::load_or_default(&path);
		fs::remove_file(&path).unwrap();
		assert_eq!(corpus, Corpus::default());
	}

	#[test]
	fn one_slang_list_is_enough() {
		let json = r#"{"genZSlang": [], "millennialSlang": ["totes"], "existentialDread": [],
			"glitchySymbols": [], "internetSlang": []}"#;
		assert_eq!(Corpus::from_json(json).unwrap().len(), 1);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let err = Corpus::load("./no/such/corpus.json").unwrap_err();
		assert!(matches!(err, CorpusError::Io(_)));
	}

	#[test]
	fn load_or_default_falls_back() {
		let corpus = Corpus::load_or_default("./no/such/corpus.json");
		assert_eq!(corpus, Corpus::default());
		assert!(!corpus.is_empty());
	}

	#[test]
	fn load_reads_a_file() {
		let path = env::temp_dir().join(format!("brainrot-corpus-{}.json", std::process::id()));
		fs::write(&path, DOCUMENT).unwrap();
		let corpus = Corpus::load_or_default(&path);
		fs::remove_file(&path).unwrap();
		assert_eq!(corpus.get(Category::GenZSlang), ["rizz", "mid"]);
	}

	#[test]
	fn default_corpus_round_trips_through_json() {
		let json = serde_json::to_string(&Corpus::default()).unwrap();
		for category in Category::ALL {
			assert!(json.contains(category.key()));
		}
		assert_eq!(Corpus::from_json(&json).unwrap(), Corpus::default());
	}
}
