use log::debug;
use rand::Rng;

use super::collector::{collect, collect_or_fallback, symbols};
use super::corpus::Corpus;
use super::options::{RotConfig, RotOptions};
use super::perturbation::perturb;
use super::selection::shuffle;

/// Symbol max count in random-phrase mode.
const PHRASE_SYMBOLS_MAX: usize = 4;

/// Symbol max count in text-transform mode.
const TEXT_SYMBOLS_MAX: usize = 3;

/// High-level entry point of the crate.
///
/// # Responsibilities
/// - Normalize caller options into a `RotConfig`
/// - Generate a random phrase when no text is given
/// - Otherwise perturb the text and splice phrases and symbols into it
///
/// The corpus is borrowed and never mutated, so one `Corpus` can back any
/// number of `Rottifier`s across threads.
#[derive(Debug, Clone, Copy)]
pub struct Rottifier<'c> {
	corpus: &'c Corpus,
}

impl<'c> Rottifier<'c> {
	pub fn new(corpus: &'c Corpus) -> Self {
		Self { corpus }
	}

	/// Returns the corpus backing this rottifier.
	pub fn corpus(&self) -> &'c Corpus {
		self.corpus
	}

	/// Rottifies `text`, or generates a random phrase if `text` is absent or empty.
	///
	/// Uses the thread-local random generator. Never fails.
	pub fn transform(&self, text: Option<&str>, options: Option<&RotOptions>) -> String {
		self.transform_with_rng(text, options, &mut rand::rng())
	}

	/// Same as `transform`, drawing every random choice from `rng`.
	///
	/// A seeded generator makes the output reproducible.
	pub fn transform_with_rng<R: Rng + ?Sized>(
		&self,
		text: Option<&str>,
		options: Option<&RotOptions>,
		rng: &mut R,
	) -> String {
		let config = options.map(RotOptions::normalize).unwrap_or_default();

		match text {
			Some(text) if !text.is_empty() => self.transform_text(text, &config, rng),
			_ => self.random_phrase(&config, rng),
		}
	}

	/// Builds a phrase out of collected pool entries and optional symbols.
	fn random_phrase<R: Rng + ?Sized>(&self, config: &RotConfig, rng: &mut R) -> String {
		let phrases = collect_or_fallback(self.corpus, config, rng);
		let mut phrase = shuffle(&phrases, rng);

		if config.include_symbols() {
			for symbol in symbols(self.corpus, config, PHRASE_SYMBOLS_MAX, rng) {
				let position = rng.random_range(0..=phrase.len());
				phrase.insert(position, symbol);
			}
		}

		debug!("Random phrase of {} parts (rot level {})", phrase.len(), config.rot_level());
		phrase.join(" ")
	}

	/// Perturbs `text` then splices the collected phrases into it.
	fn transform_text<R: Rng + ?Sized>(&self, text: &str, config: &RotConfig, rng: &mut R) -> String {
		let text = perturb(text, config.rot_level(), rng);

		let mut phrases = collect(self.corpus, config, rng);
		if config.include_symbols() {
			phrases.extend(symbols(self.corpus, config, TEXT_SYMBOLS_MAX, rng));
		}

		if phrases.is_empty() {
			return text;
		}
		debug!("Splicing {} phrases (rot level {})", phrases.len(), config.rot_level());
		shuffle_and_insert(&text, &phrases, config.rot_level(), rng)
	}
}

/// Inserts shuffled `phrases` between the words of `text`.
///
/// # Behavior
/// - Words are split on single spaces.
/// - With at most one word, all phrases are appended after a space.
/// - Otherwise `min(phrases, max(1, floor(rot_level / 10 * words)))` phrases
///   are inserted one by one at a random index in `[1, len - 1]` of the
///   growing word list, so the first word always stays first.
/// - Remaining phrases are appended at the end.
fn shuffle_and_insert<R: Rng + ?Sized>(text: &str, phrases: &[String], rot_level: u8, rng: &mut R) -> String {
	let shuffled = shuffle(phrases, rng);
	let mut words: Vec<String> = text.split(' ').map(str::to_owned).collect();

	if words.len() <= 1 {
		return format!("{} {}", text, shuffled.join(" "));
	}

	let scaled = (usize::from(rot_level) * words.len() / 10).max(1);
	let insert_count = shuffled.len().min(scaled);

	let (inserted, remaining) = shuffled.split_at(insert_count);
	for phrase in inserted {
		let position = rng.random_range(1..words.len());
		words.insert(position, phrase.clone());
	}
	words.extend_from_slice(remaining);

	words.join(" ")
}
