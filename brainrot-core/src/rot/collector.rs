use rand::Rng;

use super::corpus::{Category, Corpus};
use super::intensity::intensity;
use super::options::{RotConfig, Slang};
use super::selection::sample;

/// Maximum count passed to the intensity scaler for slang and internet noise.
const SLANG_MAX: usize = 3;

/// Maximum count passed to the intensity scaler for existential dread.
const DREAD_MAX: usize = 2;

/// Number of entries picked when nothing is enabled in random-phrase mode.
const FALLBACK_COUNT: usize = 2;

/// Gathers the phrase pool of one call from every enabled category.
///
/// Each category gets its own intensity draw, so the pool size varies
/// even for a fixed configuration. No particular order is kept; callers shuffle.
pub(crate) fn collect<R: Rng + ?Sized>(corpus: &Corpus, config: &RotConfig, rng: &mut R) -> Vec<String> {
	let level = config.rot_level();
	let mut phrases = Vec::new();

	let enabled = [
		(config.includes_slang(Slang::GenZ), Category::GenZSlang, SLANG_MAX),
		(config.includes_slang(Slang::Millennial), Category::MillennialSlang, SLANG_MAX),
		(config.include_dread(), Category::ExistentialDread, DREAD_MAX),
		(config.include_internet_noise(), Category::InternetSlang, SLANG_MAX),
	];
	for (_, category, max_count) in enabled.into_iter().filter(|(on, _, _)| *on) {
		let count = intensity(level, max_count, rng);
		phrases.extend(sample(corpus.get(category), count, rng));
	}

	phrases
}

/// Like `collect`, but never empty while the corpus has any slang.
///
/// When no category is enabled, `FALLBACK_COUNT` entries are picked from
/// the union of GenZ and Millennial slang.
pub(crate) fn collect_or_fallback<R: Rng + ?Sized>(
	corpus: &Corpus,
	config: &RotConfig,
	rng: &mut R,
) -> Vec<String> {
	let phrases = collect(corpus, config, rng);
	if !phrases.is_empty() {
		return phrases;
	}

	let pool: Vec<String> = corpus
		.get(Category::GenZSlang)
		.iter()
		.chain(corpus.get(Category::MillennialSlang))
		.cloned()
		.collect();
	sample(&pool, FALLBACK_COUNT, rng)
}

/// Picks glitchy symbols, scaled by `max_count`.
pub(crate) fn symbols<R: Rng + ?Sized>(
	corpus: &Corpus,
	config: &RotConfig,
	max_count: usize,
	rng: &mut R,
) -> Vec<String> {
	let count = intensity(config.rot_level(), max_count, rng);
	sample(corpus.get(Category::GlitchySymbol), count, rng)
}
