use rand::Rng;

/// Look-alike replacements for the letters that have some.
///
/// Lookup is case-insensitive.
fn substitutions(c: char) -> Option<&'static [char]> {
	match c.to_ascii_lowercase() {
		'a' => Some(&['4', '@']),
		'e' => Some(&['3', '€']),
		'i' => Some(&['1', '!', '|']),
		'o' => Some(&['0']),
		's' => Some(&['5', '$']),
		't' => Some(&['7', '+']),
		'l' => Some(&['1', '|']),
		'z' => Some(&['2']),
		_ => None,
	}
}

/// Applies leetspeak substitution and case flipping to every character.
///
/// Per character, at most one mutation applies:
/// - letters with look-alikes are replaced with probability `rot_level / 20`
/// - otherwise ASCII letters flip case with probability `rot_level / 30`
///
/// Everything else passes through unchanged.
pub(crate) fn perturb<R: Rng + ?Sized>(text: &str, rot_level: u8, rng: &mut R) -> String {
	let level = f64::from(rot_level);
	let substitute_chance = (level / 20.0).clamp(0.0, 1.0);
	let flip_chance = (level / 30.0).clamp(0.0, 1.0);

	text.chars()
		.map(|c| perturb_char(c, substitute_chance, flip_chance, rng))
		.collect()
}

fn perturb_char<R: Rng + ?Sized>(c: char, substitute_chance: f64, flip_chance: f64, rng: &mut R) -> char {
	if let Some(options) = substitutions(c) {
		if rng.random_bool(substitute_chance) {
			return options[rng.random_range(0..options.len())];
		}
	}

	if c.is_ascii_alphabetic() && rng.random_bool(flip_chance) {
		return if c.is_ascii_uppercase() {
			c.to_ascii_lowercase()
		} else {
			c.to_ascii_uppercase()
		};
	}

	c
}
