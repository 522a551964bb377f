use serde::{Deserialize, Serialize};

/// Rot level used when none (or `0`) is given.
pub const DEFAULT_ROT_LEVEL: u8 = 5;

/// Lowest accepted rot level.
pub const MIN_ROT_LEVEL: u8 = 1;

/// Highest accepted rot level.
pub const MAX_ROT_LEVEL: u8 = 10;

/// Slang categories that can be requested through `include_slang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slang {
	GenZ,
	Millennial,
}

impl Slang {
	/// Parses a selector case-insensitively (`"GenZ"`, `"genz"`, `"MILLENNIAL"`...).
	///
	/// Returns `None` for unknown selectors.
	pub fn from_selector(selector: &str) -> Option<Self> {
		match selector.to_ascii_lowercase().as_str() {
			"genz" => Some(Slang::GenZ),
			"millennial" => Some(Slang::Millennial),
			_ => None,
		}
	}
}

/// Partial, caller-supplied options.
///
/// Every field is optional. Field names follow the historical option
/// names when (de)serialized (`rotLevel`, `includeSlang`, ...), so a JSON
/// object such as `{"rotLevel": 8, "includeSlang": ["GenZ"]}` can be used
/// directly.
///
/// Nothing here is validated: `normalize` turns any combination into a
/// usable `RotConfig`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RotOptions {
	/// Intensity, expected in 1..=10. `0` counts as absent.
	pub rot_level: Option<i64>,

	/// Slang selectors (`"GenZ"`, `"Millennial"`), case-insensitive.
	pub include_slang: Option<Vec<String>>,

	/// Whether to add existential dread phrases.
	pub include_dread: Option<bool>,

	/// Whether to add glitchy symbols.
	pub include_symbols: Option<bool>,

	/// Whether to add internet slang.
	pub include_internet_noise: Option<bool>,
}

impl RotOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_rot_level(mut self, rot_level: i64) -> Self {
		self.rot_level = Some(rot_level);
		self
	}

	/// Adds a slang selector. Unknown selectors are kept but ignored on normalization.
	pub fn with_slang(mut self, selector: &str) -> Self {
		self.include_slang.get_or_insert_with(Vec::new).push(selector.to_owned());
		self
	}

	pub fn with_dread(mut self, include: bool) -> Self {
		self.include_dread = Some(include);
		self
	}

	pub fn with_symbols(mut self, include: bool) -> Self {
		self.include_symbols = Some(include);
		self
	}

	pub fn with_internet_noise(mut self, include: bool) -> Self {
		self.include_internet_noise = Some(include);
		self
	}

	/// Builds the full configuration.
	///
	/// - `rot_level`: absent or `0` becomes `DEFAULT_ROT_LEVEL`, then the
	///   value is clamped to `[MIN_ROT_LEVEL, MAX_ROT_LEVEL]`
	/// - `include_slang`: unknown selectors are dropped, duplicates collapse
	/// - flags: absent means `false`
	pub fn normalize(&self) -> RotConfig {
		let rot_level = match self.rot_level {
			None | Some(0) => i64::from(DEFAULT_ROT_LEVEL),
			Some(level) => level,
		}
		.clamp(i64::from(MIN_ROT_LEVEL), i64::from(MAX_ROT_LEVEL));

		let mut slang = Vec::new();
		for selector in self.include_slang.iter().flatten() {
			if let Some(kind) = Slang::from_selector(selector) {
				if !slang.contains(&kind) {
					slang.push(kind);
				}
			}
		}

		RotConfig {
			// Clamped above, cannot truncate
			rot_level: rot_level as u8,
			slang,
			include_dread: self.include_dread.unwrap_or(false),
			include_symbols: self.include_symbols.unwrap_or(false),
			include_internet_noise: self.include_internet_noise.unwrap_or(false),
		}
	}
}

/// Fully populated configuration of one call.
///
/// Only obtainable through `RotOptions::normalize` (or `Default`).
///
/// # Invariants
/// - `rot_level` is in `[MIN_ROT_LEVEL, MAX_ROT_LEVEL]`
/// - `slang` holds each kind at most once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotConfig {
	rot_level: u8,
	slang: Vec<Slang>,
	include_dread: bool,
	include_symbols: bool,
	include_internet_noise: bool,
}

impl Default for RotConfig {
	fn default() -> Self {
		RotOptions::default().normalize()
	}
}

impl From<&RotOptions> for RotConfig {
	fn from(options: &RotOptions) -> Self {
		options.normalize()
	}
}

impl RotConfig {
	pub fn rot_level(&self) -> u8 {
		self.rot_level
	}

	pub fn includes_slang(&self, kind: Slang) -> bool {
		self.slang.contains(&kind)
	}

	pub fn include_dread(&self) -> bool {
		self.include_dread
	}

	pub fn include_symbols(&self) -> bool {
		self.include_symbols
	}

	pub fn include_internet_noise(&self) -> bool {
		self.include_internet_noise
	}
}
