use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text file into a `String`.
///
/// - Fails if the file is missing or is not valid UTF-8
/// - A leading UTF-8 byte order mark is stripped
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	if let Some(stripped) = contents.strip_prefix('\u{feff}') {
		return Ok(stripped.to_owned());
	}
	Ok(contents)
}
