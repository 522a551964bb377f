use rand::Rng;

/// Turns a rot level (1-10) and a maximum count into a random element count.
///
/// - `min = max(1, floor(rot_level / 10 * max_count))`
/// - `max = max(min, ceil(rot_level / 5))`
/// - result is uniform in `[min, max]`
///
/// Integer arithmetic only, so the bounds are exact. The result is always >= 1.
pub(crate) fn intensity<R: Rng + ?Sized>(rot_level: u8, max_count: usize, rng: &mut R) -> usize {
	let (min_elements, max_elements) = bounds(rot_level, max_count);
	rng.random_range(min_elements..=max_elements)
}

/// Inclusive bounds used by `intensity`.
fn bounds(rot_level: u8, max_count: usize) -> (usize, usize) {
	let level = usize::from(rot_level);
	let min_elements = (level * max_count / 10).max(1);
	let max_elements = min_elements.max(level.div_ceil(5));
	(min_elements, max_elements)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn bounds_match_the_scaling_rule() {
		assert_eq!(bounds(1, 3), (1, 1));
		assert_eq!(bounds(5, 3), (1, 1));
		assert_eq!(bounds(5, 4), (2, 2));
		assert_eq!(bounds(6, 2), (1, 2));
		assert_eq!(bounds(10, 3), (3, 3));
		assert_eq!(bounds(10, 2), (2, 2));
		assert_eq!(bounds(9, 3), (2, 2));
		assert_eq!(bounds(8, 1), (1, 2));
	}

	#[test]
	fn always_in_bounds_and_positive() {
		let mut rng = StdRng::seed_from_u64(42);
		for rot_level in 1..=10 {
			for max_count in 0..=6 {
				let (lo, hi) = bounds(rot_level, max_count);
				for _ in 0..50 {
					let n = intensity(rot_level, max_count, &mut rng);
					assert!(n >= 1);
					assert!((lo..=hi).contains(&n), "{n} not in {lo}..={hi}");
				}
			}
		}
	}

	#[test]
	fn scales_with_rot_level() {
		for max_count in 1..=4 {
			let mut previous = bounds(1, max_count).0;
			for rot_level in 2..=10 {
				let (lo, _) = bounds(rot_level, max_count);
				assert!(lo >= previous);
				previous = lo;
			}
		}
	}
}
