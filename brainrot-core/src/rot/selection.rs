use rand::Rng;

/// Returns a shuffled copy of `items` (Fisher-Yates).
///
/// Every permutation is equally likely given a uniform `rng`.
pub(crate) fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
	let mut result = items.to_vec();
	for i in (1..result.len()).rev() {
		let j = rng.random_range(0..=i);
		result.swap(i, j);
	}
	result
}

/// Picks up to `count` elements of `items` without repeating a position.
///
/// Returns `min(count, items.len())` elements, or nothing when
/// `count` is 0 or `items` is empty.
pub(crate) fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
	if count == 0 || items.is_empty() {
		return Vec::new();
	}
	let mut shuffled = shuffle(items, rng);
	shuffled.truncate(count.min(items.len()));
	shuffled
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::collections::HashSet;

	#[test]
	fn shuffle_is_a_permutation() {
		let mut rng = StdRng::seed_from_u64(7);
		let items: Vec<u32> = (0..50).collect();
		for _ in 0..20 {
			let mut shuffled = shuffle(&items, &mut rng);
			assert_eq!(shuffled.len(), items.len());
			shuffled.sort_unstable();
			assert_eq!(shuffled, items);
		}
	}

	#[test]
	fn shuffle_leaves_source_untouched() {
		let mut rng = StdRng::seed_from_u64(1);
		let items = vec!["a", "b", "c"];
		let _ = shuffle(&items, &mut rng);
		assert_eq!(items, ["a", "b", "c"]);
	}

	#[test]
	fn shuffle_handles_tiny_inputs() {
		let mut rng = StdRng::seed_from_u64(3);
		assert!(shuffle::<u8, _>(&[], &mut rng).is_empty());
		assert_eq!(shuffle(&[42], &mut rng), [42]);
	}

	#[test]
	fn shuffle_reaches_every_permutation() {
		let mut rng = StdRng::seed_from_u64(11);
		let seen: HashSet<Vec<u8>> = (0..600).map(|_| shuffle(&[1, 2, 3], &mut rng)).collect();
		assert_eq!(seen.len(), 6);
	}

	#[test]
	fn sample_respects_count_and_length() {
		let mut rng = StdRng::seed_from_u64(5);
		let items: Vec<usize> = (0..10).collect();
		for count in 0..15 {
			let picked = sample(&items, count, &mut rng);
			assert_eq!(picked.len(), count.min(items.len()));
			let distinct: HashSet<_> = picked.iter().collect();
			assert_eq!(distinct.len(), picked.len());
			assert!(picked.iter().all(|p| items.contains(p)));
		}
	}

	#[test]
	fn sample_empty_cases() {
		let mut rng = StdRng::seed_from_u64(9);
		assert!(sample(&["x", "y"], 0, &mut rng).is_empty());
		assert!(sample::<&str, _>(&[], 3, &mut rng).is_empty());
	}
}
