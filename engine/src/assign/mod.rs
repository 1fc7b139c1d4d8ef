//! Assignment - shuffle + cyclic fill
//!
//! The core of the grid generator. Two steps:
//!
//! 1. **Permutation**: Fisher-Yates shuffle of the roster, driven by the
//!    seeded RNG. Unbiased given a uniform RNG over [0, 1).
//! 2. **Cyclic fill**: the 100 slots are filled by repeating the permuted
//!    roster with modular indexing: `out[k] = perm[k % n]`.
//!
//! With `n` names, each name lands either `floor(100/n)` or `ceil(100/n)`
//! times, and exactly `100 % n` names get the higher count. Which names get
//! the extra occurrence is decided by the shuffle: the first `100 % n`
//! positions of the permuted order are the favored ones. Balanced within a
//! single fill, not across independent seeds.

use crate::models::roster::Roster;
use crate::rng::SeededRng;

use crate::models::board::SLOT_COUNT;

/// Shuffle names in place using Fisher-Yates
///
/// Iterates `i` from `len - 1` down to `1`, draws
/// `j = floor(next_f64() * (i + 1))`, and swaps `names[i]` with `names[j]`.
/// `j` never exceeds `i` because `next_f64()` is strictly below 1.
///
/// # Example
/// ```
/// use squares_grid_core_rs::{shuffle, SeededRng};
///
/// let mut names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let mut rng = SeededRng::new(1);
/// shuffle(&mut names, &mut rng);
/// assert_eq!(names, vec!["C", "A", "B"]);
/// ```
pub fn shuffle(names: &mut [String], rng: &mut SeededRng) {
    for i in (1..names.len()).rev() {
        let j = (rng.next_f64() * (i + 1) as f64) as usize;
        names.swap(i, j);
    }
}

/// Assign a roster to the 100 grid slots
///
/// Shuffles a copy of the roster with the supplied RNG, then cyclically
/// fills the slot sequence. Total over its inputs: the roster is already
/// validated (1-100 names) and the RNG never fails.
///
/// The caller owns the RNG and its position in the sequence; a fresh
/// generator per request reproduces the published layout for that seed.
pub fn assign(roster: &Roster, rng: &mut SeededRng) -> Vec<String> {
    let mut permuted = roster.names().to_vec();
    shuffle(&mut permuted, rng);

    (0..SLOT_COUNT)
        .map(|k| permuted[k % permuted.len()].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(n: usize) -> Roster {
        Roster::new((0..n).map(|i| format!("N{}", i)).collect()).unwrap()
    }

    #[test]
    fn test_assign_always_fills_one_hundred_slots() {
        for n in [1, 2, 3, 7, 50, 99, 100] {
            let mut rng = SeededRng::new(42);
            let slots = assign(&roster_of(n), &mut rng);
            assert_eq!(slots.len(), SLOT_COUNT, "wrong slot count for n={}", n);
        }
    }

    #[test]
    fn test_single_name_fills_every_slot() {
        let mut rng = SeededRng::new(0);
        let roster = Roster::new(vec!["Solo".to_string()]).unwrap();
        let slots = assign(&roster, &mut rng);
        assert!(slots.iter().all(|s| s == "Solo"));
    }

    #[test]
    fn test_shuffle_golden_seed_one() {
        // Draws for seed 1 are 0.6270..., 0.00273...:
        //   i=2: j = floor(0.6270 * 3) = 1  -> [A, C, B]
        //   i=1: j = floor(0.0027 * 2) = 0  -> [C, A, B]
        let mut names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut rng = SeededRng::new(1);
        shuffle(&mut names, &mut rng);
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_cyclic_fill_repeats_permuted_order() {
        let mut rng = SeededRng::new(1);
        let roster = Roster::parse("A,B,C").unwrap();
        let slots = assign(&roster, &mut rng);
        assert_eq!(&slots[..6], &["C", "A", "B", "C", "A", "B"]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let original: Vec<String> = (0..25).map(|i| format!("N{}", i)).collect();
        let mut shuffled = original.clone();
        let mut rng = SeededRng::new(987654321);
        shuffle(&mut shuffled, &mut rng);

        let mut sorted_orig = original;
        let mut sorted_shuf = shuffled;
        sorted_orig.sort();
        sorted_shuf.sort();
        assert_eq!(sorted_orig, sorted_shuf, "shuffle must not add or drop names");
    }
}
