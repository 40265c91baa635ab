//! Property-based tests for the Gini-tracking disjoint sets.
//!
//! Random merge sequences are generated from seeded RNGs and replayed against
//! a trusted oracle that recomputes the Gini index from scratch after every
//! merge. The suite checks the incremental numerator, the smallest-size
//! lookup, parent dominance, and size conservation together, since a defect
//! in any one of them skews the others.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::tests::{collect_sizes, naive_gini};
use super::GiniDisjointSets;

/// Upper bound on the generated universe size.
const MAX_ELEMENTS: usize = 48;

/// A replayable merge sequence over a fixed universe.
#[derive(Clone, Debug)]
struct MergeSequence {
    element_count: usize,
    merges: Vec<(usize, usize)>,
}

/// Draws a universe size and a uniformly random spanning sequence of merges:
/// each step unions two distinct current sets picked through random
/// representatives.
fn merge_sequence_strategy() -> impl Strategy<Value = MergeSequence> {
    (2..=MAX_ELEMENTS, any::<u64>(), 0.2_f64..=1.0).prop_map(|(element_count, seed, density)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut representative: Vec<usize> = (0..element_count).collect();
        let merge_count = (((element_count - 1) as f64) * density) as usize;
        let mut merges = Vec::with_capacity(merge_count);
        for _ in 0..merge_count {
            let left_slot = rng.gen_range(0..representative.len());
            let left = representative[left_slot];
            representative.swap_remove(left_slot);
            let right_slot = rng.gen_range(0..representative.len());
            let right = representative[right_slot];
            merges.push((left, right));
        }
        MergeSequence {
            element_count,
            merges,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    #[test]
    fn incremental_gini_matches_the_oracle(sequence in merge_sequence_strategy()) {
        let mut sets = GiniDisjointSets::new(sequence.element_count);
        for &(left, right) in &sequence.merges {
            sets.merge(left, right).expect("representatives come from distinct sets");

            let sizes = collect_sizes(&mut sets);
            let expected = naive_gini(&sizes);
            prop_assert!(
                (sets.gini() - expected).abs() < 1e-9,
                "incremental gini {} diverged from oracle {expected}",
                sets.gini(),
            );
            prop_assert!((0.0..=1.0).contains(&sets.gini()));
            prop_assert_eq!(sets.smallest_size(), sizes.iter().min().copied());
            prop_assert_eq!(sizes.iter().sum::<usize>(), sequence.element_count);
            prop_assert_eq!(sizes.len(), sets.set_count());
        }
    }

    #[test]
    fn roots_never_exceed_their_elements(sequence in merge_sequence_strategy()) {
        let mut sets = GiniDisjointSets::new(sequence.element_count);
        for &(left, right) in &sequence.merges {
            sets.merge(left, right).expect("representatives come from distinct sets");
            for element in 0..sequence.element_count {
                let root = sets.find(element).expect("element is in range");
                prop_assert!(root <= element);
            }
        }
    }

    #[test]
    fn gini_is_zero_exactly_for_equal_sizes(sequence in merge_sequence_strategy()) {
        let mut sets = GiniDisjointSets::new(sequence.element_count);
        for &(left, right) in &sequence.merges {
            sets.merge(left, right).expect("representatives come from distinct sets");
            let sizes = collect_sizes(&mut sets);
            let all_equal = sizes.windows(2).all(|pair| pair[0] == pair[1]);
            prop_assert_eq!(sets.gini() == 0.0, all_equal);
        }
    }
}
