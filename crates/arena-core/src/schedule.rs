//! Round-robin schedule construction
//!
//! Every unordered pair of roster slots meets exactly once, and every slot
//! also meets itself. Pairs are produced in slot-major order:
//! `(0,0), (0,1), .., (0,n-1), (1,1), ..`.

use crate::strategy::StrategyId;

/// Stable partition: every entry equal to `lead` first, then the rest in
/// their original order.
///
/// Only changes the order matches are played in. Payoffs are unaffected.
pub fn lead_first(roster: &[StrategyId], lead: StrategyId) -> Vec<StrategyId> {
    let (mut ordered, rest): (Vec<_>, Vec<_>) = roster.iter().copied().partition(|s| *s == lead);
    ordered.extend(rest);
    ordered
}

/// Total number of matches for `n` roster slots, self-pairs included.
pub fn match_count(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Every `(i, j)` with `i <= j < n`, slot-major.
pub fn round_robin_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n).flat_map(|i| (i..n).map(move |j| (i, j))).collect()
}

/// Get the pairing for a specific match index without building the schedule.
pub fn pairing_for_match(n: usize, match_index: usize) -> Option<(usize, usize)> {
    if match_index >= match_count(n) {
        return None;
    }

    // Row i holds the n - i pairs (i, i..n)
    let mut remaining = match_index;
    for i in 0..n {
        let row = n - i;
        if remaining < row {
            return Some((i, i + remaining));
        }
        remaining -= row;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use StrategyId::*;

    #[test]
    fn test_lead_first_moves_tft_to_front() {
        let roster = [AlwaysDefect, Random, TitForTat, AlwaysCooperate];
        assert_eq!(
            lead_first(&roster, TitForTat),
            vec![TitForTat, AlwaysDefect, Random, AlwaysCooperate]
        );
    }

    #[test]
    fn test_lead_first_without_lead() {
        let roster = [Random, AlwaysCooperate];
        assert_eq!(lead_first(&roster, TitForTat), roster.to_vec());
    }

    #[test]
    fn test_lead_first_keeps_duplicates() {
        let roster = [Random, TitForTat, Random, TitForTat];
        assert_eq!(
            lead_first(&roster, TitForTat),
            vec![TitForTat, TitForTat, Random, Random]
        );
    }

    #[test]
    fn test_empty_schedule() {
        assert!(round_robin_pairs(0).is_empty());
        assert_eq!(match_count(0), 0);
        assert_eq!(pairing_for_match(0, 0), None);
    }

    #[test]
    fn test_single_slot_plays_itself() {
        assert_eq!(round_robin_pairs(1), vec![(0, 0)]);
    }

    #[test]
    fn test_order() {
        assert_eq!(
            round_robin_pairs(3),
            vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_completeness() {
        for n in 0..=12 {
            let pairs = round_robin_pairs(n);
            assert_eq!(pairs.len(), match_count(n), "n={}", n);

            let unique: HashSet<_> = pairs.iter().copied().collect();
            assert_eq!(unique.len(), pairs.len(), "duplicate pair at n={}", n);

            for i in 0..n {
                for j in 0..n {
                    let key = if i <= j { (i, j) } else { (j, i) };
                    assert!(unique.contains(&key), "missing {:?} at n={}", key, n);
                }
            }
        }
    }

    #[test]
    fn test_pairing_for_match_agrees() {
        for n in 0..=10 {
            let pairs = round_robin_pairs(n);
            for (index, expected) in pairs.iter().enumerate() {
                assert_eq!(pairing_for_match(n, index), Some(*expected), "n={}", n);
            }
            assert_eq!(pairing_for_match(n, pairs.len()), None);
        }
    }
}
