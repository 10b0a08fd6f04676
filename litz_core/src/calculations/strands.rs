//! # Strand Validation
//!
//! Decides whether a strand count can be bundled at a gauge, and how.
//!
//! A litz bundle is built in operations. The final operation twists a few
//! sub-bundles together; each sub-bundle is itself the product of an
//! earlier operation, down to a first operation that bunches individual
//! strands. A machine can only take [`max_strands_single_op`] strands of a
//! given gauge in one operation, so a large count must divide evenly into
//! groups until a group is small enough:
//!
//! ```text
//! 1000 strands, AWG 36 (max 66 per operation)
//!   1000 ÷ 5 = 200 ÷ 5 = 40 ≤ 66
//!   breakdown: 1000 → 200 → 40, three operations
//! ```
//!
//! Divisors are tried in the fixed order 5, 3, 4; the first one that
//! divides evenly wins.
//!
//! ## Special Rule
//!
//! Coarse gauges (AWG 12-22) with 3-8 strands are always buildable, even
//! though their single-operation limit is tiny.
//!
//! ## Example
//!
//! ```rust
//! use litz_core::calculations::strands::validate_strand_count;
//!
//! let result = validate_strand_count(200, 36);
//! assert!(result.is_valid);
//! assert_eq!(result.breakdown, vec![200, 40]);
//!
//! let result = validate_strand_count(67, 36);
//! assert!(!result.is_valid);
//! assert!(!result.nearby_valid.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::tables::{max_strands_single_op, MAX_OPERATIONS};

/// Fewest strands a litz construction can have
pub const MIN_STRANDS: u32 = 3;

/// Upper strand count of the coarse-gauge special rule
const SPECIAL_RULE_MAX_STRANDS: u32 = 8;

/// Gauges the special rule applies to
const SPECIAL_RULE_AWG: std::ops::RangeInclusive<u32> = 12..=22;

/// Group sizes tried at each level, in priority order
const DIVISORS: [u32; 3] = [5, 3, 4];

/// The nearby search window is at least 1/20th (5%) of the target
const NEARBY_WINDOW_DIVISOR: u32 = 20;

/// Smallest half-width of the nearby search window
const NEARBY_MIN_WINDOW: u32 = 50;

/// Half-width of the fill-in pass over non-multiples of 5
const NEARBY_FILL_WINDOW: u32 = 25;

/// Suggestions returned at most
const MAX_NEARBY: usize = 8;

/// Outcome of validating a strand count at a gauge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandValidationResult {
    pub is_valid: bool,

    /// Strand count at each bundling level. The first entry is the request,
    /// the last is the group size of the first operation.
    pub breakdown: Vec<u32>,

    /// Buildable counts near the request, closest first
    pub nearby_valid: Vec<u32>,

    /// Human-readable diagnostic
    pub message: String,
}

fn special_rule_applies(strand_count: u32, wire_awg: u32) -> bool {
    SPECIAL_RULE_AWG.contains(&wire_awg)
        && (MIN_STRANDS..=SPECIAL_RULE_MAX_STRANDS).contains(&strand_count)
}

/// Divide by the first divisor that goes in evenly.
fn divide_once(count: u32) -> Option<u32> {
    DIVISORS.iter().find(|&&d| count % d == 0).map(|&d| count / d)
}

/// Validate a strand count and build its hierarchical breakdown.
///
/// Never fails: an unbuildable count comes back with `is_valid = false`,
/// the partial breakdown reached before division got stuck, and nearby
/// alternatives.
pub fn validate_strand_count(strand_count: u32, wire_awg: u32) -> StrandValidationResult {
    if strand_count < MIN_STRANDS {
        return StrandValidationResult {
            is_valid: false,
            breakdown: Vec::new(),
            nearby_valid: Vec::new(),
            message: format!(
                "Minimum {} strands required for Litz wire construction",
                MIN_STRANDS
            ),
        };
    }

    if special_rule_applies(strand_count, wire_awg) {
        return StrandValidationResult {
            is_valid: true,
            breakdown: vec![strand_count],
            nearby_valid: vec![strand_count],
            message: format!(
                "Valid: {} strands for AWG {} (special rule for 3-8 strands)",
                strand_count, wire_awg
            ),
        };
    }

    let max_strands = max_strands_single_op(wire_awg);
    let mut breakdown = vec![strand_count];
    let mut current = strand_count;

    while current > max_strands {
        match divide_once(current) {
            Some(next) => {
                current = next;
                breakdown.push(current);
            }
            None => {
                return StrandValidationResult {
                    is_valid: false,
                    breakdown,
                    nearby_valid: find_nearby_valid_counts(strand_count, wire_awg),
                    message: format!(
                        "This strand count isn't manufacturable with AWG {} wire.",
                        wire_awg
                    ),
                };
            }
        }
    }

    let operations = calculate_operations(strand_count, wire_awg);
    let message = if operations == 1 {
        format!(
            "Valid: {} strands (1 operation, ≤{} strands allowed for AWG {})",
            strand_count, max_strands, wire_awg
        )
    } else {
        let levels: Vec<String> = breakdown.iter().map(|n| n.to_string()).collect();
        format!(
            "Valid: {} strands requires {} operations: {} strands (final manufacturing operation uses {} strands)",
            strand_count,
            operations,
            levels.join("→"),
            current
        )
    };

    StrandValidationResult {
        is_valid: true,
        breakdown,
        nearby_valid: find_nearby_valid_counts(strand_count, wire_awg),
        message,
    }
}

/// Number of bundling operations for a strand count, at most [`MAX_OPERATIONS`].
///
/// Walks the same divide-by-5/3/4 ladder as [`validate_strand_count`] but
/// stops counting at the operations ceiling. When division gets stuck the
/// last level reached is returned; callers only use this for counts the
/// validator accepted.
pub fn calculate_operations(strand_count: u32, wire_awg: u32) -> u32 {
    let max_strands = max_strands_single_op(wire_awg);
    let mut current = strand_count;
    let mut level = 1;

    while current > max_strands && level < MAX_OPERATIONS {
        match divide_once(current) {
            Some(next) => {
                current = next;
                level += 1;
            }
            None => break,
        }
    }
    level
}

/// Reduced check used by the nearby search: no messages, no breakdown,
/// and the final group must hold at least [`MIN_STRANDS`].
fn is_buildable(strand_count: u32, wire_awg: u32, max_strands: u32) -> bool {
    if special_rule_applies(strand_count, wire_awg) {
        return true;
    }

    let mut current = strand_count;
    while current > max_strands {
        match divide_once(current) {
            Some(next) => current = next,
            None => break,
        }
    }
    current <= max_strands && current >= MIN_STRANDS
}

/// Buildable strand counts near `target`, closest first, at most eight.
///
/// Multiples of 5 are scanned across a window of ±max(50, 5% of target);
/// other counts only within ±25. Ties in distance keep scan order, so
/// multiples of 5 come before their neighbors and lower counts before
/// higher ones.
pub fn find_nearby_valid_counts(target: u32, wire_awg: u32) -> Vec<u32> {
    let max_strands = max_strands_single_op(wire_awg);
    let window = NEARBY_MIN_WINDOW.max(target / NEARBY_WINDOW_DIVISOR);
    let low = target.saturating_sub(window).max(MIN_STRANDS);
    let high = target.saturating_add(window);

    let mut found: Vec<u32> = ((low / 5) * 5..=high)
        .step_by(5)
        .filter(|&n| n >= MIN_STRANDS && is_buildable(n, wire_awg, max_strands))
        .collect();

    let fill = NEARBY_FILL_WINDOW.min(window);
    let fill_low = target.saturating_sub(fill).max(MIN_STRANDS);
    for n in fill_low..=target.saturating_add(fill) {
        if n % 5 != 0 && is_buildable(n, wire_awg, max_strands) && !found.contains(&n) {
            found.push(n);
        }
    }

    found.sort_by_key(|&n| n.abs_diff(target));
    found.truncate(MAX_NEARBY);
    trace!(target, wire_awg, ?found, "nearby strand counts");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_operations() {
        let result = validate_strand_count(200, 36);
        assert!(result.is_valid);
        assert_eq!(result.breakdown, vec![200, 40]);
        assert_eq!(calculate_operations(200, 36), 2);
        assert_eq!(
            result.message,
            "Valid: 200 strands requires 2 operations: 200→40 strands (final manufacturing operation uses 40 strands)"
        );

        let result = validate_strand_count(150, 30);
        assert!(result.is_valid);
        assert_eq!(calculate_operations(150, 30), 2);
    }

    #[test]
    fn test_three_operations_suggests_itself() {
        let result = validate_strand_count(1000, 36);
        assert!(result.is_valid);
        assert_eq!(result.breakdown, vec![1000, 200, 40]);
        assert_eq!(calculate_operations(1000, 36), 3);
        assert_eq!(result.nearby_valid.first(), Some(&1000));
    }

    #[test]
    fn test_operations_ceiling() {
        // 10000 → 2000 → 400 → 80 → 16
        assert_eq!(calculate_operations(10000, 36), 5);
        // 50000 needs six levels; operations stop at five
        let result = validate_strand_count(50000, 36);
        assert!(result.is_valid);
        assert_eq!(result.breakdown.len(), 6);
        assert_eq!(calculate_operations(50000, 36), MAX_OPERATIONS);
    }

    #[test]
    fn test_not_divisible() {
        let result = validate_strand_count(67, 36);
        assert!(!result.is_valid);
        assert_eq!(result.breakdown, vec![67]);
        assert_eq!(
            result.message,
            "This strand count isn't manufacturable with AWG 36 wire."
        );
        assert!(!result.nearby_valid.is_empty());
        assert!(result.nearby_valid.len() <= 8);
        assert!(result.nearby_valid.iter().all(|&n| validate_strand_count(n, 36).is_valid));
    }

    #[test]
    fn test_special_rule() {
        let result = validate_strand_count(5, 18);
        assert!(result.is_valid);
        assert_eq!(result.breakdown, vec![5]);
        assert_eq!(result.nearby_valid, vec![5]);
        assert_eq!(
            result.message,
            "Valid: 5 strands for AWG 18 (special rule for 3-8 strands)"
        );

        // 7 is prime, only the special rule makes it buildable at AWG 12
        assert!(validate_strand_count(7, 12).is_valid);
        // Outside the special gauges the divisibility ladder applies
        assert!(!validate_strand_count(7, 10).is_valid);
    }

    #[test]
    fn test_single_operation() {
        let result = validate_strand_count(3, 36);
        assert!(result.is_valid);
        assert_eq!(result.breakdown, vec![3]);
        assert_eq!(
            result.message,
            "Valid: 3 strands (1 operation, ≤66 strands allowed for AWG 36)"
        );

        assert_eq!(calculate_operations(50, 50), 2);
        assert!(validate_strand_count(50, 50).is_valid);
    }

    #[test]
    fn test_gauge_without_single_op_capacity() {
        // AWG 7 has no single-operation row; every division must get to 0
        let result = validate_strand_count(100, 7);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_minimum_strands() {
        for n in [0, 1, 2] {
            let result = validate_strand_count(n, 36);
            assert!(!result.is_valid);
            assert!(result.breakdown.is_empty());
            assert!(result.nearby_valid.is_empty());
            assert_eq!(result.message, "Minimum 3 strands required for Litz wire construction");
        }
    }

    #[test]
    fn test_nearby_exact_order() {
        assert_eq!(
            find_nearby_valid_counts(67, 36),
            vec![66, 68, 65, 69, 70, 64, 63, 62]
        );
        // Window widens to ±100 at 2000
        assert_eq!(
            find_nearby_valid_counts(2000, 36),
            vec![2000, 1984, 2016, 1980, 2025, 2040, 1950, 1935]
        );
        assert_eq!(
            find_nearby_valid_counts(200, 36),
            vec![200, 198, 196, 204, 195, 205, 207, 192]
        );
        // Clamped at the minimum strand count; only the special rule builds at AWG 12
        assert_eq!(find_nearby_valid_counts(7, 12), vec![7, 6, 8, 5, 4, 3]);
    }

    #[test]
    fn test_nearby_sorted_by_distance() {
        let nearby = find_nearby_valid_counts(2000, 36);
        assert_eq!(nearby.first(), Some(&2000));
        let distances: Vec<u32> = nearby.iter().map(|n| n.abs_diff(2000)).collect();
        let mut sorted = distances.clone();
        sorted.sort();
        assert_eq!(distances, sorted);
    }
}
