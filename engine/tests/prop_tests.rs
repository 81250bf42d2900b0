use proptest::prelude::*;
use tally_engine::{isqrt, WeightConfig};

proptest! {
    /// The defining bracket: `isqrt(n)² <= n < (isqrt(n)+1)²`.
    #[test]
    fn isqrt_brackets_the_input(n in any::<u128>()) {
        let root = isqrt(n);
        // root <= u64::MAX, so squaring it cannot overflow.
        prop_assert!(root * root <= n);
        let above = (root + 1).checked_mul(root + 1);
        prop_assert!(above.map_or(true, |sq| sq > n));
    }

    /// isqrt never decreases as its input grows.
    #[test]
    fn isqrt_is_monotonic(a in any::<u128>(), b in any::<u128>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(isqrt(lo) <= isqrt(hi));
    }

    /// sqrt is subadditive — the reason the aggregate roots the summed raw
    /// value once instead of summing per-account roots.
    #[test]
    fn isqrt_is_subadditive(a in 0..=u128::MAX / 2, b in 0..=u128::MAX / 2) {
        prop_assert!(isqrt(a + b) <= isqrt(a) + isqrt(b));
    }

    /// Perfect squares invert exactly.
    #[test]
    fn isqrt_inverts_squares(r in 0u128..=u64::MAX as u128) {
        prop_assert_eq!(isqrt(r * r), r);
    }

    /// Unit weights reduce the weighted sum to a plain sum.
    #[test]
    fn unit_weights_are_plain_sum(
        l in 0u128..1 << 100,
        s in 0u128..1 << 100,
        d in 0u128..1 << 100,
    ) {
        let weights = WeightConfig::new(1, 1, 1);
        prop_assert_eq!(weights.weighted_sum(l, s, d), Some(l + s + d));
    }

    /// A zero weight makes its category irrelevant.
    #[test]
    fn zero_weight_ignores_category(
        l in 0u128..1 << 80,
        s in 0u128..1 << 80,
        d1 in 0u128..1 << 80,
        d2 in 0u128..1 << 80,
        wl in 0u128..1 << 20,
        ws in 0u128..1 << 20,
    ) {
        let weights = WeightConfig::new(wl, ws, 0);
        prop_assert_eq!(
            weights.weighted_sum(l, s, d1),
            weights.weighted_sum(l, s, d2)
        );
    }
}
