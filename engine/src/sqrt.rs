//! Integer square root.

/// Largest `r` such that `r * r <= n`.
///
/// Newton descent from `2^ceil(bits/2)`, which bounds the root from above
/// for any `n` with `bits` significant bits. The iteration only divides and
/// averages — nothing is ever squared — so no intermediate value can
/// overflow for any `u128` input.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << bits.div_ceil(2);
    loop {
        let next = (x + n / x) >> 1;
        if next >= x {
            return x;
        }
        x = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(9), 3);
    }

    #[test]
    fn test_known_roots() {
        assert_eq!(isqrt(50_000), 223);
        assert_eq!(isqrt(70_000), 264);
        assert_eq!(isqrt(100_000), 316);
        assert_eq!(isqrt(10_030_000), 3167);
    }

    #[test]
    fn test_perfect_squares_and_neighbors() {
        for r in [1u128, 7, 100, 65_535, 1 << 40] {
            let square = r * r;
            assert_eq!(isqrt(square), r);
            assert_eq!(isqrt(square - 1), r - 1);
            assert_eq!(isqrt(square + 1), r);
        }
    }

    #[test]
    fn test_largest_input() {
        let root = isqrt(u128::MAX);
        assert_eq!(root, u64::MAX as u128);
        assert!(root * root <= u128::MAX);
    }
}
