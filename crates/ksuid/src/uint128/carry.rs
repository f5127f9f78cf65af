//! 64-bit add-with-carry and subtract-with-borrow primitives.
//!
//! The carry (or borrow) bit is always `0` or `1`, both in and out. Passing
//! anything else is a logic error and is caught by a debug assertion.

/// Returns `x + y + carry` modulo 2^64 together with the outgoing carry bit.
///
/// The carry-out is `1` iff the true sum is at least 2^64.
///
/// # Example
///
/// ```
/// use ksuid::add_with_carry;
///
/// assert_eq!(add_with_carry(u64::MAX, 0, 1), (0, 1));
/// assert_eq!(add_with_carry(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
/// assert_eq!(add_with_carry(40, 1, 1), (42, 0));
/// ```
#[inline]
#[must_use]
pub const fn add_with_carry(x: u64, y: u64, carry: u64) -> (u64, u64) {
    debug_assert!(carry <= 1, "carry must be 0 or 1");
    let (sum, c1) = x.overflowing_add(y);
    let (sum, c2) = sum.overflowing_add(carry);
    (sum, (c1 | c2) as u64)
}

/// Returns `x - y - borrow` modulo 2^64 together with the outgoing borrow bit.
///
/// The borrow-out is `1` iff `x < y + borrow` over the integers.
///
/// # Example
///
/// ```
/// use ksuid::sub_with_borrow;
///
/// assert_eq!(sub_with_borrow(0, 0, 1), (u64::MAX, 1));
/// assert_eq!(sub_with_borrow(0, u64::MAX, 1), (0, 1));
/// assert_eq!(sub_with_borrow(44, 1, 1), (42, 0));
/// ```
#[inline]
#[must_use]
pub const fn sub_with_borrow(x: u64, y: u64, borrow: u64) -> (u64, u64) {
    debug_assert!(borrow <= 1, "borrow must be 0 or 1");
    let (diff, b1) = x.overflowing_sub(y);
    let (diff, b2) = diff.overflowing_sub(borrow);
    (diff, (b1 | b2) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carries_out_on_word_overflow() {
        assert_eq!(add_with_carry(u64::MAX, 1, 0), (0, 1));
        assert_eq!(add_with_carry(1, u64::MAX, 0), (0, 1));
        assert_eq!(add_with_carry(u64::MAX, u64::MAX, 0), (u64::MAX - 1, 1));
    }

    #[test]
    fn add_carries_out_when_incoming_carry_saturates() {
        // `sum < x || sum < y` misses this one: the wrapped sum equals both
        // operands.
        assert_eq!(add_with_carry(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(add_with_carry(0, u64::MAX, 1), (0, 1));
        assert_eq!(add_with_carry(u64::MAX, 0, 1), (0, 1));
    }

    #[test]
    fn add_without_overflow_has_no_carry() {
        assert_eq!(add_with_carry(0, 0, 0), (0, 0));
        assert_eq!(add_with_carry(0, 0, 1), (1, 0));
        assert_eq!(add_with_carry(u64::MAX - 1, 0, 1), (u64::MAX, 0));
        assert_eq!(add_with_carry(1 << 63, (1 << 63) - 1, 0), (u64::MAX, 0));
    }

    #[test]
    fn sub_borrows_on_underflow() {
        assert_eq!(sub_with_borrow(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sub_with_borrow(0, 0, 1), (u64::MAX, 1));
        assert_eq!(sub_with_borrow(5, 5, 1), (u64::MAX, 1));
        assert_eq!(sub_with_borrow(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
    }

    #[test]
    fn sub_without_underflow_has_no_borrow() {
        assert_eq!(sub_with_borrow(0, 0, 0), (0, 0));
        assert_eq!(sub_with_borrow(5, 4, 1), (0, 0));
        assert_eq!(sub_with_borrow(u64::MAX, u64::MAX, 0), (0, 0));
        assert_eq!(sub_with_borrow(u64::MAX, 0, 1), (u64::MAX - 1, 0));
    }

    #[test]
    fn carry_matches_wide_arithmetic() {
        let samples = [0, 1, 2, 0x7FFF_FFFF_FFFF_FFFF, 1 << 63, u64::MAX - 1, u64::MAX];
        for &x in &samples {
            for &y in &samples {
                for c in 0..=1_u64 {
                    let wide = u128::from(x) + u128::from(y) + u128::from(c);
                    let (sum, carry) = add_with_carry(x, y, c);
                    assert_eq!(sum, wide as u64, "{x} + {y} + {c}");
                    assert_eq!(carry, (wide >> 64) as u64, "{x} + {y} + {c}");

                    let (diff, borrow) = sub_with_borrow(x, y, c);
                    let expected_borrow = u128::from(x) < u128::from(y) + u128::from(c);
                    assert_eq!(diff, x.wrapping_sub(y).wrapping_sub(c), "{x} - {y} - {c}");
                    assert_eq!(borrow, u64::from(expected_borrow), "{x} - {y} - {c}");
                }
            }
        }
    }
}
