//! Currency rounding.
//!
//! Monetary amounts are carried at full `f64` precision through every
//! computation; rounding to two decimals happens once, at the display/handoff
//! boundary. Rounding earlier accumulates error across many line items.

/// Round a monetary amount to two decimal places, half-up.
///
/// `f64::round` rounds halves away from zero, which is half-up for the
/// non-negative amounts this domain deals in (and the commercial convention
/// for the signed ones).
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_at_two_decimals() {
        assert_eq!(round_half_up(1.005_000_1), 1.01);
        assert_eq!(round_half_up(1.004), 1.0);
        assert_eq!(round_half_up(2.675_000_1), 2.68);
        assert_eq!(round_half_up(180.0), 180.0);
    }

    #[test]
    fn zero_and_negatives() {
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(-1.005_000_1), -1.01);
    }
}
