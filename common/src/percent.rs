//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Creates a new [`Percent`] out of the provided whole number,
    /// saturating at `100`.
    #[expect(clippy::cast_lossless, reason = "`From` is not `const`")]
    #[must_use]
    pub const fn whole(val: u8) -> Self {
        let val = if val > 100 { 100 } else { val };
        Self(Decimal::from_parts(val as u32, 0, 0, false, 0))
    }

    /// Applies this [`Percent`] to the provided `total`, rounding the result
    /// to the nearest integer (midpoints away from zero).
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn of(self, total: usize) -> usize {
        (Decimal::from(total) * self.0 / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_usize()
            .expect("never exceeds `total`")
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Percent;

    #[test]
    fn applies_to_totals() {
        assert_eq!(Percent::whole(5).of(500), 25);
        assert_eq!(Percent::whole(40).of(500), 200);
        assert_eq!(Percent::whole(40).of(0), 0);
        assert_eq!(Percent::whole(100).of(7), 7);
    }

    #[test]
    fn rounds_midpoints_up() {
        // 5% of 10 = 0.5, 5% of 30 = 1.5, 40% of 1 = 0.4.
        assert_eq!(Percent::whole(5).of(10), 1);
        assert_eq!(Percent::whole(5).of(30), 2);
        assert_eq!(Percent::whole(40).of(1), 0);
        assert_eq!(Percent::whole(5).of(9), 0);
    }

    #[test]
    fn saturates_whole_numbers() {
        assert_eq!(Percent::whole(250), Percent::whole(100));
    }

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("40").unwrap(), Percent::whole(40));
        assert!(Percent::from_str("12.5").is_ok());
        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("100.1").is_err());
        assert!(Percent::from_str("abc").is_err());
    }
}
