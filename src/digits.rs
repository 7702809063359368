use tracing::instrument;

use crate::error::{non_negative, MicroError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitHolder {
    pub number: u64,
}

impl DigitHolder {
    pub fn new(number: u64) -> Self {
        DigitHolder { number }
    }

    /// Sum of the decimal digits, one recursive call per digit.
    ///
    /// # Example
    /// ```
    /// use micro_algos::digits::DigitHolder;
    /// assert_eq!(DigitHolder::new(12345).digit_sum(), 15);
    /// ```
    #[instrument(level = "debug")]
    pub fn digit_sum(&self) -> u64 {
        sum_from(self.number)
    }

    pub fn report(&self) -> String {
        format!("The sum of digits is: {}", self.digit_sum())
    }
}

impl TryFrom<i64> for DigitHolder {
    type Error = MicroError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        non_negative("number", number).map(DigitHolder::new)
    }
}

// At most 20 frames for u64
fn sum_from(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    n % 10 + sum_from(n / 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_sums() {
        assert_eq!(DigitHolder::new(0).digit_sum(), 0);
        assert_eq!(DigitHolder::new(7).digit_sum(), 7);
        assert_eq!(DigitHolder::new(999).digit_sum(), 27);
        assert_eq!(DigitHolder::new(1000).digit_sum(), 1);
        assert_eq!(DigitHolder::new(u64::MAX).digit_sum(), 87);
    }

    #[test]
    fn negative_number_is_rejected() {
        assert_eq!(
            DigitHolder::try_from(-12_i64),
            Err(MicroError::NegativeInput {
                what: "number",
                value: -12
            })
        );
        assert_eq!(DigitHolder::try_from(12_i64), Ok(DigitHolder::new(12)));
    }

    #[test]
    fn report_line() {
        assert_eq!(DigitHolder::new(12345).report(), "The sum of digits is: 15");
    }

    proptest! {
        #[test]
        fn splits_on_last_digit(n in 1u64..=u64::MAX) {
            let whole = DigitHolder::new(n).digit_sum();
            let parts = DigitHolder::new(n % 10).digit_sum() + DigitHolder::new(n / 10).digit_sum();
            prop_assert_eq!(whole, parts);
        }

        #[test]
        fn matches_decimal_string(n in any::<u64>()) {
            let expected: u64 = n
                .to_string()
                .chars()
                .map(|c| u64::from(c.to_digit(10).unwrap()))
                .sum();
            prop_assert_eq!(DigitHolder::new(n).digit_sum(), expected);
        }
    }
}
