use num_integer::Roots;
use rayon::prelude::*;
use tracing::{instrument, trace};

/// Integer under test for primality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddityCandidate {
    pub value: i64,
}

impl OddityCandidate {
    pub fn new(value: i64) -> Self {
        OddityCandidate { value }
    }

    /// Trial division by every integer in `2..=floor(sqrt(value))`.
    ///
    /// Anything below 2 is not prime. The bound is an exact integer square root, so
    /// the check holds across the whole `i64` range.
    ///
    /// # Example
    /// ```
    /// use micro_algos::primality::OddityCandidate;
    /// assert!(OddityCandidate::new(29).is_prime());
    /// assert!(!OddityCandidate::new(49).is_prime());
    /// ```
    #[instrument(level = "trace")]
    pub fn is_prime(&self) -> bool {
        if self.value < 2 {
            return false;
        }

        let bound = Roots::sqrt(&self.value);
        for i in 2..=bound {
            if self.value % i == 0 {
                trace!(divisor = i, "found divisor");
                return false;
            }
        }

        true
    }

    pub fn report(&self) -> String {
        format!("Is {} something? {}", self.value, self.is_prime())
    }
}

// Checks every candidate in parallel; collect keeps ascending order
pub fn primes_up_to(limit: i64) -> Vec<i64> {
    if limit < 2 {
        return Vec::new();
    }

    (2..=limit)
        .into_par_iter()
        .filter(|&value| OddityCandidate::new(value).is_prime())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive(value: i64) -> bool {
        value >= 2 && (2..value).all(|i| value % i != 0)
    }

    #[test]
    fn below_two_is_not_prime() {
        for value in [i64::MIN, -7, -1, 0, 1] {
            assert!(!OddityCandidate::new(value).is_prime(), "{value}");
        }
    }

    #[test]
    fn two_and_three_are_prime() {
        assert!(OddityCandidate::new(2).is_prime());
        assert!(OddityCandidate::new(3).is_prime());
    }

    #[test]
    fn agrees_with_naive_division_up_to_1000() {
        for value in 0..=1000 {
            assert_eq!(OddityCandidate::new(value).is_prime(), naive(value), "{value}");
        }
    }

    #[test]
    fn large_values() {
        assert!(OddityCandidate::new(1_000_000_007).is_prime());
        assert!(!OddityCandidate::new(999_983 * 999_983).is_prime());
        assert!(!OddityCandidate::new(i64::MAX).is_prime());
    }

    #[test]
    fn primes_below_one_hundred() {
        let primes = primes_up_to(100);
        assert_eq!(primes.len(), 25);
        assert_eq!(primes.first(), Some(&2));
        assert_eq!(primes.last(), Some(&97));
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
        assert!(primes_up_to(1).is_empty());
    }

    #[test]
    fn report_line() {
        assert_eq!(OddityCandidate::new(29).report(), "Is 29 something? true");
    }

    proptest! {
        #[test]
        fn perfect_squares_are_composite(root in 2i64..10_000) {
            prop_assert!(!OddityCandidate::new(root * root).is_prime());
        }
    }
}
