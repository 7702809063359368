use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, instrument};

use crate::error::{non_negative, MicroError};
use crate::math::FibMatrix;

/// Position in the Fibonacci sequence, indexed from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceState {
    pub n: u64,
}

impl SequenceState {
    pub fn new(n: u64) -> Self {
        SequenceState { n }
    }

    /// Returns the n-th Fibonacci number, with F(0) = 0 and F(1) = 1.
    ///
    /// Walks the pair (F(k), F(k+1)) forward exactly `n` times starting from (0, 1).
    /// O(n) additions, two live values.
    ///
    /// # Example
    /// ```
    /// use micro_algos::sequence::SequenceState;
    /// use num_bigint::BigUint;
    /// assert_eq!(SequenceState::new(10).compute(), BigUint::from(55u32));
    /// ```
    #[instrument(level = "debug")]
    pub fn compute(&self) -> BigUint {
        let mut a = BigUint::zero();
        let mut b = BigUint::one();

        for _ in 0..self.n {
            let next = &a + &b;
            a = b;
            b = next;
        }

        debug!(bits = a.bits(), "computed term");
        a
    }

    pub fn report(&self) -> String {
        format!(
            "The {} number in the Fibonacci sequence is: {}",
            ordinal(self.n),
            self.compute()
        )
    }
}

impl TryFrom<i64> for SequenceState {
    type Error = MicroError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        non_negative("n", n).map(SequenceState::new)
    }
}

// F(n) via Q^n, where Q = [[1, 1], [1, 0]]
pub fn term_matrix(n: u64) -> BigUint {
    FibMatrix::step().pow(n).b
}

/// Generates the first `count` Fibonacci numbers, F(0) through F(count - 1).
///
/// # Example
/// ```
/// use micro_algos::sequence;
/// use num_bigint::BigUint;
/// let fib_sequence = sequence::terms(10);
/// assert_eq!(fib_sequence[9], BigUint::from(34u32));
/// ```
pub fn terms(count: usize) -> Vec<BigUint> {
    let mut fib_sequence = Vec::with_capacity(count);
    let mut a = BigUint::zero();
    let mut b = BigUint::one();

    for _ in 0..count {
        let next = &a + &b;
        fib_sequence.push(a);
        a = b;
        b = next;
    }

    fib_sequence
}

pub fn ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
