use num_bigint::BigUint;
use num_traits::{One, Zero};

// Symmetric 2x2 matrix [[a, b], [b, d]]; every power of [[1, 1], [1, 0]] has this shape
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FibMatrix {
    pub a: BigUint,
    pub b: BigUint,
    pub d: BigUint,
}

impl FibMatrix {
    pub fn identity() -> Self {
        FibMatrix {
            a: BigUint::one(),
            b: BigUint::zero(),
            d: BigUint::one(),
        }
    }

    // Q = [[1, 1], [1, 0]]
    pub fn step() -> Self {
        FibMatrix {
            a: BigUint::one(),
            b: BigUint::one(),
            d: BigUint::zero(),
        }
    }

    // Product of two powers of Q, which commute, so the result stays symmetric
    pub fn product(&self, other: &FibMatrix) -> FibMatrix {
        FibMatrix {
            a: &self.a * &other.a + &self.b * &other.b,
            b: &self.a * &other.b + &self.b * &other.d,
            d: &self.b * &other.b + &self.d * &other.d,
        }
    }

    // Exponentiation by squaring (O(log n))
    pub fn pow(&self, mut exp: u64) -> FibMatrix {
        let mut result = FibMatrix::identity();
        let mut base = self.clone();

        while exp > 0 {
            if exp % 2 == 1 {
                result = result.product(&base);
            }
            base = base.product(&base);
            exp /= 2;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_zero_is_identity() {
        assert_eq!(FibMatrix::step().pow(0), FibMatrix::identity());
    }

    #[test]
    fn q_to_the_n_holds_adjacent_terms() {
        // Q^n = [[F(n+1), F(n)], [F(n), F(n-1)]]
        let m = FibMatrix::step().pow(10);
        assert_eq!(m.a, BigUint::from(89u32));
        assert_eq!(m.b, BigUint::from(55u32));
        assert_eq!(m.d, BigUint::from(34u32));
    }
}
