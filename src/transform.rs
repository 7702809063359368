use std::fmt;

use rayon::prelude::*;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerBatch {
    pub data: Vec<i64>,
}

impl IntegerBatch {
    pub fn new(data: Vec<i64>) -> Self {
        IntegerBatch { data }
    }

    /// Applies the index-parity rule to every element, returning a new sequence of the
    /// same length. Even positions get `v + 2`. Odd positions compute `t = v - 1` and
    /// yield `t / 3` when 3 divides `t`, `t * 2` otherwise.
    ///
    /// Arithmetic wraps at the ends of the `i64` range, the same in every build profile.
    ///
    /// # Example
    /// ```
    /// use micro_algos::transform::IntegerBatch;
    /// let batch = IntegerBatch::new(vec![1, 2, 3, 4]);
    /// assert_eq!(batch.transform(), vec![3, 2, 5, 1]);
    /// ```
    #[instrument(level = "debug", skip(self), fields(len = self.data.len()))]
    pub fn transform(&self) -> Vec<i64> {
        let result: Vec<i64> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| transform_element(i, v))
            .collect();
        debug!("transformed batch");
        result
    }

    // Same output as `transform`; indexed so positions keep their parity
    pub fn transform_par(&self) -> Vec<i64> {
        self.data
            .par_iter()
            .enumerate()
            .map(|(i, &v)| transform_element(i, v))
            .collect()
    }

    pub fn report(&self) -> String {
        format!(
            "original: {}; transformed: {}",
            self,
            format_sequence(&self.transform())
        )
    }
}

pub fn transform_element(index: usize, value: i64) -> i64 {
    if index % 2 == 0 {
        return value.wrapping_add(2);
    }

    let t = value.wrapping_sub(1);
    if t % 3 == 0 {
        t / 3
    } else {
        t.wrapping_mul(2)
    }
}

pub fn format_sequence(values: &[i64]) -> String {
    IntegerBatch::new(values.to_vec()).to_string()
}

impl fmt::Display for IntegerBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
