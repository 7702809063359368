//! # Micro Algorithms
//!
//! Five small, independent computations, each paired with a one-line report and a
//! standalone binary that prints it. None of the modules depend on one another.
//!
//! ## Overview of Modules
//!
//! #### `sequence`
//! The n-th Fibonacci number by iterative pair update, with arbitrary precision. Also
//! provides `term_matrix`, an O(log n) matrix-power version built on `math`, and
//! `terms` for the leading part of the sequence.
//!
//! #### `primality`
//! Trial division up to the exact integer square root. `primes_up_to` checks a whole
//! range in parallel with Rayon.
//!
//! #### `reverser`
//! Reverses text by `char` with a two-pointer swap, or by grapheme cluster.
//!
//! #### `digits`
//! Recursive decimal digit sum of a non-negative integer.
//!
//! #### `transform`
//! Index-parity rule applied to each element of an integer batch, sequentially or in
//! parallel.
//!
//! ### Errors
//! - `MicroError`: returned by the signed constructors (`TryFrom<i64>`) of
//!   `SequenceState` and `DigitHolder` when handed a negative value.
//!
//! ## Usage Example
//! ```rust
//! use micro_algos::digits::DigitHolder;
//! use micro_algos::sequence::SequenceState;
//! use num_bigint::BigUint;
//!
//! let state = SequenceState::try_from(100_i64).unwrap();
//! assert_eq!(state.compute(), BigUint::parse_bytes(b"354224848179261915075", 10).unwrap());
//! assert!(DigitHolder::try_from(-5_i64).is_err());
//! ```

pub mod digits;
pub mod error;
pub mod math;
pub mod primality;
pub mod reverser;
pub mod sequence;
pub mod telemetry;
pub mod transform;

pub use error::MicroError;
