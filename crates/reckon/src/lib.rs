//! # Reckon
//!
//! Exact, radix-generic arithmetic for calculator-style evaluators.
//!
//! The numeric substrate lives in [`reckon_num`]: a digit-sequence
//! [`Number<R>`](reckon_num::Number) with exact addition and
//! multiplication in any radix `R >= 2`, plus the thin
//! [`Rational`](reckon_num::Rational) pairing built on top of them.
//!
//! ## Quick start
//!
//! ```
//! use reckon::prelude::*;
//!
//! let a = Number::<10>::from_integer(12_345_678)?;
//! let b = Number::<10>::from_integer(-87_654_321)?;
//! assert_eq!((&a * &b).to_integer::<i64>()?, -1_082_152_022_374_638);
//! # Ok::<(), NumberError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use reckon_num as num;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use reckon_num::{Number, NumberError, Rational};
}
