//! # reckon-num
//!
//! Arbitrary precision, generic-radix number arithmetic.
//!
//! A [`Number<R>`] stores a signed magnitude as base-`R` digits
//! (least-significant first) together with a decimal-point-style exponent,
//! so addition and multiplication stay exact at any magnitude. The radix is
//! a const generic parameter: operands of different radices are different
//! types, and mixing them is rejected at compile time.
//!
//! This crate is the numeric substrate for a rational/expression evaluator.
//! It deliberately stops at addition and multiplication; division, modular
//! arithmetic, and elementary functions are layered elsewhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod add;
mod multiply;

pub mod error;
pub mod number;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::NumberError;
pub use number::Number;
pub use rational::Rational;
