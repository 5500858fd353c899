//! Error types for conversions between numbers and native integers.
//!
//! All variants are deterministic and non-retryable: this crate performs no
//! I/O and has no transient failure mode. Radix mismatches have no variant
//! here because the radix is part of the type and a mismatch does not
//! compile.

use thiserror::Error;

/// Errors produced when converting between [`Number`](crate::Number) and
/// native integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The source value's magnitude cannot be taken: negating the minimum
    /// representable value of a signed type overflows that type.
    #[error("operand magnitude is not representable in the source type")]
    InvalidOperand,

    /// A negative number was extracted into an unsigned destination type.
    #[error("negative value does not fit an unsigned destination type")]
    SignMismatch,

    /// The number's value exceeds the destination type's range.
    #[error("value exceeds the destination type's range")]
    Overflow,
}
