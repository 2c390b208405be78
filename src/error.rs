//! The error taxonomy.

use thiserror::Error as ThisError;

/// Everything that can go wrong constructing or operating on a [`crate::Decimal`].
///
/// Every variant carries a human-readable description suitable for
/// display straight to a user or a log line.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The parser was given text that does not match the decimal literal
    /// grammar.
    #[error("invalid decimal syntax: {0}")]
    ConversionSyntax(String),

    /// An arithmetic operation's result cannot fit the 96-bit coefficient
    /// / scale-0..28 envelope.
    #[error("decimal overflow: {0}")]
    Overflow(String),

    /// Division with a zero divisor and a nonzero dividend.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// An operation was given arguments for which it has no defined
    /// result: `0 / 0`, `sqrt` of a negative value, `round(x, n)` with `n`
    /// outside `[0, 28]`, or a components constructor with an invalid
    /// scale or nonzero reserved bits.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A wide-integer invariant was violated: a bug in this crate rather
    /// than a consequence of the caller's input.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::error!("decimal128 internal invariant violated: {msg}");
        Error::Internal(msg)
    }
}

/// Convenience alias used throughout the crate's fallible APIs.
pub type Result<T> = core::result::Result<T, Error>;
