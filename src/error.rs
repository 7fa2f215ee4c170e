//! Errors raised by a running program and by dialect lookup

use thiserror::Error;

/// Unicode limit for the `Output` operator (exclusive)
pub const UNICODE_MAX: i64 = 0x10ffff;

/// A failure in the logic of the executed program.
///
/// These are caught once by the fetch-execute loop, reported and halt the
/// run. Any other error reaching the loop is an interpreter fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("tape pointer out of range ({pointer} > {last})")]
    PointerTooHigh { pointer: usize, last: usize },

    #[error("tape pointer out of range (-1 < 0)")]
    PointerTooLow,

    #[error("value is greater than maximum ({value} > {maximum})")]
    ValueTooHigh { value: i64, maximum: i64 },

    #[error("value is less than minimum ({value} < {minimum})")]
    ValueTooLow { value: i64, minimum: i64 },

    #[error("value is out of range of unicode ({value} <> [0:{}])", UNICODE_MAX)]
    OutOfUnicodeRange { value: i64 },

    #[error("unexpected end of loop")]
    UnmatchedLoopClose,

    #[error("no previous operator found")]
    NoPreviousOperator,
}

/// Dialect registry lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    #[error("unknown dialect '{0}'")]
    UnknownDialect(String),
}
