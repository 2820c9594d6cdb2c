//! error.rs
//!
//! Error taxonomy for the crate. Every computation here is a deterministic
//! pure function, so no error is transient and nothing is ever retried: a
//! failure is either a caller mistake (a format argument the renderer does
//! not understand), a defect in the calendar tables themselves, or a call
//! into a part of the contract that is deliberately not implemented.

use thiserror::Error;

/// Errors surfaced by the conversion and formatting entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The format argument passed to the formatter was neither absent nor a
    /// template string.
    #[error("{0} is not a valid date format")]
    InvalidFormat(String),

    /// An internal invariant of the correlation search was violated. This
    /// indicates a defect in the length tables or the search itself and is
    /// fatal; it is never guessed around.
    #[error("internal calendar inconsistency: {0}")]
    Inconsistency(&'static str),

    /// The requested operation is part of the exposed contract but has no
    /// implementation. Calling it fails loudly rather than returning a
    /// wrong or partial result.
    #[error("not implemented: {0}")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidFormat("42".to_string()).to_string(),
            "42 is not a valid date format"
        );
        assert_eq!(
            Error::Unsupported("reading a lunar date").to_string(),
            "not implemented: reading a lunar date"
        );
        assert!(Error::Inconsistency("cursor overflow")
            .to_string()
            .starts_with("internal calendar inconsistency"));
    }
}
