//! Error codes for all synthesis diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`). Errors abort the
//! request; warnings never do.

use std::fmt;

/// Error codes for all synthesis diagnostics.
///
/// Format:
/// - E1xxx: Request errors (synthesis aborted, nothing generated)
/// - W2xxx: Advisory warnings (synthesis proceeds with a documented fallback)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Request Errors (E1xxx)
    /// Target is an interface, annotation or enum
    E1001,
    /// Superclass call requested on a directly rooted type
    E1002,

    // Advisory Warnings (W2xxx)
    /// Real superclass, `callSuper` left at its implicit `false`
    W2001,
    /// A candidate method already exists as user code
    W2002,
    /// Include and exclude lists both given
    W2003,
    /// Excluded name is not a field, or would be skipped anyway
    W2004,
    /// Included name is not a field
    W2005,
}

impl ErrorCode {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::W2001 => "W2001",
            ErrorCode::W2002 => "W2002",
            ErrorCode::W2003 => "W2003",
            ErrorCode::W2004 => "W2004",
            ErrorCode::W2005 => "W2005",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
