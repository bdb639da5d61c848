//! Proof that an error diagnostic was emitted.

use std::fmt;

/// Type-level proof that at least one error was emitted.
///
/// Only [`DiagnosticQueue::emit_error`](crate::DiagnosticQueue::emit_error)
/// hands these out, so a value of this type always corresponds to a
/// reported error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}
