//! Diagnostic queue for collecting one request's diagnostics.
//!
//! Features:
//! - Emission order is preserved (stages run in a fixed order, so this is
//!   also a stable, deterministic order for hosts)
//! - Exact duplicates are dropped
//! - `ErrorGuaranteed` proof that errors were emitted

use smallvec::SmallVec;

use crate::{Diagnostic, ErrorGuaranteed};

/// Queue for collecting diagnostics during one synthesis request.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.warn(implicit_call_super("Base"));
/// let guarantee = queue.emit_error(super_call_on_root("Point"));
/// let diagnostics = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    /// Most requests report zero to two diagnostics.
    diagnostics: SmallVec<[Diagnostic; 2]>,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic of any severity.
    ///
    /// Returns `true` if the diagnostic was added, `false` if an identical
    /// one was already queued.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.diagnostics.contains(&diag) {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Add a warning.
    pub fn warn(&mut self, diag: Diagnostic) {
        debug_assert!(!diag.is_error(), "warn() called with an error diagnostic");
        self.push(diag);
    }

    /// Emit an error diagnostic and get proof it was emitted.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error() called with a warning");
        self.push(diag);
        ErrorGuaranteed::new()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics in emission order, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain(..).collect()
    }
}

#[cfg(test)]
mod tests;
