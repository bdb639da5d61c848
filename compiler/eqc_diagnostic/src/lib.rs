//! Diagnostic system for synthesis requests.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A severity (`Error` aborts the request, `Warning` is advisory)
//! - A message (what went wrong)
//! - An optional target: the option, and entry within it, the problem
//!   belongs to (e.g. the second name in `exclude`)
//!
//! Diagnostics are collected and returned to the host; synthesis never
//! reports anything itself.
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted. An aborted request can only be constructed from one.
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! return Outcome::Aborted(guarantee);
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{
    existing_members, implicit_call_super, mutually_exclusive_field_lists, not_a_class,
    super_call_on_root, unknown_excluded_field, unknown_included_field, Diagnostic, OptionTarget,
    Severity,
};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
