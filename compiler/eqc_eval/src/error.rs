//! Evaluation errors.
//!
//! These are failures of the evaluated program shape (a field the object
//! does not carry, an unregistered class), never of the equality contract
//! itself: an unequal pair is `Ok(false)`, not an error.

use thiserror::Error as ThisError;

/// Result of evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EvalError {
    #[error("object of class `{class}` has no field `{field}`")]
    MissingField { class: String, field: String },

    #[error("null dereference reading `{0}`")]
    NullDereference(String),

    #[error("type mismatch in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unbound local `{0}`")]
    UnboundLocal(String),

    #[error("no `{method}` on `{class}` or any of its superclasses")]
    MissingMethod { class: String, method: &'static str },

    #[error("body of `{0}` ends without returning")]
    MissingReturn(&'static str),

    #[error("superclass chain of `{0}` is cyclic")]
    CyclicHierarchy(String),
}
