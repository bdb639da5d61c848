//! Superclass policy: resolving `callSuper`.
//!
//! | superclass | `callSuper`       | result                                 |
//! |------------|-------------------|----------------------------------------|
//! | root       | explicit `true`   | fatal error                            |
//! | root       | unset / `false`   | no super call                          |
//! | real       | explicit          | as written                             |
//! | real       | unset             | no super call, implicit-false warning  |
//!
//! The implicit-false warning is returned rather than queued: it only
//! reaches the user if the request is not skipped silently later on.

use eqc_diagnostic::{implicit_call_super, super_call_on_root, Diagnostic};
use eqc_ir::{OptionValue, TypeDescriptor};
use tracing::debug;

/// The resolved superclass behavior of one request.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SuperResolution {
    pub call_super: bool,
    /// Implicit `callSuper = false` on a type with a real superclass.
    pub implicit_warning: Option<Diagnostic>,
}

/// Resolve `callSuper` for `ty`.
///
/// Returns the fatal diagnostic when a superclass call is requested on a
/// directly rooted type.
pub fn resolve_call_super(
    ty: &TypeDescriptor,
    call_super: &OptionValue<bool>,
) -> Result<SuperResolution, Diagnostic> {
    let has_real_superclass = ty.has_real_superclass();
    let resolved = call_super.resolve(false);

    if resolved && !has_real_superclass {
        return Err(super_call_on_root(&ty.name));
    }

    let implicit_warning = match (&ty.superclass, call_super) {
        (Some(superclass), OptionValue::Default) if has_real_superclass => {
            debug!(ty = %ty.name, %superclass, "callSuper left implicit on a subclass");
            Some(implicit_call_super(superclass))
        }
        _ => None,
    };

    Ok(SuperResolution {
        call_super: resolved,
        implicit_warning,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
