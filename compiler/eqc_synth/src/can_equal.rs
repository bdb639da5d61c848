//! canEqual policy and synthesis.
//!
//! `canEqual` keeps equality symmetric across a hierarchy: a subclass that
//! redefines equality overrides it, so a base instance compared against a
//! subclass instance asks the subclass whether the comparison is allowed.
//! A final type directly under the root can never be subclassed and needs
//! no hook.

use eqc_ir::{CanEqualBody, GeneratedMethod, MethodBody, MethodKind, NamingPolicy, TypeDescriptor};

/// Whether a type needs the `canEqual` hook.
#[inline]
pub fn needs_can_equal(is_final: bool, has_real_superclass: bool) -> bool {
    has_real_superclass || !is_final
}

/// [`needs_can_equal`] for a descriptor.
pub fn type_needs_can_equal(ty: &TypeDescriptor) -> bool {
    needs_can_equal(ty.is_final, ty.has_real_superclass())
}

/// Build `canEqual`: true iff the argument is an instance of `ty`.
///
/// Not an override: every class in the hierarchy that generates equality
/// declares its own.
pub fn synthesize_can_equal(ty: &TypeDescriptor, naming: &NamingPolicy) -> GeneratedMethod {
    GeneratedMethod {
        kind: MethodKind::CanEqual,
        parameter: Some(naming.can_equal_parameter.clone()),
        is_override: false,
        body: MethodBody::CanEqual(CanEqualBody {
            parameter: naming.can_equal_parameter.clone(),
            ty: ty.type_name(),
        }),
    }
}
