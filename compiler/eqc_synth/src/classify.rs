//! Field type classification.
//!
//! Maps a field's [`DeclaredType`] to the [`TypeClassification`] that picks
//! its comparison and hashing rule. Classification looks only at the type's
//! last name token and its array dimensions; no type resolution happens.

use eqc_ir::{DeclaredType, ElementClass, Primitive, TypeClassification};
use tracing::trace;

/// Classify a declared field type.
///
/// Any base that is not one of the eight primitive keywords is a reference
/// type, including boxed primitives such as `Integer`.
pub fn classify(ty: &DeclaredType) -> TypeClassification {
    let primitive = Primitive::from_name(last_token(&ty.base));

    let class = if ty.dimensions > 0 {
        TypeClassification::Array {
            element: primitive.map_or(ElementClass::Reference, ElementClass::Primitive),
            dimensions: ty.dimensions,
        }
    } else {
        match primitive {
            Some(Primitive::Boolean) => TypeClassification::Boolean,
            Some(Primitive::Float) => TypeClassification::Float,
            Some(Primitive::Double) => TypeClassification::Double,
            Some(Primitive::Long) => TypeClassification::Long,
            Some(other) => TypeClassification::OtherPrimitive(other),
            None => TypeClassification::Reference,
        }
    };

    trace!(ty = %ty, ?class, "classified field type");
    class
}

/// The simple name of a possibly qualified, possibly parameterized type.
///
/// `java.util.Map<K, V>` → `Map`.
fn last_token(base: &str) -> &str {
    let unparameterized = base.split('<').next().unwrap_or(base);
    unparameterized
        .rsplit('.')
        .next()
        .unwrap_or(unparameterized)
        .trim()
}
