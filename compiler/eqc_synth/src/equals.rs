//! equals synthesis.
//!
//! ```text
//! if (o == this) return true;
//! if (!(o instanceof Outer.T)) return false;
//! final T<?> other = (T<?>) o;               // fields or canEqual present
//! if (!other.canEqual(this)) return false;   // canEqual present
//! if (!super.equals(o)) return false;        // callSuper
//! <one comparison per field>
//! return true;
//! ```

use eqc_ir::{
    ArrayMode, EqualsOp, FieldComparison, FloatWidth, GeneratedMethod, MethodBody, MethodKind,
    NamingPolicy, TypeClassification, TypeDescriptor,
};

use crate::fields::SelectedField;

/// The comparison rule for a field classification.
pub fn comparison_for(class: TypeClassification) -> FieldComparison {
    match class {
        TypeClassification::Float => FieldComparison::Floating(FloatWidth::Float),
        TypeClassification::Double => FieldComparison::Floating(FloatWidth::Double),
        TypeClassification::Boolean
        | TypeClassification::Long
        | TypeClassification::OtherPrimitive(_) => FieldComparison::Primitive,
        TypeClassification::Array {
            element,
            dimensions,
        } => FieldComparison::Array(ArrayMode::select(element, dimensions)),
        TypeClassification::Reference => FieldComparison::NullSafe,
    }
}

/// Build `equals` for `ty` over `fields`.
pub fn synthesize_equals(
    ty: &TypeDescriptor,
    fields: &[SelectedField<'_>],
    call_super: bool,
    needs_can_equal: bool,
    naming: &NamingPolicy,
) -> GeneratedMethod {
    let alias = &naming.narrowed_alias;
    let mut ops = Vec::with_capacity(fields.len() + 5);

    ops.push(EqualsOp::ReturnTrueIfSame);
    ops.push(EqualsOp::ReturnFalseUnlessInstance(ty.type_name()));

    // The alias is only bound when something reads it.
    if !fields.is_empty() || needs_can_equal {
        ops.push(EqualsOp::BindAlias {
            alias: alias.clone(),
            simple_name: ty.name.clone(),
            wildcards: ty.type_parameter_count,
        });
    }
    if needs_can_equal {
        ops.push(EqualsOp::ReturnFalseUnlessCanEqual {
            alias: alias.clone(),
        });
    }
    if call_super {
        ops.push(EqualsOp::ReturnFalseUnlessSuperEquals);
    }

    ops.extend(fields.iter().map(|field| EqualsOp::CompareField {
        field: field.field_ref(),
        alias: alias.clone(),
        comparison: comparison_for(field.classification),
    }));
    ops.push(EqualsOp::ReturnTrue);

    GeneratedMethod {
        kind: MethodKind::Equals,
        parameter: Some(naming.equals_parameter.clone()),
        is_override: true,
        body: MethodBody::Equals(ops),
    }
}

#[cfg(test)]
mod tests;
