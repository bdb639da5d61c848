use super::*;
use eqc_ir::{
    DeclaredType, ElementClass, FieldAccess, FieldDescriptor, FieldRef, Primitive, TypeName,
};
use pretty_assertions::assert_eq;

fn selected(fields: &[FieldDescriptor], access: FieldAccess) -> Vec<SelectedField<'_>> {
    fields.iter().map(|f| SelectedField::new(f, access)).collect()
}

fn compare(field: FieldRef, comparison: FieldComparison) -> EqualsOp {
    EqualsOp::CompareField {
        field,
        alias: "other".to_string(),
        comparison,
    }
}

#[test]
fn test_comparison_rules() {
    assert_eq!(
        comparison_for(TypeClassification::Float),
        FieldComparison::Floating(FloatWidth::Float)
    );
    assert_eq!(
        comparison_for(TypeClassification::Double),
        FieldComparison::Floating(FloatWidth::Double)
    );
    assert_eq!(comparison_for(TypeClassification::Boolean), FieldComparison::Primitive);
    assert_eq!(comparison_for(TypeClassification::Long), FieldComparison::Primitive);
    assert_eq!(
        comparison_for(TypeClassification::OtherPrimitive(Primitive::Char)),
        FieldComparison::Primitive
    );
    assert_eq!(
        comparison_for(TypeClassification::Array {
            element: ElementClass::Primitive(Primitive::Boolean),
            dimensions: 1,
        }),
        FieldComparison::Array(ArrayMode::Shallow)
    );
    assert_eq!(
        comparison_for(TypeClassification::Array {
            element: ElementClass::Reference,
            dimensions: 1,
        }),
        FieldComparison::Array(ArrayMode::Deep)
    );
    assert_eq!(comparison_for(TypeClassification::Reference), FieldComparison::NullSafe);
}

#[test]
fn test_non_final_point_with_accessors() {
    let fields = [
        FieldDescriptor::new("x", DeclaredType::named("int")),
        FieldDescriptor::new("label", DeclaredType::named("String")),
    ];
    let ty = TypeDescriptor::class("Point");
    let method = synthesize_equals(
        &ty,
        &selected(&fields, FieldAccess::AccessorMethod),
        false,
        true,
        &NamingPolicy::default(),
    );

    assert_eq!(method.parameter.as_deref(), Some("o"));
    assert!(method.is_override);
    assert_eq!(
        method.equals_ops(),
        Some(
            [
                EqualsOp::ReturnTrueIfSame,
                EqualsOp::ReturnFalseUnlessInstance(TypeName::new(vec!["Point".to_string()])),
                EqualsOp::BindAlias {
                    alias: "other".to_string(),
                    simple_name: "Point".to_string(),
                    wildcards: 0,
                },
                EqualsOp::ReturnFalseUnlessCanEqual {
                    alias: "other".to_string(),
                },
                compare(FieldRef::accessor("x", "getX"), FieldComparison::Primitive),
                compare(
                    FieldRef::accessor("label", "getLabel"),
                    FieldComparison::NullSafe
                ),
                EqualsOp::ReturnTrue,
            ]
            .as_slice()
        )
    );
}

#[test]
fn test_super_check_follows_can_equal() {
    let fields = [FieldDescriptor::new("d", DeclaredType::named("double"))];
    let ty = TypeDescriptor::class("Derived").with_superclass("Base");
    let method = synthesize_equals(
        &ty,
        &selected(&fields, FieldAccess::DirectField),
        true,
        true,
        &NamingPolicy::default(),
    );
    let ops = method.equals_ops().unwrap_or_default();

    assert_eq!(
        ops[3..].to_vec(),
        vec![
            EqualsOp::ReturnFalseUnlessCanEqual {
                alias: "other".to_string(),
            },
            EqualsOp::ReturnFalseUnlessSuperEquals,
            compare(
                FieldRef::direct("d"),
                FieldComparison::Floating(FloatWidth::Double)
            ),
            EqualsOp::ReturnTrue,
        ]
    );
}

#[test]
fn test_no_alias_without_fields_or_can_equal() {
    let ty = TypeDescriptor::class("Marker").with_final(true);
    let method = synthesize_equals(&ty, &[], false, false, &NamingPolicy::default());

    assert_eq!(
        method.equals_ops(),
        Some(
            [
                EqualsOp::ReturnTrueIfSame,
                EqualsOp::ReturnFalseUnlessInstance(TypeName::new(vec!["Marker".to_string()])),
                EqualsOp::ReturnTrue,
            ]
            .as_slice()
        )
    );
}

#[test]
fn test_generic_nested_type_alias() {
    let ty = TypeDescriptor::class("Entry")
        .with_enclosing(vec!["Registry".to_string()])
        .with_type_parameters(2);
    let method = synthesize_equals(&ty, &[], false, true, &NamingPolicy::default());
    let ops = method.equals_ops().unwrap_or_default();

    assert_eq!(
        ops[1],
        EqualsOp::ReturnFalseUnlessInstance(TypeName::new(vec![
            "Registry".to_string(),
            "Entry".to_string()
        ]))
    );
    assert_eq!(
        ops[2],
        EqualsOp::BindAlias {
            alias: "other".to_string(),
            simple_name: "Entry".to_string(),
            wildcards: 2,
        }
    );
}
