use super::*;
use eqc_ir::{DeclaredType, Primitive};

#[test]
fn test_accessor_names_follow_bean_convention() {
    assert_eq!(accessor_name("x", false), "getX");
    assert_eq!(accessor_name("name", false), "getName");
    assert_eq!(accessor_name("active", true), "isActive");
    assert_eq!(accessor_name("isActive", true), "isActive");
    // Lowercase after `is` is not a prefix.
    assert_eq!(accessor_name("island", true), "isIsland");
    assert_eq!(accessor_name("isActive", false), "getIsActive");
}

#[test]
fn test_direct_access_ignores_accessors() {
    let field = FieldDescriptor::new("x", DeclaredType::named("int")).with_accessor("x");
    assert_eq!(
        field_read(
            &field,
            TypeClassification::OtherPrimitive(Primitive::Int),
            FieldAccess::DirectField
        ),
        FieldRead::Direct
    );
}

#[test]
fn test_host_accessor_wins() {
    let field = FieldDescriptor::new("x", DeclaredType::named("int")).with_accessor("x");
    assert_eq!(
        field_read(
            &field,
            TypeClassification::OtherPrimitive(Primitive::Int),
            FieldAccess::AccessorMethod
        ),
        FieldRead::Accessor("x".to_string())
    );
}

#[test]
fn test_boxed_boolean_uses_get() {
    let field = FieldDescriptor::new("flag", DeclaredType::named("Boolean"));
    assert_eq!(
        field_read(&field, TypeClassification::Reference, FieldAccess::AccessorMethod),
        FieldRead::Accessor("getFlag".to_string())
    );
}
