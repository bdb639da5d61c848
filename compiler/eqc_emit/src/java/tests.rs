use super::*;
use eqc_ir::{MethodBody, TypeName};
use pretty_assertions::assert_eq;

#[test]
fn test_wildcards() {
    assert_eq!(wildcard_arguments(0), "");
    assert_eq!(wildcard_arguments(1), "<?>");
    assert_eq!(wildcard_arguments(3), "<?, ?, ?>");
}

#[test]
fn test_field_reads() {
    assert_eq!(read("this", &FieldRef::direct("x")), "this.x");
    assert_eq!(read("other", &FieldRef::accessor("x", "getX")), "other.getX()");
}

#[test]
fn test_comparisons() {
    let x = FieldRef::direct("x");
    assert_eq!(
        compare_field(&x, "other", FieldComparison::Primitive),
        "if (this.x != other.x) return false;"
    );
    assert_eq!(
        compare_field(&x, "other", FieldComparison::Floating(FloatWidth::Float)),
        "if (java.lang.Float.compare(this.x, other.x) != 0) return false;"
    );
    assert_eq!(
        compare_field(&x, "other", FieldComparison::Array(ArrayMode::Shallow)),
        "if (!java.util.Arrays.equals(this.x, other.x)) return false;"
    );
    assert_eq!(
        compare_field(&x, "other", FieldComparison::Array(ArrayMode::Deep)),
        "if (!java.util.Arrays.deepEquals(this.x, other.x)) return false;"
    );
    assert_eq!(
        compare_field(&FieldRef::accessor("s", "getS"), "other", FieldComparison::NullSafe),
        "if (this.getS() == null ? other.getS() != null : \
         !this.getS().equals((java.lang.Object) other.getS())) return false;"
    );
}

#[test]
fn test_contributions() {
    let f = FieldRef::direct("f");
    assert_eq!(contribution_expr(&Contribution::SuperHash), "super.hashCode()");
    assert_eq!(
        contribution_expr(&Contribution::FloatBits(f.clone())),
        "java.lang.Float.floatToIntBits(this.f)"
    );
    assert_eq!(
        contribution_expr(&Contribution::FoldLong(LongOperand::Field(f.clone()))),
        "(int) (this.f >>> 32 ^ this.f)"
    );
    assert_eq!(
        contribution_expr(&Contribution::FoldLong(LongOperand::Temp("temp1".to_string()))),
        "(int) (temp1 >>> 32 ^ temp1)"
    );
    assert_eq!(
        contribution_expr(&Contribution::BooleanChoice(f.clone())),
        "(this.f ? 1231 : 1237)"
    );
    assert_eq!(contribution_expr(&Contribution::Value(f.clone())), "this.f");
    assert_eq!(
        contribution_expr(&Contribution::ArrayHash {
            field: f.clone(),
            mode: ArrayMode::Deep,
        }),
        "java.util.Arrays.deepHashCode(this.f)"
    );
    assert_eq!(
        contribution_expr(&Contribution::NullSafeHash(f)),
        "(this.f == null ? 0 : this.f.hashCode())"
    );
}

#[test]
fn test_can_equal_at_member_level() {
    let method = GeneratedMethod {
        kind: MethodKind::CanEqual,
        parameter: Some("other".to_string()),
        is_override: false,
        body: MethodBody::CanEqual(CanEqualBody {
            parameter: "other".to_string(),
            ty: TypeName::new(vec!["Outer".to_string(), "Inner".to_string()]),
        }),
    };
    let mut printer = JavaPrinter::with_base_level(StringEmitter::new(), 1);
    crate::emit_method(&method, &mut printer);

    assert_eq!(
        printer.into_inner().output(),
        "    public boolean canEqual(final java.lang.Object other) {\n        \
         return other instanceof Outer.Inner;\n    }\n"
    );
}
