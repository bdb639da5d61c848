//! Java source printer.
//!
//! Renders synthesized methods as Java method declarations. Platform types
//! are written fully qualified (`java.lang.Object`, `java.util.Arrays`) so
//! the output compiles regardless of the surrounding imports.

use eqc_ir::{
    ArrayMode, CanEqualBody, Contribution, EqualsOp, FieldComparison, FieldRead, FieldRef,
    FloatWidth, GeneratedMethod, GeneratedMethods, HashOp, LongOperand, MethodKind,
    BOOLEAN_FALSE_HASH, BOOLEAN_TRUE_HASH,
};
use tracing::trace;

use crate::driver::{emit_methods, MethodEmitter};
use crate::emitter::{Emitter, StringEmitter};

/// Spaces per indentation level.
const INDENT_WIDTH: usize = 4;

/// A [`MethodEmitter`] that prints Java source to an [`Emitter`].
pub struct JavaPrinter<E: Emitter> {
    out: E,
    /// Indentation level of method declarations.
    base_level: usize,
    level: usize,
    /// Parameter of the method being printed.
    parameter: String,
    methods_printed: usize,
}

impl<E: Emitter> JavaPrinter<E> {
    pub fn new(out: E) -> Self {
        Self::with_base_level(out, 0)
    }

    /// Print declarations at `base_level`, e.g. 1 for members of a
    /// top-level class body.
    pub fn with_base_level(out: E, base_level: usize) -> Self {
        JavaPrinter {
            out,
            base_level,
            level: base_level,
            parameter: String::new(),
            methods_printed: 0,
        }
    }

    pub fn into_inner(self) -> E {
        self.out
    }

    fn line(&mut self, text: &str) {
        self.out.emit_indent(self.level * INDENT_WIDTH);
        self.out.emit(text);
        self.out.emit_newline();
    }
}

impl<E: Emitter> MethodEmitter for JavaPrinter<E> {
    fn begin_method(&mut self, method: &GeneratedMethod) {
        trace!(method = method.name(), "printing method");
        if self.methods_printed > 0 {
            self.out.emit_newline();
        }
        self.level = self.base_level;
        self.parameter = method.parameter.clone().unwrap_or_default();

        if method.is_override {
            self.line("@java.lang.Override");
        }
        let return_type = match method.kind {
            MethodKind::HashCode => "int",
            MethodKind::Equals | MethodKind::CanEqual => "boolean",
        };
        let params = match &method.parameter {
            Some(name) => format!("final java.lang.Object {name}"),
            None => String::new(),
        };
        self.line(&format!("public {return_type} {}({params}) {{", method.name()));
        self.level += 1;
    }

    fn equals_op(&mut self, op: &EqualsOp) {
        let text = match op {
            EqualsOp::ReturnTrueIfSame => format!("if ({} == this) return true;", self.parameter),
            EqualsOp::ReturnFalseUnlessInstance(ty) => {
                format!("if (!({} instanceof {ty})) return false;", self.parameter)
            }
            EqualsOp::BindAlias {
                alias,
                simple_name,
                wildcards,
            } => {
                let ty = format!("{simple_name}{}", wildcard_arguments(*wildcards));
                format!(
                    "@java.lang.SuppressWarnings(\"all\") final {ty} {alias} = ({ty}) {};",
                    self.parameter
                )
            }
            EqualsOp::ReturnFalseUnlessCanEqual { alias } => {
                format!("if (!{alias}.canEqual((java.lang.Object) this)) return false;")
            }
            EqualsOp::ReturnFalseUnlessSuperEquals => {
                format!("if (!super.equals({})) return false;", self.parameter)
            }
            EqualsOp::CompareField {
                field,
                alias,
                comparison,
            } => compare_field(field, alias, *comparison),
            EqualsOp::ReturnTrue => "return true;".to_string(),
        };
        self.line(&text);
    }

    fn hash_op(&mut self, op: &HashOp) {
        let text = match op {
            HashOp::DeclareMultiplier { name, value } => format!("final int {name} = {value};"),
            HashOp::DeclareAccumulator { name, seed } => format!("int {name} = {seed};"),
            HashOp::DeclareBitsTemp { name, field } => format!(
                "final long {name} = java.lang.Double.doubleToLongBits({});",
                read("this", field)
            ),
            HashOp::Fold {
                accumulator,
                multiplier,
                contribution,
            } => format!(
                "{accumulator} = {accumulator} * {multiplier} + {};",
                contribution_expr(contribution)
            ),
            HashOp::ReturnAccumulator { name } => format!("return {name};"),
        };
        self.line(&text);
    }

    fn can_equal(&mut self, body: &CanEqualBody) {
        self.line(&format!("return {} instanceof {};", body.parameter, body.ty));
    }

    fn end_method(&mut self, _method: &GeneratedMethod) {
        self.level = self.base_level;
        self.line("}");
        self.methods_printed += 1;
    }
}

/// `<?, ?>` for `count` type parameters, empty for none.
fn wildcard_arguments(count: usize) -> String {
    if count == 0 {
        return String::new();
    }
    format!("<{}>", vec!["?"; count].join(", "))
}

/// Expression reading `field` on `receiver`.
fn read(receiver: &str, field: &FieldRef) -> String {
    match &field.read {
        FieldRead::Direct => format!("{receiver}.{}", field.name),
        FieldRead::Accessor(method) => format!("{receiver}.{method}()"),
    }
}

fn compare_field(field: &FieldRef, alias: &str, comparison: FieldComparison) -> String {
    let this = read("this", field);
    let other = read(alias, field);
    match comparison {
        FieldComparison::Primitive => format!("if ({this} != {other}) return false;"),
        FieldComparison::Floating(width) => format!(
            "if (java.lang.{}.compare({this}, {other}) != 0) return false;",
            boxed_float(width)
        ),
        FieldComparison::Array(mode) => format!(
            "if (!java.util.Arrays.{}({this}, {other})) return false;",
            match mode {
                ArrayMode::Shallow => "equals",
                ArrayMode::Deep => "deepEquals",
            }
        ),
        FieldComparison::NullSafe => format!(
            "if ({this} == null ? {other} != null : !{this}.equals((java.lang.Object) {other})) \
             return false;"
        ),
    }
}

fn boxed_float(width: FloatWidth) -> &'static str {
    match width {
        FloatWidth::Float => "Float",
        FloatWidth::Double => "Double",
    }
}

fn fold_long(operand: &str) -> String {
    format!("(int) ({operand} >>> 32 ^ {operand})")
}

fn contribution_expr(contribution: &Contribution) -> String {
    match contribution {
        Contribution::SuperHash => "super.hashCode()".to_string(),
        Contribution::FloatBits(field) => {
            format!("java.lang.Float.floatToIntBits({})", read("this", field))
        }
        Contribution::FoldLong(LongOperand::Field(field)) => fold_long(&read("this", field)),
        Contribution::FoldLong(LongOperand::Temp(name)) => fold_long(name),
        Contribution::BooleanChoice(field) => format!(
            "({} ? {BOOLEAN_TRUE_HASH} : {BOOLEAN_FALSE_HASH})",
            read("this", field)
        ),
        Contribution::Value(field) => read("this", field),
        Contribution::ArrayHash { field, mode } => format!(
            "java.util.Arrays.{}({})",
            match mode {
                ArrayMode::Shallow => "hashCode",
                ArrayMode::Deep => "deepHashCode",
            },
            read("this", field)
        ),
        Contribution::NullSafeHash(field) => {
            let value = read("this", field);
            format!("({value} == null ? 0 : {value}.hashCode())")
        }
    }
}

/// Render all methods as Java source at the top indentation level.
pub fn render_java(methods: &GeneratedMethods) -> String {
    let mut printer = JavaPrinter::new(StringEmitter::with_capacity(1024));
    emit_methods(methods, &mut printer);
    printer.into_inner().output()
}

#[cfg(test)]
mod tests;
