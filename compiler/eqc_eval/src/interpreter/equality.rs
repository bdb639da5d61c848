//! `equals` execution.

use eqc_ir::{ArrayMode, EqualsOp, FieldComparison, FloatWidth};
use rustc_hash::FxHashMap;
use tracing::trace;

use super::{read_field, Interpreter};
use crate::error::{EvalError, EvalResult};
use crate::platform::{double_compare, double_to_long_bits, float_compare, float_to_int_bits};
use crate::table::ClassEntry;
use crate::value::{ArrayValue, Value};

impl Interpreter<'_> {
    /// Virtual `this.equals(other)`.
    pub fn equals(&self, this: &Value, other: &Value) -> EvalResult<bool> {
        match this {
            Value::Null => Err(EvalError::NullDereference("equals".to_string())),
            Value::Object(obj) => match self.dispatch(&obj.class)? {
                Some((entry, _)) => self.run_equals(entry, this, other),
                None => Ok(this.same_identity(other)),
            },
            Value::Array(_) => Ok(this.same_identity(other)),
            Value::Str(a) => Ok(matches!(other, Value::Str(b) if a == b)),
            _ => Ok(boxed_equals(this, other)),
        }
    }

    /// `Objects.equals(a, b)`.
    pub fn null_safe_equals(&self, a: &Value, b: &Value) -> EvalResult<bool> {
        match (a.is_null(), b.is_null()) {
            (true, true) => Ok(true),
            (true, false) | (false, true) => Ok(false),
            (false, false) => self.equals(a, b),
        }
    }

    /// `super.equals(o)` from a method generated for `entry`.
    fn super_equals(&self, entry: &ClassEntry, this: &Value, o: &Value) -> EvalResult<bool> {
        match self.super_dispatch(entry)? {
            Some((target, _)) => self.run_equals(target, this, o),
            None => Ok(this.same_identity(o)),
        }
    }

    fn run_equals(&self, entry: &ClassEntry, this: &Value, o: &Value) -> EvalResult<bool> {
        let ops = entry
            .methods
            .as_ref()
            .and_then(|m| m.equals.equals_ops())
            .ok_or_else(|| EvalError::MissingMethod {
                class: entry.name.clone(),
                method: "equals",
            })?;
        trace!(class = %entry.name, ops = ops.len(), "equals");

        let mut locals: FxHashMap<&str, &Value> = FxHashMap::default();
        for op in ops {
            match op {
                EqualsOp::ReturnTrueIfSame => {
                    if this.same_identity(o) {
                        return Ok(true);
                    }
                }
                EqualsOp::ReturnFalseUnlessInstance(ty) => {
                    if !self.instance_of(o, &ty.qualified())? {
                        return Ok(false);
                    }
                }
                EqualsOp::BindAlias { alias, .. } => {
                    locals.insert(alias.as_str(), o);
                }
                EqualsOp::ReturnFalseUnlessCanEqual { alias } => {
                    let other = lookup(&locals, alias)?;
                    if !self.can_equal(other, this)? {
                        return Ok(false);
                    }
                }
                EqualsOp::ReturnFalseUnlessSuperEquals => {
                    if !self.super_equals(entry, this, o)? {
                        return Ok(false);
                    }
                }
                EqualsOp::CompareField {
                    field,
                    alias,
                    comparison,
                } => {
                    let mine = read_field(this, field)?;
                    let theirs = read_field(lookup(&locals, alias)?, field)?;
                    if !self.compare(*comparison, &mine, &theirs)? {
                        trace!(field = %field.name, "field differs");
                        return Ok(false);
                    }
                }
                EqualsOp::ReturnTrue => return Ok(true),
            }
        }
        Err(EvalError::MissingReturn("equals"))
    }

    fn compare(&self, comparison: FieldComparison, a: &Value, b: &Value) -> EvalResult<bool> {
        match comparison {
            FieldComparison::Primitive => primitive_equals(a, b),
            FieldComparison::Floating(width) => floating_equals(width, a, b),
            FieldComparison::Array(mode) => self.array_field_equals(mode, a, b),
            FieldComparison::NullSafe => self.null_safe_equals(a, b),
        }
    }

    /// `Arrays.equals` / `Arrays.deepEquals` on two array-typed field values.
    fn array_field_equals(&self, mode: ArrayMode, a: &Value, b: &Value) -> EvalResult<bool> {
        match (a, b) {
            (Value::Null, Value::Null) => Ok(true),
            (Value::Null, _) | (_, Value::Null) => Ok(false),
            (Value::Array(x), Value::Array(y)) => self.arrays_equal(mode, x, y),
            (Value::Array(_), other) | (other, _) => Err(EvalError::TypeMismatch {
                context: "array comparison",
                expected: "array",
                found: other.type_name(),
            }),
        }
    }

    fn arrays_equal(&self, mode: ArrayMode, a: &ArrayValue, b: &ArrayValue) -> EvalResult<bool> {
        if std::ptr::eq(a, b) {
            return Ok(true);
        }
        if a.items.len() != b.items.len() {
            return Ok(false);
        }
        for (x, y) in a.items.iter().zip(&b.items) {
            let equal = match (mode, x, y) {
                (ArrayMode::Deep, Value::Array(x), Value::Array(y)) => {
                    self.arrays_equal(ArrayMode::Deep, x, y)?
                }
                _ => self.null_safe_equals(x, y)?,
            };
            if !equal {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn lookup<'v>(locals: &FxHashMap<&str, &'v Value>, name: &str) -> EvalResult<&'v Value> {
    locals
        .get(name)
        .copied()
        .ok_or_else(|| EvalError::UnboundLocal(name.to_string()))
}

/// `a != b` on two primitive field values.
fn primitive_equals(a: &Value, b: &Value) -> EvalResult<bool> {
    #[allow(clippy::float_cmp, reason = "mirrors the primitive `==` operator")]
    let equal = match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Byte(x), Value::Byte(y)) => x == y,
        (Value::Short(x), Value::Short(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Long(x), Value::Long(y)) => x == y,
        (Value::Char(x), Value::Char(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Double(x), Value::Double(y)) => x == y,
        _ => {
            return Err(EvalError::TypeMismatch {
                context: "primitive comparison",
                expected: a.type_name(),
                found: b.type_name(),
            })
        }
    };
    Ok(equal)
}

/// `Float.compare(a, b) != 0` / `Double.compare(a, b) != 0`.
fn floating_equals(width: FloatWidth, a: &Value, b: &Value) -> EvalResult<bool> {
    match (width, a, b) {
        (FloatWidth::Float, Value::Float(x), Value::Float(y)) => {
            Ok(float_compare(*x, *y).is_eq())
        }
        (FloatWidth::Double, Value::Double(x), Value::Double(y)) => {
            Ok(double_compare(*x, *y).is_eq())
        }
        _ => Err(EvalError::TypeMismatch {
            context: "floating-point comparison",
            expected: match width {
                FloatWidth::Float => "float",
                FloatWidth::Double => "double",
            },
            found: b.type_name(),
        }),
    }
}

/// `equals` of a boxed primitive.
///
/// Boxed floats compare by canonical bits, so a boxed `NaN` equals itself.
fn boxed_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Byte(x), Value::Byte(y)) => x == y,
        (Value::Short(x), Value::Short(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Long(x), Value::Long(y)) => x == y,
        (Value::Char(x), Value::Char(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => float_to_int_bits(*x) == float_to_int_bits(*y),
        (Value::Double(x), Value::Double(y)) => double_to_long_bits(*x) == double_to_long_bits(*y),
        _ => false,
    }
}
