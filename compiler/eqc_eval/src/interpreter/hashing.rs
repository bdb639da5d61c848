//! `hashCode` execution.

use eqc_ir::{
    ArrayMode, Contribution, HashOp, LongOperand, BOOLEAN_FALSE_HASH, BOOLEAN_TRUE_HASH,
    HASH_MULTIPLIER, HASH_SEED,
};
use rustc_hash::FxHashMap;
use tracing::trace;

use super::{read_field, Interpreter};
use crate::error::{EvalError, EvalResult};
use crate::platform::{double_to_long_bits, float_to_int_bits, fold_long, fold_step, string_hash};
use crate::table::ClassEntry;
use crate::value::{ArrayValue, Value};

/// A local of a generated `hashCode` body.
#[derive(Copy, Clone, Debug)]
enum Local {
    Int(i32),
    Long(i64),
}

impl Interpreter<'_> {
    /// Virtual `value.hashCode()`.
    pub fn hash_code(&self, value: &Value) -> EvalResult<i32> {
        match value {
            Value::Null => Err(EvalError::NullDereference("hashCode".to_string())),
            Value::Object(obj) => match self.dispatch(&obj.class)? {
                Some((entry, _)) => self.run_hash_code(entry, value),
                None => Ok(identity_hash(obj.identity)),
            },
            Value::Array(array) => Ok(identity_hash(array.identity)),
            Value::Str(s) => Ok(string_hash(s)),
            Value::Bool(b) => Ok(boolean_hash(*b)),
            Value::Byte(v) => Ok(i32::from(*v)),
            Value::Short(v) => Ok(i32::from(*v)),
            Value::Int(v) => Ok(*v),
            Value::Char(v) => Ok(i32::from(*v)),
            Value::Long(v) => Ok(fold_long(*v)),
            Value::Float(v) => Ok(float_to_int_bits(*v)),
            Value::Double(v) => Ok(fold_long(double_to_long_bits(*v))),
        }
    }

    /// `Objects.hashCode(value)`: `0` for null.
    pub fn null_safe_hash(&self, value: &Value) -> EvalResult<i32> {
        if value.is_null() {
            Ok(0)
        } else {
            self.hash_code(value)
        }
    }

    /// `super.hashCode()` from a method generated for `entry`.
    fn super_hash(&self, entry: &ClassEntry, this: &Value) -> EvalResult<i32> {
        match self.super_dispatch(entry)? {
            Some((target, _)) => self.run_hash_code(target, this),
            None => match this {
                Value::Object(obj) => Ok(identity_hash(obj.identity)),
                other => self.hash_code(other),
            },
        }
    }

    fn run_hash_code(&self, entry: &ClassEntry, this: &Value) -> EvalResult<i32> {
        let ops = entry
            .methods
            .as_ref()
            .and_then(|m| m.hash_code.hash_ops())
            .ok_or_else(|| EvalError::MissingMethod {
                class: entry.name.clone(),
                method: "hashCode",
            })?;
        trace!(class = %entry.name, ops = ops.len(), "hashCode");

        let mut locals: FxHashMap<&str, Local> = FxHashMap::default();
        for op in ops {
            match op {
                HashOp::DeclareMultiplier { name, value } => {
                    locals.insert(name, Local::Int(*value));
                }
                HashOp::DeclareAccumulator { name, seed } => {
                    locals.insert(name, Local::Int(*seed));
                }
                HashOp::DeclareBitsTemp { name, field } => {
                    let bits = match read_field(this, field)? {
                        Value::Double(v) => double_to_long_bits(v),
                        other => return Err(mismatch("double bits", "double", &other)),
                    };
                    locals.insert(name, Local::Long(bits));
                }
                HashOp::Fold {
                    accumulator,
                    multiplier,
                    contribution,
                } => {
                    let acc = int_local(&locals, accumulator)?;
                    let mul = int_local(&locals, multiplier)?;
                    let c = self.contribution(entry, this, contribution, &locals)?;
                    locals.insert(accumulator, Local::Int(fold_step(acc, mul, c)));
                }
                HashOp::ReturnAccumulator { name } => return int_local(&locals, name),
            }
        }
        Err(EvalError::MissingReturn("hashCode"))
    }

    fn contribution(
        &self,
        entry: &ClassEntry,
        this: &Value,
        contribution: &Contribution,
        locals: &FxHashMap<&str, Local>,
    ) -> EvalResult<i32> {
        let value = match contribution {
            Contribution::SuperHash => return self.super_hash(entry, this),
            Contribution::FoldLong(LongOperand::Temp(name)) => {
                return match locals.get(name.as_str()) {
                    Some(Local::Long(bits)) => Ok(fold_long(*bits)),
                    Some(Local::Int(_)) => Err(EvalError::TypeMismatch {
                        context: "long fold",
                        expected: "long",
                        found: "int",
                    }),
                    None => Err(EvalError::UnboundLocal(name.clone())),
                };
            }
            Contribution::FoldLong(LongOperand::Field(field))
            | Contribution::FloatBits(field)
            | Contribution::BooleanChoice(field)
            | Contribution::Value(field)
            | Contribution::ArrayHash { field, .. }
            | Contribution::NullSafeHash(field) => read_field(this, field)?,
        };

        match (contribution, &value) {
            (Contribution::FoldLong(_), Value::Long(v)) => Ok(fold_long(*v)),
            (Contribution::FoldLong(_), other) => Err(mismatch("long fold", "long", other)),
            (Contribution::FloatBits(_), Value::Float(v)) => Ok(float_to_int_bits(*v)),
            (Contribution::FloatBits(_), other) => Err(mismatch("float bits", "float", other)),
            (Contribution::BooleanChoice(_), Value::Bool(b)) => Ok(boolean_hash(*b)),
            (Contribution::BooleanChoice(_), other) => {
                Err(mismatch("boolean hash", "boolean", other))
            }
            (Contribution::Value(_), Value::Byte(v)) => Ok(i32::from(*v)),
            (Contribution::Value(_), Value::Short(v)) => Ok(i32::from(*v)),
            (Contribution::Value(_), Value::Int(v)) => Ok(*v),
            (Contribution::Value(_), Value::Char(v)) => Ok(i32::from(*v)),
            (Contribution::Value(_), other) => Err(mismatch("value hash", "int", other)),
            (Contribution::ArrayHash { mode, .. }, Value::Array(array)) => {
                self.array_hash(*mode, array)
            }
            (Contribution::ArrayHash { .. }, Value::Null) => Ok(0),
            (Contribution::ArrayHash { .. }, other) => Err(mismatch("array hash", "array", other)),
            _ => self.null_safe_hash(&value),
        }
    }

    /// `Arrays.hashCode` / `Arrays.deepHashCode`.
    fn array_hash(&self, mode: ArrayMode, array: &ArrayValue) -> EvalResult<i32> {
        let mut hash = HASH_SEED;
        for item in &array.items {
            let element = match (mode, item) {
                (ArrayMode::Deep, Value::Array(nested)) => {
                    self.array_hash(ArrayMode::Deep, nested)?
                }
                _ => self.null_safe_hash(item)?,
            };
            hash = fold_step(hash, HASH_MULTIPLIER, element);
        }
        Ok(hash)
    }
}

fn int_local(locals: &FxHashMap<&str, Local>, name: &str) -> EvalResult<i32> {
    match locals.get(name) {
        Some(Local::Int(v)) => Ok(*v),
        Some(Local::Long(_)) => Err(EvalError::TypeMismatch {
            context: "int local",
            expected: "int",
            found: "long",
        }),
        None => Err(EvalError::UnboundLocal(name.to_string())),
    }
}

fn mismatch(context: &'static str, expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        context,
        expected,
        found: found.type_name(),
    }
}

#[inline]
fn boolean_hash(value: bool) -> i32 {
    if value {
        BOOLEAN_TRUE_HASH
    } else {
        BOOLEAN_FALSE_HASH
    }
}

#[allow(
    clippy::cast_possible_wrap,
    reason = "identity hashes are arbitrary 32-bit values"
)]
fn identity_hash(identity: u32) -> i32 {
    identity as i32
}
