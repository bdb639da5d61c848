//! Interpreter for generated equality methods.
//!
//! Executes the op sequences of [`GeneratedMethods`] against [`Value`]s with
//! host-platform semantics: virtual dispatch through the class table, `super`
//! calls, boxed equality for primitives in reference positions, and the
//! runtime library's array helpers.
//!
//! Classes with no generated methods anywhere in their registered lineage
//! keep the root type's identity `equals` and `hashCode`.

mod equality;
mod hashing;

use eqc_ir::{FieldRef, GeneratedMethods, ROOT_TYPE_NAMES};
use tracing::trace;

use crate::error::{EvalError, EvalResult};
use crate::table::{ClassEntry, ClassTable};
use crate::value::Value;

/// Evaluates generated methods registered in a [`ClassTable`].
pub struct Interpreter<'t> {
    table: &'t ClassTable,
}

impl<'t> Interpreter<'t> {
    pub fn new(table: &'t ClassTable) -> Self {
        Interpreter { table }
    }

    /// `value instanceof target`.
    ///
    /// `null` is never an instance. Every non-null value is an instance of
    /// the root type.
    pub fn instance_of(&self, value: &Value, target: &str) -> EvalResult<bool> {
        if value.is_null() {
            return Ok(false);
        }
        if ROOT_TYPE_NAMES.contains(&target) {
            return Ok(true);
        }
        match value {
            Value::Object(obj) => self.table.is_subclass(&obj.class, target),
            Value::Str(_) => Ok(matches!(target, "String" | "java.lang.String")),
            _ => Ok(false),
        }
    }

    /// Virtual `this.canEqual(other)`.
    pub fn can_equal(&self, this: &Value, other: &Value) -> EvalResult<bool> {
        let obj = match this {
            Value::Object(obj) => obj,
            Value::Null => return Err(EvalError::NullDereference("canEqual".to_string())),
            _ => {
                return Err(EvalError::TypeMismatch {
                    context: "canEqual receiver",
                    expected: "object",
                    found: this.type_name(),
                })
            }
        };
        for entry in self.table.lineage(&obj.class)? {
            if let Some(body) = entry
                .methods
                .as_ref()
                .and_then(|m| m.can_equal.as_ref())
                .and_then(|m| m.can_equal_body())
            {
                let result = self.instance_of(other, &body.ty.qualified())?;
                trace!(class = %entry.name, result, "canEqual");
                return Ok(result);
            }
        }
        Err(EvalError::MissingMethod {
            class: obj.class.clone(),
            method: "canEqual",
        })
    }

    /// Nearest class in `class`'s lineage that carries generated methods.
    fn dispatch(&self, class: &str) -> EvalResult<Option<(&'t ClassEntry, &'t GeneratedMethods)>> {
        for entry in self.table.lineage(class)? {
            if let Some(methods) = entry.methods.as_ref() {
                return Ok(Some((entry, methods)));
            }
        }
        Ok(None)
    }

    /// Dispatch target of a `super.m()` call made from `entry`'s methods.
    fn super_dispatch(
        &self,
        entry: &ClassEntry,
    ) -> EvalResult<Option<(&'t ClassEntry, &'t GeneratedMethods)>> {
        match entry.superclass.as_deref() {
            Some(superclass) => self.dispatch(superclass),
            None => Ok(None),
        }
    }
}

/// Read `field` from an object value.
///
/// Accessor reads resolve to the stored field: accessors are plain getters.
fn read_field(target: &Value, field: &FieldRef) -> EvalResult<Value> {
    match target {
        Value::Object(obj) => obj
            .field(&field.name)
            .cloned()
            .ok_or_else(|| EvalError::MissingField {
                class: obj.class.clone(),
                field: field.name.clone(),
            }),
        Value::Null => Err(EvalError::NullDereference(field.name.clone())),
        other => Err(EvalError::TypeMismatch {
            context: "field read",
            expected: "object",
            found: other.type_name(),
        }),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
