//! Runtime values.
//!
//! Primitive variants hold their value directly. When a primitive value sits
//! in a reference-typed field it is the boxed object (`Integer`, `Double`)
//! and follows boxed equality and hashing; the variant is the same.
//!
//! Arrays and objects are heap values behind `Arc` with a stable identity
//! number, so identity comparison and identity hashing are well defined.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use eqc_ir::Primitive;
use rustc_hash::FxHashMap;

static NEXT_IDENTITY: AtomicU32 = AtomicU32::new(1);

fn next_identity() -> u32 {
    NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed)
}

#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    /// A UTF-16 code unit.
    Char(u16),
    Float(f32),
    Double(f64),
    Str(Arc<str>),
    Array(Arc<ArrayValue>),
    Object(Arc<Object>),
}

impl Value {
    pub fn string(value: &str) -> Value {
        Value::Str(Arc::from(value))
    }

    /// A new object of `class` with the given field values.
    pub fn object<I, S>(class: impl Into<String>, fields: I) -> Value
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Value::Object(Arc::new(Object::new(class, fields)))
    }

    /// A new one-dimensional array of `primitive` elements.
    pub fn primitive_array(primitive: Primitive, items: Vec<Value>) -> Value {
        Value::Array(Arc::new(ArrayValue::new(Some(primitive), items)))
    }

    /// A new array whose elements are references (objects, strings, boxed
    /// values or nested arrays).
    pub fn reference_array(items: Vec<Value>) -> Value {
        Value::Array(Arc::new(ArrayValue::new(None, items)))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Variant name used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Char(_) => "char",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Str(_) => "String",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Identity comparison (`==` on references).
    ///
    /// Only heap values have identity; everything else is never identical.
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Str(a), Value::Str(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}L"),
            Value::Char(v) => match char::from_u32(u32::from(*v)) {
                Some(c) => write!(f, "'{c}'"),
                None => write!(f, "'\\u{v:04x}'"),
            },
            Value::Float(v) => write!(f, "{v}f"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v:?}"),
            Value::Array(a) => write!(f, "array@{}", a.identity),
            Value::Object(o) => write!(f, "{}@{}", o.class, o.identity),
        }
    }
}

/// An array instance.
#[derive(Debug)]
pub struct ArrayValue {
    /// `Some` for a one-dimensional primitive array.
    pub primitive: Option<Primitive>,
    pub items: Vec<Value>,
    pub identity: u32,
}

impl ArrayValue {
    pub fn new(primitive: Option<Primitive>, items: Vec<Value>) -> Self {
        ArrayValue {
            primitive,
            items,
            identity: next_identity(),
        }
    }
}

/// An object instance.
#[derive(Debug)]
pub struct Object {
    /// Qualified class name, as registered in the class table.
    pub class: String,
    pub fields: FxHashMap<String, Value>,
    pub identity: u32,
}

impl Object {
    pub fn new<I, S>(class: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Object {
            class: class.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            identity: next_identity(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
