//! Field type classification.
//!
//! Every participating field is tagged with a [`TypeClassification`] that
//! selects its comparison and hashing rule. The tags are deliberately coarse:
//! only the kinds whose rules differ get their own variant.

use std::fmt;

/// The built-in primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    /// Parse a primitive keyword.
    pub fn from_name(s: &str) -> Option<Primitive> {
        match s {
            "boolean" => Some(Primitive::Boolean),
            "byte" => Some(Primitive::Byte),
            "short" => Some(Primitive::Short),
            "int" => Some(Primitive::Int),
            "long" => Some(Primitive::Long),
            "char" => Some(Primitive::Char),
            "float" => Some(Primitive::Float),
            "double" => Some(Primitive::Double),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width of a floating-point field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatWidth {
    Float,
    Double,
}

/// How an array field is compared and hashed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayMode {
    /// One level, element by value. Only sound for 1-D primitive arrays.
    Shallow,
    /// Recursive into nested arrays, reference elements via their own
    /// equality and hash.
    Deep,
}

impl ArrayMode {
    /// Mode for an array of `element` with `dimensions` levels.
    pub fn select(element: ElementClass, dimensions: u8) -> ArrayMode {
        if dimensions == 1 && element.is_primitive() {
            ArrayMode::Shallow
        } else {
            ArrayMode::Deep
        }
    }
}

/// Classification of an array's element type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementClass {
    Primitive(Primitive),
    Reference,
}

impl ElementClass {
    #[inline]
    pub fn is_primitive(self) -> bool {
        matches!(self, ElementClass::Primitive(_))
    }
}

/// The type-kind tag driving per-field comparison and hash rules.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeClassification {
    Boolean,
    Float,
    Double,
    Long,
    /// `byte`, `short`, `int` or `char`: compared with `!=`, hashed as-is.
    OtherPrimitive(Primitive),
    /// Array with `dimensions >= 1`.
    Array {
        element: ElementClass,
        dimensions: u8,
    },
    Reference,
}
