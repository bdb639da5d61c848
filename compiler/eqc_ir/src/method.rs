//! Abstract method-body IR.
//!
//! The synthesizers produce ordered operation sequences, one per generated
//! method. Each op names *what* must happen (compare this field with the
//! floating-point comparator, fold this contribution into the accumulator);
//! hosts decide how that is spelled in their own syntax tree.
//!
//! # Structure
//!
//! - [`GeneratedMethods`]: the full output of one request, in emission order
//! - [`GeneratedMethod`]: one method: kind, parameter, body
//! - [`EqualsOp`] / [`HashOp`] / [`CanEqualBody`]: the bodies

use crate::{ArrayMode, FloatWidth, TypeName};

/// Multiplier of the hash fold.
pub const HASH_MULTIPLIER: i32 = 31;
/// Initial accumulator value of the hash fold.
pub const HASH_SEED: i32 = 1;
/// Hash contribution of a `true` boolean field.
pub const BOOLEAN_TRUE_HASH: i32 = 1231;
/// Hash contribution of a `false` boolean field.
pub const BOOLEAN_FALSE_HASH: i32 = 1237;

/// The three cooperating methods.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodKind {
    Equals,
    HashCode,
    CanEqual,
}

impl MethodKind {
    pub const ALL: [MethodKind; 3] = [
        MethodKind::Equals,
        MethodKind::HashCode,
        MethodKind::CanEqual,
    ];

    /// The method's name on the generated type.
    pub fn method_name(self) -> &'static str {
        match self {
            MethodKind::Equals => "equals",
            MethodKind::HashCode => "hashCode",
            MethodKind::CanEqual => "canEqual",
        }
    }
}

/// How a field value is read.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldRead {
    Direct,
    /// Call the named zero-argument accessor.
    Accessor(String),
}

/// A field read on the receiver or on the narrowed alias.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRef {
    /// The field's declared name.
    pub name: String,
    pub read: FieldRead,
}

impl FieldRef {
    pub fn direct(name: impl Into<String>) -> Self {
        FieldRef {
            name: name.into(),
            read: FieldRead::Direct,
        }
    }

    pub fn accessor(name: impl Into<String>, method: impl Into<String>) -> Self {
        FieldRef {
            name: name.into(),
            read: FieldRead::Accessor(method.into()),
        }
    }
}

/// Per-field equality rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldComparison {
    /// `this.f != other.f` means unequal.
    Primitive,
    /// Canonical comparator result `!= 0` means unequal. `NaN` equals itself,
    /// `-0.0` and `0.0` differ.
    Floating(FloatWidth),
    Array(ArrayMode),
    /// Equal iff both null, or both non-null and `this.f.equals(other.f)`.
    NullSafe,
}

/// One step of the generated `equals` body.
///
/// Every `ReturnFalse*` op short-circuits with `false` when its condition
/// fails.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EqualsOp {
    /// `if (o == this) return true;`
    ReturnTrueIfSame,
    /// `if (!(o instanceof T)) return false;` with `T` qualified through its
    /// enclosing types.
    ReturnFalseUnlessInstance(TypeName),
    /// `final T<?, ...> alias = (T<?, ...>) o;`
    BindAlias {
        alias: String,
        simple_name: String,
        /// Number of unbounded wildcard arguments; 0 for non-generic types.
        wildcards: usize,
    },
    /// `if (!alias.canEqual(this)) return false;`
    ReturnFalseUnlessCanEqual { alias: String },
    /// `if (!super.equals(o)) return false;`
    ReturnFalseUnlessSuperEquals,
    /// Compare `this`'s field with `alias`'s field.
    CompareField {
        field: FieldRef,
        alias: String,
        comparison: FieldComparison,
    },
    /// `return true;`
    ReturnTrue,
}

/// Source of a 64-bit value folded to 32 bits with `(int)(v >>> 32 ^ v)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LongOperand {
    Field(FieldRef),
    /// A temporary declared earlier by [`HashOp::DeclareBitsTemp`].
    Temp(String),
}

/// One 32-bit hash contribution.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Contribution {
    /// `super.hashCode()`
    SuperHash,
    /// Float bits reinterpreted as an int.
    FloatBits(FieldRef),
    /// Halving fold of a long.
    FoldLong(LongOperand),
    /// `BOOLEAN_TRUE_HASH` if true, else `BOOLEAN_FALSE_HASH`.
    BooleanChoice(FieldRef),
    /// The value itself (byte, short, int, char).
    Value(FieldRef),
    ArrayHash { field: FieldRef, mode: ArrayMode },
    /// `0` if null, else the value's own hash.
    NullSafeHash(FieldRef),
}

/// One step of the generated `hashCode` body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashOp {
    /// `final int NAME = value;`
    DeclareMultiplier { name: String, value: i32 },
    /// `int NAME = seed;`
    DeclareAccumulator { name: String, seed: i32 },
    /// `final long NAME = <double bits of field>;`
    DeclareBitsTemp { name: String, field: FieldRef },
    /// `accumulator = accumulator * multiplier + contribution;`
    Fold {
        accumulator: String,
        multiplier: String,
        contribution: Contribution,
    },
    /// `return NAME;`
    ReturnAccumulator { name: String },
}

/// `return parameter instanceof ty;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanEqualBody {
    pub parameter: String,
    pub ty: TypeName,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodBody {
    Equals(Vec<EqualsOp>),
    HashCode(Vec<HashOp>),
    CanEqual(CanEqualBody),
}

/// One generated method.
///
/// All generated methods are public instance methods. `equals` and
/// `canEqual` take a single object-typed parameter; `hashCode` takes none.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedMethod {
    pub kind: MethodKind,
    pub parameter: Option<String>,
    /// Overrides an inherited method (`equals`, `hashCode`).
    pub is_override: bool,
    pub body: MethodBody,
}

impl GeneratedMethod {
    pub fn name(&self) -> &'static str {
        self.kind.method_name()
    }

    pub fn equals_ops(&self) -> Option<&[EqualsOp]> {
        match &self.body {
            MethodBody::Equals(ops) => Some(ops),
            _ => None,
        }
    }

    pub fn hash_ops(&self) -> Option<&[HashOp]> {
        match &self.body {
            MethodBody::HashCode(ops) => Some(ops),
            _ => None,
        }
    }

    pub fn can_equal_body(&self) -> Option<&CanEqualBody> {
        match &self.body {
            MethodBody::CanEqual(body) => Some(body),
            _ => None,
        }
    }
}

/// The complete output of one synthesis request.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedMethods {
    pub equals: GeneratedMethod,
    /// Present iff the type needs the symmetry hook.
    pub can_equal: Option<GeneratedMethod>,
    pub hash_code: GeneratedMethod,
}

impl GeneratedMethods {
    /// Methods in emission order: `equals`, `canEqual`, `hashCode`.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedMethod> {
        std::iter::once(&self.equals)
            .chain(self.can_equal.as_ref())
            .chain(std::iter::once(&self.hash_code))
    }
}
