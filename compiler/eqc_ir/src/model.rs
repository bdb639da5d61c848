//! Input type model: the class shape a synthesis request operates on.
//!
//! A host builds one [`TypeDescriptor`] per request from its own syntax tree
//! or symbol table. Synthesis only reads it.

use std::fmt;

use bitflags::bitflags;

/// Superclass spellings that mean "directly rooted at the object type".
///
/// A type declaring one of these as its superclass is treated exactly like a
/// type with no `extends` clause at all.
pub const ROOT_TYPE_NAMES: [&str; 2] = ["Object", "java.lang.Object"];

/// The declaration kind of a type.
///
/// Only [`TypeKind::Class`] is eligible for synthesis.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Annotation,
    Enum,
}

impl TypeKind {
    /// Whether equality methods can be generated for this kind.
    #[inline]
    pub fn is_class_like(self) -> bool {
        matches!(self, TypeKind::Class)
    }

    /// Human-readable kind name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Annotation => "annotation",
            TypeKind::Enum => "enum",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Field modifiers relevant to field selection.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FieldModifiers: u8 {
        const STATIC = 1 << 0;
        const TRANSIENT = 1 << 1;
        /// Compiler-generated field the user never wrote.
        const SYNTHETIC = 1 << 2;
    }
}

/// A field's declared type as written in source.
///
/// `base` is the last token of the element type (`int`, `String`,
/// `Map`); `dimensions` counts array brackets, so `String[][]` is
/// `{ base: "String", dimensions: 2 }`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclaredType {
    pub base: String,
    pub dimensions: u8,
}

impl DeclaredType {
    /// A non-array type.
    pub fn named(base: impl Into<String>) -> Self {
        DeclaredType {
            base: base.into(),
            dimensions: 0,
        }
    }

    /// An array type with the given number of dimensions.
    pub fn array(base: impl Into<String>, dimensions: u8) -> Self {
        DeclaredType {
            base: base.into(),
            dimensions,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for _ in 0..self.dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

/// One field of the type being processed.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: DeclaredType,
    pub modifiers: FieldModifiers,
    /// Accessor method name known to the host (an existing or soon-to-be
    /// generated getter). When `None` the bean-convention name is derived.
    pub accessor: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        FieldDescriptor {
            name: name.into(),
            declared_type,
            modifiers: FieldModifiers::empty(),
            accessor: None,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: FieldModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.accessor = Some(accessor.into());
        self
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(FieldModifiers::STATIC)
    }

    #[inline]
    pub fn is_transient(&self) -> bool {
        self.modifiers.contains(FieldModifiers::TRANSIENT)
    }

    /// Compiler-internal fields: flagged synthetic, or named with a leading `$`.
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.modifiers.contains(FieldModifiers::SYNTHETIC) || self.name.starts_with('$')
    }
}

/// A type reference qualified through its enclosing types.
///
/// `path` runs outermost first and always ends with the simple name, so a
/// nested `Outer.Inner` is `["Outer", "Inner"]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeName {
    pub path: Vec<String>,
}

impl TypeName {
    pub fn new(path: Vec<String>) -> Self {
        TypeName { path }
    }

    /// Dot-joined qualified name, e.g. `Outer.Inner`.
    pub fn qualified(&self) -> String {
        self.path.join(".")
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// The shape of the type a synthesis request targets.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDescriptor {
    /// Simple name.
    pub name: String,
    /// Enclosing type names, outermost first. Empty for top-level types.
    pub enclosing: Vec<String>,
    pub kind: TypeKind,
    pub is_final: bool,
    /// Declared superclass. `None` means directly rooted.
    pub superclass: Option<String>,
    pub type_parameter_count: usize,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// A non-final, top-level, directly rooted class with no fields.
    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor {
            name: name.into(),
            enclosing: Vec::new(),
            kind: TypeKind::Class,
            is_final: false,
            superclass: None,
            type_parameter_count: 0,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    #[must_use]
    pub fn with_enclosing(mut self, enclosing: Vec<String>) -> Self {
        self.enclosing = enclosing;
        self
    }

    #[must_use]
    pub fn with_type_parameters(mut self, count: usize) -> Self {
        self.type_parameter_count = count;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[inline]
    pub fn is_class_like(&self) -> bool {
        self.kind.is_class_like()
    }

    /// Whether the type extends something other than the root object type.
    pub fn has_real_superclass(&self) -> bool {
        self.superclass
            .as_deref()
            .is_some_and(|name| !ROOT_TYPE_NAMES.contains(&name))
    }

    /// The type's name qualified through its enclosing types.
    pub fn type_name(&self) -> TypeName {
        let mut path = self.enclosing.clone();
        path.push(self.name.clone());
        TypeName::new(path)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
