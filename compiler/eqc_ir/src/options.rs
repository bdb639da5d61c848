//! Generation options extracted by the host from the request annotation.

use std::fmt;

/// An option value tagged with whether the user wrote it.
///
/// Stages that care about provenance (the implicit `callSuper` warning, the
/// include/exclude exclusivity rule) match on the tag instead of re-deriving
/// intent from the host's annotation model.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionValue<T> {
    #[default]
    Default,
    Explicit(T),
}

impl<T> OptionValue<T> {
    /// The explicit value, if any.
    pub fn explicit(&self) -> Option<&T> {
        match self {
            OptionValue::Explicit(v) => Some(v),
            OptionValue::Default => None,
        }
    }

    /// The explicit value, or `default` when unset.
    pub fn resolve(&self, default: T) -> T
    where
        T: Clone,
    {
        match self {
            OptionValue::Explicit(v) => v.clone(),
            OptionValue::Default => default,
        }
    }
}

/// How generated code reads field values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldAccess {
    /// Read the field directly (`this.x`).
    DirectField,
    /// Call the field's accessor (`this.getX()`).
    #[default]
    AccessorMethod,
}

/// Option names that diagnostics can be attached to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKey {
    Exclude,
    /// The include list (spelled `of` on the annotation).
    Of,
    CallSuper,
}

impl OptionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Exclude => "exclude",
            OptionKey::Of => "of",
            OptionKey::CallSuper => "callSuper",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for one synthesis request.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationOptions {
    /// Field names to leave out. Ordered as written so diagnostics can point
    /// at the offending entry.
    pub exclude: OptionValue<Vec<String>>,
    /// Exact set of participating field names (`of`).
    pub include: OptionValue<Vec<String>>,
    pub call_super: OptionValue<bool>,
    pub field_access: FieldAccess,
    /// Warn when a candidate method already exists as user code.
    pub warn_on_existing: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::annotated()
    }
}

impl GenerationOptions {
    /// Options of an explicit request with no parameters written.
    pub fn annotated() -> Self {
        GenerationOptions {
            exclude: OptionValue::Default,
            include: OptionValue::Default,
            call_super: OptionValue::Default,
            field_access: FieldAccess::AccessorMethod,
            warn_on_existing: true,
        }
    }

    /// Options of a request implied by an aggregate data annotation.
    ///
    /// Never warns about existing members; the user did not ask for these
    /// methods by name.
    pub fn implied() -> Self {
        GenerationOptions {
            warn_on_existing: false,
            ..Self::annotated()
        }
    }

    #[must_use]
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = OptionValue::Explicit(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = OptionValue::Explicit(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_call_super(mut self, call_super: bool) -> Self {
        self.call_super = OptionValue::Explicit(call_super);
        self
    }

    #[must_use]
    pub fn with_field_access(mut self, field_access: FieldAccess) -> Self {
        self.field_access = field_access;
        self
    }
}

#[cfg(test)]
mod tests;
