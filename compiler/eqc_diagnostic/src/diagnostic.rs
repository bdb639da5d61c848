//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`], [`OptionTarget`] and [`Severity`], plus one
//! factory function per condition the synthesizer reports.

use std::fmt;

use eqc_ir::OptionKey;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The option (and entry within a list option) a diagnostic belongs to.
///
/// Hosts use this to put the squiggle on the right annotation parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OptionTarget {
    pub option: OptionKey,
    /// Position inside a list-valued option, when the problem is one entry.
    pub index: Option<usize>,
}

impl fmt::Display for OptionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{index}]", self.option),
            None => write!(f, "{}", self.option),
        }
    }
}

/// A diagnostic with all context a host needs to report it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// Option the diagnostic is attached to, if any.
    pub target: Option<OptionTarget>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            target: None,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach to a whole option.
    pub fn with_option(mut self, option: OptionKey) -> Self {
        self.target = Some(OptionTarget {
            option,
            index: None,
        });
        self
    }

    /// Attach to one entry of a list option.
    pub fn with_option_entry(mut self, option: OptionKey, index: usize) -> Self {
        self.target = Some(OptionTarget {
            option,
            index: Some(index),
        });
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn option(&self) -> Option<OptionKey> {
        self.target.map(|t| t.option)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        if let Some(target) = self.target {
            write!(f, "\n  --> {target}")?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

/// Create a "not a class" diagnostic.
pub fn not_a_class(type_name: &str, kind: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("equals/hashCode can only be generated for a class")
        .with_note(format!("`{type_name}` is declared as {kind}"))
}

/// Create a "pointless superclass call" diagnostic.
pub fn super_call_on_root(type_name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(
            "generating equals/hashCode with a supercall to the root object type is pointless",
        )
        .with_option(OptionKey::CallSuper)
        .with_note(format!("`{type_name}` does not extend any other class"))
}

/// Create an "implicit `callSuper = false`" diagnostic.
pub fn implicit_call_super(superclass: &str) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W2001)
        .with_message(format!(
            "generating equals/hashCode implementation but without a call to superclass, \
             even though this class extends `{superclass}`. If this is intentional, \
             set callSuper=false explicitly"
        ))
        .with_option(OptionKey::CallSuper)
}

/// Create an "existing methods, nothing generated" diagnostic.
///
/// The message lists every method that would have been generated.
pub fn existing_members(needs_can_equal: bool) -> Diagnostic {
    let methods = if needs_can_equal {
        ", hashCode and canEqual"
    } else {
        " and hashCode"
    };
    Diagnostic::warning(ErrorCode::W2002).with_message(format!(
        "not generating equals{methods}: a method with one of those names already exists \
         (either all or none of these methods will be generated)"
    ))
}

/// Create an "include and exclude both given" diagnostic.
pub fn mutually_exclusive_field_lists() -> Diagnostic {
    Diagnostic::warning(ErrorCode::W2003)
        .with_message("exclude and of are mutually exclusive; the 'exclude' parameter will be ignored")
        .with_option(OptionKey::Exclude)
}

/// Create a "bogus excluded field" diagnostic for entry `index` of `exclude`.
pub fn unknown_excluded_field(name: &str, index: usize) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W2004)
        .with_message("this field does not exist, or would have been excluded anyway")
        .with_option_entry(OptionKey::Exclude, index)
        .with_note(format!("no participating field named `{name}`"))
}

/// Create a "bogus included field" diagnostic for entry `index` of `of`.
pub fn unknown_included_field(name: &str, index: usize) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W2005)
        .with_message("this field does not exist")
        .with_option_entry(OptionKey::Of, index)
        .with_note(format!("no field named `{name}`"))
}

#[cfg(test)]
mod tests;
