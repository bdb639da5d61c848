//! Field selection.
//!
//! Decides which fields participate in equality, in declaration order, and
//! reports option entries that name no usable field.
//!
//! - Static fields never participate.
//! - With an include list (`of`), exactly the named fields participate.
//! - Otherwise every field participates except transient fields,
//!   compiler-internal fields and the names in `exclude`.
//!
//! Include and exclude together is a user error: the include list wins and
//! `exclude` is ignored with a warning.

use eqc_diagnostic::{
    mutually_exclusive_field_lists, unknown_excluded_field, unknown_included_field, Diagnostic,
};
use eqc_ir::{
    FieldAccess, FieldDescriptor, FieldRead, FieldRef, GenerationOptions, TypeClassification,
    TypeDescriptor,
};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::access::field_read;
use crate::classify::classify;

/// A participating field with everything the synthesizers need to know.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SelectedField<'a> {
    pub field: &'a FieldDescriptor,
    pub classification: TypeClassification,
    pub read: FieldRead,
}

impl<'a> SelectedField<'a> {
    /// Classify `field` and resolve its read path.
    pub fn new(field: &'a FieldDescriptor, access: FieldAccess) -> Self {
        let classification = classify(&field.declared_type);
        let read = field_read(field, classification, access);
        SelectedField {
            field,
            classification,
            read,
        }
    }

    pub fn name(&self) -> &str {
        &self.field.name
    }

    /// The IR reference generated code reads this field through.
    pub fn field_ref(&self) -> FieldRef {
        FieldRef {
            name: self.field.name.clone(),
            read: self.read.clone(),
        }
    }
}

/// Check the `exclude` and `of` lists against `ty`.
///
/// Runs before the existing-member guard so that a request stopped by
/// user-written methods still reports bad option lists. Warnings come back in
/// reporting order: bogus `exclude` entries, bogus `of` entries, then the
/// exclusivity warning. Each list is checked even when both are given.
pub fn check_field_options(ty: &TypeDescriptor, options: &GenerationOptions) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    let include = options.include.explicit();
    let exclude = options.exclude.explicit();

    if let Some(names) = exclude {
        let candidates: Vec<&FieldDescriptor> = default_candidates(ty).collect();
        for (index, name) in names.iter().enumerate() {
            if !candidates.iter().any(|f| f.name == *name) {
                warnings.push(unknown_excluded_field(name, index));
            }
        }
    }

    if let Some(names) = include {
        for (index, name) in names.iter().enumerate() {
            if ty.field(name).is_none() {
                warnings.push(unknown_included_field(name, index));
            }
        }
    }

    if include.is_some() && exclude.is_some() {
        warnings.push(mutually_exclusive_field_lists());
    }

    warnings
}

/// Select the participating fields of `ty`.
///
/// Assumes the option lists were already checked by
/// [`check_field_options`]; an `exclude` given alongside `of` is ignored.
pub fn select_fields<'a>(
    ty: &'a TypeDescriptor,
    options: &GenerationOptions,
) -> Vec<SelectedField<'a>> {
    let selected: Vec<&FieldDescriptor> = match options.include.explicit() {
        Some(names) => {
            let wanted: FxHashSet<&str> = names.iter().map(String::as_str).collect();
            ty.fields
                .iter()
                .filter(|f| !f.is_static() && wanted.contains(f.name.as_str()))
                .collect()
        }
        None => {
            let excluded: FxHashSet<&str> = options
                .exclude
                .explicit()
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect();
            default_candidates(ty)
                .filter(|f| !excluded.contains(f.name.as_str()))
                .collect()
        }
    };

    debug!(
        ty = %ty.name,
        selected = selected.len(),
        total = ty.fields.len(),
        "selected participating fields"
    );

    selected
        .into_iter()
        .map(|field| SelectedField::new(field, options.field_access))
        .collect()
}

/// Fields that participate when no include list is given.
fn default_candidates(ty: &TypeDescriptor) -> impl Iterator<Item = &FieldDescriptor> {
    ty.fields
        .iter()
        .filter(|f| !f.is_static() && !f.is_transient() && !f.is_internal())
}
