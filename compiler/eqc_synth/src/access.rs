//! Field read paths.
//!
//! Generated bodies read fields either directly or through the field's
//! accessor. The accessor name is the host's when it knows one, otherwise
//! the bean convention: `is<Name>` for primitive booleans, `get<Name>` for
//! everything else.

use eqc_ir::{FieldAccess, FieldDescriptor, FieldRead, TypeClassification};

/// How generated code reads `field` under the request's access mode.
pub fn field_read(
    field: &FieldDescriptor,
    class: TypeClassification,
    access: FieldAccess,
) -> FieldRead {
    match access {
        FieldAccess::DirectField => FieldRead::Direct,
        FieldAccess::AccessorMethod => FieldRead::Accessor(match &field.accessor {
            Some(name) => name.clone(),
            None => accessor_name(&field.name, class == TypeClassification::Boolean),
        }),
    }
}

/// Bean-convention accessor name of a field.
///
/// A boolean field already spelled `isX` keeps its name.
pub fn accessor_name(field_name: &str, is_boolean: bool) -> String {
    if is_boolean {
        if has_is_prefix(field_name) {
            return field_name.to_string();
        }
        return format!("is{}", capitalize(field_name));
    }
    format!("get{}", capitalize(field_name))
}

fn has_is_prefix(name: &str) -> bool {
    name.strip_prefix("is")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
