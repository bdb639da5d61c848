use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::warning(ErrorCode::W2004)
        .with_message("test warning")
        .with_option_entry(OptionKey::Exclude, 2)
        .with_note("some context");

    assert_eq!(diag.code, ErrorCode::W2004);
    assert_eq!(diag.message, "test warning");
    assert!(!diag.is_error());
    assert_eq!(
        diag.target,
        Some(OptionTarget {
            option: OptionKey::Exclude,
            index: Some(2),
        })
    );
    assert_eq!(diag.option(), Some(OptionKey::Exclude));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::warning(ErrorCode::W2005)
        .with_message("this field does not exist")
        .with_option_entry(OptionKey::Of, 0)
        .with_note("a note");

    assert_eq!(
        diag.to_string(),
        "warning [W2005]: this field does not exist\n  --> of[0]\n  = note: a note"
    );
}

#[test]
fn test_display_without_target() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("nope");
    assert_eq!(diag.to_string(), "error [E1001]: nope");
}

#[test]
fn test_not_a_class() {
    let diag = not_a_class("Shape", "interface");
    assert_eq!(diag.code, ErrorCode::E1001);
    assert!(diag.is_error());
    assert!(diag.notes[0].contains("Shape"));
    assert!(diag.notes[0].contains("interface"));
}

#[test]
fn test_super_call_on_root_targets_call_super() {
    let diag = super_call_on_root("Point");
    assert!(diag.is_error());
    assert_eq!(diag.option(), Some(OptionKey::CallSuper));
    assert!(diag.message.contains("pointless"));
}

#[test]
fn test_implicit_call_super_names_superclass() {
    let diag = implicit_call_super("Base");
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.message.contains("`Base`"));
    assert!(diag.message.contains("callSuper=false"));
}

#[test]
fn test_existing_members_pluralization() {
    let with_hook = existing_members(true);
    assert!(with_hook
        .message
        .starts_with("not generating equals, hashCode and canEqual:"));

    let without_hook = existing_members(false);
    assert!(without_hook
        .message
        .starts_with("not generating equals and hashCode:"));
    assert_eq!(without_hook.target, None);
}

#[test]
fn test_mutually_exclusive_targets_exclude() {
    let diag = mutually_exclusive_field_lists();
    assert_eq!(diag.code, ErrorCode::W2003);
    assert!(diag.message.contains("mutually exclusive"));
    assert_eq!(
        diag.target,
        Some(OptionTarget {
            option: OptionKey::Exclude,
            index: None,
        })
    );
}

#[test]
fn test_unknown_field_helpers_point_at_entry() {
    let excluded = unknown_excluded_field("ghost", 1);
    assert_eq!(excluded.code, ErrorCode::W2004);
    assert_eq!(excluded.target.and_then(|t| t.index), Some(1));
    assert!(excluded.message.contains("excluded anyway"));

    let included = unknown_included_field("ghost", 0);
    assert_eq!(included.code, ErrorCode::W2005);
    assert_eq!(included.option(), Some(OptionKey::Of));
    assert_eq!(included.message, "this field does not exist");
}
