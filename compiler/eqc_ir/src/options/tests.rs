use super::*;

#[test]
fn test_default_option_value_resolves_to_fallback() {
    let unset: OptionValue<bool> = OptionValue::Default;
    assert_eq!(unset.explicit(), None);
    assert!(unset.resolve(true));
    assert!(!unset.resolve(false));
}

#[test]
fn test_explicit_option_value_wins() {
    let set = OptionValue::Explicit(false);
    assert_eq!(set.explicit(), Some(&false));
    assert!(!set.resolve(true));
}

#[test]
fn test_annotated_options_warn_and_use_accessors() {
    let opts = GenerationOptions::annotated();
    assert!(opts.warn_on_existing);
    assert_eq!(opts.field_access, FieldAccess::AccessorMethod);
    assert_eq!(opts.call_super, OptionValue::Default);
    assert_eq!(opts, GenerationOptions::default());
}

#[test]
fn test_implied_options_stay_quiet() {
    let opts = GenerationOptions::implied();
    assert!(!opts.warn_on_existing);
    assert_eq!(opts.include, OptionValue::Default);
    assert_eq!(opts.exclude, OptionValue::Default);
}

#[test]
fn test_builders_mark_values_explicit() {
    let opts = GenerationOptions::annotated()
        .with_exclude(["x"])
        .with_include(["y"])
        .with_call_super(true)
        .with_field_access(FieldAccess::DirectField);

    assert_eq!(opts.exclude, OptionValue::Explicit(vec!["x".to_string()]));
    assert_eq!(opts.include, OptionValue::Explicit(vec!["y".to_string()]));
    assert_eq!(opts.call_super, OptionValue::Explicit(true));
    assert_eq!(opts.field_access, FieldAccess::DirectField);
}

#[test]
fn test_option_keys_use_annotation_spelling() {
    assert_eq!(OptionKey::Exclude.to_string(), "exclude");
    assert_eq!(OptionKey::Of.to_string(), "of");
    assert_eq!(OptionKey::CallSuper.to_string(), "callSuper");
}
