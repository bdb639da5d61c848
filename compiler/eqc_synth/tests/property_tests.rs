//! Property-based tests for the synthesis pipeline.
//!
//! These tests generate random class shapes and options and verify:
//! 1. Determinism: the same request always yields the same result
//! 2. Coverage: equals and hashCode visit exactly the same fields, in
//!    declaration order, and never a static one
//! 3. The canEqual hook exists iff the type is open or has a real superclass
//! 4. Every hash temporary is declared before the first fold
//! 5. Re-running over the generated members is a silent no-op

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use eqc_ir::{
    Contribution, DeclaredType, EqualsOp, FieldAccess, FieldDescriptor, FieldModifiers,
    GenerationOptions, HashOp, LongOperand, OptionValue, TypeDescriptor,
};
use eqc_synth::{synthesize, MemberTable, Outcome, SkipReason, SynthConfig, SynthesisRequest};
use proptest::prelude::*;

// -- Strategies --

fn declared_type_strategy() -> impl Strategy<Value = DeclaredType> {
    let base = prop::sample::select(vec![
        "boolean", "byte", "short", "int", "long", "char", "float", "double", "String",
        "Integer", "Object",
    ]);
    (base, prop::sample::select(vec![0u8, 0, 0, 1, 2]))
        .prop_map(|(base, dimensions)| DeclaredType::array(base, dimensions))
}

fn modifiers_strategy() -> impl Strategy<Value = FieldModifiers> {
    prop::sample::select(vec![
        FieldModifiers::empty(),
        FieldModifiers::empty(),
        FieldModifiers::STATIC,
        FieldModifiers::TRANSIENT,
        FieldModifiers::SYNTHETIC,
    ])
}

fn type_strategy() -> impl Strategy<Value = TypeDescriptor> {
    let fields = prop::collection::vec((declared_type_strategy(), modifiers_strategy()), 0..8);
    let superclass = prop::sample::select(vec![None, Some("Object"), Some("Base")]);
    (fields, any::<bool>(), superclass).prop_map(|(fields, is_final, superclass)| {
        let mut ty = TypeDescriptor::class("Sample").with_final(is_final);
        if let Some(superclass) = superclass {
            ty = ty.with_superclass(superclass);
        }
        for (i, (declared, modifiers)) in fields.into_iter().enumerate() {
            let field = FieldDescriptor::new(format!("f{i}"), declared).with_modifiers(modifiers);
            ty = ty.with_field(field);
        }
        ty
    })
}

/// An optional list of field names, some of which will not exist.
fn name_list_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(
        (0usize..10).prop_map(|i| format!("f{i}")),
        0..4,
    ))
}

fn options_strategy() -> impl Strategy<Value = GenerationOptions> {
    let call_super = prop::sample::select(vec![None, Some(false), Some(true)]);
    let access = prop::sample::select(vec![FieldAccess::DirectField, FieldAccess::AccessorMethod]);
    (name_list_strategy(), name_list_strategy(), call_super, access).prop_map(
        |(include, exclude, call_super, access)| {
            let mut options = GenerationOptions::annotated().with_field_access(access);
            if let Some(include) = include {
                options = options.with_include(include);
            }
            if let Some(exclude) = exclude {
                options = options.with_exclude(exclude);
            }
            if let Some(call_super) = call_super {
                options.call_super = OptionValue::Explicit(call_super);
            }
            options
        },
    )
}

// -- Helpers --

/// Field names read by the hash folds, in fold order, resolving temporaries.
fn hashed_fields(ops: &[HashOp]) -> Vec<String> {
    let mut names = Vec::new();
    for op in ops {
        if let HashOp::Fold { contribution, .. } = op {
            match contribution {
                Contribution::SuperHash => {}
                Contribution::FoldLong(LongOperand::Temp(temp)) => {
                    let field = ops.iter().find_map(|op| match op {
                        HashOp::DeclareBitsTemp { name, field } if name == temp => {
                            Some(field.name.clone())
                        }
                        _ => None,
                    });
                    names.push(field.expect("temp is declared"));
                }
                Contribution::FoldLong(LongOperand::Field(field))
                | Contribution::FloatBits(field)
                | Contribution::BooleanChoice(field)
                | Contribution::Value(field)
                | Contribution::ArrayHash { field, .. }
                | Contribution::NullSafeHash(field) => names.push(field.name.clone()),
            }
        }
    }
    names
}

fn compared_fields(ops: &[EqualsOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            EqualsOp::CompareField { field, .. } => Some(field.name.clone()),
            _ => None,
        })
        .collect()
}

fn declaration_index(ty: &TypeDescriptor, name: &str) -> usize {
    ty.fields.iter().position(|f| f.name == name).unwrap()
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_synthesis_is_deterministic(ty in type_strategy(), options in options_strategy()) {
        let request = SynthesisRequest::annotated(ty, options);
        let config = SynthConfig::default();
        let first = synthesize(&request, &MemberTable::new(), &config);
        let second = synthesize(&request, &MemberTable::new(), &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_equals_and_hash_visit_the_same_fields(
        ty in type_strategy(),
        options in options_strategy(),
    ) {
        let request = SynthesisRequest::annotated(ty.clone(), options);
        let result = synthesize(&request, &MemberTable::new(), &SynthConfig::default());

        if let Some(methods) = result.methods() {
            let compared = compared_fields(methods.equals.equals_ops().unwrap());
            let hashed = hashed_fields(methods.hash_code.hash_ops().unwrap());
            prop_assert_eq!(&compared, &hashed);

            let indices: Vec<usize> = compared.iter().map(|n| declaration_index(&ty, n)).collect();
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));

            for name in &compared {
                prop_assert!(!ty.field(name).unwrap().is_static());
            }
        }
    }

    #[test]
    fn test_can_equal_iff_open_or_subclass(ty in type_strategy(), options in options_strategy()) {
        let expected = !ty.is_final || ty.has_real_superclass();
        let request = SynthesisRequest::annotated(ty, options);
        let result = synthesize(&request, &MemberTable::new(), &SynthConfig::default());

        if let Some(methods) = result.methods() {
            prop_assert_eq!(methods.can_equal.is_some(), expected);
            let checks_can_equal = methods
                .equals
                .equals_ops()
                .unwrap()
                .iter()
                .any(|op| matches!(op, EqualsOp::ReturnFalseUnlessCanEqual { .. }));
            prop_assert_eq!(checks_can_equal, expected);
        }
    }

    #[test]
    fn test_temps_precede_folds(ty in type_strategy(), options in options_strategy()) {
        let request = SynthesisRequest::annotated(ty, options);
        let result = synthesize(&request, &MemberTable::new(), &SynthConfig::default());

        if let Some(methods) = result.methods() {
            let ops = methods.hash_code.hash_ops().unwrap();
            let last_temp = ops.iter().rposition(|op| matches!(op, HashOp::DeclareBitsTemp { .. }));
            let first_fold = ops.iter().position(|op| matches!(op, HashOp::Fold { .. }));
            if let (Some(last_temp), Some(first_fold)) = (last_temp, first_fold) {
                prop_assert!(last_temp < first_fold);
            }
        }
    }

    #[test]
    fn test_second_pass_is_silent(ty in type_strategy(), options in options_strategy()) {
        let request = SynthesisRequest::annotated(ty, options);
        let config = SynthConfig::default();
        let first = synthesize(&request, &MemberTable::new(), &config);

        if let Some(methods) = first.methods() {
            let mut table = MemberTable::new();
            for method in methods.iter() {
                table = table.with_generated_method(method.name());
            }
            let second = synthesize(&request, &table, &config);
            prop_assert_eq!(second.outcome, Outcome::Skipped(SkipReason::PreviouslyGenerated));
            prop_assert!(second.diagnostics.is_empty());
        }
    }
}
