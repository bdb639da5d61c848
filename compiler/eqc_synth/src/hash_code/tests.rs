use super::*;
use eqc_ir::{DeclaredType, FieldAccess, FieldDescriptor, FieldRef, NamingPolicy};
use pretty_assertions::assert_eq;

fn direct(fields: &[FieldDescriptor]) -> Vec<SelectedField<'_>> {
    fields
        .iter()
        .map(|f| SelectedField::new(f, FieldAccess::DirectField))
        .collect()
}

fn fold(contribution: Contribution) -> HashOp {
    HashOp::Fold {
        accumulator: "result".to_string(),
        multiplier: "PRIME".to_string(),
        contribution,
    }
}

fn prologue() -> Vec<HashOp> {
    vec![
        HashOp::DeclareMultiplier {
            name: "PRIME".to_string(),
            value: 31,
        },
        HashOp::DeclareAccumulator {
            name: "result".to_string(),
            seed: 1,
        },
    ]
}

fn epilogue() -> HashOp {
    HashOp::ReturnAccumulator {
        name: "result".to_string(),
    }
}

#[test]
fn test_two_ints() {
    let fields = [
        FieldDescriptor::new("x", DeclaredType::named("int")),
        FieldDescriptor::new("y", DeclaredType::named("int")),
    ];
    let method = synthesize_hash_code(&direct(&fields), false, &SynthConfig::default());

    let mut expected = prologue();
    expected.push(fold(Contribution::Value(FieldRef::direct("x"))));
    expected.push(fold(Contribution::Value(FieldRef::direct("y"))));
    expected.push(epilogue());

    assert_eq!(method.kind, MethodKind::HashCode);
    assert!(method.is_override);
    assert_eq!(method.parameter, None);
    assert_eq!(method.hash_ops(), Some(expected.as_slice()));
}

#[test]
fn test_temps_precede_folds_and_super_comes_first() {
    let fields = [
        FieldDescriptor::new("a", DeclaredType::named("double")),
        FieldDescriptor::new("n", DeclaredType::named("long")),
        FieldDescriptor::new("b", DeclaredType::named("double")),
    ];
    let method = synthesize_hash_code(&direct(&fields), true, &SynthConfig::default());

    let mut expected = prologue();
    expected.push(HashOp::DeclareBitsTemp {
        name: "temp1".to_string(),
        field: FieldRef::direct("a"),
    });
    expected.push(HashOp::DeclareBitsTemp {
        name: "temp2".to_string(),
        field: FieldRef::direct("b"),
    });
    expected.push(fold(Contribution::SuperHash));
    expected.push(fold(Contribution::FoldLong(LongOperand::Temp(
        "temp1".to_string(),
    ))));
    expected.push(fold(Contribution::FoldLong(LongOperand::Field(
        FieldRef::direct("n"),
    ))));
    expected.push(fold(Contribution::FoldLong(LongOperand::Temp(
        "temp2".to_string(),
    ))));
    expected.push(epilogue());

    assert_eq!(method.hash_ops(), Some(expected.as_slice()));
}

#[test]
fn test_contribution_per_classification() {
    let fields = [
        FieldDescriptor::new("on", DeclaredType::named("boolean")),
        FieldDescriptor::new("f", DeclaredType::named("float")),
        FieldDescriptor::new("c", DeclaredType::named("char")),
        FieldDescriptor::new("s", DeclaredType::named("String")),
        FieldDescriptor::new("bytes", DeclaredType::array("byte", 1)),
        FieldDescriptor::new("names", DeclaredType::array("String", 1)),
    ];
    let method = synthesize_hash_code(&direct(&fields), false, &SynthConfig::default());
    let ops = method.hash_ops().unwrap_or_default();

    let contributions: Vec<&Contribution> = ops
        .iter()
        .filter_map(|op| match op {
            HashOp::Fold { contribution, .. } => Some(contribution),
            _ => None,
        })
        .collect();

    assert_eq!(
        contributions,
        [
            &Contribution::BooleanChoice(FieldRef::direct("on")),
            &Contribution::FloatBits(FieldRef::direct("f")),
            &Contribution::Value(FieldRef::direct("c")),
            &Contribution::NullSafeHash(FieldRef::direct("s")),
            &Contribution::ArrayHash {
                field: FieldRef::direct("bytes"),
                mode: ArrayMode::Shallow,
            },
            &Contribution::ArrayHash {
                field: FieldRef::direct("names"),
                mode: ArrayMode::Deep,
            },
        ]
    );
}

#[test]
fn test_empty_body_omits_multiplier() {
    let method = synthesize_hash_code(&[], false, &SynthConfig::default());
    assert_eq!(
        method.hash_ops(),
        Some(
            [
                HashOp::DeclareAccumulator {
                    name: "result".to_string(),
                    seed: 1,
                },
                epilogue(),
            ]
            .as_slice()
        )
    );
}

#[test]
fn test_multiplier_kept_when_configured() {
    let config = SynthConfig::default().with_omit_unused_multiplier(false);
    let method = synthesize_hash_code(&[], false, &config);
    let mut expected = prologue();
    expected.push(epilogue());
    assert_eq!(method.hash_ops(), Some(expected.as_slice()));
}

#[test]
fn test_super_only_keeps_multiplier() {
    let method = synthesize_hash_code(&[], true, &SynthConfig::default());
    let mut expected = prologue();
    expected.push(fold(Contribution::SuperHash));
    expected.push(epilogue());
    assert_eq!(method.hash_ops(), Some(expected.as_slice()));
}

#[test]
fn test_naming_policy_is_honored() {
    let naming = NamingPolicy {
        multiplier: "M".to_string(),
        accumulator: "h".to_string(),
        temp_prefix: "$t".to_string(),
        ..NamingPolicy::default()
    };
    let fields = [FieldDescriptor::new("d", DeclaredType::named("double"))];
    let config = SynthConfig::default().with_naming(naming);
    let method = synthesize_hash_code(&direct(&fields), false, &config);

    assert_eq!(
        method.hash_ops(),
        Some(
            [
                HashOp::DeclareMultiplier {
                    name: "M".to_string(),
                    value: 31,
                },
                HashOp::DeclareAccumulator {
                    name: "h".to_string(),
                    seed: 1,
                },
                HashOp::DeclareBitsTemp {
                    name: "$t1".to_string(),
                    field: FieldRef::direct("d"),
                },
                HashOp::Fold {
                    accumulator: "h".to_string(),
                    multiplier: "M".to_string(),
                    contribution: Contribution::FoldLong(LongOperand::Temp("$t1".to_string())),
                },
                HashOp::ReturnAccumulator {
                    name: "h".to_string(),
                },
            ]
            .as_slice()
        )
    );
}
