//! hashCode synthesis.
//!
//! The body folds one 32-bit contribution per participating field into an
//! accumulator:
//!
//! ```text
//! final int PRIME = 31;
//! int result = 1;
//! final long temp1 = <bits of the first double field>;
//! result = result * PRIME + <super hash>;      // only with callSuper
//! result = result * PRIME + <field contribution>;
//! return result;
//! ```
//!
//! Double fields need their bits in a temporary because the long fold reads
//! the value twice. All temporaries are declared before the first fold.

use eqc_ir::{
    ArrayMode, Contribution, GeneratedMethod, HashOp, LongOperand, MethodBody, MethodKind,
    TypeClassification, HASH_MULTIPLIER, HASH_SEED,
};
use tracing::trace;

use crate::fields::SelectedField;
use crate::SynthConfig;

/// Build `hashCode` over `fields`, prefixed by the superclass hash when
/// `call_super` is set.
pub fn synthesize_hash_code(
    fields: &[SelectedField<'_>],
    call_super: bool,
    config: &SynthConfig,
) -> GeneratedMethod {
    let naming = &config.naming;
    let mut ops = Vec::with_capacity(fields.len() * 2 + 4);

    if call_super || !fields.is_empty() || !config.omit_unused_multiplier {
        ops.push(HashOp::DeclareMultiplier {
            name: naming.multiplier.clone(),
            value: HASH_MULTIPLIER,
        });
    }
    ops.push(HashOp::DeclareAccumulator {
        name: naming.accumulator.clone(),
        seed: HASH_SEED,
    });

    let mut contributions = Vec::with_capacity(fields.len() + 1);
    if call_super {
        contributions.push(Contribution::SuperHash);
    }

    let mut temps = 0;
    for field in fields {
        let field_ref = field.field_ref();
        let contribution = match field.classification {
            TypeClassification::Boolean => Contribution::BooleanChoice(field_ref),
            TypeClassification::Float => Contribution::FloatBits(field_ref),
            TypeClassification::Double => {
                temps += 1;
                let name = naming.temp(temps);
                ops.push(HashOp::DeclareBitsTemp {
                    name: name.clone(),
                    field: field_ref,
                });
                Contribution::FoldLong(LongOperand::Temp(name))
            }
            TypeClassification::Long => Contribution::FoldLong(LongOperand::Field(field_ref)),
            TypeClassification::OtherPrimitive(_) => Contribution::Value(field_ref),
            TypeClassification::Array {
                element,
                dimensions,
            } => Contribution::ArrayHash {
                field: field_ref,
                mode: ArrayMode::select(element, dimensions),
            },
            TypeClassification::Reference => Contribution::NullSafeHash(field_ref),
        };
        contributions.push(contribution);
    }

    trace!(
        contributions = contributions.len(),
        temps,
        "built hashCode contributions"
    );

    ops.extend(contributions.into_iter().map(|contribution| HashOp::Fold {
        accumulator: naming.accumulator.clone(),
        multiplier: naming.multiplier.clone(),
        contribution,
    }));
    ops.push(HashOp::ReturnAccumulator {
        name: naming.accumulator.clone(),
    });

    GeneratedMethod {
        kind: MethodKind::HashCode,
        parameter: None,
        is_override: true,
        body: MethodBody::HashCode(ops),
    }
}

#[cfg(test)]
mod tests;
