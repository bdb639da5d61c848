//! EQC IR - type model and abstract method-body IR.
//!
//! This crate contains the data structures shared by every stage of the
//! equality-contract synthesizer:
//!
//! - **Input model**: [`TypeDescriptor`], [`FieldDescriptor`], [`DeclaredType`]
//!   as produced by a host's source introspection layer
//! - **Options**: [`GenerationOptions`] with explicit/default tagging
//!   ([`OptionValue`]) so no stage has to re-derive user intent
//! - **Classification**: [`TypeClassification`] driving per-field rules
//! - **Existing members**: [`ExistingMemberState`] with provenance
//! - **Output IR**: [`GeneratedMethods`] made of [`EqualsOp`], [`HashOp`] and
//!   [`CanEqualBody`] operation sequences
//!
//! # Design Philosophy
//!
//! - **Host independent**: nothing here knows about a specific compiler's
//!   tree nodes. Hosts map the output ops onto their own syntax.
//! - **Immutable snapshots**: every input type is plain data, built fresh per
//!   synthesis request and only ever read.
//! - **Names are policy**: generated identifiers come from [`NamingPolicy`],
//!   never from string constants inside the synthesizers.

mod classification;
mod member;
pub mod method;
mod model;
mod naming;
mod options;

pub use classification::{ArrayMode, ElementClass, FloatWidth, Primitive, TypeClassification};
pub use member::ExistingMemberState;
pub use method::{
    CanEqualBody, Contribution, EqualsOp, FieldComparison, FieldRead, FieldRef, GeneratedMethod,
    GeneratedMethods, HashOp, LongOperand, MethodBody, MethodKind, BOOLEAN_FALSE_HASH,
    BOOLEAN_TRUE_HASH, HASH_MULTIPLIER, HASH_SEED,
};
pub use model::{
    DeclaredType, FieldDescriptor, FieldModifiers, TypeDescriptor, TypeKind, TypeName,
    ROOT_TYPE_NAMES,
};
pub use naming::NamingPolicy;
pub use options::{FieldAccess, GenerationOptions, OptionKey, OptionValue};
