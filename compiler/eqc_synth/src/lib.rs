//! EQC Synth - equality-contract synthesis.
//!
//! Given a [`TypeDescriptor`](eqc_ir::TypeDescriptor) and its
//! [`GenerationOptions`](eqc_ir::GenerationOptions), produces the abstract
//! bodies of `equals`, `hashCode` and (when needed) `canEqual`, or explains
//! through diagnostics why nothing was produced.
//!
//! # Pipeline
//!
//! One request runs these stages in order. Each stage either passes its
//! result on or ends the request.
//!
//! 1. **Kind check**: only classes are eligible (fatal error otherwise)
//! 2. **Implied-request suppression**: an implied request yields to an
//!    explicit one on the same type
//! 3. **Option check** ([`fields`]): bad `exclude`/`of` entries, held as
//!    warnings
//! 4. **Superclass policy** ([`superclass`]): resolves `callSuper`
//! 5. **Existing-member guard** ([`members`]): all or nothing
//! 6. **Field selection** ([`fields`]): participating fields in declaration
//!    order, each classified ([`classify`]) and given a read path ([`access`])
//! 7. **canEqual policy** ([`can_equal`])
//! 8. **Synthesis** ([`equals`], [`hash_code`], [`can_equal`])
//!
//! [`synthesize`] runs the whole pipeline; [`synthesize_batch`] runs it for
//! many independent types in parallel.
//!
//! # Diagnostics
//!
//! Nothing is reported directly. Every diagnostic lands in the returned
//! [`SynthesisResult`] in emission order, and a request that was skipped
//! silently carries none at all.

pub mod access;
pub mod can_equal;
pub mod classify;
mod config;
pub mod equals;
pub mod fields;
pub mod hash_code;
pub mod members;
mod pipeline;
pub mod superclass;

use std::sync::Once;

pub use config::SynthConfig;
pub use fields::{check_field_options, select_fields, SelectedField};
pub use members::{MemberDecision, MemberLookup, MemberTable};
pub use pipeline::{
    synthesize, synthesize_batch, Outcome, RequestOrigin, SkipReason, SynthesisRequest,
    SynthesisResult,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Hosts without a subscriber of their own call this once at startup,
/// before the first [`synthesize`]. Does nothing when `RUST_LOG` is unset,
/// and nothing on second and later calls.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
