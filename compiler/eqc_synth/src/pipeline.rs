//! The synthesis pipeline: one request in, methods or diagnostics out.

use eqc_diagnostic::{existing_members, not_a_class, Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use eqc_ir::{GeneratedMethods, GenerationOptions, TypeDescriptor};
use rayon::prelude::*;
use tracing::debug;

use crate::can_equal::{synthesize_can_equal, type_needs_can_equal};
use crate::equals::synthesize_equals;
use crate::fields::{check_field_options, select_fields};
use crate::hash_code::synthesize_hash_code;
use crate::members::{check_existing_members, MemberDecision, MemberLookup};
use crate::superclass::resolve_call_super;
use crate::SynthConfig;

/// Where a request came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RequestOrigin {
    /// The user asked for equality methods on this type directly.
    #[default]
    Annotation,
    /// An aggregate data annotation implies the request.
    Implied,
}

/// One type to synthesize equality methods for.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SynthesisRequest {
    pub ty: TypeDescriptor,
    pub options: GenerationOptions,
    pub origin: RequestOrigin,
}

impl SynthesisRequest {
    /// An explicit request.
    pub fn annotated(ty: TypeDescriptor, options: GenerationOptions) -> Self {
        SynthesisRequest {
            ty,
            options,
            origin: RequestOrigin::Annotation,
        }
    }

    /// An implied request with the implied-request defaults.
    pub fn implied(ty: TypeDescriptor) -> Self {
        SynthesisRequest {
            ty,
            options: GenerationOptions::implied(),
            origin: RequestOrigin::Implied,
        }
    }
}

/// Why a request produced nothing without an error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SkipReason {
    /// The methods came from an earlier synthesis pass.
    PreviouslyGenerated,
    /// The user wrote at least one of the methods.
    UserWritten,
    /// Implied request on a type that also has an explicit one.
    ExplicitRequestPresent,
}

/// The end state of one request.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Outcome {
    Generated(GeneratedMethods),
    Skipped(SkipReason),
    /// A fatal error was reported; nothing is generated.
    Aborted(ErrorGuaranteed),
}

/// Outcome plus the diagnostics reported on the way, in emission order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SynthesisResult {
    pub outcome: Outcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl SynthesisResult {
    pub fn methods(&self) -> Option<&GeneratedMethods> {
        match &self.outcome {
            Outcome::Generated(methods) => Some(methods),
            Outcome::Skipped(_) | Outcome::Aborted(_) => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.outcome, Outcome::Generated(_))
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Run the full pipeline for one request.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(ty = %request.ty.name, origin = ?request.origin)
)]
pub fn synthesize(
    request: &SynthesisRequest,
    lookup: &dyn MemberLookup,
    config: &SynthConfig,
) -> SynthesisResult {
    let mut queue = DiagnosticQueue::new();
    let outcome = run(request, lookup, config, &mut queue);
    debug!(?outcome, diagnostics = queue.len(), "synthesis finished");
    SynthesisResult {
        outcome,
        diagnostics: queue.flush(),
    }
}

/// Run independent requests in parallel.
///
/// Results are in input order. Each request has its own diagnostics; no
/// state is shared between them.
pub fn synthesize_batch<L>(
    requests: &[(SynthesisRequest, L)],
    config: &SynthConfig,
) -> Vec<SynthesisResult>
where
    L: MemberLookup + Sync,
{
    requests
        .par_iter()
        .map(|(request, lookup)| synthesize(request, lookup, config))
        .collect()
}

fn run(
    request: &SynthesisRequest,
    lookup: &dyn MemberLookup,
    config: &SynthConfig,
    queue: &mut DiagnosticQueue,
) -> Outcome {
    let ty = &request.ty;
    let options = &request.options;

    if !ty.is_class_like() {
        let kind = format!("an {}", ty.kind);
        return Outcome::Aborted(queue.emit_error(not_a_class(&ty.name, &kind)));
    }

    if request.origin == RequestOrigin::Implied && lookup.has_explicit_request() {
        debug!("explicit request present, implied request yields");
        return Outcome::Skipped(SkipReason::ExplicitRequestPresent);
    }

    let option_warnings = check_field_options(ty, options);
    let resolution = match resolve_call_super(ty, &options.call_super) {
        Ok(resolution) => resolution,
        Err(diag) => {
            report(queue, option_warnings);
            return Outcome::Aborted(queue.emit_error(diag));
        }
    };
    let needs_can_equal = type_needs_can_equal(ty);

    // Held warnings are dropped on a re-run over generated members.
    match check_existing_members(lookup) {
        MemberDecision::Generate => {}
        MemberDecision::SkipPreviouslyGenerated => {
            return Outcome::Skipped(SkipReason::PreviouslyGenerated);
        }
        MemberDecision::SkipUserWritten => {
            report(queue, option_warnings);
            report(queue, resolution.implicit_warning);
            if options.warn_on_existing {
                queue.warn(existing_members(needs_can_equal));
            }
            return Outcome::Skipped(SkipReason::UserWritten);
        }
    }

    report(queue, option_warnings);
    report(queue, resolution.implicit_warning);

    let fields = select_fields(ty, options);
    let naming = &config.naming;

    Outcome::Generated(GeneratedMethods {
        equals: synthesize_equals(ty, &fields, resolution.call_super, needs_can_equal, naming),
        can_equal: needs_can_equal.then(|| synthesize_can_equal(ty, naming)),
        hash_code: synthesize_hash_code(&fields, resolution.call_super, config),
    })
}

fn report(queue: &mut DiagnosticQueue, warnings: impl IntoIterator<Item = Diagnostic>) {
    for warning in warnings {
        queue.warn(warning);
    }
}
