//! Existing-member guard.
//!
//! The three methods are generated all together or not at all. If any of
//! `equals`, `hashCode` or `canEqual` already exists on the type, nothing is
//! generated; what the user hears about it depends on where the existing
//! method came from.

use eqc_ir::{ExistingMemberState, MethodKind};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Host-side view of the members already present on the target type.
pub trait MemberLookup {
    /// Whether a method named `method_name` already exists, and who wrote it.
    fn member_state(&self, method_name: &str) -> ExistingMemberState;

    /// Whether the type also carries an explicit equality request.
    ///
    /// Only consulted for implied requests, which yield to explicit ones.
    fn has_explicit_request(&self) -> bool {
        false
    }
}

impl<T: MemberLookup + ?Sized> MemberLookup for &T {
    fn member_state(&self, method_name: &str) -> ExistingMemberState {
        (**self).member_state(method_name)
    }

    fn has_explicit_request(&self) -> bool {
        (**self).has_explicit_request()
    }
}

/// A [`MemberLookup`] backed by a name table.
///
/// Names not in the table are [`ExistingMemberState::NotFound`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct MemberTable {
    members: FxHashMap<String, ExistingMemberState>,
    explicit_request: bool,
}

impl MemberTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a method. A later insert for the same name replaces the earlier.
    pub fn insert(&mut self, method_name: impl Into<String>, state: ExistingMemberState) {
        self.members.insert(method_name.into(), state);
    }

    #[must_use]
    pub fn with_user_method(mut self, method_name: impl Into<String>) -> Self {
        self.insert(method_name, ExistingMemberState::FoundUserWritten);
        self
    }

    #[must_use]
    pub fn with_generated_method(mut self, method_name: impl Into<String>) -> Self {
        self.insert(method_name, ExistingMemberState::FoundPreviouslyGenerated);
        self
    }

    #[must_use]
    pub fn with_explicit_request(mut self) -> Self {
        self.explicit_request = true;
        self
    }
}

impl MemberLookup for MemberTable {
    fn member_state(&self, method_name: &str) -> ExistingMemberState {
        self.members
            .get(method_name)
            .copied()
            .unwrap_or(ExistingMemberState::NotFound)
    }

    fn has_explicit_request(&self) -> bool {
        self.explicit_request
    }
}

/// What the guard decided.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemberDecision {
    /// None of the methods exist.
    Generate,
    /// A previous synthesis pass already produced them. Nothing to say.
    SkipPreviouslyGenerated,
    /// The user wrote at least one of them.
    SkipUserWritten,
}

/// Check all three candidate methods and decide.
///
/// `canEqual` is checked even for types that would not get one: a
/// user-written `canEqual` signals hand-written equality.
pub fn check_existing_members(lookup: &dyn MemberLookup) -> MemberDecision {
    let governing = ExistingMemberState::governing(
        MethodKind::ALL
            .iter()
            .map(|kind| lookup.member_state(kind.method_name())),
    );

    let decision = match governing {
        ExistingMemberState::NotFound => MemberDecision::Generate,
        ExistingMemberState::FoundPreviouslyGenerated => MemberDecision::SkipPreviouslyGenerated,
        ExistingMemberState::FoundUserWritten => MemberDecision::SkipUserWritten,
    };
    debug!(?governing, ?decision, "checked existing members");
    decision
}
