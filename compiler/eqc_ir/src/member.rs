//! Provenance of methods that already exist on the target type.

/// Whether a candidate method already exists, and who wrote it.
///
/// Variants are ordered by precedence so the governing state over several
/// candidates is simply the maximum:
/// `FoundPreviouslyGenerated > FoundUserWritten > NotFound`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExistingMemberState {
    #[default]
    NotFound,
    FoundUserWritten,
    /// Carries this system's generated-by marker; re-synthesis is a no-op.
    FoundPreviouslyGenerated,
}

impl ExistingMemberState {
    /// Governing state over a set of candidates.
    pub fn governing<I>(states: I) -> ExistingMemberState
    where
        I: IntoIterator<Item = ExistingMemberState>,
    {
        states
            .into_iter()
            .max()
            .unwrap_or(ExistingMemberState::NotFound)
    }
}
