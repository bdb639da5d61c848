//! Synthesis configuration shared by every request of a host.

use eqc_ir::NamingPolicy;

/// Host-level knobs that are not part of any one request's options.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SynthConfig {
    /// Identifier texts of generated locals and parameters.
    pub naming: NamingPolicy,
    /// Leave out the multiplier declaration when no fold would use it
    /// (no fields and no superclass call).
    pub omit_unused_multiplier: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            naming: NamingPolicy::default(),
            omit_unused_multiplier: true,
        }
    }
}

impl SynthConfig {
    #[must_use]
    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn with_omit_unused_multiplier(mut self, omit: bool) -> Self {
        self.omit_unused_multiplier = omit;
        self
    }
}
