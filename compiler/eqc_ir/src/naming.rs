//! Identifier texts used inside generated bodies.

/// Names of the locals and parameters the synthesizers introduce.
///
/// Collision avoidance with user-declared names is the host's concern; a host
/// that knows a name is taken supplies a different policy.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamingPolicy {
    /// Parameter of `equals`.
    pub equals_parameter: String,
    /// Type-narrowed alias of the `equals` argument.
    pub narrowed_alias: String,
    /// Parameter of `canEqual`.
    pub can_equal_parameter: String,
    /// Hash multiplier constant.
    pub multiplier: String,
    /// Hash accumulator.
    pub accumulator: String,
    /// Prefix of numbered temporaries; the first temp is `{prefix}1`.
    pub temp_prefix: String,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        NamingPolicy {
            equals_parameter: "o".to_string(),
            narrowed_alias: "other".to_string(),
            can_equal_parameter: "other".to_string(),
            multiplier: "PRIME".to_string(),
            accumulator: "result".to_string(),
            temp_prefix: "temp".to_string(),
        }
    }
}

impl NamingPolicy {
    /// Name of the `n`th temporary (1-based).
    pub fn temp(&self, n: usize) -> String {
        format!("{}{n}", self.temp_prefix)
    }
}
