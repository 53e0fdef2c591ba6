/// Engine configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// How many levels a trigger effect may follow into the spells it casts
    /// before it is treated as positive without further inspection.
    pub trigger_depth: u8,

    /// Reject spell chains containing prev-rank cycles when the store is built.
    /// When disabled, cycles are tolerated and every rank walk stops at the
    /// first revisited spell.
    pub strict_chains: bool,
}

impl EngineConfig {
    // ===== compile-time constants =====
    /// Number of effect slots per spell.
    pub const MAX_EFFECT_INDEX: usize = 3;
    /// Upper bound of similar (candidate, existing) slot pairs between two spells.
    pub const MAX_SIMILAR_PAIRS: usize = Self::MAX_EFFECT_INDEX * Self::MAX_EFFECT_INDEX;
    /// Safety bound for walks over rank chains.
    pub const MAX_CHAIN_LENGTH: usize = 64;
    /// Triggered spells tracked by one polarity walk; covers every `trigger_depth`.
    pub const MAX_TRIGGER_TRAIL: usize = u8::MAX as usize;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TRIGGER_DEPTH: u8 = 1;
    pub const DEFAULT_STRICT_CHAINS: bool = false;

    pub fn new() -> Self {
        Self {
            trigger_depth: Self::DEFAULT_TRIGGER_DEPTH,
            strict_chains: Self::DEFAULT_STRICT_CHAINS,
        }
    }

    #[must_use]
    pub fn with_trigger_depth(mut self, trigger_depth: u8) -> Self {
        self.trigger_depth = trigger_depth;
        self
    }

    #[must_use]
    pub fn with_strict_chains(mut self, strict_chains: bool) -> Self {
        self.strict_chains = strict_chains;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
