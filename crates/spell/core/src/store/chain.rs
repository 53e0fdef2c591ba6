use crate::types::SpellId;

/// Rank chain entry of one spell.
///
/// Chains form a forest keyed by spell id. Rank numbers are only meaningful
/// along a single chain; walk `prev` to relate two spells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainNode {
    /// Previous rank, or [`SpellId::NONE`] for the first rank.
    pub prev: SpellId,
    /// First rank of the chain (the spell itself for rank 1).
    pub first: SpellId,
    /// Spell required to learn this rank.
    pub req: SpellId,
    pub rank: u8,
}

impl ChainNode {
    /// Node of the first rank of a chain.
    pub const fn first_rank(id: SpellId) -> Self {
        Self {
            prev: SpellId::NONE,
            first: id,
            req: SpellId::NONE,
            rank: 1,
        }
    }

    /// Node that follows `prev` in a chain starting at `first`.
    pub const fn next_rank(prev: SpellId, first: SpellId, rank: u8) -> Self {
        Self {
            prev,
            first,
            req: SpellId::NONE,
            rank,
        }
    }

    #[must_use]
    pub const fn with_req(mut self, req: SpellId) -> Self {
        self.req = req;
        self
    }

    #[inline]
    pub const fn is_first_rank(&self) -> bool {
        !self.prev.is_some()
    }
}
