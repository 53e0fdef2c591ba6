//! Rank chain queries.
//!
//! Rank numbers are only comparable along one chain, so every relation is
//! confirmed by walking prev links. Walks carry a visited set and stop on the
//! first revisited spell, which keeps malformed (cyclic) chains finite.

use std::collections::HashSet;

use super::SpellEngine;
use crate::config::EngineConfig;
use crate::store::{ChainNode, SpellOracle};
use crate::types::SpellId;

impl<'a, S: SpellOracle + ?Sized> SpellEngine<'a, S> {
    pub fn chain_node(&self, id: SpellId) -> Option<&'a ChainNode> {
        self.store.chain(id)
    }

    /// First rank of the chain, or the spell itself when it has no chain.
    pub fn first_in_chain(&self, id: SpellId) -> SpellId {
        self.chain_node(id).map_or(id, |node| node.first)
    }

    /// Previous rank, or [`SpellId::NONE`].
    pub fn prev_in_chain(&self, id: SpellId) -> SpellId {
        self.chain_node(id).map_or(SpellId::NONE, |node| node.prev)
    }

    /// Rank number, or 0 for spells without a chain.
    pub fn spell_rank(&self, id: SpellId) -> u8 {
        self.chain_node(id).map_or(0, |node| node.rank)
    }

    /// True if `spell` is a higher rank of `lower` within the same chain.
    pub fn is_high_rank(&self, spell: SpellId, lower: SpellId) -> bool {
        let Some(node) = self.chain_node(spell) else {
            return false;
        };
        let lower_rank = self.spell_rank(lower);
        if lower_rank == 0 || node.rank <= lower_rank {
            return false;
        }

        let mut visited = HashSet::new();
        let mut current = Some((spell, node));
        while let Some((id, node)) = current {
            if !visited.insert(id) || visited.len() > EngineConfig::MAX_CHAIN_LENGTH {
                return false;
            }
            if node.prev == lower {
                return true;
            }
            current = self.chain_node(node.prev).map(|prev| (node.prev, prev));
        }
        false
    }

    /// Every spell reachable through next-rank links, depth first.
    pub fn higher_ranks(&self, id: SpellId) -> Vec<SpellId> {
        let mut ranks = Vec::new();
        let mut visited = HashSet::from([id]);
        self.collect_higher_ranks(id, &mut visited, &mut ranks);
        ranks
    }

    /// True if both spells belong to the same chain.
    pub fn is_rank_of(&self, spell: SpellId, other: SpellId) -> bool {
        self.first_in_chain(spell) == self.first_in_chain(other)
    }

    fn collect_higher_ranks(
        &self,
        id: SpellId,
        visited: &mut HashSet<SpellId>,
        out: &mut Vec<SpellId>,
    ) {
        for &next in self.store.next_ranks(id) {
            if visited.insert(next) {
                out.push(next);
                self.collect_higher_ranks(next, visited, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SpellStore;
    use crate::types::SpellDescriptor;

    fn store(ids: &[u32]) -> crate::store::SpellStoreBuilder {
        SpellStore::builder().spells(ids.iter().map(|&id| SpellDescriptor::builder(id).build()))
    }

    #[test]
    fn high_rank_requires_same_chain() {
        let store = store(&[1, 2, 3, 10, 11])
            .rank_chain(&[SpellId(1), SpellId(2), SpellId(3)])
            .rank_chain(&[SpellId(10), SpellId(11)])
            .build()
            .unwrap();
        let engine = SpellEngine::new(&store);

        assert!(engine.is_high_rank(SpellId(3), SpellId(1)));
        assert!(engine.is_high_rank(SpellId(2), SpellId(1)));
        assert!(!engine.is_high_rank(SpellId(1), SpellId(3)));
        assert!(!engine.is_high_rank(SpellId(3), SpellId(10)));
        assert!(!engine.is_high_rank(SpellId(11), SpellId(1)));
        assert!(engine.is_rank_of(SpellId(3), SpellId(1)));
        assert!(!engine.is_rank_of(SpellId(3), SpellId(11)));
        assert_eq!(engine.first_in_chain(SpellId(99)), SpellId(99));
        assert_eq!(engine.prev_in_chain(SpellId(2)), SpellId(1));
    }

    #[test]
    fn higher_ranks_walks_branches() {
        let store = store(&[1, 2, 3, 4])
            .rank_chain(&[SpellId(1), SpellId(2), SpellId(3)])
            .chain(SpellId(4), ChainNode::next_rank(SpellId(1), SpellId(1), 2))
            .build()
            .unwrap();
        let engine = SpellEngine::new(&store);
        assert_eq!(
            engine.higher_ranks(SpellId(1)),
            vec![SpellId(2), SpellId(3), SpellId(4)]
        );
        assert!(engine.higher_ranks(SpellId(3)).is_empty());
    }

    #[test]
    fn cyclic_chains_terminate() {
        let store = store(&[1, 2, 3, 5])
            .chain(SpellId(5), ChainNode::first_rank(SpellId(5)))
            .chain(SpellId(1), ChainNode::next_rank(SpellId(3), SpellId(1), 3))
            .chain(SpellId(2), ChainNode::next_rank(SpellId(1), SpellId(1), 1))
            .chain(SpellId(3), ChainNode::next_rank(SpellId(2), SpellId(1), 2))
            .build()
            .unwrap();
        let engine = SpellEngine::new(&store);

        assert!(!engine.is_high_rank(SpellId(1), SpellId(5)));
        assert!(engine.is_high_rank(SpellId(1), SpellId(2)));
        assert_eq!(engine.higher_ranks(SpellId(1)).len(), 2);
    }
}
