//! In-memory [`SpellOracle`] backed by a descriptor arena.
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::{ChainNode, LookupError, SpellOracle, StoreError};
use crate::config::EngineConfig;
use crate::engine::{ElixirMask, SpellSpecific};
use crate::types::{SpellDescriptor, SpellId};

/// Load-once registry of spell descriptors.
///
/// Descriptors live in an arena indexed through an id map. Chain links, the
/// reverse next-rank map and the classification tables are resolved once by
/// [`SpellStoreBuilder::build`] and never change afterwards.
#[derive(Clone, Debug, Default)]
pub struct SpellStore {
    spells: Vec<SpellDescriptor>,
    index: HashMap<SpellId, usize>,
    chains: HashMap<SpellId, ChainNode>,
    next_ranks: HashMap<SpellId, Vec<SpellId>>,
    elixirs: HashMap<SpellId, ElixirMask>,
    specifics: HashMap<SpellId, SpellSpecific>,
}

impl SpellStore {
    pub fn builder() -> SpellStoreBuilder {
        SpellStoreBuilder::new()
    }

    /// Looks up a descriptor, reporting missing ids as an error.
    pub fn get(&self, id: SpellId) -> Result<&SpellDescriptor, LookupError> {
        self.spell(id).ok_or(LookupError::SpellNotFound(id))
    }

    pub fn contains(&self, id: SpellId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Iterates over descriptors in load order.
    pub fn iter(&self) -> impl Iterator<Item = &SpellDescriptor> + '_ {
        self.spells.iter()
    }

    /// Returns the first spell whose prev-rank walk revisits a spell.
    fn find_chain_cycle(&self) -> Option<SpellId> {
        let mut ids: Vec<SpellId> = self.chains.keys().copied().collect();
        ids.sort_unstable();

        for start in ids {
            let mut visited = HashSet::new();
            let mut current = start;
            while current.is_some() {
                if !visited.insert(current) {
                    return Some(start);
                }
                current = self.chains.get(&current).map_or(SpellId::NONE, |node| node.prev);
            }
        }
        None
    }

    fn report_unhandled_targets(&self) {
        for spell in &self.spells {
            for (index, effect) in spell.active_effects() {
                for mode in [effect.target_a, effect.target_b] {
                    if mode.is_unclassified() {
                        warn!(
                            spell_id = spell.id.0,
                            effect_index = %index,
                            target = ?mode,
                            "unhandled target mode, classified as positive"
                        );
                    }
                }
            }
        }
    }
}

impl SpellOracle for SpellStore {
    fn spell(&self, id: SpellId) -> Option<&SpellDescriptor> {
        self.index.get(&id).map(|&slot| &self.spells[slot])
    }

    fn chain(&self, id: SpellId) -> Option<&ChainNode> {
        self.chains.get(&id)
    }

    fn next_ranks(&self, id: SpellId) -> &[SpellId] {
        self.next_ranks
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn elixir_mask(&self, id: SpellId) -> ElixirMask {
        self.elixirs.get(&id).copied().unwrap_or_default()
    }

    fn specific_override(&self, id: SpellId) -> Option<SpellSpecific> {
        self.specifics.get(&id).copied()
    }
}

/// Collects descriptors and tables, then validates them into a [`SpellStore`].
#[derive(Clone, Debug, Default)]
pub struct SpellStoreBuilder {
    spells: Vec<SpellDescriptor>,
    chains: Vec<(SpellId, ChainNode)>,
    elixirs: HashMap<SpellId, ElixirMask>,
    specifics: HashMap<SpellId, SpellSpecific>,
    strict_chains: bool,
}

impl SpellStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the load-time options of `config`.
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.strict_chains = config.strict_chains;
        self
    }

    pub fn strict_chains(mut self, strict: bool) -> Self {
        self.strict_chains = strict;
        self
    }

    pub fn spell(mut self, spell: SpellDescriptor) -> Self {
        self.spells.push(spell);
        self
    }

    pub fn spells(mut self, spells: impl IntoIterator<Item = SpellDescriptor>) -> Self {
        self.spells.extend(spells);
        self
    }

    pub fn chain(mut self, id: SpellId, node: ChainNode) -> Self {
        self.chains.push((id, node));
        self
    }

    /// Links `ranks` into one chain, lowest rank first.
    pub fn rank_chain(mut self, ranks: &[SpellId]) -> Self {
        let Some(&first) = ranks.first() else {
            return self;
        };
        self.chains.push((first, ChainNode::first_rank(first)));
        for (position, pair) in ranks.windows(2).enumerate() {
            let rank = u8::try_from(position + 2).unwrap_or(u8::MAX);
            self.chains
                .push((pair[1], ChainNode::next_rank(pair[0], first, rank)));
        }
        self
    }

    pub fn elixir(mut self, id: SpellId, mask: ElixirMask) -> Self {
        self.elixirs.insert(id, mask);
        self
    }

    /// Assigns a specific that cannot be derived from the descriptor.
    pub fn specific(mut self, id: SpellId, specific: SpellSpecific) -> Self {
        self.specifics.insert(id, specific);
        self
    }

    pub fn build(self) -> Result<SpellStore, StoreError> {
        let mut spells = Vec::with_capacity(self.spells.len());
        let mut index = HashMap::with_capacity(self.spells.len());
        for spell in self.spells {
            if index.insert(spell.id, spells.len()).is_some() {
                return Err(StoreError::DuplicateSpell(spell.id));
            }
            spells.push(spell);
        }

        let mut chains = HashMap::with_capacity(self.chains.len());
        let mut next_ranks: HashMap<SpellId, Vec<SpellId>> = HashMap::new();
        for (id, node) in self.chains {
            for linked in [id, node.prev, node.first, node.req] {
                if linked.is_some() && !index.contains_key(&linked) {
                    return Err(StoreError::UnknownChainReference {
                        spell: id,
                        missing: linked,
                    });
                }
            }
            if node.prev.is_some() {
                next_ranks.entry(node.prev).or_default().push(id);
            }
            chains.insert(id, node);
        }
        for ranks in next_ranks.values_mut() {
            ranks.sort_unstable();
            ranks.dedup();
        }

        let store = SpellStore {
            spells,
            index,
            chains,
            next_ranks,
            elixirs: self.elixirs,
            specifics: self.specifics,
        };

        if let Some(spell) = store.find_chain_cycle() {
            if self.strict_chains {
                return Err(StoreError::ChainCycle(spell));
            }
            warn!(spell_id = spell.0, "rank chain contains a cycle");
        }
        store.report_unhandled_targets();

        debug!(
            spells = store.spells.len(),
            chains = store.chains.len(),
            "spell store built"
        );
        Ok(store)
    }
}
