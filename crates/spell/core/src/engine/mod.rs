//! Spell/aura interaction resolution.
//!
//! [`SpellEngine`] borrows a [`SpellOracle`] and answers pure queries:
//!
//! - [`polarity`]: is an effect beneficial or harmful
//! - [`similarity`]: which slots of two spells describe the same mechanism
//! - [`stacking`]: may a new aura coexist with an existing one
//! - [`strength`]: which of two exclusive auras is stronger
//! - [`rank`] and [`specific`]: chain and exclusivity classification
//! - [`conflict`]: the combined verdict used when applying auras
//!
//! Queries never fail. Unknown spell ids degrade towards the permissive
//! answer and are logged at debug level.
pub mod conflict;
pub mod exceptions;
pub mod polarity;
pub mod rank;
pub mod similarity;
pub mod specific;
pub mod stacking;
pub mod strength;

pub use conflict::AuraConflict;
pub use polarity::Polarity;
pub use similarity::SimilarPairs;
pub use specific::{
    ElixirMask, SpellSpecific, food_specific, is_specific_identical,
    is_specific_unique_per_caster, is_specific_unique_per_target,
};
pub use strength::Candidate;

use tracing::debug;

use crate::config::EngineConfig;
use crate::store::{SpellOracle, SpellStore};
use crate::types::{EffectIndex, SpellDescriptor, SpellId};
use crate::world::WorldObjectView;

/// Read-only resolution engine over a spell store.
///
/// The engine is `Copy` and holds no state of its own; share it freely
/// between threads as long as the store is shared.
pub struct SpellEngine<'a, S: ?Sized = SpellStore> {
    store: &'a S,
    config: EngineConfig,
}

impl<S: ?Sized> Clone for SpellEngine<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for SpellEngine<'_, S> {}

impl<S: ?Sized> core::fmt::Debug for SpellEngine<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpellEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, S: SpellOracle + ?Sized> SpellEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: &'a S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Descriptor lookup that logs missing ids.
    fn lookup(&self, id: SpellId) -> Option<&'a SpellDescriptor> {
        let spell = self.store.spell(id);
        if spell.is_none() {
            debug!(spell_id = id.0, "spell not found, using permissive default");
        }
        spell
    }

    // ===== id-based queries =====

    /// [`effect_polarity`](Self::effect_polarity) by spell id; unknown spells
    /// are neutral.
    pub fn effect_polarity_by_id(
        &self,
        id: SpellId,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> Polarity {
        self.lookup(id)
            .map_or(Polarity::Neutral, |spell| {
                self.effect_polarity(spell, index, caster, target)
            })
    }

    /// [`is_positive_spell`](Self::is_positive_spell) by spell id; unknown
    /// spells are not negative.
    pub fn is_positive_spell_by_id(
        &self,
        id: SpellId,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        self.lookup(id)
            .is_none_or(|spell| self.is_positive_spell(spell, caster, target))
    }

    /// [`stackable_spell`](Self::stackable_spell) by spell ids; unknown spells
    /// stack.
    pub fn stackable_spell_by_id(
        &self,
        candidate: SpellId,
        existing: SpellId,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        match (self.lookup(candidate), self.lookup(existing)) {
            (Some(candidate), Some(existing)) => self.stackable_spell(candidate, existing, target),
            _ => true,
        }
    }

    /// [`spell_specific`](Self::spell_specific) by spell id; unknown spells
    /// are normal.
    pub fn spell_specific_by_id(&self, id: SpellId) -> SpellSpecific {
        self.lookup(id)
            .map_or(SpellSpecific::Normal, |spell| self.spell_specific(spell))
    }
}
