//! Similarity matcher: which slots of two spells describe the same mechanism.

use arrayvec::ArrayVec;

use super::SpellEngine;
use crate::config::EngineConfig;
use crate::store::SpellOracle;
use crate::types::{EffectIndex, SpellDescriptor};

/// All similar (candidate slot, existing slot) pairs between two spells.
pub type SimilarPairs = ArrayVec<(EffectIndex, EffectIndex), { EngineConfig::MAX_SIMILAR_PAIRS }>;

impl<S: SpellOracle + ?Sized> SpellEngine<'_, S> {
    /// Two slots are similar when both place the same aura through the same
    /// effect kind with the same context-free polarity.
    pub fn is_similar_aura_effect(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        other: &SpellDescriptor,
        other_index: EffectIndex,
    ) -> bool {
        let effect = spell.effect(index);
        let other_effect = other.effect(other_index);
        effect.aura.is_some()
            && other_effect.aura.is_some()
            && effect.kind == other_effect.kind
            && effect.aura == other_effect.aura
            && self.is_positive_effect(spell, index, None, None)
                == self.is_positive_effect(other, other_index, None, None)
    }

    /// First slot of `other` similar to `spell`'s slot `index`.
    pub fn first_similar_slot(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        other: &SpellDescriptor,
    ) -> Option<EffectIndex> {
        EffectIndex::ALL
            .into_iter()
            .find(|&other_index| self.is_similar_aura_effect(spell, index, other, other_index))
    }

    /// Every similar slot pair, candidate-major.
    pub fn similar_pairs(&self, spell: &SpellDescriptor, other: &SpellDescriptor) -> SimilarPairs {
        let mut pairs = SimilarPairs::new();
        for index in EffectIndex::ALL {
            for other_index in EffectIndex::ALL {
                if self.is_similar_aura_effect(spell, index, other, other_index) {
                    pairs.push((index, other_index));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SpellStore;
    use crate::types::{AuraKind, EffectDescriptor, EffectKind, TargetMode};

    fn buff(aura: AuraKind) -> EffectDescriptor {
        EffectDescriptor::apply_aura(aura).with_targets(TargetMode::SingleFriend, TargetMode::None)
    }

    #[test]
    fn similarity_needs_same_aura_kind_and_polarity() {
        let store = SpellStore::default();
        let engine = SpellEngine::new(&store);

        let fortitude = SpellDescriptor::builder(1)
            .effect0(buff(AuraKind::ModStat))
            .effect1(buff(AuraKind::ModResistance))
            .build();
        let scroll = SpellDescriptor::builder(2)
            .effect0(buff(AuraKind::ModResistance))
            .build();
        let curse = SpellDescriptor::builder(3)
            .effect0(
                EffectDescriptor::apply_aura(AuraKind::ModStat)
                    .with_targets(TargetMode::ChainDamage, TargetMode::None),
            )
            .build();
        let area = SpellDescriptor::builder(4)
            .effect0(EffectDescriptor::aura_with_kind(
                EffectKind::ApplyAreaAuraParty,
                AuraKind::ModStat,
            ))
            .build();

        assert_eq!(
            engine.first_similar_slot(&scroll, EffectIndex::Effect0, &fortitude),
            Some(EffectIndex::Effect1)
        );
        assert_eq!(engine.first_similar_slot(&curse, EffectIndex::Effect0, &fortitude), None);
        assert_eq!(engine.first_similar_slot(&area, EffectIndex::Effect0, &fortitude), None);
        assert_eq!(
            engine.similar_pairs(&fortitude, &scroll).as_slice(),
            &[(EffectIndex::Effect1, EffectIndex::Effect0)]
        );
    }

    #[test]
    fn empty_slots_never_match() {
        let store = SpellStore::default();
        let engine = SpellEngine::new(&store);
        let empty = SpellDescriptor::builder(9).build();
        assert!(engine.similar_pairs(&empty, &empty).is_empty());
    }
}
