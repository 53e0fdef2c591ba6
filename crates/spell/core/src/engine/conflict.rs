//! Conflict resolution: one verdict for a candidate spell against one
//! existing holder, combining specifics, stacking and strength.

use tracing::debug;

use super::{Candidate, SpellEngine};
use crate::store::SpellOracle;
use crate::types::SpellDescriptor;
use crate::world::{AuraHolderView, CasterSnapshot, WorldObjectView};

/// What to do with an existing holder when a candidate spell lands.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuraConflict {
    /// Both auras stay.
    Coexist,
    /// The existing holder is removed in favour of the candidate.
    ReplaceExisting,
    /// The candidate is not applied.
    RejectCandidate,
}

impl<S: SpellOracle + ?Sized> SpellEngine<'_, S> {
    /// Decides how `candidate`, cast by `caster`, interacts with `existing`.
    ///
    /// 1. The same spell from the same caster refreshes the existing holder.
    /// 2. Spells of one specific group: unique-per-target groups keep the
    ///    stronger aura, unique-per-caster groups replace the caster's own.
    /// 3. Stackable auras coexist.
    /// 4. Otherwise the stronger aura wins; ties go to the candidate.
    pub fn resolve_conflict(
        &self,
        candidate: &SpellDescriptor,
        caster: Option<&CasterSnapshot>,
        existing: &dyn AuraHolderView,
        target: Option<&dyn WorldObjectView>,
    ) -> AuraConflict {
        let Some(existing_spell) = self.lookup(existing.spell_id()) else {
            return AuraConflict::Coexist;
        };
        let caster_guid = caster.map(|caster| caster.guid);
        let same_caster = caster_guid.is_some() && caster_guid == existing.caster_guid();

        if candidate.id == existing_spell.id && same_caster {
            return AuraConflict::ReplaceExisting;
        }

        let stronger = || {
            if self.existing_is_stronger(Candidate::Spell { spell: candidate, caster }, existing) {
                AuraConflict::RejectCandidate
            } else {
                AuraConflict::ReplaceExisting
            }
        };

        let specific = self.spell_specific(candidate);
        if !specific.is_normal() && specific.is_identical(self.spell_specific(existing_spell)) {
            if specific.is_unique_per_target() {
                let verdict = stronger();
                debug!(
                    candidate = candidate.id.0,
                    existing = existing_spell.id.0,
                    %specific,
                    %verdict,
                    "unique specific per target"
                );
                return verdict;
            }
            if specific.is_unique_per_caster() && same_caster {
                return AuraConflict::ReplaceExisting;
            }
        }

        if self.stackable_spell(candidate, existing_spell, target) {
            return AuraConflict::Coexist;
        }
        stronger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SpellSpecific;
    use crate::store::SpellStore;
    use crate::types::{AuraKind, EffectDescriptor, EffectIndex, ObjectGuid, SpellId, TargetMode};
    use crate::world::{AuraHolderSnapshot, ObjectKind};

    fn curse(id: u32, aura: AuraKind) -> SpellDescriptor {
        SpellDescriptor::builder(id)
            .effect0(
                EffectDescriptor::apply_aura(aura)
                    .with_targets(TargetMode::ChainDamage, TargetMode::None)
                    .with_base_points(-10),
            )
            .build()
    }

    #[test]
    fn unique_per_caster_replaces_own_aura_only() {
        let agony = curse(980, AuraKind::PeriodicDamage);
        let weakness = curse(702, AuraKind::ModAttackPower);
        let store = SpellStore::builder()
            .spells([agony.clone(), weakness.clone()])
            .specific(SpellId(980), SpellSpecific::Curse)
            .specific(SpellId(702), SpellSpecific::Curse)
            .build()
            .unwrap();
        let engine = SpellEngine::new(&store);

        let warlock = CasterSnapshot::new(ObjectGuid(1), ObjectKind::Player);
        let own = AuraHolderSnapshot::new(SpellId(702), ObjectGuid(5))
            .with_caster(ObjectGuid(1))
            .with_aura(EffectIndex::Effect0, -10, 1);
        let foreign = own.clone().with_caster(ObjectGuid(2));

        assert_eq!(
            engine.resolve_conflict(&agony, Some(&warlock), &own, None),
            AuraConflict::ReplaceExisting
        );
        assert_eq!(
            engine.resolve_conflict(&agony, Some(&warlock), &foreign, None),
            AuraConflict::Coexist
        );
    }

    #[test]
    fn same_spell_from_same_caster_refreshes() {
        let dot = curse(172, AuraKind::PeriodicDamage);
        let store = SpellStore::builder().spell(dot.clone()).build().unwrap();
        let engine = SpellEngine::new(&store);
        let caster = CasterSnapshot::new(ObjectGuid(1), ObjectKind::Player);

        let own = AuraHolderSnapshot::new(SpellId(172), ObjectGuid(5))
            .with_caster(ObjectGuid(1))
            .with_aura(EffectIndex::Effect0, -10, 1);
        let foreign = own.clone().with_caster(ObjectGuid(3));

        assert_eq!(
            engine.resolve_conflict(&dot, Some(&caster), &own, None),
            AuraConflict::ReplaceExisting
        );
        assert_eq!(
            engine.resolve_conflict(&dot, Some(&caster), &foreign, None),
            AuraConflict::Coexist
        );
    }
}
