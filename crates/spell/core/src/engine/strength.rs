//! Strength comparator: which of two mutually exclusive auras wins.

use tracing::debug;

use super::SpellEngine;
use crate::store::SpellOracle;
use crate::types::{EffectIndex, SpellDescriptor};
use crate::world::{AuraHolderView, CasterSnapshot};

/// The side challenging an existing holder.
#[derive(Clone, Copy)]
pub enum Candidate<'a> {
    /// An aura holder already built for the candidate spell.
    Holder(&'a dyn AuraHolderView),
    /// A spell that has not been applied yet. Its magnitude is estimated
    /// from static base points and the caster's combo points.
    Spell {
        spell: &'a SpellDescriptor,
        caster: Option<&'a CasterSnapshot>,
    },
}

impl core::fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Holder(holder) => f.debug_tuple("Holder").field(&holder.spell_id()).finish(),
            Self::Spell { spell, caster } => f
                .debug_struct("Spell")
                .field("spell", &spell.id)
                .field("caster", caster)
                .finish(),
        }
    }
}

impl<S: SpellOracle + ?Sized> SpellEngine<'_, S> {
    /// True if, for some similar slot pair, the existing holder's per-stack
    /// magnitude strictly exceeds the candidate's.
    ///
    /// When both magnitudes are negative their absolute values are compared.
    /// Unknown spells never make the existing holder stronger.
    pub fn existing_is_stronger(
        &self,
        candidate: Candidate<'_>,
        existing: &dyn AuraHolderView,
    ) -> bool {
        let Some(existing_spell) = self.lookup(existing.spell_id()) else {
            return false;
        };
        let candidate_spell = match candidate {
            Candidate::Holder(holder) => match self.lookup(holder.spell_id()) {
                Some(spell) => spell,
                None => return false,
            },
            Candidate::Spell { spell, .. } => spell,
        };

        for (index, existing_index) in self.similar_pairs(candidate_spell, existing_spell) {
            let value = candidate_value(candidate, candidate_spell, index, existing);
            let existing_value = holder_value(existing, existing_index);
            let (value, existing_value) = if value < 0 && existing_value < 0 {
                (value.saturating_abs(), existing_value.saturating_abs())
            } else {
                (value, existing_value)
            };
            if existing_value > value {
                debug!(
                    candidate = candidate_spell.id.0,
                    existing = existing_spell.id.0,
                    value,
                    existing_value,
                    "existing aura is stronger"
                );
                return true;
            }
        }
        false
    }
}

fn holder_value(holder: &dyn AuraHolderView, index: EffectIndex) -> i64 {
    holder
        .aura(index)
        .map_or(0, |aura| i64::from(aura.per_stack_amount()))
}

fn candidate_value(
    candidate: Candidate<'_>,
    spell: &SpellDescriptor,
    index: EffectIndex,
    existing: &dyn AuraHolderView,
) -> i64 {
    match candidate {
        Candidate::Holder(holder) => holder_value(holder, index),
        Candidate::Spell { caster, .. } => {
            let effect = spell.effect(index);
            let combo = caster.map_or(0, |caster| caster.combo_points_on(existing.target_guid()));
            // Truncates like the aura amount it is compared against.
            let bonus = (effect.points_per_combo_point * f32::from(combo)) as i64;
            i64::from(effect.base_points).saturating_add(bonus)
        }
    }
}
