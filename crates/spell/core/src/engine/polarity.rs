//! Effect classifier: beneficial or harmful to the target.
//!
//! Classification runs in priority order:
//!
//! 1. effect kinds with a fixed polarity
//! 2. per-spell exception tables for dummy, script and aura effects
//! 3. trigger effects, resolved into the triggered spell up to
//!    [`EngineConfig::trigger_depth`](crate::EngineConfig::trigger_depth) levels
//! 4. the implicit target modes of the slot
//!
//! Steps 3 and 4 form the target-mode classification, also exposed on its own.
//! A spell already being judged further up the trigger walk counts as
//! positive, so trigger cycles are visited once regardless of depth.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use super::{SpellEngine, exceptions};
use crate::config::EngineConfig;
use crate::store::SpellOracle;
use crate::types::{EffectIndex, EffectMask, SpellDescriptor, SpellId, TargetMode};
use crate::world::WorldObjectView;

/// Polarity of an effect towards its target.
///
/// `Neutral` is produced for empty slots and unknown spells. It never counts
/// as negative.
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
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    #[inline]
    pub const fn from_positive(positive: bool) -> Self {
        if positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Positive or neutral.
    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative()
    }
}

impl<S: SpellOracle + ?Sized> SpellEngine<'_, S> {
    /// Polarity of one effect slot, optionally in the context of a live
    /// caster and target.
    pub fn effect_polarity(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> Polarity {
        let effect = spell.effect(index);
        if effect.is_empty() {
            return Polarity::Neutral;
        }
        if let Some(polarity) = exceptions::effect_override(spell.id, effect) {
            return polarity;
        }
        self.target_mode_polarity_root(spell, index, caster, target)
    }

    pub fn is_positive_effect(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        self.effect_polarity(spell, index, caster, target)
            .is_positive()
    }

    /// True if the slot applies an aura and that aura is positive.
    pub fn is_positive_aura_effect(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        spell.effect(index).is_aura_apply() && self.is_positive_effect(spell, index, caster, target)
    }

    /// A spell is positive only if none of its effects is negative.
    pub fn is_positive_spell(
        &self,
        spell: &SpellDescriptor,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        spell
            .active_effects()
            .all(|(index, _)| self.is_positive_effect(spell, index, caster, target))
    }

    /// Polarity derived from trigger resolution and target modes only,
    /// skipping the per-spell exception tables.
    pub fn target_mode_polarity(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> Polarity {
        if spell.effect(index).is_empty() {
            return Polarity::Neutral;
        }
        self.target_mode_polarity_root(spell, index, caster, target)
    }

    pub fn is_positive_effect_target_mode(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        self.target_mode_polarity(spell, index, caster, target)
            .is_positive()
    }

    /// Target-mode polarity of every non-empty slot selected by `mask`.
    pub fn is_positive_spell_target_mode(
        &self,
        spell: &SpellDescriptor,
        mask: EffectMask,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        spell
            .active_effects()
            .filter(|(index, _)| mask.contains_index(*index))
            .all(|(index, _)| self.is_positive_effect_target_mode(spell, index, caster, target))
    }

    fn target_mode_polarity_root(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
    ) -> Polarity {
        let mut trail = TriggerTrail::new();
        let depth = self.config.trigger_depth;
        self.target_mode_polarity_at(spell, index, caster, target, depth, &mut trail)
    }

    fn target_mode_polarity_at(
        &self,
        spell: &SpellDescriptor,
        index: EffectIndex,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
        depth: u8,
        trail: &mut TriggerTrail,
    ) -> Polarity {
        let effect = spell.effect(index);

        // Target modes of trigger effects are unreliable; judge the triggered
        // spell instead.
        if effect.is_trigger_spell() {
            let triggered = effect.trigger_spell;
            return self.triggered_polarity(spell, triggered, caster, target, depth, trail);
        }

        let (a, b) = (effect.target_a, effect.target_b);
        if (a.is_none() && b.is_none())
            || a.is_friendly()
            || b.is_friendly()
            || a.is_script()
            || b.is_script()
        {
            return Polarity::Positive;
        }
        if a.is_hostile() || b.is_hostile() {
            // Passive talents must survive effects that strip harmful auras.
            return Polarity::from_positive(spell.is_passive());
        }
        if a.is_neutral() && b.is_neutral() {
            let mode = if b.is_none() { a } else { b };
            return Polarity::from_positive(
                mode.is_point() || neutral_target_positive(mode, caster, target),
            );
        }

        if !effect.is_empty() {
            trace!(
                spell_id = spell.id.0,
                effect_index = %index,
                target_a = ?a,
                target_b = ?b,
                "unhandled target modes"
            );
        }
        Polarity::Positive
    }

    fn triggered_polarity(
        &self,
        spell: &SpellDescriptor,
        triggered: SpellId,
        caster: Option<&dyn WorldObjectView>,
        target: Option<&dyn WorldObjectView>,
        depth: u8,
        trail: &mut TriggerTrail,
    ) -> Polarity {
        if depth == 0 || !triggered.is_some() || triggered == spell.id {
            return Polarity::Positive;
        }
        if trail.contains(&triggered) {
            trace!(spell_id = spell.id.0, triggered = triggered.0, "trigger cycle");
            return Polarity::Positive;
        }
        let Some(child) = self.store.spell(triggered) else {
            debug!(
                spell_id = spell.id.0,
                triggered = triggered.0,
                "triggered spell not found"
            );
            return Polarity::Positive;
        };
        if trail.try_push(triggered).is_err() {
            return Polarity::Positive;
        }
        let positive = EffectIndex::ALL.into_iter().all(|index| {
            self.target_mode_polarity_at(child, index, caster, target, depth - 1, trail)
                .is_positive()
        });
        trail.pop();
        Polarity::from_positive(positive)
    }
}

/// Triggered spells currently being judged, outermost first.
type TriggerTrail = ArrayVec<SpellId, { EngineConfig::MAX_TRIGGER_TRAIL }>;

/// Neutral modes are positive unless they pick units by relationship, in
/// which case the live caster to target relation decides.
fn neutral_target_positive(
    mode: TargetMode,
    caster: Option<&dyn WorldObjectView>,
    target: Option<&dyn WorldObjectView>,
) -> bool {
    if !mode.is_relation_dependent() {
        return true;
    }
    let Some(target) = target.filter(|target| target.kind().is_unit()) else {
        return true;
    };
    let Some(caster) = caster else {
        return true;
    };
    if caster.guid() == target.guid() {
        return true;
    }
    caster.is_friendly_to(target)
}
