//! Stack resolver: may a candidate aura coexist with an existing one?
//!
//! Every aura slot of the candidate is matched against its first similar slot
//! in the existing spell, then judged by a rule table keyed on the aura kind.
//! Rules either decide outright or mark the slot non multi-instanceable,
//! which forbids two instances (or ranks) of the same spell.

use tracing::trace;

use super::SpellEngine;
use super::specific::SpellSpecific;
use crate::store::SpellOracle;
use crate::types::{AuraKind, EffectIndex, SpellDescriptor, SpellFamily};
use crate::world::WorldObjectView;

/// Soulstone Resurrection.
const SOULSTONE_ICON: u32 = 92;
const SOULSTONE_VISUAL: u32 = 99;
/// Reincarnation (passive) and Twisting Nether.
const SHAMAN_REINCARNATION: u64 = 0x200;
/// Mangle (Cat) and Mangle (Bear).
const DRUID_MANGLE: u64 = 0x440_0000_0000;
const DRUID_TRANQUILITY: u64 = 0x80;
const DRUID_LIFEBLOOM: u64 = 0x10_0000_0000;

/// Relationship between the candidate and the existing spell.
#[derive(Clone, Copy, Debug)]
struct Kinship {
    positive: bool,
    related: bool,
    siblings: bool,
    multirank: bool,
    instance: bool,
    icon: bool,
    visual: bool,
}

impl Kinship {
    fn new(candidate: &SpellDescriptor, existing: &SpellDescriptor, positive: bool) -> Self {
        let related = candidate.family == existing.family;
        let siblings = candidate.family_flags == existing.family_flags;
        let player = candidate.family.is_some() && !candidate.family_flags.is_empty();
        let multirank = related && siblings && player;
        Self {
            positive,
            related,
            siblings,
            multirank,
            instance: candidate.id == existing.id || multirank,
            icon: candidate.icon_id == existing.icon_id,
            visual: candidate.visual_id == existing.visual_id,
        }
    }
}

/// Outcome of the aura-kind rule table.
enum Rule {
    Stack,
    Reject,
    /// Continue to the final checks, optionally marking the slot non
    /// multi-instanceable.
    Continue { nonmui: bool },
}

impl Rule {
    const NEUTRAL: Self = Self::Continue { nonmui: false };
    const NONMUI: Self = Self::Continue { nonmui: true };

    fn decide(stack: bool) -> Self {
        if stack { Self::Stack } else { Self::Reject }
    }
}

impl<S: SpellOracle + ?Sized> SpellEngine<'_, S> {
    /// Whether slot `index` of `candidate` may coexist with `existing`.
    ///
    /// `target` is the unit carrying the existing aura, when known.
    pub fn stackable_effect(
        &self,
        candidate: &SpellDescriptor,
        existing: &SpellDescriptor,
        index: EffectIndex,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        let effect = candidate.effect(index);
        if !effect.aura.is_some() {
            return true;
        }
        let Some(similar) = self.first_similar_slot(candidate, index, existing) else {
            return true;
        };

        if self.spell_specific(candidate) == SpellSpecific::WellFed
            && self.spell_specific(existing) != SpellSpecific::WellFed
        {
            return true;
        }

        let kin = Kinship::new(
            candidate,
            existing,
            self.is_positive_effect(candidate, index, None, None),
        );
        let rule = aura_rule(effect.aura, candidate, existing, index, similar, &kin, target);
        let nonmui = match rule {
            Rule::Stack => return true,
            Rule::Reject => return false,
            Rule::Continue { nonmui } => nonmui,
        };

        // Channeled spells (Mind Flay) may run in parallel.
        if nonmui && kin.instance && !candidate.is_channeled() && !existing.is_channeled() {
            return false;
        }
        if kin.multirank
            && self.is_positive_spell(candidate, None, None)
            && self.is_positive_spell(existing, None, None)
        {
            return false;
        }
        true
    }

    /// Whether `candidate` may coexist with `existing`: every aura slot of the
    /// candidate must be stackable.
    pub fn stackable_spell(
        &self,
        candidate: &SpellDescriptor,
        existing: &SpellDescriptor,
        target: Option<&dyn WorldObjectView>,
    ) -> bool {
        for (index, effect) in candidate.active_effects() {
            if effect.aura.is_some() && !self.stackable_effect(candidate, existing, index, target) {
                trace!(
                    candidate = candidate.id.0,
                    existing = existing.id.0,
                    effect_index = %index,
                    aura = %effect.aura,
                    "aura does not stack"
                );
                return false;
            }
        }
        true
    }
}

fn aura_rule(
    aura: AuraKind,
    candidate: &SpellDescriptor,
    existing: &SpellDescriptor,
    index: EffectIndex,
    similar: EffectIndex,
    kin: &Kinship,
    target: Option<&dyn WorldObjectView>,
) -> Rule {
    let effect = candidate.effect(index);
    let other = existing.effect(similar);
    let same_misc = effect.misc_value == other.misc_value;
    let same_dispel = candidate.dispel.is_some() && candidate.dispel == existing.dispel;
    // One side is a class spell, the other uncategorized (scrolls, items).
    let family_mismatch = (candidate.family.is_some() || existing.family.is_some())
        && (!candidate.family.is_some() || !existing.family.is_some());

    use AuraKind::*;
    match aura {
        Dummy | PeriodicDummy | PeriodicTriggerSpell => {
            if kin.related {
                family_dummy_rule(candidate, existing, kin)
            } else {
                Rule::NEUTRAL
            }
        }

        PeriodicLeech | PeriodicManaLeech => {
            if target.is_some_and(|target| target.is_player_controlled()) {
                Rule::Reject
            } else {
                Rule::NEUTRAL
            }
        }
        PeriodicDamage | PeriodicDamagePercent | PowerBurnMana => Rule::Stack,
        PeriodicHeal | ObsModHealth | ObsModMana => Rule::Stack,

        // Hunter's Mark and Expose Weakness stack with each other, not with themselves.
        RangedAttackPowerAttackerBonus | MeleeAttackPowerAttackerBonus => {
            Rule::decide(!kin.related || !kin.siblings)
        }
        ModAttackPower => {
            if !kin.positive && effect.base_points < 1 && other.base_points < 1 {
                Rule::decide(!candidate.family.is_some() && !existing.family.is_some())
            } else {
                Rule::NEUTRAL
            }
        }

        ModResistance => {
            if !same_misc {
                return Rule::NEUTRAL;
            }
            if kin.positive {
                if same_dispel && family_mismatch {
                    return Rule::Reject;
                }
                let attack_table = candidate.damage_class.is_some()
                    && candidate.damage_class == existing.damage_class;
                if attack_table && !candidate.family.is_some() && !existing.family.is_some() {
                    return Rule::Reject;
                }
            } else {
                let prevention = candidate.prevention.is_some()
                    && candidate.prevention == existing.prevention;
                if candidate.dispel == existing.dispel && prevention {
                    return Rule::Reject;
                }
            }
            Rule::Stack
        }
        ModResistancePct => {
            if !same_misc {
                Rule::NEUTRAL
            } else if kin.positive && same_dispel {
                Rule::Reject
            } else {
                Rule::NONMUI
            }
        }
        ModStat => {
            if !same_misc {
                Rule::NEUTRAL
            } else if kin.positive {
                if same_dispel && family_mismatch {
                    Rule::Reject
                } else {
                    Rule::NEUTRAL
                }
            } else if same_dispel {
                Rule::Reject
            } else {
                Rule::NONMUI
            }
        }
        ModTotalStatPercentage | ModPercentStat => Rule::NONMUI,

        // Healing debuffs only coexist when they modify the same schools.
        ModHealingDone | ModHealingPct => {
            if kin.positive {
                Rule::NEUTRAL
            } else {
                Rule::decide(same_misc)
            }
        }
        ModMeleeHaste | ModRangedHaste | ModDamageDone | ModDamagePercentDone => {
            if kin.positive {
                Rule::Stack
            } else {
                Rule::NONMUI
            }
        }
        ModDamageTaken | ModDamagePercentTaken | ModDecreaseSpeed | ModIncreaseSpeed
        | ModHealthRegenPercent | PreventsFleeing => Rule::NONMUI,

        // Judgement of Light and Judgement of Wisdom share family flags.
        ProcTriggerSpell => {
            if kin.instance && !kin.icon {
                Rule::NEUTRAL
            } else {
                Rule::NONMUI
            }
        }

        ModFear | ModConfuse => Rule::decide(
            candidate.effect_mechanic(index) != existing.effect_mechanic(similar),
        ),
        ModStun | ModRoot => {
            if candidate.effect_mechanic(index) != existing.effect_mechanic(similar) {
                Rule::Stack
            } else {
                Rule::NONMUI
            }
        }

        ModRating | ModSpellCritChance | ModSpellHitChance | SpellMagnet => Rule::Stack,

        ModPossess | ModPossessPet | ModCharm | AoeCharm | DamageShield | ModShapeshift
        | Mounted | Empathy | ModCastingSpeedNotStack | ModMountedSpeedNotStack
        | HasteSpells => Rule::Reject,

        _ => Rule::NEUTRAL,
    }
}

/// Family-specific rules for dummy and periodic trigger auras of related
/// spells.
fn family_dummy_rule(
    candidate: &SpellDescriptor,
    existing: &SpellDescriptor,
    kin: &Kinship,
) -> Rule {
    match candidate.family {
        SpellFamily::Generic => {
            if candidate.icon_id == SOULSTONE_ICON
                && candidate.visual_id == SOULSTONE_VISUAL
                && kin.icon
                && kin.visual
            {
                return Rule::Reject;
            }
        }
        SpellFamily::Shaman => {
            if candidate.is_fit_to_family_mask(SHAMAN_REINCARNATION) && kin.multirank {
                return Rule::Stack;
            }
        }
        SpellFamily::Druid => {
            if candidate.is_fit_to_family_mask(DRUID_MANGLE)
                && existing.is_fit_to_family_mask(DRUID_MANGLE)
            {
                return Rule::Reject;
            }
            if candidate.is_fit_to_family_mask(DRUID_TRANQUILITY) && kin.multirank {
                return Rule::Stack;
            }
            if candidate.is_fit_to_family_mask(DRUID_LIFEBLOOM) {
                return Rule::Stack;
            }
        }
        _ => {}
    }
    Rule::NEUTRAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SpellStore;
    use crate::types::{DispelType, EffectDescriptor, Mechanic, SpellAttributes, TargetMode};

    fn hostile(aura: AuraKind) -> EffectDescriptor {
        EffectDescriptor::apply_aura(aura).with_targets(TargetMode::ChainDamage, TargetMode::None)
    }

    fn friendly(aura: AuraKind) -> EffectDescriptor {
        EffectDescriptor::apply_aura(aura).with_targets(TargetMode::SingleFriend, TargetMode::None)
    }

    fn stackable(candidate: &SpellDescriptor, existing: &SpellDescriptor) -> bool {
        let store = SpellStore::default();
        SpellEngine::new(&store).stackable_spell(candidate, existing, None)
    }

    #[test]
    fn non_aura_slots_always_stack() {
        let bolt = SpellDescriptor::builder(1)
            .effect0(EffectDescriptor::new(crate::types::EffectKind::SchoolDamage))
            .build();
        assert!(stackable(&bolt, &bolt));
    }

    #[test]
    fn stuns_with_same_mechanic_refresh() {
        let bash = SpellDescriptor::builder(5211)
            .effect0(hostile(AuraKind::ModStun).with_mechanic(Mechanic::Stun))
            .build();
        let sap = SpellDescriptor::builder(6770)
            .effect0(hostile(AuraKind::ModStun).with_mechanic(Mechanic::Sapped))
            .build();
        assert!(!stackable(&bash, &bash));
        assert!(stackable(&bash, &sap));
    }

    #[test]
    fn channeled_spells_escape_nonmui() {
        let mut flay = SpellDescriptor::builder(15407)
            .effect0(hostile(AuraKind::ModDecreaseSpeed))
            .build();
        assert!(!stackable(&flay, &flay));
        flay.attributes |= SpellAttributes::CHANNELED;
        assert!(stackable(&flay, &flay));
    }

    #[test]
    fn stat_debuffs_with_same_dispel_do_not_stack() {
        let shrink = SpellDescriptor::builder(7289)
            .effect0(hostile(AuraKind::ModStat).with_misc_value(0))
            .dispel(DispelType::Curse)
            .build();
        let other_shrink = SpellDescriptor::builder(7290)
            .effect0(hostile(AuraKind::ModStat).with_misc_value(0))
            .dispel(DispelType::Curse)
            .build();
        let other_stat = SpellDescriptor::builder(7291)
            .effect0(hostile(AuraKind::ModStat).with_misc_value(3))
            .dispel(DispelType::Curse)
            .build();
        assert!(!stackable(&shrink, &other_shrink));
        assert!(stackable(&shrink, &other_stat));
    }

    #[test]
    fn player_buffs_do_not_stack_with_scrolls() {
        let spirit = SpellDescriptor::builder(14752)
            .effect0(friendly(AuraKind::ModStat).with_misc_value(4))
            .dispel(DispelType::Magic)
            .family(SpellFamily::Priest, 0x1000)
            .build();
        let scroll = SpellDescriptor::builder(8112)
            .effect0(friendly(AuraKind::ModStat).with_misc_value(4))
            .dispel(DispelType::Magic)
            .build();
        assert!(!stackable(&scroll, &spirit));
        assert!(!stackable(&spirit, &scroll));
    }

    #[test]
    fn healing_debuffs_stack_only_on_same_misc() {
        let mortal = SpellDescriptor::builder(12294)
            .effect0(hostile(AuraKind::ModHealingPct).with_misc_value(127))
            .build();
        let aimed = SpellDescriptor::builder(19434)
            .effect0(hostile(AuraKind::ModHealingPct).with_misc_value(127))
            .build();
        assert!(stackable(&mortal, &aimed));
        let partial = SpellDescriptor::builder(19435)
            .effect0(hostile(AuraKind::ModHealingPct).with_misc_value(1))
            .build();
        assert!(!stackable(&mortal, &partial));
    }

    #[test]
    fn leech_rejects_on_player_controlled_target() {
        let drain = SpellDescriptor::builder(689)
            .effect0(hostile(AuraKind::PeriodicLeech))
            .build();
        let store = SpellStore::default();
        let engine = SpellEngine::new(&store);
        let player = crate::world::UnitSnapshot::player(7, 1);
        let creature = crate::world::UnitSnapshot::creature(8, 1);
        let pet = creature.with_player_controlled(true);
        assert!(!engine.stackable_spell(&drain, &drain, Some(&player)));
        assert!(!engine.stackable_spell(&drain, &drain, Some(&pet)));
        assert!(engine.stackable_spell(&drain, &drain, Some(&creature)));
    }
}
