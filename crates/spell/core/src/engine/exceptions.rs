//! Fixed per-spell data consulted before the generic rules.
//!
//! Content-specific spells whose polarity cannot be derived from their
//! targets, plus the well-fed spells lacking the food-buff attribute. The
//! tables are plain data so they can be audited independently of the rules.

use super::Polarity;
use crate::types::{AuraKind, EffectDescriptor, EffectKind, SpellId};

/// Polarity of `Dummy` effects by spell id.
pub const DUMMY_EFFECT_POLARITY: &[(u32, Polarity)] = &[
    (28441, Polarity::Negative), // AB Effect 000
    (18153, Polarity::Positive), // Kodo Kombobulator
];

/// Polarity of `ScriptEffect` effects by spell id.
pub const SCRIPT_EFFECT_POLARITY: &[(u32, Polarity)] = &[
    (42436, Polarity::Positive), // Drink!
];

/// Polarity of friendly aura applications by (aura kind, spell id).
pub const AURA_POLARITY: &[(AuraKind, u32, Polarity)] = &[
    (AuraKind::Dummy, 13139, Polarity::Negative), // net-o-matic special effect
    (AuraKind::Dummy, 44877, Polarity::Negative), // Living Flare Master
    (AuraKind::Dummy, 39834, Polarity::Positive), // Vimgol population tester
    (AuraKind::Dummy, 39851, Polarity::Positive),
    (AuraKind::Dummy, 39852, Polarity::Positive),
    (AuraKind::Dummy, 39853, Polarity::Positive),
    (AuraKind::Dummy, 39854, Polarity::Positive),
    (AuraKind::Dummy, 39921, Polarity::Positive), // Vimgol Pentagram Beam
    (AuraKind::ModMeleeHaste, 38449, Polarity::Positive), // Blessing of the Tides
];

/// Instantly applied food buffs and alcohol that carry no food-buff attribute.
pub const WELL_FED_SPELLS: &[u32] = &[
    18125, // Blessed Sunfruit
    18141, // Blessed Sunfruit Juice
    18191, // Windblossom Berries
    18192, // Grilled Squid
    18193, // Marsh Lichen
    22730, // Runn Tum Tuber Surprise
    25661, // Dirge's Kickin' Chimaerok Chops
    46687, // Juicy Bear Burger
    5020, 5021, 5257, 5909, 6114, 8553, 20875, 22789, 22790, 25037, 25722, 25804, 37058,
];

/// Polarity fixed by the effect kind alone.
pub const fn unconditional_polarity(kind: EffectKind) -> Option<Polarity> {
    match kind {
        EffectKind::SendTaxi
        | EffectKind::QuestComplete
        | EffectKind::KillCreditGroup
        | EffectKind::TeleportUnits
        | EffectKind::CreateItem
        | EffectKind::SummonChangeItem => Some(Polarity::Positive),
        EffectKind::ApplyAreaAuraEnemy => Some(Polarity::Negative),
        _ => None,
    }
}

/// Polarity override for one effect slot of `spell`, if any table claims it.
pub fn effect_override(spell: SpellId, effect: &EffectDescriptor) -> Option<Polarity> {
    if let Some(polarity) = unconditional_polarity(effect.kind) {
        return Some(polarity);
    }
    match effect.kind {
        EffectKind::Dummy => lookup(DUMMY_EFFECT_POLARITY, spell),
        EffectKind::ScriptEffect => lookup(SCRIPT_EFFECT_POLARITY, spell),
        EffectKind::ApplyAura | EffectKind::ApplyAreaAuraFriend => AURA_POLARITY
            .iter()
            .find(|(aura, id, _)| *aura == effect.aura && *id == spell.0)
            .map(|(_, _, polarity)| *polarity),
        _ => None,
    }
}

pub fn is_listed_well_fed(spell: SpellId) -> bool {
    WELL_FED_SPELLS.contains(&spell.0)
}

fn lookup(table: &[(u32, Polarity)], spell: SpellId) -> Option<Polarity> {
    table
        .iter()
        .find(|(id, _)| *id == spell.0)
        .map(|(_, polarity)| *polarity)
}
