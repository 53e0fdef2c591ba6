//! Descriptor fixtures shared by the integration suites.
#![allow(dead_code)]

use spell_core::{
    AuraHolderSnapshot, AuraKind, EffectDescriptor, EffectIndex, ObjectGuid, SpellDescriptor,
    SpellFamily, SpellId, SpellStore, TargetMode,
};

pub fn friendly(aura: AuraKind) -> EffectDescriptor {
    EffectDescriptor::apply_aura(aura).with_targets(TargetMode::SingleFriend, TargetMode::None)
}

pub fn hostile(aura: AuraKind) -> EffectDescriptor {
    EffectDescriptor::apply_aura(aura).with_targets(TargetMode::ChainDamage, TargetMode::None)
}

/// Single-effect spell.
pub fn spell(id: u32, effect: EffectDescriptor) -> SpellDescriptor {
    SpellDescriptor::builder(id).effect0(effect).build()
}

/// Single-effect class spell with family flags.
pub fn class_spell(
    id: u32,
    family: SpellFamily,
    flags: u64,
    effect: EffectDescriptor,
) -> SpellDescriptor {
    SpellDescriptor::builder(id)
        .effect0(effect)
        .family(family, flags)
        .build()
}

pub fn store(spells: impl IntoIterator<Item = SpellDescriptor>) -> SpellStore {
    SpellStore::builder()
        .spells(spells)
        .build()
        .expect("fixture store must build")
}

/// Holder of `spell` on `target` with one applied aura in slot 0.
pub fn holder(spell: u32, target: u64, amount: i32, stacks: u32) -> AuraHolderSnapshot {
    AuraHolderSnapshot::new(SpellId(spell), ObjectGuid(target))
        .with_aura(EffectIndex::Effect0, amount, stacks)
}
