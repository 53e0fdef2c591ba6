//! Static spell descriptors.
//!
//! A [`SpellDescriptor`] is immutable once placed in a store. The helpers on it
//! answer purely structural questions (which effects exist, which family mask
//! it fits); everything that involves another spell or live state lives in
//! [`crate::engine`].

use super::common::{EffectIndex, SpellId};
use super::effect::{EffectDescriptor, Mechanic};
use super::target::TargetMode;

bitflags::bitflags! {
    /// Attribute flags relevant to interaction resolution.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SpellAttributes: u32 {
        const PASSIVE                        = 1 << 0;
        const CHANNELED                      = 1 << 1;
        const RANGED                         = 1 << 2;
        const CANT_CRIT                      = 1 << 3;
        const AUTOREPEAT                     = 1 << 4;
        const FOOD_BUFF                      = 1 << 5;
        const HIDDEN_CLIENTSIDE              = 1 << 6;
        const CAN_TARGET_DEAD                = 1 << 7;
        const CAST_ON_DEAD                   = 1 << 8;
        const DEATH_PERSISTENT               = 1 << 9;
        const NOT_BREAK_STEALTH              = 1 << 10;
        const CANT_USED_IN_COMBAT            = 1 << 11;
        const SINGLE_TARGET_SPELL            = 1 << 12;
        const REQ_COMBO_POINTS               = 1 << 13;
        const ABILITY                        = 1 << 14;
        const UNAFFECTED_BY_INVULNERABILITY  = 1 << 15;
        const CANT_BE_REFLECTED              = 1 << 16;
        const DISPEL_AURAS_ON_IMMUNITY       = 1 << 17;
        const IGNORE_LOS                     = 1 << 18;
    }
}

bitflags::bitflags! {
    /// Damage schools a spell belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SchoolMask: u8 {
        const NORMAL = 1 << 0;
        const HOLY   = 1 << 1;
        const FIRE   = 1 << 2;
        const NATURE = 1 << 3;
        const FROST  = 1 << 4;
        const SHADOW = 1 << 5;
        const ARCANE = 1 << 6;
    }
}

bitflags::bitflags! {
    /// Conditions that interrupt an applied aura.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AuraInterruptFlags: u32 {
        const HIT_BY_SPELL  = 1 << 0;
        const DAMAGE        = 1 << 1;
        const CAST          = 1 << 2;
        const MOVE          = 1 << 3;
        const TURNING       = 1 << 4;
        const ENTER_COMBAT  = 1 << 5;
        const NOT_MOUNTED   = 1 << 6;
        const NOT_ABOVE_WATER = 1 << 7;
        const NOT_UNDERWATER  = 1 << 8;
        const NOT_SHEATHED  = 1 << 9;
        const NOT_SEATED    = 1 << 18;
    }
}

/// Dispel category of a spell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DispelType {
    #[default]
    None,
    Magic,
    Curse,
    Disease,
    Poison,
    Stealth,
    Invisibility,
    All,
    NpcOnly,
    Enrage,
}

impl DispelType {
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// What the spell's casting can be prevented by.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PreventionType {
    #[default]
    None,
    Silence,
    Pacify,
}

impl PreventionType {
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Coarse spell group. [`SpellFamily::Generic`] is the "no family" value.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellFamily {
    #[default]
    Generic,
    Environment,
    Mage,
    Warrior,
    Warlock,
    Priest,
    Druid,
    Rogue,
    Hunter,
    Paladin,
    Shaman,
    Potion,
}

impl SpellFamily {
    /// Returns true for every family other than [`SpellFamily::Generic`].
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::Generic)
    }
}

/// Fine-grained family bitmask identifying sibling spells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyFlags(pub u64);

impl FamilyFlags {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if any bit of `mask` is set.
    #[inline]
    pub const fn intersects(self, mask: u64) -> bool {
        self.0 & mask != 0
    }
}

/// Attack table used by the spell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageClass {
    #[default]
    None,
    Magic,
    Melee,
    Ranged,
}

impl DamageClass {
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Immutable static definition of one spell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDescriptor {
    pub id: SpellId,
    pub effects: [EffectDescriptor; 3],
    pub attributes: SpellAttributes,
    pub school_mask: SchoolMask,
    /// Spell-wide mechanic, used when an effect carries none.
    pub mechanic: Mechanic,
    pub dispel: DispelType,
    pub prevention: PreventionType,
    pub family: SpellFamily,
    pub family_flags: FamilyFlags,
    pub damage_class: DamageClass,
    pub icon_id: u32,
    pub visual_id: u32,
    pub cast_time_index: u32,
    pub range_index: u32,
    pub aura_interrupt_flags: AuraInterruptFlags,
}

impl SpellDescriptor {
    /// Creates a descriptor with three empty effect slots.
    pub fn new(id: SpellId) -> Self {
        Self {
            id,
            effects: [EffectDescriptor::EMPTY; 3],
            attributes: SpellAttributes::empty(),
            school_mask: SchoolMask::NORMAL,
            mechanic: Mechanic::None,
            dispel: DispelType::None,
            prevention: PreventionType::None,
            family: SpellFamily::Generic,
            family_flags: FamilyFlags::EMPTY,
            damage_class: DamageClass::None,
            icon_id: 0,
            visual_id: 0,
            cast_time_index: 0,
            range_index: 0,
            aura_interrupt_flags: AuraInterruptFlags::empty(),
        }
    }

    pub fn builder(id: u32) -> SpellDescriptorBuilder {
        SpellDescriptorBuilder {
            spell: Self::new(SpellId(id)),
        }
    }

    #[inline]
    pub fn effect(&self, index: EffectIndex) -> &EffectDescriptor {
        &self.effects[index.as_usize()]
    }

    /// Iterates over non-empty effect slots with their index.
    pub fn active_effects(&self) -> impl Iterator<Item = (EffectIndex, &EffectDescriptor)> + '_ {
        EffectIndex::ALL
            .into_iter()
            .map(move |index| (index, self.effect(index)))
            .filter(|(_, effect)| !effect.is_empty())
    }

    #[inline]
    pub fn has_attribute(&self, attribute: SpellAttributes) -> bool {
        self.attributes.contains(attribute)
    }

    #[inline]
    pub fn is_passive(&self) -> bool {
        self.has_attribute(SpellAttributes::PASSIVE)
    }

    #[inline]
    pub fn is_channeled(&self) -> bool {
        self.has_attribute(SpellAttributes::CHANNELED)
    }

    /// Returns true if the spell belongs to `family` and its flags intersect
    /// `mask`.
    #[inline]
    pub fn is_fit_to_family(&self, family: SpellFamily, mask: u64) -> bool {
        self.family == family && self.family_flags.intersects(mask)
    }

    #[inline]
    pub fn is_fit_to_family_mask(&self, mask: u64) -> bool {
        self.family_flags.intersects(mask)
    }

    /// Effect mechanic, falling back to the spell-wide mechanic.
    pub fn effect_mechanic(&self, index: EffectIndex) -> Mechanic {
        match self.effect(index).mechanic {
            Mechanic::None => self.mechanic,
            mechanic => mechanic,
        }
    }

    /// Paladin seals: only seals carry these family bits, and the seal itself
    /// (not its triggered judgement) targets the caster with effect 0.
    pub fn is_seal(&self) -> bool {
        self.is_fit_to_family(SpellFamily::Paladin, 0x0000_0400_0A00_0200)
            && self.effects[0].target_a == TargetMode::SelfCaster
    }

}

/// Builder for [`SpellDescriptor`]s, used by store loaders and fixtures.
#[derive(Clone, Debug)]
pub struct SpellDescriptorBuilder {
    spell: SpellDescriptor,
}

impl SpellDescriptorBuilder {
    /// Set the effect in `index`.
    pub fn effect(mut self, index: EffectIndex, effect: EffectDescriptor) -> Self {
        self.spell.effects[index.as_usize()] = effect;
        self
    }

    /// Set effect 0.
    pub fn effect0(self, effect: EffectDescriptor) -> Self {
        self.effect(EffectIndex::Effect0, effect)
    }

    /// Set effect 1.
    pub fn effect1(self, effect: EffectDescriptor) -> Self {
        self.effect(EffectIndex::Effect1, effect)
    }

    /// Set effect 2.
    pub fn effect2(self, effect: EffectDescriptor) -> Self {
        self.effect(EffectIndex::Effect2, effect)
    }

    pub fn attributes(mut self, attributes: SpellAttributes) -> Self {
        self.spell.attributes |= attributes;
        self
    }

    pub fn school_mask(mut self, school_mask: SchoolMask) -> Self {
        self.spell.school_mask = school_mask;
        self
    }

    pub fn mechanic(mut self, mechanic: Mechanic) -> Self {
        self.spell.mechanic = mechanic;
        self
    }

    pub fn dispel(mut self, dispel: DispelType) -> Self {
        self.spell.dispel = dispel;
        self
    }

    pub fn prevention(mut self, prevention: PreventionType) -> Self {
        self.spell.prevention = prevention;
        self
    }

    /// Set family tag and family flags.
    pub fn family(mut self, family: SpellFamily, flags: u64) -> Self {
        self.spell.family = family;
        self.spell.family_flags = FamilyFlags(flags);
        self
    }

    pub fn damage_class(mut self, damage_class: DamageClass) -> Self {
        self.spell.damage_class = damage_class;
        self
    }

    /// Set icon and visual ids.
    pub fn visuals(mut self, icon_id: u32, visual_id: u32) -> Self {
        self.spell.icon_id = icon_id;
        self.spell.visual_id = visual_id;
        self
    }

    /// Set cast time and range indices.
    pub fn indices(mut self, cast_time_index: u32, range_index: u32) -> Self {
        self.spell.cast_time_index = cast_time_index;
        self.spell.range_index = range_index;
        self
    }

    pub fn interrupt_flags(mut self, flags: AuraInterruptFlags) -> Self {
        self.spell.aura_interrupt_flags = flags;
        self
    }

    pub fn build(self) -> SpellDescriptor {
        self.spell
    }
}
