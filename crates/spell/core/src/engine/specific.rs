//! Spell specifics: coarse exclusivity classes such as seals, curses and
//! elixirs.

use bitflags::bitflags;

use super::{SpellEngine, exceptions};
use crate::store::SpellOracle;
use crate::types::{AuraInterruptFlags, AuraKind, SpellAttributes, SpellDescriptor, SpellFamily};

/// Exclusivity class of a spell.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellSpecific {
    #[default]
    Normal,
    Food,
    Drink,
    FoodAndDrink,
    WellFed,
    FlaskElixir,
    Seal,
    Judgement,
    Blessing,
    Aura,
    Sting,
    Aspect,
    Tracker,
    Curse,
    SoulCapture,
    MageArmor,
    WarlockArmor,
    ElementalShield,
    BattleElixir,
    GuardianElixir,
    ShoutBuff,
    Corruption,
}

impl SpellSpecific {
    #[inline]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// A target may carry one instance of the specific per caster.
    ///
    /// Ranks are not excluded by this rule; they are handled by effect
    /// stacking.
    pub const fn is_unique_per_caster(self) -> bool {
        matches!(
            self,
            Self::Blessing
                | Self::Aura
                | Self::Sting
                | Self::Curse
                | Self::Aspect
                | Self::ShoutBuff
                | Self::Judgement
                | Self::SoulCapture
                | Self::Corruption
        )
    }

    /// A target may carry one instance of the specific, whoever cast it.
    pub const fn is_unique_per_target(self) -> bool {
        matches!(
            self,
            Self::Seal
                | Self::Tracker
                | Self::WarlockArmor
                | Self::MageArmor
                | Self::ElementalShield
                | Self::WellFed
                | Self::BattleElixir
                | Self::GuardianElixir
                | Self::FlaskElixir
                | Self::Food
                | Self::Drink
                | Self::FoodAndDrink
        )
    }

    /// Equal specifics, or specifics sharing a combined group: flasks count
    /// as both elixir kinds, food-and-drink as both food and drink.
    pub const fn is_identical(self, other: Self) -> bool {
        use SpellSpecific::*;
        match self {
            BattleElixir => matches!(other, BattleElixir | FlaskElixir),
            GuardianElixir => matches!(other, GuardianElixir | FlaskElixir),
            FlaskElixir => matches!(other, BattleElixir | GuardianElixir | FlaskElixir),
            Food => matches!(other, Food | FoodAndDrink),
            Drink => matches!(other, Drink | FoodAndDrink),
            FoodAndDrink => matches!(other, Food | Drink | FoodAndDrink),
            _ => self as u8 == other as u8,
        }
    }
}

pub const fn is_specific_unique_per_caster(specific: SpellSpecific) -> bool {
    specific.is_unique_per_caster()
}

pub const fn is_specific_unique_per_target(specific: SpellSpecific) -> bool {
    specific.is_unique_per_target()
}

pub const fn is_specific_identical(specific: SpellSpecific, other: SpellSpecific) -> bool {
    specific.is_identical(other)
}

bitflags! {
    /// Elixir classification bits assigned by data.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ElixirMask: u8 {
        const BATTLE = 0x01;
        const GUARDIAN = 0x02;
        const FLASK = Self::BATTLE.bits() | Self::GUARDIAN.bits();
        const UNSTABLE = 0x04;
        const SHATTRATH = 0x08;
        /// Foods filed under the potion family.
        const WELL_FED = 0x10;
    }
}

impl ElixirMask {
    /// Specific implied by the mask alone.
    pub fn specific(self) -> SpellSpecific {
        if self.contains(Self::FLASK) {
            SpellSpecific::FlaskElixir
        } else if self.contains(Self::BATTLE) {
            SpellSpecific::BattleElixir
        } else if self.contains(Self::GUARDIAN) {
            SpellSpecific::GuardianElixir
        } else if self.contains(Self::WELL_FED) {
            SpellSpecific::WellFed
        } else {
            SpellSpecific::Normal
        }
    }
}

/// Food, drink and well-fed detection from descriptor fields.
pub fn food_specific(spell: &SpellDescriptor) -> SpellSpecific {
    if spell
        .aura_interrupt_flags
        .contains(AuraInterruptFlags::NOT_SEATED)
    {
        if spell.family == SpellFamily::Generic {
            let mut food = false;
            let mut drink = false;
            for effect in &spell.effects {
                match effect.aura {
                    AuraKind::ModRegen | AuraKind::ObsModHealth => food = true,
                    AuraKind::ModPowerRegen | AuraKind::ObsModMana => drink = true,
                    _ => {}
                }
            }
            match (food, drink) {
                (true, true) => return SpellSpecific::FoodAndDrink,
                (true, false) => return SpellSpecific::Food,
                (false, true) => return SpellSpecific::Drink,
                (false, false) => {}
            }
        }
    } else if spell.has_attribute(SpellAttributes::FOOD_BUFF) {
        return SpellSpecific::WellFed;
    }

    if exceptions::is_listed_well_fed(spell.id) {
        return SpellSpecific::WellFed;
    }
    SpellSpecific::Normal
}

impl<S: SpellOracle + ?Sized> SpellEngine<'_, S> {
    /// Resolves the specific of a spell: data overrides first, then seals,
    /// elixir data and food classification.
    pub fn spell_specific(&self, spell: &SpellDescriptor) -> SpellSpecific {
        if let Some(specific) = self.store.specific_override(spell.id) {
            return specific;
        }
        if spell.is_seal() {
            return SpellSpecific::Seal;
        }
        match self.store.elixir_mask(spell.id).specific() {
            SpellSpecific::Normal => food_specific(spell),
            specific => specific,
        }
    }

    /// True if both spells have a non-normal specific from the same group.
    pub fn is_same_specific_group(&self, spell: &SpellDescriptor, other: &SpellDescriptor) -> bool {
        let specific = self.spell_specific(spell);
        !specific.is_normal() && specific.is_identical(self.spell_specific(other))
    }
}
