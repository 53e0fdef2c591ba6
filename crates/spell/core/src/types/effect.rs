//! Effect slot descriptors and their closed tag sets.
//!
//! Every spell carries exactly three [`EffectDescriptor`]s. A slot whose
//! [`EffectKind`] is [`EffectKind::None`] is empty and ignored by every rule.

use super::common::SpellId;
use super::target::TargetMode;

/// What an effect slot does when the spell lands.
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
pub enum EffectKind {
    /// Empty slot.
    #[default]
    None,
    Instakill,
    SchoolDamage,
    Dummy,
    PortalTeleport,
    TeleportUnits,
    ApplyAura,
    EnvironmentalDamage,
    PowerDrain,
    HealthLeech,
    Heal,
    Bind,
    QuestComplete,
    WeaponDamageNoSchool,
    Resurrect,
    Energize,
    WeaponPercentDamage,
    TriggerMissile,
    OpenLock,
    SummonChangeItem,
    ApplyAreaAuraParty,
    LearnSpell,
    Dispel,
    Summon,
    WeaponDamage,
    PersistentAreaAura,
    CreateItem,
    TriggerSpell,
    ScriptEffect,
    SendTaxi,
    NormalizedWeaponDamage,
    TriggerSpellWithValue,
    TriggerSpell2,
    KillCreditGroup,
    ApplyAreaAuraPet,
    ApplyAreaAuraFriend,
    ApplyAreaAuraEnemy,
    ApplyAreaAuraOwner,
    PowerBurn,
    Threat,
    Interrupt,
    Knockback,
    Charge,
    Leap,
    HealMaxHealth,
    Stuck,
}

impl EffectKind {
    /// Returns true for every effect that places an aura on its targets.
    pub const fn is_aura_apply(self) -> bool {
        matches!(
            self,
            Self::ApplyAura
                | Self::PersistentAreaAura
                | Self::ApplyAreaAuraParty
                | Self::ApplyAreaAuraPet
                | Self::ApplyAreaAuraFriend
                | Self::ApplyAreaAuraEnemy
                | Self::ApplyAreaAuraOwner
        )
    }

    /// Effects that cast another spell.
    pub const fn is_trigger_spell(self) -> bool {
        matches!(
            self,
            Self::TriggerMissile
                | Self::TriggerSpell
                | Self::TriggerSpellWithValue
                | Self::TriggerSpell2
        )
    }

}

/// The aura mechanism applied by an aura-bearing effect.
///
/// Only meaningful when the owning effect is aura-related; [`AuraKind::None`]
/// marks a non-aura slot.
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
pub enum AuraKind {
    #[default]
    None,
    // ========================================================================
    // Dummy & triggers
    // ========================================================================
    Dummy,
    PeriodicDummy,
    PeriodicTriggerSpell,
    PeriodicTriggerSpellWithValue,
    ProcTriggerSpell,
    ProcTriggerSpellWithValue,
    ProcTriggerDamage,

    // ========================================================================
    // Periodic damage, leech & healing
    // ========================================================================
    PeriodicDamage,
    PeriodicDamagePercent,
    PeriodicLeech,
    PeriodicManaLeech,
    PowerBurnMana,
    PeriodicHeal,
    PeriodicEnergize,
    PeriodicHealthFunnel,
    ObsModHealth,
    ObsModMana,
    ModRegen,
    ModPowerRegen,
    ModHealthRegenPercent,

    // ========================================================================
    // Stat & combat modifiers
    // ========================================================================
    ModAttackPower,
    RangedAttackPowerAttackerBonus,
    MeleeAttackPowerAttackerBonus,
    ModResistance,
    ModResistancePct,
    ModStat,
    ModTotalStatPercentage,
    ModPercentStat,
    ModIncreaseHealth,
    ModHealingDone,
    ModHealingPct,
    ModMeleeHaste,
    ModRangedHaste,
    ModDamageDone,
    ModDamagePercentDone,
    ModDamageTaken,
    ModDamagePercentTaken,
    ModDecreaseSpeed,
    ModIncreaseSpeed,
    ModRating,
    ModSpellCritChance,
    ModSpellHitChance,
    ModSkill,
    ModThreat,
    SchoolAbsorb,

    // ========================================================================
    // Crowd control
    // ========================================================================
    ModFear,
    ModConfuse,
    ModStun,
    ModRoot,
    ModSilence,
    ModPacify,
    PreventsFleeing,

    // ========================================================================
    // Control & exclusive states
    // ========================================================================
    ModPossess,
    ModPossessPet,
    ModCharm,
    AoeCharm,
    DamageShield,
    ModShapeshift,
    Mounted,
    Empathy,
    ModCastingSpeedNotStack,
    ModMountedSpeedNotStack,
    HasteSpells,
    SpellMagnet,

    // ========================================================================
    // Misc
    // ========================================================================
    ModStealth,
    ModInvisibility,
    MechanicImmunity,
    SchoolImmunity,
}

impl AuraKind {
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Categorical crowd-control / debuff tag used for mutual exclusion.
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
#[repr(u8)]
pub enum Mechanic {
    #[default]
    None = 0,
    Charm = 1,
    Disoriented = 2,
    Disarm = 3,
    Distract = 4,
    Fear = 5,
    Fumble = 6,
    Root = 7,
    Pacify = 8,
    Silence = 9,
    Sleep = 10,
    Snare = 11,
    Stun = 12,
    Freeze = 13,
    Knockout = 14,
    Bleed = 15,
    Bandage = 16,
    Polymorph = 17,
    Banish = 18,
    Shield = 19,
    Shackle = 20,
    Mount = 21,
    Persuade = 22,
    Turn = 23,
    Horror = 24,
    Invulnerability = 25,
    Interrupt = 26,
    Daze = 27,
    Discovery = 28,
    ImmuneShield = 29,
    Sapped = 30,
}

impl Mechanic {
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One of the three effect slots of a spell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDescriptor {
    pub kind: EffectKind,
    pub aura: AuraKind,
    /// Primary implicit target mode.
    pub target_a: TargetMode,
    /// Secondary implicit target mode.
    pub target_b: TargetMode,
    /// Signed static magnitude.
    pub base_points: i32,
    pub mechanic: Mechanic,
    /// Kind-specific discriminant (stat, school mask, power type, ...).
    pub misc_value: i32,
    /// Extra magnitude per combo point held by the caster.
    pub points_per_combo_point: f32,
    /// Spell cast by trigger effects.
    pub trigger_spell: SpellId,
}

impl EffectDescriptor {
    /// The empty slot.
    pub const EMPTY: Self = Self {
        kind: EffectKind::None,
        aura: AuraKind::None,
        target_a: TargetMode::None,
        target_b: TargetMode::None,
        base_points: 0,
        mechanic: Mechanic::None,
        misc_value: 0,
        points_per_combo_point: 0.0,
        trigger_spell: SpellId::NONE,
    };

    /// Creates a non-aura effect of the given kind.
    pub const fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            ..Self::EMPTY
        }
    }

    /// Creates an `ApplyAura` effect carrying `aura`.
    pub const fn apply_aura(aura: AuraKind) -> Self {
        Self {
            kind: EffectKind::ApplyAura,
            aura,
            ..Self::EMPTY
        }
    }

    /// Creates an aura effect applied through a specific effect kind
    /// (area auras, persistent auras).
    pub const fn aura_with_kind(kind: EffectKind, aura: AuraKind) -> Self {
        Self {
            kind,
            aura,
            ..Self::EMPTY
        }
    }

    /// Creates a trigger effect casting `spell`.
    pub const fn trigger(kind: EffectKind, spell: SpellId) -> Self {
        Self {
            kind,
            trigger_spell: spell,
            ..Self::EMPTY
        }
    }

    #[must_use]
    pub const fn with_targets(mut self, target_a: TargetMode, target_b: TargetMode) -> Self {
        self.target_a = target_a;
        self.target_b = target_b;
        self
    }

    #[must_use]
    pub const fn with_base_points(mut self, base_points: i32) -> Self {
        self.base_points = base_points;
        self
    }

    #[must_use]
    pub const fn with_mechanic(mut self, mechanic: Mechanic) -> Self {
        self.mechanic = mechanic;
        self
    }

    #[must_use]
    pub const fn with_misc_value(mut self, misc_value: i32) -> Self {
        self.misc_value = misc_value;
        self
    }

    #[must_use]
    pub const fn with_combo_points(mut self, points_per_combo_point: f32) -> Self {
        self.points_per_combo_point = points_per_combo_point;
        self
    }

    /// Returns true for an unused slot.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, EffectKind::None)
    }

    /// Returns true if the slot places an aura.
    #[inline]
    pub const fn is_aura_apply(&self) -> bool {
        self.kind.is_aura_apply()
    }

    /// Returns true if the slot casts another spell.
    #[inline]
    pub const fn is_trigger_spell(&self) -> bool {
        self.kind.is_trigger_spell()
    }

}
