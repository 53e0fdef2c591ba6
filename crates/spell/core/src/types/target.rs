//! Implicit target modes of effect slots.
//!
//! Target modes drive the generic polarity fallback: every known mode belongs
//! to exactly one of the friendly, hostile, script or neutral groups. Raw
//! codes without a known meaning are carried as [`TargetMode::Other`] and are
//! reported as unhandled by the classifier.

/// Implicit target selection of an effect slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetMode {
    #[default]
    None,
    // ========================================================================
    // Friendly
    // ========================================================================
    SelfCaster,
    Self2,
    RandomFriendChainInArea,
    Pet,
    AllPartyAroundCaster,
    AllPartyAroundCaster2,
    SingleFriend,
    SingleFriend2,
    Master,
    AllFriendlyUnitsAroundCaster,
    AllFriendlyUnitsInArea,
    Minion,
    AllParty,
    SingleParty,
    AreaEffectParty,
    SelfFishing,
    ChainHeal,
    AllRaidAroundCaster,
    FriendlyFrontalCone,
    AreaEffectPartyAndClass,
    NoncombatPet,

    // ========================================================================
    // Hostile
    // ========================================================================
    RandomEnemyChainInArea,
    ChainDamage,
    AllEnemyInArea,
    AllEnemyInAreaInstant,
    InFrontOfCaster,
    AllEnemyInAreaChanneled,
    AllHostileUnitsAroundCaster,
    CurrentEnemyCoordinates,
    LargeFrontalCone,

    // ========================================================================
    // Script-selected
    // ========================================================================
    Script,
    ScriptCoordinates,
    FocusOrScriptedGameobject,
    AreaEffectInstant,
    AreaEffectCustom,
    AreaEffectGoAroundSource,
    AreaEffectGoAroundDest,
    NarrowFrontalCone,

    // ========================================================================
    // Neutral: relationship dependent units
    // ========================================================================
    RandomUnitChainInArea,
    Unknown11,
    DuelVsPlayer,
    Unknown29,
    Unknown58,
    Unknown70,
    Unknown74,
    RandomCircumferenceAroundTarget,

    // ========================================================================
    // Neutral: points, objects and geometry
    // ========================================================================
    InnkeeperCoordinates,
    TableXyzCoordinates,
    EffectSelect,
    CasterCoordinates,
    Gameobject,
    GameobjectItem,
    TotemEarth,
    TotemWater,
    TotemAir,
    TotemFire,
    DynamicObjectFront,
    DynamicObjectBehind,
    DynamicObjectLeftSide,
    DynamicObjectRightSide,
    DestCasterFrontLeap,
    DuelVsPlayerCoordinates,
    InfrontOfVictim,
    BehindVictim,
    RightFromVictim,
    LeftFromVictim,
    RandomNearbyLoc,
    RandomCircumferencePoint,
    DynamicObjectCoordinates,
    PointAtNorth,
    PointAtSouth,
    PointAtEast,
    PointAtWest,
    PointAtNe,
    PointAtNw,
    PointAtSe,
    PointAtSw,
    RandomNearbyDest,
    Unknown88,

    /// Raw target code without a known classification.
    Other(u16),
}

impl TargetMode {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn is_friendly(self) -> bool {
        matches!(
            self,
            Self::SelfCaster
                | Self::RandomFriendChainInArea
                | Self::Pet
                | Self::AllPartyAroundCaster
                | Self::SingleFriend
                | Self::Master
                | Self::AllFriendlyUnitsAroundCaster
                | Self::AllFriendlyUnitsInArea
                | Self::Minion
                | Self::AllParty
                | Self::AllPartyAroundCaster2
                | Self::SingleParty
                | Self::AreaEffectParty
                | Self::SelfFishing
                | Self::ChainHeal
                | Self::AllRaidAroundCaster
                | Self::SingleFriend2
                | Self::FriendlyFrontalCone
                | Self::AreaEffectPartyAndClass
                | Self::Self2
                | Self::NoncombatPet
        )
    }

    pub const fn is_hostile(self) -> bool {
        matches!(
            self,
            Self::RandomEnemyChainInArea
                | Self::ChainDamage
                | Self::AllEnemyInArea
                | Self::AllEnemyInAreaInstant
                | Self::InFrontOfCaster
                | Self::AllEnemyInAreaChanneled
                | Self::AllHostileUnitsAroundCaster
                | Self::CurrentEnemyCoordinates
                | Self::LargeFrontalCone
        )
    }

    pub const fn is_script(self) -> bool {
        matches!(
            self,
            Self::Script
                | Self::ScriptCoordinates
                | Self::FocusOrScriptedGameobject
                | Self::AreaEffectInstant
                | Self::AreaEffectCustom
                | Self::AreaEffectGoAroundSource
                | Self::AreaEffectGoAroundDest
                | Self::NarrowFrontalCone
        )
    }

    /// Neutral modes, including [`TargetMode::None`] and codes whose meaning
    /// is still unresearched.
    pub const fn is_neutral(self) -> bool {
        matches!(
            self,
            Self::None
                | Self::RandomUnitChainInArea
                | Self::InnkeeperCoordinates
                | Self::Unknown11
                | Self::TableXyzCoordinates
                | Self::EffectSelect
                | Self::CasterCoordinates
                | Self::Gameobject
                | Self::DuelVsPlayer
                | Self::GameobjectItem
                | Self::Unknown29
                | Self::TotemEarth
                | Self::TotemWater
                | Self::TotemAir
                | Self::TotemFire
                | Self::DynamicObjectFront
                | Self::DynamicObjectBehind
                | Self::DynamicObjectLeftSide
                | Self::DynamicObjectRightSide
                | Self::DestCasterFrontLeap
                | Self::Unknown58
                | Self::DuelVsPlayerCoordinates
                | Self::InfrontOfVictim
                | Self::BehindVictim
                | Self::RightFromVictim
                | Self::LeftFromVictim
                | Self::Unknown70
                | Self::RandomNearbyLoc
                | Self::RandomCircumferencePoint
                | Self::Unknown74
                | Self::RandomCircumferenceAroundTarget
                | Self::DynamicObjectCoordinates
                | Self::PointAtNorth
                | Self::PointAtSouth
                | Self::PointAtEast
                | Self::PointAtWest
                | Self::PointAtNe
                | Self::PointAtNw
                | Self::PointAtSe
                | Self::PointAtSw
                | Self::RandomNearbyDest
                | Self::Unknown88
        )
    }

    /// Neutral unit selections whose polarity follows the live caster/target
    /// relationship.
    pub const fn is_relation_dependent(self) -> bool {
        matches!(
            self,
            Self::RandomUnitChainInArea
                | Self::Unknown11
                | Self::DuelVsPlayer
                | Self::Unknown29
                | Self::Unknown58
                | Self::Unknown70
                | Self::Unknown74
                | Self::RandomCircumferenceAroundTarget
        )
    }

    /// Modes that select a point in space rather than a unit.
    pub const fn is_point(self) -> bool {
        matches!(
            self,
            Self::InnkeeperCoordinates
                | Self::TableXyzCoordinates
                | Self::CasterCoordinates
                | Self::ScriptCoordinates
                | Self::CurrentEnemyCoordinates
                | Self::DuelVsPlayerCoordinates
                | Self::DynamicObjectCoordinates
                | Self::PointAtNorth
                | Self::PointAtSouth
                | Self::PointAtEast
                | Self::PointAtWest
                | Self::PointAtNe
                | Self::PointAtNw
                | Self::PointAtSe
                | Self::PointAtSw
        )
    }

    /// Returns true if no classification group claims this mode.
    pub const fn is_unclassified(self) -> bool {
        !(self.is_friendly() || self.is_hostile() || self.is_script() || self.is_neutral())
    }
}
