//! Read-only views of live world state.
//!
//! The engine never owns units or auras. The unit/aura subsystem exposes them
//! through these traits; the snapshot types are owned adapters for callers
//! that copy the relevant fields out (and for tests).
//!
//! Callers must not mutate a holder while a query over its view is running.

use crate::types::{EffectIndex, ObjectGuid, SpellId};

/// Type of a world object, as far as spell relationships care.
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
pub enum ObjectKind {
    Player,
    Creature,
    GameObject,
    DynamicObject,
    Corpse,
}

impl ObjectKind {
    /// Players and creatures.
    #[inline]
    pub const fn is_unit(self) -> bool {
        matches!(self, Self::Player | Self::Creature)
    }
}

/// A caster or target participating in a polarity or stacking query.
pub trait WorldObjectView {
    fn guid(&self) -> ObjectGuid;

    fn kind(&self) -> ObjectKind;

    /// Live friendliness of `self` towards `target`.
    fn is_friendly_to(&self, target: &dyn WorldObjectView) -> bool;

    /// Whether the object is controlled by a player (players, their pets and
    /// charmed units).
    fn is_player_controlled(&self) -> bool {
        self.kind() == ObjectKind::Player
    }

    /// Faction template, when the object has one.
    fn faction(&self) -> Option<u32> {
        None
    }
}

/// One applied aura effect inside a holder.
pub trait AuraEffectView {
    /// Current modifier amount including all stacks.
    fn amount(&self) -> i32;

    fn stack_amount(&self) -> u32;

    /// Modifier amount of a single stack. A zero stack count counts as one.
    fn per_stack_amount(&self) -> i32 {
        let stacks = self.stack_amount().max(1);
        self.amount() / i32::try_from(stacks).unwrap_or(i32::MAX)
    }
}

/// All aura effects created by one application of one spell to one target.
pub trait AuraHolderView {
    fn spell_id(&self) -> SpellId;

    fn caster_guid(&self) -> Option<ObjectGuid>;

    fn target_guid(&self) -> ObjectGuid;

    /// The applied aura for an effect slot, if that slot produced one.
    fn aura(&self, index: EffectIndex) -> Option<&dyn AuraEffectView>;
}

/// Caster state needed to estimate a not-yet-applied spell's magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasterSnapshot {
    pub guid: ObjectGuid,
    pub kind: ObjectKind,
    pub combo_points: u8,
    pub combo_target: Option<ObjectGuid>,
}

impl CasterSnapshot {
    pub const fn new(guid: ObjectGuid, kind: ObjectKind) -> Self {
        Self {
            guid,
            kind,
            combo_points: 0,
            combo_target: None,
        }
    }

    #[must_use]
    pub const fn with_combo(mut self, points: u8, target: ObjectGuid) -> Self {
        self.combo_points = points;
        self.combo_target = Some(target);
        self
    }

    /// Combo points usable against `target`. Only players hold combo points.
    pub fn combo_points_on(&self, target: ObjectGuid) -> u8 {
        match (self.kind, self.combo_target) {
            (ObjectKind::Player, Some(combo_target)) if combo_target == target => {
                self.combo_points
            }
            _ => 0,
        }
    }
}

/// Owned [`WorldObjectView`] whose friendliness is decided by faction equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSnapshot {
    pub guid: ObjectGuid,
    pub kind: ObjectKind,
    pub faction: u32,
    pub player_controlled: bool,
}

impl UnitSnapshot {
    pub const fn new(guid: ObjectGuid, kind: ObjectKind, faction: u32) -> Self {
        Self {
            guid,
            kind,
            faction,
            player_controlled: matches!(kind, ObjectKind::Player),
        }
    }

    pub const fn player(guid: u64, faction: u32) -> Self {
        Self::new(ObjectGuid(guid), ObjectKind::Player, faction)
    }

    pub const fn creature(guid: u64, faction: u32) -> Self {
        Self::new(ObjectGuid(guid), ObjectKind::Creature, faction)
    }

    #[must_use]
    pub const fn with_player_controlled(mut self, player_controlled: bool) -> Self {
        self.player_controlled = player_controlled;
        self
    }
}

impl WorldObjectView for UnitSnapshot {
    fn guid(&self) -> ObjectGuid {
        self.guid
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn is_friendly_to(&self, target: &dyn WorldObjectView) -> bool {
        if target.guid() == self.guid {
            return true;
        }
        target.faction() == Some(self.faction)
    }

    fn is_player_controlled(&self) -> bool {
        self.player_controlled
    }

    fn faction(&self) -> Option<u32> {
        Some(self.faction)
    }
}

/// Owned [`AuraEffectView`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraEffectSnapshot {
    pub amount: i32,
    pub stack_amount: u32,
}

impl AuraEffectSnapshot {
    pub const fn new(amount: i32, stack_amount: u32) -> Self {
        Self {
            amount,
            stack_amount,
        }
    }
}

impl AuraEffectView for AuraEffectSnapshot {
    fn amount(&self) -> i32 {
        self.amount
    }

    fn stack_amount(&self) -> u32 {
        self.stack_amount
    }
}

/// Owned [`AuraHolderView`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraHolderSnapshot {
    pub spell_id: SpellId,
    pub caster: Option<ObjectGuid>,
    pub target: ObjectGuid,
    pub auras: [Option<AuraEffectSnapshot>; 3],
}

impl AuraHolderSnapshot {
    pub fn new(spell_id: SpellId, target: ObjectGuid) -> Self {
        Self {
            spell_id,
            caster: None,
            target,
            auras: [None; 3],
        }
    }

    #[must_use]
    pub fn with_caster(mut self, caster: ObjectGuid) -> Self {
        self.caster = Some(caster);
        self
    }

    /// Records the applied aura of `index` with its full amount and stacks.
    #[must_use]
    pub fn with_aura(mut self, index: EffectIndex, amount: i32, stack_amount: u32) -> Self {
        self.auras[index.as_usize()] = Some(AuraEffectSnapshot::new(amount, stack_amount));
        self
    }
}

impl AuraHolderView for AuraHolderSnapshot {
    fn spell_id(&self) -> SpellId {
        self.spell_id
    }

    fn caster_guid(&self) -> Option<ObjectGuid> {
        self.caster
    }

    fn target_guid(&self) -> ObjectGuid {
        self.target
    }

    fn aura(&self, index: EffectIndex) -> Option<&dyn AuraEffectView> {
        self.auras[index.as_usize()]
            .as_ref()
            .map(|aura| aura as &dyn AuraEffectView)
    }
}
