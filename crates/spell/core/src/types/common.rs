use std::fmt;

/// Numeric identifier of a spell descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellId(pub u32);

impl SpellId {
    /// Reserved identifier meaning "no spell" (empty chain link, no trigger).
    pub const NONE: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns true if this identifier refers to an actual spell.
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spell#{}", self.0)
    }
}

impl From<u32> for SpellId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Globally unique identifier of a live world object (unit, player, object).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectGuid(pub u64);

impl fmt::Display for ObjectGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guid#{:x}", self.0)
    }
}

/// Index of one of the three effect slots of a spell.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EffectIndex {
    #[strum(serialize = "effect0")]
    Effect0 = 0,
    #[strum(serialize = "effect1")]
    Effect1 = 1,
    #[strum(serialize = "effect2")]
    Effect2 = 2,
}

impl EffectIndex {
    /// All effect slots in ascending order.
    pub const ALL: [Self; 3] = [Self::Effect0, Self::Effect1, Self::Effect2];

    #[inline]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Bit of this slot inside an [`EffectMask`].
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub const fn from_usize(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Effect0),
            1 => Some(Self::Effect1),
            2 => Some(Self::Effect2),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Selection of effect slots, one bit per [`EffectIndex`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EffectMask: u8 {
        const EFFECT_0 = 1 << 0;
        const EFFECT_1 = 1 << 1;
        const EFFECT_2 = 1 << 2;
    }
}

impl EffectMask {
    #[inline]
    pub const fn contains_index(self, index: EffectIndex) -> bool {
        self.bits() & index.bit() != 0
    }
}

impl Default for EffectMask {
    fn default() -> Self {
        Self::all()
    }
}

impl From<EffectIndex> for EffectMask {
    fn from(index: EffectIndex) -> Self {
        Self::from_bits_truncate(index.bit())
    }
}
