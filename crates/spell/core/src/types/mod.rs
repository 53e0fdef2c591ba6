//! Static descriptor types consumed by the engine.
pub mod common;
pub mod effect;
pub mod spell;
pub mod target;

pub use common::{EffectIndex, EffectMask, ObjectGuid, SpellId};
pub use effect::{AuraKind, EffectDescriptor, EffectKind, Mechanic};
pub use spell::{
    AuraInterruptFlags, DamageClass, DispelType, FamilyFlags, PreventionType, SchoolMask,
    SpellAttributes, SpellDescriptor, SpellDescriptorBuilder, SpellFamily,
};
pub use target::TargetMode;
