//! Deterministic spell and aura interaction rules.
//!
//! `spell-core` decides whether a spell effect helps or harms its target,
//! whether a new aura may coexist with one already on the target, and which of
//! two exclusive auras is stronger. All queries run through
//! [`engine::SpellEngine`] over an immutable [`store::SpellStore`]; live units
//! and auras are only seen through the read-only views in [`world`].
pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod types;
pub mod world;

pub use config::EngineConfig;
pub use engine::{
    AuraConflict, Candidate, ElixirMask, Polarity, SimilarPairs, SpellEngine, SpellSpecific,
};
pub use error::{ErrorSeverity, SpellError};
pub use store::{ChainNode, LookupError, SpellOracle, SpellStore, SpellStoreBuilder, StoreError};
pub use types::{
    AuraInterruptFlags, AuraKind, DamageClass, DispelType, EffectDescriptor, EffectIndex,
    EffectKind, EffectMask, FamilyFlags, Mechanic, ObjectGuid, PreventionType, SchoolMask,
    SpellAttributes, SpellDescriptor, SpellDescriptorBuilder, SpellFamily, SpellId, TargetMode,
};
pub use world::{
    AuraEffectSnapshot, AuraEffectView, AuraHolderSnapshot, AuraHolderView, CasterSnapshot,
    ObjectKind, UnitSnapshot, WorldObjectView,
};
