//! Aura application on top of the `spell-core` rules.
//!
//! `spell-core` only answers questions; this crate keeps the state those
//! answers are applied to. [`AuraBook`] records which holders sit on which
//! target and consults a [`spell_core::SpellEngine`] whenever a new aura
//! arrives, replacing or rejecting holders according to the verdict.
//!
//! - [`book`] hosts the per-target holder book
//! - [`holder`] defines the owned holder the book stores
//! - [`error`] collects the failures surfaced to callers
pub mod book;
pub mod error;
pub mod holder;

pub use book::{ApplyOutcome, AuraBook};
pub use error::{Result, RuntimeError};
pub use holder::{AppliedAura, AuraHolder};
