//! Read-only spell descriptor store.
//!
//! The engine reads static data exclusively through [`SpellOracle`].
//! [`SpellStore`] is the load-once in-memory implementation.
mod chain;
mod error;
mod memory;

pub use chain::ChainNode;
pub use error::{LookupError, StoreError};
pub use memory::{SpellStore, SpellStoreBuilder};

use crate::engine::{ElixirMask, SpellSpecific};
use crate::types::{SpellDescriptor, SpellId};

/// Oracle providing immutable spell descriptors and the tables derived from
/// them.
pub trait SpellOracle: Send + Sync {
    fn spell(&self, id: SpellId) -> Option<&SpellDescriptor>;

    /// Rank chain entry, if the spell is part of a chain.
    fn chain(&self, id: SpellId) -> Option<&ChainNode>;

    /// Spells whose previous rank is `id`.
    fn next_ranks(&self, id: SpellId) -> &[SpellId];

    /// Elixir classification bits; empty for spells that are not elixirs.
    fn elixir_mask(&self, id: SpellId) -> ElixirMask;

    /// Specific assigned by data rather than derived from the descriptor.
    fn specific_override(&self, id: SpellId) -> Option<SpellSpecific>;
}
