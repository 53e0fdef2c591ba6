//! Store loading and lookup errors.

use crate::error::{ErrorSeverity, SpellError};
use crate::types::SpellId;

/// Errors raised while building a [`SpellStore`](super::SpellStore).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreError {
    /// The same spell id was registered more than once.
    #[error("{0} registered more than once")]
    DuplicateSpell(SpellId),

    /// A chain entry links to a spell that is not loaded.
    #[error("chain entry of {spell} references unknown {missing}")]
    UnknownChainReference { spell: SpellId, missing: SpellId },

    /// Walking the prev-rank links from a spell revisits a spell.
    #[error("rank chain through {0} contains a cycle")]
    ChainCycle(SpellId),
}

impl SpellError for StoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateSpell(_) => ErrorSeverity::Validation,
            Self::UnknownChainReference { .. } => ErrorSeverity::Internal,
            Self::ChainCycle(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateSpell(_) => "STORE_DUPLICATE_SPELL",
            Self::UnknownChainReference { .. } => "STORE_UNKNOWN_CHAIN_REFERENCE",
            Self::ChainCycle(_) => "STORE_CHAIN_CYCLE",
        }
    }
}

/// Errors raised by explicit lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LookupError {
    #[error("{0} not found")]
    SpellNotFound(SpellId),
}

impl SpellError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SpellNotFound(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SpellNotFound(_) => "LOOKUP_SPELL_NOT_FOUND",
        }
    }
}
