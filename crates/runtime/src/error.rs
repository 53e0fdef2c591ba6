//! Errors surfaced by the aura book.
use spell_core::{ErrorSeverity, SpellError, SpellId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{0} is not loaded in the spell store")]
    UnknownSpell(SpellId),

    #[error("{0} does not apply any aura")]
    NotAnAura(SpellId),
}

impl SpellError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSpell(_) => ErrorSeverity::Recoverable,
            Self::NotAnAura(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSpell(_) => "RUNTIME_UNKNOWN_SPELL",
            Self::NotAnAura(_) => "RUNTIME_NOT_AN_AURA",
        }
    }
}
