//! Common error infrastructure for spell-core.
//!
//! Engine queries never fail: missing data degrades towards the permissive
//! answer. Errors only exist where data is loaded or looked up explicitly.
//! Domain errors (`StoreError`, `LookupError`) live next to the store.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with other input
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: inconsistent data that needs investigation
/// - **Fatal**: the descriptor table cannot be used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Example: looking up a spell id that is not loaded.
    Recoverable,

    /// Example: a descriptor registered twice.
    Validation,

    /// Example: a rank chain pointing at a spell that does not exist.
    Internal,

    /// Example: a rank chain that loops back on itself.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates broken data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all spell-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait SpellError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
