//! Error Types
//!
//! Every failure in the binding engine is a programming or configuration
//! mistake: a missing store at setup, a declared type that disagrees with
//! the state tree, or a dispatch naming an action the component never
//! registered. There are no transient failures and no retries; errors are
//! surfaced to the immediate caller and never masked.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the binding engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A binder was created without a store. A store is mandatory; there is
    /// no default.
    #[error("missing state store")]
    MissingStore,

    /// An array-declared property received a value of another shape from
    /// the state tree. Carries the component tag, the property name and the
    /// kind of the offending value.
    #[error("<{component}>.{property} is declared Array but state holds {actual}")]
    ArrayTypeMismatch {
        component: String,
        property: String,
        actual: &'static str,
    },

    /// A named dispatch referenced an action creator the component does not
    /// provide.
    #[error("<{component}> has no action \"{action}\"")]
    MissingAction { component: String, action: String },
}
