//! Error types for hook configuration.
//!
//! Compiling a style sheet and merging styles never fail: conditions that
//! cannot apply and values that cannot be stringified are dropped. Errors only
//! surface while a configuration is being built or loaded.

use thiserror::Error;

/// Errors that can occur while building or loading a hooks configuration.
///
/// # Examples
///
/// ```rust
/// use hooks::{HookImpl, HooksError};
///
/// let result = HookImpl::parse(":hover");
/// assert!(matches!(result, Err(HooksError::InvalidHookImpl(_))));
/// ```
#[derive(Error, Debug)]
pub enum HooksError {
    /// A hook implementation is neither a selector template containing `&`
    /// nor an `@media`, `@container` or `@supports` rule.
    #[error(
        "invalid hook implementation `{0}`: expected a selector containing `&` or an @media, @container or @supports rule"
    )]
    InvalidHookImpl(String),

    /// The configuration could not be decoded from, or encoded to, JSON.
    #[error("invalid hooks configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading a configuration file.
    #[error("I/O error reading hooks configuration")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HooksError>;
