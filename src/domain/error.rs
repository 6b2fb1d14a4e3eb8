//! Error types for the typeahead controller.
//!
//! This module defines two layers of failure. [`TypeaheadError`] is the
//! centralized host-facing error type, with a [`Result`] alias used throughout
//! the crate. [`QueryError`] is narrower: it describes why a single suggestion
//! lookup settled without results and travels back through the action stream
//! rather than through `?`. Both are implemented with the `thiserror` crate.

use thiserror::Error;

/// The main error type for typeahead operations.
///
/// This enum consolidates the error conditions that can occur while loading
/// configuration, reading a lexicon from disk, or driving the dispatcher.
/// I/O failures convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use typeahead::TypeaheadError;
///
/// fn validate_config() -> Result<(), TypeaheadError> {
///     Err(TypeaheadError::Config("min_query_len must be non-zero".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TypeaheadError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or contains
    /// malformed values. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lexicon loading or parsing failed.
    ///
    /// Occurs when a suggestion lexicon file cannot be decoded. The string
    /// contains a description of what went wrong.
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// The dispatcher could not fork a suggestion lookup.
    ///
    /// Occurs when the task executor refuses a spawn, typically because it
    /// has shut down. The string contains details from the executor.
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a suggestion lookup settled without producing menu items.
///
/// A lookup is a fallible asynchronous exchange, so its failure is data, not
/// a control-flow abort: the dispatcher folds it back into the action stream
/// as a menu-clearing action. The two variants keep suppression by an input
/// guard distinguishable from a lookup that genuinely failed, so observers
/// and logs can tell "too short to search" apart from "search broke".
///
/// # Examples
///
/// ```
/// use typeahead::QueryError;
///
/// let err = QueryError::Failed("lexicon unavailable".to_string());
/// assert_eq!(err.to_string(), "Query failed: lexicon unavailable");
/// assert_ne!(err, QueryError::Suppressed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The input guard rejected the query before any lookup ran.
    ///
    /// Typically raised for inputs shorter than the configured minimum
    /// length. The menu is cleared, but nothing was actually searched.
    #[error("Query suppressed by input guard")]
    Suppressed,

    /// The lookup ran and failed.
    ///
    /// The string contains a description of the failure from the
    /// suggestion source.
    #[error("Query failed: {0}")]
    Failed(String),
}

/// A specialized `Result` type for typeahead operations.
///
/// This is a type alias for `std::result::Result<T, TypeaheadError>` that
/// simplifies function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use typeahead::Result;
///
/// fn load_defaults() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TypeaheadError>;
