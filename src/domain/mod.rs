//! Domain layer for the typeahead controller.
//!
//! This module contains the core domain types shared across the crate,
//! independent of any particular suggestion source or host surface. It keeps
//! error vocabulary and the suggestion model isolated from the reducer and
//! dispatcher machinery.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`suggestion`]: Suggestion domain model and usage tracking
//!
//! # Examples
//!
//! ```
//! use typeahead::domain::{Result, Suggestion};
//!
//! fn seed() -> Result<Vec<Suggestion>> {
//!     Ok(vec![Suggestion::new("humor"), Suggestion::new("hominid")])
//! }
//! ```

pub mod error;
pub mod suggestion;

pub use error::{QueryError, Result, TypeaheadError};
pub use suggestion::Suggestion;
