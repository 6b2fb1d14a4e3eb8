//! Typeahead: a reducer-driven autocomplete controller.
//!
//! Typeahead models an autocomplete widget as a pure state machine plus an
//! effectful dispatcher, providing:
//! - A total reducer folding user input and lookup settlements into state
//! - One-shot task values describing asynchronous suggestion lookups
//! - A serializing dispatcher with last-write-wins staleness protection
//! - Guard-based query suppression for inputs not worth searching
//! - A fuzzy-matched, frecency-ranked word lexicon as a ready-made source
//!
//! # Architecture
//!
//! Everything that happens to a widget flows through one action stream:
//!
//! ```text
//!  host input                    settlements
//!  (Input / HideMenu)            (RefreshMenu / ClearMenu)
//!        │                             ▲
//!        ▼                             │ translate
//! ┌─────────────────┐  fork   ┌────────────────┐
//! │   Dispatcher    │────────▶│  lookup tasks  │
//! │  (dispatch/)    │         │  (task/query)  │
//! └─────────────────┘         └────────────────┘
//!        │ apply
//!        ▼
//! ┌─────────────────┐
//! │    Reducer      │  pure: (Action, State) -> (State, Tasks)
//! │     (app/)      │
//! └─────────────────┘
//!        │
//!        ▼ observe
//!   state snapshots
//! ```
//!
//! The reducer never performs I/O and never inspects task timing; everything
//! about concurrency, ordering, and staleness is decided in the dispatcher.
//!
//! # Modules
//!
//! - [`app`]: State container, action vocabulary, and the reducer
//! - [`menu`]: Generic completion menu state and the [`View`] projection trait
//! - [`task`]: One-shot settlement-exactly-once task values
//! - [`query`]: The suggestion-source seam and input guards
//! - [`dispatch`]: Serializing dispatcher with staleness policy
//! - [`domain`]: Error types and the suggestion model
//! - [`lexicon`]: Fuzzy-matched, frecency-ranked word source
//! - [`observability`]: Tracing subscriber setup for the demo binary
//!
//! # Configuration
//!
//! The demo binary reads a TOML file:
//!
//! ```toml
//! # typeahead.toml
//! min_query_len = 3
//! max_results = 8
//! lexicon_file = "/path/to/words.json"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ## Driving a widget end to end
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use typeahead::{Action, Config, Dispatcher, Lexicon};
//!
//! let config = Config::default();
//! let lexicon = Rc::new(RefCell::new(Lexicon::from_words(
//!     ["hum", "humor", "human", "home"],
//!     config.max_results,
//! )));
//! let query = Lexicon::query(Rc::clone(&lexicon), config.min_query_len);
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.dispatch(Action::Input(Rc::clone(&query), Some("hum".to_string())))?;
//! assert_eq!(dispatcher.state().value.as_deref(), Some("hum"));
//! assert!(!dispatcher.state().menu.items.is_empty());
//!
//! dispatcher.dispatch(Action::HideMenu)?;
//! assert!(dispatcher.state().menu.items.is_empty());
//! assert!(!dispatcher.state().is_editing);
//! # Ok::<(), typeahead::TypeaheadError>(())
//! ```
//!
//! ## Bringing your own suggestion source
//!
//! ```
//! use typeahead::{query_fn, State, Task};
//!
//! let query = query_fn(|value: Option<&str>, _state: &State<String>| {
//!     let needle = value.unwrap_or("").to_string();
//!     Task::new(async move {
//!         // Any future works here, an HTTP call as readily as a map lookup.
//!         Ok(vec![format!("{needle}or"), format!("{needle}an")])
//!     })
//! });
//! ```
//!
//! # Key Design Decisions
//!
//! ## Settlements re-enter as actions
//!
//! A finished lookup is not applied directly to state. The dispatcher turns
//! it into a `RefreshMenu` or `ClearMenu` action and queues it behind
//! whatever else is pending, so user input and asynchronous results obey one
//! total order and the reducer stays free of time.
//!
//! ## Staleness is a dispatcher concern
//!
//! Request ids exist only at the dispatcher boundary. The default policy
//! applies the latest request and discards the rest;
//! [`Dispatcher::apply_stale_results`] restores apply-everything behavior.
//! Either way the reducer is unaware that requests have identities.
//!
//! ## Single-threaded by construction
//!
//! Tasks are `!Send` and run on a local executor owned by the dispatcher.
//! Suggestion sources can capture `Rc<RefCell<...>>` handles without locks,
//! which keeps queries cheap and test doubles trivial.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod menu;
pub mod task;
pub mod query;
pub mod dispatch;
pub mod domain;
pub mod lexicon;
pub mod observability;

pub use app::{init, update, Action, State};
pub use dispatch::Dispatcher;
pub use domain::{QueryError, Result, Suggestion, TypeaheadError};
pub use lexicon::Lexicon;
pub use menu::{MenuState, View};
pub use query::{guarded, query_fn, Query, QueryTask};
pub use task::Task;

use std::path::Path;

/// Runtime configuration for the demo binary and embedding hosts.
///
/// Every field has a default, so a partial file (or none at all) is fine.
///
/// # Example
///
/// ```toml
/// min_query_len = 2
/// max_results = 5
/// lexicon_file = "words.json"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum input length before lookups run.
    ///
    /// Shorter inputs are suppressed by the query guard and clear the menu.
    /// Default: 3
    pub min_query_len: usize,

    /// Maximum number of suggestions offered per lookup. Default: 8
    pub max_results: usize,

    /// Path to a JSON lexicon file.
    ///
    /// When unset, the demo falls back to a built-in word list. See
    /// [`Lexicon::from_file`] for the format.
    pub lexicon_file: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive string. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            max_results: 8,
            lexicon_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a TOML string.
    ///
    /// Missing fields fall back to defaults; unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::Config`] when the TOML cannot be decoded.
    ///
    /// # Example
    ///
    /// ```
    /// use typeahead::Config;
    ///
    /// let config = Config::from_toml("min_query_len = 2").expect("parse");
    /// assert_eq!(config.min_query_len, 2);
    /// assert_eq!(config.max_results, 8);
    /// ```
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| TypeaheadError::Config(err.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::Io`] when the file cannot be read and
    /// [`TypeaheadError::Config`] when it cannot be decoded.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.max_results, 8);
        assert_eq!(config.lexicon_file, None);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn config_partial_toml_keeps_defaults() {
        let config = Config::from_toml("max_results = 4\ntrace_level = \"debug\"")
            .expect("parse partial config");
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.max_results, 4);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn config_rejects_malformed_toml() {
        let err = Config::from_toml("min_query_len = \"three\"").expect_err("type mismatch");
        assert!(matches!(err, TypeaheadError::Config(_)));
    }

    #[test]
    fn config_loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("typeahead.toml");
        std::fs::write(&path, "min_query_len = 1\nlexicon_file = \"words.json\"")
            .expect("write config");

        let config = Config::from_file(&path).expect("load config");
        assert_eq!(config.min_query_len, 1);
        assert_eq!(config.lexicon_file.as_deref(), Some("words.json"));
    }
}
