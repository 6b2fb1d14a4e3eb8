//! Application layer: state, actions, and the reducer.
//!
//! This module defines the pure core of the autocomplete controller. It sits
//! below the dispatcher and above the domain types, and contains no I/O: the
//! reducer describes asynchronous work as task values instead of performing
//! it.
//!
//! # Architecture
//!
//! The layer follows a unidirectional data flow:
//!
//! ```text
//! Action ──▶ update ──▶ next State + lookup Tasks
//!    ▲                            │
//!    └──── settlements, as ◀──────┘
//!          RefreshMenu / ClearMenu
//! ```
//!
//! # Modules
//!
//! - [`actions`]: The action vocabulary, user-originated and settlement-originated
//! - [`handler`]: The reducer folding actions into state
//! - [`state`]: The state container and its initial value
//!
//! # Example
//!
//! ```
//! use typeahead::{app, Action};
//!
//! let state = app::init::<String>();
//! let (state, tasks) = app::update(Action::HideMenu, state);
//! assert!(!state.is_editing);
//! assert!(tasks.is_empty());
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::update;
pub use state::{init, State};
