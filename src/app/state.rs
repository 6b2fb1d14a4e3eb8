//! Controller state container.
//!
//! This module defines [`State`], the complete description of one autocomplete
//! widget at a point in time. State is a plain value: transitions consume the
//! old state and produce a new one, so there is no interior mutation to reason
//! about and snapshots taken by observers stay valid forever.
//!
//! # State Components
//!
//! - **Value**: The text most recently typed, `None` when the field is empty
//! - **Editing flag**: Whether the user is currently interacting with the field
//! - **Menu**: The completion candidates currently on offer
//!
//! The menu is intentionally the only place suggestions live. Nothing else in
//! the state caches lookup results, which is what makes wholesale menu
//! replacement a safe answer to late or failed lookups.

use crate::menu::{self, MenuState};

/// Complete state of one autocomplete widget.
///
/// Generic over the menu item type `T`, so hosts can offer plain strings,
/// rich suggestion records, or anything else renderable.
///
/// # Fields
///
/// - `value`: Most recent input text, `None` for an empty field
/// - `is_editing`: Whether the field currently has the user's attention
/// - `menu`: Candidate items currently offered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State<T> {
    pub value: Option<String>,
    pub is_editing: bool,
    pub menu: MenuState<T>,
}

/// Creates the initial state: empty value, not editing, closed menu.
///
/// # Examples
///
/// ```
/// let state = typeahead::init::<String>();
/// assert_eq!(state.value, None);
/// assert!(!state.is_editing);
/// assert!(state.menu.items.is_empty());
/// ```
#[must_use]
pub fn init<T>() -> State<T> {
    State {
        value: None,
        is_editing: false,
        menu: menu::init(),
    }
}

impl<T> Default for State<T> {
    fn default() -> Self {
        init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_starts_idle_with_closed_menu() {
        let state = init::<&str>();
        assert_eq!(state.value, None);
        assert!(!state.is_editing);
        assert!(state.menu.items.is_empty());
        assert_eq!(state, State::default());
    }

    #[test]
    fn snapshots_are_independent_values() {
        let mut state = init::<&str>();
        let snapshot = state.clone();
        state.value = Some("hum".to_string());
        state.menu = menu::update(vec!["humor"]);
        assert_eq!(snapshot.value, None);
        assert!(snapshot.menu.items.is_empty());
    }
}
