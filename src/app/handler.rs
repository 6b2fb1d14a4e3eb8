//! The autocomplete reducer.
//!
//! This module implements [`update`], the single transition function that
//! folds every action into state. It is deliberately pure: given an action
//! and the current state it returns the next state plus a list of unsettled
//! lookup tasks, and performs no I/O of its own. Running those tasks and
//! feeding their settlements back in as actions is the dispatcher's job.
//!
//! # Architecture
//!
//! The data flow is one-directional and re-entrant through the action stream:
//!
//! ```text
//! Action ──▶ update ──▶ (State, Tasks)
//!   ▲                        │
//!   │                        ▼ fork
//!   └── RefreshMenu / ◀── settlement
//!       ClearMenu
//! ```
//!
//! Because settlements re-enter as ordinary actions, the reducer never needs
//! to know whether a lookup is fast, slow, out of order, or failed. It only
//! ever answers the question "given this action now, what is the next state".

use crate::app::{Action, State};
use crate::menu;
use crate::query::QueryTask;

/// Applies one action to the state, returning the next state and any lookups
/// to fork.
///
/// The reducer is total: every action maps to a defined transition from any
/// state, so hosts never have to pre-filter the action stream.
///
/// # Transitions
///
/// - `Input` with text: store the value, mark editing, keep the current menu
///   on screen, and emit exactly one lookup task for the new input
/// - `Input` without text: store `None`, mark editing, close the menu
///   immediately, and emit nothing
/// - `HideMenu`: end editing and close the menu, keeping the typed value
/// - `RefreshMenu`: replace the menu items wholesale, touching nothing else
/// - `ClearMenu`: close the menu, touching nothing else
///
/// Staleness is invisible here. A `RefreshMenu` is applied no matter which
/// lookup produced it; dispatchers that want last-write-wins discard stale
/// settlements before they ever become actions.
///
/// # Returns
///
/// The state after the transition and the tasks to fork, in emission order.
/// Each returned task is unsettled; the caller owns running it exactly once.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the action. Individual
/// transitions add debug events where state visibly changes shape.
///
/// # Examples
///
/// ```
/// use typeahead::{app, Action};
///
/// let state = app::init::<String>();
/// let (state, tasks) = app::update(Action::RefreshMenu(vec!["humor".to_string()]), state);
/// assert_eq!(state.menu.items, vec!["humor".to_string()]);
/// assert!(tasks.is_empty());
///
/// let (state, tasks) = app::update(Action::HideMenu, state);
/// assert!(!state.is_editing);
/// assert!(state.menu.items.is_empty());
/// assert!(tasks.is_empty());
/// ```
pub fn update<T: 'static>(action: Action<T>, state: State<T>) -> (State<T>, Vec<QueryTask<T>>) {
    let _span = tracing::debug_span!("update", action = ?action).entered();

    match action {
        Action::Input(query, value) => {
            let menu = if value.is_some() {
                state.menu
            } else {
                tracing::debug!("input emptied, closing menu");
                menu::init()
            };

            let next = State {
                value,
                is_editing: true,
                menu,
            };

            let tasks = match next.value.as_deref() {
                Some(input) => {
                    tracing::debug!(input, "forking lookup for new input");
                    vec![query(Some(input), &next)]
                }
                None => Vec::new(),
            };

            (next, tasks)
        }
        Action::HideMenu => {
            tracing::debug!("editing ended, closing menu");
            let next = State {
                is_editing: false,
                menu: menu::init(),
                ..state
            };
            (next, Vec::new())
        }
        Action::RefreshMenu(items) => {
            tracing::debug!(count = items.len(), "menu refreshed from settlement");
            let next = State {
                menu: menu::update(items),
                ..state
            };
            (next, Vec::new())
        }
        Action::ClearMenu(reason) => {
            tracing::debug!(%reason, "menu cleared");
            let next = State {
                menu: menu::init(),
                ..state
            };
            (next, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{self, State};
    use crate::domain::QueryError;
    use crate::query::{self, Query};
    use crate::task::Task;
    use futures_executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    fn echo_query() -> Query<String> {
        query::query_fn(|value: Option<&str>, _state: &State<String>| {
            let needle = value.unwrap_or("").to_string();
            Task::new(async move { Ok(vec![format!("{needle}!")]) })
        })
    }

    fn editing_state(value: &str, items: Vec<String>) -> State<String> {
        State {
            value: Some(value.to_string()),
            is_editing: true,
            menu: menu::update(items),
        }
    }

    #[test]
    fn input_with_text_forks_exactly_one_lookup() {
        let (state, tasks) = update(
            Action::Input(echo_query(), Some("hum".to_string())),
            app::init(),
        );

        assert_eq!(state.value, Some("hum".to_string()));
        assert!(state.is_editing);
        assert_eq!(tasks.len(), 1);

        let task = tasks.into_iter().next().expect("one task");
        assert_eq!(block_on(task.settle()), Ok(vec!["hum!".to_string()]));
    }

    #[test]
    fn input_with_text_keeps_previous_menu_on_screen() {
        let previous = editing_state("hu", vec!["humor".to_string(), "hum".to_string()]);
        let (state, tasks) = update(
            Action::Input(echo_query(), Some("hum".to_string())),
            previous,
        );

        assert_eq!(
            state.menu.items,
            vec!["humor".to_string(), "hum".to_string()],
            "stale menu stays visible until the new lookup settles"
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn absent_input_closes_menu_without_any_lookup() {
        let invoked = Rc::new(Cell::new(false));
        let seen = Rc::clone(&invoked);
        let query = query::query_fn(move |_value: Option<&str>, _state: &State<String>| {
            seen.set(true);
            Task::ready(Ok(Vec::new()))
        });

        let previous = editing_state("hum", vec!["humor".to_string()]);
        let (state, tasks) = update(Action::Input(query, None), previous);

        assert_eq!(state.value, None);
        assert!(state.is_editing);
        assert!(state.menu.items.is_empty());
        assert!(tasks.is_empty());
        assert!(!invoked.get(), "no lookup may run for an emptied field");
    }

    #[test]
    fn hide_menu_ends_editing_and_keeps_the_value() {
        let previous = editing_state("hum", vec!["humor".to_string()]);
        let (state, tasks) = update(Action::HideMenu, previous);

        assert_eq!(state.value, Some("hum".to_string()));
        assert!(!state.is_editing);
        assert!(state.menu.items.is_empty());
        assert!(tasks.is_empty());
    }

    #[test]
    fn refresh_menu_touches_nothing_but_items() {
        let previous = editing_state("hum", vec!["old".to_string()]);
        let (state, tasks) = update(
            Action::RefreshMenu(vec!["humor".to_string(), "hominid".to_string()]),
            previous,
        );

        assert_eq!(state.value, Some("hum".to_string()));
        assert!(state.is_editing);
        assert_eq!(
            state.menu.items,
            vec!["humor".to_string(), "hominid".to_string()]
        );
        assert!(tasks.is_empty());
    }

    #[test]
    fn clear_menu_touches_nothing_but_items() {
        let previous = editing_state("hum", vec!["humor".to_string()]);
        let (state, tasks) = update(Action::ClearMenu(QueryError::Suppressed), previous);

        assert_eq!(state.value, Some("hum".to_string()));
        assert!(state.is_editing);
        assert!(state.menu.items.is_empty());
        assert!(tasks.is_empty());
    }

    #[test]
    fn query_observes_the_state_its_input_produced() {
        let observed = Rc::new(Cell::new(None));
        let slot = Rc::clone(&observed);
        let query = query::query_fn(move |value: Option<&str>, state: &State<String>| {
            slot.set(Some((
                value.map(str::to_string),
                state.value.clone(),
                state.menu.items.len(),
            )));
            Task::ready(Ok(Vec::new()))
        });

        let previous = editing_state("hu", vec!["stale".to_string()]);
        let _ = update(Action::Input(query, Some("hum".to_string())), previous);

        let (seen_input, seen_value, seen_menu_len) =
            observed.take().expect("query must run once");
        assert_eq!(seen_input, Some("hum".to_string()));
        assert_eq!(seen_value, Some("hum".to_string()));
        assert_eq!(seen_menu_len, 1, "query sees the still-visible old menu");
    }
}
