//! Suggestion queries and input guards.
//!
//! A [`Query`] is the single seam between the reducer and whatever actually
//! produces suggestions. The reducer hands it the current input and the state
//! the input produced, and gets back an unsettled [`QueryTask`]. Settlement is
//! a two-way channel: success carries fresh menu items, failure carries a
//! [`QueryError`] saying whether the lookup was suppressed by a guard or
//! genuinely failed. Either way the answer flows back through the action
//! stream, never through a direct return.

use std::rc::Rc;

use crate::app::State;
use crate::domain::QueryError;
use crate::task::Task;

/// Task produced by a query: a list of menu items, or the reason there is none.
pub type QueryTask<T> = Task<Vec<T>, QueryError>;

/// Shared handle to a suggestion source.
///
/// Queries receive the input as `Option<&str>` because an empty input line is
/// not the same thing as an absent one, and the post-transition [`State`] so
/// sources can consult editing context. They are `Rc`-shared since the same
/// query is typically attached to every input action a host dispatches.
pub type Query<T> = Rc<dyn Fn(Option<&str>, &State<T>) -> QueryTask<T>>;

/// Wraps a closure into a shareable [`Query`].
///
/// # Examples
///
/// ```
/// use typeahead::{query_fn, State, Task};
///
/// let echo = query_fn(|value: Option<&str>, _state: &State<String>| {
///     let needle = value.unwrap_or("").to_string();
///     Task::new(async move { Ok(vec![needle]) })
/// });
///
/// let state = typeahead::init::<String>();
/// let task = echo(Some("hum"), &state);
/// assert_eq!(
///     futures_executor::block_on(task.settle()),
///     Ok(vec!["hum".to_string()]),
/// );
/// ```
pub fn query_fn<T, F>(query: F) -> Query<T>
where
    T: 'static,
    F: Fn(Option<&str>, &State<T>) -> QueryTask<T> + 'static,
{
    Rc::new(query)
}

/// Builds a [`Query`] that consults `guard` before running `lookup`.
///
/// When the guard rejects the input, the lookup never runs and the task
/// settles immediately with [`QueryError::Suppressed`], which downstream
/// translates into a cleared menu. When the guard passes, `lookup` receives
/// the input with the `Option` peeled off (absent input becomes `""`).
///
/// # Examples
///
/// ```
/// use typeahead::{guarded, QueryError, State, Task};
///
/// let lookup = guarded(
///     |value: Option<&str>, _state: &State<String>| value.unwrap_or("").chars().count() >= 3,
///     |needle: &str, _state: &State<String>| {
///         let hit = format!("{needle}or");
///         Task::new(async move { Ok(vec![hit]) })
///     },
/// );
///
/// let state = typeahead::init::<String>();
/// let short = lookup(Some("hu"), &state);
/// assert_eq!(
///     futures_executor::block_on(short.settle()),
///     Err(QueryError::Suppressed),
/// );
///
/// let long_enough = lookup(Some("hum"), &state);
/// assert_eq!(
///     futures_executor::block_on(long_enough.settle()),
///     Ok(vec!["humor".to_string()]),
/// );
/// ```
pub fn guarded<T, G, L>(guard: G, lookup: L) -> Query<T>
where
    T: 'static,
    G: Fn(Option<&str>, &State<T>) -> bool + 'static,
    L: Fn(&str, &State<T>) -> QueryTask<T> + 'static,
{
    Rc::new(move |value, state| {
        if guard(value, state) {
            lookup(value.unwrap_or(""), state)
        } else {
            tracing::debug!(input = value.unwrap_or(""), "input guard suppressed lookup");
            Task::ready(Err(QueryError::Suppressed))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use futures_executor::block_on;
    use std::cell::Cell;

    #[test]
    fn guard_rejection_skips_the_lookup() {
        let invoked = Rc::new(Cell::new(false));
        let seen = Rc::clone(&invoked);
        let query = guarded(
            |value: Option<&str>, _state: &State<String>| value.unwrap_or("").len() >= 3,
            move |_needle: &str, _state: &State<String>| {
                seen.set(true);
                Task::ready(Ok(Vec::new()))
            },
        );

        let state = app::init::<String>();
        let outcome = block_on(query(Some("hu"), &state).settle());
        assert_eq!(outcome, Err(QueryError::Suppressed));
        assert!(!invoked.get(), "lookup must not run for rejected input");
    }

    #[test]
    fn guard_pass_hands_lookup_the_bare_input() {
        let query = guarded(
            |value: Option<&str>, _state: &State<String>| value.is_some(),
            |needle: &str, _state: &State<String>| {
                let echoed = needle.to_string();
                Task::new(async move { Ok(vec![echoed]) })
            },
        );

        let state = app::init::<String>();
        let outcome = block_on(query(Some("hum"), &state).settle());
        assert_eq!(outcome, Ok(vec!["hum".to_string()]));
    }

    #[test]
    fn absent_input_reaches_lookup_as_empty_when_admitted() {
        let query = guarded(
            |_value: Option<&str>, _state: &State<String>| true,
            |needle: &str, _state: &State<String>| {
                let echoed = format!("[{needle}]");
                Task::new(async move { Ok(vec![echoed]) })
            },
        );

        let state = app::init::<String>();
        let outcome = block_on(query(None, &state).settle());
        assert_eq!(outcome, Ok(vec!["[]".to_string()]));
    }

    #[test]
    fn query_fn_shares_a_plain_closure() {
        let query = query_fn(|value: Option<&str>, _state: &State<u32>| {
            let n = value.map(|v| v.len() as u32).unwrap_or(0);
            Task::ready(Ok(vec![n]))
        });
        let second = Rc::clone(&query);

        let state = app::init::<u32>();
        assert_eq!(block_on(query(Some("hum"), &state).settle()), Ok(vec![3]));
        assert_eq!(block_on(second(None, &state).settle()), Ok(vec![0]));
    }
}
