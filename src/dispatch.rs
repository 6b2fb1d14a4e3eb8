//! The action dispatcher: the effectful shell around the pure reducer.
//!
//! [`Dispatcher`] owns the live state, a FIFO action queue, and a
//! single-threaded task executor. Hosts hand it actions; it applies them
//! through [`update`](crate::app::update) strictly in arrival order, forks
//! each emitted lookup task exactly once, and when a lookup settles it
//! translates the outcome back into an ordinary action: successes become
//! [`Action::RefreshMenu`], failures become [`Action::ClearMenu`]. Settled
//! lookups therefore re-enter the same serialized stream as user input and
//! can never interleave halfway through another transition.
//!
//! # Staleness
//!
//! Every forked lookup gets a monotonically increasing request id. By default
//! the dispatcher applies only settlements of the most recently forked
//! request and discards the rest, so a slow lookup for an old input can never
//! overwrite the menu for a newer one. [`Dispatcher::apply_stale_results`]
//! turns the filter off for hosts that want every settlement applied in
//! arrival order.
//!
//! # Observation
//!
//! A dispatcher notifies its observer after every applied action, plus once
//! with the initial state at construction. The observer sees each state
//! exactly when it becomes current, which makes it the natural place for
//! structured logging or test snapshots.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::mem;
use std::rc::Rc;

use futures_executor::{LocalPool, LocalSpawner};
use futures_util::task::LocalSpawnExt;

use crate::app::{self, Action, State};
use crate::domain::error::{Result, TypeaheadError};
use crate::domain::QueryError;
use crate::query::QueryTask;

/// Outcome of one forked lookup, tagged with the request it answers.
struct Settlement<T> {
    request: u64,
    outcome: std::result::Result<Vec<T>, QueryError>,
}

/// Serializes actions into the reducer and runs the lookups it emits.
///
/// The dispatcher is single-threaded. Lookups run on an internal executor
/// that is only polled from inside [`dispatch`](Self::dispatch) and
/// [`pump`](Self::pump), so state transitions and task progress never race.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use typeahead::{query_fn, Action, Dispatcher, State, Task};
///
/// let query = query_fn(|value: Option<&str>, _state: &State<String>| {
///     let needle = value.unwrap_or("").to_string();
///     Task::new(async move { Ok(vec![format!("{needle}or")]) })
/// });
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.dispatch(Action::Input(Rc::clone(&query), Some("hum".to_string())))?;
/// assert_eq!(dispatcher.state().menu.items, vec!["humor".to_string()]);
///
/// dispatcher.dispatch(Action::HideMenu)?;
/// assert!(dispatcher.state().menu.items.is_empty());
/// # Ok::<(), typeahead::TypeaheadError>(())
/// ```
pub struct Dispatcher<T> {
    state: State<T>,
    queue: VecDeque<Action<T>>,
    pool: LocalPool,
    spawner: LocalSpawner,
    settlements: Rc<RefCell<VecDeque<Settlement<T>>>>,
    next_request: u64,
    latest_request: Option<u64>,
    apply_stale: bool,
    observer: Box<dyn FnMut(&State<T>)>,
}

impl<T: 'static> Dispatcher<T> {
    /// Creates a dispatcher with no observer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_observer(|_| {})
    }

    /// Creates a dispatcher that reports every state to `observer`.
    ///
    /// The observer is called once immediately with the initial state, then
    /// once per applied action.
    #[must_use]
    pub fn with_observer<F>(observer: F) -> Self
    where
        F: FnMut(&State<T>) + 'static,
    {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        let state = app::init();

        let mut observer: Box<dyn FnMut(&State<T>)> = Box::new(observer);
        observer(&state);

        Self {
            state,
            queue: VecDeque::new(),
            pool,
            spawner,
            settlements: Rc::new(RefCell::new(VecDeque::new())),
            next_request: 0,
            latest_request: None,
            apply_stale: false,
            observer,
        }
    }

    /// Chooses the staleness policy.
    ///
    /// With `true`, every settlement is applied in arrival order, matching
    /// sources whose answers are always worth showing. The default (`false`)
    /// applies only the latest request and logs discarded ones.
    #[must_use]
    pub fn apply_stale_results(mut self, apply: bool) -> Self {
        self.apply_stale = apply;
        self
    }

    /// Current state, valid until the next dispatch.
    #[must_use]
    pub fn state(&self) -> &State<T> {
        &self.state
    }

    /// Queues one action and drives the system until it goes quiet.
    ///
    /// Quiet means the action queue is empty and no further lookup can make
    /// progress without an external wakeup. Lookups blocked on external
    /// events stay forked; a later [`dispatch`](Self::dispatch) or
    /// [`pump`](Self::pump) picks their settlements up.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::Dispatch`] when the internal executor
    /// refuses to fork an emitted lookup.
    pub fn dispatch(&mut self, action: Action<T>) -> Result<()> {
        let _span = tracing::debug_span!("dispatch", action = ?action).entered();
        self.queue.push_back(action);
        self.pump()
    }

    /// Drives in-flight lookups and folds any settlements back into state.
    ///
    /// Useful after an external event has unblocked a pending lookup, when
    /// there is no new user action to dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::Dispatch`] when the internal executor
    /// refuses to fork an emitted lookup.
    pub fn pump(&mut self) -> Result<()> {
        loop {
            while let Some(action) = self.queue.pop_front() {
                self.apply(action)?;
            }

            self.pool.run_until_stalled();

            if !self.collect_settlements() && self.queue.is_empty() {
                return Ok(());
            }
        }
    }

    /// Applies one action through the reducer and forks its tasks.
    fn apply(&mut self, action: Action<T>) -> Result<()> {
        let state = mem::replace(&mut self.state, app::init());
        let (next, tasks) = app::update(action, state);
        self.state = next;
        (self.observer)(&self.state);

        for task in tasks {
            self.fork(task)?;
        }
        Ok(())
    }

    /// Forks one lookup, consuming it so it can settle at most once.
    fn fork(&mut self, task: QueryTask<T>) -> Result<()> {
        let request = self.next_request;
        self.next_request += 1;
        self.latest_request = Some(request);

        let sink = Rc::clone(&self.settlements);
        let lookup = async move {
            let outcome = task.settle().await;
            sink.borrow_mut().push_back(Settlement { request, outcome });
        };

        self.spawner
            .spawn_local(lookup)
            .map_err(|err| TypeaheadError::Dispatch(err.to_string()))
    }

    /// Translates collected settlements into queued actions.
    ///
    /// Returns whether anything was queued, so the pump knows to keep going.
    fn collect_settlements(&mut self) -> bool {
        let mut translated = false;
        loop {
            let settled = self.settlements.borrow_mut().pop_front();
            let Some(Settlement { request, outcome }) = settled else {
                return translated;
            };

            if !self.apply_stale && self.latest_request != Some(request) {
                tracing::debug!(request, "discarding stale settlement");
                continue;
            }

            let action = match outcome {
                Ok(items) => Action::RefreshMenu(items),
                Err(reason) => Action::ClearMenu(reason),
            };
            self.queue.push_back(action);
            translated = true;
        }
    }
}

impl<T: 'static> Default for Dispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{self, Query};
    use crate::task::Task;

    fn snapshots() -> (Rc<RefCell<Vec<State<String>>>>, Dispatcher<String>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let dispatcher = Dispatcher::with_observer(move |state: &State<String>| {
            sink.borrow_mut().push(state.clone());
        });
        (log, dispatcher)
    }

    fn echo_query() -> Query<String> {
        query::query_fn(|value: Option<&str>, _state: &State<String>| {
            let needle = value.unwrap_or("").to_string();
            Task::new(async move { Ok(vec![format!("{needle}or")]) })
        })
    }

    #[test]
    fn observer_sees_the_initial_state_first() {
        let (log, _dispatcher) = snapshots();
        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].value, None);
        assert!(!log[0].is_editing);
        assert!(log[0].menu.items.is_empty());
    }

    #[test]
    fn settlement_refreshes_menu_after_the_input_state() {
        let (log, mut dispatcher) = snapshots();
        dispatcher
            .dispatch(Action::Input(echo_query(), Some("hum".to_string())))
            .expect("dispatch");

        let log = log.borrow();
        assert_eq!(log.len(), 3, "initial, input applied, menu refreshed");
        assert_eq!(log[1].value, Some("hum".to_string()));
        assert!(log[1].menu.items.is_empty(), "menu untouched until settlement");
        assert_eq!(log[2].menu.items, vec!["humor".to_string()]);
        assert_eq!(dispatcher.state().menu.items, vec!["humor".to_string()]);
    }

    #[test]
    fn failed_lookup_clears_the_menu() {
        let query = query::query_fn(|_value: Option<&str>, _state: &State<String>| {
            Task::ready(Err(QueryError::Failed("source offline".to_string())))
        });

        let mut dispatcher = Dispatcher::new();
        dispatcher
            .dispatch(Action::RefreshMenu(vec!["leftover".to_string()]))
            .expect("seed menu");
        dispatcher
            .dispatch(Action::Input(query, Some("hum".to_string())))
            .expect("dispatch");

        assert!(dispatcher.state().menu.items.is_empty());
        assert_eq!(dispatcher.state().value, Some("hum".to_string()));
    }

    #[test]
    fn each_dispatch_runs_to_quiescence_in_order() {
        let (log, mut dispatcher) = snapshots();
        dispatcher
            .dispatch(Action::Input(echo_query(), Some("hum".to_string())))
            .expect("first input");
        dispatcher.dispatch(Action::HideMenu).expect("hide");

        let log = log.borrow();
        let values: Vec<_> = log.iter().map(|s| s.menu.items.clone()).collect();
        assert_eq!(
            values,
            vec![
                vec![],
                vec![],
                vec!["humor".to_string()],
                vec![],
            ],
        );
        assert!(!log[3].is_editing);
    }
}
