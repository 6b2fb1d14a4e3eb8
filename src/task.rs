//! One-shot asynchronous work descriptions.
//!
//! A [`Task`] wraps a single future that settles exactly once with a
//! `Result`. The reducer emits tasks as inert values and never runs them;
//! whoever receives a task owns its settlement, and because [`Task::settle`]
//! takes the task by value, an outcome can never be observed twice. Tasks are
//! single-threaded (`!Send`) on purpose: lookups routinely capture `Rc`
//! handles to shared suggestion sources.

use std::fmt;
use std::future::Future;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

/// A deferred computation that settles exactly once.
///
/// # Examples
///
/// ```
/// use typeahead::Task;
///
/// let task: Task<u32, String> = Task::new(async { Ok(41) });
/// let doubled = task.map(|n| n + 1);
/// let outcome = futures_executor::block_on(doubled.settle());
/// assert_eq!(outcome, Ok(42));
/// ```
pub struct Task<T, E> {
    future: LocalBoxFuture<'static, Result<T, E>>,
}

impl<T: 'static, E: 'static> Task<T, E> {
    /// Wraps a future into a task.
    ///
    /// The future is boxed but not polled; nothing happens until the owner
    /// settles the task.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        Self {
            future: future.boxed_local(),
        }
    }

    /// Creates a task that settles immediately with `outcome`.
    ///
    /// Useful for lookups that can answer synchronously, such as a guard
    /// rejecting an input before any search runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::Task;
    ///
    /// let task: Task<&str, ()> = Task::ready(Ok("done"));
    /// assert_eq!(futures_executor::block_on(task.settle()), Ok("done"));
    /// ```
    pub fn ready(outcome: Result<T, E>) -> Self {
        Self::new(std::future::ready(outcome))
    }

    /// Transforms the success value while leaving errors untouched.
    ///
    /// The projection runs lazily, at settlement time, so mapping an unsettled
    /// task costs nothing beyond an extra box.
    pub fn map<U, F>(self, project: F) -> Task<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        Task {
            future: self.future.map(|outcome| outcome.map(project)).boxed_local(),
        }
    }

    /// Runs the task to completion, consuming it.
    ///
    /// Taking `self` by value is what makes settlement observable exactly
    /// once at the type level.
    pub async fn settle(self) -> Result<T, E> {
        self.future.await
    }
}

impl<T, E> fmt::Debug for Task<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task(...)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_executor::block_on;

    #[test]
    fn ready_settles_with_its_outcome() {
        let ok: Task<u32, String> = Task::ready(Ok(7));
        assert_eq!(block_on(ok.settle()), Ok(7));

        let err: Task<u32, String> = Task::ready(Err("broken".to_string()));
        assert_eq!(block_on(err.settle()), Err("broken".to_string()));
    }

    #[test]
    fn new_defers_the_wrapped_future() {
        use std::cell::Cell;
        use std::rc::Rc;

        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let task: Task<(), ()> = Task::new(async move {
            flag.set(true);
            Ok(())
        });
        assert!(!ran.get());
        block_on(task.settle()).expect("task settles");
        assert!(ran.get());
    }

    #[test]
    fn map_projects_success_only() {
        let task: Task<Vec<&str>, String> = Task::ready(Ok(vec!["hum", "humor"]));
        let lengths = task.map(|items| items.into_iter().map(str::len).collect::<Vec<_>>());
        assert_eq!(block_on(lengths.settle()), Ok(vec![3, 5]));

        let failed: Task<Vec<&str>, String> = Task::ready(Err("offline".to_string()));
        let mapped = failed.map(|items| items.len());
        assert_eq!(block_on(mapped.settle()), Err("offline".to_string()));
    }

    #[test]
    fn debug_output_is_opaque() {
        let task: Task<u32, String> = Task::ready(Ok(1));
        assert_eq!(format!("{task:?}"), "Task(...)");
    }
}
