//! Actions driving the autocomplete state machine.
//!
//! This module defines the [`Action`] type, the only vocabulary through which
//! anything can change controller state. User input and lookup settlements
//! both arrive as actions, which keeps the reducer a single total function
//! instead of a pile of ad hoc entry points.
//!
//! # Architecture
//!
//! Two of the variants originate with the user ([`Action::Input`],
//! [`Action::HideMenu`]); the other two originate with the dispatcher when a
//! forked lookup settles ([`Action::RefreshMenu`], [`Action::ClearMenu`]).
//! The reducer treats all four uniformly and never learns where an action
//! came from.

use std::fmt;
use std::rc::Rc;

use crate::domain::QueryError;
use crate::query::Query;

/// One input to the autocomplete reducer.
///
/// Actions are inert descriptions; applying one via
/// [`update`](crate::app::update) is what makes anything happen.
pub enum Action<T> {
    /// The user edited the field.
    ///
    /// Carries the query to run against the new input and the input itself,
    /// where `None` means the field became empty. A present input leaves the
    /// current menu visible until its lookup settles; an absent input closes
    /// the menu immediately and runs no lookup.
    Input(Query<T>, Option<String>),

    /// The user left the field (blur, escape, focus change).
    ///
    /// Ends editing and closes the menu. The typed value is kept so the host
    /// can still read it.
    HideMenu,

    /// A lookup settled successfully with fresh candidates.
    ///
    /// Replaces the menu contents wholesale. An empty list closes the menu.
    RefreshMenu(Vec<T>),

    /// A lookup settled without candidates.
    ///
    /// Closes the menu and carries the reason, either guard suppression or a
    /// lookup failure.
    ClearMenu(QueryError),
}

impl<T: Clone> Clone for Action<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Input(query, value) => Self::Input(Rc::clone(query), value.clone()),
            Self::HideMenu => Self::HideMenu,
            Self::RefreshMenu(items) => Self::RefreshMenu(items.clone()),
            Self::ClearMenu(reason) => Self::ClearMenu(reason.clone()),
        }
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(_, value) => write!(f, "Input(..., {value:?})"),
            Self::HideMenu => write!(f, "HideMenu"),
            Self::RefreshMenu(items) => write!(f, "RefreshMenu({} items)", items.len()),
            Self::ClearMenu(reason) => write!(f, "ClearMenu({reason:?})"),
        }
    }
}
