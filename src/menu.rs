//! Generic completion menu state.
//!
//! The menu is deliberately small: it owns an ordered list of candidate items
//! and nothing else. Which items belong in it is decided elsewhere, by the
//! reducer folding lookup settlements back into state, so the menu itself
//! never inspects, filters, or reorders what it is given. Rendering is kept
//! out of the state entirely and goes through the [`View`] trait instead.

/// Ordered candidate items currently offered to the user.
///
/// `MenuState` is a plain value: replacing its items wholesale via [`update`]
/// is the only mutation, and an empty item list is the "menu closed" state.
///
/// # Fields
///
/// - `items`: Candidates in presentation order, best match first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState<T> {
    pub items: Vec<T>,
}

/// Creates an empty menu.
///
/// # Examples
///
/// ```
/// let menu = typeahead::menu::init::<String>();
/// assert!(menu.items.is_empty());
/// ```
#[must_use]
pub fn init<T>() -> MenuState<T> {
    MenuState { items: Vec::new() }
}

/// Replaces the menu contents wholesale.
///
/// Passing an empty vector closes the menu.
///
/// # Examples
///
/// ```
/// use typeahead::menu;
///
/// let menu = menu::update(vec!["humor", "hominid"]);
/// assert_eq!(menu.items, vec!["humor", "hominid"]);
///
/// let menu = menu::update(Vec::<&str>::new());
/// assert!(menu.items.is_empty());
/// ```
#[must_use]
pub fn update<T>(items: Vec<T>) -> MenuState<T> {
    MenuState { items }
}

impl<T> Default for MenuState<T> {
    fn default() -> Self {
        init()
    }
}

/// Read-only projection of a menu into some rendered form.
///
/// Hosts render menus in wildly different ways, so this trait only fixes the
/// direction of the data flow: a view borrows the menu and produces an output,
/// never the other way around. Any closure or function of the right shape is
/// a `View`, which keeps render code out of the state types.
///
/// # Examples
///
/// ```
/// use typeahead::menu::{self, MenuState, View};
///
/// let menu = menu::update(vec!["humor", "hominid"]);
/// let first = |menu: &MenuState<&'static str>| menu.items.first().copied();
/// assert_eq!(first.view(&menu), Some("humor"));
/// ```
pub trait View<T> {
    /// Rendered form produced by this view.
    type Output;

    /// Projects the menu into [`Self::Output`] without consuming it.
    fn view(&self, menu: &MenuState<T>) -> Self::Output;
}

impl<T, V, F> View<T> for F
where
    F: Fn(&MenuState<T>) -> V,
{
    type Output = V;

    fn view(&self, menu: &MenuState<T>) -> V {
        self(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_produces_closed_menu() {
        let menu = init::<String>();
        assert!(menu.items.is_empty());
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn update_replaces_items_wholesale() {
        let mut menu = update(vec!["hum", "humor"]);
        menu = update(vec!["home"]);
        assert_eq!(menu.items, vec!["home"]);
    }

    #[test]
    fn empty_update_closes_menu() {
        let menu = update(vec![1, 2, 3]);
        assert_eq!(menu.items.len(), 3);
        let menu: MenuState<i32> = update(Vec::new());
        assert!(menu.items.is_empty());
    }

    #[test]
    fn closures_act_as_views() {
        let menu = update(vec!["humor".to_string(), "hominid".to_string()]);
        let joined = |menu: &MenuState<String>| menu.items.join(", ");
        assert_eq!(joined.view(&menu), "humor, hominid");

        let len = |menu: &MenuState<String>| menu.items.len();
        assert_eq!(len.view(&menu), 2);
    }
}
