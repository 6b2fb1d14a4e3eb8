//! Suggestion domain model and operations.
//!
//! This module defines the core `Suggestion` type representing one completable
//! word offered to the user. Suggestions track usage patterns for
//! frecency-based ranking (frequency + recency), so that the words a user
//! actually commits rise above equally good fuzzy matches.

use serde::{Deserialize, Serialize};

/// A single completable entry offered by the menu.
///
/// Suggestions are ranked by fuzzy-match quality first and by frecency
/// second, so `uses` and `last_used` only break ties between matches of
/// equal quality.
///
/// # Fields
///
/// - `text`: The completable word itself
/// - `uses`: How many times the user has committed this suggestion
/// - `last_used`: Unix timestamp of the most recent commit, `0` if never used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(default)]
    pub uses: u32,
    #[serde(default)]
    pub last_used: i64,
}

impl Suggestion {
    /// Creates a suggestion that has never been used.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::Suggestion;
    ///
    /// let suggestion = Suggestion::new("hominid");
    /// assert_eq!(suggestion.text, "hominid");
    /// assert_eq!(suggestion.uses, 0);
    /// assert_eq!(suggestion.last_used, 0);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            uses: 0,
            last_used: 0,
        }
    }

    /// Creates a suggestion with a known usage history.
    ///
    /// Useful when seeding a lexicon from data that was recorded elsewhere.
    #[must_use]
    pub fn with_history(text: impl Into<String>, uses: u32, last_used: i64) -> Self {
        Self {
            text: text.into(),
            uses,
            last_used,
        }
    }

    /// Records one committed use at the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::Suggestion;
    ///
    /// let mut suggestion = Suggestion::new("humor");
    /// suggestion.record_use();
    /// assert_eq!(suggestion.uses, 1);
    /// assert!(suggestion.last_used > 0);
    /// ```
    pub fn record_use(&mut self) {
        self.uses = self.uses.saturating_add(1);
        self.last_used = chrono::Utc::now().timestamp();
    }
}
