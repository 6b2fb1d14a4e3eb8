//! A word lexicon as a concrete suggestion source.
//!
//! The reducer only ever talks to a [`Query`], so this module is one possible
//! other end of that seam: an in-memory word list ranked by fuzzy match
//! quality first and "frecency" (frequency + recency of use) second. Lexicons
//! can be seeded from a plain word list or loaded from a JSON file of
//! [`Suggestion`] records.
//!
//! Ranking recency decays exponentially with a one-week time constant, so a
//! word committed a week ago carries roughly a third of its use count.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use fuzzy_matcher::skim::SkimMatcherV2;

use crate::app::State;
use crate::domain::error::{Result, TypeaheadError};
use crate::domain::Suggestion;
use crate::query::{self, Query};
use crate::task::Task;

/// Decay time constant for the recency multiplier, in hours.
const DECAY_HOURS: f64 = 168.0;

/// Number of seconds per hour for time conversion.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Starter vocabulary used by the demo binary when no lexicon file is given.
pub const DEFAULT_WORDS: &[&str] = &[
    "hello", "help", "helm", "hemlock", "herald", "hero", "hinge", "history", "hollow", "home",
    "hominid", "homage", "honest", "honey", "horizon", "hum", "human", "humble", "humid", "humor",
    "hummingbird", "hundred", "hunger", "hunt", "hurdle", "hurry", "hybrid", "hydrant", "hymn",
    "whim", "whisper", "wholesome", "window", "winter", "wisdom", "wonder", "world", "worth",
    "write", "wrong",
];

/// An in-memory suggestion source with fuzzy matching and frecency ranking.
///
/// # Examples
///
/// ```
/// use typeahead::Lexicon;
///
/// let lexicon = Lexicon::from_words(["hum", "humor", "home"], 8);
/// let hits = lexicon.suggest("hum");
/// assert_eq!(hits.first().map(|s| s.text.as_str()), Some("hum"));
/// assert!(hits.iter().all(|s| s.text != "home"));
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<Suggestion>,
    max_results: usize,
}

impl Lexicon {
    /// Creates an empty lexicon that returns at most `max_results` hits.
    #[must_use]
    pub fn new(max_results: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_results,
        }
    }

    /// Seeds a lexicon from plain words with no usage history.
    #[must_use]
    pub fn from_words<I, S>(words: I, max_results: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: words.into_iter().map(Suggestion::new).collect(),
            max_results,
        }
    }

    /// Loads a lexicon from a JSON file of [`Suggestion`] records.
    ///
    /// Records only need a `text` field; `uses` and `last_used` default to
    /// zero, so a hand-written word list stays short.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::Io`] when the file cannot be read and
    /// [`TypeaheadError::Lexicon`] when it cannot be decoded.
    pub fn from_file(path: impl AsRef<Path>, max_results: usize) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<Suggestion> =
            serde_json::from_str(&raw).map_err(|err| TypeaheadError::Lexicon(err.to_string()))?;

        tracing::debug!(count = entries.len(), "lexicon loaded");
        Ok(Self {
            entries,
            max_results,
        })
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon knows no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a suggestion unless its text is already known.
    pub fn insert(&mut self, suggestion: Suggestion) {
        if self.entries.iter().any(|known| known.text == suggestion.text) {
            return;
        }
        self.entries.push(suggestion);
    }

    /// Records one committed use of `text`, learning the word if new.
    pub fn record_use(&mut self, text: &str) {
        match self.entries.iter_mut().find(|entry| entry.text == text) {
            Some(entry) => entry.record_use(),
            None => {
                let mut suggestion = Suggestion::new(text);
                suggestion.record_use();
                self.entries.push(suggestion);
            }
        }
    }

    /// Returns the best matches for `needle`, capped at `max_results`.
    ///
    /// Candidates are fuzzy-matched case-insensitively; non-matches drop out
    /// entirely. Matches are ordered by match score, with frecency breaking
    /// ties so habitually chosen words surface first.
    #[must_use]
    pub fn suggest(&self, needle: &str) -> Vec<Suggestion> {
        use fuzzy_matcher::FuzzyMatcher;

        let needle = needle.to_lowercase();
        let now = chrono::Utc::now().timestamp();
        let matcher = SkimMatcherV2::default();

        let mut scored: Vec<(i64, &Suggestion)> = self
            .entries
            .iter()
            .filter_map(|suggestion| {
                let text = suggestion.text.to_lowercase();
                matcher
                    .fuzzy_match(&text, &needle)
                    .map(|score| (score, suggestion))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.cmp(&a.0).then_with(|| {
                let frecency_a = frecency_score(a.1, now);
                let frecency_b = frecency_score(b.1, now);
                frecency_b
                    .partial_cmp(&frecency_a)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        scored
            .into_iter()
            .take(self.max_results)
            .map(|(_, suggestion)| suggestion.clone())
            .collect()
    }

    /// Builds a [`Query`] over a shared lexicon, guarded by a minimum input
    /// length.
    ///
    /// Inputs shorter than `min_query_len` characters are suppressed without
    /// touching the lexicon. The handle is shared, so uses recorded after the
    /// query was built still influence later rankings.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use typeahead::{Lexicon, QueryError};
    ///
    /// let lexicon = Rc::new(RefCell::new(Lexicon::from_words(["humor", "human"], 8)));
    /// let query = Lexicon::query(Rc::clone(&lexicon), 3);
    ///
    /// let state = typeahead::init();
    /// let task = query(Some("hu"), &state);
    /// assert_eq!(
    ///     futures_executor::block_on(task.settle()),
    ///     Err(QueryError::Suppressed),
    /// );
    ///
    /// let task = query(Some("hum"), &state);
    /// let hits = futures_executor::block_on(task.settle()).expect("lookup succeeds");
    /// assert_eq!(hits.len(), 2);
    /// ```
    #[must_use]
    pub fn query(lexicon: Rc<RefCell<Self>>, min_query_len: usize) -> Query<Suggestion> {
        query::guarded(
            move |value: Option<&str>, _state: &State<Suggestion>| {
                value.unwrap_or("").chars().count() >= min_query_len
            },
            move |needle: &str, _state: &State<Suggestion>| {
                let needle = needle.to_string();
                let lexicon = Rc::clone(&lexicon);
                Task::new(async move { Ok(lexicon.borrow().suggest(&needle)) })
            },
        )
    }
}

/// Combines use count with an exponentially decayed recency multiplier.
///
/// Entries never used keep their raw count as the score, matching how
/// freshly seeded lexicons carry no timestamps.
fn frecency_score(suggestion: &Suggestion, now: i64) -> f64 {
    let uses = f64::from(suggestion.uses);

    let recency_multiplier = if suggestion.last_used <= 0 {
        1.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let age_seconds = (now - suggestion.last_used).max(0) as f64;
        let age_hours = age_seconds / SECONDS_PER_HOUR;

        f64::exp(-age_hours / DECAY_HOURS)
    };

    uses * recency_multiplier
}
