//! Interactive demo shell and entry point.
//!
//! This binary is the thin integration layer between the typeahead library
//! and a terminal: it reads lines from stdin, turns them into actions, and
//! prints the resulting menu after each dispatch. It exists to exercise the
//! controller end to end; embedding hosts would replace this file entirely.
//!
//! # Architecture
//!
//! ```text
//! stdin line ──▶ parse ──▶ Action ──▶ Dispatcher ──▶ State ──▶ stdout
//!                                        │
//!                                        └──▶ tracing (stderr)
//! ```
//!
//! # Lifecycle
//!
//! 1. **Config**: Load TOML from the first CLI argument, or use defaults
//! 2. **Tracing**: Install the stderr subscriber at the configured level
//! 3. **Lexicon**: Load the JSON file from config, or the built-in word list
//! 4. **Loop**: Dispatch one action per input line until EOF or `:quit`
//!
//! # Line Protocol
//!
//! - any text: dispatch it as new input and look up suggestions
//! - blank line: the field was emptied, menu closes immediately
//! - `:hide`: editing ended (blur), menu closes, value is kept
//! - `:use <word>`: record a committed use so the word ranks higher
//! - `:quit` / `:q`: exit

#![allow(clippy::multiple_crate_versions)]

use std::cell::RefCell;
use std::env;
use std::io::{self, BufRead};
use std::rc::Rc;

use typeahead::lexicon::DEFAULT_WORDS;
use typeahead::observability;
use typeahead::{Action, Config, Dispatcher, Lexicon, MenuState, State, Suggestion, View};

fn main() -> typeahead::Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    observability::init_tracing(&config);

    let lexicon = match &config.lexicon_file {
        Some(path) => Lexicon::from_file(path, config.max_results)?,
        None => Lexicon::from_words(DEFAULT_WORDS.iter().copied(), config.max_results),
    };
    let lexicon = Rc::new(RefCell::new(lexicon));
    let query = Lexicon::query(Rc::clone(&lexicon), config.min_query_len);

    let mut dispatcher = Dispatcher::with_observer(|state: &State<Suggestion>| {
        tracing::debug!(
            value = ?state.value,
            is_editing = state.is_editing,
            menu_len = state.menu.items.len(),
            "state transition"
        );
    });

    println!(
        "typeahead demo: {} words, suggestions from {} characters",
        lexicon.borrow().len(),
        config.min_query_len
    );
    println!("type to search, blank line clears, :hide blurs, :use <word> records, :quit exits");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            ":quit" | ":q" => break,
            ":hide" => dispatcher.dispatch(Action::HideMenu)?,
            "" => dispatcher.dispatch(Action::Input(Rc::clone(&query), None))?,
            _ => {
                if let Some(word) = input.strip_prefix(":use ") {
                    let word = word.trim();
                    lexicon.borrow_mut().record_use(word);
                    tracing::info!(word, "recorded committed use");
                    continue;
                }
                dispatcher.dispatch(Action::Input(Rc::clone(&query), Some(input.to_string())))?;
            }
        }

        print_state(dispatcher.state(), &render_menu);
    }

    Ok(())
}

/// Prints the field value, editing marker, and rendered menu for one state.
fn print_state(state: &State<Suggestion>, view: &impl View<Suggestion, Output = String>) {
    let value = state.value.as_deref().unwrap_or("");
    let marker = if state.is_editing { "editing" } else { "idle" };
    println!("[{marker}] {value:?} -> {}", view.view(&state.menu));
}

/// Joins menu item texts into one line, best match first.
fn render_menu(menu: &MenuState<Suggestion>) -> String {
    if menu.items.is_empty() {
        return "(menu closed)".to_string();
    }

    menu.items
        .iter()
        .map(|suggestion| suggestion.text.as_str())
        .collect::<Vec<_>>()
        .join("  ")
}
