// src/lexer/tables/mod.rs
pub mod io;
pub mod sample;

use hashbrown::HashMap;

pub use io::{
    load_tables_json_bytes, parse_keyword_list_csv, parse_scan_table_csv, parse_token_table_csv,
    render_scan_table_csv, render_token_table_csv, save_tables_json,
};

/// State identifier. States carry no meaning beyond table lookups; state 0 is
/// always the start state.
pub type State = u32;

/// Reserved label that marks a state as non-accepting.
pub const ERROR_LABEL: &str = "error";

/// Label given to identifier tokens by grammars that want keyword promotion.
pub const IDENTIFIER_LABEL: &str = "identifier";

/// Label an identifier is promoted to when its image is in the keyword list.
pub const KEYWORD_LABEL: &str = "keyword";

/// Cell value in scan-table files that means "no transition".
pub const NO_MOVE: i32 = -1;

/// Labels that are recognized but never included in the output stream.
/// A CR/LF pair scans as a single `newline` token, not two.
#[inline]
pub fn is_trivia(label: &str) -> bool {
    matches!(label, "whitespace" | "newline" | "comment")
}

/// Character-transition table: `state -> (character -> successor state)`.
///
/// Lookups fold uppercase ASCII letters to lowercase before probing, so
/// tables built on lowercase keys also match uppercase input. Non-letter
/// characters are never folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanTable {
    moves: HashMap<State, HashMap<char, State>>,
}

impl ScanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one `(state, character) -> successor` edge.
    pub fn insert(&mut self, from: State, on: char, to: State) {
        self.moves.entry(from).or_default().insert(on, to);
    }

    /// Successor of `state` on `c`, or `None` when the automaton has no move.
    pub fn next(&self, state: State, c: char) -> Option<State> {
        let folded = if c.is_ascii_uppercase() {
            c.to_ascii_lowercase()
        } else {
            c
        };
        self.moves.get(&state)?.get(&folded).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Rows in unspecified order; io sorts before writing.
    pub(crate) fn rows(&self) -> impl Iterator<Item = (&State, &HashMap<char, State>)> {
        self.moves.iter()
    }
}

/// Classification table: `state -> token label`. A state that is absent, or
/// present with the reserved `error` label, is non-accepting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    labels: HashMap<State, String>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `state` to `label`. An empty label is coerced to `error`.
    pub fn insert(&mut self, state: State, label: impl Into<String>) {
        let label = label.into();
        let label = if label.is_empty() {
            ERROR_LABEL.to_string()
        } else {
            label
        };
        self.labels.insert(state, label);
    }

    pub fn label(&self, state: State) -> Option<&str> {
        self.labels.get(&state).map(String::as_str)
    }

    /// A state is accepting when it has a label other than `error`.
    pub fn is_accepting(&self, state: State) -> bool {
        matches!(self.label(state), Some(l) if l != ERROR_LABEL)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = (&State, &String)> {
        self.labels.iter()
    }
}
