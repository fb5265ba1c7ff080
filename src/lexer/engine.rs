// src/lexer/engine.rs
// Input gate: holds the three analysis inputs and only hands out a scanner
// once all of them are present.

use crate::lexer::scan::{Scanner, Token};
use crate::lexer::tables::{ScanTable, TokenTable};

/// Which of the three inputs have been supplied. Lets a caller tell "not
/// configured yet" apart from "ready, but the source had no tokens".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readiness {
    pub source: bool,
    pub scan_table: bool,
    pub token_table: bool,
}

impl Readiness {
    pub fn is_ready(self) -> bool {
        self.source && self.scan_table && self.token_table
    }
}

/// Owns the source text and both tables. Each input is supplied independently
/// and may be replaced; analysis runs only when all three are present. Absent
/// configuration is an observable state, not an error.
#[derive(Debug, Default)]
pub struct Analyzer {
    source: Option<Vec<char>>,
    scan: Option<ScanTable>,
    tokens: Option<TokenTable>,
    keywords: Vec<String>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the source text. The stored text always ends with a
    /// carriage-return/line-feed pair, appended when missing, so the last
    /// token has a deterministic trailing context.
    pub fn set_source(&mut self, text: &str) {
        let mut chars: Vec<char> = text.chars().collect();
        if !chars.ends_with(&['\r', '\n']) {
            chars.push('\r');
            chars.push('\n');
        }
        self.source = Some(chars);
    }

    pub fn set_scan_table(&mut self, table: ScanTable) {
        self.scan = Some(table);
    }

    pub fn set_token_table(&mut self, table: TokenTable) {
        self.tokens = Some(table);
    }

    /// Optional keyword list: identifier tokens whose image appears here are
    /// promoted to keywords. Not part of the readiness gate.
    pub fn set_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
    }

    pub fn readiness(&self) -> Readiness {
        Readiness {
            source: self.source.is_some(),
            scan_table: self.scan.is_some(),
            token_table: self.tokens.is_some(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness().is_ready()
    }

    /// Run the full analysis if every input is present, else return an empty
    /// stream. Each run scans from the start; the loaded tables are reused
    /// across runs and across replaced sources.
    pub fn analyze(&self) -> Vec<Token> {
        match self.scanner() {
            Some(mut s) => s.run(),
            None => Vec::new(),
        }
    }

    /// A scanner exists only for a fully configured analyzer. Callers that
    /// want tokens one at a time (a stepping UI, the fuzz harness) drive it
    /// with [`Scanner::next_token`].
    pub fn scanner(&self) -> Option<Scanner<'_>> {
        Some(Scanner::new(
            self.source.as_deref()?,
            self.scan.as_ref()?,
            self.tokens.as_ref()?,
            &self.keywords,
        ))
    }
}
