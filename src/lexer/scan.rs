// src/lexer/scan.rs
// Table-driven maximal-munch recognizer with backtrack to the last accepting
// state, plus the stream driver that filters trivia.

use crate::lexer::tables::{
    ERROR_LABEL, IDENTIFIER_LABEL, KEYWORD_LABEL, ScanTable, State, TokenTable, is_trivia,
};

/// One classified token: the exact source substring consumed and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: String,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
        }
    }

    /// Hard scan errors are ordinary tokens with the reserved `error` label.
    pub fn is_error(&self) -> bool {
        self.kind == ERROR_LABEL
    }
}

/// Next input symbol: a real character, or end of input. Reads past the end
/// keep advancing a virtual cursor, and `End` never has a transition, so it
/// can never be confused with a character that happens to be NUL.
#[derive(Clone, Copy)]
enum Symbol {
    Char(char),
    End,
}

enum Action {
    Move(State),
    Recognize,
    Error,
}

/// A scanner over one normalized source text. Only obtainable from a fully
/// configured [`Analyzer`](crate::lexer::Analyzer).
pub struct Scanner<'a> {
    chars: &'a [char],
    scan: &'a ScanTable,
    tokens: &'a TokenTable,
    keywords: &'a [String],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(
        chars: &'a [char],
        scan: &'a ScanTable,
        tokens: &'a TokenTable,
        keywords: &'a [String],
    ) -> Self {
        Self {
            chars,
            scan,
            tokens,
            keywords,
            pos: 0,
        }
    }

    /// True once the cursor has consumed the whole source.
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Stream driver: scan from the start and collect every non-trivia token.
    /// Error tokens are not trivia and stay in the output.
    pub fn run(&mut self) -> Vec<Token> {
        self.pos = 0;
        let mut out = Vec::new();
        while self.pos < self.chars.len() {
            let tok = self.next_token();
            if !is_trivia(&tok.kind) {
                out.push(tok);
            }
        }
        out
    }

    /// Recognize exactly one token starting at the cursor, leaving the cursor
    /// on the first character of the next token.
    pub fn next_token(&mut self) -> Token {
        let start = self.pos;
        let mut state: State = 0;
        // Longest accepting prefix seen so far: the accepting state, and the
        // index of the character that moved out of it.
        let mut accepted: Option<(State, usize)> = None;

        loop {
            let sym = self.read();
            match self.choose_action(state, sym) {
                Action::Move(next) => {
                    if self.tokens.is_accepting(state) {
                        accepted = Some((state, self.pos - 1));
                    }
                    state = next;
                }
                Action::Recognize => {
                    // The symbol that had no move is not part of this token.
                    let end = self.pos - 1;
                    if self.pos != self.chars.len() {
                        self.pos = end; // re-read it as the next token's first character
                    }
                    let kind = self.tokens.label(state).unwrap_or(ERROR_LABEL);
                    return self.keyword_check(Token::new(self.image(start, end), kind));
                }
                Action::Error => {
                    if let Some((remembered, mark)) = accepted {
                        // Dead end after an accepting prefix: un-read what the
                        // remembered suffix covered and emit the shorter token.
                        log::debug!(
                            "backtrack at {}: state {state} dead, falling back to state {remembered}",
                            self.pos - 1
                        );
                        self.pos = mark + 1;
                        let kind = self.tokens.label(remembered).unwrap_or(ERROR_LABEL);
                        return self.keyword_check(Token::new(self.image(start, mark), kind));
                    }
                    // Not even a single-state prefix was accepting. The cursor
                    // stays past the offending symbol; scanning can continue.
                    let (at, what) = match sym {
                        Symbol::Char(c) => (self.pos - 1, format!("{c:?}")),
                        Symbol::End => (self.chars.len(), "end of input".to_string()),
                    };
                    return Token::new(
                        format!("at position {at}: no rule matches {what} in state {state}"),
                        ERROR_LABEL,
                    );
                }
            }
        }
    }

    /// Read the next symbol. The cursor advances even at end of input, so a
    /// recognize that follows an `End` read can restore it with the same
    /// un-read arithmetic as the character case.
    fn read(&mut self) -> Symbol {
        let sym = match self.chars.get(self.pos) {
            Some(&c) => Symbol::Char(c),
            None => Symbol::End,
        };
        self.pos += 1;
        sym
    }

    /// Move beats recognize beats error; `End` never moves.
    fn choose_action(&self, state: State, sym: Symbol) -> Action {
        if let Symbol::Char(c) = sym
            && let Some(next) = self.scan.next(state, c)
        {
            return Action::Move(next);
        }
        if self.tokens.is_accepting(state) {
            Action::Recognize
        } else {
            Action::Error
        }
    }

    fn image(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Promote identifiers whose image is in the keyword list.
    fn keyword_check(&self, tok: Token) -> Token {
        if tok.kind == IDENTIFIER_LABEL && self.keywords.iter().any(|k| k == &tok.value) {
            return Token::new(tok.value, KEYWORD_LABEL);
        }
        tok
    }
}
