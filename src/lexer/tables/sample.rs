// src/lexer/tables/sample.rs
// Small hand-built grammar used by the demo binary, the fuzz generator, and
// the integration tests. It exercises every recognizer action: plain loops,
// two-character operators, and a non-accepting float state that forces a
// backtrack on inputs like "12.x".

use super::{ScanTable, State, TokenTable};

// States of the sample automaton. 0 is the start state and stays unlabeled.
pub const START: State = 0;
const IDENT: State = 1;
const NUMBER: State = 2;
const FLOAT_DOT: State = 3; // after the '.', not accepting
const FLOAT: State = 4;
const WHITE: State = 5;
const CR: State = 6;
const NL: State = 7;
const OP: State = 8;
const SLASH: State = 9;
const COMMENT: State = 10;
const LESS: State = 11;
const LESS_EQ: State = 12;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
// Characters allowed in a one-line comment body.
const COMMENT_BODY: &str =
    "abcdefghijklmnopqrstuvwxyz0123456789 \t+-*=()<./";

fn edges(table: &mut ScanTable, from: State, on: &str, to: State) {
    for c in on.chars() {
        table.insert(from, c, to);
    }
}

/// Build the sample scan and token tables. Keys are lowercase; uppercase
/// input matches through the lookup fold.
pub fn sample_tables() -> (ScanTable, TokenTable) {
    let mut scan = ScanTable::new();

    // Start
    edges(&mut scan, START, LOWER, IDENT);
    edges(&mut scan, START, DIGITS, NUMBER);
    edges(&mut scan, START, " \t", WHITE);
    edges(&mut scan, START, "\r", CR);
    edges(&mut scan, START, "\n", NL);
    edges(&mut scan, START, "+-*=()", OP);
    edges(&mut scan, START, "/", SLASH);
    edges(&mut scan, START, "<", LESS);

    // Loops
    edges(&mut scan, IDENT, LOWER, IDENT);
    edges(&mut scan, IDENT, DIGITS, IDENT);
    edges(&mut scan, NUMBER, DIGITS, NUMBER);
    edges(&mut scan, WHITE, " \t", WHITE);

    // Floats: the dot state only becomes accepting after a digit.
    edges(&mut scan, NUMBER, ".", FLOAT_DOT);
    edges(&mut scan, FLOAT_DOT, DIGITS, FLOAT);
    edges(&mut scan, FLOAT, DIGITS, FLOAT);

    // A CR/LF pair is one newline token; either half alone still accepts.
    edges(&mut scan, CR, "\n", NL);

    // "//" starts a comment that runs to the end of the line.
    edges(&mut scan, SLASH, "/", COMMENT);
    edges(&mut scan, COMMENT, COMMENT_BODY, COMMENT);

    // "<" or "<="
    edges(&mut scan, LESS, "=", LESS_EQ);

    let mut tokens = TokenTable::new();
    tokens.insert(IDENT, "identifier");
    tokens.insert(NUMBER, "number");
    tokens.insert(FLOAT, "number");
    tokens.insert(WHITE, "whitespace");
    tokens.insert(CR, "newline");
    tokens.insert(NL, "newline");
    tokens.insert(OP, "operator");
    tokens.insert(SLASH, "operator");
    tokens.insert(COMMENT, "comment");
    tokens.insert(LESS, "operator");
    tokens.insert(LESS_EQ, "operator");

    (scan, tokens)
}

/// Keywords for the sample grammar; identifiers matching these are promoted.
pub fn sample_keywords() -> Vec<String> {
    ["if", "then", "else", "while"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
