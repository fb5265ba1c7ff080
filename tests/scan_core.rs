//! Recognizer and stream-driver behavior over small hand-built tables.

use tablex::lexer::{
    Analyzer, Token,
    tables::{ScanTable, TokenTable, sample},
};

fn edges(table: &mut ScanTable, from: u32, on: &str, to: u32) {
    for c in on.chars() {
        table.insert(from, c, to);
    }
}

/// Letters loop on state 1 ("ident"), digits loop on state 2 ("number"),
/// plus whitespace/newline trivia so full sources scan cleanly.
fn ident_number_tables() -> (ScanTable, TokenTable) {
    let mut scan = ScanTable::new();
    edges(&mut scan, 0, "abcdefghijklmnopqrstuvwxyz", 1);
    edges(&mut scan, 1, "abcdefghijklmnopqrstuvwxyz", 1);
    edges(&mut scan, 0, "0123456789", 2);
    edges(&mut scan, 2, "0123456789", 2);
    edges(&mut scan, 0, " \t", 3);
    edges(&mut scan, 3, " \t", 3);
    edges(&mut scan, 0, "\r", 4);
    edges(&mut scan, 4, "\n", 5);
    edges(&mut scan, 0, "\n", 5);

    let mut tokens = TokenTable::new();
    tokens.insert(1, "ident");
    tokens.insert(2, "number");
    tokens.insert(3, "whitespace");
    tokens.insert(4, "newline");
    tokens.insert(5, "newline");
    (scan, tokens)
}

fn analyzer_for(src: &str) -> Analyzer {
    let (scan, tokens) = ident_number_tables();
    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);
    a.set_source(src);
    a
}

fn kinds_and_values(tokens: &[Token]) -> Vec<(&str, &str)> {
    tokens
        .iter()
        .map(|t| (t.kind.as_str(), t.value.as_str()))
        .collect()
}

#[test]
fn maximal_munch_splits_ident_then_number() {
    // "ab1": moves 0->1->1 on 'a','b'; '1' has no move from state 1, which
    // is accepting, so "ab" is recognized and '1' starts the next token.
    let a = analyzer_for("ab1");
    let tokens = a.analyze();
    assert_eq!(
        kinds_and_values(&tokens),
        vec![("ident", "ab"), ("number", "1")]
    );
}

#[test]
fn uppercase_input_matches_lowercase_table_and_keeps_its_case() {
    let a = analyzer_for("AbC");
    let tokens = a.analyze();
    assert_eq!(kinds_and_values(&tokens), vec![("ident", "AbC")]);
}

#[test]
fn all_trivia_source_yields_empty_stream() {
    let a = analyzer_for("  ");
    assert!(a.analyze().is_empty());
    assert!(a.is_ready(), "empty stream came from a ready analyzer");
}

#[test]
fn hard_error_token_names_position_and_character() {
    // '!' has no move from state 0 and state 0 is not accepting.
    let a = analyzer_for("!ab");
    let tokens = a.analyze();
    assert!(tokens[0].is_error());
    assert!(tokens[0].value.contains("position 0"), "{}", tokens[0].value);
    assert!(tokens[0].value.contains('!'), "{}", tokens[0].value);
    // Scanning continues after the offending character.
    assert_eq!(tokens[1], Token::new("ab", "ident"));
}

#[test]
fn hard_error_at_end_of_input_names_it() {
    // A table whose terminator path never reaches an accepting state: the
    // scan walks 0 -> 2 -> 3 on "\r\n" and then runs out of characters with
    // nothing to fall back to.
    let mut scan = ScanTable::new();
    edges(&mut scan, 0, "a", 1);
    edges(&mut scan, 0, "\r", 2);
    edges(&mut scan, 2, "\n", 3);
    let mut tokens = TokenTable::new();
    tokens.insert(1, "ident");

    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);
    a.set_source("a");
    let out = a.analyze();
    assert_eq!(out[0], Token::new("a", "ident"));
    assert!(out[1].is_error());
    assert!(
        out[1].value.contains("end of input"),
        "{}",
        out[1].value
    );
    // Position is one past the last character, i.e. the source length.
    assert!(out[1].value.contains("position 3"), "{}", out[1].value);
}

#[test]
fn source_is_terminated_with_crlf_pair() {
    // Drive the scanner token by token so trivia is visible: the appended
    // terminator must scan as a single trailing newline token.
    let a = analyzer_for("ab");
    let mut scanner = a.scanner().expect("ready");
    let mut all = Vec::new();
    while !scanner.at_end() {
        all.push(scanner.next_token());
    }
    assert_eq!(
        kinds_and_values(&all),
        vec![("ident", "ab"), ("newline", "\r\n")]
    );
}

#[test]
fn crlf_scans_as_one_newline_token() {
    let a = analyzer_for("a\r\nb\r\n");
    let mut scanner = a.scanner().expect("ready");
    let mut all = Vec::new();
    while !scanner.at_end() {
        all.push(scanner.next_token());
    }
    assert_eq!(
        kinds_and_values(&all),
        vec![
            ("ident", "a"),
            ("newline", "\r\n"),
            ("ident", "b"),
            ("newline", "\r\n"),
        ]
    );
}

#[test]
fn backtrack_falls_back_to_longest_accepting_prefix() {
    // Sample grammar: "12." moves into the non-accepting float-dot state;
    // a following letter dead-ends there, so the scan rolls back and emits
    // the number. The rollback resumes after the dot, which is therefore
    // consumed by neither token (longstanding behavior, kept as is).
    let (scan, tokens) = sample::sample_tables();
    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);
    a.set_source("12.x");
    let out = a.analyze();
    assert_eq!(
        kinds_and_values(&out),
        vec![("number", "12"), ("identifier", "x")]
    );
}

#[test]
fn well_formed_float_does_not_backtrack() {
    let (scan, tokens) = sample::sample_tables();
    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);
    a.set_source("12.5");
    assert_eq!(kinds_and_values(&a.analyze()), vec![("number", "12.5")]);
}

#[test]
fn keywords_promote_identifiers_only() {
    let (scan, tokens) = sample::sample_tables();
    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);
    a.set_keywords(sample::sample_keywords());
    a.set_source("if iffy then");
    assert_eq!(
        kinds_and_values(&a.analyze()),
        vec![("keyword", "if"), ("identifier", "iffy"), ("keyword", "then")]
    );
}

#[test]
fn comment_runs_to_end_of_line() {
    let (scan, tokens) = sample::sample_tables();
    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);
    a.set_source("x = 1 // rest is comment 123\ny");
    assert_eq!(
        kinds_and_values(&a.analyze()),
        vec![
            ("identifier", "x"),
            ("operator", "="),
            ("number", "1"),
            ("identifier", "y"),
        ]
    );
}
