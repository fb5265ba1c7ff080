// src/lexer/tables/io.rs
use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use super::{NO_MOVE, ScanTable, State, TokenTable};

// -------------------- CSV table files --------------------

/// Parse a scanning-table grid.
///
/// The header row names the alphabet: its first cell is ignored and every
/// other cell is a decimal character code. Each remaining row is
/// `state, successor, successor, ...` with one column per header character.
/// An empty cell or `-1` means "no transition". Rows with the wrong column
/// count are skipped with a warning.
pub fn parse_scan_table_csv(text: &str) -> Result<ScanTable, String> {
    let mut lines = text.lines();
    let header = lines.next().ok_or("scan table is empty")?;
    let cols: Vec<&str> = header.split(',').collect();
    if cols.len() < 2 {
        return Err("scan table header has no character columns".into());
    }

    let mut alphabet = Vec::with_capacity(cols.len() - 1);
    for cell in &cols[1..] {
        let code: u32 = cell
            .trim()
            .parse()
            .map_err(|e| format!("bad character code {:?} in header: {e}", cell.trim()))?;
        let c = char::from_u32(code)
            .ok_or_else(|| format!("character code {code} is not a valid scalar value"))?;
        alphabet.push(c);
    }

    let mut table = ScanTable::new();
    for (i, line) in lines.enumerate() {
        let lineno = i + 2; // 1-based, after the header
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != alphabet.len() + 1 {
            log::warn!(
                "scan table line {lineno}: {} cells, expected {}; skipping row",
                cells.len(),
                alphabet.len() + 1
            );
            continue;
        }
        let state: State = cells[0]
            .trim()
            .parse()
            .map_err(|e| format!("line {lineno}: bad state number {:?}: {e}", cells[0].trim()))?;
        for (col, cell) in cells[1..].iter().enumerate() {
            let cell = cell.trim();
            if cell.is_empty() {
                continue; // no transition
            }
            let succ: i32 = cell
                .parse()
                .map_err(|e| format!("line {lineno}: bad successor {cell:?}: {e}"))?;
            if succ == NO_MOVE {
                continue;
            }
            if succ < 0 {
                return Err(format!("line {lineno}: negative successor state {succ}"));
            }
            table.insert(state, alphabet[col], succ as State);
        }
    }
    Ok(table)
}

/// Parse a token-table file of `state,label` rows.
///
/// Rows that do not have exactly two fields, or whose first field is not a
/// state number (e.g. a header row), are skipped. An empty label is coerced
/// to the reserved `error` label; trailing CR is trimmed.
pub fn parse_token_table_csv(text: &str) -> Result<TokenTable, String> {
    let mut table = TokenTable::new();
    for (i, line) in text.lines().enumerate() {
        let mut fields = line.split(',');
        let (Some(first), Some(second), None) = (fields.next(), fields.next(), fields.next())
        else {
            log::warn!("token table line {}: not a state,label pair; skipping", i + 1);
            continue;
        };
        let Ok(state) = first.trim().parse::<State>() else {
            // Header row or junk line.
            log::warn!("token table line {}: non-numeric state {first:?}; skipping", i + 1);
            continue;
        };
        table.insert(state, second.trim_end_matches(['\r', '\n']).trim());
    }
    Ok(table)
}

/// Parse a keyword list: comma-separated words, surrounding whitespace
/// (including line breaks) ignored, empty entries dropped.
pub fn parse_keyword_list_csv(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

// -------------------- CSV rendering --------------------

/// Render a scan table in the grid format `parse_scan_table_csv` reads.
/// The alphabet is the sorted union of all edge characters; missing edges
/// are written as `-1`. Output is deterministic.
pub fn render_scan_table_csv(table: &ScanTable) -> String {
    let mut alphabet: Vec<char> = Vec::new();
    let mut rows: Vec<(State, &hashbrown::HashMap<char, State>)> =
        table.rows().map(|(s, r)| (*s, r)).collect();
    rows.sort_unstable_by_key(|(s, _)| *s);
    for (_, row) in &rows {
        for c in row.keys() {
            if !alphabet.contains(c) {
                alphabet.push(*c);
            }
        }
    }
    alphabet.sort_unstable();

    let mut out = String::from("state");
    for c in &alphabet {
        out.push(',');
        out.push_str(&(*c as u32).to_string());
    }
    out.push('\n');

    for (state, row) in rows {
        out.push_str(&state.to_string());
        for c in &alphabet {
            out.push(',');
            match row.get(c) {
                Some(succ) => out.push_str(&succ.to_string()),
                None => out.push_str(&NO_MOVE.to_string()),
            }
        }
        out.push('\n');
    }
    out
}

/// Render a token table as `state,label` rows under a header, sorted by state.
pub fn render_token_table_csv(table: &TokenTable) -> String {
    let mut rows: Vec<(State, &String)> = table.rows().map(|(s, l)| (*s, l)).collect();
    rows.sort_unstable_by_key(|(s, _)| *s);

    let mut out = String::from("state,token\n");
    for (state, label) in rows {
        out.push_str(&format!("{state},{label}\n"));
    }
    out
}

// -------------------- JSON (de)serialization --------------------

#[derive(Serialize, Deserialize)]
struct TablesDisk {
    scan: Vec<ScanRowDisk>,
    tokens: Vec<TokenRowDisk>,
}

#[derive(Serialize, Deserialize)]
struct ScanRowDisk {
    state: State,
    /// `(character code, successor)` pairs, sorted by code.
    edges: Vec<(u32, State)>,
}

#[derive(Serialize, Deserialize)]
struct TokenRowDisk {
    state: State,
    label: String,
}

impl TablesDisk {
    fn from_tables(scan: &ScanTable, tokens: &TokenTable) -> Self {
        let mut scan_rows: Vec<ScanRowDisk> = scan
            .rows()
            .map(|(state, row)| {
                let mut edges: Vec<(u32, State)> =
                    row.iter().map(|(c, s)| (*c as u32, *s)).collect();
                edges.sort_unstable();
                ScanRowDisk {
                    state: *state,
                    edges,
                }
            })
            .collect();
        scan_rows.sort_unstable_by_key(|r| r.state);

        let mut token_rows: Vec<TokenRowDisk> = tokens
            .rows()
            .map(|(state, label)| TokenRowDisk {
                state: *state,
                label: label.clone(),
            })
            .collect();
        token_rows.sort_unstable_by_key(|r| r.state);

        Self {
            scan: scan_rows,
            tokens: token_rows,
        }
    }

    fn into_tables(self) -> Result<(ScanTable, TokenTable), String> {
        let mut scan = ScanTable::new();
        for row in self.scan {
            for (code, succ) in row.edges {
                let c = char::from_u32(code)
                    .ok_or_else(|| format!("character code {code} is not a valid scalar value"))?;
                scan.insert(row.state, c, succ);
            }
        }
        let mut tokens = TokenTable::new();
        for row in self.tokens {
            tokens.insert(row.state, row.label);
        }
        Ok((scan, tokens))
    }
}

pub fn save_tables_json(
    path: &std::path::Path,
    scan: &ScanTable,
    tokens: &TokenTable,
) -> std::io::Result<()> {
    // Stream to disk to avoid giant intermediate strings.
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &TablesDisk::from_tables(scan, tokens))?;
    w.flush()
}

pub fn load_tables_json_bytes(data: &[u8]) -> Result<(ScanTable, TokenTable), String> {
    serde_json::from_slice::<TablesDisk>(data)
        .map_err(|e| format!("failed to parse tables JSON: {e}"))
        .and_then(TablesDisk::into_tables)
}
