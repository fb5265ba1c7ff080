// src/dev/generator.rs
// Random-but-valid source generator for the sample grammar. Shared by
// fuzz_scan and the sweep tests so failures replay identically.

use rand::Rng;

/// Generate at least `target_len` bytes of source that the sample grammar
/// scans without errors or backtracks, ending on a clean token boundary.
pub fn gen_valid_source<R: Rng>(rng: &mut R, target_len: usize) -> String {
    let mut out = String::with_capacity(target_len + 16);

    while out.len() < target_len {
        match rng.random_range(0u32..100) {
            0..=29 => push_ident(rng, &mut out),
            30..=44 => push_number(rng, &mut out),
            45..=54 => push_float(rng, &mut out),
            55..=74 => push_ws(rng, &mut out),
            75..=84 => push_comment(rng, &mut out),
            _ => push_operator(rng, &mut out),
        }
    }

    // Safety trailer so the final token always ends before the terminator.
    out.push('\n');
    out
}

fn push_ident<R: Rng>(rng: &mut R, out: &mut String) {
    let len = rng.random_range(1..=10);
    out.push(random_lower(rng));
    for _ in 1..len {
        if rng.random_bool(0.7) {
            out.push(random_lower(rng));
        } else {
            out.push(random_digit(rng));
        }
    }
}

// A preceding identifier would absorb leading digits (and then a float's
// '.' dead-ends in the start state), so numeric fragments start on a fresh
// token boundary.
fn ensure_boundary(out: &mut String) {
    if out.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        out.push(' ');
    }
}

fn push_number<R: Rng>(rng: &mut R, out: &mut String) {
    ensure_boundary(out);
    let len = rng.random_range(1..=8);
    for _ in 0..len {
        out.push(random_digit(rng));
    }
}

// Always well-formed: digits on both sides of the dot, so the scan never
// dead-ends in the non-accepting dot state.
fn push_float<R: Rng>(rng: &mut R, out: &mut String) {
    push_number(rng, out);
    out.push('.');
    let len = rng.random_range(1..=8);
    for _ in 0..len {
        out.push(random_digit(rng));
    }
    // A trailing space keeps a following '.'-free piece from extending the
    // fraction in surprising ways when reading the generated text.
    out.push(' ');
}

fn push_ws<R: Rng>(rng: &mut R, out: &mut String) {
    let len = rng.random_range(1..=4);
    for _ in 0..len {
        match rng.random_range(0u32..10) {
            0..=5 => out.push(' '),
            6..=7 => out.push('\t'),
            8 => out.push('\n'),
            _ => out.push_str("\r\n"),
        }
    }
}

fn push_comment<R: Rng>(rng: &mut R, out: &mut String) {
    out.push_str("//");
    let len = rng.random_range(0..=30);
    const BODY: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789 ";
    for _ in 0..len {
        let i = rng.random_range(0..BODY.len());
        out.push(BODY[i] as char);
    }
    out.push('\n');
}

fn push_operator<R: Rng>(rng: &mut R, out: &mut String) {
    let ops = ["+", "-", "*", "=", "(", ")", "/", "<", "<="];
    let i = rng.random_range(0..ops.len());
    out.push_str(ops[i]);
    if rng.random_bool(0.3) {
        out.push(' ');
    }
}

fn random_lower<R: Rng>(rng: &mut R) -> char {
    let set = b"abcdefghijklmnopqrstuvwxyz";
    let i = rng.random_range(0..set.len());
    set[i] as char
}

fn random_digit<R: Rng>(rng: &mut R) -> char {
    let set = b"0123456789";
    let i = rng.random_range(0..set.len());
    set[i] as char
}
