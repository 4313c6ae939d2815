//! Line-based, full-context diff of two text blocks.
//!
//! Used for the per-metric detail view. Every line of both inputs appears
//! exactly once, prefixed with `' '` (kept), `'-'` (only in old) or `'+'`
//! (only in new). No file or hunk headers are produced.

/// Diff two texts line by line using a longest-common-subsequence table.
///
/// When a position could be explained either way, removals are emitted
/// before additions. Identical inputs produce an empty string.
///
/// The table holds one cell per pair of lines, so time and memory grow with
/// `old_lines * new_lines`. Meant for short blocks such as a single record
/// dump, not whole catalogs.
pub fn full_context_diff(old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();

    // lcs[i][j] = length of the LCS of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut out = String::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            push_line(&mut out, ' ', a[i]);
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            push_line(&mut out, '-', a[i]);
            i += 1;
        } else {
            push_line(&mut out, '+', b[j]);
            j += 1;
        }
    }
    for line in &a[i..] {
        push_line(&mut out, '-', line);
    }
    for line in &b[j..] {
        push_line(&mut out, '+', line);
    }
    out
}

fn push_line(out: &mut String, marker: char, line: &str) {
    out.push(marker);
    out.push_str(line);
    out.push('\n');
}
