//! Line-oriented text search.
//!
//! The insertion-point resolver falls back to a textual scan for `public:`
//! labels when a class declares no public methods; this module is that
//! search, kept separate so the pattern and the line numbering stay in one
//! place.

use regex::Regex;

/// Return the 1-based line numbers of every line matching `pattern`.
pub fn grep_lines(content: &str, pattern: &Regex) -> Vec<usize> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(idx, _)| idx + 1)
        .collect()
}
