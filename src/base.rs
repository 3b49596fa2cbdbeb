//! Shared source-buffer queries.
//!
//! Every operation in this crate is a pure function of the original source
//! text plus borrowed syntax-tree nodes; the helpers here map nodes and byte
//! offsets back to text, 1-based line numbers, and line boundaries.

use tree_sitter::Node;

/// Get text from a tree-sitter node, guarding byte ranges against the end of
/// the buffer.
pub fn node_text(source: &str, node: &Node) -> String {
    text_range(source, node.start_byte(), node.end_byte())
}

/// Exact source text for an arbitrary byte range, lossily decoded so a range
/// that splits a multi-byte character cannot panic.
pub fn text_range(source: &str, start: usize, end: usize) -> String {
    let bytes = source.as_bytes();
    if start >= end || start >= bytes.len() {
        return String::new();
    }
    let end = end.min(bytes.len());
    String::from_utf8_lossy(&bytes[start..end]).to_string()
}

/// 1-based line number of the line containing `offset`.
pub fn line_number(source: &str, offset: usize) -> usize {
    let bytes = source.as_bytes();
    let end = offset.min(bytes.len());
    bytes[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Byte offset of the start of 1-based line `line`. Lines past the end of the
/// buffer resolve to the buffer length.
pub fn line_start_offset(source: &str, line: usize) -> usize {
    if line <= 1 {
        return 0;
    }
    let mut current = 1;
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            current += 1;
            if current == line {
                return i + 1;
            }
        }
    }
    source.len()
}

/// Byte offset just past the first newline at or after `offset`, or `None`
/// when `offset`'s line is the last one in the buffer.
pub fn start_of_next_line(source: &str, offset: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let start = offset.min(bytes.len());
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| start + i + 1)
}

/// First newline strictly inside `[start, end)`, as an absolute byte offset.
pub fn newline_between(source: &str, start: usize, end: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let start = start.min(bytes.len());
    let end = end.min(bytes.len());
    if start >= end {
        return None;
    }
    bytes[start..end]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| start + i)
}
