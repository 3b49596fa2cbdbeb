//! Lexical-token queries over a concrete syntax tree.
//!
//! Tree-sitter leaves carry every token of the source, punctuation included,
//! so "the next token after a location" is the first leaf starting at or
//! after a byte offset. Comment leaves are skipped, matching a lexer that
//! discards trivia.

use tree_sitter::Node;

/// Statement terminator token kind.
pub const TERMINATOR: &str = ";";

/// Opening-brace token kind.
pub const OPENING_BRACE: &str = "{";

/// Find the first token within `root`'s subtree that starts at or after
/// `offset`. Returns `None` when the subtree holds no further tokens.
pub fn next_token_after<'tree>(root: Node<'tree>, offset: usize) -> Option<Node<'tree>> {
    if root.end_byte() <= offset {
        return None;
    }
    if root.child_count() == 0 {
        if root.start_byte() >= offset && root.kind() != "comment" {
            return Some(root);
        }
        // A token overlapping the offset, or trivia; the caller's sibling
        // loop moves on.
        return None;
    }
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.end_byte() <= offset {
            continue;
        }
        if let Some(token) = next_token_after(child, offset) {
            return Some(token);
        }
    }
    None
}
