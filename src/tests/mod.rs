//! Tests for classweave, organized by operation.

pub mod grep;
pub mod overrides;

use tree_sitter::{Node, Parser, Tree};

use crate::base;
use crate::cpp::{members, records};

pub fn parse_cpp(code: &str) -> Tree {
    let mut parser = Parser::new();
    parser
        .set_language(&crate::language())
        .expect("Error loading C++ grammar");
    parser.parse(code, None).unwrap()
}

/// First defined record (class/struct) with the given name.
pub fn find_record<'tree>(tree: &'tree Tree, code: &str, name: &str) -> Node<'tree> {
    records::find_record(tree.root_node(), code, name)
        .unwrap_or_else(|| panic!("record `{name}` not found"))
}

/// First declaration whose function declarator is named `name`.
pub fn find_function<'tree>(tree: &'tree Tree, code: &str, name: &str) -> Node<'tree> {
    find_function_in(tree.root_node(), code, name)
        .unwrap_or_else(|| panic!("function `{name}` not found"))
}

fn find_function_in<'tree>(node: Node<'tree>, code: &str, name: &str) -> Option<Node<'tree>> {
    if matches!(
        node.kind(),
        "field_declaration" | "declaration" | "function_definition"
    ) {
        if let Some(declarator) = members::find_function_declarator(node) {
            if let Some(name_node) = members::declarator_name(declarator) {
                let written = base::node_text(code, &name_node);
                if written == name || written.ends_with(&format!("::{name}")) {
                    return Some(node);
                }
            }
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_function_in(child, code, name) {
            return Some(found);
        }
    }
    None
}
