//! Member-level queries: access tracking and method declarators.
//!
//! Access is determined by the most recent `access_specifier` label
//! preceding a member inside the record body. Defaults: class -> private,
//! struct -> public. Compiler-generated members never appear in a syntax
//! tree, so every member the walk yields is explicit.

use tree_sitter::Node;

use crate::base;
use super::records;

/// Bound on declarator nesting (`**&` chains) so a pathological tree cannot
/// loop the descent.
const MAX_DECLARATOR_DEPTH: usize = 32;

/// Member access levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
    Private,
}

/// Default access for a record's members before any label.
pub fn default_access(record: Node) -> Access {
    if records::is_struct(record) {
        Access::Public
    } else {
        Access::Private
    }
}

/// Methods of a record in declaration order, each paired with its access
/// level. Fields, nested types, friends, and labels are not included.
pub fn methods_with_access<'tree>(source: &str, record: Node<'tree>) -> Vec<(Node<'tree>, Access)> {
    let Some(body) = records::body(record) else {
        return Vec::new();
    };
    let mut access = default_access(record);
    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        if child.kind() == "access_specifier" {
            if let Some(updated) = parse_access(&base::node_text(source, &child)) {
                access = updated;
            }
            continue;
        }
        if declares_function(child) {
            methods.push((child, access));
        }
    }
    methods
}

fn parse_access(text: &str) -> Option<Access> {
    match text.trim_end_matches(':').trim() {
        "public" => Some(Access::Public),
        "protected" => Some(Access::Protected),
        "private" => Some(Access::Private),
        _ => None,
    }
}

/// True when a record-body member declares a function (method, constructor,
/// destructor, operator), either directly or under a template wrapper.
pub fn declares_function(node: Node) -> bool {
    match node.kind() {
        "function_definition" | "field_declaration" | "declaration" => {
            find_function_declarator(node).is_some()
        }
        "template_declaration" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor).any(declares_function)
        }
        _ => false,
    }
}

/// The `function_declarator` of a declaration, reached through any
/// pointer/reference layers around it.
///
/// Returns `None` for function-pointer declarators (`void (*fp)()`), whose
/// declarator is parenthesized rather than a name.
pub fn find_function_declarator<'tree>(declaration: Node<'tree>) -> Option<Node<'tree>> {
    let mut node = declaration.child_by_field_name("declarator")?;
    for _ in 0..MAX_DECLARATOR_DEPTH {
        match node.kind() {
            "function_declarator" => {
                let name = node.child_by_field_name("declarator")?;
                return is_declarator_name(name).then_some(node);
            }
            "pointer_declarator" | "reference_declarator" => {
                node = inner_declarator(node)?;
            }
            _ => return None,
        }
    }
    None
}

fn is_declarator_name(node: Node) -> bool {
    matches!(
        node.kind(),
        "identifier"
            | "field_identifier"
            | "qualified_identifier"
            | "destructor_name"
            | "operator_name"
            | "operator_cast"
    )
}

/// Declarator wrapped by a pointer/reference layer. The grammar names the
/// field on pointer layers; reference layers fall back to the last named
/// child.
pub(super) fn inner_declarator<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    if let Some(inner) = node.child_by_field_name("declarator") {
        return Some(inner);
    }
    let count = node.named_child_count();
    if count == 0 {
        return None;
    }
    node.named_child(count - 1)
}

/// The name node of a function declarator.
pub fn declarator_name<'tree>(function_declarator: Node<'tree>) -> Option<Node<'tree>> {
    function_declarator
        .child_by_field_name("declarator")
        .filter(|n| is_declarator_name(*n))
}

/// True when the member declaration carries a pure-virtual marker (`= 0`).
/// Only meaningful on members that declare a function; a field initializer
/// also puts `= 0` tokens on the declaration.
pub fn is_pure_virtual(source: &str, member: Node) -> bool {
    let mut cursor = member.walk();
    let children: Vec<Node> = member.children(&mut cursor).collect();
    if children.iter().any(|c| c.kind() == "pure_virtual_clause") {
        return true;
    }
    // Grammar revisions without the dedicated clause spell the marker as
    // bare `=` `0` tokens on the declaration itself.
    children.iter().any(|c| c.kind() == "=")
        && children
            .iter()
            .any(|c| c.kind() == "number_literal" && base::node_text(source, c) == "0")
}

/// True when the method is const-qualified.
pub fn is_const(source: &str, function_declarator: Node) -> bool {
    let mut cursor = function_declarator.walk();
    function_declarator
        .children(&mut cursor)
        .any(|c| c.kind() == "type_qualifier" && base::node_text(source, &c) == "const")
}

/// The written ref-qualifier (`&` or `&&`), if any.
pub fn ref_qualifier(source: &str, function_declarator: Node) -> Option<String> {
    let mut cursor = function_declarator.walk();
    function_declarator
        .children(&mut cursor)
        .find(|c| c.kind() == "ref_qualifier")
        .map(|c| base::node_text(source, &c))
}

/// The written exception specification (`noexcept`, `noexcept(expr)`,
/// `throw()`), verbatim, if any.
pub fn exception_spec(source: &str, function_declarator: Node) -> Option<String> {
    let mut cursor = function_declarator.walk();
    function_declarator
        .children(&mut cursor)
        .find(|c| matches!(c.kind(), "noexcept" | "throw_specifier"))
        .map(|c| base::node_text(source, &c))
}

/// True when the declaration is a member of a record - written inside a
/// record body, or declared out-of-line with a qualified name.
pub fn is_method(declaration: Node) -> bool {
    let mut current = declaration;
    while let Some(parent) = current.parent() {
        if parent.kind() == "field_declaration_list" {
            return true;
        }
        current = parent;
    }
    find_function_declarator(declaration)
        .and_then(declarator_name)
        .is_some_and(|name| name.kind() == "qualified_identifier")
}
