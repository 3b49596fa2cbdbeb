//! Record (class/struct) queries.
//!
//! Name and scope resolution, body lookup, and the inheritance-graph walk.
//! Base names from a `base_class_clause` are resolved against record
//! declarations found in the same translation unit's tree; records defined
//! elsewhere simply do not resolve and are skipped by callers.

use std::collections::{HashSet, VecDeque};

use tracing::debug;
use tree_sitter::Node;

use crate::base;

/// Cap on the inheritance-graph walk, against adversarial or cyclic clause
/// chains the visited set alone cannot bound.
const MAX_BASE_WALK: usize = 256;

/// True for the two record kinds the engine operates on.
pub fn is_record(node: Node) -> bool {
    matches!(node.kind(), "class_specifier" | "struct_specifier")
}

/// Structs are public-by-default records.
pub fn is_struct(node: Node) -> bool {
    node.kind() == "struct_specifier"
}

/// The record's name node, absent for anonymous records.
pub fn record_name<'tree>(record: Node<'tree>) -> Option<Node<'tree>> {
    record.child_by_field_name("name")
}

/// The record's body (`field_declaration_list`), absent for forward
/// declarations.
pub fn body<'tree>(record: Node<'tree>) -> Option<Node<'tree>> {
    record.child_by_field_name("body")
}

/// The record's base-clause (`: public A, B`), absent when it derives from
/// nothing.
pub fn base_clause<'tree>(record: Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = record.walk();
    record
        .children(&mut cursor)
        .find(|c| c.kind() == "base_class_clause")
}

/// Base names as written in the base-clause, in declaration order.
pub fn direct_base_names(source: &str, record: Node) -> Vec<String> {
    let Some(clause) = base_clause(record) else {
        return Vec::new();
    };
    let mut cursor = clause.walk();
    clause
        .children(&mut cursor)
        .filter(|c| {
            matches!(
                c.kind(),
                "type_identifier" | "qualified_identifier" | "template_type"
            )
        })
        .map(|c| base::node_text(source, &c))
        .collect()
}

/// Fully qualified name of the record: enclosing namespaces and records
/// joined with `::`. `None` for anonymous records.
pub fn qualified_name(source: &str, record: Node) -> Option<String> {
    let name = base::node_text(source, &record_name(record)?);
    let prefix = enclosing_scope_prefix(source, record);
    if prefix.is_empty() {
        Some(name)
    } else {
        Some(format!("{prefix}::{name}"))
    }
}

/// `::`-joined names of the namespaces and records enclosing `node`,
/// outermost first. Anonymous scopes contribute nothing.
pub fn enclosing_scope_prefix(source: &str, node: Node) -> String {
    let mut scopes: Vec<String> = Vec::new();
    let mut current = node;
    while let Some(parent) = current.parent() {
        match parent.kind() {
            "class_specifier" | "struct_specifier" | "union_specifier" => {
                if let Some(name) = record_name(parent) {
                    scopes.push(base::node_text(source, &name));
                }
            }
            "namespace_definition" => {
                if let Some(name) = parent.child_by_field_name("name") {
                    scopes.push(base::node_text(source, &name));
                }
            }
            _ => {}
        }
        current = parent;
    }
    scopes.reverse();
    scopes.join("::")
}

/// Root of the tree `node` belongs to, reached by climbing the parent chain.
pub fn tree_root(node: Node) -> Node {
    let mut current = node;
    while let Some(parent) = current.parent() {
        current = parent;
    }
    current
}

/// Find the defined record matching `name` anywhere under `root`.
///
/// Matching is by simple name - the last `::` segment of `name`, template
/// arguments stripped - against the record's own name, and only records with
/// a body count (a forward declaration contributes no members). The first
/// match in tree order wins.
pub fn find_record<'tree>(root: Node<'tree>, source: &str, name: &str) -> Option<Node<'tree>> {
    let target = simple_name(name);
    if target.is_empty() {
        return None;
    }
    find_record_by_simple_name(root, source, target)
}

fn find_record_by_simple_name<'tree>(
    node: Node<'tree>,
    source: &str,
    target: &str,
) -> Option<Node<'tree>> {
    if is_record(node) && body(node).is_some() {
        if let Some(name) = record_name(node) {
            if base::node_text(source, &name) == target {
                return Some(node);
            }
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_record_by_simple_name(child, source, target) {
            return Some(found);
        }
    }
    None
}

/// Every base record reachable from `record`, breadth-first: direct bases in
/// clause order, then their bases. Revisits are suppressed, unresolvable
/// names are skipped, and the walk stops at its iteration cap.
pub fn collect_base_records<'tree>(source: &str, record: Node<'tree>) -> Vec<Node<'tree>> {
    let root = tree_root(record);
    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    visited.insert((record.start_byte(), record.end_byte()));

    let mut queue: VecDeque<Node> = VecDeque::new();
    enqueue_bases(source, root, record, &mut visited, &mut queue);

    let mut bases = Vec::new();
    let mut steps = 0;
    while let Some(base_record) = queue.pop_front() {
        steps += 1;
        if steps > MAX_BASE_WALK {
            debug!("base walk stopped at iteration cap ({MAX_BASE_WALK})");
            break;
        }
        bases.push(base_record);
        enqueue_bases(source, root, base_record, &mut visited, &mut queue);
    }
    bases
}

fn enqueue_bases<'tree>(
    source: &str,
    root: Node<'tree>,
    record: Node<'tree>,
    visited: &mut HashSet<(usize, usize)>,
    queue: &mut VecDeque<Node<'tree>>,
) {
    for name in direct_base_names(source, record) {
        let Some(resolved) = find_record(root, source, &name) else {
            debug!("base `{name}` not defined in this translation unit; skipping");
            continue;
        };
        if visited.insert((resolved.start_byte(), resolved.end_byte())) {
            queue.push_back(resolved);
        }
    }
}

/// Last `::` segment of a possibly qualified, possibly templated name.
pub fn simple_name(name: &str) -> &str {
    let stripped = name.split('<').next().unwrap_or(name).trim();
    stripped.rsplit("::").next().unwrap_or(stripped).trim()
}
