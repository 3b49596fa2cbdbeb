//! Deriving `override` declarations from pure virtual functions.
//!
//! Walks every base record reachable from a class, collects the pure
//! virtual methods of each (bases first in traversal order, then the class
//! itself), and synthesizes one `... override;` declaration per method with
//! the declaring record's qualification prefix stripped.
//!
//! A method re-declared pure in several records appears once per declaring
//! record - no deduplication across bases.

use tree_sitter::Node;

use crate::error::{Error, Result};

use super::expand::{self, ExpandOptions};
use super::members;
use super::records;

/// Override declarations for every pure virtual function reachable from
/// `record`, in discovery order. Empty when nothing is pure virtual.
pub fn override_declarations(source: &str, record: Node) -> Result<Vec<String>> {
    if !records::is_record(record) {
        return Err(Error::NotARecord(record.kind().to_string()));
    }

    let options = ExpandOptions::default();
    let mut declarations = Vec::new();
    for base_record in records::collect_base_records(source, record) {
        collect_from_record(source, base_record, &options, &mut declarations)?;
    }
    collect_from_record(source, record, &options, &mut declarations)?;
    Ok(declarations)
}

fn collect_from_record(
    source: &str,
    record: Node,
    options: &ExpandOptions,
    declarations: &mut Vec<String>,
) -> Result<()> {
    let interface_prefix =
        records::qualified_name(source, record).map(|name| format!("{name}::"));

    for (method, _) in members::methods_with_access(source, record) {
        if !members::is_pure_virtual(source, method) {
            continue;
        }
        let mut declaration = expand::expand_function_declaration(source, method, options)?;
        if let Some(prefix) = &interface_prefix {
            declaration = declaration.replace(prefix.as_str(), "");
        }
        declaration.push_str(" override;");
        declarations.push(declaration);
    }
    Ok(())
}
