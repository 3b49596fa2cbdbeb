//! Full function-declaration expansion.
//!
//! Reconstructs the complete, compilable signature of a function or method
//! declaration exactly as it would need to appear in a derived class or an
//! override list: standard attributes, return type, fully qualified name,
//! parameter list, and trailing method qualifiers, joined into one
//! whitespace-normalized line.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::base;
use crate::error::{Error, Result};

use super::members;
use super::records;
use super::types::TypePrinter;

/// Same bound as the declarator descent in `members`.
const MAX_DECLARATOR_DEPTH: usize = 32;

/// Options controlling declaration expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandOptions {
    /// Drop `[[...]]` attribute specifiers from the expansion.
    pub ignore_attribute_specifiers: bool,
}

/// Expand `function` - a `field_declaration`, `declaration`, or
/// `function_definition` holding a function declarator - to its full
/// textual signature.
///
/// Fails only when the node violates the contract (no function declarator,
/// nameless declarator); that is a caller bug, not a data condition.
pub fn expand_function_declaration(
    source: &str,
    function: Node,
    options: &ExpandOptions,
) -> Result<String> {
    let declarator = members::find_function_declarator(function)
        .ok_or_else(|| Error::NotAFunction(function.kind().to_string()))?;
    let printer = TypePrinter;

    let mut parts: Vec<String> = Vec::with_capacity(8);

    if !options.ignore_attribute_specifiers {
        parts.push(standard_attributes(source, function));
    }

    parts.push(return_type(source, function, &printer).unwrap_or_default());
    parts.push(format!(
        "{}{}",
        qualified_name(source, function, declarator, &printer)?,
        parameters(source, declarator, &printer)
    ));

    if members::is_method(function) {
        if members::is_const(source, declarator) {
            parts.push("const".to_string());
        }
        parts.push(members::ref_qualifier(source, declarator).unwrap_or_default());
        parts.push(members::exception_spec(source, declarator).unwrap_or_default());
    }

    parts.retain(|part| !part.is_empty());
    Ok(parts.join(" "))
}

/// Standard `[[...]]` attributes attached to the declaration, verbatim, in
/// declaration order. GNU `__attribute__((...))` specifiers are not
/// reproduced.
fn standard_attributes(source: &str, function: Node) -> String {
    let mut cursor = function.walk();
    function
        .children(&mut cursor)
        .filter(|c| c.kind() == "attribute_declaration")
        .map(|c| base::node_text(source, &c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The written return type, or `None` when the declaration has none
/// (constructors, destructors, conversion operators). Pointer and reference
/// declarator layers around the function declarator belong to the return
/// type.
fn return_type(source: &str, function: Node, printer: &TypePrinter) -> Option<String> {
    let type_node = function.child_by_field_name("type")?;

    let mut written = String::new();
    let mut cursor = function.walk();
    for child in function.children(&mut cursor) {
        if child.id() == type_node.id() || child.kind() == "type_qualifier" {
            if !written.is_empty() {
                written.push(' ');
            }
            written.push_str(&base::node_text(source, &child));
        }
    }

    let mut node = function.child_by_field_name("declarator")?;
    for _ in 0..MAX_DECLARATOR_DEPTH {
        match node.kind() {
            "pointer_declarator" => {
                written.push('*');
                node = members::inner_declarator(node)?;
            }
            "reference_declarator" => {
                let marker = node
                    .child(0)
                    .map(|c| base::node_text(source, &c))
                    .unwrap_or_else(|| "&".to_string());
                written.push_str(&marker);
                node = members::inner_declarator(node)?;
            }
            _ => break,
        }
    }

    Some(printer.normalize(&written))
}

/// Fully qualified name of the function: the written name when it is
/// already qualified (out-of-line declarations), otherwise the enclosing
/// namespace/record scope joined onto the simple name.
fn qualified_name(
    source: &str,
    function: Node,
    declarator: Node,
    printer: &TypePrinter,
) -> Result<String> {
    let name = members::declarator_name(declarator).ok_or(Error::UnnamedFunction)?;
    let written = base::node_text(source, &name);
    if name.kind() == "qualified_identifier" {
        return Ok(printer.normalize(&written));
    }
    let prefix = records::enclosing_scope_prefix(source, function);
    if prefix.is_empty() {
        Ok(written)
    } else {
        Ok(format!("{prefix}::{written}"))
    }
}

/// The parenthesized parameter list, each parameter `"<type> <name>"` with
/// the name (and its separating space) omitted when the parameter is
/// unnamed. Default arguments are never reproduced.
fn parameters(source: &str, declarator: Node, printer: &TypePrinter) -> String {
    let Some(list) = declarator.child_by_field_name("parameters") else {
        return "()".to_string();
    };
    let mut rendered: Vec<String> = Vec::new();
    let mut cursor = list.walk();
    for param in list.named_children(&mut cursor) {
        if matches!(
            param.kind(),
            "parameter_declaration"
                | "optional_parameter_declaration"
                | "variadic_parameter_declaration"
        ) {
            rendered.push(render_parameter(source, param, printer));
        }
    }
    format!("({})", rendered.join(", "))
}

fn render_parameter(source: &str, param: Node, printer: &TypePrinter) -> String {
    let name = param
        .child_by_field_name("declarator")
        .and_then(first_identifier);

    // The type is everything written before any default value, minus the
    // parameter name itself.
    let start = param.start_byte();
    let end = default_value_cutoff(param).unwrap_or_else(|| param.end_byte());
    let written = match name {
        Some(name_node) => format!(
            "{}{}",
            base::text_range(source, start, name_node.start_byte()),
            base::text_range(source, name_node.end_byte(), end)
        ),
        None => base::text_range(source, start, end),
    };
    let rendered_type = printer.normalize(&written);

    match name {
        Some(name_node) => format!("{} {}", rendered_type, base::node_text(source, &name_node)),
        None => rendered_type,
    }
}

/// Start byte of the `=` introducing a default argument, if any.
fn default_value_cutoff(param: Node) -> Option<usize> {
    let mut cursor = param.walk();
    param
        .children(&mut cursor)
        .find(|c| c.kind() == "=")
        .map(|c| c.start_byte())
}

/// First plain identifier inside a declarator subtree - the parameter name,
/// wherever the pointer/reference/array layers put it.
fn first_identifier<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    if node.kind() == "identifier" {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_identifier(child) {
            return Some(found);
        }
    }
    None
}
