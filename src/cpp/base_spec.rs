//! Base-specifier insertion for an existing or new base-clause.
//!
//! Formatting contract: a single space after `:` and `,`; the access
//! keyword `public` is spelled out when the deriving record is a `class`
//! and omitted for a `struct` (public by default). The base is named by its
//! qualified name.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::error::{Error, Result};

use super::records;

/// A text edit: insert `text` at byte `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInsertion {
    pub offset: usize,
    pub text: String,
}

/// Resolve the edit that makes `base` a direct base of `deriving`.
///
/// Extends the existing base-clause when there is one, otherwise creates a
/// new clause right after the class name. When `base` already is a direct
/// base the insertion is empty - degenerate input, not an error.
pub fn resolve_base_specifier(
    source: &str,
    deriving: Node,
    base: Node,
) -> Result<CodeInsertion> {
    if !records::is_record(deriving) {
        return Err(Error::NotARecord(deriving.kind().to_string()));
    }
    if !records::is_record(base) {
        return Err(Error::NotARecord(base.kind().to_string()));
    }

    let base_name = records::qualified_name(source, base).ok_or(Error::AnonymousRecord)?;
    let specifier = if records::is_struct(deriving) {
        base_name.clone()
    } else {
        format!("public {base_name}")
    };

    if let Some(clause) = records::base_clause(deriving) {
        let already_derived = records::direct_base_names(source, deriving)
            .iter()
            .any(|written| {
                written == &base_name || records::simple_name(written) == records::simple_name(&base_name)
            });
        let text = if already_derived {
            String::new()
        } else {
            format!(", {specifier}")
        };
        return Ok(CodeInsertion {
            offset: clause.end_byte(),
            text,
        });
    }

    let name = records::record_name(deriving).ok_or(Error::AnonymousRecord)?;
    Ok(CodeInsertion {
        offset: name.end_byte(),
        text: format!(" : {specifier}"),
    })
}
