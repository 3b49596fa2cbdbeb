//! Insertion-point resolution for new public members.
//!
//! Three rules, tried in order, first applicable wins:
//!
//! 1. after the first chain of contiguous public methods;
//! 2. after an existing `public:` label inside the class body;
//! 3. after the class body's opening brace, requesting a new `public:`
//!    label unless the record is a struct.
//!
//! Rule 1 is preferred whenever any public method exists, even if a
//! `public:` label also exists elsewhere - new methods group with existing
//! public methods, not with access labels.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tree_sitter::Node;

use crate::error::{Error, Result};
use crate::{base, grep, tokens};

use super::members::{self, Access};
use super::records;

/// Matches a `public:` access label, tolerant of embedded whitespace.
static PUBLIC_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"public\s*:").unwrap());

/// Cap on the terminator-skipping scan, against pathological token streams.
const MAX_TERMINATOR_SKIP: usize = 1000;

/// Where a newly generated public member should be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionPoint {
    /// Byte offset into the source buffer; always within the record's
    /// source range.
    pub offset: usize,
    /// A `public:` label must be emitted before the inserted text.
    pub needs_public_label: bool,
}

/// Resolve the insertion point for a new public member of `record`.
///
/// Deterministic and side-effect free; a record with no methods and no body
/// is degenerate but valid and resolves through the fallback rules.
pub fn find_public_insertion_point(source: &str, record: Node) -> Result<InsertionPoint> {
    if !records::is_record(record) {
        return Err(Error::NotARecord(record.kind().to_string()));
    }

    if let Some(offset) = after_first_public_method_chain(source, record) {
        debug!("insertion anchored after first public method chain at {offset}");
        return Ok(InsertionPoint {
            offset,
            needs_public_label: false,
        });
    }

    if let Some(offset) = after_public_label(source, record) {
        debug!("insertion anchored after `public:` label at {offset}");
        return Ok(InsertionPoint {
            offset,
            needs_public_label: false,
        });
    }

    let offset = after_opening_brace(source, record);
    debug!("insertion anchored after opening brace at {offset}");
    Ok(InsertionPoint {
        offset,
        needs_public_label: !records::is_struct(record),
    })
}

/// Rule 1: the byte just past the last member of the first contiguous run
/// of public methods, advanced to the start of the following line when one
/// exists before the next substantive token.
fn after_first_public_method_chain(source: &str, record: Node) -> Option<usize> {
    let mut last_in_chain: Option<Node> = None;
    for (method, access) in members::methods_with_access(source, record) {
        if access == Access::Public {
            last_in_chain = Some(method);
        } else if last_in_chain.is_some() {
            break;
        }
    }
    let chain_end = last_in_chain?.end_byte();

    // Skip consecutive `;` tokens to the next substantive token; exhausting
    // the cap or the token stream stops the scan at the last known
    // location.
    let root = records::tree_root(record);
    let mut position = chain_end;
    let mut anchor = chain_end;
    for _ in 0..MAX_TERMINATOR_SKIP {
        let Some(token) = tokens::next_token_after(root, position) else {
            break;
        };
        anchor = token.start_byte();
        if token.kind() != tokens::TERMINATOR {
            break;
        }
        position = token.end_byte();
    }

    match base::newline_between(source, chain_end, anchor) {
        Some(newline) => Some(newline + 1),
        None => Some(anchor),
    }
}

/// Rule 2: the start of the line following the first `public:` label line
/// inside the record's line range.
fn after_public_label(source: &str, record: Node) -> Option<usize> {
    let begin_line = base::line_number(source, record.start_byte());
    let end_line = base::line_number(source, record.end_byte());

    let label_line = grep::grep_lines(source, &PUBLIC_LABEL_RE)
        .into_iter()
        .find(|line| (begin_line..=end_line).contains(line))?;

    let offset = base::line_start_offset(source, label_line + 1);
    Some(offset.min(body_close_offset(record)))
}

/// Rule 3: the start of the line following the body's opening brace, or the
/// byte just past the brace when the record sits on a single line. A record
/// with no body anchors at its end.
fn after_opening_brace(source: &str, record: Node) -> usize {
    let mut position = record.start_byte();
    let mut brace: Option<Node> = None;
    for _ in 0..MAX_TERMINATOR_SKIP {
        let Some(token) = tokens::next_token_after(record, position) else {
            break;
        };
        if token.kind() == tokens::OPENING_BRACE {
            brace = Some(token);
            break;
        }
        position = token.end_byte();
    }

    let Some(brace) = brace else {
        return record.end_byte();
    };
    let offset = base::start_of_next_line(source, brace.end_byte()).unwrap_or(brace.end_byte());
    offset.min(body_close_offset(record))
}

/// Byte of the body's closing brace; insertion never lands past it. Records
/// without a body fall back to their end byte.
fn body_close_offset(record: Node) -> usize {
    records::body(record)
        .map(|body| body.end_byte().saturating_sub(1))
        .unwrap_or_else(|| record.end_byte())
}
