//! Classweave - C++ class-body code generation support
//!
//! Classweave decides *where* inside an existing class body a newly generated
//! public member should be inserted, and *what* text to synthesize for the
//! common code-generation actions of a refactoring tool: expanding a function
//! declaration to its fully-qualified, fully-attributed signature, deriving
//! `override` declarations for every pure virtual function reachable through
//! the inheritance graph, and formatting a base-specifier insertion.
//!
//! The crate operates on an already-parsed tree-sitter syntax tree plus the
//! original source text. It never parses on its own, holds no state across
//! calls, and leaves splicing the synthesized text into the buffer to the
//! caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use classweave::{find_public_insertion_point, override_declarations};
//!
//! let mut parser = tree_sitter::Parser::new();
//! parser.set_language(&classweave::language())?;
//! let tree = parser.parse(source, None).unwrap();
//! let class_node = /* locate a class_specifier node */;
//!
//! let point = find_public_insertion_point(source, class_node)?;
//! let decls = override_declarations(source, class_node)?;
//! ```

// Core infrastructure
pub mod base;
pub mod error;
pub mod grep;
pub mod tokens;

// C++ queries and the four code-generation operations
pub mod cpp;

// Re-export the public API - Core types
pub use error::{Error, Result};

// Re-export the public API - Operations
pub use cpp::base_spec::{CodeInsertion, resolve_base_specifier};
pub use cpp::expand::{ExpandOptions, expand_function_declaration};
pub use cpp::insert::{InsertionPoint, find_public_insertion_point};
pub use cpp::overrides::override_declarations;

/// The tree-sitter grammar callers should parse C++ sources with.
pub fn language() -> tree_sitter::Language {
    tree_sitter_cpp::LANGUAGE.into()
}

// Tests module (only compiled during testing)
#[cfg(test)]
pub mod tests;
