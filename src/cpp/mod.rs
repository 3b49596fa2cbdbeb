//! C++ syntax-tree queries and the code-generation operations built on them.
//!
//! The query layer (`records`, `members`, `types`) wraps the raw
//! tree-sitter-cpp node vocabulary; the operation modules (`expand`,
//! `insert`, `overrides`, `base_spec`) implement the four public entry
//! points of the crate.

// Query layer
pub mod members;
pub mod records;
pub mod types;

// Operations
pub mod base_spec;
pub mod expand;
pub mod insert;
pub mod overrides;
