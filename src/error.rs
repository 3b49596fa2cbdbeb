//! Error types for classweave operations.
//!
//! Every variant here signals a contract violation - the caller handed a node
//! that does not satisfy an operation's precondition. Degenerate-but-valid
//! inputs (a class with no methods, no bases, no pure virtuals) are never
//! errors; each operation returns its natural empty or fallback result for
//! those.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The node passed as a function declaration carries no function
    /// declarator.
    #[error("not a function declaration: `{0}` node has no function declarator")]
    NotAFunction(String),

    /// The function declarator carries no name to qualify.
    #[error("function declarator has no name")]
    UnnamedFunction,

    /// The node passed as a record is neither a class nor a struct
    /// declaration.
    #[error("not a record declaration: expected class_specifier or struct_specifier, got `{0}`")]
    NotARecord(String),

    /// The record has no name token to anchor an edit on.
    #[error("record declaration has no name")]
    AnonymousRecord,
}
