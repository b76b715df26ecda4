//! A source-mapped GraphQL lexer and recursive descent parser.
//!
//! Parsing produces an immutable [`ast`] in which every node records the
//! [`Origin`] (source name plus start and end positions) it was parsed
//! from. Nodes can be compared structurally with
//! [`EqualsAst`](ast::EqualsAst), optionally ignoring origins.
//!
//! ```rust
//! use gqlfront_parser::ast::Definition;
//! use gqlfront_parser::ast::Selection;
//!
//! let document = gqlfront_parser::parse_document("{ a }").unwrap();
//! let Definition::Operation(operation) = &document.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! let Selection::Field(field) = &operation.selection_set.selections[0] else {
//!     panic!("expected a field");
//! };
//! assert_eq!(field.origin.as_ref().unwrap().byte_range(), 2..3);
//! ```
//!
//! Parsing stops at the first error. A [`SyntaxError`] carries the origin
//! of the offending text along with notes that can help fix it.

pub mod ast;
mod error_note;
mod error_note_kind;
mod lexer;
mod origin;
mod parser;
mod reserved_name_context;
mod source;
mod source_position;
mod string_parsing_error;
mod syntax_error;
mod syntax_error_kind;
pub mod token;
pub mod token_source;
mod type_ref_error;

pub use error_note::ErrorNote;
pub use error_note::ErrorNotes;
pub use error_note_kind::ErrorNoteKind;
pub use lexer::Lexer;
pub use origin::Origin;
pub use parser::MAX_RECURSION_DEPTH;
pub use parser::Parser;
pub use parser::parse_const_value;
pub use parser::parse_document;
pub use parser::parse_type_ref;
pub use parser::parse_value;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source::Source;
pub use source_position::SourcePosition;
pub use string_parsing_error::StringParsingError;
pub use syntax_error::SyntaxError;
pub use syntax_error_kind::SyntaxErrorKind;
pub use type_ref_error::TypeRefError;

#[cfg(test)]
mod tests;
