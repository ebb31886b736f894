//! Bridge between the core AST and the upstream parser AST.
//!
//! The parser produces a richer tree than the core models: structural
//! reference, pointer, array, generic, and function types, plus distinct
//! alias and newtype declarations. The bridge converts in both directions
//! with minimal loss:
//!
//! - [`from_parser_program`]: parser tree in, core tree out. Structural
//!   types are encoded as identifier types in canonical textual form;
//!   macros are dropped; stray top-level statements become a placeholder
//!   type declaration.
//! - [`to_parser_program`]: the inverse. Canonical names parse back into
//!   structural types; core character literals become parser strings.
//!
//! For programs built only from constructs both trees model (or whose
//! canonical text is reversibly parseable), the round trip preserves
//! declaration shape, identifier texts, operator kinds, literal values,
//! and spans down to byte offsets. Comments are not preserved.
//!
//! Bridge errors are fatal to the conversion call: the caller gets the
//! error and no tree.

pub mod parser_ast;
mod type_text;

mod from_parser;
mod to_parser;

pub use parser_ast::*;

use crate::ast::Program;
use crate::error::BridgeError;

/// Converts a parser program into a core program.
pub fn from_parser_program(program: &ParserProgram) -> Result<Program, BridgeError> {
    from_parser::convert_program(program)
}

/// Converts a core program back into a parser program.
pub fn to_parser_program(program: &Program) -> Result<ParserProgram, BridgeError> {
    to_parser::convert_program(program)
}
