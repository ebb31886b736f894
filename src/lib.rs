//! # Vela AST Core
//!
//! The typed syntax-tree core of the Vela compiler front end: the tree
//! model every later phase consumes, the traversal framework that drives
//! analyses and rewrites over it, the optimization pipeline, and the
//! bridge to the richer upstream parser tree.
//!
//! ## Overview
//!
//! ```text
//! parser tree -> bridge -> validator -> optimization pipeline -> consumers
//!                   ^                                       |
//!                   +------------- round trip --------------+
//! ```
//!
//! The crate performs no I/O, spawns no threads, and never prints or logs;
//! every reportable condition is returned as structured data with source
//! spans attached.
//!
//! ## Quick Start
//!
//! Build a function and fold its body:
//!
//! ```rust
//! use vela_ast::ast::{BasicKind, BinaryOperator, Expression, TypeRef};
//! use vela_ast::builder::{FunctionBuilder, ProgramBuilder};
//! use vela_ast::transform::{OptimizationPipeline, PipelineConfig};
//! use vela_ast::Span;
//!
//! let span = Span::dummy();
//! let mut program = ProgramBuilder::new(span.clone())
//!     .function(
//!         FunctionBuilder::new("nine", span.clone())
//!             .returns(TypeRef::basic(BasicKind::Int, span.clone()))
//!             .returning(Expression::binary(
//!                 Expression::binary(
//!                     Expression::integer(1, span.clone()),
//!                     BinaryOperator::Add,
//!                     Expression::integer(2, span.clone()),
//!                     span.clone(),
//!                 ),
//!                 BinaryOperator::Mul,
//!                 Expression::integer(3, span.clone()),
//!                 span.clone(),
//!             ))
//!             .build(),
//!     )
//!     .build();
//!
//! let mut pipeline = OptimizationPipeline::with_default_passes(PipelineConfig::default());
//! let stats = pipeline.optimize(&mut program).unwrap();
//! assert_eq!(stats.totals.constants_folded, 2);
//! ```
//!
//! ## Modules
//!
//! - [`span`]: source positions and ranges
//! - [`ast`]: the node model
//! - [`visit`]: visitor and transformer traversal
//! - [`builder`]: fluent construction of well-formed subtrees
//! - [`validate`]: structural validation
//! - [`transform`]: optimization passes and the fixed-point pipeline
//! - [`bridge`]: conversion to and from the parser tree
//! - [`print`]: pretty-printer and example analysis visitors
//! - [`diag`] / [`error`]: diagnostic records and error types

#![doc(html_root_url = "https://docs.rs/vela-ast/0.3.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ast;
pub mod bridge;
pub mod builder;
pub mod diag;
pub mod error;
pub mod print;
pub mod span;
pub mod transform;
pub mod validate;
pub mod visit;

// Re-exports for convenience
pub use ast::{Declaration, Expression, Program, Statement, TypeRef};
pub use bridge::{from_parser_program, to_parser_program, ParserProgram};
pub use diag::{Diagnostic, DiagnosticBag};
pub use error::{BridgeError, FoldError, PassError, PipelineError};
pub use span::{Position, Span};
pub use transform::{OptLevel, OptimizationPipeline, PipelineConfig, PipelineStats};
pub use validate::{validate, ValidationResult};
pub use visit::{Transformer, Visitor};
