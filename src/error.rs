//! Error types with source location information.
//!
//! Every fallible surface of the crate reports through one of these types:
//! [`FoldError`] for fold-time arithmetic, [`BridgeError`] for parser-tree
//! conversion, [`PassError`] / [`PipelineError`] for the optimization
//! pipeline, and [`StructuralErrorKind`] for validator findings. The types
//! here are data; rendering is up to the caller.

use thiserror::Error;

use crate::span::Span;

/// The structural defects the validator can find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralErrorKind {
    /// An identifier with empty text
    EmptyName,
    /// An identifier containing an embedded NUL byte
    NulInName,
    /// A `const` variable without an initializer
    ConstWithoutInitializer,
    /// A span whose start follows its end
    SpanInverted,
}

impl StructuralErrorKind {
    /// Stable machine-readable code for the defect.
    pub fn code(&self) -> &'static str {
        match self {
            StructuralErrorKind::EmptyName => "empty-name",
            StructuralErrorKind::NulInName => "nul-in-name",
            StructuralErrorKind::ConstWithoutInitializer => "const-without-initializer",
            StructuralErrorKind::SpanInverted => "span-inverted",
        }
    }

    /// One-line description of the defect.
    pub fn message(&self) -> &'static str {
        match self {
            StructuralErrorKind::EmptyName => "identifier has an empty name",
            StructuralErrorKind::NulInName => "identifier contains an embedded NUL",
            StructuralErrorKind::ConstWithoutInitializer => {
                "const declaration has no initializer"
            }
            StructuralErrorKind::SpanInverted => "span start follows its end",
        }
    }
}

/// A fold-time arithmetic error.
///
/// Fold errors never abort the pipeline: the offending expression is left
/// unfolded and the error is recorded as a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoldError {
    /// Integer division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// Integer modulo with a zero divisor
    #[error("modulo by zero")]
    ModuloByZero,
    /// Operand kinds the folder does not accept
    #[error("operand types do not support constant folding")]
    UnsupportedFoldOperands,
}

impl FoldError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            FoldError::DivisionByZero => "division-by-zero",
            FoldError::ModuloByZero => "modulo-by-zero",
            FoldError::UnsupportedFoldOperands => "unsupported-fold-operands",
        }
    }
}

/// A fatal parser-bridge conversion error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// A parser declaration form the core tree cannot represent
    #[error("unsupported parser declaration at {span}")]
    UnsupportedParserDeclaration {
        /// Location of the declaration
        span: Span,
    },
    /// A parser type form the core tree cannot represent
    #[error("unsupported parser type at {span}")]
    UnsupportedParserType {
        /// Location of the type
        span: Span,
    },
    /// A parser expression form the core tree cannot represent
    #[error("unsupported parser expression at {span}")]
    UnsupportedParserExpression {
        /// Location of the expression
        span: Span,
    },
    /// A parser statement form the core tree cannot represent
    #[error("unsupported parser statement at {span}")]
    UnsupportedParserStatement {
        /// Location of the statement
        span: Span,
    },
    /// Operator text with no core operator
    #[error("unsupported operator `{text}` at {span}")]
    UnsupportedOperator {
        /// The unrecognized operator text
        text: String,
        /// Location of the operator's expression
        span: Span,
    },
    /// A core node the parser tree cannot represent
    #[error("unsupported syntax tree node at {span}")]
    UnsupportedAstNode {
        /// Location of the node
        span: Span,
    },
}

impl BridgeError {
    /// The location the error points at.
    pub fn span(&self) -> &Span {
        match self {
            BridgeError::UnsupportedParserDeclaration { span }
            | BridgeError::UnsupportedParserType { span }
            | BridgeError::UnsupportedParserExpression { span }
            | BridgeError::UnsupportedParserStatement { span }
            | BridgeError::UnsupportedOperator { span, .. }
            | BridgeError::UnsupportedAstNode { span } => span,
        }
    }
}

/// An error raised by a single optimization pass.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{pass_name}] {message}")]
pub struct PassError {
    /// Name of the failing pass
    pub pass_name: String,
    /// What went wrong
    pub message: String,
    /// Location, when the failure is tied to a node
    pub span: Option<Span>,
}

impl PassError {
    /// Creates a new pass error.
    pub fn new(pass_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pass_name: pass_name.into(),
            message: message.into(),
            span: None,
        }
    }

    /// Attaches a source location to the error.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// A fatal pipeline error.
///
/// Statistics accumulated before the failure stay readable through
/// [`OptimizationPipeline::stats`](crate::transform::OptimizationPipeline::stats).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A pass aborted; the tree keeps all mutations applied so far.
    #[error("pass failed: {0}")]
    PassFailed(#[from] PassError),
    /// Entry validation found errors and `stop_on_validator_error` is set.
    #[error("validation failed with {errors} error(s)")]
    ValidationFailed {
        /// Number of error-severity findings
        errors: usize,
    },
}
