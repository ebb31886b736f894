//! Machine-readable diagnostic records.
//!
//! The core never prints or logs. Every reportable condition becomes a
//! [`Diagnostic`] collected into a [`DiagnosticBag`]; rendering, color, and
//! source-snippet display belong to the out-of-scope diagnostic shell.

use crate::span::Span;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A condition that invalidates the result
    Error,
    /// A suspicious but non-fatal condition
    Warning,
    /// Supplementary information
    Note,
}

/// Which subsystem produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Structural validation findings
    Structure,
    /// Constant-folding findings
    Fold,
    /// Parser-bridge findings
    Bridge,
    /// Pipeline-level findings
    Pipeline,
}

/// A note attached to a diagnostic, pointing at related code.
#[derive(Debug, Clone, PartialEq)]
pub struct Related {
    /// Explanation of the relation
    pub message: String,
    /// Location of the related code
    pub span: Span,
}

/// A suggested fix attached to a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    /// Human-readable description of the fix
    pub message: String,
    /// Replacement text, when the fix is a pure rewrite
    pub replacement: Option<String>,
    /// The range the fix applies to
    pub span: Span,
}

/// One diagnostic record.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity of the finding
    pub severity: Severity,
    /// Producing subsystem
    pub category: Category,
    /// Stable machine-readable code, e.g. `"division-by-zero"`
    pub code: &'static str,
    /// One-line message
    pub message: String,
    /// Primary location
    pub span: Span,
    /// Related locations
    pub related: Vec<Related>,
    /// Suggested fixes
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    /// Creates an error diagnostic with no related notes or fixes.
    pub fn error(
        category: Category,
        code: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity: Severity::Error,
            category,
            code,
            message: message.into(),
            span,
            related: Vec::new(),
            fixes: Vec::new(),
        }
    }

    /// Creates a warning diagnostic with no related notes or fixes.
    pub fn warning(
        category: Category,
        code: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            code,
            message: message.into(),
            span,
            related: Vec::new(),
            fixes: Vec::new(),
        }
    }

    /// Attaches a related note.
    pub fn with_related(mut self, message: impl Into<String>, span: Span) -> Self {
        self.related.push(Related {
            message: message.into(),
            span,
        });
        self
    }

    /// Attaches a suggested fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        };
        write!(
            f,
            "{}[{}]: {} at {}",
            severity, self.code, self.message, self.span
        )
    }
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Records a diagnostic unless an identical record is already present.
    ///
    /// Fixed-point passes revisit unfoldable expressions every iteration;
    /// this keeps each finding reported once.
    pub fn push_unique(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Iterates the recorded diagnostics in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Returns true if any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Moves every recorded diagnostic out of the bag.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl Extend<Diagnostic> for DiagnosticBag {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}
