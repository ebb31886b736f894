//! Structural validation of the AST.
//!
//! The validator walks a [`Program`] and reports every structural defect it
//! finds as a diagnostic anchored to the offending node's span. Findings
//! never abort the walk; the pipeline decides whether they abort a run.

use crate::ast::*;
use crate::diag::{Category, Diagnostic};
use crate::error::StructuralErrorKind;
use crate::span::Span;
use crate::visit::{self, Visitor};

/// The outcome of validating one program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Every finding, in traversal order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns true if no error-severity finding was reported.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == crate::diag::Severity::Error)
            .count()
    }
}

/// Validates a program, reporting every structural defect.
///
/// Checks performed:
/// - identifier names are non-empty and contain no NUL bytes
/// - `const` declarations carry an initializer
/// - no node has a span whose start follows its end
pub fn validate(program: &Program) -> ValidationResult {
    let mut validator = Validator {
        diagnostics: Vec::new(),
    };
    validator.visit_program(program);
    ValidationResult {
        diagnostics: validator.diagnostics,
    }
}

struct Validator {
    diagnostics: Vec<Diagnostic>,
}

impl Validator {
    fn report(&mut self, kind: StructuralErrorKind, span: &Span) {
        self.diagnostics.push(Diagnostic::error(
            Category::Structure,
            kind.code(),
            kind.message(),
            span.clone(),
        ));
    }

    fn check_span(&mut self, span: &Span) {
        if span.is_inverted() {
            self.report(StructuralErrorKind::SpanInverted, span);
        }
    }

    fn check_name(&mut self, ident: &Identifier) {
        if ident.name.is_empty() {
            self.report(StructuralErrorKind::EmptyName, &ident.span);
        } else if ident.name.contains('\0') {
            self.report(StructuralErrorKind::NulInName, &ident.span);
        }
    }
}

impl Visitor for Validator {
    fn visit_program(&mut self, program: &Program) {
        self.check_span(&program.span);
        visit::walk_program(self, program);
    }

    fn visit_declaration(&mut self, decl: &Declaration) {
        self.check_span(decl.span());
        visit::walk_declaration(self, decl);
    }

    fn visit_variable_decl(&mut self, var: &VariableDecl) {
        if var.kind == VariableKind::Const && var.initializer.is_none() {
            self.report(StructuralErrorKind::ConstWithoutInitializer, &var.span);
        }
        visit::walk_variable_decl(self, var);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        self.check_span(stmt.span());
        visit::walk_statement(self, stmt);
    }

    fn visit_block(&mut self, block: &BlockStatement) {
        self.check_span(&block.span);
        visit::walk_block(self, block);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.check_span(expr.span());
        visit::walk_expression(self, expr);
    }

    fn visit_type_ref(&mut self, ty: &TypeRef) {
        self.check_span(ty.span());
        visit::walk_type_ref(self, ty);
    }

    fn visit_identifier(&mut self, ident: &Identifier) {
        self.check_name(ident);
        self.check_span(&ident.span);
    }
}
