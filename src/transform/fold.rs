//! Constant folding pass.
//!
//! Replaces expressions whose operands are literals by the computed
//! literal, operating bottom-up so operands fold before the expressions
//! that contain them:
//!
//! - integer `+ - * / %` with two's-complement wrapping at 64 bits
//! - float `+ - * /` under IEEE-754
//! - string concatenation and equality
//! - boolean `&& || == !=`
//! - comparisons over matching integer, float, or string operands
//! - unary `-` on numbers, `!` on booleans
//!
//! Division or modulo by zero never folds; the error is reported as a
//! diagnostic at the binary expression's span and the tree is left intact.
//! `i64::MIN / -1` likewise never folds. The algebraic identities of
//! [`identity`](super::identity) run here as well, so `x * 1 + 0` collapses
//! even when no operand pair is constant.

use crate::ast::*;
use crate::diag::{Category, Diagnostic, DiagnosticBag};
use crate::error::{FoldError, PassError};
use crate::span::Span;
use crate::transform::{identity, OptLevel, Pass, PassStats};
use crate::visit::{self, Rewrite, Transformer};

/// Which fold families the pass performs. Everything defaults to on.
#[derive(Debug, Clone)]
pub struct ConstantFoldingConfig {
    /// Fold `+ - * / %` and unary negation
    pub fold_arithmetic: bool,
    /// Fold `== != < <= > >=`
    pub fold_comparison: bool,
    /// Fold boolean `&& || == !=` and `!`
    pub fold_logical: bool,
    /// Fold string concatenation
    pub fold_string: bool,
}

impl Default for ConstantFoldingConfig {
    fn default() -> Self {
        Self {
            fold_arithmetic: true,
            fold_comparison: true,
            fold_logical: true,
            fold_string: true,
        }
    }
}

/// The constant folding pass.
pub struct ConstantFoldingPass {
    config: ConstantFoldingConfig,
    stats: PassStats,
    pending: Vec<Diagnostic>,
}

impl ConstantFoldingPass {
    /// Creates the pass with the given configuration.
    pub fn new(config: ConstantFoldingConfig) -> Self {
        Self {
            config,
            stats: PassStats::new(),
            pending: Vec::new(),
        }
    }

    fn report(&mut self, error: FoldError, span: &Span) {
        self.pending.push(Diagnostic::error(
            Category::Fold,
            error.code(),
            error.to_string(),
            span.clone(),
        ));
    }

    fn fold_binary(
        &self,
        left: &Literal,
        op: BinaryOperator,
        right: &Literal,
    ) -> Result<Option<LiteralValue>, FoldError> {
        use BinaryOperator::*;
        use LiteralValue::*;

        let value = match (&left.value, &right.value) {
            (Integer(a), Integer(b)) => match op {
                Add | Sub | Mul | Div | Mod if !self.config.fold_arithmetic => return Ok(None),
                Add => Integer(a.wrapping_add(*b)),
                Sub => Integer(a.wrapping_sub(*b)),
                Mul => Integer(a.wrapping_mul(*b)),
                Div if *b == 0 => return Err(FoldError::DivisionByZero),
                Mod if *b == 0 => return Err(FoldError::ModuloByZero),
                // i64::MIN / -1 stays unfolded; everything else wraps.
                Div | Mod if *a == i64::MIN && *b == -1 => return Ok(None),
                Div => Integer(a.wrapping_div(*b)),
                Mod => Integer(a.wrapping_rem(*b)),
                Eq | Ne | Lt | Le | Gt | Ge if !self.config.fold_comparison => return Ok(None),
                Eq => Boolean(a == b),
                Ne => Boolean(a != b),
                Lt => Boolean(a < b),
                Le => Boolean(a <= b),
                Gt => Boolean(a > b),
                Ge => Boolean(a >= b),
                _ => return Ok(None),
            },
            (Float(a), Float(b)) => match op {
                Add | Sub | Mul | Div if !self.config.fold_arithmetic => return Ok(None),
                Add => Float(a + b),
                Sub => Float(a - b),
                Mul => Float(a * b),
                // A zero divisor never folds, 0.0 / 0.0 included.
                Div if *b == 0.0 => return Ok(None),
                Div => Float(a / b),
                Eq | Ne | Lt | Le | Gt | Ge if !self.config.fold_comparison => return Ok(None),
                Eq => Boolean(a == b),
                Ne => Boolean(a != b),
                Lt => Boolean(a < b),
                Le => Boolean(a <= b),
                Gt => Boolean(a > b),
                Ge => Boolean(a >= b),
                _ => return Ok(None),
            },
            (String(a), String(b)) => match op {
                Add if self.config.fold_string => String(format!("{}{}", a, b)),
                Eq if self.config.fold_comparison => Boolean(a == b),
                Ne if self.config.fold_comparison => Boolean(a != b),
                _ => return Ok(None),
            },
            (Boolean(a), Boolean(b)) => match op {
                And | Or | Eq | Ne if !self.config.fold_logical => return Ok(None),
                And => Boolean(*a && *b),
                Or => Boolean(*a || *b),
                Eq => Boolean(a == b),
                Ne => Boolean(a != b),
                _ => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(value))
    }

    fn fold_unary(&self, op: UnaryOperator, operand: &Literal) -> Option<LiteralValue> {
        match (op, &operand.value) {
            (UnaryOperator::Neg, LiteralValue::Integer(n)) if self.config.fold_arithmetic => {
                Some(LiteralValue::Integer(n.wrapping_neg()))
            }
            (UnaryOperator::Neg, LiteralValue::Float(f)) if self.config.fold_arithmetic => {
                Some(LiteralValue::Float(-f))
            }
            (UnaryOperator::Not, LiteralValue::Boolean(b)) if self.config.fold_logical => {
                Some(LiteralValue::Boolean(!b))
            }
            _ => None,
        }
    }

    // Mixed-kind literal operands under a fold-family operator cannot fold;
    // report them once so the caller learns why the expression survived.
    fn is_fold_family(op: BinaryOperator) -> bool {
        use BinaryOperator::*;
        matches!(
            op,
            Add | Sub | Mul | Div | Mod | Eq | Ne | Lt | Le | Gt | Ge | And | Or
        )
    }
}

impl Transformer for ConstantFoldingPass {
    fn transform_expression(&mut self, expr: &Expression) -> Rewrite<Expression> {
        self.stats.nodes_visited += 1;
        match expr {
            Expression::Binary(binary) => {
                if let (Some(left), Some(right)) =
                    (binary.left.as_literal(), binary.right.as_literal())
                {
                    if left.kind() == right.kind() {
                        match self.fold_binary(left, binary.op, right) {
                            Ok(Some(value)) => {
                                self.stats.nodes_transformed += 1;
                                self.stats.constants_folded += 1;
                                return Rewrite::Replace(Expression::Literal(relabel(
                                    value,
                                    &binary.span,
                                )));
                            }
                            Ok(None) => {}
                            Err(error) => {
                                self.report(error, &binary.span);
                                return Rewrite::Keep;
                            }
                        }
                    }
                }
                if let Some(simplified) = identity::simplify_identity(binary) {
                    self.stats.nodes_transformed += 1;
                    return Rewrite::Replace(simplified);
                }
                if let (Some(left), Some(right)) =
                    (binary.left.as_literal(), binary.right.as_literal())
                {
                    if left.kind() != right.kind() && Self::is_fold_family(binary.op) {
                        self.pending.push(Diagnostic::warning(
                            Category::Fold,
                            FoldError::UnsupportedFoldOperands.code(),
                            FoldError::UnsupportedFoldOperands.to_string(),
                            binary.span.clone(),
                        ));
                    }
                }
            }
            Expression::Unary(unary) => {
                if let Some(operand) = unary.operand.as_literal() {
                    if let Some(value) = self.fold_unary(unary.op, operand) {
                        self.stats.nodes_transformed += 1;
                        self.stats.constants_folded += 1;
                        return Rewrite::Replace(Expression::Literal(relabel(value, &unary.span)));
                    }
                }
            }
            _ => {}
        }
        Rewrite::Keep
    }
}

// A folded literal takes the span of the whole original expression and a
// raw form regenerated from the value.
fn relabel(value: LiteralValue, span: &Span) -> Literal {
    match value {
        LiteralValue::Integer(n) => Literal::integer(n, span.clone()),
        LiteralValue::Float(f) => Literal::float(f, span.clone()),
        LiteralValue::String(s) => Literal::string(s, span.clone()),
        LiteralValue::Boolean(b) => Literal::boolean(b, span.clone()),
        LiteralValue::Character(c) => Literal::character(c, span.clone()),
        LiteralValue::Null => Literal::null(span.clone()),
    }
}

impl Pass for ConstantFoldingPass {
    fn name(&self) -> &'static str {
        "constant-folding"
    }

    fn min_level(&self) -> OptLevel {
        OptLevel::Default
    }

    fn apply(
        &mut self,
        program: &mut Program,
        diagnostics: &mut DiagnosticBag,
    ) -> Result<PassStats, PassError> {
        self.stats = PassStats::new();
        visit::drive_program(self, program);
        for diagnostic in self.pending.drain(..) {
            diagnostics.push_unique(diagnostic);
        }
        Ok(self.stats.clone())
    }
}
