//! Syntactic-sugar lowering pass.
//!
//! Runs from [`OptLevel::Basic`] upward, so the cheap rewrites are
//! available even when numeric folding is disabled:
//!
//! - the algebraic identities of [`identity`](super::identity), with no
//!   constant arithmetic
//! - `a += b` and friends expand to `a = a + b`
//!   (`remove_compound_assignment`)
//! - double negation drops: `!!x` -> `x`, `--x` -> `x`
//!   (`simplify_control_flow`)

use crate::ast::*;
use crate::diag::DiagnosticBag;
use crate::error::PassError;
use crate::transform::{identity, OptLevel, Pass, PassStats};
use crate::visit::{self, Rewrite, Transformer};

/// Which lowerings the pass performs.
#[derive(Debug, Clone)]
pub struct SyntaxSugarConfig {
    /// Expand compound assignments into plain assignments
    pub remove_compound_assignment: bool,
    /// Drop double negations
    pub simplify_control_flow: bool,
    /// Reserved for call-sugar expansion; lowering here would affect later
    /// semantic analysis, so it defaults to off
    pub expand_function_sugar: bool,
}

impl Default for SyntaxSugarConfig {
    fn default() -> Self {
        Self {
            remove_compound_assignment: true,
            simplify_control_flow: true,
            expand_function_sugar: false,
        }
    }
}

/// The sugar-removal pass.
pub struct SyntaxSugarRemovalPass {
    config: SyntaxSugarConfig,
    stats: PassStats,
}

impl SyntaxSugarRemovalPass {
    /// Creates the pass with the given configuration.
    pub fn new(config: SyntaxSugarConfig) -> Self {
        Self {
            config,
            stats: PassStats::new(),
        }
    }
}

impl Transformer for SyntaxSugarRemovalPass {
    fn transform_expression(&mut self, expr: &Expression) -> Rewrite<Expression> {
        self.stats.nodes_visited += 1;
        match expr {
            Expression::Binary(binary) => {
                if self.config.remove_compound_assignment {
                    if let Some(base) = binary.op.compound_base() {
                        let computed = Expression::binary(
                            (*binary.left).clone(),
                            base,
                            (*binary.right).clone(),
                            binary.span.clone(),
                        );
                        let assignment = Expression::binary(
                            (*binary.left).clone(),
                            BinaryOperator::Assign,
                            computed,
                            binary.span.clone(),
                        );
                        self.stats.nodes_transformed += 1;
                        self.stats.sugar_removed += 1;
                        return Rewrite::Replace(assignment);
                    }
                }
                if let Some(simplified) = identity::simplify_identity(binary) {
                    self.stats.nodes_transformed += 1;
                    self.stats.sugar_removed += 1;
                    return Rewrite::Replace(simplified);
                }
            }
            Expression::Unary(outer) if self.config.simplify_control_flow => {
                if let Expression::Unary(inner) = &*outer.operand {
                    let cancels = (outer.op == UnaryOperator::Not
                        && inner.op == UnaryOperator::Not)
                        || (outer.op == UnaryOperator::Neg && inner.op == UnaryOperator::Neg);
                    if cancels {
                        self.stats.nodes_transformed += 1;
                        self.stats.sugar_removed += 1;
                        return Rewrite::Replace((*inner.operand).clone());
                    }
                }
            }
            _ => {}
        }
        Rewrite::Keep
    }
}

impl Pass for SyntaxSugarRemovalPass {
    fn name(&self) -> &'static str {
        "syntax-sugar-removal"
    }

    fn min_level(&self) -> OptLevel {
        OptLevel::Basic
    }

    fn apply(
        &mut self,
        program: &mut Program,
        _diagnostics: &mut DiagnosticBag,
    ) -> Result<PassStats, PassError> {
        self.stats = PassStats::new();
        visit::drive_program(self, program);
        Ok(self.stats.clone())
    }
}
