//! Dead-code elimination pass.
//!
//! Two reachability eliminations plus an opt-in unused-binding removal:
//!
//! - **Unreachable tails**: everything after the first terminating
//!   statement of a block is dropped. A statement terminates when it is a
//!   return, an `if` whose branches both terminate, or a block containing
//!   a terminating statement.
//! - **Constant conditions**: `if true`/`if false` collapse to the taken
//!   branch, `while false` collapses to an empty block. `while true` is
//!   left intact.
//! - **Unused bindings** (`remove_unused`, off by default): a local
//!   variable never referenced in its function is dropped when its
//!   initializer is a bare literal or identifier; `aggressive` widens that
//!   to any call-free initializer.
//!
//! Statements preceding the first terminator are never touched.

use std::collections::HashSet;

use crate::ast::*;
use crate::diag::DiagnosticBag;
use crate::error::PassError;
use crate::transform::{OptLevel, Pass, PassStats};
use crate::visit::{self, Rewrite, Transformer};

/// Which eliminations the pass performs.
#[derive(Debug, Clone)]
pub struct DeadCodeConfig {
    /// Drop unreachable statement tails and prune constant conditions
    pub remove_unreachable: bool,
    /// Drop never-referenced local bindings with pure initializers
    pub remove_unused: bool,
    /// Let `remove_unused` accept any call-free initializer
    pub aggressive: bool,
}

impl Default for DeadCodeConfig {
    fn default() -> Self {
        Self {
            remove_unreachable: true,
            remove_unused: false,
            aggressive: false,
        }
    }
}

/// The dead-code elimination pass.
pub struct DeadCodeEliminationPass {
    config: DeadCodeConfig,
    stats: PassStats,
}

impl DeadCodeEliminationPass {
    /// Creates the pass with the given configuration.
    pub fn new(config: DeadCodeConfig) -> Self {
        Self {
            config,
            stats: PassStats::new(),
        }
    }
}

/// Returns true if control cannot flow past the statement.
fn terminates(stmt: &Statement) -> bool {
    match stmt {
        Statement::Return(_) => true,
        Statement::If(if_stmt) => match &if_stmt.else_branch {
            Some(else_branch) => block_terminates(&if_stmt.then_branch) && terminates(else_branch),
            None => false,
        },
        Statement::Block(block) => block_terminates(block),
        _ => false,
    }
}

fn block_terminates(block: &BlockStatement) -> bool {
    block.statements.iter().any(terminates)
}

impl Transformer for DeadCodeEliminationPass {
    fn transform_statement(&mut self, stmt: &Statement) -> Rewrite<Statement> {
        self.stats.nodes_visited += 1;
        if !self.config.remove_unreachable {
            return Rewrite::Keep;
        }
        match stmt {
            Statement::If(if_stmt) => match if_stmt.condition.as_literal() {
                Some(Literal {
                    value: LiteralValue::Boolean(true),
                    ..
                }) => {
                    self.stats.nodes_transformed += 1;
                    self.stats.dead_code_removed += 1;
                    Rewrite::Replace(Statement::Block(if_stmt.then_branch.clone()))
                }
                Some(Literal {
                    value: LiteralValue::Boolean(false),
                    ..
                }) => {
                    self.stats.nodes_transformed += 1;
                    self.stats.dead_code_removed += 1;
                    match &if_stmt.else_branch {
                        Some(else_branch) => Rewrite::Replace((**else_branch).clone()),
                        None => Rewrite::Replace(Statement::Block(BlockStatement::new(
                            if_stmt.span.clone(),
                        ))),
                    }
                }
                _ => Rewrite::Keep,
            },
            Statement::While(while_stmt) => match while_stmt.condition.as_literal() {
                Some(Literal {
                    value: LiteralValue::Boolean(false),
                    ..
                }) => {
                    self.stats.nodes_transformed += 1;
                    self.stats.dead_code_removed += 1;
                    Rewrite::Replace(Statement::Block(BlockStatement::new(
                        while_stmt.span.clone(),
                    )))
                }
                _ => Rewrite::Keep,
            },
            _ => Rewrite::Keep,
        }
    }

    fn transform_block(&mut self, block: &mut BlockStatement) {
        if !self.config.remove_unreachable {
            return;
        }
        if let Some(first) = block.statements.iter().position(terminates) {
            let dead = block.statements.len() - (first + 1);
            if dead > 0 {
                block.statements.truncate(first + 1);
                self.stats.nodes_transformed += dead as u64;
                self.stats.dead_code_removed += dead as u64;
            }
        }
    }
}

impl Pass for DeadCodeEliminationPass {
    fn name(&self) -> &'static str {
        "dead-code-elimination"
    }

    fn min_level(&self) -> OptLevel {
        OptLevel::Default
    }

    fn apply(
        &mut self,
        program: &mut Program,
        _diagnostics: &mut DiagnosticBag,
    ) -> Result<PassStats, PassError> {
        self.stats = PassStats::new();
        visit::drive_program(self, program);
        if self.config.remove_unused {
            for decl in &mut program.declarations {
                match decl {
                    Declaration::Function(func) => self.remove_unused_bindings(func),
                    Declaration::Impl(impl_decl) => {
                        for method in &mut impl_decl.methods {
                            self.remove_unused_bindings(method);
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(self.stats.clone())
    }
}

impl DeadCodeEliminationPass {
    fn remove_unused_bindings(&mut self, func: &mut FunctionDecl) {
        let mut used = UsedNames::default();
        crate::visit::walk_function_decl(&mut used, func);
        let aggressive = self.config.aggressive;
        let removed = prune_unused(&mut func.body, &used.names, aggressive);
        self.stats.nodes_transformed += removed;
        self.stats.dead_code_removed += removed;
    }
}

// Names referenced in expression position anywhere in a function. Member
// properties do not count; shadowing is ignored on purpose, keeping the
// analysis conservative.
#[derive(Default)]
struct UsedNames {
    names: HashSet<String>,
}

impl visit::Visitor for UsedNames {
    fn visit_expression(&mut self, expr: &Expression) {
        if let Expression::Identifier(ident) = expr {
            self.names.insert(ident.name.clone());
        }
        visit::walk_expression(self, expr);
    }
}

fn prune_unused(block: &mut BlockStatement, used: &HashSet<String>, aggressive: bool) -> u64 {
    let mut removed = 0;
    block.statements.retain(|stmt| match stmt {
        Statement::Variable(var) if !used.contains(&var.name.name) => {
            let droppable = match &var.initializer {
                None => var.kind != VariableKind::Const,
                Some(init) => initializer_is_pure(init, aggressive),
            };
            if droppable {
                removed += 1;
                false
            } else {
                true
            }
        }
        _ => true,
    });
    for stmt in &mut block.statements {
        match stmt {
            Statement::Block(inner) => removed += prune_unused(inner, used, aggressive),
            Statement::If(if_stmt) => {
                removed += prune_unused(&mut if_stmt.then_branch, used, aggressive);
                if let Some(else_branch) = &mut if_stmt.else_branch {
                    if let Statement::Block(inner) = else_branch.as_mut() {
                        removed += prune_unused(inner, used, aggressive);
                    }
                }
            }
            Statement::While(while_stmt) => {
                removed += prune_unused(&mut while_stmt.body, used, aggressive);
            }
            _ => {}
        }
    }
    removed
}

fn initializer_is_pure(expr: &Expression, aggressive: bool) -> bool {
    match expr {
        Expression::Literal(_) | Expression::Identifier(_) => true,
        Expression::Binary(binary) if aggressive => {
            binary.op.compound_base().is_none()
                && binary.op != BinaryOperator::Assign
                && initializer_is_pure(&binary.left, aggressive)
                && initializer_is_pure(&binary.right, aggressive)
        }
        Expression::Unary(unary) if aggressive => initializer_is_pure(&unary.operand, aggressive),
        Expression::Member(member) if aggressive => initializer_is_pure(&member.object, aggressive),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn return_stmt(value: i64) -> Statement {
        Statement::Return(ReturnStatement {
            value: Some(Expression::integer(value, Span::dummy())),
            span: Span::dummy(),
        })
    }

    fn let_stmt(name: &str, value: i64) -> Statement {
        Statement::Variable(VariableDecl {
            name: Identifier::new(name, Span::dummy()),
            declared_type: None,
            initializer: Some(Expression::integer(value, Span::dummy())),
            kind: VariableKind::Let,
            mutable: false,
            exported: false,
            span: Span::dummy(),
        })
    }

    fn call_stmt(name: &str) -> Statement {
        Statement::Expression(ExpressionStatement {
            expression: Expression::call(
                Expression::identifier(name, Span::dummy()),
                vec![],
                Span::dummy(),
            ),
            span: Span::dummy(),
        })
    }

    fn apply_dce(block: &mut BlockStatement) -> PassStats {
        let mut pass = DeadCodeEliminationPass::new(DeadCodeConfig::default());
        visit::drive_block(&mut pass, block);
        pass.stats.clone()
    }

    #[test]
    fn test_truncates_after_return() {
        let mut block = BlockStatement {
            statements: vec![return_stmt(1), let_stmt("x", 2), return_stmt(3)],
            span: Span::dummy(),
        };
        let stats = apply_dce(&mut block);
        assert_eq!(block.statements.len(), 1);
        assert_eq!(stats.dead_code_removed, 2);
    }

    #[test]
    fn test_keeps_statements_before_terminator() {
        let mut block = BlockStatement {
            statements: vec![let_stmt("x", 2), call_stmt("log"), return_stmt(1)],
            span: Span::dummy(),
        };
        let stats = apply_dce(&mut block);
        assert_eq!(block.statements.len(), 3);
        assert_eq!(stats.dead_code_removed, 0);
    }

    #[test]
    fn test_if_true_takes_then_branch() {
        let then_branch = BlockStatement {
            statements: vec![call_stmt("a")],
            span: Span::dummy(),
        };
        let else_branch = BlockStatement {
            statements: vec![call_stmt("b")],
            span: Span::dummy(),
        };
        let mut block = BlockStatement {
            statements: vec![Statement::If(IfStatement {
                condition: Expression::boolean(true, Span::dummy()),
                then_branch: then_branch.clone(),
                else_branch: Some(Box::new(Statement::Block(else_branch))),
                span: Span::dummy(),
            })],
            span: Span::dummy(),
        };

        let stats = apply_dce(&mut block);
        assert_eq!(block.statements, vec![Statement::Block(then_branch)]);
        assert_eq!(stats.dead_code_removed, 1);
    }

    #[test]
    fn test_if_false_without_else_becomes_empty_block() {
        let mut block = BlockStatement {
            statements: vec![Statement::If(IfStatement {
                condition: Expression::boolean(false, Span::dummy()),
                then_branch: BlockStatement {
                    statements: vec![call_stmt("a")],
                    span: Span::dummy(),
                },
                else_branch: None,
                span: Span::dummy(),
            })],
            span: Span::dummy(),
        };

        apply_dce(&mut block);
        match &block.statements[0] {
            Statement::Block(inner) => assert!(inner.statements.is_empty()),
            other => panic!("expected empty block, got {:?}", other),
        }
    }

    #[test]
    fn test_while_false_becomes_empty_block() {
        let mut block = BlockStatement {
            statements: vec![Statement::While(WhileStatement {
                condition: Expression::boolean(false, Span::dummy()),
                body: BlockStatement {
                    statements: vec![call_stmt("tick")],
                    span: Span::dummy(),
                },
                span: Span::dummy(),
            })],
            span: Span::dummy(),
        };

        apply_dce(&mut block);
        match &block.statements[0] {
            Statement::Block(inner) => assert!(inner.statements.is_empty()),
            other => panic!("expected empty block, got {:?}", other),
        }
    }

    #[test]
    fn test_while_true_left_intact() {
        let original = Statement::While(WhileStatement {
            condition: Expression::boolean(true, Span::dummy()),
            body: BlockStatement {
                statements: vec![call_stmt("tick")],
                span: Span::dummy(),
            },
            span: Span::dummy(),
        });
        let mut block = BlockStatement {
            statements: vec![original.clone()],
            span: Span::dummy(),
        };

        apply_dce(&mut block);
        assert_eq!(block.statements, vec![original]);
    }

    #[test]
    fn test_terminating_if_ends_block() {
        // if c { return 1 } else { return 2 }; log() -- the call is dead.
        let branch = |value| BlockStatement {
            statements: vec![return_stmt(value)],
            span: Span::dummy(),
        };
        let mut block = BlockStatement {
            statements: vec![
                Statement::If(IfStatement {
                    condition: Expression::identifier("c", Span::dummy()),
                    then_branch: branch(1),
                    else_branch: Some(Box::new(Statement::Block(branch(2)))),
                    span: Span::dummy(),
                }),
                call_stmt("log"),
            ],
            span: Span::dummy(),
        };

        let stats = apply_dce(&mut block);
        assert_eq!(block.statements.len(), 1);
        assert_eq!(stats.dead_code_removed, 1);
    }

    #[test]
    fn test_unused_binding_removed_when_enabled() {
        let mut func = FunctionDecl {
            name: Identifier::new("f", Span::dummy()),
            generics: vec![],
            params: vec![],
            return_type: None,
            body: BlockStatement {
                statements: vec![let_stmt("unused", 2), return_stmt(1)],
                span: Span::dummy(),
            },
            attributes: vec![],
            exported: false,
            span: Span::dummy(),
        };

        let mut pass = DeadCodeEliminationPass::new(DeadCodeConfig {
            remove_unused: true,
            ..DeadCodeConfig::default()
        });
        pass.remove_unused_bindings(&mut func);
        assert_eq!(func.body.statements.len(), 1);
    }
}
