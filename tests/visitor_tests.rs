//! Traversal framework tests over whole programs.
//! Covers span containment, node counting, identifier collection, and the
//! pretty printer.

use vela_ast::ast::*;
use vela_ast::builder::{FunctionBuilder, ProgramBuilder, VariableBuilder};
use vela_ast::print::{print_program, IdentifierCollector, NodeCounter};
use vela_ast::transform::{OptimizationPipeline, PipelineConfig};
use vela_ast::visit::{self, Visitor};
use vela_ast::{Position, Span};

fn span_at(offset: u32, len: u32) -> Span {
    Span::new(
        Position::new("main.vela", 1, offset + 1, offset),
        Position::new("main.vela", 1, offset + len + 1, offset + len),
    )
}

// ============================================================================
// SPAN CONTAINMENT
// ============================================================================

// Checks that every node's span contains the spans of its children.
struct ContainmentCheck {
    stack: Vec<Span>,
    violations: usize,
}

impl ContainmentCheck {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            violations: 0,
        }
    }

    fn enter(&mut self, span: &Span) {
        if let Some(parent) = self.stack.last() {
            if !parent.contains(span) {
                self.violations += 1;
            }
        }
        self.stack.push(span.clone());
    }

    fn leave(&mut self) {
        self.stack.pop();
    }
}

impl Visitor for ContainmentCheck {
    fn visit_program(&mut self, program: &Program) {
        self.enter(&program.span);
        visit::walk_program(self, program);
        self.leave();
    }

    fn visit_declaration(&mut self, decl: &Declaration) {
        self.enter(decl.span());
        visit::walk_declaration(self, decl);
        self.leave();
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        self.enter(stmt.span());
        visit::walk_statement(self, stmt);
        self.leave();
    }

    fn visit_block(&mut self, block: &BlockStatement) {
        self.enter(&block.span);
        visit::walk_block(self, block);
        self.leave();
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.enter(expr.span());
        visit::walk_expression(self, expr);
        self.leave();
    }
}

fn assert_containment(program: &Program) {
    let mut check = ContainmentCheck::new();
    check.visit_program(program);
    assert_eq!(check.violations, 0);
}

// func f(): int { return 1 + 2 } with realistic nested spans.
fn spanned_program() -> Program {
    let program_span = span_at(0, 31);
    let func_span = span_at(0, 31);
    let body_span = span_at(14, 17);
    let return_span = span_at(16, 13);
    let sum_span = span_at(23, 5);

    let mut program = Program::new(program_span);
    program
        .declarations
        .push(Declaration::Function(FunctionDecl {
            name: Identifier::new("f", span_at(5, 1)),
            generics: vec![],
            params: vec![],
            return_type: Some(TypeRef::basic(BasicKind::Int, span_at(10, 3))),
            body: BlockStatement {
                statements: vec![Statement::Return(ReturnStatement {
                    value: Some(Expression::binary(
                        Expression::integer(1, span_at(23, 1)),
                        BinaryOperator::Add,
                        Expression::integer(2, span_at(27, 1)),
                        sum_span,
                    )),
                    span: return_span,
                })],
                span: body_span,
            },
            attributes: vec![],
            exported: false,
            span: func_span,
        }));
    program
}

#[test]
fn spans_nest_in_parser_shaped_input() {
    assert_containment(&spanned_program());
}

#[test]
fn spans_still_nest_after_optimization() {
    let mut program = spanned_program();
    OptimizationPipeline::with_default_passes(PipelineConfig::default())
        .optimize(&mut program)
        .unwrap();
    assert_containment(&program);

    // The folded literal sits exactly where the sum was.
    match &program.declarations[0] {
        Declaration::Function(func) => match &func.body.statements[0] {
            Statement::Return(ret) => {
                let value = ret.value.as_ref().unwrap();
                assert_eq!(value.span(), &span_at(23, 5));
                assert_eq!(value.as_literal().unwrap().raw, "3");
            }
            other => panic!("expected return, got {:?}", other),
        },
        other => panic!("expected function, got {:?}", other),
    }
}

// ============================================================================
// COUNTING AND COLLECTION
// ============================================================================

fn counting_program() -> Program {
    let span = Span::dummy();
    ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("scale", span.clone())
                .param("x", TypeRef::basic(BasicKind::Int, span.clone()))
                .returns(TypeRef::basic(BasicKind::Int, span.clone()))
                .returning(Expression::binary(
                    Expression::identifier("x", span.clone()),
                    BinaryOperator::Mul,
                    Expression::integer(10, span.clone()),
                    span.clone(),
                ))
                .build(),
        )
        .variable(
            VariableBuilder::new(VariableKind::Const, "base", span.clone())
                .init(Expression::integer(10, span))
                .build(),
        )
        .build()
}

#[test]
fn node_counter_sees_every_group() {
    let program = counting_program();
    let mut counter = NodeCounter::new();
    counter.visit_program(&program);

    assert_eq!(counter.declarations, 2);
    assert_eq!(counter.statements, 1);
    // x * 10, x, 10, and the const initializer 10
    assert_eq!(counter.expressions, 4);
    assert_eq!(counter.types, 2);
    assert_eq!(counter.total(), 9);
}

#[test]
fn identifier_collector_walks_in_source_order() {
    let program = counting_program();
    let mut collector = IdentifierCollector::new();
    collector.visit_program(&program);
    assert_eq!(collector.finish(), vec!["scale", "x", "x", "base"]);
}

#[test]
fn declaration_identifier_collection() {
    let program = counting_program();
    assert_eq!(
        program.declarations[0].collect_identifiers(),
        vec!["scale", "x", "x"]
    );
}

// ============================================================================
// PRETTY PRINTING
// ============================================================================

#[test]
fn pretty_prints_a_small_module() {
    let span = Span::dummy();
    let program = ProgramBuilder::new(span.clone())
        .variable(
            VariableBuilder::new(VariableKind::Const, "limit", span.clone())
                .typed(TypeRef::basic(BasicKind::Int, span.clone()))
                .init(Expression::integer(8, span.clone()))
                .build(),
        )
        .function(
            FunctionBuilder::new("clamp", span.clone())
                .param("value", TypeRef::basic(BasicKind::Int, span.clone()))
                .returns(TypeRef::basic(BasicKind::Int, span.clone()))
                .statement(Statement::If(IfStatement {
                    condition: Expression::binary(
                        Expression::identifier("value", span.clone()),
                        BinaryOperator::Gt,
                        Expression::identifier("limit", span.clone()),
                        span.clone(),
                    ),
                    then_branch: BlockStatement {
                        statements: vec![Statement::Return(ReturnStatement {
                            value: Some(Expression::identifier("limit", span.clone())),
                            span: span.clone(),
                        })],
                        span: span.clone(),
                    },
                    else_branch: None,
                    span: span.clone(),
                }))
                .returning(Expression::identifier("value", span.clone()))
                .build(),
        )
        .build();

    let rendered = print_program(&program);
    insta::assert_snapshot!(rendered.trim_end(), @r###"
    const limit: int = 8
    func clamp(value: int): int {
      if (value > limit) {
        return limit
      }
      return value
    }
    "###);
}

#[test]
fn pretty_prints_else_if_chains() {
    let span = Span::dummy();
    let block = |stmts: Vec<Statement>| BlockStatement {
        statements: stmts,
        span: span.clone(),
    };
    let ret = |value: i64| {
        Statement::Return(ReturnStatement {
            value: Some(Expression::integer(value, span.clone())),
            span: span.clone(),
        })
    };

    let chained = Statement::If(IfStatement {
        condition: Expression::identifier("a", span.clone()),
        then_branch: block(vec![ret(1)]),
        else_branch: Some(Box::new(Statement::If(IfStatement {
            condition: Expression::identifier("b", span.clone()),
            then_branch: block(vec![ret(2)]),
            else_branch: Some(Box::new(Statement::Block(block(vec![ret(3)])))),
            span: span.clone(),
        }))),
        span: span.clone(),
    });

    let program = ProgramBuilder::new(span.clone())
        .function(FunctionBuilder::new("pick", span).statement(chained).build())
        .build();

    let rendered = print_program(&program);
    insta::assert_snapshot!(rendered.trim_end(), @r###"
    func pick() {
      if a {
        return 1
      } else if b {
        return 2
      } else {
        return 3
      }
    }
    "###);
}
