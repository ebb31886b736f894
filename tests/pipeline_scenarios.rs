//! End-to-end optimization pipeline scenarios.
//! Exercises the documented pipeline behaviors on whole programs.

use pretty_assertions::assert_eq;

use vela_ast::ast::*;
use vela_ast::builder::{FunctionBuilder, ProgramBuilder, VariableBuilder};
use vela_ast::transform::{OptLevel, OptimizationPipeline, PipelineConfig};
use vela_ast::{Position, Span};

fn span_at(offset: u32, len: u32) -> Span {
    Span::new(
        Position::new("test.vela", 1, offset + 1, offset),
        Position::new("test.vela", 1, offset + len + 1, offset + len),
    )
}

fn default_pipeline() -> OptimizationPipeline {
    OptimizationPipeline::with_default_passes(PipelineConfig::default())
}

fn basic_pipeline() -> OptimizationPipeline {
    OptimizationPipeline::with_default_passes(PipelineConfig {
        level: OptLevel::Basic,
        ..PipelineConfig::default()
    })
}

fn first_function(program: &Program) -> &FunctionDecl {
    match &program.declarations[0] {
        Declaration::Function(func) => func,
        other => panic!("expected function, got {:?}", other),
    }
}

// ============================================================================
// CONSTANT FOLDING
// ============================================================================

#[test]
fn folds_arithmetic_inside_function_body() {
    // func f(): int { return (1 + 2) * 3 }
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returns(TypeRef::basic(BasicKind::Int, span.clone()))
                .returning(Expression::binary(
                    Expression::binary(
                        Expression::integer(1, span.clone()),
                        BinaryOperator::Add,
                        Expression::integer(2, span.clone()),
                        span.clone(),
                    ),
                    BinaryOperator::Mul,
                    Expression::integer(3, span.clone()),
                    span.clone(),
                ))
                .build(),
        )
        .build();

    let stats = default_pipeline().optimize(&mut program).unwrap();

    let func = first_function(&program);
    match &func.body.statements[0] {
        Statement::Return(ret) => {
            assert_eq!(
                ret.value.as_ref().unwrap(),
                &Expression::integer(9, Span::dummy())
            );
        }
        other => panic!("expected return, got {:?}", other),
    }
    assert_eq!(stats.totals.constants_folded, 2);
    assert!(stats.totals.nodes_transformed >= 2);
}

#[test]
fn division_by_zero_leaves_tree_and_reports() {
    // func f(): int { return 1 / 0 }
    let div_span = span_at(20, 5);
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returns(TypeRef::basic(BasicKind::Int, span.clone()))
                .returning(Expression::binary(
                    Expression::integer(1, span.clone()),
                    BinaryOperator::Div,
                    Expression::integer(0, span.clone()),
                    div_span.clone(),
                ))
                .build(),
        )
        .build();
    let original = program.clone();

    let mut pipeline = default_pipeline();
    let stats = pipeline.optimize(&mut program).unwrap();

    assert_eq!(program, original);
    assert_eq!(stats.totals.constants_folded, 0);

    let reported: Vec<_> = pipeline
        .diagnostics()
        .iter()
        .filter(|d| d.code == "division-by-zero")
        .collect();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].span, div_span);
}

#[test]
fn min_over_minus_one_never_folds() {
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returning(Expression::binary(
                    Expression::integer(i64::MIN, span.clone()),
                    BinaryOperator::Div,
                    Expression::integer(-1, span.clone()),
                    span.clone(),
                ))
                .build(),
        )
        .build();
    let original = program.clone();

    let mut pipeline = default_pipeline();
    pipeline.optimize(&mut program).unwrap();
    assert_eq!(program, original);
    assert!(pipeline.diagnostics().is_empty());
}

#[test]
fn float_zero_divisor_never_folds() {
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returning(Expression::binary(
                    Expression::float(0.0, span.clone()),
                    BinaryOperator::Div,
                    Expression::float(0.0, span.clone()),
                    span.clone(),
                ))
                .build(),
        )
        .build();
    let original = program.clone();

    default_pipeline().optimize(&mut program).unwrap();
    assert_eq!(program, original);
}

// ============================================================================
// DEAD-CODE ELIMINATION
// ============================================================================

#[test]
fn removes_statements_after_return() {
    // func g(): int { return 1; let x = 2; return 3 }
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("g", span.clone())
                .returns(TypeRef::basic(BasicKind::Int, span.clone()))
                .returning(Expression::integer(1, span.clone()))
                .statement(Statement::Variable(
                    VariableBuilder::new(VariableKind::Let, "x", span.clone())
                        .init(Expression::integer(2, span.clone()))
                        .build(),
                ))
                .returning(Expression::integer(3, span.clone()))
                .build(),
        )
        .build();
    let body_span = first_function(&program).body.span.clone();

    let stats = default_pipeline().optimize(&mut program).unwrap();

    let func = first_function(&program);
    assert_eq!(func.body.statements.len(), 1);
    assert!(matches!(func.body.statements[0], Statement::Return(_)));
    // The block keeps its span.
    assert_eq!(func.body.span, body_span);
    assert_eq!(stats.totals.dead_code_removed, 2);
}

#[test]
fn constant_condition_takes_then_branch() {
    // if true { a() } else { b() }
    let span = Span::dummy();
    let call = |name: &str| {
        Statement::Expression(ExpressionStatement {
            expression: Expression::call(
                Expression::identifier(name, span.clone()),
                vec![],
                span.clone(),
            ),
            span: span.clone(),
        })
    };
    let then_branch = BlockStatement {
        statements: vec![call("a")],
        span: span.clone(),
    };
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .statement(Statement::If(IfStatement {
                    condition: Expression::boolean(true, span.clone()),
                    then_branch: then_branch.clone(),
                    else_branch: Some(Box::new(Statement::Block(BlockStatement {
                        statements: vec![call("b")],
                        span: span.clone(),
                    }))),
                    span: span.clone(),
                }))
                .build(),
        )
        .build();

    let stats = default_pipeline().optimize(&mut program).unwrap();

    let func = first_function(&program);
    assert_eq!(func.body.statements, vec![Statement::Block(then_branch)]);
    assert_eq!(stats.totals.dead_code_removed, 1);
}

#[test]
fn block_already_empty_after_return_is_stable() {
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returning(Expression::integer(1, span.clone()))
                .build(),
        )
        .build();
    let original = program.clone();

    let stats = default_pipeline().optimize(&mut program).unwrap();
    assert_eq!(program, original);
    assert_eq!(stats.totals.dead_code_removed, 0);
}

// ============================================================================
// SUGAR REMOVAL AT BASIC LEVEL
// ============================================================================

#[test]
fn basic_level_applies_identities_without_folding() {
    // x * 1 + 0 collapses to x; no constants are folded.
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returning(Expression::binary(
                    Expression::binary(
                        Expression::identifier("x", span.clone()),
                        BinaryOperator::Mul,
                        Expression::integer(1, span.clone()),
                        span.clone(),
                    ),
                    BinaryOperator::Add,
                    Expression::integer(0, span.clone()),
                    span.clone(),
                ))
                .build(),
        )
        .build();

    let stats = basic_pipeline().optimize(&mut program).unwrap();

    let func = first_function(&program);
    match &func.body.statements[0] {
        Statement::Return(ret) => {
            assert_eq!(
                ret.value.as_ref().unwrap(),
                &Expression::identifier("x", Span::dummy())
            );
        }
        other => panic!("expected return, got {:?}", other),
    }
    assert_eq!(stats.totals.nodes_transformed, 2);
    assert_eq!(stats.totals.constants_folded, 0);
}

#[test]
fn basic_level_does_not_fold_arithmetic() {
    let span = Span::dummy();
    let mut program = ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returning(Expression::binary(
                    Expression::integer(1, span.clone()),
                    BinaryOperator::Add,
                    Expression::integer(2, span.clone()),
                    span.clone(),
                ))
                .build(),
        )
        .build();
    let original = program.clone();

    basic_pipeline().optimize(&mut program).unwrap();
    assert_eq!(program, original);
}

// ============================================================================
// PIPELINE PROPERTIES
// ============================================================================

#[test]
fn empty_program_optimizes_to_itself() {
    let mut program = ProgramBuilder::new(Span::dummy()).build();
    let stats = default_pipeline().optimize(&mut program).unwrap();
    assert!(program.is_empty());
    assert_eq!(stats.totals.nodes_transformed, 0);
    assert_eq!(stats.iterations, 1);
}

fn folding_workload() -> Program {
    let span = Span::dummy();
    ProgramBuilder::new(span.clone())
        .function(
            FunctionBuilder::new("f", span.clone())
                .returning(Expression::binary(
                    Expression::binary(
                        Expression::integer(2, span.clone()),
                        BinaryOperator::Mul,
                        Expression::integer(4, span.clone()),
                        span.clone(),
                    ),
                    BinaryOperator::Sub,
                    Expression::integer(1, span.clone()),
                    span.clone(),
                ))
                .returning(Expression::integer(3, span.clone()))
                .build(),
        )
        .build()
}

#[test]
fn pipeline_is_deterministic() {
    let mut first = folding_workload();
    let mut second = folding_workload();

    let stats_first = default_pipeline().optimize(&mut first).unwrap();
    let stats_second = default_pipeline().optimize(&mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(stats_first, stats_second);
}

#[test]
fn converged_pipeline_is_idempotent() {
    let mut program = folding_workload();
    default_pipeline().optimize(&mut program).unwrap();
    let converged = program.clone();

    let stats = default_pipeline().optimize(&mut program).unwrap();
    assert_eq!(program, converged);
    assert_eq!(stats.totals.nodes_transformed, 0);
}

#[test]
fn iteration_cap_bounds_the_run() {
    let mut program = folding_workload();
    let mut pipeline = OptimizationPipeline::with_default_passes(PipelineConfig {
        max_iterations: 1,
        ..PipelineConfig::default()
    });
    let stats = pipeline.optimize(&mut program).unwrap();
    assert_eq!(stats.iterations, 1);
}

#[test]
fn none_level_runs_no_passes() {
    let mut program = folding_workload();
    let original = program.clone();
    let mut pipeline = OptimizationPipeline::with_default_passes(PipelineConfig {
        level: OptLevel::None,
        ..PipelineConfig::default()
    });
    let stats = pipeline.optimize(&mut program).unwrap();
    assert_eq!(program, original);
    assert_eq!(stats.totals.nodes_transformed, 0);
}

#[test]
fn aggressive_level_converges() {
    let mut program = folding_workload();
    let mut pipeline = OptimizationPipeline::with_default_passes(PipelineConfig {
        level: OptLevel::Aggressive,
        ..PipelineConfig::default()
    });
    let stats = pipeline.optimize(&mut program).unwrap();

    let func = first_function(&program);
    assert_eq!(func.body.statements.len(), 1);
    assert!(stats.totals.constants_folded >= 2);
}

#[test]
fn stats_disabled_skips_per_pass_breakdown() {
    let mut program = folding_workload();
    let mut pipeline = OptimizationPipeline::with_default_passes(PipelineConfig {
        stats_enabled: false,
        ..PipelineConfig::default()
    });
    let stats = pipeline.optimize(&mut program).unwrap();
    assert!(stats.per_pass.is_empty());
    // Totals still drive convergence and stay observable.
    assert!(stats.totals.nodes_transformed > 0);
}

// ============================================================================
// VALIDATION AT PIPELINE ENTRY
// ============================================================================

fn invalid_program() -> Program {
    let span = Span::dummy();
    ProgramBuilder::new(span.clone())
        .function(FunctionBuilder::new("", span).build())
        .build()
}

#[test]
fn validator_findings_do_not_abort_by_default() {
    let mut program = invalid_program();
    let mut pipeline = default_pipeline();
    assert!(pipeline.optimize(&mut program).is_ok());
    assert!(pipeline.diagnostics().has_errors());
}

#[test]
fn stop_on_validator_error_aborts() {
    let mut program = invalid_program();
    let mut pipeline = OptimizationPipeline::with_default_passes(PipelineConfig {
        stop_on_validator_error: true,
        ..PipelineConfig::default()
    });
    let err = pipeline.optimize(&mut program).unwrap_err();
    assert!(matches!(
        err,
        vela_ast::PipelineError::ValidationFailed { errors: 1 }
    ));
}
