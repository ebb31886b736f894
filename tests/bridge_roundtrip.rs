//! Bridge round-trip tests.
//! Converts parser programs to the core tree and back, checking shape,
//! identifier text, operator text, literal values, and spans.

use pretty_assertions::assert_eq;

use vela_ast::ast;
use vela_ast::bridge::*;
use vela_ast::{from_parser_program, to_parser_program, Position, Span};

fn span_at(offset: u32, len: u32) -> Span {
    Span::new(
        Position::new("main.vela", 1, offset + 1, offset),
        Position::new("main.vela", 1, offset + len + 1, offset + len),
    )
}

fn ident(text: &str, span: Span) -> ParserIdent {
    ParserIdent::new(text, span)
}

fn int_literal(value: i64, span: Span) -> ParserExpr {
    ParserExpr::Literal(ParserLiteral {
        value: ParserLiteralValue::Integer(value),
        raw: value.to_string(),
        span,
    })
}

// ============================================================================
// REFERENCE TYPE ROUND TRIP
// ============================================================================

#[test]
fn reference_type_round_trips_with_spans() {
    // c: &'a mut int -- the encoding keeps the type node's span; inner
    // positions are not retained, so the input uses the outer span too.
    let ty_span = span_at(7, 11);
    let decl_span = span_at(0, 18);
    let name_span = span_at(4, 1);

    let reference = ParserType::Reference {
        inner: Box::new(ParserType::Basic {
            name: "int".to_string(),
            span: ty_span.clone(),
        }),
        lifetime: "a".to_string(),
        mutable: true,
        span: ty_span.clone(),
    };
    let program = ParserProgram {
        declarations: vec![ParserDecl::Variable(ParserVariable {
            name: ident("c", name_span),
            ty: Some(reference.clone()),
            initializer: None,
            kind: ParserVariableKind::Let,
            mutable: false,
            public: false,
            span: decl_span,
        })],
        comments: vec![],
        span: span_at(0, 18),
    };

    let core = from_parser_program(&program).unwrap();

    // The core tree carries the canonical text.
    match &core.declarations[0] {
        ast::Declaration::Variable(var) => match var.declared_type.as_ref().unwrap() {
            ast::TypeRef::Identifier(encoded) => {
                assert_eq!(encoded.name, "&'a mut int");
                assert_eq!(encoded.span, ty_span);
            }
            other => panic!("expected encoded identifier type, got {:?}", other),
        },
        other => panic!("expected variable, got {:?}", other),
    }

    let back = to_parser_program(&core).unwrap();
    match &back.declarations[0] {
        ParserDecl::Variable(var) => {
            assert_eq!(var.ty.as_ref().unwrap(), &reference);
        }
        other => panic!("expected variable, got {:?}", other),
    }
    assert_eq!(back.declarations, program.declarations);
    assert_eq!(back.span, program.span);
}

// ============================================================================
// FULL PROGRAM ROUND TRIP
// ============================================================================

fn representative_program() -> ParserProgram {
    let s = Span::dummy();
    let body = ParserBlock {
        statements: vec![
            ParserStmt::Variable(ParserVariable {
                name: ident("total", s.clone()),
                ty: Some(ParserType::Basic {
                    name: "int".to_string(),
                    span: s.clone(),
                }),
                initializer: Some(ParserExpr::Binary {
                    left: Box::new(int_literal(2, s.clone())),
                    op: "*".to_string(),
                    right: Box::new(int_literal(3, s.clone())),
                    span: s.clone(),
                }),
                kind: ParserVariableKind::Let,
                mutable: false,
                public: false,
                span: s.clone(),
            }),
            ParserStmt::If {
                condition: ParserExpr::Binary {
                    left: Box::new(ParserExpr::Identifier(ident("total", s.clone()))),
                    op: ">".to_string(),
                    right: Box::new(int_literal(0, s.clone())),
                    span: s.clone(),
                },
                then_branch: ParserBlock {
                    statements: vec![ParserStmt::Return {
                        value: Some(ParserExpr::Identifier(ident("total", s.clone()))),
                        span: s.clone(),
                    }],
                    span: s.clone(),
                },
                else_branch: None,
                span: s.clone(),
            },
            ParserStmt::Return {
                value: Some(int_literal(0, s.clone())),
                span: s.clone(),
            },
        ],
        span: s.clone(),
    };

    ParserProgram {
        declarations: vec![
            ParserDecl::Import(ParserImport {
                path: vec![ident("std", s.clone()), ident("io", s.clone())],
                alias: None,
                span: s.clone(),
            }),
            ParserDecl::TypeAlias(ParserTypeDecl {
                name: ident("Size", s.clone()),
                generics: vec![],
                target: ParserType::Basic {
                    name: "int".to_string(),
                    span: s.clone(),
                },
                public: true,
                span: s.clone(),
            }),
            ParserDecl::Newtype(ParserTypeDecl {
                name: ident("Bytes", s.clone()),
                generics: vec![],
                target: ParserType::Array {
                    element: Box::new(ParserType::Basic {
                        name: "int".to_string(),
                        span: s.clone(),
                    }),
                    size: None,
                    span: s.clone(),
                },
                public: false,
                span: s.clone(),
            }),
            ParserDecl::Struct(ParserStruct {
                name: ident("Pair", s.clone()),
                generics: vec![ParserGenericParam {
                    name: ident("T", s.clone()),
                    kind: ParserGenericParamKind::Type { bounds: vec![] },
                    span: s.clone(),
                }],
                fields: vec![
                    ParserField {
                        name: ident("first", s.clone()),
                        ty: ParserType::Basic {
                            name: "T".to_string(),
                            span: s.clone(),
                        },
                        span: s.clone(),
                    },
                    ParserField {
                        name: ident("second", s.clone()),
                        ty: ParserType::Basic {
                            name: "T".to_string(),
                            span: s.clone(),
                        },
                        span: s.clone(),
                    },
                ],
                public: true,
                span: s.clone(),
            }),
            ParserDecl::Enum(ParserEnum {
                name: ident("Mode", s.clone()),
                generics: vec![],
                variants: vec![
                    ParserEnumVariant {
                        name: ident("Off", s.clone()),
                        fields: vec![],
                        discriminant: Some(int_literal(0, s.clone())),
                        span: s.clone(),
                    },
                    ParserEnumVariant {
                        name: ident("On", s.clone()),
                        fields: vec![ParserType::Basic {
                            name: "int".to_string(),
                            span: s.clone(),
                        }],
                        discriminant: None,
                        span: s.clone(),
                    },
                ],
                public: false,
                span: s.clone(),
            }),
            ParserDecl::Trait(ParserTrait {
                name: ident("Measure", s.clone()),
                generics: vec![],
                methods: vec![ParserTraitMethod {
                    name: ident("size", s.clone()),
                    params: vec![],
                    return_type: Some(ParserType::Basic {
                        name: "int".to_string(),
                        span: s.clone(),
                    }),
                    span: s.clone(),
                }],
                associated_types: vec![ParserAssociatedType {
                    name: ident("Unit", s.clone()),
                    bounds: vec![],
                    span: s.clone(),
                }],
                public: true,
                span: s.clone(),
            }),
            ParserDecl::Function(ParserFunction {
                name: ident("main", s.clone()),
                generics: vec![],
                params: vec![ParserParam {
                    name: ident("argc", s.clone()),
                    ty: ParserType::Basic {
                        name: "int".to_string(),
                        span: s.clone(),
                    },
                    default: Some(int_literal(0, s.clone())),
                    mutable: false,
                    span: s.clone(),
                }],
                return_type: Some(ParserType::Basic {
                    name: "int".to_string(),
                    span: s.clone(),
                }),
                body,
                attributes: vec![ParserAttribute {
                    name: "inline".to_string(),
                    args: vec![],
                    span: s.clone(),
                }],
                public: true,
                span: s.clone(),
            }),
            ParserDecl::Export(ParserExport {
                name: ident("main", s.clone()),
                span: s.clone(),
            }),
        ],
        comments: vec![],
        span: s,
    }
}

#[test]
fn representative_program_round_trips() {
    let program = representative_program();
    let core = from_parser_program(&program).unwrap();
    let back = to_parser_program(&core).unwrap();
    assert_eq!(back, program);
}

#[test]
fn alias_and_newtype_stay_distinct() {
    let program = representative_program();
    let core = from_parser_program(&program).unwrap();

    let aliases: Vec<bool> = core
        .declarations
        .iter()
        .filter_map(|decl| match decl {
            ast::Declaration::Type(t) => Some(t.alias),
            _ => None,
        })
        .collect();
    assert_eq!(aliases, vec![true, false]);
}

#[test]
fn operators_map_by_canonical_text() {
    let program = representative_program();
    let core = from_parser_program(&program).unwrap();

    let func = core
        .declarations
        .iter()
        .find_map(|decl| match decl {
            ast::Declaration::Function(f) => Some(f),
            _ => None,
        })
        .unwrap();
    match &func.body.statements[0] {
        ast::Statement::Variable(var) => match var.initializer.as_ref().unwrap() {
            ast::Expression::Binary(binary) => {
                assert_eq!(binary.op, ast::BinaryOperator::Mul);
            }
            other => panic!("expected binary initializer, got {:?}", other),
        },
        other => panic!("expected variable statement, got {:?}", other),
    }
}

// ============================================================================
// ENCODED TYPE FORMS
// ============================================================================

#[test]
fn structural_types_encode_to_canonical_text() {
    let s = Span::dummy();
    let cases = vec![
        (
            ParserType::Pointer {
                inner: Box::new(ParserType::Basic {
                    name: "float".to_string(),
                    span: s.clone(),
                }),
                mutable: true,
                span: s.clone(),
            },
            "*mut float",
        ),
        (
            ParserType::Array {
                element: Box::new(ParserType::Basic {
                    name: "int".to_string(),
                    span: s.clone(),
                }),
                size: Some("3".to_string()),
                span: s.clone(),
            },
            "[int; 3]",
        ),
        (
            ParserType::Generic {
                base: "Result".to_string(),
                args: vec![
                    ParserType::Basic {
                        name: "int".to_string(),
                        span: s.clone(),
                    },
                    ParserType::Basic {
                        name: "string".to_string(),
                        span: s.clone(),
                    },
                ],
                span: s.clone(),
            },
            "Result<int, string>",
        ),
    ];

    for (ty, expected) in cases {
        let program = ParserProgram {
            declarations: vec![ParserDecl::Variable(ParserVariable {
                name: ident("v", s.clone()),
                ty: Some(ty.clone()),
                initializer: None,
                kind: ParserVariableKind::Let,
                mutable: false,
                public: false,
                span: s.clone(),
            })],
            comments: vec![],
            span: s.clone(),
        };

        let core = from_parser_program(&program).unwrap();
        match &core.declarations[0] {
            ast::Declaration::Variable(var) => match var.declared_type.as_ref().unwrap() {
                ast::TypeRef::Identifier(encoded) => assert_eq!(encoded.name, expected),
                other => panic!("expected encoded type, got {:?}", other),
            },
            other => panic!("expected variable, got {:?}", other),
        }

        let back = to_parser_program(&core).unwrap();
        match &back.declarations[0] {
            ParserDecl::Variable(var) => assert_eq!(var.ty.as_ref().unwrap(), &ty),
            other => panic!("expected variable, got {:?}", other),
        }
    }
}

#[test]
fn primitive_names_become_basic_types() {
    let s = Span::dummy();
    let program = ParserProgram {
        declarations: vec![ParserDecl::Variable(ParserVariable {
            name: ident("flag", s.clone()),
            ty: Some(ParserType::Basic {
                name: "bool".to_string(),
                span: s.clone(),
            }),
            initializer: None,
            kind: ParserVariableKind::Let,
            mutable: false,
            public: false,
            span: s.clone(),
        })],
        comments: vec![],
        span: s,
    };

    let core = from_parser_program(&program).unwrap();
    match &core.declarations[0] {
        ast::Declaration::Variable(var) => match var.declared_type.as_ref().unwrap() {
            ast::TypeRef::Basic(basic) => assert_eq!(basic.kind, ast::BasicKind::Bool),
            other => panic!("expected basic type, got {:?}", other),
        },
        other => panic!("expected variable, got {:?}", other),
    }
}

#[test]
fn comments_are_not_preserved() {
    let s = Span::dummy();
    let program = ParserProgram {
        declarations: vec![],
        comments: vec![ParserComment {
            text: "a note".to_string(),
            span: s.clone(),
        }],
        span: s,
    };

    let core = from_parser_program(&program).unwrap();
    assert_eq!(core.comments.len(), 1);

    let back = to_parser_program(&core).unwrap();
    assert!(back.comments.is_empty());
}
