//! Core tree to parser tree conversion.
//!
//! The inverse of [`from_parser`](super::from_parser). Identifier types
//! whose names are canonical encoded forms parse back into structural
//! parser types; operators travel out as their canonical text; character
//! literals, which the parser tree lacks, become string literals with the
//! raw text preserved. Comments do not survive the trip.

use super::parser_ast::*;
use super::type_text;
use crate::ast;
use crate::error::BridgeError;

/// Converts a core program into a parser program.
pub fn convert_program(program: &ast::Program) -> Result<ParserProgram, BridgeError> {
    Ok(ParserProgram {
        declarations: program
            .declarations
            .iter()
            .map(convert_declaration)
            .collect::<Result<_, BridgeError>>()?,
        comments: Vec::new(),
        span: program.span.clone(),
    })
}

fn convert_declaration(decl: &ast::Declaration) -> Result<ParserDecl, BridgeError> {
    match decl {
        ast::Declaration::Function(func) => Ok(ParserDecl::Function(convert_function(func)?)),
        ast::Declaration::Variable(var) => Ok(ParserDecl::Variable(convert_variable(var)?)),
        ast::Declaration::Type(decl) => {
            let body = ParserTypeDecl {
                name: convert_ident(&decl.name),
                generics: convert_generics(&decl.generics),
                target: convert_type(&decl.target),
                public: decl.exported,
                span: decl.span.clone(),
            };
            if decl.alias {
                Ok(ParserDecl::TypeAlias(body))
            } else {
                Ok(ParserDecl::Newtype(body))
            }
        }
        ast::Declaration::Struct(decl) => Ok(ParserDecl::Struct(ParserStruct {
            name: convert_ident(&decl.name),
            generics: convert_generics(&decl.generics),
            fields: decl
                .fields
                .iter()
                .map(|field| ParserField {
                    name: convert_ident(&field.name),
                    ty: convert_type(&field.ty),
                    span: field.span.clone(),
                })
                .collect(),
            public: decl.exported,
            span: decl.span.clone(),
        })),
        ast::Declaration::Enum(decl) => Ok(ParserDecl::Enum(ParserEnum {
            name: convert_ident(&decl.name),
            generics: convert_generics(&decl.generics),
            variants: decl
                .variants
                .iter()
                .map(|variant| {
                    Ok(ParserEnumVariant {
                        name: convert_ident(&variant.name),
                        fields: variant.fields.iter().map(convert_type).collect(),
                        discriminant: variant
                            .discriminant
                            .as_ref()
                            .map(convert_expression)
                            .transpose()?,
                        span: variant.span.clone(),
                    })
                })
                .collect::<Result<_, BridgeError>>()?,
            public: decl.exported,
            span: decl.span.clone(),
        })),
        ast::Declaration::Trait(decl) => Ok(ParserDecl::Trait(ParserTrait {
            name: convert_ident(&decl.name),
            generics: convert_generics(&decl.generics),
            methods: decl
                .methods
                .iter()
                .map(|method| {
                    Ok(ParserTraitMethod {
                        name: convert_ident(&method.name),
                        params: convert_params(&method.params)?,
                        return_type: method.return_type.as_ref().map(convert_type),
                        span: method.span.clone(),
                    })
                })
                .collect::<Result<_, BridgeError>>()?,
            associated_types: decl
                .associated_types
                .iter()
                .map(|assoc| ParserAssociatedType {
                    name: convert_ident(&assoc.name),
                    bounds: assoc.bounds.iter().map(convert_type).collect(),
                    span: assoc.span.clone(),
                })
                .collect(),
            public: decl.exported,
            span: decl.span.clone(),
        })),
        ast::Declaration::Impl(decl) => Ok(ParserDecl::Impl(ParserImpl {
            trait_type: decl.trait_type.as_ref().map(convert_type),
            target_type: convert_type(&decl.target_type),
            generics: convert_generics(&decl.generics),
            where_clauses: decl
                .where_clauses
                .iter()
                .map(|clause| ParserWherePredicate {
                    target: convert_type(&clause.target),
                    bounds: clause.bounds.iter().map(convert_type).collect(),
                    span: clause.span.clone(),
                })
                .collect(),
            methods: decl
                .methods
                .iter()
                .map(convert_function)
                .collect::<Result<_, BridgeError>>()?,
            span: decl.span.clone(),
        })),
        ast::Declaration::Import(decl) => Ok(ParserDecl::Import(ParserImport {
            path: decl.path.iter().map(convert_ident).collect(),
            alias: decl.alias.as_ref().map(convert_ident),
            span: decl.span.clone(),
        })),
        ast::Declaration::Export(decl) => Ok(ParserDecl::Export(ParserExport {
            name: convert_ident(&decl.name),
            span: decl.span.clone(),
        })),
    }
}

fn convert_function(func: &ast::FunctionDecl) -> Result<ParserFunction, BridgeError> {
    Ok(ParserFunction {
        name: convert_ident(&func.name),
        generics: convert_generics(&func.generics),
        params: convert_params(&func.params)?,
        return_type: func.return_type.as_ref().map(convert_type),
        body: convert_block(&func.body)?,
        attributes: func
            .attributes
            .iter()
            .map(|attr| ParserAttribute {
                name: attr.name.clone(),
                args: attr.args.clone(),
                span: attr.span.clone(),
            })
            .collect(),
        public: func.exported,
        span: func.span.clone(),
    })
}

fn convert_variable(var: &ast::VariableDecl) -> Result<ParserVariable, BridgeError> {
    Ok(ParserVariable {
        name: convert_ident(&var.name),
        ty: var.declared_type.as_ref().map(convert_type),
        initializer: var.initializer.as_ref().map(convert_expression).transpose()?,
        kind: match var.kind {
            ast::VariableKind::Let => ParserVariableKind::Let,
            ast::VariableKind::Var => ParserVariableKind::Var,
            ast::VariableKind::Const => ParserVariableKind::Const,
        },
        mutable: var.mutable,
        public: var.exported,
        span: var.span.clone(),
    })
}

fn convert_params(params: &[ast::Parameter]) -> Result<Vec<ParserParam>, BridgeError> {
    params
        .iter()
        .map(|param| {
            Ok(ParserParam {
                name: convert_ident(&param.name),
                ty: convert_type(&param.ty),
                default: param.default.as_ref().map(convert_expression).transpose()?,
                mutable: param.mutable,
                span: param.span.clone(),
            })
        })
        .collect()
}

fn convert_generics(generics: &[ast::GenericParam]) -> Vec<ParserGenericParam> {
    generics
        .iter()
        .map(|generic| ParserGenericParam {
            name: convert_ident(&generic.name),
            kind: match &generic.kind {
                ast::GenericParamKind::Type { bounds } => ParserGenericParamKind::Type {
                    bounds: bounds.iter().map(convert_type).collect(),
                },
                ast::GenericParamKind::Const { ty } => ParserGenericParamKind::Const {
                    ty: convert_type(ty),
                },
                ast::GenericParamKind::Lifetime => ParserGenericParamKind::Lifetime,
            },
            span: generic.span.clone(),
        })
        .collect()
}

fn convert_block(block: &ast::BlockStatement) -> Result<ParserBlock, BridgeError> {
    Ok(ParserBlock {
        statements: block
            .statements
            .iter()
            .map(convert_statement)
            .collect::<Result<_, BridgeError>>()?,
        span: block.span.clone(),
    })
}

fn convert_statement(stmt: &ast::Statement) -> Result<ParserStmt, BridgeError> {
    match stmt {
        ast::Statement::Block(block) => Ok(ParserStmt::Block(convert_block(block)?)),
        ast::Statement::Expression(expr) => Ok(ParserStmt::Expression {
            expression: convert_expression(&expr.expression)?,
            span: expr.span.clone(),
        }),
        ast::Statement::Return(ret) => Ok(ParserStmt::Return {
            value: ret.value.as_ref().map(convert_expression).transpose()?,
            span: ret.span.clone(),
        }),
        ast::Statement::If(if_stmt) => Ok(ParserStmt::If {
            condition: convert_expression(&if_stmt.condition)?,
            then_branch: convert_block(&if_stmt.then_branch)?,
            else_branch: if_stmt
                .else_branch
                .as_ref()
                .map(|stmt| convert_statement(stmt).map(Box::new))
                .transpose()?,
            span: if_stmt.span.clone(),
        }),
        ast::Statement::While(while_stmt) => Ok(ParserStmt::While {
            condition: convert_expression(&while_stmt.condition)?,
            body: convert_block(&while_stmt.body)?,
            span: while_stmt.span.clone(),
        }),
        ast::Statement::Variable(var) => Ok(ParserStmt::Variable(convert_variable(var)?)),
    }
}

fn convert_expression(expr: &ast::Expression) -> Result<ParserExpr, BridgeError> {
    match expr {
        ast::Expression::Identifier(ident) => Ok(ParserExpr::Identifier(convert_ident(ident))),
        ast::Expression::Literal(lit) => Ok(ParserExpr::Literal(convert_literal(lit))),
        ast::Expression::Binary(binary) => Ok(ParserExpr::Binary {
            left: Box::new(convert_expression(&binary.left)?),
            op: binary.op.as_str().to_string(),
            right: Box::new(convert_expression(&binary.right)?),
            span: binary.span.clone(),
        }),
        ast::Expression::Unary(unary) => Ok(ParserExpr::Unary {
            op: unary.op.as_str().to_string(),
            operand: Box::new(convert_expression(&unary.operand)?),
            span: unary.span.clone(),
        }),
        ast::Expression::Call(call) => Ok(ParserExpr::Call {
            callee: Box::new(convert_expression(&call.callee)?),
            arguments: call
                .arguments
                .iter()
                .map(convert_expression)
                .collect::<Result<_, BridgeError>>()?,
            span: call.span.clone(),
        }),
        ast::Expression::Member(member) => Ok(ParserExpr::Member {
            object: Box::new(convert_expression(&member.object)?),
            property: convert_ident(&member.property),
            span: member.span.clone(),
        }),
    }
}

fn convert_literal(lit: &ast::Literal) -> ParserLiteral {
    let value = match &lit.value {
        ast::LiteralValue::Integer(n) => ParserLiteralValue::Integer(*n),
        ast::LiteralValue::Float(f) => ParserLiteralValue::Float(*f),
        ast::LiteralValue::String(s) => ParserLiteralValue::String(s.clone()),
        ast::LiteralValue::Boolean(b) => ParserLiteralValue::Boolean(*b),
        // The parser tree has no character kind; the raw text keeps the
        // original spelling.
        ast::LiteralValue::Character(c) => ParserLiteralValue::String(c.to_string()),
        ast::LiteralValue::Null => ParserLiteralValue::Null,
    };
    ParserLiteral {
        value,
        raw: lit.raw.clone(),
        span: lit.span.clone(),
    }
}

// Canonical encoded names parse back into structural types; plain names
// become parser basic types, primitives included.
fn convert_type(ty: &ast::TypeRef) -> ParserType {
    match ty {
        ast::TypeRef::Basic(basic) => ParserType::Basic {
            name: basic.kind.name().to_string(),
            span: basic.span.clone(),
        },
        ast::TypeRef::Identifier(ident) => {
            if type_text::is_encoded(&ident.name) {
                type_text::parse(&ident.name, &ident.span)
            } else {
                ParserType::Basic {
                    name: ident.name.clone(),
                    span: ident.span.clone(),
                }
            }
        }
    }
}

fn convert_ident(ident: &ast::Identifier) -> ParserIdent {
    ParserIdent::new(ident.name.clone(), ident.span.clone())
}
