//! Parser tree to core tree conversion.
//!
//! Declarations, statements, expressions, and operators map one-to-one;
//! spans copy componentwise. Structural parser types become identifier
//! types bearing their canonical text (see
//! [`type_text`](super::type_text)). Macros are dropped. A top-level
//! statement that is not a variable declaration becomes a placeholder type
//! declaration named `_placeholder`.

use super::parser_ast::*;
use super::type_text;
use crate::ast;
use crate::error::BridgeError;

/// Name given to top-level statements the core tree cannot host.
pub(crate) const PLACEHOLDER_NAME: &str = "_placeholder";

/// Converts a parser program into a core program.
pub fn convert_program(program: &ParserProgram) -> Result<ast::Program, BridgeError> {
    let mut result = ast::Program::new(program.span.clone());
    for decl in &program.declarations {
        match decl {
            ParserDecl::Macro(_) => continue,
            other => result.declarations.push(convert_declaration(other)?),
        }
    }
    result.comments = program
        .comments
        .iter()
        .map(|c| ast::Comment {
            text: c.text.clone(),
            span: c.span.clone(),
        })
        .collect();
    Ok(result)
}

fn convert_declaration(decl: &ParserDecl) -> Result<ast::Declaration, BridgeError> {
    match decl {
        ParserDecl::Function(func) => Ok(ast::Declaration::Function(convert_function(func)?)),
        ParserDecl::Variable(var) => Ok(ast::Declaration::Variable(convert_variable(var)?)),
        ParserDecl::TypeAlias(decl) => Ok(ast::Declaration::Type(convert_type_decl(decl, true)?)),
        ParserDecl::Newtype(decl) => Ok(ast::Declaration::Type(convert_type_decl(decl, false)?)),
        ParserDecl::Struct(decl) => Ok(ast::Declaration::Struct(ast::StructDecl {
            name: convert_ident(&decl.name),
            generics: convert_generics(&decl.generics),
            fields: decl
                .fields
                .iter()
                .map(|field| ast::StructField {
                    name: convert_ident(&field.name),
                    ty: convert_type(&field.ty),
                    span: field.span.clone(),
                })
                .collect(),
            exported: decl.public,
            span: decl.span.clone(),
        })),
        ParserDecl::Enum(decl) => Ok(ast::Declaration::Enum(ast::EnumDecl {
            name: convert_ident(&decl.name),
            generics: convert_generics(&decl.generics),
            variants: decl
                .variants
                .iter()
                .map(|variant| {
                    Ok(ast::EnumVariant {
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
            exported: decl.public,
            span: decl.span.clone(),
        })),
        ParserDecl::Trait(decl) => Ok(ast::Declaration::Trait(ast::TraitDecl {
            name: convert_ident(&decl.name),
            generics: convert_generics(&decl.generics),
            methods: decl
                .methods
                .iter()
                .map(|method| {
                    Ok(ast::TraitMethod {
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
                .map(|assoc| ast::AssociatedType {
                    name: convert_ident(&assoc.name),
                    bounds: assoc.bounds.iter().map(convert_type).collect(),
                    span: assoc.span.clone(),
                })
                .collect(),
            exported: decl.public,
            span: decl.span.clone(),
        })),
        ParserDecl::Impl(decl) => Ok(ast::Declaration::Impl(ast::ImplDecl {
            trait_type: decl.trait_type.as_ref().map(convert_type),
            target_type: convert_type(&decl.target_type),
            generics: convert_generics(&decl.generics),
            where_clauses: decl
                .where_clauses
                .iter()
                .map(|clause| ast::WherePredicate {
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
        ParserDecl::Import(decl) => Ok(ast::Declaration::Import(ast::ImportDecl {
            path: decl.path.iter().map(convert_ident).collect(),
            alias: decl.alias.as_ref().map(convert_ident),
            span: decl.span.clone(),
        })),
        ParserDecl::Export(decl) => Ok(ast::Declaration::Export(ast::ExportDecl {
            name: convert_ident(&decl.name),
            span: decl.span.clone(),
        })),
        ParserDecl::Statement(ParserStmt::Variable(var)) => {
            Ok(ast::Declaration::Variable(convert_variable(var)?))
        }
        ParserDecl::Statement(stmt) => Ok(ast::Declaration::Type(placeholder(stmt.span()))),
        // Dropped before dispatch.
        ParserDecl::Macro(m) => Err(BridgeError::UnsupportedParserDeclaration {
            span: m.span.clone(),
        }),
    }
}

fn placeholder(span: &crate::span::Span) -> ast::TypeDecl {
    ast::TypeDecl {
        name: ast::Identifier::new(PLACEHOLDER_NAME, span.clone()),
        generics: vec![],
        target: ast::TypeRef::basic(ast::BasicKind::Void, span.clone()),
        alias: true,
        exported: false,
        span: span.clone(),
    }
}

fn convert_function(func: &ParserFunction) -> Result<ast::FunctionDecl, BridgeError> {
    Ok(ast::FunctionDecl {
        name: convert_ident(&func.name),
        generics: convert_generics(&func.generics),
        params: convert_params(&func.params)?,
        return_type: func.return_type.as_ref().map(convert_type),
        body: convert_block(&func.body)?,
        attributes: func
            .attributes
            .iter()
            .map(|attr| ast::Attribute {
                name: attr.name.clone(),
                args: attr.args.clone(),
                span: attr.span.clone(),
            })
            .collect(),
        exported: func.public,
        span: func.span.clone(),
    })
}

fn convert_variable(var: &ParserVariable) -> Result<ast::VariableDecl, BridgeError> {
    let kind = match var.kind {
        ParserVariableKind::Let => ast::VariableKind::Let,
        ParserVariableKind::Var => ast::VariableKind::Var,
        ParserVariableKind::Const => ast::VariableKind::Const,
    };
    Ok(ast::VariableDecl {
        name: convert_ident(&var.name),
        declared_type: var.ty.as_ref().map(convert_type),
        initializer: var.initializer.as_ref().map(convert_expression).transpose()?,
        kind,
        mutable: var.mutable && kind != ast::VariableKind::Const,
        exported: var.public,
        span: var.span.clone(),
    })
}

fn convert_type_decl(decl: &ParserTypeDecl, alias: bool) -> Result<ast::TypeDecl, BridgeError> {
    Ok(ast::TypeDecl {
        name: convert_ident(&decl.name),
        generics: convert_generics(&decl.generics),
        target: convert_type(&decl.target),
        alias,
        exported: decl.public,
        span: decl.span.clone(),
    })
}

fn convert_params(params: &[ParserParam]) -> Result<Vec<ast::Parameter>, BridgeError> {
    params
        .iter()
        .map(|param| {
            Ok(ast::Parameter {
                name: convert_ident(&param.name),
                ty: convert_type(&param.ty),
                default: param.default.as_ref().map(convert_expression).transpose()?,
                mutable: param.mutable,
                span: param.span.clone(),
            })
        })
        .collect()
}

fn convert_generics(generics: &[ParserGenericParam]) -> Vec<ast::GenericParam> {
    generics
        .iter()
        .map(|generic| ast::GenericParam {
            name: convert_ident(&generic.name),
            kind: match &generic.kind {
                ParserGenericParamKind::Type { bounds } => ast::GenericParamKind::Type {
                    bounds: bounds.iter().map(convert_type).collect(),
                },
                ParserGenericParamKind::Const { ty } => ast::GenericParamKind::Const {
                    ty: convert_type(ty),
                },
                ParserGenericParamKind::Lifetime => ast::GenericParamKind::Lifetime,
            },
            span: generic.span.clone(),
        })
        .collect()
}

fn convert_block(block: &ParserBlock) -> Result<ast::BlockStatement, BridgeError> {
    Ok(ast::BlockStatement {
        statements: block
            .statements
            .iter()
            .map(convert_statement)
            .collect::<Result<_, BridgeError>>()?,
        span: block.span.clone(),
    })
}

fn convert_statement(stmt: &ParserStmt) -> Result<ast::Statement, BridgeError> {
    match stmt {
        ParserStmt::Block(block) => Ok(ast::Statement::Block(convert_block(block)?)),
        ParserStmt::Expression { expression, span } => {
            Ok(ast::Statement::Expression(ast::ExpressionStatement {
                expression: convert_expression(expression)?,
                span: span.clone(),
            }))
        }
        ParserStmt::Return { value, span } => Ok(ast::Statement::Return(ast::ReturnStatement {
            value: value.as_ref().map(convert_expression).transpose()?,
            span: span.clone(),
        })),
        ParserStmt::If {
            condition,
            then_branch,
            else_branch,
            span,
        } => Ok(ast::Statement::If(ast::IfStatement {
            condition: convert_expression(condition)?,
            then_branch: convert_block(then_branch)?,
            else_branch: else_branch
                .as_ref()
                .map(|stmt| convert_statement(stmt).map(Box::new))
                .transpose()?,
            span: span.clone(),
        })),
        ParserStmt::While {
            condition,
            body,
            span,
        } => Ok(ast::Statement::While(ast::WhileStatement {
            condition: convert_expression(condition)?,
            body: convert_block(body)?,
            span: span.clone(),
        })),
        ParserStmt::Variable(var) => Ok(ast::Statement::Variable(convert_variable(var)?)),
    }
}

fn convert_expression(expr: &ParserExpr) -> Result<ast::Expression, BridgeError> {
    match expr {
        ParserExpr::Identifier(ident) => Ok(ast::Expression::Identifier(convert_ident(ident))),
        ParserExpr::Literal(lit) => Ok(ast::Expression::Literal(convert_literal(lit))),
        ParserExpr::Binary {
            left,
            op,
            right,
            span,
        } => {
            let operator = ast::BinaryOperator::from_text(op).ok_or_else(|| {
                BridgeError::UnsupportedOperator {
                    text: op.clone(),
                    span: span.clone(),
                }
            })?;
            Ok(ast::Expression::binary(
                convert_expression(left)?,
                operator,
                convert_expression(right)?,
                span.clone(),
            ))
        }
        ParserExpr::Unary { op, operand, span } => {
            let operator = ast::UnaryOperator::from_text(op).ok_or_else(|| {
                BridgeError::UnsupportedOperator {
                    text: op.clone(),
                    span: span.clone(),
                }
            })?;
            Ok(ast::Expression::unary(
                operator,
                convert_expression(operand)?,
                span.clone(),
            ))
        }
        ParserExpr::Call {
            callee,
            arguments,
            span,
        } => Ok(ast::Expression::call(
            convert_expression(callee)?,
            arguments
                .iter()
                .map(convert_expression)
                .collect::<Result<_, BridgeError>>()?,
            span.clone(),
        )),
        ParserExpr::Member {
            object,
            property,
            span,
        } => Ok(ast::Expression::Member(ast::MemberExpr {
            object: Box::new(convert_expression(object)?),
            property: convert_ident(property),
            span: span.clone(),
        })),
    }
}

fn convert_literal(lit: &ParserLiteral) -> ast::Literal {
    let value = match &lit.value {
        ParserLiteralValue::Integer(n) => ast::LiteralValue::Integer(*n),
        ParserLiteralValue::Float(f) => ast::LiteralValue::Float(*f),
        ParserLiteralValue::String(s) => ast::LiteralValue::String(s.clone()),
        ParserLiteralValue::Boolean(b) => ast::LiteralValue::Boolean(*b),
        ParserLiteralValue::Null => ast::LiteralValue::Null,
    };
    ast::Literal {
        value,
        raw: lit.raw.clone(),
        span: lit.span.clone(),
    }
}

// A basic type with a well-known primitive name maps onto the matching
// core primitive; anything else becomes a named reference. Structural
// forms are encoded textually.
fn convert_type(ty: &ParserType) -> ast::TypeRef {
    match ty {
        ParserType::Basic { name, span } => match ast::BasicKind::from_name(name) {
            Some(kind) => ast::TypeRef::basic(kind, span.clone()),
            None => ast::TypeRef::named(name.clone(), span.clone()),
        },
        other => ast::TypeRef::named(type_text::print(other), other.span().clone()),
    }
}

fn convert_ident(ident: &ParserIdent) -> ast::Identifier {
    ast::Identifier::new(ident.text.clone(), ident.span.clone())
}
