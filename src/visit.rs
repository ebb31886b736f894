//! Visitor and transformer framework for AST traversal.
//!
//! This module provides two traversal modes over one descent skeleton:
//!
//! - [`Visitor`]: read-only traversal for analyses. Every handler defaults
//!   to the matching `walk_*` function, so implementations override only
//!   what they need. Traversal is pre-order in source order; overriding a
//!   handler and calling `walk_*` after custom work preserves pre-order,
//!   while calling it first yields post-order.
//! - [`Transformer`]: in-place rewriting for passes. Handlers return a
//!   [`Rewrite`] verdict; the `drive_*` functions rewrite children before
//!   invoking the handler on the parent, so a handler always observes
//!   already-rewritten operands.
//!
//! Absent children (`None` branches) are skipped silently. Sibling order
//! follows source order, and traversal is deterministic.

use crate::ast::*;

/// Immutable visitor for AST traversal.
///
/// Implement this trait to analyze a tree without modifying it.
pub trait Visitor {
    /// Visit the program root.
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    /// Visit a declaration.
    fn visit_declaration(&mut self, decl: &Declaration) {
        walk_declaration(self, decl);
    }

    /// Visit a function declaration.
    fn visit_function_decl(&mut self, func: &FunctionDecl) {
        walk_function_decl(self, func);
    }

    /// Visit a variable declaration.
    fn visit_variable_decl(&mut self, var: &VariableDecl) {
        walk_variable_decl(self, var);
    }

    /// Visit a type alias or newtype declaration.
    fn visit_type_decl(&mut self, decl: &TypeDecl) {
        walk_type_decl(self, decl);
    }

    /// Visit a struct declaration.
    fn visit_struct_decl(&mut self, decl: &StructDecl) {
        walk_struct_decl(self, decl);
    }

    /// Visit an enum declaration.
    fn visit_enum_decl(&mut self, decl: &EnumDecl) {
        walk_enum_decl(self, decl);
    }

    /// Visit a trait declaration.
    fn visit_trait_decl(&mut self, decl: &TraitDecl) {
        walk_trait_decl(self, decl);
    }

    /// Visit an impl block.
    fn visit_impl_decl(&mut self, decl: &ImplDecl) {
        walk_impl_decl(self, decl);
    }

    /// Visit an import declaration.
    fn visit_import_decl(&mut self, decl: &ImportDecl) {
        walk_import_decl(self, decl);
    }

    /// Visit an export declaration.
    fn visit_export_decl(&mut self, decl: &ExportDecl) {
        self.visit_identifier(&decl.name);
    }

    /// Visit a function or trait-method parameter.
    fn visit_parameter(&mut self, param: &Parameter) {
        walk_parameter(self, param);
    }

    /// Visit a generic parameter.
    fn visit_generic_param(&mut self, param: &GenericParam) {
        walk_generic_param(self, param);
    }

    /// Visit an attribute.
    fn visit_attribute(&mut self, _attr: &Attribute) {}

    /// Visit a statement.
    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    /// Visit a block statement.
    fn visit_block(&mut self, block: &BlockStatement) {
        walk_block(self, block);
    }

    /// Visit an expression.
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    /// Visit an identifier.
    fn visit_identifier(&mut self, _ident: &Identifier) {}

    /// Visit a literal.
    fn visit_literal(&mut self, _lit: &Literal) {}

    /// Visit a binary operator.
    fn visit_binary_operator(&mut self, _op: &BinaryOperator) {}

    /// Visit a unary operator.
    fn visit_unary_operator(&mut self, _op: &UnaryOperator) {}

    /// Visit a type reference.
    fn visit_type_ref(&mut self, ty: &TypeRef) {
        walk_type_ref(self, ty);
    }

    /// Visit a basic type reference.
    fn visit_basic_type(&mut self, _ty: &BasicType) {}

    /// Visit a named type reference.
    fn visit_identifier_type(&mut self, _ty: &IdentifierType) {}
}

// Walk functions. Each descends into the children of one node kind in
// source order, invoking the visitor's handler for every child.

/// Walk every declaration of a program.
pub fn walk_program<V: Visitor + ?Sized>(v: &mut V, program: &Program) {
    for decl in &program.declarations {
        v.visit_declaration(decl);
    }
}

/// Dispatch a declaration to its kind-specific handler.
pub fn walk_declaration<V: Visitor + ?Sized>(v: &mut V, decl: &Declaration) {
    match decl {
        Declaration::Function(f) => v.visit_function_decl(f),
        Declaration::Variable(var) => v.visit_variable_decl(var),
        Declaration::Type(t) => v.visit_type_decl(t),
        Declaration::Struct(s) => v.visit_struct_decl(s),
        Declaration::Enum(e) => v.visit_enum_decl(e),
        Declaration::Trait(t) => v.visit_trait_decl(t),
        Declaration::Impl(i) => v.visit_impl_decl(i),
        Declaration::Import(i) => v.visit_import_decl(i),
        Declaration::Export(e) => v.visit_export_decl(e),
    }
}

/// Walk a function declaration: name, generics, parameters, return type,
/// body, attributes.
pub fn walk_function_decl<V: Visitor + ?Sized>(v: &mut V, func: &FunctionDecl) {
    v.visit_identifier(&func.name);
    for generic in &func.generics {
        v.visit_generic_param(generic);
    }
    for param in &func.params {
        v.visit_parameter(param);
    }
    if let Some(ret) = &func.return_type {
        v.visit_type_ref(ret);
    }
    v.visit_block(&func.body);
    for attr in &func.attributes {
        v.visit_attribute(attr);
    }
}

/// Walk a variable declaration: name, declared type, initializer.
pub fn walk_variable_decl<V: Visitor + ?Sized>(v: &mut V, var: &VariableDecl) {
    v.visit_identifier(&var.name);
    if let Some(ty) = &var.declared_type {
        v.visit_type_ref(ty);
    }
    if let Some(init) = &var.initializer {
        v.visit_expression(init);
    }
}

/// Walk a type declaration: name, generics, target type.
pub fn walk_type_decl<V: Visitor + ?Sized>(v: &mut V, decl: &TypeDecl) {
    v.visit_identifier(&decl.name);
    for generic in &decl.generics {
        v.visit_generic_param(generic);
    }
    v.visit_type_ref(&decl.target);
}

/// Walk a struct declaration: name, generics, fields.
pub fn walk_struct_decl<V: Visitor + ?Sized>(v: &mut V, decl: &StructDecl) {
    v.visit_identifier(&decl.name);
    for generic in &decl.generics {
        v.visit_generic_param(generic);
    }
    for field in &decl.fields {
        v.visit_identifier(&field.name);
        v.visit_type_ref(&field.ty);
    }
}

/// Walk an enum declaration: name, generics, variants.
pub fn walk_enum_decl<V: Visitor + ?Sized>(v: &mut V, decl: &EnumDecl) {
    v.visit_identifier(&decl.name);
    for generic in &decl.generics {
        v.visit_generic_param(generic);
    }
    for variant in &decl.variants {
        v.visit_identifier(&variant.name);
        for field in &variant.fields {
            v.visit_type_ref(field);
        }
        if let Some(disc) = &variant.discriminant {
            v.visit_expression(disc);
        }
    }
}

/// Walk a trait declaration: name, generics, methods, associated types.
pub fn walk_trait_decl<V: Visitor + ?Sized>(v: &mut V, decl: &TraitDecl) {
    v.visit_identifier(&decl.name);
    for generic in &decl.generics {
        v.visit_generic_param(generic);
    }
    for method in &decl.methods {
        v.visit_identifier(&method.name);
        for param in &method.params {
            v.visit_parameter(param);
        }
        if let Some(ret) = &method.return_type {
            v.visit_type_ref(ret);
        }
    }
    for assoc in &decl.associated_types {
        v.visit_identifier(&assoc.name);
        for bound in &assoc.bounds {
            v.visit_type_ref(bound);
        }
    }
}

/// Walk an impl block: trait type, target type, generics, where clauses,
/// methods.
pub fn walk_impl_decl<V: Visitor + ?Sized>(v: &mut V, decl: &ImplDecl) {
    if let Some(trait_ty) = &decl.trait_type {
        v.visit_type_ref(trait_ty);
    }
    v.visit_type_ref(&decl.target_type);
    for generic in &decl.generics {
        v.visit_generic_param(generic);
    }
    for clause in &decl.where_clauses {
        v.visit_type_ref(&clause.target);
        for bound in &clause.bounds {
            v.visit_type_ref(bound);
        }
    }
    for method in &decl.methods {
        v.visit_function_decl(method);
    }
}

/// Walk an import declaration's path and alias.
pub fn walk_import_decl<V: Visitor + ?Sized>(v: &mut V, decl: &ImportDecl) {
    for segment in &decl.path {
        v.visit_identifier(segment);
    }
    if let Some(alias) = &decl.alias {
        v.visit_identifier(alias);
    }
}

/// Walk a parameter: name, type, default value.
pub fn walk_parameter<V: Visitor + ?Sized>(v: &mut V, param: &Parameter) {
    v.visit_identifier(&param.name);
    v.visit_type_ref(&param.ty);
    if let Some(default) = &param.default {
        v.visit_expression(default);
    }
}

/// Walk a generic parameter: name plus kind payload.
pub fn walk_generic_param<V: Visitor + ?Sized>(v: &mut V, param: &GenericParam) {
    v.visit_identifier(&param.name);
    match &param.kind {
        GenericParamKind::Type { bounds } => {
            for bound in bounds {
                v.visit_type_ref(bound);
            }
        }
        GenericParamKind::Const { ty } => v.visit_type_ref(ty),
        GenericParamKind::Lifetime => {}
    }
}

/// Dispatch a statement to its kind-specific traversal.
pub fn walk_statement<V: Visitor + ?Sized>(v: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Block(block) => v.visit_block(block),
        Statement::Expression(expr) => v.visit_expression(&expr.expression),
        Statement::Return(ret) => {
            if let Some(value) = &ret.value {
                v.visit_expression(value);
            }
        }
        Statement::If(if_stmt) => {
            v.visit_expression(&if_stmt.condition);
            v.visit_block(&if_stmt.then_branch);
            if let Some(else_branch) = &if_stmt.else_branch {
                v.visit_statement(else_branch);
            }
        }
        Statement::While(while_stmt) => {
            v.visit_expression(&while_stmt.condition);
            v.visit_block(&while_stmt.body);
        }
        Statement::Variable(var) => v.visit_variable_decl(var),
    }
}

/// Walk every statement of a block.
pub fn walk_block<V: Visitor + ?Sized>(v: &mut V, block: &BlockStatement) {
    for stmt in &block.statements {
        v.visit_statement(stmt);
    }
}

/// Walk an expression: self's operator leaves, then operands left to right.
pub fn walk_expression<V: Visitor + ?Sized>(v: &mut V, expr: &Expression) {
    match expr {
        Expression::Identifier(ident) => v.visit_identifier(ident),
        Expression::Literal(lit) => v.visit_literal(lit),
        Expression::Binary(binary) => {
            v.visit_binary_operator(&binary.op);
            v.visit_expression(&binary.left);
            v.visit_expression(&binary.right);
        }
        Expression::Unary(unary) => {
            v.visit_unary_operator(&unary.op);
            v.visit_expression(&unary.operand);
        }
        Expression::Call(call) => {
            v.visit_expression(&call.callee);
            for arg in &call.arguments {
                v.visit_expression(arg);
            }
        }
        Expression::Member(member) => {
            v.visit_expression(&member.object);
            v.visit_identifier(&member.property);
        }
    }
}

/// Dispatch a type reference to its leaf handler.
pub fn walk_type_ref<V: Visitor + ?Sized>(v: &mut V, ty: &TypeRef) {
    match ty {
        TypeRef::Basic(basic) => v.visit_basic_type(basic),
        TypeRef::Identifier(ident) => v.visit_identifier_type(ident),
    }
}

// === Transformation ===

/// Verdict a transformer handler returns for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Rewrite<T> {
    /// Leave the node as it is.
    Keep,
    /// Replace the node with the given one.
    Replace(T),
    /// Delete the node. Honored in statement-list positions; treated as
    /// [`Rewrite::Keep`] everywhere else.
    Remove,
}

/// In-place tree rewriter.
///
/// The `drive_*` functions descend first and invoke the handler on the way
/// back up, so `transform_expression` always sees operands that have been
/// rewritten already. Returning [`Rewrite::Keep`] is indistinguishable from
/// replacing a node with an identical clone, except that no work is done.
pub trait Transformer {
    /// Rewrite an expression after its operands have been rewritten.
    fn transform_expression(&mut self, _expr: &Expression) -> Rewrite<Expression> {
        Rewrite::Keep
    }

    /// Rewrite a statement after its children have been rewritten.
    fn transform_statement(&mut self, _stmt: &Statement) -> Rewrite<Statement> {
        Rewrite::Keep
    }

    /// Edit a block's statement list after every statement in it has been
    /// driven. This is the hook for list-level rewrites such as truncating
    /// unreachable tails.
    fn transform_block(&mut self, _block: &mut BlockStatement) {}
}

/// Drive a transformer over every declaration of a program.
pub fn drive_program<T: Transformer + ?Sized>(t: &mut T, program: &mut Program) {
    for decl in &mut program.declarations {
        drive_declaration(t, decl);
    }
}

/// Drive a transformer through the expression and statement positions of a
/// declaration.
pub fn drive_declaration<T: Transformer + ?Sized>(t: &mut T, decl: &mut Declaration) {
    match decl {
        Declaration::Function(func) => drive_function_decl(t, func),
        Declaration::Variable(var) => drive_variable_decl(t, var),
        Declaration::Enum(decl) => {
            for variant in &mut decl.variants {
                if let Some(disc) = &mut variant.discriminant {
                    drive_expression(t, disc);
                }
            }
        }
        Declaration::Impl(decl) => {
            for method in &mut decl.methods {
                drive_function_decl(t, method);
            }
        }
        Declaration::Type(_)
        | Declaration::Struct(_)
        | Declaration::Trait(_)
        | Declaration::Import(_)
        | Declaration::Export(_) => {}
    }
}

/// Drive a transformer through a function's parameter defaults and body.
pub fn drive_function_decl<T: Transformer + ?Sized>(t: &mut T, func: &mut FunctionDecl) {
    for param in &mut func.params {
        if let Some(default) = &mut param.default {
            drive_expression(t, default);
        }
    }
    drive_block(t, &mut func.body);
}

/// Drive a transformer through a variable's initializer.
pub fn drive_variable_decl<T: Transformer + ?Sized>(t: &mut T, var: &mut VariableDecl) {
    if let Some(init) = &mut var.initializer {
        drive_expression(t, init);
    }
}

/// Drive a transformer through a block, honoring statement removal, then
/// hand the whole list to [`Transformer::transform_block`].
pub fn drive_block<T: Transformer + ?Sized>(t: &mut T, block: &mut BlockStatement) {
    let mut index = 0;
    while index < block.statements.len() {
        drive_statement_children(t, &mut block.statements[index]);
        match t.transform_statement(&block.statements[index]) {
            Rewrite::Keep => index += 1,
            Rewrite::Replace(new_stmt) => {
                block.statements[index] = new_stmt;
                index += 1;
            }
            Rewrite::Remove => {
                block.statements.remove(index);
            }
        }
    }
    t.transform_block(block);
}

/// Drive a transformer through a statement in a non-list position.
///
/// `Remove` verdicts are ignored here; a lone statement slot cannot be
/// emptied.
pub fn drive_statement<T: Transformer + ?Sized>(t: &mut T, stmt: &mut Statement) {
    drive_statement_children(t, stmt);
    match t.transform_statement(stmt) {
        Rewrite::Keep | Rewrite::Remove => {}
        Rewrite::Replace(new_stmt) => *stmt = new_stmt,
    }
}

fn drive_statement_children<T: Transformer + ?Sized>(t: &mut T, stmt: &mut Statement) {
    match stmt {
        Statement::Block(block) => drive_block(t, block),
        Statement::Expression(expr) => drive_expression(t, &mut expr.expression),
        Statement::Return(ret) => {
            if let Some(value) = &mut ret.value {
                drive_expression(t, value);
            }
        }
        Statement::If(if_stmt) => {
            drive_expression(t, &mut if_stmt.condition);
            drive_block(t, &mut if_stmt.then_branch);
            if let Some(else_branch) = &mut if_stmt.else_branch {
                drive_statement(t, else_branch);
            }
        }
        Statement::While(while_stmt) => {
            drive_expression(t, &mut while_stmt.condition);
            drive_block(t, &mut while_stmt.body);
        }
        Statement::Variable(var) => drive_variable_decl(t, var),
    }
}

/// Drive a transformer through an expression bottom-up.
pub fn drive_expression<T: Transformer + ?Sized>(t: &mut T, expr: &mut Expression) {
    match expr {
        Expression::Binary(binary) => {
            drive_expression(t, &mut binary.left);
            drive_expression(t, &mut binary.right);
        }
        Expression::Unary(unary) => drive_expression(t, &mut unary.operand),
        Expression::Call(call) => {
            drive_expression(t, &mut call.callee);
            for arg in &mut call.arguments {
                drive_expression(t, arg);
            }
        }
        Expression::Member(member) => drive_expression(t, &mut member.object),
        Expression::Identifier(_) | Expression::Literal(_) => {}
    }
    match t.transform_expression(expr) {
        Rewrite::Keep | Rewrite::Remove => {}
        Rewrite::Replace(new_expr) => *expr = new_expr,
    }
}
