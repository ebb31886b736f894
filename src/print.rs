//! Walker applications: pretty printing, node counting, identifier
//! collection.
//!
//! The pretty printer renders a tree as readable Vela-like source, useful
//! for debugging and snapshot tests. [`NodeCounter`] and
//! [`IdentifierCollector`] are small [`Visitor`] implementations that show
//! the read-only traversal in use.

use std::fmt::Write;

use crate::ast::*;
use crate::visit::{self, Visitor};

/// Pretty printer for AST nodes.
pub struct PrettyPrinter {
    /// Current indentation level
    indent: usize,
    /// Output buffer
    output: String,
}

impl PrettyPrinter {
    /// Creates a new printer.
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::new(),
        }
    }

    /// Returns the rendered output.
    pub fn finish(self) -> String {
        self.output
    }

    /// Print a whole program.
    pub fn print_program(&mut self, program: &Program) {
        for decl in &program.declarations {
            self.print_declaration(decl);
        }
    }

    /// Print a declaration.
    pub fn print_declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Function(func) => self.print_function(func),
            Declaration::Variable(var) => {
                self.write_indent();
                self.print_variable(var);
                self.output.push('\n');
            }
            Declaration::Type(decl) => self.print_type_decl(decl),
            Declaration::Struct(decl) => self.print_struct(decl),
            Declaration::Enum(decl) => self.print_enum(decl),
            Declaration::Trait(decl) => self.print_trait(decl),
            Declaration::Impl(decl) => self.print_impl(decl),
            Declaration::Import(decl) => self.print_import(decl),
            Declaration::Export(decl) => {
                self.write_indent();
                writeln!(self.output, "export {}", decl.name.name).unwrap();
            }
        }
    }

    fn print_function(&mut self, func: &FunctionDecl) {
        self.write_indent();
        if func.exported {
            self.output.push_str("export ");
        }
        write!(self.output, "func {}", func.name.name).unwrap();
        self.print_generics(&func.generics);
        self.output.push('(');
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.print_parameter(param);
        }
        self.output.push(')');
        if let Some(ret) = &func.return_type {
            self.output.push_str(": ");
            self.print_type_ref(ret);
        }
        self.output.push_str(" {\n");
        self.indent += 1;
        for stmt in &func.body.statements {
            self.print_statement(stmt);
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push_str("}\n");
    }

    fn print_parameter(&mut self, param: &Parameter) {
        if param.mutable {
            self.output.push_str("mut ");
        }
        write!(self.output, "{}: ", param.name.name).unwrap();
        self.print_type_ref(&param.ty);
        if let Some(default) = &param.default {
            self.output.push_str(" = ");
            self.print_expression(default);
        }
    }

    fn print_variable(&mut self, var: &VariableDecl) {
        if var.exported {
            self.output.push_str("export ");
        }
        write!(self.output, "{} ", var.kind).unwrap();
        if var.mutable && var.kind != VariableKind::Var {
            self.output.push_str("mut ");
        }
        self.output.push_str(&var.name.name);
        if let Some(ty) = &var.declared_type {
            self.output.push_str(": ");
            self.print_type_ref(ty);
        }
        if let Some(init) = &var.initializer {
            self.output.push_str(" = ");
            self.print_expression(init);
        }
    }

    fn print_type_decl(&mut self, decl: &TypeDecl) {
        self.write_indent();
        if decl.exported {
            self.output.push_str("export ");
        }
        let keyword = if decl.alias { "type" } else { "newtype" };
        write!(self.output, "{} {}", keyword, decl.name.name).unwrap();
        self.print_generics(&decl.generics);
        self.output.push_str(" = ");
        self.print_type_ref(&decl.target);
        self.output.push('\n');
    }

    fn print_struct(&mut self, decl: &StructDecl) {
        self.write_indent();
        if decl.exported {
            self.output.push_str("export ");
        }
        write!(self.output, "struct {}", decl.name.name).unwrap();
        self.print_generics(&decl.generics);
        self.output.push_str(" {\n");
        self.indent += 1;
        for field in &decl.fields {
            self.write_indent();
            write!(self.output, "{}: ", field.name.name).unwrap();
            self.print_type_ref(&field.ty);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push_str("}\n");
    }

    fn print_enum(&mut self, decl: &EnumDecl) {
        self.write_indent();
        if decl.exported {
            self.output.push_str("export ");
        }
        write!(self.output, "enum {}", decl.name.name).unwrap();
        self.print_generics(&decl.generics);
        self.output.push_str(" {\n");
        self.indent += 1;
        for variant in &decl.variants {
            self.write_indent();
            self.output.push_str(&variant.name.name);
            if !variant.fields.is_empty() {
                self.output.push('(');
                for (i, field) in variant.fields.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_type_ref(field);
                }
                self.output.push(')');
            }
            if let Some(disc) = &variant.discriminant {
                self.output.push_str(" = ");
                self.print_expression(disc);
            }
            self.output.push('\n');
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push_str("}\n");
    }

    fn print_trait(&mut self, decl: &TraitDecl) {
        self.write_indent();
        if decl.exported {
            self.output.push_str("export ");
        }
        write!(self.output, "trait {}", decl.name.name).unwrap();
        self.print_generics(&decl.generics);
        self.output.push_str(" {\n");
        self.indent += 1;
        for assoc in &decl.associated_types {
            self.write_indent();
            writeln!(self.output, "type {}", assoc.name.name).unwrap();
        }
        for method in &decl.methods {
            self.write_indent();
            write!(self.output, "func {}(", method.name.name).unwrap();
            for (i, param) in method.params.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.print_parameter(param);
            }
            self.output.push(')');
            if let Some(ret) = &method.return_type {
                self.output.push_str(": ");
                self.print_type_ref(ret);
            }
            self.output.push('\n');
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push_str("}\n");
    }

    fn print_impl(&mut self, decl: &ImplDecl) {
        self.write_indent();
        self.output.push_str("impl ");
        if let Some(trait_ty) = &decl.trait_type {
            self.print_type_ref(trait_ty);
            self.output.push_str(" for ");
        }
        self.print_type_ref(&decl.target_type);
        self.output.push_str(" {\n");
        self.indent += 1;
        for method in &decl.methods {
            self.print_function(method);
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push_str("}\n");
    }

    fn print_import(&mut self, decl: &ImportDecl) {
        self.write_indent();
        self.output.push_str("import ");
        for (i, segment) in decl.path.iter().enumerate() {
            if i > 0 {
                self.output.push('.');
            }
            self.output.push_str(&segment.name);
        }
        if let Some(alias) = &decl.alias {
            write!(self.output, " as {}", alias.name).unwrap();
        }
        self.output.push('\n');
    }

    /// Print a statement at the current indentation.
    pub fn print_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Block(block) => {
                self.write_indent();
                self.output.push_str("{\n");
                self.indent += 1;
                for inner in &block.statements {
                    self.print_statement(inner);
                }
                self.indent -= 1;
                self.write_indent();
                self.output.push_str("}\n");
            }
            Statement::Expression(expr) => {
                self.write_indent();
                self.print_expression(&expr.expression);
                self.output.push('\n');
            }
            Statement::Return(ret) => {
                self.write_indent();
                self.output.push_str("return");
                if let Some(value) = &ret.value {
                    self.output.push(' ');
                    self.print_expression(value);
                }
                self.output.push('\n');
            }
            Statement::If(if_stmt) => {
                self.write_indent();
                self.output.push_str("if ");
                self.print_if_tail(if_stmt);
            }
            Statement::While(while_stmt) => {
                self.write_indent();
                self.output.push_str("while ");
                self.print_expression(&while_stmt.condition);
                self.output.push_str(" {\n");
                self.indent += 1;
                for inner in &while_stmt.body.statements {
                    self.print_statement(inner);
                }
                self.indent -= 1;
                self.write_indent();
                self.output.push_str("}\n");
            }
            Statement::Variable(var) => {
                self.write_indent();
                self.print_variable(var);
                self.output.push('\n');
            }
        }
    }

    // Shared by `if` statements and `else if` chains; the caller has
    // already written the leading keyword.
    fn print_if_tail(&mut self, if_stmt: &IfStatement) {
        self.print_expression(&if_stmt.condition);
        self.output.push_str(" {\n");
        self.indent += 1;
        for inner in &if_stmt.then_branch.statements {
            self.print_statement(inner);
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push('}');
        match if_stmt.else_branch.as_deref() {
            None => self.output.push('\n'),
            Some(Statement::If(chained)) => {
                self.output.push_str(" else if ");
                self.print_if_tail(chained);
            }
            Some(Statement::Block(block)) => {
                self.output.push_str(" else {\n");
                self.indent += 1;
                for inner in &block.statements {
                    self.print_statement(inner);
                }
                self.indent -= 1;
                self.write_indent();
                self.output.push_str("}\n");
            }
            Some(other) => {
                self.output.push_str(" else {\n");
                self.indent += 1;
                self.print_statement(other);
                self.indent -= 1;
                self.write_indent();
                self.output.push_str("}\n");
            }
        }
    }

    /// Print an expression inline.
    pub fn print_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Identifier(ident) => self.output.push_str(&ident.name),
            Expression::Literal(lit) => self.output.push_str(&lit.raw),
            Expression::Binary(binary) => {
                self.output.push('(');
                self.print_expression(&binary.left);
                write!(self.output, " {} ", binary.op).unwrap();
                self.print_expression(&binary.right);
                self.output.push(')');
            }
            Expression::Unary(unary) => {
                self.output.push_str(unary.op.as_str());
                self.print_expression(&unary.operand);
            }
            Expression::Call(call) => {
                self.print_expression(&call.callee);
                self.output.push('(');
                for (i, arg) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_expression(arg);
                }
                self.output.push(')');
            }
            Expression::Member(member) => {
                self.print_expression(&member.object);
                write!(self.output, ".{}", member.property.name).unwrap();
            }
        }
    }

    /// Print a type reference inline.
    pub fn print_type_ref(&mut self, ty: &TypeRef) {
        match ty {
            TypeRef::Basic(basic) => self.output.push_str(basic.kind.name()),
            TypeRef::Identifier(ident) => self.output.push_str(&ident.name),
        }
    }

    fn print_generics(&mut self, generics: &[GenericParam]) {
        if generics.is_empty() {
            return;
        }
        self.output.push('<');
        for (i, generic) in generics.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            if matches!(generic.kind, GenericParamKind::Lifetime) {
                self.output.push('\'');
            }
            self.output.push_str(&generic.name.name);
        }
        self.output.push('>');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a program to a string.
pub fn print_program(program: &Program) -> String {
    let mut printer = PrettyPrinter::new();
    printer.print_program(program);
    printer.finish()
}

/// Renders a single expression to a string.
pub fn print_expression(expr: &Expression) -> String {
    let mut printer = PrettyPrinter::new();
    printer.print_expression(expr);
    printer.finish()
}

/// A visitor that counts nodes per group.
#[derive(Debug, Default)]
pub struct NodeCounter {
    /// Declarations visited
    pub declarations: usize,
    /// Statements visited
    pub statements: usize,
    /// Expressions visited
    pub expressions: usize,
    /// Type references visited
    pub types: usize,
}

impl NodeCounter {
    /// Creates a counter with all counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total nodes across all groups.
    pub fn total(&self) -> usize {
        self.declarations + self.statements + self.expressions + self.types
    }
}

impl Visitor for NodeCounter {
    fn visit_declaration(&mut self, decl: &Declaration) {
        self.declarations += 1;
        visit::walk_declaration(self, decl);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        self.statements += 1;
        visit::walk_statement(self, stmt);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.expressions += 1;
        visit::walk_expression(self, expr);
    }

    fn visit_type_ref(&mut self, ty: &TypeRef) {
        self.types += 1;
        visit::walk_type_ref(self, ty);
    }
}

/// A visitor that collects identifier texts in traversal order.
#[derive(Debug, Default)]
pub struct IdentifierCollector {
    names: Vec<String>,
}

impl IdentifierCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected names.
    pub fn finish(self) -> Vec<String> {
        self.names
    }
}

impl Visitor for IdentifierCollector {
    fn visit_identifier(&mut self, ident: &Identifier) {
        self.names.push(ident.name.clone());
    }

    fn visit_identifier_type(&mut self, ty: &IdentifierType) {
        self.names.push(ty.name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn sample_function() -> Program {
        let mut program = Program::new(Span::dummy());
        let body = BlockStatement {
            statements: vec![Statement::Return(ReturnStatement {
                value: Some(Expression::binary(
                    Expression::identifier("x", Span::dummy()),
                    BinaryOperator::Add,
                    Expression::integer(1, Span::dummy()),
                    Span::dummy(),
                )),
                span: Span::dummy(),
            })],
            span: Span::dummy(),
        };
        program
            .declarations
            .push(Declaration::Function(FunctionDecl {
                name: Identifier::new("bump", Span::dummy()),
                generics: vec![],
                params: vec![Parameter {
                    name: Identifier::new("x", Span::dummy()),
                    ty: TypeRef::basic(BasicKind::Int, Span::dummy()),
                    default: None,
                    mutable: false,
                    span: Span::dummy(),
                }],
                return_type: Some(TypeRef::basic(BasicKind::Int, Span::dummy())),
                body,
                attributes: vec![],
                exported: false,
                span: Span::dummy(),
            }));
        program
    }

    #[test]
    fn test_print_function() {
        let rendered = print_program(&sample_function());
        assert_eq!(rendered, "func bump(x: int): int {\n  return (x + 1)\n}\n");
    }

    #[test]
    fn test_node_counter() {
        let program = sample_function();
        let mut counter = NodeCounter::new();
        counter.visit_program(&program);

        assert_eq!(counter.declarations, 1);
        assert_eq!(counter.statements, 1);
        // (x + 1), x, 1
        assert_eq!(counter.expressions, 3);
        // parameter type and return type
        assert_eq!(counter.types, 2);
    }

    #[test]
    fn test_identifier_collector() {
        let program = sample_function();
        let mut collector = IdentifierCollector::new();
        collector.visit_program(&program);
        let names = collector.finish();
        assert_eq!(names, vec!["bump", "x", "x"]);
    }
}
