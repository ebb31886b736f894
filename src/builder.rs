//! Fluent construction of well-formed subtrees.
//!
//! Every builder step is total: given valid inputs it cannot produce a
//! malformed node. A [`FunctionBuilder`] always yields a function with a
//! name and a body; a [`ProgramBuilder`] threads declarations through one
//! mutable context. Synthesized nodes take the default span the builder
//! was created with; [`Span::dummy`] is the usual choice in tests.
//! Builders own their subtree exclusively until `build()` returns it.
//!
//! # Example
//!
//! ```rust
//! use vela_ast::ast::{BasicKind, BinaryOperator, Expression, TypeRef};
//! use vela_ast::builder::{FunctionBuilder, ProgramBuilder};
//! use vela_ast::Span;
//!
//! let span = Span::dummy();
//! let program = ProgramBuilder::new(span.clone())
//!     .function(
//!         FunctionBuilder::new("double", span.clone())
//!             .param("x", TypeRef::basic(BasicKind::Int, span.clone()))
//!             .returns(TypeRef::basic(BasicKind::Int, span.clone()))
//!             .returning(Expression::binary(
//!                 Expression::identifier("x", span.clone()),
//!                 BinaryOperator::Mul,
//!                 Expression::integer(2, span.clone()),
//!                 span.clone(),
//!             ))
//!             .build(),
//!     )
//!     .build();
//! assert_eq!(program.declarations.len(), 1);
//! ```

use crate::ast::*;
use crate::span::Span;

/// Builds a [`Program`] by accumulating declarations.
pub struct ProgramBuilder {
    default_span: Span,
    declarations: Vec<Declaration>,
    comments: Vec<Comment>,
}

impl ProgramBuilder {
    /// Creates a builder whose synthesized nodes carry `default_span`.
    pub fn new(default_span: Span) -> Self {
        Self {
            default_span,
            declarations: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Appends any declaration.
    pub fn declaration(mut self, decl: Declaration) -> Self {
        self.declarations.push(decl);
        self
    }

    /// Appends a function declaration.
    pub fn function(self, func: FunctionDecl) -> Self {
        self.declaration(Declaration::Function(func))
    }

    /// Appends a variable declaration.
    pub fn variable(self, var: VariableDecl) -> Self {
        self.declaration(Declaration::Variable(var))
    }

    /// Appends a comment.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(Comment {
            text: text.into(),
            span: self.default_span.clone(),
        });
        self
    }

    /// Finishes the program.
    pub fn build(self) -> Program {
        Program {
            declarations: self.declarations,
            comments: self.comments,
            span: self.default_span,
        }
    }
}

/// Builds a [`FunctionDecl`]; the result always has a name and a body.
pub struct FunctionBuilder {
    name: String,
    default_span: Span,
    generics: Vec<GenericParam>,
    params: Vec<Parameter>,
    return_type: Option<TypeRef>,
    statements: Vec<Statement>,
    attributes: Vec<Attribute>,
    exported: bool,
}

impl FunctionBuilder {
    /// Creates a builder for a function called `name`.
    pub fn new(name: impl Into<String>, default_span: Span) -> Self {
        Self {
            name: name.into(),
            default_span,
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
            statements: Vec::new(),
            attributes: Vec::new(),
            exported: false,
        }
    }

    /// Adds an immutable parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        let span = self.default_span.clone();
        self.params.push(Parameter {
            name: Identifier::new(name, span.clone()),
            ty,
            default: None,
            mutable: false,
            span,
        });
        self
    }

    /// Adds a parameter with a default value.
    pub fn param_with_default(
        mut self,
        name: impl Into<String>,
        ty: TypeRef,
        default: Expression,
    ) -> Self {
        let span = self.default_span.clone();
        self.params.push(Parameter {
            name: Identifier::new(name, span.clone()),
            ty,
            default: Some(default),
            mutable: false,
            span,
        });
        self
    }

    /// Adds a generic type parameter without bounds.
    pub fn generic(mut self, name: impl Into<String>) -> Self {
        let span = self.default_span.clone();
        self.generics.push(GenericParam {
            name: Identifier::new(name, span.clone()),
            kind: GenericParamKind::Type { bounds: vec![] },
            span,
        });
        self
    }

    /// Sets the return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Appends a body statement.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.statements.push(stmt);
        self
    }

    /// Appends `return expr` to the body.
    pub fn returning(mut self, expr: Expression) -> Self {
        let span = self.default_span.clone();
        self.statements.push(Statement::Return(ReturnStatement {
            value: Some(expr),
            span,
        }));
        self
    }

    /// Attaches an attribute.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        let span = self.default_span.clone();
        self.attributes.push(Attribute {
            name: name.into(),
            args: Vec::new(),
            span,
        });
        self
    }

    /// Marks the function exported.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Finishes the function.
    pub fn build(self) -> FunctionDecl {
        let span = self.default_span;
        FunctionDecl {
            name: Identifier::new(self.name, span.clone()),
            generics: self.generics,
            params: self.params,
            return_type: self.return_type,
            body: BlockStatement {
                statements: self.statements,
                span: span.clone(),
            },
            attributes: self.attributes,
            exported: self.exported,
            span,
        }
    }
}

/// Builds a [`VariableDecl`].
pub struct VariableBuilder {
    name: String,
    default_span: Span,
    kind: VariableKind,
    declared_type: Option<TypeRef>,
    initializer: Option<Expression>,
    mutable: bool,
    exported: bool,
}

impl VariableBuilder {
    /// Creates a builder for a binding of the given kind.
    pub fn new(kind: VariableKind, name: impl Into<String>, default_span: Span) -> Self {
        Self {
            name: name.into(),
            default_span,
            kind,
            declared_type: None,
            initializer: None,
            mutable: kind == VariableKind::Var,
            exported: false,
        }
    }

    /// Sets the declared type.
    pub fn typed(mut self, ty: TypeRef) -> Self {
        self.declared_type = Some(ty);
        self
    }

    /// Sets the initializer expression.
    pub fn init(mut self, expr: Expression) -> Self {
        self.initializer = Some(expr);
        self
    }

    /// Marks the binding exported.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Finishes the variable declaration. A `const` is never mutable.
    pub fn build(self) -> VariableDecl {
        let span = self.default_span;
        VariableDecl {
            name: Identifier::new(self.name, span.clone()),
            declared_type: self.declared_type,
            initializer: self.initializer,
            kind: self.kind,
            mutable: self.mutable && self.kind != VariableKind::Const,
            exported: self.exported,
            span,
        }
    }
}

/// Builds a [`BlockStatement`].
pub struct BlockBuilder {
    default_span: Span,
    statements: Vec<Statement>,
}

impl BlockBuilder {
    /// Creates an empty block builder.
    pub fn new(default_span: Span) -> Self {
        Self {
            default_span,
            statements: Vec::new(),
        }
    }

    /// Appends a statement.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.statements.push(stmt);
        self
    }

    /// Appends an expression statement.
    pub fn expression(mut self, expr: Expression) -> Self {
        let span = self.default_span.clone();
        self.statements.push(Statement::Expression(ExpressionStatement {
            expression: expr,
            span,
        }));
        self
    }

    /// Appends `return expr`.
    pub fn returning(mut self, expr: Expression) -> Self {
        let span = self.default_span.clone();
        self.statements.push(Statement::Return(ReturnStatement {
            value: Some(expr),
            span,
        }));
        self
    }

    /// Finishes the block.
    pub fn build(self) -> BlockStatement {
        BlockStatement {
            statements: self.statements,
            span: self.default_span,
        }
    }
}
