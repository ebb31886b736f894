//! Abstract Syntax Tree definitions for the Vela language.
//!
//! This module defines the core tree model consumed by every later compiler
//! phase: declarations, statements, expressions, and type references, each
//! carrying a [`Span`].
//!
//! # Structure
//!
//! Nodes form a closed algebra of four disjoint groups:
//!
//! | Group | Variants |
//! |-------|----------|
//! | [`Declaration`] | Function, Variable, Type, Struct, Enum, Trait, Impl, Import, Export |
//! | [`Statement`] | Block, Expression, Return, If, While, Variable |
//! | [`Expression`] | Identifier, Literal, Binary, Unary, Call, Member |
//! | [`TypeRef`] | Basic, Identifier |
//!
//! A variable declaration inhabits both the declaration and the statement
//! group; that dual role is the only overlap. Ownership is strictly
//! tree-shaped: no back-pointers, no shared subtrees.
//!
//! # Example
//!
//! ```rust
//! use vela_ast::ast::{BinaryOperator, Expression};
//! use vela_ast::Span;
//!
//! let sum = Expression::binary(
//!     Expression::integer(1, Span::dummy()),
//!     BinaryOperator::Add,
//!     Expression::integer(2, Span::dummy()),
//!     Span::dummy(),
//! );
//! assert_eq!(sum.span(), &Span::dummy());
//! ```

use std::fmt;

use crate::span::Span;

/// A source comment attached to the program.
///
/// Comments are trivia: passes ignore them and they do not survive the
/// parser bridge round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Comment text without delimiters
    pub text: String,
    /// Source location
    pub span: Span,
}

/// An attribute attached to a declaration, e.g. `#[inline]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Raw argument texts, in source order
    pub args: Vec<String>,
    /// Source location
    pub span: Span,
}

/// The root node: one translation unit.
///
/// Holds the ordered top-level declarations plus the comments the parser
/// collected. A program is uniquely owned; a pass borrows it mutably for
/// the duration of a single `apply` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level declarations in source order
    pub declarations: Vec<Declaration>,
    /// Comments collected by the parser
    pub comments: Vec<Comment>,
    /// Span covering the whole unit
    pub span: Span,
}

impl Program {
    /// Creates an empty program covering `span`.
    pub fn new(span: Span) -> Self {
        Self {
            declarations: Vec::new(),
            comments: Vec::new(),
            span,
        }
    }

    /// Returns true if the program has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// A named reference to a binding, type, or member.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier text (never empty in a valid tree)
    pub name: String,
    /// Source location
    pub span: Span,
}

impl Identifier {
    /// Creates a new identifier.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

// === Declarations ===

/// The top-level declaration forms of Vela.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A function definition
    Function(FunctionDecl),
    /// A variable binding (`let`, `var`, or `const`)
    Variable(VariableDecl),
    /// A type alias or newtype
    Type(TypeDecl),
    /// A struct definition
    Struct(StructDecl),
    /// An enum definition
    Enum(EnumDecl),
    /// A trait definition
    Trait(TraitDecl),
    /// An impl block
    Impl(ImplDecl),
    /// An import of another module's items
    Import(ImportDecl),
    /// A re-export of a local item
    Export(ExportDecl),
}

impl Declaration {
    /// Returns the declared name, where the form has one.
    ///
    /// Impl blocks and imports have no single name of their own.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Function(f) => Some(&f.name.name),
            Declaration::Variable(v) => Some(&v.name.name),
            Declaration::Type(t) => Some(&t.name.name),
            Declaration::Struct(s) => Some(&s.name.name),
            Declaration::Enum(e) => Some(&e.name.name),
            Declaration::Trait(t) => Some(&t.name.name),
            Declaration::Impl(_) => None,
            Declaration::Import(_) => None,
            Declaration::Export(e) => Some(&e.name.name),
        }
    }

    /// Returns the span of the declaration.
    pub fn span(&self) -> &Span {
        match self {
            Declaration::Function(f) => &f.span,
            Declaration::Variable(v) => &v.span,
            Declaration::Type(t) => &t.span,
            Declaration::Struct(s) => &s.span,
            Declaration::Enum(e) => &e.span,
            Declaration::Trait(t) => &t.span,
            Declaration::Impl(i) => &i.span,
            Declaration::Import(i) => &i.span,
            Declaration::Export(e) => &e.span,
        }
    }

    /// Collects every identifier text referenced in this declaration.
    pub fn collect_identifiers(&self) -> Vec<String> {
        let mut collector = crate::print::IdentifierCollector::new();
        crate::visit::walk_declaration(&mut collector, self);
        collector.finish()
    }
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// Function name
    pub name: Identifier,
    /// Generic parameters, in source order
    pub generics: Vec<GenericParam>,
    /// Parameters, in source order
    pub params: Vec<Parameter>,
    /// Optional return type (absent means void)
    pub return_type: Option<TypeRef>,
    /// Function body. Every free-standing and impl function has one;
    /// bodiless trait signatures are [`TraitMethod`]s instead.
    pub body: BlockStatement,
    /// Attributes attached to the function
    pub attributes: Vec<Attribute>,
    /// True if the function is exported from its module
    pub exported: bool,
    /// Source location
    pub span: Span,
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name
    pub name: Identifier,
    /// Parameter type
    pub ty: TypeRef,
    /// Optional default-value expression
    pub default: Option<Expression>,
    /// True if the parameter binding is mutable
    pub mutable: bool,
    /// Source location
    pub span: Span,
}

/// Binding kind of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// Immutable binding
    Let,
    /// Mutable binding
    Var,
    /// Compile-time constant; always has an initializer
    Const,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Let => write!(f, "let"),
            VariableKind::Var => write!(f, "var"),
            VariableKind::Const => write!(f, "const"),
        }
    }
}

/// A variable declaration.
///
/// This node plays a dual role: it is a [`Declaration`] at the top level
/// and a [`Statement`] inside blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    /// Variable name
    pub name: Identifier,
    /// Optional declared type
    pub declared_type: Option<TypeRef>,
    /// Optional initializer; mandatory for `const`
    pub initializer: Option<Expression>,
    /// Binding kind
    pub kind: VariableKind,
    /// True if the binding can be reassigned (`const` is never mutable)
    pub mutable: bool,
    /// True if the variable is exported from its module
    pub exported: bool,
    /// Source location
    pub span: Span,
}

/// A type alias (`alias == true`) or newtype (`alias == false`).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    /// Declared type name
    pub name: Identifier,
    /// Generic parameters
    pub generics: Vec<GenericParam>,
    /// The aliased or wrapped type
    pub target: TypeRef,
    /// True for a transparent alias, false for a distinct newtype
    pub alias: bool,
    /// True if exported
    pub exported: bool,
    /// Source location
    pub span: Span,
}

/// A struct definition.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    /// Struct name
    pub name: Identifier,
    /// Generic parameters
    pub generics: Vec<GenericParam>,
    /// Fields in declaration order
    pub fields: Vec<StructField>,
    /// True if exported
    pub exported: bool,
    /// Source location
    pub span: Span,
}

/// A single struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    /// Field name
    pub name: Identifier,
    /// Field type
    pub ty: TypeRef,
    /// Source location
    pub span: Span,
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    /// Enum name
    pub name: Identifier,
    /// Generic parameters
    pub generics: Vec<GenericParam>,
    /// Variants in declaration order
    pub variants: Vec<EnumVariant>,
    /// True if exported
    pub exported: bool,
    /// Source location
    pub span: Span,
}

/// A single enum variant, optionally carrying tuple fields and a
/// discriminant expression.
///
/// Discriminants must fold to integer literals.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    /// Variant name
    pub name: Identifier,
    /// Tuple field types, empty for unit variants
    pub fields: Vec<TypeRef>,
    /// Optional discriminant expression
    pub discriminant: Option<Expression>,
    /// Source location
    pub span: Span,
}

/// A trait definition: method signatures plus associated types.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitDecl {
    /// Trait name
    pub name: Identifier,
    /// Generic parameters
    pub generics: Vec<GenericParam>,
    /// Method signatures in declaration order
    pub methods: Vec<TraitMethod>,
    /// Associated types
    pub associated_types: Vec<AssociatedType>,
    /// True if exported
    pub exported: bool,
    /// Source location
    pub span: Span,
}

/// A bodiless method signature inside a trait.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitMethod {
    /// Method name
    pub name: Identifier,
    /// Parameters
    pub params: Vec<Parameter>,
    /// Optional return type
    pub return_type: Option<TypeRef>,
    /// Source location
    pub span: Span,
}

/// An associated type inside a trait.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociatedType {
    /// Associated type name
    pub name: Identifier,
    /// Bounds the implementor must satisfy
    pub bounds: Vec<TypeRef>,
    /// Source location
    pub span: Span,
}

/// An impl block, either inherent (`trait_type` absent) or a trait impl.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplDecl {
    /// The implemented trait, if any
    pub trait_type: Option<TypeRef>,
    /// The type the impl targets
    pub target_type: TypeRef,
    /// Generic parameters
    pub generics: Vec<GenericParam>,
    /// Where-clause predicates
    pub where_clauses: Vec<WherePredicate>,
    /// Methods in declaration order
    pub methods: Vec<FunctionDecl>,
    /// Source location
    pub span: Span,
}

/// One `where` predicate: a type and the bounds it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct WherePredicate {
    /// Constrained type
    pub target: TypeRef,
    /// Required bounds
    pub bounds: Vec<TypeRef>,
    /// Source location
    pub span: Span,
}

/// Kind-specific payload of a generic parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericParamKind {
    /// A type parameter with optional bounds
    Type {
        /// Bounds the argument must satisfy
        bounds: Vec<TypeRef>,
    },
    /// A const parameter with its value type
    Const {
        /// Type of the const argument
        ty: TypeRef,
    },
    /// A lifetime parameter
    Lifetime,
}

/// A generic parameter on a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericParam {
    /// Parameter name (lifetime names carry no leading tick)
    pub name: Identifier,
    /// Kind and kind-specific payload
    pub kind: GenericParamKind,
    /// Source location
    pub span: Span,
}

/// An import declaration: `import a.b.c [as d]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    /// Dotted module path
    pub path: Vec<Identifier>,
    /// Optional local alias
    pub alias: Option<Identifier>,
    /// Source location
    pub span: Span,
}

/// An export declaration naming a local item.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDecl {
    /// The exported item's name
    pub name: Identifier,
    /// Source location
    pub span: Span,
}

// === Statements ===

/// The statement forms of Vela.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested block
    Block(BlockStatement),
    /// An expression evaluated for effect
    Expression(ExpressionStatement),
    /// Return from the enclosing function
    Return(ReturnStatement),
    /// Conditional
    If(IfStatement),
    /// Pre-checked loop
    While(WhileStatement),
    /// A local variable declaration
    Variable(VariableDecl),
}

impl Statement {
    /// Returns the span of the statement.
    pub fn span(&self) -> &Span {
        match self {
            Statement::Block(b) => &b.span,
            Statement::Expression(e) => &e.span,
            Statement::Return(r) => &r.span,
            Statement::If(i) => &i.span,
            Statement::While(w) => &w.span,
            Statement::Variable(v) => &v.span,
        }
    }
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements in source order
    pub statements: Vec<Statement>,
    /// Source location
    pub span: Span,
}

impl BlockStatement {
    /// Creates an empty block covering `span`.
    pub fn new(span: Span) -> Self {
        Self {
            statements: Vec::new(),
            span,
        }
    }
}

/// An expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The evaluated expression
    pub expression: Expression,
    /// Source location
    pub span: Span,
}

/// A return statement with an optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// Returned value, if any
    pub value: Option<Expression>,
    /// Source location
    pub span: Span,
}

/// An if statement.
///
/// The else branch is any statement so that `else if` chains nest without
/// a dedicated node.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// Condition expression
    pub condition: Expression,
    /// Then branch
    pub then_branch: BlockStatement,
    /// Optional else branch (a block or a nested if)
    pub else_branch: Option<Box<Statement>>,
    /// Source location
    pub span: Span,
}

/// A while loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    /// Loop condition
    pub condition: Expression,
    /// Loop body
    pub body: BlockStatement,
    /// Source location
    pub span: Span,
}

// === Expressions ===

/// The expression forms of Vela.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A name reference
    Identifier(Identifier),
    /// A literal constant
    Literal(Literal),
    /// A binary operation
    Binary(BinaryExpr),
    /// A unary operation
    Unary(UnaryExpr),
    /// A function or method call
    Call(CallExpr),
    /// A member access
    Member(MemberExpr),
}

impl Expression {
    /// Returns the span of the expression.
    pub fn span(&self) -> &Span {
        match self {
            Expression::Identifier(i) => &i.span,
            Expression::Literal(l) => &l.span,
            Expression::Binary(b) => &b.span,
            Expression::Unary(u) => &u.span,
            Expression::Call(c) => &c.span,
            Expression::Member(m) => &m.span,
        }
    }

    /// Creates an identifier expression.
    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        Expression::Identifier(Identifier::new(name, span))
    }

    /// Creates an integer literal expression.
    pub fn integer(value: i64, span: Span) -> Self {
        Expression::Literal(Literal::integer(value, span))
    }

    /// Creates a float literal expression.
    pub fn float(value: f64, span: Span) -> Self {
        Expression::Literal(Literal::float(value, span))
    }

    /// Creates a string literal expression.
    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Expression::Literal(Literal::string(value, span))
    }

    /// Creates a boolean literal expression.
    pub fn boolean(value: bool, span: Span) -> Self {
        Expression::Literal(Literal::boolean(value, span))
    }

    /// Creates a binary expression.
    pub fn binary(left: Expression, op: BinaryOperator, right: Expression, span: Span) -> Self {
        Expression::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span,
        })
    }

    /// Creates a unary expression.
    pub fn unary(op: UnaryOperator, operand: Expression, span: Span) -> Self {
        Expression::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
            span,
        })
    }

    /// Creates a call expression.
    pub fn call(callee: Expression, arguments: Vec<Expression>, span: Span) -> Self {
        Expression::Call(CallExpr {
            callee: Box::new(callee),
            arguments,
            span,
        })
    }

    /// Returns the literal payload if this expression is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Left operand
    pub left: Box<Expression>,
    /// Operator
    pub op: BinaryOperator,
    /// Right operand
    pub right: Box<Expression>,
    /// Source location
    pub span: Span,
}

/// A unary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    /// Operator
    pub op: UnaryOperator,
    /// Operand
    pub operand: Box<Expression>,
    /// Source location
    pub span: Span,
}

/// A call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// The callee expression
    pub callee: Box<Expression>,
    /// Arguments in source order
    pub arguments: Vec<Expression>,
    /// Source location
    pub span: Span,
}

/// A member access expression, `object.property`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    /// The accessed object
    pub object: Box<Expression>,
    /// The member name
    pub property: Identifier,
    /// Source location
    pub span: Span,
}

// === Literals ===

/// Discriminant of a literal's value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// Signed 64-bit integer
    Integer,
    /// IEEE-754 double
    Float,
    /// UTF-8 string
    String,
    /// Boolean
    Boolean,
    /// Unicode scalar value
    Character,
    /// The null marker
    Null,
}

/// Normalized literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Signed 64-bit integer
    Integer(i64),
    /// IEEE-754 double
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean
    Boolean(bool),
    /// Single Unicode scalar value
    Character(char),
    /// The distinct null marker
    Null,
}

impl LiteralValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralValue::Integer(_) => LiteralKind::Integer,
            LiteralValue::Float(_) => LiteralKind::Float,
            LiteralValue::String(_) => LiteralKind::String,
            LiteralValue::Boolean(_) => LiteralKind::Boolean,
            LiteralValue::Character(_) => LiteralKind::Character,
            LiteralValue::Null => LiteralKind::Null,
        }
    }
}

/// A literal constant: normalized value plus the raw text the parser saw.
///
/// Folding produces fresh literals whose `raw` is regenerated from the
/// value and whose span is the span of the whole folded expression, keeping
/// diagnostics anchored where the source construct was.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// Normalized value
    pub value: LiteralValue,
    /// Textual form from the source (or regenerated after folding)
    pub raw: String,
    /// Source location
    pub span: Span,
}

impl Literal {
    /// Creates an integer literal with a decimal raw form.
    pub fn integer(value: i64, span: Span) -> Self {
        Self {
            raw: value.to_string(),
            value: LiteralValue::Integer(value),
            span,
        }
    }

    /// Creates a float literal with a shortest-roundtrip raw form.
    pub fn float(value: f64, span: Span) -> Self {
        Self {
            raw: format!("{}", value),
            value: LiteralValue::Float(value),
            span,
        }
    }

    /// Creates a string literal; the raw form carries quotes.
    pub fn string(value: impl Into<String>, span: Span) -> Self {
        let value = value.into();
        Self {
            raw: format!("\"{}\"", value),
            value: LiteralValue::String(value),
            span,
        }
    }

    /// Creates a boolean literal.
    pub fn boolean(value: bool, span: Span) -> Self {
        Self {
            raw: value.to_string(),
            value: LiteralValue::Boolean(value),
            span,
        }
    }

    /// Creates a character literal; the raw form carries single quotes.
    pub fn character(value: char, span: Span) -> Self {
        Self {
            raw: format!("'{}'", value),
            value: LiteralValue::Character(value),
            span,
        }
    }

    /// Creates the null literal.
    pub fn null(span: Span) -> Self {
        Self {
            raw: "null".to_string(),
            value: LiteralValue::Null,
            span,
        }
    }

    /// Returns the kind of this literal.
    pub fn kind(&self) -> LiteralKind {
        self.value.kind()
    }
}

// === Types ===

/// The type-reference forms of Vela.
///
/// The core tree models only primitives and named references; the bridge
/// encodes richer parser types (references, pointers, arrays, generics,
/// function types) as [`IdentifierType`] names in canonical textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// A built-in primitive type
    Basic(BasicType),
    /// A named type reference
    Identifier(IdentifierType),
}

impl TypeRef {
    /// Returns the span of the type reference.
    pub fn span(&self) -> &Span {
        match self {
            TypeRef::Basic(b) => &b.span,
            TypeRef::Identifier(i) => &i.span,
        }
    }

    /// Creates a basic type reference.
    pub fn basic(kind: BasicKind, span: Span) -> Self {
        TypeRef::Basic(BasicType { kind, span })
    }

    /// Creates a named type reference.
    pub fn named(name: impl Into<String>, span: Span) -> Self {
        TypeRef::Identifier(IdentifierType {
            name: name.into(),
            span,
        })
    }
}

/// A built-in primitive type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicType {
    /// Which primitive
    pub kind: BasicKind,
    /// Source location
    pub span: Span,
}

/// The primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicKind {
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// Unicode scalar
    Char,
    /// The empty type
    Void,
}

impl BasicKind {
    /// The primitive's source-level name.
    pub fn name(&self) -> &'static str {
        match self {
            BasicKind::Int => "int",
            BasicKind::Float => "float",
            BasicKind::String => "string",
            BasicKind::Bool => "bool",
            BasicKind::Char => "char",
            BasicKind::Void => "void",
        }
    }

    /// Looks a primitive up by its source-level name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(BasicKind::Int),
            "float" => Some(BasicKind::Float),
            "string" => Some(BasicKind::String),
            "bool" => Some(BasicKind::Bool),
            "char" => Some(BasicKind::Char),
            "void" => Some(BasicKind::Void),
            _ => None,
        }
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierType {
    /// The referenced type name (possibly a canonical encoded form)
    pub name: String,
    /// Source location
    pub span: Span,
}

// === Operators ===

/// Binary operators, including assignment and compound assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition `+`
    Add,
    /// Subtraction `-`
    Sub,
    /// Multiplication `*`
    Mul,
    /// Division `/`
    Div,
    /// Modulo `%`
    Mod,
    /// Exponentiation `**`
    Pow,
    /// Equality `==`
    Eq,
    /// Inequality `!=`
    Ne,
    /// Less than `<`
    Lt,
    /// Less than or equal `<=`
    Le,
    /// Greater than `>`
    Gt,
    /// Greater than or equal `>=`
    Ge,
    /// Logical and `&&`
    And,
    /// Logical or `||`
    Or,
    /// Bitwise and `&`
    BitAnd,
    /// Bitwise or `|`
    BitOr,
    /// Bitwise xor `^`
    BitXor,
    /// Left shift `<<`
    Shl,
    /// Right shift `>>`
    Shr,
    /// Assignment `=`
    Assign,
    /// Compound add `+=`
    AddAssign,
    /// Compound subtract `-=`
    SubAssign,
    /// Compound multiply `*=`
    MulAssign,
    /// Compound divide `/=`
    DivAssign,
    /// Compound modulo `%=`
    ModAssign,
}

impl BinaryOperator {
    /// The operator's canonical text form.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Pow => "**",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
            BinaryOperator::Assign => "=",
            BinaryOperator::AddAssign => "+=",
            BinaryOperator::SubAssign => "-=",
            BinaryOperator::MulAssign => "*=",
            BinaryOperator::DivAssign => "/=",
            BinaryOperator::ModAssign => "%=",
        }
    }

    /// Parses an operator from its canonical text.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            "%" => Some(BinaryOperator::Mod),
            "**" => Some(BinaryOperator::Pow),
            "==" => Some(BinaryOperator::Eq),
            "!=" => Some(BinaryOperator::Ne),
            "<" => Some(BinaryOperator::Lt),
            "<=" => Some(BinaryOperator::Le),
            ">" => Some(BinaryOperator::Gt),
            ">=" => Some(BinaryOperator::Ge),
            "&&" => Some(BinaryOperator::And),
            "||" => Some(BinaryOperator::Or),
            "&" => Some(BinaryOperator::BitAnd),
            "|" => Some(BinaryOperator::BitOr),
            "^" => Some(BinaryOperator::BitXor),
            "<<" => Some(BinaryOperator::Shl),
            ">>" => Some(BinaryOperator::Shr),
            "=" => Some(BinaryOperator::Assign),
            "+=" => Some(BinaryOperator::AddAssign),
            "-=" => Some(BinaryOperator::SubAssign),
            "*=" => Some(BinaryOperator::MulAssign),
            "/=" => Some(BinaryOperator::DivAssign),
            "%=" => Some(BinaryOperator::ModAssign),
            _ => None,
        }
    }

    /// Returns the plain operator a compound assignment expands to.
    pub fn compound_base(&self) -> Option<BinaryOperator> {
        match self {
            BinaryOperator::AddAssign => Some(BinaryOperator::Add),
            BinaryOperator::SubAssign => Some(BinaryOperator::Sub),
            BinaryOperator::MulAssign => Some(BinaryOperator::Mul),
            BinaryOperator::DivAssign => Some(BinaryOperator::Div),
            BinaryOperator::ModAssign => Some(BinaryOperator::Mod),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation `-`
    Neg,
    /// Logical not `!`
    Not,
    /// Bitwise not `~`
    BitNot,
}

impl UnaryOperator {
    /// The operator's canonical text form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Neg => "-",
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
        }
    }

    /// Parses a unary operator from its canonical text.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "-" => Some(UnaryOperator::Neg),
            "!" => Some(UnaryOperator::Not),
            "~" => Some(UnaryOperator::BitNot),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
