//! Node shapes of the upstream parser tree.
//!
//! The parser is an external collaborator; these definitions are the
//! interface the bridge consumes and produces. The parser tree is richer
//! than the core tree: it models references, pointers, arrays, generics,
//! and function types structurally, keeps aliases and newtypes as distinct
//! declarations, carries operators as text, and has no character literal.

use crate::span::Span;

/// A named leaf in the parser tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserIdent {
    pub text: String,
    pub span: Span,
}

impl ParserIdent {
    /// Creates a new identifier leaf.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// The parser's root node.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserProgram {
    pub declarations: Vec<ParserDecl>,
    pub comments: Vec<ParserComment>,
    pub span: Span,
}

/// A comment the parser collected.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserComment {
    pub text: String,
    pub span: Span,
}

/// Top-level declaration forms of the parser tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserDecl {
    Function(ParserFunction),
    Variable(ParserVariable),
    /// A transparent type alias
    TypeAlias(ParserTypeDecl),
    /// A distinct wrapper type
    Newtype(ParserTypeDecl),
    Struct(ParserStruct),
    Enum(ParserEnum),
    Trait(ParserTrait),
    Impl(ParserImpl),
    Import(ParserImport),
    Export(ParserExport),
    /// Compile-time only; the bridge drops these
    Macro(ParserMacro),
    /// A statement the parser accepted at the top level
    Statement(ParserStmt),
}

impl ParserDecl {
    /// Returns the span of the declaration.
    pub fn span(&self) -> &Span {
        match self {
            ParserDecl::Function(f) => &f.span,
            ParserDecl::Variable(v) => &v.span,
            ParserDecl::TypeAlias(t) | ParserDecl::Newtype(t) => &t.span,
            ParserDecl::Struct(s) => &s.span,
            ParserDecl::Enum(e) => &e.span,
            ParserDecl::Trait(t) => &t.span,
            ParserDecl::Impl(i) => &i.span,
            ParserDecl::Import(i) => &i.span,
            ParserDecl::Export(e) => &e.span,
            ParserDecl::Macro(m) => &m.span,
            ParserDecl::Statement(s) => s.span(),
        }
    }
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserFunction {
    pub name: ParserIdent,
    pub generics: Vec<ParserGenericParam>,
    pub params: Vec<ParserParam>,
    pub return_type: Option<ParserType>,
    pub body: ParserBlock,
    pub attributes: Vec<ParserAttribute>,
    pub public: bool,
    pub span: Span,
}

/// A function or method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserParam {
    pub name: ParserIdent,
    pub ty: ParserType,
    pub default: Option<ParserExpr>,
    pub mutable: bool,
    pub span: Span,
}

/// An attribute such as `#[inline]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserAttribute {
    pub name: String,
    pub args: Vec<String>,
    pub span: Span,
}

/// Binding kind of a parser variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserVariableKind {
    Let,
    Var,
    Const,
}

/// A variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserVariable {
    pub name: ParserIdent,
    pub ty: Option<ParserType>,
    pub initializer: Option<ParserExpr>,
    pub kind: ParserVariableKind,
    pub mutable: bool,
    pub public: bool,
    pub span: Span,
}

/// Body shared by alias and newtype declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserTypeDecl {
    pub name: ParserIdent,
    pub generics: Vec<ParserGenericParam>,
    pub target: ParserType,
    pub public: bool,
    pub span: Span,
}

/// A struct definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserStruct {
    pub name: ParserIdent,
    pub generics: Vec<ParserGenericParam>,
    pub fields: Vec<ParserField>,
    pub public: bool,
    pub span: Span,
}

/// A struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserField {
    pub name: ParserIdent,
    pub ty: ParserType,
    pub span: Span,
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserEnum {
    pub name: ParserIdent,
    pub generics: Vec<ParserGenericParam>,
    pub variants: Vec<ParserEnumVariant>,
    pub public: bool,
    pub span: Span,
}

/// An enum variant with optional tuple fields and discriminant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserEnumVariant {
    pub name: ParserIdent,
    pub fields: Vec<ParserType>,
    pub discriminant: Option<ParserExpr>,
    pub span: Span,
}

/// A trait definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserTrait {
    pub name: ParserIdent,
    pub generics: Vec<ParserGenericParam>,
    pub methods: Vec<ParserTraitMethod>,
    pub associated_types: Vec<ParserAssociatedType>,
    pub public: bool,
    pub span: Span,
}

/// A bodiless trait method signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserTraitMethod {
    pub name: ParserIdent,
    pub params: Vec<ParserParam>,
    pub return_type: Option<ParserType>,
    pub span: Span,
}

/// An associated type inside a trait.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserAssociatedType {
    pub name: ParserIdent,
    pub bounds: Vec<ParserType>,
    pub span: Span,
}

/// An impl block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserImpl {
    pub trait_type: Option<ParserType>,
    pub target_type: ParserType,
    pub generics: Vec<ParserGenericParam>,
    pub where_clauses: Vec<ParserWherePredicate>,
    pub methods: Vec<ParserFunction>,
    pub span: Span,
}

/// One `where` predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserWherePredicate {
    pub target: ParserType,
    pub bounds: Vec<ParserType>,
    pub span: Span,
}

/// Kind payload of a generic parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserGenericParamKind {
    Type { bounds: Vec<ParserType> },
    Const { ty: ParserType },
    Lifetime,
}

/// A generic parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserGenericParam {
    pub name: ParserIdent,
    pub kind: ParserGenericParamKind,
    pub span: Span,
}

/// An import declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserImport {
    pub path: Vec<ParserIdent>,
    pub alias: Option<ParserIdent>,
    pub span: Span,
}

/// An export declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserExport {
    pub name: ParserIdent,
    pub span: Span,
}

/// A macro definition or invocation; compile-time only.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserMacro {
    pub name: ParserIdent,
    pub body: String,
    pub span: Span,
}

/// Statement forms of the parser tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserStmt {
    Block(ParserBlock),
    Expression {
        expression: ParserExpr,
        span: Span,
    },
    Return {
        value: Option<ParserExpr>,
        span: Span,
    },
    If {
        condition: ParserExpr,
        then_branch: ParserBlock,
        else_branch: Option<Box<ParserStmt>>,
        span: Span,
    },
    While {
        condition: ParserExpr,
        body: ParserBlock,
        span: Span,
    },
    Variable(ParserVariable),
}

impl ParserStmt {
    /// Returns the span of the statement.
    pub fn span(&self) -> &Span {
        match self {
            ParserStmt::Block(b) => &b.span,
            ParserStmt::Expression { span, .. } => span,
            ParserStmt::Return { span, .. } => span,
            ParserStmt::If { span, .. } => span,
            ParserStmt::While { span, .. } => span,
            ParserStmt::Variable(v) => &v.span,
        }
    }
}

/// A brace-delimited statement sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserBlock {
    pub statements: Vec<ParserStmt>,
    pub span: Span,
}

/// Expression forms of the parser tree. Operators travel as text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserExpr {
    Identifier(ParserIdent),
    Literal(ParserLiteral),
    Binary {
        left: Box<ParserExpr>,
        op: String,
        right: Box<ParserExpr>,
        span: Span,
    },
    Unary {
        op: String,
        operand: Box<ParserExpr>,
        span: Span,
    },
    Call {
        callee: Box<ParserExpr>,
        arguments: Vec<ParserExpr>,
        span: Span,
    },
    Member {
        object: Box<ParserExpr>,
        property: ParserIdent,
        span: Span,
    },
}

impl ParserExpr {
    /// Returns the span of the expression.
    pub fn span(&self) -> &Span {
        match self {
            ParserExpr::Identifier(i) => &i.span,
            ParserExpr::Literal(l) => &l.span,
            ParserExpr::Binary { span, .. } => span,
            ParserExpr::Unary { span, .. } => span,
            ParserExpr::Call { span, .. } => span,
            ParserExpr::Member { span, .. } => span,
        }
    }
}

/// A parser literal. There is no character kind; single characters arrive
/// as strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserLiteral {
    pub value: ParserLiteralValue,
    pub raw: String,
    pub span: Span,
}

/// Normalized parser literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserLiteralValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

/// Type forms of the parser tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserType {
    /// A plain named type, primitive or otherwise
    Basic {
        name: String,
        span: Span,
    },
    /// `&'l mut T`, `&T`
    Reference {
        inner: Box<ParserType>,
        /// Lifetime name without the tick; empty when elided
        lifetime: String,
        mutable: bool,
        span: Span,
    },
    /// `*mut T`, `*T`
    Pointer {
        inner: Box<ParserType>,
        mutable: bool,
        span: Span,
    },
    /// `[T]`, `[T; N]`
    Array {
        element: Box<ParserType>,
        /// Raw size text; absent for dynamic arrays
        size: Option<String>,
        span: Span,
    },
    /// `B<T1, T2, ...>`
    Generic {
        base: String,
        args: Vec<ParserType>,
        span: Span,
    },
    /// `(x: T1, y: T2) -> R`
    Function {
        params: Vec<(String, ParserType)>,
        return_type: Box<ParserType>,
        span: Span,
    },
}

impl ParserType {
    /// Returns the span of the type.
    pub fn span(&self) -> &Span {
        match self {
            ParserType::Basic { span, .. } => span,
            ParserType::Reference { span, .. } => span,
            ParserType::Pointer { span, .. } => span,
            ParserType::Array { span, .. } => span,
            ParserType::Generic { span, .. } => span,
            ParserType::Function { span, .. } => span,
        }
    }
}
