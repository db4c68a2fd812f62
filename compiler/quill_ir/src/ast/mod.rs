//! Syntax tree for Quill programs.
//!
//! The node set is closed: statements are `Stmt`, expressions are `Expr`,
//! and the interpreter matches on both exhaustively. Nodes own their
//! children (`Box`/`Vec`); the tree is never mutated after parsing, so the
//! interpreter can borrow function declarations straight out of it.

use std::fmt;

use crate::{LiteralKind, Token, TokenType};

/// A brace-delimited statement list.
pub type Block = Vec<Stmt>;

/// Declared type of a variable or parameter (`int`, `str` or `bool`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSpecifier {
    kind: LiteralKind,
    token: Token,
}

impl TypeSpecifier {
    /// Wrap a type keyword token. Returns `None` for any other token.
    pub fn new(token: Token) -> Option<Self> {
        let kind = match token.kind {
            TokenType::IntType => LiteralKind::Int,
            TokenType::StrType => LiteralKind::Str,
            TokenType::BoolType => LiteralKind::Bool,
            _ => return None,
        };
        Some(TypeSpecifier { kind, token })
    }

    /// The literal kind a value must have to be bound under this type.
    #[inline]
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// A name occurrence: a variable read, an assignment target, a parameter
/// or a function name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
}

impl Identifier {
    #[inline]
    pub fn new(token: Token) -> Self {
        Identifier { token }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.token.literal
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.token.line
    }
}

/// A constant value.
///
/// The token type is always one of the constant categories; the
/// constructors are the only way to build one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    kind: LiteralKind,
    token: Token,
}

impl Literal {
    /// Wrap a constant token. Returns `None` for non-constant tokens.
    pub fn from_token(token: Token) -> Option<Self> {
        let kind = token.kind.literal_kind()?;
        Some(Literal { kind, token })
    }

    pub fn int(value: i64, line: usize) -> Self {
        Literal {
            kind: LiteralKind::Int,
            token: Token::new(TokenType::IntConstant, value.to_string(), line),
        }
    }

    pub fn boolean(value: bool, line: usize) -> Self {
        let (kind, text) = if value {
            (TokenType::True, "true")
        } else {
            (TokenType::False, "false")
        };
        Literal {
            kind: LiteralKind::Bool,
            token: Token::new(kind, text, line),
        }
    }

    pub fn string(value: impl Into<String>, line: usize) -> Self {
        Literal {
            kind: LiteralKind::Str,
            token: Token::new(TokenType::StringConstant, value, line),
        }
    }

    /// An integer constant from its decimal text, which may exceed `i64`.
    pub fn int_text(text: impl Into<String>, line: usize) -> Self {
        Literal {
            kind: LiteralKind::Int,
            token: Token::new(TokenType::IntConstant, text, line),
        }
    }

    #[inline]
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// The textual value. All runtime semantics are defined on this text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.token.literal
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.token.line
    }

    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::Str => write!(f, "\"{}\"", self.text()),
            _ => f.write_str(self.text()),
        }
    }
}

/// `left op right`. The operator stays a token; the interpreter maps it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// `name(args...)`, usable as expression or statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionCall {
    pub id: Identifier,
    pub args: Vec<Expr>,
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Binary(Binary),
    Literal(Literal),
    Identifier(Identifier),
    Call(FunctionCall),
}

impl Expr {
    /// Line of the token that best locates this expression.
    pub fn line(&self) -> usize {
        match self {
            Expr::Binary(binary) => binary.operator.line,
            Expr::Literal(literal) => literal.line(),
            Expr::Identifier(id) => id.line(),
            Expr::Call(call) => call.id.line(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.left, binary.operator.literal, binary.right
            ),
            Expr::Literal(literal) => write!(f, "{literal}"),
            Expr::Identifier(id) => f.write_str(id.name()),
            Expr::Call(call) => write!(f, "{call}"),
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.id.name())?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// `int a = expr`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub ty: TypeSpecifier,
    pub id: Identifier,
    pub init: Expr,
}

/// One `type name` entry of a parameter list.
///
/// The type is recorded but not enforced when arguments are bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub ty: TypeSpecifier,
    pub id: Identifier,
}

/// `fun name(type a, type b) { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub id: Identifier,
    pub params: Vec<Parameter>,
    pub body: Block,
}

/// `name = expr`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub id: Identifier,
    pub value: Expr,
}

/// `return` or `return expr`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub line: usize,
    pub value: Option<Expr>,
}

/// What follows an `if` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElseBranch {
    /// `else if ...`
    If(Box<Conditional>),
    /// `else { ... }`
    Block(Block),
}

/// `if cond { ... } [else ...]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conditional {
    pub condition: Expr,
    pub then_block: Block,
    pub next: Option<ElseBranch>,
}

/// `while cond { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhileStatement {
    pub condition: Expr,
    pub body: Block,
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    Assignment(Assignment),
    Return(ReturnStatement),
    Conditional(Conditional),
    While(WhileStatement),
    /// A call whose value, if any, is not bound.
    Call(FunctionCall),
}

impl Stmt {
    /// Line where the statement starts.
    pub fn line(&self) -> usize {
        match self {
            Stmt::VariableDeclaration(decl) => decl.ty.token().line,
            Stmt::FunctionDeclaration(decl) => decl.id.line(),
            Stmt::Assignment(assign) => assign.id.line(),
            Stmt::Return(ret) => ret.line,
            Stmt::Conditional(cond) => cond.condition.line(),
            Stmt::While(stmt) => stmt.condition.line(),
            Stmt::Call(call) => call.id.line(),
        }
    }

    /// One-line summary used by `quill parse`. Nested blocks are shown as
    /// statement counts.
    pub fn describe(&self) -> String {
        match self {
            Stmt::VariableDeclaration(decl) => {
                format!(
                    "VariableDeclaration {} {} = {}",
                    decl.ty.kind(),
                    decl.id.name(),
                    decl.init
                )
            }
            Stmt::FunctionDeclaration(decl) => {
                let params: Vec<String> = decl
                    .params
                    .iter()
                    .map(|p| format!("{} {}", p.ty.kind(), p.id.name()))
                    .collect();
                format!(
                    "FunctionDeclaration {}({}) {}",
                    decl.id.name(),
                    params.join(", "),
                    block_summary(&decl.body)
                )
            }
            Stmt::Assignment(assign) => {
                format!("Assignment {} = {}", assign.id.name(), assign.value)
            }
            Stmt::Return(ret) => match &ret.value {
                Some(value) => format!("ReturnStatement {value}"),
                None => "ReturnStatement".to_string(),
            },
            Stmt::Conditional(cond) => {
                let mut out = format!(
                    "Conditional {} {}",
                    cond.condition,
                    block_summary(&cond.then_block)
                );
                let mut next = cond.next.as_ref();
                while let Some(branch) = next {
                    match branch {
                        ElseBranch::If(chained) => {
                            out.push_str(&format!(
                                " else if {} {}",
                                chained.condition,
                                block_summary(&chained.then_block)
                            ));
                            next = chained.next.as_ref();
                        }
                        ElseBranch::Block(block) => {
                            out.push_str(&format!(" else {}", block_summary(block)));
                            next = None;
                        }
                    }
                }
                out
            }
            Stmt::While(stmt) => {
                format!(
                    "WhileStatement {} {}",
                    stmt.condition,
                    block_summary(&stmt.body)
                )
            }
            Stmt::Call(call) => format!("FunctionCall {call}"),
        }
    }
}

fn block_summary(block: &Block) -> String {
    match block.len() {
        1 => "{ 1 statement }".to_string(),
        n => format!("{{ {n} statements }}"),
    }
}
