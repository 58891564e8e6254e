// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! The AST consumed by the builder (§3.2).

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub preceded_by_blank_line: bool,
    pub trailing_comment: Option<String>,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Stmt {
            kind,
            preceded_by_blank_line: false,
            trailing_comment: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Return(Expr),
    Break(Expr),
    Comment(String),
    Section {
        name: String,
        attributes: Vec<String>,
        body: Vec<Stmt>,
    },
    Expression(Expr),
    Block(Vec<Stmt>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrefixOp {
    Not,
    Neg,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfixOp {
    And,
    Or,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Backtick(String),
}

impl InfixOp {
    /// Left-to-right precedence level: higher binds tighter. Matches §4.3.1's ladder:
    /// `and_or < equals < less_greater < sum < product`. (`composition` sits between
    /// `less_greater` and `sum` but never appears as an `InfixOp` — pipes/composition/ranges are
    /// their own aggregate AST nodes, see `Expr::FunctionThread` etc.)
    pub fn precedence(&self) -> u8 {
        match self {
            InfixOp::And | InfixOp::Or => 0,
            InfixOp::Eq | InfixOp::NotEq => 1,
            InfixOp::Lt | InfixOp::LtEq | InfixOp::Gt | InfixOp::GtEq => 2,
            InfixOp::Add | InfixOp::Sub => 4,
            InfixOp::Mul | InfixOp::Div | InfixOp::Rem | InfixOp::Backtick(_) => 5,
        }
    }

    pub fn text(&self) -> String {
        match self {
            InfixOp::And => "&&".to_string(),
            InfixOp::Or => "||".to_string(),
            InfixOp::Eq => "==".to_string(),
            InfixOp::NotEq => "!=".to_string(),
            InfixOp::Lt => "<".to_string(),
            InfixOp::LtEq => "<=".to_string(),
            InfixOp::Gt => ">".to_string(),
            InfixOp::GtEq => ">=".to_string(),
            InfixOp::Add => "+".to_string(),
            InfixOp::Sub => "-".to_string(),
            InfixOp::Mul => "*".to_string(),
            InfixOp::Div => "/".to_string(),
            InfixOp::Rem => "%".to_string(),
            InfixOp::Backtick(name) => format!("`{name}`"),
        }
    }
}

/// The precedence level of composition-class operators (pipe, composition, range), used only to
/// decide whether a sub-expression needs parens when it appears as the head of another
/// expression. It sits strictly between `less_greater` (2) and `sum` (4).
pub const COMPOSITION_PRECEDENCE: u8 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
    pub key: String,
    pub value: Expr,
    /// True when the entry was written (or is rewritten, per the always-on shorthand rule) as
    /// `key` alone rather than `key: value`.
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Vec<Stmt>,
    pub trailing_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Identifier(String),
    Rest(String),
    Placeholder,
    Integer(String),
    Decimal(String),
    Str(String),
    Bool(bool),
    Nil,
    List(Vec<Pattern>),
    Dict(Vec<DictPatternEntry>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictPatternEntry {
    pub key: String,
    pub value: Pattern,
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Vec<Pattern>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(String),
    Decimal(String),
    Str(String),
    Bool(bool),
    Nil,
    Placeholder,
    Ident(String),
    RestIdent(String),
    OperatorRef(InfixOp),

    Let {
        mutable: bool,
        pattern: Pattern,
        value: Box<Expr>,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },

    List(Vec<Expr>),
    Set(Vec<Expr>),
    Dict(Vec<DictEntry>),

    RangeInclusive(Box<Expr>, Box<Expr>),
    RangeExclusive(Box<Expr>, Box<Expr>),
    RangeUnbounded(Box<Expr>),

    Function(Lambda),

    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },

    Prefix {
        op: PrefixOp,
        right: Box<Expr>,
    },
    Infix {
        op: InfixOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    If {
        cond: Box<Expr>,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },
    Match {
        subject: Box<Expr>,
        cases: Vec<MatchCase>,
    },

    FunctionThread {
        initial: Box<Expr>,
        functions: Vec<Expr>,
    },
    FunctionComposition {
        functions: Vec<Expr>,
    },

    Index {
        left: Box<Expr>,
        index: Box<Expr>,
    },
    Spread(Box<Expr>),
}

impl Expr {
    /// True if `expr` or any of its descendants is a lambda whose body is a multi-statement
    /// block (§4.3.2's `contains_block_lambda`). Used to prohibit inline forms that would embed
    /// a newline.
    pub fn contains_block_lambda(&self) -> bool {
        match self {
            Expr::Function(lambda) => {
                is_block_body(&lambda.body) || lambda.body.iter().any(stmt_contains_block_lambda)
            }
            Expr::Let { value, .. } => value.contains_block_lambda(),
            Expr::Assign { target, value } => {
                target.contains_block_lambda() || value.contains_block_lambda()
            }
            Expr::List(xs) | Expr::Set(xs) => xs.iter().any(Expr::contains_block_lambda),
            Expr::Dict(entries) => entries.iter().any(|e| e.value.contains_block_lambda()),
            Expr::RangeInclusive(a, b) | Expr::RangeExclusive(a, b) => {
                a.contains_block_lambda() || b.contains_block_lambda()
            }
            Expr::RangeUnbounded(a) => a.contains_block_lambda(),
            Expr::Call { callee, args } => {
                callee.contains_block_lambda() || args.iter().any(Expr::contains_block_lambda)
            }
            Expr::Prefix { right, .. } => right.contains_block_lambda(),
            Expr::Infix { left, right, .. } => {
                left.contains_block_lambda() || right.contains_block_lambda()
            }
            Expr::If {
                cond,
                then_body,
                else_body,
            } => {
                cond.contains_block_lambda()
                    || then_body.iter().any(stmt_contains_block_lambda)
                    || else_body
                        .as_ref()
                        .is_some_and(|b| b.iter().any(stmt_contains_block_lambda))
            }
            Expr::Match { subject, cases } => {
                subject.contains_block_lambda()
                    || cases.iter().any(|c| {
                        c.guard.as_ref().is_some_and(Expr::contains_block_lambda)
                            || c.body.iter().any(stmt_contains_block_lambda)
                    })
            }
            Expr::FunctionThread { initial, functions } => {
                initial.contains_block_lambda() || functions.iter().any(Expr::contains_block_lambda)
            }
            Expr::FunctionComposition { functions } => {
                functions.iter().any(Expr::contains_block_lambda)
            }
            Expr::Index { left, index } => {
                left.contains_block_lambda() || index.contains_block_lambda()
            }
            Expr::Spread(inner) => inner.contains_block_lambda(),
            Expr::Integer(_)
            | Expr::Decimal(_)
            | Expr::Str(_)
            | Expr::Bool(_)
            | Expr::Nil
            | Expr::Placeholder
            | Expr::Ident(_)
            | Expr::RestIdent(_)
            | Expr::OperatorRef(_) => false,
        }
    }

    /// True for pipe chains of length >= 2, composition chains of length >= 2, `match`, and
    /// multi-statement lambdas (§4.3.2's `is_multiline_expression`).
    pub fn is_multiline_expression(&self) -> bool {
        match self {
            Expr::FunctionThread { functions, .. } => functions.len() >= 2,
            Expr::FunctionComposition { functions } => functions.len() >= 2,
            Expr::Match { .. } => true,
            Expr::Function(lambda) => is_block_body(&lambda.body),
            _ => false,
        }
    }
}

fn is_block_body(body: &[Stmt]) -> bool {
    match body {
        [stmt] => !matches!(
            stmt.kind,
            StmtKind::Expression(_) | StmtKind::Return(_) | StmtKind::Break(_)
        ),
        _ => true,
    }
}

fn stmt_contains_block_lambda(stmt: &Stmt) -> bool {
    match &stmt.kind {
        StmtKind::Return(e) | StmtKind::Break(e) | StmtKind::Expression(e) => {
            e.contains_block_lambda()
        }
        StmtKind::Comment(_) => false,
        StmtKind::Section { body, .. } | StmtKind::Block(body) => {
            body.iter().any(stmt_contains_block_lambda)
        }
    }
}

/// An expression statement without block lambdas, or a single-statement block of the same
/// (§4.3.2's `is_simple_body`).
pub fn is_simple_body(body: &[Stmt]) -> bool {
    match body {
        [stmt] => match &stmt.kind {
            StmtKind::Expression(e) => !e.contains_block_lambda(),
            _ => false,
        },
        _ => false,
    }
}
