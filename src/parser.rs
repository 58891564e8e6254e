// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! A Pratt/precedence-climbing parser producing the AST of `crate::ast` (§9.3/§9.4).

use crate::ast::*;
use crate::error::FormatError;
use crate::token::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    prev_line: usize,
}

type PResult<T> = Result<T, FormatError>;

pub fn parse(tokens: Vec<Token>) -> PResult<Program> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            prev_line: 1,
        }
    }

    // ---------------------------------------------------------------------------------
    // Token-stream plumbing
    // ---------------------------------------------------------------------------------

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn peek_at(&self, offset: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    fn line(&self) -> usize {
        self.peek().line
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        self.prev_line = tok.line;
        tok
    }

    fn error<T>(&self, message: impl Into<String>) -> PResult<T> {
        Err(FormatError::parse(message, self.line()))
    }

    fn expect_exact(&mut self, expected: &TokenKind, what: &str) -> PResult<()> {
        if self.peek_kind() == expected {
            self.advance();
            Ok(())
        } else {
            self.error(format!("expected {what}, found {:?}", self.peek_kind()))
        }
    }

    fn expect_ident(&mut self) -> PResult<String> {
        match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            other => self.error(format!("expected identifier, found {other:?}")),
        }
    }

    // ---------------------------------------------------------------------------------
    // Program / statements
    // ---------------------------------------------------------------------------------

    fn parse_program(&mut self) -> PResult<Program> {
        let statements = self.parse_statements_until(&TokenKind::Eof)?;
        Ok(Program { statements })
    }

    fn parse_statements_until(&mut self, terminator: &TokenKind) -> PResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while self.peek_kind() != terminator && self.peek_kind() != &TokenKind::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_block(&mut self) -> PResult<Vec<Stmt>> {
        self.expect_exact(&TokenKind::LBrace, "'{'")?;
        let statements = self.parse_statements_until(&TokenKind::RBrace)?;
        self.expect_exact(&TokenKind::RBrace, "'}'")?;
        Ok(statements)
    }

    fn parse_statement(&mut self) -> PResult<Stmt> {
        let blank = self.peek().preceded_by_blank_line;
        let kind = self.parse_statement_kind()?;
        let trailing_comment = self.try_take_trailing_comment();
        Ok(Stmt {
            kind,
            preceded_by_blank_line: blank,
            trailing_comment,
        })
    }

    fn try_take_trailing_comment(&mut self) -> Option<String> {
        if let TokenKind::Comment(text) = self.peek_kind().clone() {
            if self.peek().line == self.prev_line {
                self.advance();
                return Some(text);
            }
        }
        None
    }

    fn parse_statement_kind(&mut self) -> PResult<StmtKind> {
        match self.peek_kind().clone() {
            TokenKind::Comment(text) => {
                self.advance();
                Ok(StmtKind::Comment(text))
            }
            TokenKind::Return => {
                self.advance();
                Ok(StmtKind::Return(self.parse_expression()?))
            }
            TokenKind::Break => {
                self.advance();
                Ok(StmtKind::Break(self.parse_expression()?))
            }
            TokenKind::At => self.parse_section(),
            TokenKind::Ident(_) if matches!(self.peek_at(1), TokenKind::Colon) => {
                self.parse_section()
            }
            _ => Ok(StmtKind::Expression(self.parse_expression()?)),
        }
    }

    fn parse_section(&mut self) -> PResult<StmtKind> {
        let mut attributes = Vec::new();
        while self.peek_kind() == &TokenKind::At {
            self.advance();
            attributes.push(self.expect_ident()?);
        }
        let name = self.expect_ident()?;
        self.expect_exact(&TokenKind::Colon, "':'")?;
        let body = self.parse_section_body()?;
        Ok(StmtKind::Section {
            name,
            attributes,
            body,
        })
    }

    fn parse_section_body(&mut self) -> PResult<Vec<Stmt>> {
        if self.peek_kind() == &TokenKind::LBrace {
            self.parse_block()
        } else {
            let expr = self.parse_expression()?;
            Ok(vec![Stmt::new(StmtKind::Expression(expr))])
        }
    }

    // ---------------------------------------------------------------------------------
    // Expressions — precedence ladder (§4.3.1 / §9.4)
    // ---------------------------------------------------------------------------------

    fn parse_expression(&mut self) -> PResult<Expr> {
        if self.peek_kind() == &TokenKind::Let {
            return self.parse_let();
        }
        let expr = self.parse_and_or()?;
        if self.peek_kind() == &TokenKind::Eq && is_assignable(&expr) {
            self.advance();
            let value = self.parse_expression()?;
            return Ok(Expr::Assign {
                target: Box::new(expr),
                value: Box::new(value),
            });
        }
        Ok(expr)
    }

    fn parse_let(&mut self) -> PResult<Expr> {
        self.expect_exact(&TokenKind::Let, "'let'")?;
        let mutable = if self.peek_kind() == &TokenKind::Mut {
            self.advance();
            true
        } else {
            false
        };
        let pattern = self.parse_pattern()?;
        self.expect_exact(&TokenKind::Eq, "'='")?;
        let value = self.parse_expression()?;
        Ok(Expr::Let {
            mutable,
            pattern,
            value: Box::new(value),
        })
    }

    fn parse_and_or(&mut self) -> PResult<Expr> {
        let mut left = self.parse_equals()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::AmpAmp => InfixOp::And,
                TokenKind::PipePipe => InfixOp::Or,
                _ => break,
            };
            self.advance();
            let right = self.parse_equals()?;
            left = infix(op, left, right);
        }
        Ok(left)
    }

    fn parse_equals(&mut self) -> PResult<Expr> {
        let mut left = self.parse_less_greater()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::EqEq => InfixOp::Eq,
                TokenKind::NotEq => InfixOp::NotEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_less_greater()?;
            left = infix(op, left, right);
        }
        Ok(left)
    }

    fn parse_less_greater(&mut self) -> PResult<Expr> {
        let mut left = self.parse_composition()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Lt => InfixOp::Lt,
                TokenKind::LtEq => InfixOp::LtEq,
                TokenKind::Gt => InfixOp::Gt,
                TokenKind::GtEq => InfixOp::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_composition()?;
            left = infix(op, left, right);
        }
        Ok(left)
    }

    /// Pipe chains, composition chains, and ranges all sit at this precedence level, but unlike
    /// the binary operators above they build aggregate nodes rather than nested `Infix` trees
    /// (§9.3).
    fn parse_composition(&mut self) -> PResult<Expr> {
        let left = self.parse_sum()?;
        match self.peek_kind() {
            TokenKind::PipeGt => {
                let mut functions = Vec::new();
                while self.peek_kind() == &TokenKind::PipeGt {
                    self.advance();
                    functions.push(self.parse_sum()?);
                }
                Ok(Expr::FunctionThread {
                    initial: Box::new(left),
                    functions,
                })
            }
            TokenKind::GtGt => {
                let mut functions = vec![left];
                while self.peek_kind() == &TokenKind::GtGt {
                    self.advance();
                    functions.push(self.parse_sum()?);
                }
                Ok(Expr::FunctionComposition { functions })
            }
            TokenKind::DotDot => {
                self.advance();
                if can_start_expression(self.peek_kind()) {
                    let to = self.parse_sum()?;
                    Ok(Expr::RangeExclusive(Box::new(left), Box::new(to)))
                } else {
                    Ok(Expr::RangeUnbounded(Box::new(left)))
                }
            }
            TokenKind::DotDotEq => {
                self.advance();
                let to = self.parse_sum()?;
                Ok(Expr::RangeInclusive(Box::new(left), Box::new(to)))
            }
            _ => Ok(left),
        }
    }

    fn parse_sum(&mut self) -> PResult<Expr> {
        let mut left = self.parse_product()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => InfixOp::Add,
                TokenKind::Minus => InfixOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_product()?;
            left = infix(op, left, right);
        }
        Ok(left)
    }

    fn parse_product(&mut self) -> PResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            match self.peek_kind() {
                TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
                    let op = match self.advance().kind {
                        TokenKind::Star => InfixOp::Mul,
                        TokenKind::Slash => InfixOp::Div,
                        _ => InfixOp::Rem,
                    };
                    let right = self.parse_unary()?;
                    left = infix(op, left, right);
                }
                TokenKind::Backtick => {
                    self.advance();
                    let name = self.expect_ident()?;
                    self.expect_exact(&TokenKind::Backtick, "'`'")?;
                    let right = self.parse_unary()?;
                    left = infix(InfixOp::Backtick(name), left, right);
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> PResult<Expr> {
        if let Some(op_ref) = self.try_bare_operator_ref() {
            return Ok(op_ref);
        }
        match self.peek_kind() {
            TokenKind::Bang => {
                self.advance();
                let right = self.parse_unary()?;
                Ok(Expr::Prefix {
                    op: PrefixOp::Not,
                    right: Box::new(right),
                })
            }
            TokenKind::Minus => {
                self.advance();
                let right = self.parse_unary()?;
                Ok(Expr::Prefix {
                    op: PrefixOp::Neg,
                    right: Box::new(right),
                })
            }
            _ => self.parse_postfix(),
        }
    }

    /// A bare operator token used as a value (`reduce(+, 0, xs)`): only recognized when the
    /// operator is immediately followed by `,` or `)`, i.e. it stands alone as a complete
    /// argument rather than starting a prefix/infix expression.
    fn try_bare_operator_ref(&mut self) -> Option<Expr> {
        let op = match self.peek_kind() {
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Star => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            TokenKind::Percent => InfixOp::Rem,
            TokenKind::EqEq => InfixOp::Eq,
            TokenKind::NotEq => InfixOp::NotEq,
            TokenKind::Lt => InfixOp::Lt,
            TokenKind::LtEq => InfixOp::LtEq,
            TokenKind::Gt => InfixOp::Gt,
            TokenKind::GtEq => InfixOp::GtEq,
            TokenKind::AmpAmp => InfixOp::And,
            TokenKind::PipePipe => InfixOp::Or,
            _ => return None,
        };
        if !matches!(self.peek_at(1), TokenKind::Comma | TokenKind::RParen) {
            return None;
        }
        self.advance();
        Some(Expr::OperatorRef(op))
    }

    fn parse_postfix(&mut self) -> PResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek_kind() {
                TokenKind::LParen => {
                    self.advance();
                    let mut args = self.parse_call_args()?;
                    if self.peek_kind() == &TokenKind::Pipe {
                        args.push(self.parse_lambda()?);
                    }
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                    };
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect_exact(&TokenKind::RBracket, "']'")?;
                    expr = Expr::Index {
                        left: Box::new(expr),
                        index: Box::new(index),
                    };
                }
                // `name |x| body` trailing-lambda call sugar with no parens at all.
                TokenKind::Pipe => {
                    let lambda = self.parse_lambda()?;
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args: vec![lambda],
                    };
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_call_args(&mut self) -> PResult<Vec<Expr>> {
        let mut args = Vec::new();
        while self.peek_kind() != &TokenKind::RParen {
            args.push(self.parse_expression()?);
            if self.peek_kind() == &TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        self.expect_exact(&TokenKind::RParen, "')'")?;
        Ok(args)
    }

    fn parse_lambda(&mut self) -> PResult<Expr> {
        self.expect_exact(&TokenKind::Pipe, "'|'")?;
        let mut params = Vec::new();
        while self.peek_kind() != &TokenKind::Pipe {
            params.push(self.parse_pattern()?);
            if self.peek_kind() == &TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        self.expect_exact(&TokenKind::Pipe, "'|'")?;
        let body = if self.peek_kind() == &TokenKind::LBrace {
            self.parse_block()?
        } else {
            vec![Stmt::new(StmtKind::Expression(self.parse_expression()?))]
        };
        Ok(Expr::Function(Lambda { params, body }))
    }

    fn parse_primary(&mut self) -> PResult<Expr> {
        match self.peek_kind().clone() {
            TokenKind::Integer(s) => {
                self.advance();
                Ok(Expr::Integer(s))
            }
            TokenKind::Decimal(s) => {
                self.advance();
                Ok(Expr::Decimal(s))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Expr::Str(s))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Bool(false))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::Nil)
            }
            TokenKind::Underscore => {
                self.advance();
                Ok(Expr::Placeholder)
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::Ident(name))
            }
            TokenKind::DotDot => {
                let dot_span = self.peek().span;
                self.advance();
                if let TokenKind::Ident(name) = self.peek_kind().clone() {
                    if self.peek().span.0 == dot_span.1 {
                        self.advance();
                        return Ok(Expr::RestIdent(name));
                    }
                }
                let inner = self.parse_unary()?;
                Ok(Expr::Spread(Box::new(inner)))
            }
            TokenKind::Pipe => self.parse_lambda(),
            TokenKind::LBracket => self.parse_list(),
            TokenKind::LBrace => self.parse_set(),
            TokenKind::Hash => self.parse_dict(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_exact(&TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::If => self.parse_if(),
            TokenKind::Match => self.parse_match(),
            other => self.error(format!("unexpected token: {other:?}")),
        }
    }

    fn parse_list(&mut self) -> PResult<Expr> {
        self.expect_exact(&TokenKind::LBracket, "'['")?;
        let mut elems = Vec::new();
        while self.peek_kind() != &TokenKind::RBracket {
            elems.push(self.parse_expression()?);
            if self.peek_kind() == &TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        self.expect_exact(&TokenKind::RBracket, "']'")?;
        Ok(Expr::List(elems))
    }

    fn parse_set(&mut self) -> PResult<Expr> {
        self.expect_exact(&TokenKind::LBrace, "'{'")?;
        let mut elems = Vec::new();
        while self.peek_kind() != &TokenKind::RBrace {
            elems.push(self.parse_expression()?);
            if self.peek_kind() == &TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        self.expect_exact(&TokenKind::RBrace, "'}'")?;
        Ok(Expr::Set(elems))
    }

    fn parse_dict(&mut self) -> PResult<Expr> {
        self.expect_exact(&TokenKind::Hash, "'#'")?;
        self.expect_exact(&TokenKind::LBrace, "'{'")?;
        let mut entries = Vec::new();
        while self.peek_kind() != &TokenKind::RBrace {
            entries.push(self.parse_dict_entry()?);
            if self.peek_kind() == &TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        self.expect_exact(&TokenKind::RBrace, "'}'")?;
        Ok(Expr::Dict(entries))
    }

    fn parse_dict_entry(&mut self) -> PResult<DictEntry> {
        let key = match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                if self.peek_kind() == &TokenKind::Colon {
                    self.advance();
                    let value = self.parse_expression()?;
                    let shorthand = matches!(&value, Expr::Ident(v) if v == &name);
                    return Ok(DictEntry {
                        key: name,
                        value,
                        shorthand,
                    });
                }
                return Ok(DictEntry {
                    value: Expr::Ident(name.clone()),
                    key: name,
                    shorthand: true,
                });
            }
            TokenKind::Str(s) => {
                self.advance();
                s
            }
            other => return self.error(format!("expected dictionary key, found {other:?}")),
        };
        self.expect_exact(&TokenKind::Colon, "':'")?;
        let value = self.parse_expression()?;
        let shorthand = matches!(&value, Expr::Ident(v) if v == &key);
        Ok(DictEntry {
            key,
            value,
            shorthand,
        })
    }

    fn parse_if(&mut self) -> PResult<Expr> {
        self.expect_exact(&TokenKind::If, "'if'")?;
        let cond = self.parse_expression()?;
        let then_body = self.parse_block()?;
        let else_body = if self.peek_kind() == &TokenKind::Else {
            self.advance();
            if self.peek_kind() == &TokenKind::If {
                let nested = self.parse_if()?;
                Some(vec![Stmt::new(StmtKind::Expression(nested))])
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };
        Ok(Expr::If {
            cond: Box::new(cond),
            then_body,
            else_body,
        })
    }

    fn parse_match(&mut self) -> PResult<Expr> {
        self.expect_exact(&TokenKind::Match, "'match'")?;
        let subject = self.parse_expression()?;
        self.expect_exact(&TokenKind::LBrace, "'{'")?;
        let mut cases = Vec::new();
        while self.peek_kind() != &TokenKind::RBrace {
            let pattern = self.parse_pattern()?;
            let guard = if self.peek_kind() == &TokenKind::If {
                self.advance();
                Some(self.parse_expression()?)
            } else {
                None
            };
            let body = self.parse_block()?;
            let trailing_comment = self.try_take_trailing_comment();
            cases.push(MatchCase {
                pattern,
                guard,
                body,
                trailing_comment,
            });
        }
        self.expect_exact(&TokenKind::RBrace, "'}'")?;
        Ok(Expr::Match {
            subject: Box::new(subject),
            cases,
        })
    }

    // ---------------------------------------------------------------------------------
    // Patterns
    // ---------------------------------------------------------------------------------

    fn parse_pattern(&mut self) -> PResult<Pattern> {
        match self.peek_kind().clone() {
            TokenKind::Underscore => {
                self.advance();
                Ok(Pattern::Placeholder)
            }
            TokenKind::Integer(s) => {
                self.advance();
                Ok(Pattern::Integer(s))
            }
            TokenKind::Decimal(s) => {
                self.advance();
                Ok(Pattern::Decimal(s))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Pattern::Str(s))
            }
            TokenKind::True => {
                self.advance();
                Ok(Pattern::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Pattern::Bool(false))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Pattern::Nil)
            }
            TokenKind::DotDot => {
                self.advance();
                let name = self.expect_ident()?;
                Ok(Pattern::Rest(name))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Pattern::Identifier(name))
            }
            TokenKind::LBracket => {
                self.advance();
                let mut elems = Vec::new();
                while self.peek_kind() != &TokenKind::RBracket {
                    elems.push(self.parse_pattern()?);
                    if self.peek_kind() == &TokenKind::Comma {
                        self.advance();
                    } else {
                        break;
                    }
                }
                self.expect_exact(&TokenKind::RBracket, "']'")?;
                Ok(Pattern::List(elems))
            }
            TokenKind::Hash => {
                self.advance();
                self.expect_exact(&TokenKind::LBrace, "'{'")?;
                let mut entries = Vec::new();
                while self.peek_kind() != &TokenKind::RBrace {
                    entries.push(self.parse_dict_pattern_entry()?);
                    if self.peek_kind() == &TokenKind::Comma {
                        self.advance();
                    } else {
                        break;
                    }
                }
                self.expect_exact(&TokenKind::RBrace, "'}'")?;
                Ok(Pattern::Dict(entries))
            }
            other => self.error(format!("unexpected token in pattern: {other:?}")),
        }
    }

    fn parse_dict_pattern_entry(&mut self) -> PResult<DictPatternEntry> {
        let name = self.expect_ident()?;
        if self.peek_kind() == &TokenKind::Colon {
            self.advance();
            let value = self.parse_pattern()?;
            Ok(DictPatternEntry {
                key: name,
                value,
                shorthand: false,
            })
        } else {
            Ok(DictPatternEntry {
                value: Pattern::Identifier(name.clone()),
                key: name,
                shorthand: true,
            })
        }
    }
}

fn infix(op: InfixOp, left: Expr, right: Expr) -> Expr {
    Expr::Infix {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn is_assignable(expr: &Expr) -> bool {
    matches!(expr, Expr::Ident(_) | Expr::Index { .. })
}

fn can_start_expression(kind: &TokenKind) -> bool {
    !matches!(
        kind,
        TokenKind::RBracket
            | TokenKind::RParen
            | TokenKind::RBrace
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Eof
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse_src(src: &str) -> Program {
        let tokens = Lexer::new(src).tokenize().unwrap();
        parse(tokens).unwrap()
    }

    #[test]
    fn parses_let_binding() {
        let program = parse_src("let x = 1 + 2");
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0].kind {
            StmtKind::Expression(Expr::Let { mutable, .. }) => assert!(!mutable),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parses_pipe_chain() {
        let program = parse_src("input |> lines |> size");
        match &program.statements[0].kind {
            StmtKind::Expression(Expr::FunctionThread { functions, .. }) => {
                assert_eq!(functions.len(), 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parses_dict_shorthand() {
        let program = parse_src("#{\"foo\":foo,\"bar\":bar}");
        match &program.statements[0].kind {
            StmtKind::Expression(Expr::Dict(entries)) => {
                assert!(entries.iter().all(|e| e.shorthand));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parses_section_with_braces() {
        let program = parse_src("part_one: { 2 }");
        match &program.statements[0].kind {
            StmtKind::Section { name, body, .. } => {
                assert_eq!(name, "part_one");
                assert_eq!(body.len(), 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn right_grouping_is_preserved() {
        let program = parse_src("a - (b - c)");
        match &program.statements[0].kind {
            StmtKind::Expression(Expr::Infix { right, .. }) => {
                assert!(matches!(**right, Expr::Infix { .. }));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
