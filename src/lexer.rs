// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer for santa-lang (§9.2).
//!
//! Single pass over the source bytes. Whitespace is skipped while counting skipped newlines so
//! each token can carry a `preceded_by_blank_line` flag (true when two or more newlines were
//! skipped immediately before it). Numbers use a one-token lookahead so `1..5` lexes as
//! `Integer("1")`, `DotDot`, `Integer("5")` rather than swallowing the first dot into a decimal.

use crate::error::FormatError;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    pending_newlines: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            line: 1,
            pending_newlines: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, FormatError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
        }
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\r' => {
                    self.pos += 1;
                }
                b'\n' => {
                    self.pending_newlines += 1;
                    self.pos += 1;
                    self.line += 1;
                }
                _ => break,
            }
        }
    }

    fn take_blank_flag(&mut self) -> bool {
        let flag = self.pending_newlines >= 2;
        self.pending_newlines = 0;
        flag
    }

    fn next_token(&mut self) -> Result<Token, FormatError> {
        self.skip_whitespace();
        let blank = self.take_blank_flag();
        let start = self.pos;
        let line = self.line;

        let Some(b) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, (start, start), line, blank));
        };

        let kind = match b {
            b'/' if self.peek_at(1) == Some(b'/') => self.lex_comment(),
            b'"' => self.lex_string()?,
            b'0'..=b'9' => self.lex_number(),
            b if is_ident_start(b) => self.lex_ident_or_keyword(),
            _ => self.lex_symbol()?,
        };

        let end = self.pos;
        Ok(Token::new(kind, (start, end), line, blank))
    }

    fn lex_comment(&mut self) -> TokenKind {
        self.bump();
        self.bump();
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.pos += 1;
        }
        let text = self.src[start..self.pos].trim_end().to_string();
        TokenKind::Comment(text)
    }

    fn lex_string(&mut self) -> Result<TokenKind, FormatError> {
        let line = self.line;
        self.bump();
        let mut out = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(FormatError::parse("unterminated string literal", line));
                }
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    self.pos += 1;
                    match self.peek() {
                        Some(b'n') => {
                            out.push('\n');
                            self.pos += 1;
                        }
                        Some(b't') => {
                            out.push('\t');
                            self.pos += 1;
                        }
                        Some(b'r') => {
                            out.push('\r');
                            self.pos += 1;
                        }
                        Some(b'b') => {
                            out.push('\u{8}');
                            self.pos += 1;
                        }
                        Some(b'f') => {
                            out.push('\u{c}');
                            self.pos += 1;
                        }
                        Some(b'"') => {
                            out.push('"');
                            self.pos += 1;
                        }
                        Some(b'\\') => {
                            out.push('\\');
                            self.pos += 1;
                        }
                        Some(b'\n') => {
                            out.push('\n');
                            self.pos += 1;
                            self.line += 1;
                        }
                        Some(other) => {
                            return Err(FormatError::parse(
                                format!("invalid escape sequence: \\{}", other as char),
                                self.line,
                            ));
                        }
                        None => {
                            return Err(FormatError::parse("unterminated string literal", line));
                        }
                    }
                }
                Some(_) => {
                    let ch_start = self.pos;
                    let ch = self.src[ch_start..].chars().next().unwrap();
                    self.pos += ch.len_utf8();
                    if ch == '\n' {
                        self.line += 1;
                    }
                    out.push(ch);
                }
            }
        }
        Ok(TokenKind::Str(out))
    }

    fn lex_number(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9') | Some(b'_')) {
            self.pos += 1;
        }
        // Lookahead: a `.` only belongs to this number if followed by a digit; a `.` followed
        // by another `.` is the start of a range operator and must not be consumed here.
        if self.peek() == Some(b'.') {
            match self.peek_at(1) {
                Some(b'0'..=b'9') => {
                    self.pos += 1;
                    while matches!(self.peek(), Some(b'0'..=b'9') | Some(b'_')) {
                        self.pos += 1;
                    }
                    let text = self.src[start..self.pos].to_string();
                    return TokenKind::Decimal(text);
                }
                _ => {
                    // Either `..`/`..=` (range) or a lone trailing dot; leave it for the next
                    // token and emit the integer lexed so far.
                }
            }
        }
        let text = self.src[start..self.pos].to_string();
        TokenKind::Integer(text)
    }

    fn lex_ident_or_keyword(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if is_ident_continue(b)) {
            self.pos += 1;
        }
        if matches!(self.peek(), Some(b'?') | Some(b'!')) {
            self.pos += 1;
        }
        let text = &self.src[start..self.pos];
        match text {
            "let" => TokenKind::Let,
            "mut" => TokenKind::Mut,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "match" => TokenKind::Match,
            "return" => TokenKind::Return,
            "break" => TokenKind::Break,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            "_" => TokenKind::Underscore,
            _ => TokenKind::Ident(text.to_string()),
        }
    }

    fn lex_symbol(&mut self) -> Result<TokenKind, FormatError> {
        let line = self.line;
        macro_rules! two {
            ($a:expr, $b:expr, $kind:expr) => {
                if self.peek() == Some($a) && self.peek_at(1) == Some($b) {
                    self.pos += 2;
                    return Ok($kind);
                }
            };
        }
        two!(b'|', b'>', TokenKind::PipeGt);
        two!(b'|', b'|', TokenKind::PipePipe);
        two!(b'&', b'&', TokenKind::AmpAmp);
        two!(b'=', b'=', TokenKind::EqEq);
        two!(b'!', b'=', TokenKind::NotEq);
        two!(b'<', b'=', TokenKind::LtEq);
        two!(b'>', b'=', TokenKind::GtEq);
        two!(b'>', b'>', TokenKind::GtGt);
        if self.peek() == Some(b'.') && self.peek_at(1) == Some(b'.') && self.peek_at(2) == Some(b'=') {
            self.pos += 3;
            return Ok(TokenKind::DotDotEq);
        }
        two!(b'.', b'.', TokenKind::DotDot);

        let b = self.bump().unwrap();
        let kind = match b {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'#' => TokenKind::Hash,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b'@' => TokenKind::At,
            b'|' => TokenKind::Pipe,
            b'!' => TokenKind::Bang,
            b'`' => TokenKind::Backtick,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b'=' => TokenKind::Eq,
            other => {
                return Err(FormatError::parse(
                    format!("unexpected character: {:?}", other as char),
                    line,
                ));
            }
        };
        Ok(kind)
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn integer_then_range() {
        assert_eq!(
            kinds("1..5"),
            vec![
                TokenKind::Integer("1".into()),
                TokenKind::DotDot,
                TokenKind::Integer("5".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn integer_then_inclusive_range() {
        assert_eq!(
            kinds("1..=5"),
            vec![
                TokenKind::Integer("1".into()),
                TokenKind::DotDotEq,
                TokenKind::Integer("5".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn decimal_not_confused_with_range() {
        assert_eq!(
            kinds("1.5"),
            vec![TokenKind::Decimal("1.5".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn blank_line_flag() {
        let toks = Lexer::new("a\n\n\nb").tokenize().unwrap();
        assert!(!toks[0].preceded_by_blank_line);
        assert!(toks[1].preceded_by_blank_line);
    }

    #[test]
    fn trailing_predicate_identifier() {
        assert_eq!(kinds("is_nice?"), vec![TokenKind::Ident("is_nice?".into()), TokenKind::Eof]);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            kinds(r#""a\nb""#),
            vec![TokenKind::Str("a\nb".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn unterminated_string_is_parse_error() {
        assert!(Lexer::new("\"abc").tokenize().is_err());
    }
}
