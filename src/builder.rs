// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! Translates the AST into a `Doc` (§4.3). This is where layout decisions that aren't purely
//! mechanical line-fitting live: blank-line preservation, implicit-return semicolons,
//! parenthesization driven by operator precedence, and the inline/block dual candidates for
//! lambdas, calls, and `if`.

use crate::ast::*;
use crate::doc::{Doc, INDENT_SIZE};

pub fn build_program(program: &Program) -> Doc {
    if program.statements.is_empty() {
        return Doc::nil();
    }
    let mut parts = Vec::new();
    for (i, stmt) in program.statements.iter().enumerate() {
        if i > 0 {
            // Top-level statements are always separated by a blank line, regardless of whether
            // the source had one; indent is 0 here so HardLine carries no trailing whitespace.
            parts.push(Doc::hard_line());
            parts.push(Doc::hard_line());
        }
        parts.push(build_stmt(stmt));
    }
    parts.push(Doc::hard_line());
    Doc::concat(parts)
}

/// Builds the statements of a block (lambda body, `if`/`match` arm, section body) joined by a
/// single `HardLine`, except where a blank line must appear.
fn build_block(body: &[Stmt]) -> Doc {
    if body.is_empty() {
        return Doc::nil();
    }
    let semicolon_at = implicit_return_semicolon_index(body);
    let mut parts = Vec::with_capacity(body.len() * 2);
    for (i, stmt) in body.iter().enumerate() {
        if i > 0 {
            if needs_blank_before(body, i) {
                parts.push(Doc::blank_line());
            }
            parts.push(Doc::hard_line());
        }
        let mut doc = build_stmt_core(stmt);
        if semicolon_at == Some(i) {
            doc = doc.append(Doc::text(";"));
        }
        if let Some(comment) = &stmt.trailing_comment {
            doc = doc.append(Doc::text(" ")).append(build_comment_text(comment));
        }
        parts.push(doc);
    }
    Doc::concat(parts)
}

fn build_stmt(stmt: &Stmt) -> Doc {
    let mut doc = build_stmt_core(stmt);
    if let Some(comment) = &stmt.trailing_comment {
        doc = doc.append(Doc::text(" ")).append(build_comment_text(comment));
    }
    doc
}

fn build_stmt_core(stmt: &Stmt) -> Doc {
    match &stmt.kind {
        StmtKind::Return(e) => Doc::text("return ").append(build_expr(e)),
        StmtKind::Break(e) => Doc::text("break ").append(build_expr(e)),
        StmtKind::Comment(text) => build_comment_text(text),
        StmtKind::Section {
            name,
            attributes,
            body,
        } => build_section(name, attributes, body),
        StmtKind::Expression(e) => build_expr(e),
        StmtKind::Block(body) => build_braced_block(body),
    }
}

fn build_comment_text(text: &str) -> Doc {
    Doc::text(format!("//{text}"))
}

fn build_braced_block(body: &[Stmt]) -> Doc {
    Doc::concat([
        Doc::text("{"),
        Doc::hard_line().append(build_block(body)).nest(INDENT_SIZE),
        Doc::hard_line(),
        Doc::text("}"),
    ])
}

/// A block ending with a non-`let` expression statement implicitly returns that expression's
/// value. The statement immediately preceding it (skipping over standalone comments) gets a
/// trailing `;` so the boundary between "prior statement" and "return value" stays unambiguous
/// without relying on the parser's own newline-sensitivity.
fn implicit_return_semicolon_index(body: &[Stmt]) -> Option<usize> {
    let last = body.last()?;
    let is_implicit_return = matches!(&last.kind, StmtKind::Expression(e) if !matches!(e, Expr::Let { .. }));
    if !is_implicit_return {
        return None;
    }
    let mut j = body.len() as isize - 2;
    while j >= 0 && matches!(body[j as usize].kind, StmtKind::Comment(_)) {
        j -= 1;
    }
    (j >= 0).then_some(j as usize)
}

fn needs_blank_before(body: &[Stmt], i: usize) -> bool {
    let stmt = &body[i];
    if stmt.preceded_by_blank_line {
        return true;
    }
    if i != body.len() - 1 {
        return false;
    }
    match &stmt.kind {
        StmtKind::Expression(e) => !matches!(e, Expr::Let { .. }),
        StmtKind::Return(e) | StmtKind::Break(e) => e.is_multiline_expression(),
        _ => false,
    }
}

fn build_section(name: &str, attributes: &[String], body: &[Stmt]) -> Doc {
    let mut parts = Vec::new();
    for attr in attributes {
        parts.push(Doc::text(format!("@{attr}")));
        parts.push(Doc::hard_line());
    }
    let header = Doc::text(format!("{name}: "));
    // part_one/part_two are always braced, even when the body would otherwise be inlineable.
    let always_braced = name == "part_one" || name == "part_two";
    let body_doc = if !always_braced {
        if let Some(e) = simple_body_expr(body) {
            Doc::concat([header, build_expr(e)])
        } else {
            Doc::concat([header, Doc::text("{"), braced_body(body), Doc::text("}")])
        }
    } else {
        Doc::concat([header, Doc::text("{"), braced_body(body), Doc::text("}")])
    };
    parts.push(body_doc);
    Doc::concat(parts)
}

fn braced_body(body: &[Stmt]) -> Doc {
    Doc::hard_line()
        .append(build_block(body))
        .nest(INDENT_SIZE)
        .append(Doc::hard_line())
}

fn simple_body_expr(body: &[Stmt]) -> Option<&Expr> {
    if let [stmt] = body {
        if let StmtKind::Expression(e) = &stmt.kind {
            if !e.contains_block_lambda() {
                return Some(e);
            }
        }
    }
    None
}

// -----------------------------------------------------------------------------------------
// Expressions
// -----------------------------------------------------------------------------------------

fn build_expr(expr: &Expr) -> Doc {
    match expr {
        Expr::Integer(s) | Expr::Decimal(s) => Doc::text(s.clone()),
        Expr::Str(s) => build_string_literal(s),
        Expr::Bool(b) => Doc::text(if *b { "true" } else { "false" }),
        Expr::Nil => Doc::text("nil"),
        Expr::Placeholder => Doc::text("_"),
        Expr::Ident(name) => Doc::text(name.clone()),
        Expr::RestIdent(name) => Doc::text(format!("..{name}")),
        Expr::OperatorRef(op) => Doc::text(op.text()),

        Expr::Let {
            mutable,
            pattern,
            value,
        } => Doc::concat([
            Doc::text("let "),
            if *mutable { Doc::text("mut ") } else { Doc::nil() },
            build_pattern(pattern),
            Doc::text(" = "),
            build_expr(value),
        ]),
        Expr::Assign { target, value } => Doc::concat([
            build_expr(target),
            Doc::text(" = "),
            build_expr(value),
        ]),

        Expr::List(elems) => Doc::bracketed(
            Doc::text("["),
            elems.iter().map(build_expr).collect(),
            Doc::text("]"),
            false,
        ),
        Expr::Set(elems) => Doc::bracketed(
            Doc::text("{"),
            elems.iter().map(build_expr).collect(),
            Doc::text("}"),
            false,
        ),
        Expr::Dict(entries) => Doc::bracketed(
            Doc::text("#{"),
            entries.iter().map(build_dict_entry).collect(),
            Doc::text("}"),
            false,
        ),

        Expr::RangeInclusive(from, to) => Doc::concat([
            wrap_operand(from, COMPOSITION_PRECEDENCE, true),
            Doc::text("..="),
            wrap_operand(to, COMPOSITION_PRECEDENCE, true),
        ]),
        Expr::RangeExclusive(from, to) => Doc::concat([
            wrap_operand(from, COMPOSITION_PRECEDENCE, true),
            Doc::text(".."),
            wrap_operand(to, COMPOSITION_PRECEDENCE, true),
        ]),
        Expr::RangeUnbounded(from) => {
            Doc::concat([wrap_operand(from, COMPOSITION_PRECEDENCE, true), Doc::text("..")])
        }

        Expr::Function(lambda) => build_lambda(lambda),

        Expr::Call { callee, args } => build_call(callee, args),

        Expr::Prefix { op, right } => build_prefix(op, right),
        Expr::Infix { op, left, right } => build_infix(op, left, right),

        Expr::If {
            cond,
            then_body,
            else_body,
        } => build_if(cond, then_body, else_body.as_deref()),
        Expr::Match { subject, cases } => build_match(subject, cases),

        Expr::FunctionThread { initial, functions } => build_thread(initial, functions),
        Expr::FunctionComposition { functions } => build_composition(functions),

        Expr::Index { left, index } => Doc::concat([
            wrap_as_atom(left, build_expr(left)),
            Doc::text("["),
            build_expr(index),
            Doc::text("]"),
        ]),
        Expr::Spread(inner) => Doc::text("..").append(build_expr(inner)),
    }
}

fn build_dict_entry(entry: &DictEntry) -> Doc {
    if entry.shorthand {
        Doc::text(entry.key.clone())
    } else {
        Doc::concat([
            Doc::text(format!("{}: ", entry.key)),
            build_expr(&entry.value),
        ])
    }
}

/// Returns `Some(precedence)` when `expr`'s printed form *starts* with a lower-precedence
/// operator head (a binary operator, or a pipe/composition/range chain) and so may need
/// wrapping when it appears as the operand of something that binds tighter. Everything else —
/// literals, calls, lambdas, prefix expressions, collections — prints as a self-delimited atom
/// and never needs parens on precedence grounds alone.
fn head_precedence(expr: &Expr) -> Option<u8> {
    match expr {
        Expr::Infix { op, .. } => Some(op.precedence()),
        Expr::RangeInclusive(..) | Expr::RangeExclusive(..) | Expr::RangeUnbounded(..) => {
            Some(COMPOSITION_PRECEDENCE)
        }
        Expr::FunctionThread { .. } | Expr::FunctionComposition { .. } => {
            Some(COMPOSITION_PRECEDENCE)
        }
        _ => None,
    }
}

fn wrap_operand(expr: &Expr, min: u8, strict: bool) -> Doc {
    wrap_operand_doc(expr, build_expr(expr), min, strict)
}

fn wrap_operand_doc(expr: &Expr, doc: Doc, min: u8, strict: bool) -> Doc {
    match head_precedence(expr) {
        Some(hp) if (strict && hp < min) || (!strict && hp <= min) => doc.parens(),
        _ => doc,
    }
}

/// Used where an operand binds as tightly as anything can (prefix operators, call callees,
/// index targets): any expression with a precedence-bearing head must be parenthesized.
fn wrap_as_atom(expr: &Expr, doc: Doc) -> Doc {
    if head_precedence(expr).is_some() {
        doc.parens()
    } else {
        doc
    }
}

fn build_prefix(op: &PrefixOp, right: &Expr) -> Doc {
    let text = match op {
        PrefixOp::Not => "!",
        PrefixOp::Neg => "-",
    };
    Doc::concat([Doc::text(text), wrap_as_atom(right, build_expr(right))])
}

fn build_infix(op: &InfixOp, left: &Expr, right: &Expr) -> Doc {
    let prec = op.precedence();
    let left_doc = wrap_operand(left, prec, true);
    let right_doc = wrap_operand(right, prec, false);
    Doc::concat([
        left_doc,
        Doc::text(" "),
        Doc::text(op.text()),
        Doc::text(" "),
        right_doc,
    ])
    .group()
}

// -----------------------------------------------------------------------------------------
// Lambdas
// -----------------------------------------------------------------------------------------

/// `None` when the lambda's body can't be inlined as `|params| expr` — either it's not a
/// single bare expression statement, it embeds a block lambda of its own, or its head would be
/// visually ambiguous inlined (a set/dict literal, or a pipe/composition chain).
fn lambda_inline_expr(lambda: &Lambda) -> Option<&Expr> {
    let [stmt] = lambda.body.as_slice() else {
        return None;
    };
    if stmt.trailing_comment.is_some() {
        return None;
    }
    let StmtKind::Expression(e) = &stmt.kind else {
        return None;
    };
    if e.contains_block_lambda() {
        return None;
    }
    match e {
        Expr::Set(_) | Expr::Dict(_) | Expr::FunctionThread { .. } | Expr::FunctionComposition { .. } => None,
        _ => Some(e),
    }
}

fn lambda_forces_block(lambda: &Lambda) -> bool {
    lambda_inline_expr(lambda).is_none()
}

fn lambda_header(lambda: &Lambda) -> Doc {
    let params = lambda.params.iter().map(build_pattern).collect::<Vec<_>>();
    Doc::concat([Doc::text("|"), Doc::join(params, Doc::text(", ")), Doc::text("|")])
}

fn build_lambda(lambda: &Lambda) -> Doc {
    if let Some(e) = lambda_inline_expr(lambda) {
        return Doc::concat([lambda_header(lambda), Doc::text(" "), build_expr(e)]);
    }
    build_lambda_always_block(lambda)
}

fn build_lambda_always_block(lambda: &Lambda) -> Doc {
    Doc::concat([lambda_header(lambda), Doc::text(" "), build_braced_block(&lambda.body)])
}

// -----------------------------------------------------------------------------------------
// Calls and trailing closures
// -----------------------------------------------------------------------------------------

fn build_call(callee: &Expr, args: &[Expr]) -> Doc {
    build_call_impl(callee, args, false)
}

/// `force_trailing_block` is set when this call is a non-final stage of a pipe chain (§4.3.1:
/// "lambdas appearing as non-last elements in the chain are rendered with block form") — its
/// trailing closure, if any, skips the inline/block dual-candidate and always renders braced.
fn build_call_impl(callee: &Expr, args: &[Expr], force_trailing_block: bool) -> Doc {
    let callee_doc = wrap_as_atom(callee, build_expr(callee));
    if let Some(Expr::Function(lambda)) = args.last() {
        let other_args = &args[..args.len() - 1];
        if force_trailing_block || lambda_forces_block(lambda) {
            return build_trailing_call(callee_doc, other_args, lambda);
        }
        let inline = Doc::concat([
            callee_doc.clone(),
            Doc::bracketed(
                Doc::text("("),
                args.iter().map(build_expr).collect(),
                Doc::text(")"),
                false,
            ),
        ]);
        let trailing = build_trailing_call(callee_doc, other_args, lambda);
        return Doc::group(Doc::if_break(trailing, inline));
    }
    Doc::concat([
        callee_doc,
        Doc::bracketed(
            Doc::text("("),
            args.iter().map(build_expr).collect(),
            Doc::text(")"),
            false,
        ),
    ])
}

fn build_trailing_call(callee_doc: Doc, other_args: &[Expr], lambda: &Lambda) -> Doc {
    let lambda_doc = build_lambda_always_block(lambda);
    if other_args.is_empty() {
        Doc::concat([callee_doc, Doc::text(" "), lambda_doc])
    } else {
        Doc::concat([
            callee_doc,
            Doc::bracketed(
                Doc::text("("),
                other_args.iter().map(build_expr).collect(),
                Doc::text(")"),
                false,
            ),
            Doc::text(" "),
            lambda_doc,
        ])
    }
}

// -----------------------------------------------------------------------------------------
// Pipe chains and composition
// -----------------------------------------------------------------------------------------

fn build_thread(initial: &Expr, functions: &[Expr]) -> Doc {
    let initial_doc = wrap_operand(initial, COMPOSITION_PRECEDENCE, true);
    if functions.len() == 1 {
        let f = &functions[0];
        let f_doc = thread_function_doc(f, false);
        if is_trailing_closure_call(f) {
            // The call's own inline/trailing group decides where the break happens; an
            // enclosing group here would be defeated by any bare `HardLine` in the trailing
            // form and force the pipe operator onto its own line regardless of fit.
            return Doc::concat([initial_doc, Doc::text(" |> "), f_doc]);
        }
        return Doc::concat([
            initial_doc,
            Doc::nest(
                Doc::concat([Doc::line(), Doc::text("|> "), f_doc]),
                INDENT_SIZE,
            ),
        ])
        .group();
    }
    let n = functions.len();
    let mut lines = Vec::with_capacity(n);
    for (i, f) in functions.iter().enumerate() {
        let f_doc = thread_function_doc(f, i + 1 < n);
        lines.push(Doc::hard_line().append(Doc::text("|> ")).append(f_doc));
    }
    Doc::concat([initial_doc, Doc::nest(Doc::concat(lines), INDENT_SIZE)])
}

/// True when `f` is a call whose last argument is a lambda — the case §4.3.1's pipe-chain rule
/// defers to the call's own trailing-closure logic, "the pipe operator still sits inline".
fn is_trailing_closure_call(f: &Expr) -> bool {
    matches!(f, Expr::Call { args, .. } if matches!(args.last(), Some(Expr::Function(_))))
}

fn thread_function_doc(f: &Expr, force_block_lambda: bool) -> Doc {
    let doc = if force_block_lambda {
        match f {
            Expr::Function(lambda) => build_lambda_always_block(lambda),
            Expr::Call { callee, args } => build_call_impl(callee, args, true),
            _ => build_expr(f),
        }
    } else {
        build_expr(f)
    };
    wrap_operand_doc(f, doc, COMPOSITION_PRECEDENCE, true)
}

fn build_composition(functions: &[Expr]) -> Doc {
    let mut iter = functions.iter();
    let Some(first) = iter.next() else {
        return Doc::nil();
    };
    let first_doc = wrap_operand(first, COMPOSITION_PRECEDENCE, true);
    let tail: Vec<Doc> = iter
        .map(|f| {
            Doc::line()
                .append(Doc::text(">> "))
                .append(wrap_operand(f, COMPOSITION_PRECEDENCE, true))
        })
        .collect();
    Doc::concat([first_doc, Doc::nest(Doc::concat(tail), INDENT_SIZE)]).group()
}

// -----------------------------------------------------------------------------------------
// if / match
// -----------------------------------------------------------------------------------------

fn build_if(cond: &Expr, then_body: &[Stmt], else_body: Option<&[Stmt]>) -> Doc {
    let cond_doc = build_expr(cond);
    let inline = {
        let mut d = Doc::concat([
            Doc::text("if "),
            cond_doc.clone(),
            Doc::text(" { "),
            inline_body_doc(then_body),
            Doc::text(" }"),
        ]);
        if let Some(body) = else_body {
            d = d
                .append(Doc::text(" else { "))
                .append(inline_body_doc(body))
                .append(Doc::text(" }"));
        }
        d
    };
    let multiline = {
        let mut d = Doc::concat([
            Doc::text("if "),
            cond_doc,
            Doc::text(" {"),
            braced_body(then_body),
            Doc::text("}"),
        ]);
        if let Some(body) = else_body {
            d = d
                .append(Doc::text(" else {"))
                .append(braced_body(body))
                .append(Doc::text("}"));
        }
        d
    };
    Doc::group(Doc::if_break(multiline, inline))
}

fn inline_body_doc(body: &[Stmt]) -> Doc {
    match simple_body_expr(body) {
        Some(e) => build_expr(e),
        None => build_block(body),
    }
}

fn build_match(subject: &Expr, cases: &[MatchCase]) -> Doc {
    let subject_doc = build_expr(subject);
    let case_docs: Vec<Doc> = cases.iter().map(build_match_case).collect();
    let body = Doc::concat(
        case_docs
            .into_iter()
            .map(|d| Doc::hard_line().append(d))
            .collect::<Vec<_>>(),
    );
    Doc::concat([
        Doc::text("match "),
        subject_doc,
        Doc::text(" {"),
        body.nest(INDENT_SIZE),
        Doc::hard_line(),
        Doc::text("}"),
    ])
}

fn build_match_case(case: &MatchCase) -> Doc {
    let mut head = build_pattern(&case.pattern);
    if let Some(guard) = &case.guard {
        head = head.append(Doc::text(" if ")).append(build_expr(guard));
    }
    let body_doc = match simple_body_expr(&case.body) {
        Some(e) => Doc::concat([Doc::text("{ "), build_expr(e), Doc::text(" }")]),
        None => Doc::concat([Doc::text("{"), braced_body(&case.body), Doc::text("}")]),
    };
    let mut doc = head.append(Doc::text(" ")).append(body_doc);
    if let Some(comment) = &case.trailing_comment {
        doc = doc.append(Doc::text(" ")).append(build_comment_text(comment));
    }
    doc
}

// -----------------------------------------------------------------------------------------
// Patterns
// -----------------------------------------------------------------------------------------

fn build_pattern(pattern: &Pattern) -> Doc {
    match pattern {
        Pattern::Identifier(name) => Doc::text(name.clone()),
        Pattern::Rest(name) => Doc::text(format!("..{name}")),
        Pattern::Placeholder => Doc::text("_"),
        Pattern::Integer(s) | Pattern::Decimal(s) => Doc::text(s.clone()),
        Pattern::Str(s) => build_string_literal(s),
        Pattern::Bool(b) => Doc::text(if *b { "true" } else { "false" }),
        Pattern::Nil => Doc::text("nil"),
        // Destructuring positions are assumed short: printed inline without bracketed's
        // soft-line break logic.
        Pattern::List(elems) => Doc::concat([
            Doc::text("["),
            Doc::join(elems.iter().map(build_pattern).collect::<Vec<_>>(), Doc::text(", ")),
            Doc::text("]"),
        ]),
        Pattern::Dict(entries) => Doc::concat([
            Doc::text("#{"),
            Doc::join(
                entries.iter().map(build_dict_pattern_entry).collect::<Vec<_>>(),
                Doc::text(", "),
            ),
            Doc::text("}"),
        ]),
    }
}

fn build_dict_pattern_entry(entry: &DictPatternEntry) -> Doc {
    if entry.shorthand {
        Doc::text(entry.key.clone())
    } else {
        Doc::concat([
            Doc::text(format!("{}: ", entry.key)),
            build_pattern(&entry.value),
        ])
    }
}

// -----------------------------------------------------------------------------------------
// Strings
// -----------------------------------------------------------------------------------------

fn build_string_literal(s: &str) -> Doc {
    Doc::text(format!("\"{}\"", escape_string(s)))
}

/// Escapes a string literal's contents (§4.3.3). Embedded newlines are kept literal (rather
/// than rewritten to `\n`) when the string is long or multi-line enough that escaping would
/// hurt readability more than it helps: more than three newlines, or over 50 bytes.
fn escape_string(s: &str) -> String {
    let newline_count = s.bytes().filter(|&b| b == b'\n').count();
    let keep_literal_newlines = newline_count > 3 || s.len() > 50;
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' if keep_literal_newlines => out.push('\n'),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::parse;

    fn render(src: &str) -> String {
        let tokens = Lexer::new(src).tokenize().unwrap();
        let program = parse(tokens).unwrap();
        build_program(&program).render()
    }

    #[test]
    fn simple_let_and_return_section() {
        let out = render("part_one: {\n  let x = 1\n  x + 1\n}");
        assert_eq!(out, "part_one: {\n  let x = 1;\n\n  x + 1\n}\n");
    }

    #[test]
    fn dict_shorthand_round_trips() {
        let out = render(r#"let foo = 1
let bar = 2
#{"foo": foo, "bar": bar}"#);
        assert!(out.contains("#{foo, bar}"));
    }

    #[test]
    fn single_pipe_groups_inline() {
        let out = render("xs |> map(|x| x + 1)");
        assert_eq!(out.trim_end(), "xs |> map(|x| x + 1)");
    }

    #[test]
    fn multi_pipe_forces_break() {
        let out = render("xs |> filter(|x| x > 0) |> map(|x| x * 2)");
        assert!(out.contains("\n|> filter"));
        assert!(out.contains("\n|> map"));
    }

    #[test]
    fn parenthesized_low_precedence_child_is_preserved() {
        let out = render("(a + b) * c");
        assert_eq!(out.trim_end(), "(a + b) * c");
    }

    #[test]
    fn redundant_same_precedence_parens_are_dropped() {
        let out = render("(a || b) && c");
        assert_eq!(out.trim_end(), "a || b && c");
    }

    #[test]
    fn lambda_body_that_is_a_set_literal_keeps_braces() {
        let lambda = Lambda {
            params: vec![Pattern::Identifier("x".to_string())],
            body: vec![Stmt::new(StmtKind::Expression(Expr::Set(vec![Expr::Ident(
                "x".to_string(),
            )])))],
        };
        let out = build_lambda(&lambda).render();
        assert_eq!(out.trim_end(), "|x| {\n  {x}\n}");
    }

    #[test]
    fn part_one_retains_braces_for_a_single_expression() {
        let body = vec![Stmt::new(StmtKind::Expression(Expr::Integer("2".to_string())))];
        let out = build_section("part_one", &[], &body).render();
        assert_eq!(out, "part_one: {\n  2\n}");
    }

    #[test]
    fn trailing_closure_inlines_when_short() {
        let out = render("map(xs, |x| x + 1)");
        assert_eq!(out.trim_end(), "map(xs, |x| x + 1)");
    }

    #[test]
    fn full_section_with_forced_block_pipe_stage() {
        let out = render(concat!(
            "part_one: {\n",
            "  let xs = input |> lines |> map(parse_int)\n",
            "  xs |> filter(|x| x > 0) |> fold(0, +)\n",
            "}"
        ));
        let expected = concat!(
            "part_one: {\n",
            "  let xs = input\n",
            "    |> lines\n",
            "    |> map(parse_int);\n",
            "\n",
            "  xs\n",
            "    |> filter |x| {\n",
            "      x > 0\n",
            "    }\n",
            "    |> fold(0, +)\n",
            "}\n",
        );
        assert_eq!(out, expected);
    }
}
