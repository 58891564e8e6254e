// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! The document algebra and its line-fitting printer.
//!
//! `Doc` is the intermediate representation between the AST builder and the final formatted
//! string: a small recursive algebra (`Nil`, `Text`, `Line`, `HardLine`, `BlankLine`, `Concat`,
//! `Group`, `Nest`, `IfBreak`) in the spirit of Wadler/Lindig pretty-printing. `Group` is the only
//! place a layout decision is made; everything else inherits the enclosing render mode.

use std::rc::Rc;

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Maximum line width the printer tries to respect.
pub const LINE_WIDTH: i64 = 100;
/// Indentation step used by `bracketed` and friends.
pub const INDENT_SIZE: i64 = 2;

/// Safety cap on indentation, and on the printer's internal indent-string cache.
const MAX_INDENT: usize = 4096;

/// Safety cap on the amount of work `measure_flat` will do before giving up and treating the
/// group as not fitting. Large enough that it is never hit by realistic documents.
const MEASURE_FLAT_BUDGET: usize = 20_000;

#[derive(Clone)]
pub struct Doc(Rc<DocInner>);

enum DocInner {
    Nil,
    Text(String),
    Line,
    HardLine,
    BlankLine,
    Concat(Vec<Doc>),
    Group(Doc),
    Nest(i64, Doc),
    IfBreak(Doc, Doc),
}

impl DocInner {
    fn into_doc(self) -> Doc {
        Doc(Rc::new(self))
    }
}

thread_local! {
    static NIL: Doc = DocInner::Nil.into_doc();
    static HARD_LINE: Doc = DocInner::HardLine.into_doc();
    static BLANK_LINE: Doc = DocInner::BlankLine.into_doc();
    static LINE: Doc = DocInner::Line.into_doc();
}

impl Doc {
    // -------------------------------------------------------------------------------------
    // Constructors
    // -------------------------------------------------------------------------------------

    pub fn nil() -> Doc {
        NIL.with(|d| d.clone())
    }

    pub fn text<S: Into<String>>(s: S) -> Doc {
        let s = s.into();
        if s.is_empty() {
            Doc::nil()
        } else {
            DocInner::Text(s).into_doc()
        }
    }

    pub fn line() -> Doc {
        LINE.with(|d| d.clone())
    }

    pub fn hard_line() -> Doc {
        HARD_LINE.with(|d| d.clone())
    }

    pub fn blank_line() -> Doc {
        BLANK_LINE.with(|d| d.clone())
    }

    /// `if_break(hard_line, nil)` — vanishes in flat mode, becomes a newline when broken.
    pub fn soft_line() -> Doc {
        Doc::if_break(Doc::hard_line(), Doc::nil())
    }

    pub fn group(self) -> Doc {
        DocInner::Group(self).into_doc()
    }

    pub fn nest(self, indent: i64) -> Doc {
        if indent == 0 {
            return self;
        }
        match &*self.0 {
            DocInner::Nest(n, inner) => DocInner::Nest(n + indent, inner.clone()).into_doc(),
            _ => DocInner::Nest(indent, self).into_doc(),
        }
    }

    pub fn if_break(broken: Doc, flat: Doc) -> Doc {
        DocInner::IfBreak(broken, flat).into_doc()
    }

    /// Ordered concatenation. Nested `Concat`s are spliced and `Nil`s dropped; this is a pure
    /// optimization and never changes the rendered output.
    pub fn concat(docs: impl IntoIterator<Item = Doc>) -> Doc {
        let mut flat = Vec::new();
        flatten_concat(docs, &mut flat);
        match flat.len() {
            0 => Doc::nil(),
            1 => flat.into_iter().next().unwrap(),
            _ => DocInner::Concat(flat).into_doc(),
        }
    }

    /// Append `other` after `self`.
    pub fn append(self, other: Doc) -> Doc {
        Doc::concat([self, other])
    }

    /// Surround `self` with `(` and `)`.
    pub fn parens(self) -> Doc {
        Doc::concat([Doc::text("("), self, Doc::text(")")])
    }

    /// Join `docs` with `sep` between each adjacent pair. Empty input yields `nil`.
    pub fn join(docs: impl IntoIterator<Item = Doc>, sep: Doc) -> Doc {
        let mut iter = docs.into_iter();
        let Some(first) = iter.next() else {
            return Doc::nil();
        };
        let mut parts = vec![first];
        for next in iter {
            parts.push(sep.clone());
            parts.push(next);
        }
        Doc::concat(parts)
    }

    /// `open · nest(2, soft_line · join(elems, sep) · trailing) · soft_line · close`, the
    /// standard bracketed-list layout: comma-space inline, one element per line when broken.
    pub fn bracketed(open: Doc, elems: Vec<Doc>, close: Doc, trailing_comma: bool) -> Doc {
        if elems.is_empty() {
            return Doc::concat([open, close]);
        }
        let sep = Doc::if_break(Doc::text(",").append(Doc::hard_line()), Doc::text(", "));
        let trailing = if trailing_comma {
            Doc::if_break(Doc::text(","), Doc::nil())
        } else {
            Doc::nil()
        };
        let body = Doc::soft_line()
            .append(Doc::join(elems, sep))
            .append(trailing);
        Doc::concat([open, body.nest(INDENT_SIZE), Doc::soft_line(), close])
            .group()
    }

    // -------------------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------------------

    pub fn render(&self) -> String {
        render(self.clone())
    }
}

fn flatten_concat(docs: impl IntoIterator<Item = Doc>, out: &mut Vec<Doc>) {
    for doc in docs {
        match &*doc.0 {
            DocInner::Nil => {}
            DocInner::Concat(inner) => flatten_concat(inner.iter().cloned(), out),
            _ => out.push(doc),
        }
    }
}

// -------------------------------------------------------------------------------------------
// Printer
// -------------------------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

static INDENT_CACHE: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(String::new()));

/// Returns `n` spaces (clamped to `MAX_INDENT`), growing the shared cache on demand.
fn indent_str(n: i64) -> String {
    let n = n.clamp(0, MAX_INDENT as i64) as usize;
    let mut cache = INDENT_CACHE.lock().unwrap();
    if cache.len() < n {
        let needed = n - cache.len();
        cache.push_str(&" ".repeat(needed));
    }
    cache[..n].to_string()
}

/// Render a `Doc` to its canonical string form.
///
/// The work stack holds `(indent, mode, doc)` triples so the algorithm stays iterative
/// regardless of `Doc` nesting depth; only `Group` ever switches `mode`.
pub fn render(root: Doc) -> String {
    let mut out = String::new();
    let mut column: i64 = 0;
    let mut stack: Vec<(i64, Mode, Doc)> = vec![(0, Mode::Break, root)];

    while let Some((indent, mode, doc)) = stack.pop() {
        match &*doc.0 {
            DocInner::Nil => {}
            DocInner::Text(s) => {
                out.push_str(s);
                column += s.len() as i64;
            }
            DocInner::Line => {
                if mode == Mode::Flat {
                    out.push(' ');
                    column += 1;
                } else {
                    out.push('\n');
                    let pad = indent_str(indent);
                    out.push_str(&pad);
                    column = indent;
                }
            }
            DocInner::HardLine => {
                out.push('\n');
                let pad = indent_str(indent);
                out.push_str(&pad);
                column = indent;
            }
            DocInner::BlankLine => {
                out.push('\n');
                column = 0;
            }
            DocInner::Concat(docs) => {
                for d in docs.iter().rev() {
                    stack.push((indent, mode, d.clone()));
                }
            }
            DocInner::Nest(n, inner) => {
                stack.push((indent + n, mode, inner.clone()));
            }
            DocInner::IfBreak(broken, flat) => {
                if mode == Mode::Flat {
                    stack.push((indent, mode, flat.clone()));
                } else {
                    stack.push((indent, mode, broken.clone()));
                }
            }
            DocInner::Group(inner) => {
                if mode == Mode::Flat {
                    stack.push((indent, Mode::Flat, inner.clone()));
                } else {
                    let remaining = LINE_WIDTH - column;
                    if measure_flat(inner, remaining) {
                        stack.push((indent, Mode::Flat, inner.clone()));
                    } else {
                        stack.push((indent, Mode::Break, inner.clone()));
                    }
                }
            }
        }
    }

    out
}

/// Walks `doc` as if it were rendered flat, summing widths. Returns `false` if a `HardLine`/
/// `BlankLine` is encountered (a group containing one never fits flat), if the accumulated width
/// exceeds `remaining`, or if the bounded work budget is exhausted.
fn measure_flat(doc: &Doc, remaining: i64) -> bool {
    let mut budget = MEASURE_FLAT_BUDGET;
    let mut stack: Vec<Doc> = vec![doc.clone()];
    let mut remaining = remaining;

    while let Some(doc) = stack.pop() {
        if budget == 0 {
            return false;
        }
        budget -= 1;
        match &*doc.0 {
            DocInner::Nil => {}
            DocInner::Text(s) => {
                let w = s.len() as i64;
                if w > remaining {
                    return false;
                }
                remaining -= w;
            }
            DocInner::Line => {
                if remaining < 1 {
                    return false;
                }
                remaining -= 1;
            }
            DocInner::HardLine | DocInner::BlankLine => return false,
            DocInner::Concat(docs) => {
                for d in docs.iter().rev() {
                    stack.push(d.clone());
                }
            }
            DocInner::Nest(_, inner) => stack.push(inner.clone()),
            // A nested Group is transparent once we're measuring flat: it can only shrink,
            // never grow, relative to rendering its inner content directly.
            DocInner::Group(inner) => stack.push(inner.clone()),
            DocInner::IfBreak(_, flat) => stack.push(flat.clone()),
        }
        if remaining < 0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_to_empty_output() {
        assert_eq!(Doc::nil().render(), "");
    }

    #[test]
    fn concat_identity() {
        let d = Doc::text("x").append(Doc::text("y"));
        let with_nil = Doc::concat([Doc::nil(), d.clone()]);
        assert_eq!(with_nil.render(), d.render());
    }

    #[test]
    fn group_idempotence() {
        let d = Doc::text("abc");
        assert_eq!(d.clone().group().group().render(), d.group().render());
    }

    #[test]
    fn nest_additivity() {
        let d = Doc::hard_line().append(Doc::text("y"));
        let nested_twice = d.clone().nest(3).nest(2);
        let nested_once = d.nest(5);
        assert_eq!(nested_twice.render(), nested_once.render());
    }

    #[test]
    fn if_break_absorbs_to_broken_branch_outside_any_group() {
        // The root work item starts in break mode, so an un-grouped `IfBreak` at the top level
        // renders exactly as its broken branch would on its own.
        let doc = Doc::if_break(Doc::text("broken"), Doc::text("flat"));
        assert_eq!(doc.render(), Doc::text("broken").render());
    }

    #[test]
    fn if_break_absorbs_to_flat_branch_inside_a_fitting_group() {
        let doc = Doc::group(Doc::if_break(Doc::text("broken"), Doc::text("flat")));
        assert_eq!(doc.render(), Doc::group(Doc::text("flat")).render());
    }

    #[test]
    fn group_stays_flat_at_exact_line_width_boundary() {
        let n = (LINE_WIDTH - 2) as usize;
        let doc = Doc::group(Doc::concat([Doc::text("a".repeat(n)), Doc::line(), Doc::text("b")]));
        assert!(!doc.render().contains('\n'));
    }

    #[test]
    fn group_breaks_one_char_past_line_width() {
        let n = (LINE_WIDTH - 1) as usize;
        let doc = Doc::group(Doc::concat([Doc::text("a".repeat(n)), Doc::line(), Doc::text("b")]));
        assert!(doc.render().contains('\n'));
    }
}
