// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by the formatter library.

use std::fmt;

/// The single error type `format`/`is_formatted` can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The lexer or parser rejected the input.
    Parse { message: String, line: usize },
    /// An allocation failed while building the document or rendering it.
    OutOfMemory,
}

impl FormatError {
    pub(crate) fn parse<S: Into<String>>(message: S, line: usize) -> Self {
        FormatError::Parse {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Parse { message, line } => {
                write!(f, "parse-error: {message} (line {line})")
            }
            FormatError::OutOfMemory => write!(f, "out-of-memory"),
        }
    }
}

impl std::error::Error for FormatError {}
