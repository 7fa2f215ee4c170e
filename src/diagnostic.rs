//! Error reports pointing back into the source text

use std::fmt;

use crate::program::Span;

/// Lexemes longer than this are shortened in the context line
const MAX_LEXEME_LEN: usize = 30;
/// Characters kept from each end of a shortened lexeme
const LEXEME_EDGE: usize = 10;
/// Characters of surrounding text shown on each side of the lexeme
const INDENT: usize = 20;

/// Report of a failed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Lexeme of the failing operator
    pub operator: String,
    /// Source line around the operator
    pub context: String,
    /// `^` marks under the operator in `context`
    pub underline: String,
    /// Tape pointer when the error occurred
    pub pointer: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(text: &str, lexeme: &str, span: Span, pointer: usize, message: String) -> Self {
        let (context, underline) = error_context(text, span);
        Diagnostic {
            operator: lexeme.to_string(),
            context,
            underline,
            pointer,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "RunTime error [operator: ` {} `; pointer: {}]:",
            self.operator, self.pointer
        )?;
        writeln!(f, "{}", self.context)?;
        writeln!(f, "{}", self.underline)?;
        write!(f, "{}", self.message)
    }
}

/// Build the context line of `span` and its underline.
///
/// ```text
/// some text        OperatorWi...ryLongName           some text
///                  ^^^^^^^^^^^^^^^^^^^^^^^
/// ```
///
/// The context never crosses a line break of the source.
pub fn error_context(text: &str, span: Span) -> (String, String) {
    let lexeme: Vec<char> = text[span.start..span.end].chars().collect();
    let lexeme: String = if lexeme.len() > MAX_LEXEME_LEN {
        let head: String = lexeme[..LEXEME_EDGE].iter().collect();
        let tail: String = lexeme[lexeme.len() - LEXEME_EDGE..].iter().collect();
        format!("{head}...{tail}")
    } else {
        lexeme.into_iter().collect()
    };

    let mut previous: Vec<char> = text[..span.start].chars().rev().take(INDENT).collect();
    if let Some(idx) = previous.iter().position(|&ch| ch == '\n') {
        previous.truncate(idx);
    }
    let previous: String = previous.into_iter().rev().collect();

    let subsequent: String = text[span.end..]
        .chars()
        .take(INDENT)
        .take_while(|&ch| ch != '\n')
        .collect();

    let underline = format!(
        "{}{}{}",
        " ".repeat(previous.chars().count()),
        "^".repeat(lexeme.chars().count()),
        " ".repeat(subsequent.chars().count())
    );
    let context = format!("{previous}{lexeme}{subsequent}");

    (context, underline)
}
