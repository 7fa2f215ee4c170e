//! Program representation

use tracing::debug;

use crate::{dialect::Dialect, operator::OperatorKind};

static START_LEXEME: &str = "~start~";
static END_LEXEME: &str = "~end~";

/// Byte range of a lexeme in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Whether `self` lies completely inside `other`
    pub fn within(&self, other: &Span) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

/// A single tokenized operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub kind: OperatorKind,
    /// Source text the operator was read from
    pub lexeme: &'a str,
    pub span: Span,
}

impl<'a> Instruction<'a> {
    pub fn new(kind: OperatorKind, lexeme: &'a str, span: Span) -> Self {
        Instruction { kind, lexeme, span }
    }

    /// Instruction whose lexeme is exactly `text[start..end]`
    pub fn from_source(kind: OperatorKind, text: &'a str, start: usize, end: usize) -> Self {
        Instruction::new(kind, &text[start..end], Span::new(start, end))
    }
}

/// Tokenized program: instructions bracketed by `Start` and `End`.
#[derive(Debug)]
pub struct Program<'a> {
    /// Original source, used for diagnostics
    pub text: &'a str,
    /// Array of instructions from first to last
    pub instructions: Vec<Instruction<'a>>,
}

impl<'a> Program<'a> {
    /// Tokenize `text` with `dialect` and add the sentinels.
    pub fn new(text: &'a str, dialect: &Dialect) -> Self {
        let operators = dialect.tokenize(text);
        debug!(
            dialect = dialect.name,
            operators = operators.len(),
            "program tokenized"
        );

        Program::from_instructions(text, operators)
    }

    /// Build a program from already tokenized instructions.
    pub fn from_instructions(text: &'a str, operators: Vec<Instruction<'a>>) -> Self {
        let mut instructions = Vec::with_capacity(operators.len() + 2);
        instructions.push(Instruction::new(
            OperatorKind::Start,
            START_LEXEME,
            Span::new(0, 0),
        ));
        instructions.extend(operators);
        instructions.push(Instruction::new(
            OperatorKind::End,
            END_LEXEME,
            Span::new(text.len(), text.len()),
        ));

        Program { text, instructions }
    }

    /// Kinds of all instructions, sentinels included
    pub fn kinds(&self) -> Vec<OperatorKind> {
        self.instructions.iter().map(|ins| ins.kind).collect()
    }

    /// Number of real (non-sentinel) instructions
    pub fn len(&self) -> usize {
        self.instructions.len() - 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
