//! Literal lexeme scanning and comment stripping

use crate::{
    operator::OperatorKind,
    program::{Instruction, Span},
};

/// Lexeme table of a dialect whose lexemes never prefix each other
pub type UniqueTable = [(&'static str, OperatorKind)];

/// Lexeme table with a priority per lexeme (lower is tried first)
pub type OrderedTable = [(&'static str, u32, OperatorKind)];

pub struct Lexer<'a> {
    program: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(program: &'a str) -> Self {
        Lexer { program, cursor: 0 }
    }

    /// Get the next operator. Lexemes are tried in the order of `lexemes`,
    /// the first one that matches at the cursor wins. Unknown characters
    /// are skipped.
    pub fn next_operator(&mut self, lexemes: &[(&str, OperatorKind)]) -> Option<Instruction<'a>> {
        while self.cursor < self.program.len() {
            let rest = &self.program[self.cursor..];
            let found = lexemes
                .iter()
                .find(|(lexeme, _)| !lexeme.is_empty() && rest.starts_with(lexeme));

            if let Some((lexeme, kind)) = found {
                let start = self.cursor;
                self.cursor += lexeme.len();
                return Some(Instruction::from_source(*kind, self.program, start, self.cursor));
            }

            self.skip_char();
        }

        None
    }

    /// Move past the character under the cursor
    fn skip_char(&mut self) {
        let width = self.program[self.cursor..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.cursor += width;
    }
}

/// Tokenize with a table of lexemes that cannot contain each other.
pub fn tokenize_unique<'a>(text: &'a str, table: &UniqueTable) -> Vec<Instruction<'a>> {
    let mut lexer = Lexer::new(text);
    let mut operators = Vec::new();
    while let Some(operator) = lexer.next_operator(table) {
        operators.push(operator);
    }
    operators
}

/// Tokenize with a table whose lexemes may prefix each other. Lexemes are
/// tried by ascending priority, not by length.
pub fn tokenize_ordered<'a>(text: &'a str, table: &OrderedTable) -> Vec<Instruction<'a>> {
    let mut sorted: Vec<_> = table.iter().collect();
    sorted.sort_by_key(|(_, priority, _)| *priority);
    let lexemes: Vec<(&str, OperatorKind)> = sorted
        .into_iter()
        .map(|(lexeme, _, kind)| (*lexeme, *kind))
        .collect();

    let mut lexer = Lexer::new(text);
    let mut operators = Vec::new();
    while let Some(operator) = lexer.next_operator(&lexemes) {
        operators.push(operator);
    }
    operators
}

/// Find the comment ranges delimited by `open` and `close`.
///
/// Comments nest. A `close` outside of any comment is ordinary text and an
/// unclosed comment runs to the end of the text. Ranges are returned in
/// text order and include both delimiters.
pub fn comment_ranges(text: &str, open: char, close: char) -> Vec<Span> {
    let mut ranges = Vec::new();
    let mut nesting = 0usize;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if ch == open {
            if nesting == 0 {
                start = idx;
            }
            nesting += 1;
        } else if ch == close && nesting > 0 {
            nesting -= 1;
            if nesting == 0 {
                ranges.push(Span::new(start, idx + ch.len_utf8()));
            }
        }
    }

    if nesting > 0 {
        ranges.push(Span::new(start, text.len()));
    }

    ranges
}

/// Drop the operators lying completely inside one of `comments`.
/// Both lists must be in text order.
pub fn strip_comments<'a>(operators: Vec<Instruction<'a>>, comments: &[Span]) -> Vec<Instruction<'a>> {
    let mut comments = comments.iter().peekable();

    operators
        .into_iter()
        .filter(|operator| {
            // Ranges ending before this operator cannot hold any later one
            while comments
                .peek()
                .is_some_and(|comment| comment.end <= operator.span.start)
            {
                comments.next();
            }
            !comments
                .peek()
                .is_some_and(|comment| operator.span.within(comment))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use OperatorKind::*;

    fn kinds(operators: &[Instruction]) -> Vec<OperatorKind> {
        operators.iter().map(|op| op.kind).collect()
    }

    #[test]
    fn skip_noise() {
        let table = [("+", Increment), ("-", Decrement)];
        let operators = tokenize_unique("a+ b-\n+", &table);
        assert_eq!(kinds(&operators), vec![Increment, Decrement, Increment]);
        assert_eq!(operators[1].span, Span::new(4, 5));
        assert_eq!(operators[1].lexeme, "-");
    }

    #[test]
    fn multibyte_lexemes() {
        let table = [("°w°", Left), ("UwU", Increment)];
        let text = "é°w° UwU";
        let operators = tokenize_unique(text, &table);
        assert_eq!(kinds(&operators), vec![Left, Increment]);
        assert_eq!(&text[operators[0].span.start..operators[0].span.end], "°w°");
    }

    #[test]
    fn unique_order_invariance() {
        let text = "pew Pew pEw xx peW PeW PEW pEW PEw";
        let table = [
            ("pew", Right),
            ("Pew", Left),
            ("pEw", Increment),
            ("peW", Decrement),
            ("pEW", Output),
            ("PEw", Input),
            ("PeW", While),
            ("PEW", WhileEnd),
        ];
        let mut reversed = table;
        reversed.reverse();

        assert_eq!(tokenize_unique(text, &table), tokenize_unique(text, &reversed));
    }

    #[test]
    fn priority_over_length() {
        // `zzz` has the lowest priority number and is tried first
        let table = [("z", 2, Increment), ("zz", 1, Right), ("zzz", 0, Output)];
        let operators = tokenize_ordered("zzz", &table);
        assert_eq!(kinds(&operators), vec![Output]);

        // The longer lexeme wins although the shorter one is declared first
        let table = [("z", 5, Increment), ("zz", 1, Right)];
        let operators = tokenize_ordered("zz", &table);
        assert_eq!(kinds(&operators), vec![Right]);
        assert_eq!(operators[0].span, Span::new(0, 2));

        // A shorter lexeme with lower priority number shadows the longer one
        let table = [("z", 0, Increment), ("zz", 1, Right)];
        let operators = tokenize_ordered("zz", &table);
        assert_eq!(kinds(&operators), vec![Increment, Increment]);
    }

    #[test]
    fn nested_comments() {
        let text = "AAAA (AAAA (AAAA)) AAAA";
        let ranges = comment_ranges(text, '(', ')');
        assert_eq!(ranges, vec![Span::new(5, 18)]);

        let operators = tokenize_unique(text, &[("AAAA", Increment)]);
        assert_eq!(operators.len(), 4);
        let operators = strip_comments(operators, &ranges);
        assert_eq!(operators.len(), 2);
        assert_eq!(operators[0].span, Span::new(0, 4));
        assert_eq!(operators[1].span, Span::new(19, 23));
    }

    #[test]
    fn stray_close_and_unclosed_open() {
        let text = ") a (b) c ((d";
        let ranges = comment_ranges(text, '(', ')');
        assert_eq!(ranges, vec![Span::new(4, 7), Span::new(10, 13)]);

        let table = [("a", Right), ("b", Left), ("c", Output), ("d", Input)];
        let operators = strip_comments(tokenize_unique(text, &table), &ranges);
        assert_eq!(kinds(&operators), vec![Right, Output]);
    }
}
