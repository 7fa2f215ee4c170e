//! Brainfuck Family Interpreter (BFI) runs Brainfuck and its many
//! disguised dialects on a tape-based virtual machine.
//!
//! # Example
//!
//! ```
//! use bfi::{config::Config, run_program};
//!
//! let mut input = std::io::empty();
//! let mut output = Vec::new();
//! let diagnostic = run_program(
//!     "++++++++[>++++++++<-]>+.",
//!     "Brainfuck",
//!     &Config::default(),
//!     &mut input,
//!     &mut output,
//! )
//! .unwrap();
//!
//! assert!(diagnostic.is_none());
//! assert_eq!(output, b"A");
//! ```
//!
//! # Operators
//!
//! | Operator     | Brainfuck | Brief   |
//! |--------------|-----------|---------|
//! | Right        | `>`       | Move the pointer to the next cell. Wraps to the first cell on a looped tape. |
//! | Left         | `<`       | Move the pointer to the previous cell. Wraps to the last cell on a looped tape. |
//! | Increment    | `+`       | Increment the current cell. |
//! | Decrement    | `-`       | Decrement the current cell. |
//! | Output       | `.`       | Print the current cell as a unicode character. |
//! | Input        | `,`       | Read a line and store the code of its first non-space character, `\n` if there is none. |
//! | While        | `[`       | Jump past the matching `]` if the current cell is zero. |
//! | WhileEnd     | `]`       | Jump back to the matching `[` if the current cell is not zero. |
//! | Repeat       |           | Run the previous operator once more (`FuckFuck` only). |
//! | GiveFishfood |           | Joke operator of `Blub`. |
//! | GiveBanana   |           | Joke operator of `Ook`. |
//!
//! # Cells
//!
//! The [`config::Config`] decides the tape length, whether the pointer wraps
//! at the ends of the tape, how many values a cell has, whether they are
//! signed and whether an overflow wraps around or stops the program.
//!
//! # Dialects
//!
//! | Dialect       | Strategy        |
//! |---------------|-----------------|
//! | Brainfuck, Alphuck, BrainSymbol, !!Fuck, German, MessyScript, MorseFuck, Pewlang, ReverseFuck, Roadrunner, Ternary, Triplet, UwU, Blub, Ook | unique lexemes |
//! | WholesomeFuck, ZZZ | lexemes tried by priority |
//! | FuckFuck      | `f**k`-like words, only the outer letters count |
//! | Tally, Knots  | number of markers in a run |
//! | Lengthy       | word length |
//! | Echo          | repetitions of a unit in a word |
//! | Scream        | unique lexemes and nested `(...)` comments |
//!
//! # Important notes
//!
//! - Characters that are not part of any lexeme are ignored.
//! - An unclosed `[` ends the program when its loop is skipped.
//! - A `]` without its `[` is an error once it has to jump back.
//! - `Repeat` after a loop operator is not supported.

pub mod config;
pub mod diagnostic;
pub mod dialect;
pub mod encodings;
pub mod error;
pub mod lexer;
pub mod operator;
pub mod program;
pub mod vm;

use std::io::{BufRead, Write};

use crate::{config::Config, diagnostic::Diagnostic, program::Program, vm::Runtime};

/// Run `text` written in the dialect called `dialect_name`.
///
/// Returns the diagnostic of the execution error that stopped the program,
/// if any. An unknown dialect is returned as a [`error::DialectError`].
pub fn run_program(
    text: &str,
    dialect_name: &str,
    config: &Config,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> anyhow::Result<Option<Diagnostic>> {
    let dialect = dialect::lookup(dialect_name)?;
    let program = Program::new(text, dialect);
    Runtime::new(&program, config, input, output).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialectError;

    #[test]
    fn unknown_dialect() {
        let mut output = Vec::new();
        let err = run_program("+", "Klingon", &Config::default(), &mut std::io::empty(), &mut output)
            .unwrap_err();
        assert_eq!(
            err.downcast::<DialectError>().unwrap(),
            DialectError::UnknownDialect("Klingon".to_string())
        );
    }

    #[test]
    fn same_program_in_two_dialects() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let config = Config::default();

        run_program("+++[>++<-]>.", "Brainfuck", &config, &mut std::io::empty(), &mut first).unwrap();
        run_program("eeepaeecisaj", "Alphuck", &config, &mut std::io::empty(), &mut second).unwrap();
        assert_eq!(first, vec![6]);
        assert_eq!(first, second);
    }
}
