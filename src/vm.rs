//! Virtual machine that runs a tokenized program

use std::io::{BufRead, Write};

use anyhow::anyhow;
use tracing::{debug, error, trace, warn};

use crate::{
    config::Config,
    diagnostic::Diagnostic,
    error::{ExecutionError, UNICODE_MAX},
    operator::OperatorKind,
    program::Program,
};

/// Virtual machine state for one run of a program
pub struct Runtime<'p, 'a> {
    program: &'p Program<'a>,
    config: &'p Config,

    tape: Vec<i64>,
    pointer: usize,           // active cell
    cursor: usize,            // instruction to run next
    is_running: bool,         // cleared by `End` or by an error
    linebreak_required: bool, // last output char was not a newline

    input: &'p mut dyn BufRead,
    output: &'p mut dyn Write,
}

impl<'p, 'a> Runtime<'p, 'a> {
    pub fn new(
        program: &'p Program<'a>,
        config: &'p Config,
        input: &'p mut dyn BufRead,
        output: &'p mut dyn Write,
    ) -> Self {
        Runtime {
            program,
            config,
            tape: vec![0; config.tape_len()],
            pointer: 0,
            cursor: 0,
            is_running: true,
            linebreak_required: false,
            input,
            output,
        }
    }

    /// Run the program until `End` or the first execution error.
    ///
    /// An execution error is reported as a [`Diagnostic`] and stops the
    /// program. Any other error (I/O on the streams for instance) is an
    /// interpreter fault and is returned as is.
    pub fn run(&mut self) -> anyhow::Result<Option<Diagnostic>> {
        if !self.is_running {
            return Err(anyhow!("Program is already ended."));
        }

        debug!(
            operators = self.program.len(),
            tape_len = self.config.tape_len(),
            "runtime started"
        );

        while self.is_running {
            if let Err(err) = self.next_instruction() {
                let err = err.downcast::<ExecutionError>()?;
                self.is_running = false;
                return Ok(Some(self.report(err)?));
            }
        }

        self.output.flush()?;
        debug!(pointer = self.pointer, "runtime halted");
        Ok(None)
    }

    /// Execute the instruction under the cursor and move to the next one.
    pub fn next_instruction(&mut self) -> anyhow::Result<()> {
        let kind = self.program.instructions[self.cursor].kind;
        trace!(cursor = self.cursor, ?kind, pointer = self.pointer, "step");

        self.execute(kind, self.config)?;
        self.cursor += 1;

        Ok(())
    }

    pub fn tape(&self) -> &[i64] {
        &self.tape
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    fn execute(&mut self, kind: OperatorKind, config: &Config) -> anyhow::Result<()> {
        match kind {
            OperatorKind::Start => {}
            OperatorKind::End => self.is_running = false,
            OperatorKind::Right => self.op_right(config)?,
            OperatorKind::Left => self.op_left(config)?,
            OperatorKind::Increment => self.op_increment(config)?,
            OperatorKind::Decrement => self.op_decrement(config)?,
            OperatorKind::Output => self.op_output()?,
            OperatorKind::Input => self.op_input(config)?,
            OperatorKind::While => self.op_while(),
            OperatorKind::WhileEnd => self.op_while_end()?,
            OperatorKind::Repeat => self.op_repeat(config)?,
            OperatorKind::GiveFishfood | OperatorKind::GiveBanana => self.op_decoration(kind)?,
        };

        Ok(())
    }

    fn current(&self) -> i64 {
        self.tape[self.pointer]
    }

    fn set_current(&mut self, value: i64) {
        self.tape[self.pointer] = value;
    }

    fn kind_at(&self, cursor: usize) -> OperatorKind {
        self.program.instructions[cursor].kind
    }

    /// Move the pointer to the next cell
    fn op_right(&mut self, config: &Config) -> Result<(), ExecutionError> {
        if self.pointer + 1 < config.tape_len() {
            self.pointer += 1;
        } else if config.is_looped() {
            self.pointer = 0;
        } else {
            return Err(ExecutionError::PointerTooHigh {
                pointer: self.pointer + 1,
                last: config.tape_len() - 1,
            });
        }

        Ok(())
    }

    /// Move the pointer to the previous cell
    fn op_left(&mut self, config: &Config) -> Result<(), ExecutionError> {
        if self.pointer > 0 {
            self.pointer -= 1;
        } else if config.is_looped() {
            self.pointer = config.tape_len() - 1;
        } else {
            return Err(ExecutionError::PointerTooLow);
        }

        Ok(())
    }

    fn op_increment(&mut self, config: &Config) -> Result<(), ExecutionError> {
        let value = config.clamp_high(self.current() + 1)?;
        self.set_current(value);
        Ok(())
    }

    fn op_decrement(&mut self, config: &Config) -> Result<(), ExecutionError> {
        let value = config.clamp_low(self.current() - 1)?;
        self.set_current(value);
        Ok(())
    }

    /// Print the current cell as a unicode character
    fn op_output(&mut self) -> anyhow::Result<()> {
        let value = self.current();
        let ch = (0..UNICODE_MAX)
            .contains(&value)
            .then(|| u32::try_from(value).ok().and_then(char::from_u32))
            .flatten()
            .ok_or(ExecutionError::OutOfUnicodeRange { value })?;

        write!(self.output, "{}", ch)?;
        self.linebreak_required = ch != '\n';

        Ok(())
    }

    /// Read a line and store the code of its first non-space character
    fn op_input(&mut self, config: &Config) -> anyhow::Result<()> {
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let ch = line
            .trim_end_matches(['\n', '\r'])
            .trim_start_matches(' ')
            .chars()
            .next()
            .unwrap_or('\n');

        let value = config.clamp_high(i64::from(u32::from(ch)))?;
        self.set_current(value);

        Ok(())
    }

    /// Skip the loop when the current cell is zero.
    ///
    /// An unclosed loop jumps to just before `End`, so the program stops.
    fn op_while(&mut self) {
        if self.current() != 0 {
            return;
        }

        let mut cursor = self.cursor;
        let mut nesting = 0usize;
        loop {
            match self.kind_at(cursor) {
                OperatorKind::While => nesting += 1,
                OperatorKind::WhileEnd => nesting -= 1,
                OperatorKind::End => {
                    warn!(cursor = self.cursor, "loop is never closed");
                    cursor -= 1;
                    break;
                }
                _ => {}
            }

            if nesting == 0 {
                break;
            }
            cursor += 1;
        }

        self.cursor = cursor;
    }

    /// Go back to the loop start when the current cell is not zero
    fn op_while_end(&mut self) -> Result<(), ExecutionError> {
        if self.current() == 0 {
            return Ok(());
        }

        let mut cursor = self.cursor;
        let mut nesting = 0usize;
        loop {
            match self.kind_at(cursor) {
                OperatorKind::WhileEnd => nesting += 1,
                OperatorKind::While => nesting -= 1,
                OperatorKind::Start => return Err(ExecutionError::UnmatchedLoopClose),
                _ => {}
            }

            if nesting == 0 {
                break;
            }
            cursor -= 1;
        }

        self.cursor = cursor;
        Ok(())
    }

    /// Run the closest previous operator that is not a `Repeat` once more.
    ///
    /// Repeating `While` or `WhileEnd` scans from the `Repeat` itself, which
    /// does not find the loop bounds. Such programs are not supported.
    fn op_repeat(&mut self, config: &Config) -> anyhow::Result<()> {
        let previous = (0..self.cursor)
            .rev()
            .map(|cursor| self.kind_at(cursor))
            .find(|kind| *kind != OperatorKind::Repeat);

        match previous {
            Some(OperatorKind::Start) | None => Err(ExecutionError::NoPreviousOperator.into()),
            Some(kind) => self.execute(kind, config),
        }
    }

    /// Print the message of a joke operator on its own line
    fn op_decoration(&mut self, kind: OperatorKind) -> anyhow::Result<()> {
        if let Some(message) = kind.decoration() {
            self.break_line()?;
            writeln!(self.output, "{}", message)?;
            self.linebreak_required = false;
        }

        Ok(())
    }

    /// End the current output line if something was printed on it
    fn break_line(&mut self) -> anyhow::Result<()> {
        if self.linebreak_required {
            writeln!(self.output)?;
            self.linebreak_required = false;
        }
        Ok(())
    }

    fn report(&mut self, err: ExecutionError) -> anyhow::Result<Diagnostic> {
        self.break_line()?;
        self.output.flush()?;

        let instruction = &self.program.instructions[self.cursor];
        let diagnostic = Diagnostic::new(
            self.program.text,
            instruction.lexeme,
            instruction.span,
            self.pointer,
            err.to_string(),
        );
        error!(cursor = self.cursor, "{}", diagnostic);

        Ok(diagnostic)
    }
}
