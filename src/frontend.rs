//! Interactive prompt and error reporting

use std::io::{self, BufRead, Write};
use crate::parser::ParserError;
use crate::runtime::{Object, Environment, Env};
use crate::interpreter::EvalContext;



pub const PROMPT: &str = ">> ";

pub fn print_parser_errors(out: &mut dyn Write, errors: &[ParserError]) -> io::Result<()> {
    writeln!(out, "parser errors:")?;
    for error in errors.iter() {
        writeln!(out, "\t{}", error)?;
    }
    Ok(())
}


enum ReadLine {
    Ok(String),
    Empty,
    Quit,
}

/// Read-eval-print loop. Bindings persist from one line to the next.
pub struct Repl<R, W> {
    input: R,
    output: W,
    env: Env,
}

impl<R, W> Repl<R, W> where R: BufRead, W: Write {
    pub fn new(input: R, output: W) -> Self {
        Self::with_env(input, output, Environment::new())
    }

    /// Continue a session in an environment that already has bindings
    pub fn with_env(input: R, output: W, env: Env) -> Self {
        Repl { input, output, env }
    }

    pub fn env(&self) -> &Env { &self.env }

    pub fn into_output(self) -> W { self.output }

    fn read_line(&mut self) -> io::Result<ReadLine> {
        self.output.write_all(PROMPT.as_bytes())?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(ReadLine::Quit);
        }

        let line = input.trim_end();
        if line.is_empty() {
            return Ok(ReadLine::Empty);
        }

        if line == "quit" || line.contains('\x04') {
            return Ok(ReadLine::Quit);
        }

        Ok(ReadLine::Ok(line.to_string()))
    }

    /// Runs until `quit`, Ctrl-D or the end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.read_line()? {
                ReadLine::Quit => break,
                ReadLine::Empty => continue,
                ReadLine::Ok(line) => self.eval_line(&line)?,
            }
        }

        writeln!(self.output)?;
        Ok(())
    }

    pub fn eval_line(&mut self, line: &str) -> io::Result<()> {
        let program = match crate::parse_source(line) {
            Ok(program) => program,
            Err(errors) => return print_parser_errors(&mut self.output, &errors),
        };

        let result = EvalContext::new(&mut self.output).evaluate(&program, &self.env);
        log::debug!("{:?}", result);

        match result {
            None | Some(Object::Null) => Ok(()),
            Some(value) => writeln!(self.output, "{}", value),
        }
    }
}
