use std::io;

#[macro_use]
mod macros;

pub mod utils;

pub mod source;
pub mod lexer;
pub mod parser;

pub mod language;
pub mod runtime;
pub mod builtins;
pub mod interpreter;

pub mod frontend;


use source::ModuleSource;
use lexer::Lexer;
use parser::{Parser, ParserError};
use parser::stmt::Program;


#[derive(Debug)]
pub enum BuildErrors {
    // depending on which stage the build failed
    Source(io::Error),
    Syntax(Box<[ParserError]>),
}

pub fn build_module(source: &ModuleSource) -> Result<Program, BuildErrors> {
    let source_text = source.read_text()
        .map_err(BuildErrors::Source)?;

    parse_source(&source_text)
        .map_err(|errors| BuildErrors::Syntax(errors.into_boxed_slice()))
}


/// Parses a whole program, also returning every error that was recorded.
/// The program is only meaningful if there are no errors.
pub fn parse(source: &str) -> (Program, Vec<ParserError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Produce AST from source text
pub fn parse_source(source: &str) -> Result<Program, Vec<ParserError>> {
    let (program, errors) = parse(source);
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}


pub fn print_build_errors(errors: &BuildErrors, source: &ModuleSource) {
    match errors {
        BuildErrors::Source(error) => {
            eprintln!("Error reading source: {}.", error);
        }

        BuildErrors::Syntax(errors) => {
            eprintln!("Errors in {}:", source);
            let stderr = io::stderr();
            // nowhere left to report a failure to write to stderr
            let _ = frontend::print_parser_errors(&mut stderr.lock(), errors);
        }
    }
}
