use std::io;
use std::path::PathBuf;
use std::process;
use clap::{Command, Arg, ArgMatches};

use tuna::frontend::Repl;
use tuna::interpreter;
use tuna::source::{ModuleSource, SourceType};
use tuna::runtime::{Object, Environment, Env};


fn main() {
    env_logger::init();

    let app = Command::new("tuna")
        .version(clap::crate_version!())
        .about("An interpreter for the Tuna programming language")
        .arg(
            Arg::new("file")
            .index(1)
            .help("Path to input script file")
            .value_name("FILE")
        )
        .arg(
            Arg::new("cmd")
            .short('c')
            .help("Execute a snippet then exit")
            .value_name("CMD")
            .takes_value(true)
        )
        .arg(
            Arg::new("interactive")
            .short('i')
            .help("Drop into an interactive REPL after executing")
        )
        .arg(
            Arg::new("parse_only")
            .short('P')
            .help("Parse and print the canonical source instead of executing")
        );

    let version = app.get_version().unwrap_or("");
    let args = app.get_matches();

    let module =
        if let Some(s) = args.value_of("cmd") {
            let source = SourceType::String(s.to_string());
            Some(ModuleSource::new("<cmd>", source))
        } else if let Some(s) = args.value_of("file") {
            let source = SourceType::File(PathBuf::from(s));
            Some(ModuleSource::new(s, source))
        } else {
            None
        };

    let module = match module {
        Some(module) => module,
        None => {
            start_repl(version, Environment::new());
            return;
        }
    };

    if args.is_present("parse_only") {
        parse_and_print_ast(&args, &module);
        return;
    }

    let env = Environment::new();
    let success = build_and_execute(&args, &module, &env);

    if args.is_present("interactive") {
        start_repl(version, env);
    } else if !success {
        process::exit(1);
    }
}

fn start_repl(version: &str, env: Env) {
    println!("\nTuna Version {}\n", version);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::with_env(stdin.lock(), stdout.lock(), env);

    if let Err(error) = repl.run() {
        eprintln!("I/O error: {}", error);
        process::exit(1);
    }
}

fn build_and_execute(_args: &ArgMatches, module: &ModuleSource, env: &Env) -> bool {
    let program = match tuna::build_module(module) {
        Ok(program) => program,
        Err(errors) => {
            tuna::print_build_errors(&errors, module);
            return false;
        }
    };

    match interpreter::evaluate(&program, env) {
        Some(Object::Error(error)) => {
            eprintln!("Runtime error: {}", error);
            false
        }
        _ => true,
    }
}

fn parse_and_print_ast(_args: &ArgMatches, module: &ModuleSource) {
    match tuna::build_module(module) {
        Ok(program) => println!("{}", program),
        Err(errors) => {
            tuna::print_build_errors(&errors, module);
            process::exit(1);
        }
    }
}
