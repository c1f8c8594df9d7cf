use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process,
    time::Instant,
};

use kaleidoscope::{
    ast::ast::TopLevel, display_error, lexer::lexer::tokenize, parser::parser::Parser,
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let dump_tokens = args.iter().any(|arg| arg == "--tokens");
    let files: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if files.len() > 1 {
        eprintln!("Usage: kaleidoscope [--tokens] [FILE]");
        process::exit(2);
    }

    match files.first() {
        Some(file_path) => run_file(file_path, dump_tokens),
        None => run_repl(dump_tokens),
    }
}

fn run_file(file_path: &str, dump_tokens: bool) {
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    run_session(source, Some(String::from(file_name)), dump_tokens);
    println!("Parsed in {:?}", start.elapsed());
}

fn run_repl(dump_tokens: bool) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        eprint!("ready> ");
        let _ = io::stderr().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                eprintln!("Failed to read from stdin: {}", error);
                process::exit(1);
            }
            None => break,
        };

        // Every line is its own session.
        run_session(line, None, dump_tokens);
    }
}

fn run_session(source: String, file: Option<String>, dump_tokens: bool) {
    if dump_tokens {
        for token in tokenize(source.clone(), file.clone()) {
            println!("{}", token.debug());
        }
    }

    let parser = Parser::new(source.clone(), file);

    for result in parser {
        match result {
            Ok(item) => {
                match item {
                    TopLevel::Definition(_) => println!("Parsed a function definition."),
                    TopLevel::Extern(_) => println!("Parsed an extern."),
                    TopLevel::Expression(_) => println!("Parsed a top-level expr."),
                }
                println!("{}", item);
            }
            Err(error) => display_error(&error, &source),
        }
    }
}
