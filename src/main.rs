use clap::Parser as ArgParser;
use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use frontend::{
    display_error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};

const PROMPT: &str = ">> ";

#[derive(ArgParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to process once instead of reading lines from stdin
    file: Option<PathBuf>,

    /// Dump the token stream instead of parsing
    #[arg(short, long)]
    tokens: bool,

    /// Print how long each phase took
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match &args.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => process(&source, &args, &mut io::stdout().lock()),
            Err(err) => {
                eprintln!("error: failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => repl(&args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Reads lines until stdin closes, handling each with a fresh lexer and parser.
fn repl(args: &Args) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(true);
        }

        process(&line, args, &mut stdout)?;
    }
}

/// Handles one unit of input. Returns whether it parsed without errors.
fn process(source: &str, args: &Args, out: &mut impl Write) -> io::Result<bool> {
    let start = Instant::now();

    if args.tokens {
        for token in tokenize(source) {
            writeln!(out, "{:<8} {:?}", token.kind, token.literal)?;
        }
        if args.verbose {
            writeln!(out, "Tokenized in {:?}", start.elapsed())?;
        }
        return Ok(true);
    }

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if args.verbose {
        writeln!(out, "Parsed in {:?}", start.elapsed())?;
    }

    if parser.errors().is_empty() {
        writeln!(out, "{}", program)?;
        return Ok(true);
    }

    writeln!(out, "parser errors:")?;
    for error in parser.errors() {
        writeln!(out, "\t{}", error)?;
    }
    for error in parser.errors() {
        write!(out, "{}", display_error(error, source))?;
    }

    Ok(false)
}
