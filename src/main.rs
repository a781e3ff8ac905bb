use std::{fs, io::{self, Read}, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::{debug, info};
use monkey_lexer::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    tokenize, tokenize_strict, Position, Token,
};

#[derive(Parser)]
#[command(name = "monkey-lexer")]
#[command(author, version, about = "Print the token stream of a source file", long_about = None)]
struct Cli {
    /// Source file to scan, stdin when omitted. Any bytes are accepted; those outside
    /// the grammar come out as ILLEGAL tokens
    input: Option<PathBuf>,

    /// Stop at the first illegal byte and print a diagnostic
    #[arg(long)]
    strict: bool,

    /// Name to report in diagnostics instead of the input path
    #[arg(long)]
    file_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let file_name = cli.file_name.clone().unwrap_or_else(|| match &cli.input {
        Some(path) => path.to_string_lossy().into_owned(),
        None => String::from("<stdin>"),
    });

    let source = match read_source(cli.input.as_ref()) {
        Ok(source) => source,
        Err(error) => {
            display_error(&error, "");
            return ExitCode::FAILURE;
        }
    };

    debug!("read {} bytes from {}", source.len(), file_name);
    let start = Instant::now();

    let tokens = if cli.strict {
        match tokenize_strict(&source, Some(file_name)) {
            Ok(tokens) => tokens,
            Err(error) => {
                display_error(&error, &source);
                return ExitCode::FAILURE;
            }
        }
    } else {
        tokenize(&source)
    };

    info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    for token in &tokens {
        print_token(token);
    }

    ExitCode::SUCCESS
}

fn read_source(input: Option<&PathBuf>) -> Result<Vec<u8>, Error> {
    let (path, result) = match input {
        Some(path) => (path.to_string_lossy().into_owned(), fs::read(path)),
        None => {
            let mut buffer = Vec::new();
            let result = io::stdin().read_to_end(&mut buffer).map(|_| buffer);
            (String::from("<stdin>"), result)
        }
    };

    result.map_err(|error| {
        Error::new(
            ErrorImpl::Io {
                path,
                message: error.to_string(),
            },
            Position::null(),
        )
    })
}

fn print_token(token: &Token<'_>) {
    if token.lexeme.is_empty() {
        println!("{}", token.kind);
    } else if token.lexeme.is_ascii() {
        println!("{:<9} {}", token.kind, token.literal);
    } else {
        println!("{:<9} {}", token.kind, token.lexeme.escape_ascii());
    }
}
