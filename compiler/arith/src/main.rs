use std::io::{self, Read};

use arith::{analyze_source, format_node, format_tokens, illegal_token_diagnostic, render_error, OutputFormat};
use arith_parser::{parse_str, OperatorPrecedence};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "arith",
    version,
    about = "Parse infix arithmetic into a fully bracketed expression tree",
    long_about = "arith tokenizes and parses infix arithmetic such as '3 + 6 * 7'.\n\n\
        Values are numbers or alphabetic names, operators are + - * / ^, and\n\
        brackets group sub-expressions. A value directly next to a bracket is\n\
        multiplied, so '3 ( 2 + 4 )' means '3 * ( 2 + 4 )'.\n\n\
        EXAMPLES:\n\
        \n  arith parse 3 + 6 '*' 7                  Prints (3 + (6 * 7))\n\
        \n  arith parse --format tree '2 ^ ( a - 1 )'  Prints an indented tree\n\
        \n  arith --precedence +,-,*,/,^ parse 2 '*' 3 + 4\n\
        \n  echo 'x ( y + 1 )' | arith tokens --json"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Comma-separated operator order, folded first to last (e.g. ^,*,/,+,-)
    #[arg(long, value_name = "LIST", global = true)]
    precedence: Option<OperatorPrecedence>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an expression and print the tree
    Parse(ParseArgs),

    /// Print the tokens of an expression
    Tokens(TokensArgs),

    /// Print tokens, tree and errors together as JSON
    Report(SourceArgs),
}

#[derive(Debug, Args, Clone, Default)]
struct SourceArgs {
    /// The expression; read from stdin if omitted
    #[arg(value_name = "EXPR", trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

#[derive(Debug, Args, Clone, Default)]
struct ParseArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Debug, Args, Clone, Default)]
struct TokensArgs {
    /// Print tokens as a JSON array
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    source: SourceArgs,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

fn read_source(args: &SourceArgs) -> Result<String, String> {
    if !args.expr.is_empty() {
        return Ok(args.expr.join(" "));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read from stdin: {e}"))?;
    Ok(buf)
}

fn run_parse(args: &ParseArgs, precedence: &OperatorPrecedence) -> i32 {
    let source = match read_source(&args.source) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    log::info!("parsing {source:?} with precedence {precedence}");

    match parse_str(&source, precedence) {
        Ok(node) => match format_node(&node, args.format) {
            Ok(text) => {
                println!("{text}");
                0
            }
            Err(e) => {
                eprintln!("error: failed to serialize tree: {e}");
                2
            }
        },
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            1
        }
    }
}

fn run_tokens(args: &TokensArgs) -> i32 {
    let source = match read_source(&args.source) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let tokens = arith_lexer::tokenize(&source);

    if args.json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize tokens: {e}");
                return 2;
            }
        }
    } else if !tokens.is_empty() {
        println!("{}", format_tokens(&tokens));
    }

    match illegal_token_diagnostic(&tokens, &source) {
        Some(diagnostic) => {
            eprint!("{diagnostic}");
            1
        }
        None => 0,
    }
}

fn run_report(args: &SourceArgs, precedence: &OperatorPrecedence) -> i32 {
    let source = match read_source(args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let report = analyze_source(&source, precedence);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: failed to serialize report: {e}");
            return 2;
        }
    }
    if report.errors.is_empty() {
        0
    } else {
        1
    }
}

fn run_cli() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 2 } else { 0 };
        }
    };
    init_logging(cli.verbose);

    let precedence = cli.precedence.unwrap_or_default();
    log::debug!("precedence order: {precedence}");

    match cli.command.unwrap_or(Command::Parse(ParseArgs::default())) {
        Command::Parse(args) => run_parse(&args, &precedence),
        Command::Tokens(args) => run_tokens(&args),
        Command::Report(args) => run_report(&args, &precedence),
    }
}

fn main() {
    std::process::exit(run_cli());
}
