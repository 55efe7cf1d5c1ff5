use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use reckon::{evaluate_expression, parse_tree};

#[derive(Debug, Parser)]
#[command(
    name = "reckon",
    version,
    about = "Evaluate arithmetic expressions",
    long_about = "reckon evaluates arithmetic expressions with the usual operator\n\
        precedence, brackets, exponentiation and factorial.\n\n\
        EXAMPLES:\n\
        \n  reckon '1+2*3'                Evaluate an expression\n\
        \n  reckon --showexpr '(1+2)*3'   Echo the expression with the result\n\
        \n  reckon --tree '2^-3'          Print the parse tree as JSON\n\
        \n  reckon                        Read expressions line by line from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix the result with the original expression
    #[arg(long = "showexpr")]
    showexpr: bool,

    /// Print the parsed expression tree as JSON instead of evaluating
    #[arg(long)]
    tree: bool,

    /// Expression to evaluate (reads from stdin if not provided)
    #[arg(
        value_name = "EXPRESSION",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    expression: Vec<String>,
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    let _ = builder.try_init();
}

/// Evaluates (or dumps) one expression; reports whether it succeeded.
fn run_expression(cli: &Cli, text: &str) -> bool {
    if cli.tree {
        return match parse_tree(text) {
            Ok(tree) => match serde_json::to_string_pretty(&tree) {
                Ok(json) => {
                    println!("{json}");
                    true
                }
                Err(err) => {
                    eprintln!("Unable to render tree: {err}");
                    false
                }
            },
            Err(err) => {
                eprintln!("Unable to parse expression: {err}");
                false
            }
        };
    }

    match evaluate_expression(text, cli.showexpr) {
        Ok(output) => {
            println!("{output}");
            true
        }
        Err(message) => {
            eprintln!("{message}");
            false
        }
    }
}

/// Reads expressions line by line until a blank line or EOF. A failed line
/// prints its error and the loop keeps going; each input is independent.
fn repl(cli: &Cli) -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error reading input: {err}");
                return ExitCode::FAILURE;
            }
        }

        let text = line.trim();
        if text.is_empty() {
            break;
        }
        run_expression(cli, text);
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if cli.expression.is_empty() {
        return repl(&cli);
    }

    let text = cli.expression.join(" ");
    if run_expression(&cli, &text) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
