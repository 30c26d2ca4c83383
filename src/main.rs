//! CLI front end for the calcpad calculator core.
//!
//! Two modes: evaluate a single expression passed as an argument, or
//! run an interactive keypad session on stdin. All arithmetic goes
//! through the pure core in [`calcpad::calculator`]; this binary only
//! owns the mutable session state and terminal I/O.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use calcpad::calculator::{
    CalcResult, Expression, copy_to_clipboard, evaluate, format_expression, group_digits,
    is_keypad_input,
};
use calcpad::config::Config;
use calcpad::state::PadState;

#[derive(Debug, Parser)]
#[command(name = "calcpad", version, about = "Evaluate keypad arithmetic expressions")]
struct Cli {
    /// Expression to evaluate; omit to start an interactive session.
    expression: Option<String>,

    /// Copy the result to the clipboard.
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.expression {
        Some(raw) => run_once(&raw, &config, cli.copy),
        None => run_interactive(&config),
    }
}

/// Evaluate a single expression and print the result. Exits with a
/// non-zero status when evaluation fails.
fn run_once(raw: &str, config: &Config, copy: bool) -> Result<()> {
    if !is_keypad_input(raw) {
        warn!("input contains characters outside the keypad alphabet, ignoring them");
    }

    let expression = Expression::from_keys(raw);
    let result = evaluate(expression.as_str());

    println!("{}", format_expression(expression.as_str()));
    println!("= {}", render_result_display(&result, config));

    match result.clipboard() {
        Some(text) => {
            if copy || config.copy_result {
                copy_to_clipboard(text)?;
            }
            Ok(())
        }
        None => std::process::exit(1),
    }
}

/// Interactive keypad session. Each line is fed through the keypad
/// state character by character: digits, `.`, operators and `%` edit
/// the expression, `=` evaluates, `c` clears, `<` is backspace.
fn run_interactive(config: &Config) -> Result<()> {
    println!("calcpad interactive mode");
    println!("keys: 0-9 . + - * / %  |  = evaluate, c clear, < backspace, q quit");

    let stdin = io::stdin();
    let mut state = PadState::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        state.handle_input(line);

        println!("  {}", state.display_expression());
        if let Some(result) = state.result() {
            println!("= {}", render_result_display(result, config));

            if config.copy_result
                && let Some(text) = result.clipboard()
                && let Err(err) = copy_to_clipboard(text)
            {
                warn!("{:#}", err);
            }
        }
    }

    Ok(())
}

/// The result string for the terminal, with optional digit grouping.
/// Grouping is display-only and never reaches the clipboard.
fn render_result_display(result: &CalcResult, config: &Config) -> String {
    if config.group_digits {
        group_digits(result.display())
    } else {
        result.display().to_string()
    }
}
