use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use decicalc::Calculator;

/// decicalc evaluates arithmetic expressions with arbitrary-precision
/// decimals.
///
/// All expressions share one session, so later ones can use variables and
/// `Ans` from earlier ones.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the arguments as files and evaluate each line. Blank lines and
    /// lines starting with `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Expressions (or files with `--file`). Standard input is read line by
    /// line when none are given.
    expressions: Vec<String>,
}

/// Evaluates one line, printing the result or the error. Returns `false` on
/// failure.
fn run_line(calculator: &mut Calculator, line: &str) -> bool {
    match calculator.evaluate(line) {
        Ok(result) => {
            println!("{result}");
            true
        },
        Err(e) => {
            eprintln!("error: {e}");
            false
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mut calculator = Calculator::new();
    let mut ok = true;

    if args.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                eprintln!("error: failed to read standard input");
                return ExitCode::FAILURE;
            };
            if !line.trim().is_empty() {
                ok &= run_line(&mut calculator, &line);
            }
        }
    } else if args.file {
        for path in &args.expressions {
            let Ok(contents) = fs::read_to_string(path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            for line in contents.lines().map(str::trim) {
                if !line.is_empty() && !line.starts_with('#') {
                    ok &= run_line(&mut calculator, line);
                }
            }
        }
    } else {
        for expression in &args.expressions {
            ok &= run_line(&mut calculator, expression);
        }
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
