use postfix::{PostfixEvaluator, ShuntingParser};
use std::io::{self, BufRead};
use std::process;

const POSTFIX_GENERATE: u32 = 1;
const POSTFIX_EVAL: u32 = 2;

mod repl {
    use postfix::{PostfixEvaluator, ShuntingParser};

    // lines starting with '=' are already postfix
    pub fn eval_line(input: &str) {
        if let Some(rpn) = input.trim_start().strip_prefix('=') {
            match PostfixEvaluator::eval_str(rpn) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => println!("{}", result),
            }
            return;
        }
        match ShuntingParser::parse_str(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => match (rpn.to_infix(), PostfixEvaluator::eval(&rpn)) {
                (_, Err(e)) => println!("{} => Eval error: {}", rpn, e),
                (Some(infix), Ok(result)) => println!("{} => {} = {}", infix, rpn, result),
                (None, Ok(result)) => println!("{} = {}", rpn, result),
            },
        }
    }

    pub fn run() -> Result<(), String> {
        use rustyline::error::ReadlineError;
        let histpath = dirs::home_dir().map(|h| h.join(".postfix_history"));
        let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                println!("No history yet");
            }
        }
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(format!("Readline err: {:?}", e)),
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    eval_line(&line);
                }
            }
        }
        if let Some(path) = &histpath {
            rl.save_history(path).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

fn usage() {
    eprintln!("usage: postfix [-i | <mode> <expression...>]");
    eprintln!("  with no arguments read <mode> and <expression> from stdin lines");
    eprintln!("  mode {}: print the postfix form of an infix expression", POSTFIX_GENERATE);
    eprintln!("  mode {}: evaluate a postfix expression", POSTFIX_EVAL);
    eprintln!("  -i: interactive, convert and evaluate each line");
}

// returns the process exit status
fn run_mode(mode: &str, expr: &str) -> i32 {
    match mode.trim().parse::<u32>() {
        Ok(POSTFIX_GENERATE) => match ShuntingParser::parse_str(expr) {
            Err(e) => {
                eprintln!("Parse error: {}", e);
                1
            }
            Ok(rpn) => {
                println!("{}", rpn);
                0
            }
        },
        Ok(POSTFIX_EVAL) => match PostfixEvaluator::eval_str(expr) {
            Err(e) => {
                eprintln!("Eval error: {}", e);
                1
            }
            Ok(result) => {
                println!("{}", result);
                0
            }
        },
        _ => {
            eprintln!("Unknown mode: '{}'", mode.trim());
            usage();
            2
        }
    }
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String, String> {
    lines
        .next()
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(|e| format!("Read err: {}", e))
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let status = match args.first().map(String::as_str) {
        Some("-i") => return repl::run(),
        Some("-h") | Some("--help") => {
            usage();
            0
        }
        Some(mode) => run_mode(mode, &args[1..].join(" ")),
        None => {
            let mut lines = io::stdin().lock().lines();
            let mode = read_line(&mut lines)?;
            let expr = read_line(&mut lines)?;
            run_mode(&mode, &expr)
        }
    };
    if status != 0 {
        process::exit(status);
    }
    Ok(())
}
