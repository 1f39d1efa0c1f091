use std::io::{self, BufRead};
use std::process::ExitCode;

use minilang::{
    interpreter::interpreter::Evaluator, parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn main() -> ExitCode {
    let mut source = String::new();
    if io::stdin().lock().read_line(&mut source).is_err() {
        eprintln!("Failed to read input!");
        return ExitCode::FAILURE;
    }

    let stmt = match parse(&source) {
        Ok(stmt) => stmt,
        Err(_) => {
            eprintln!("Syntax error!");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", stmt.dumped());

    let typed = match type_check(&stmt) {
        Ok(typed) => typed,
        Err(_) => {
            eprintln!("Type error!");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut evaluator = Evaluator::new(stdout.lock());
    if let Err(error) = evaluator.exec(&typed) {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
