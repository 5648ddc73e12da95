use std::io::{self, Write};

use crate::environment::Environment;
use crate::interpreter::Interpreter;

/*
The REPL driver is explicitly out of scope for the specified core (see
spec.md section 1); it is a thin loop wired on top of `Interpreter`,
`Environment`, and the program's `Display`/`inspect` text, the same way
the original C `main.c`/`repl.c` pair wires a current-user lookup and a
getline loop on top of `Monkey`/`Lexer`/`Parser`.
*/
const PROMPT: &str = "> ";

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

pub fn run_prompt() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "Hello {}! This is the Monkey programming language!",
        current_user()
    );
    println!("Feel free to type in commands");

    let interpreter = Interpreter::new();
    let env = Environment::new();

    loop {
        print!("{PROMPT}");
        stdout.flush().ok();

        let mut line = String::new();
        let bytes_read = stdin.read_line(&mut line).unwrap_or(0);
        if bytes_read == 0 {
            println!();
            break;
        }

        run_line(&interpreter, &env, &line);
    }
}

fn run_line(interpreter: &Interpreter, env: &Environment, line: &str) {
    let (program, errors) = interpreter.parse(line);
    if !errors.is_empty() {
        print_parser_errors(&errors);
        return;
    }

    let result = interpreter.evaluate(&program, env);
    println!("{}", result.inspect());
}

fn print_parser_errors(errors: &[String]) {
    for message in errors {
        println!("\t{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_line_evaluates_and_shares_environment_across_calls() {
        let interpreter = Interpreter::new();
        let env = Environment::new();
        run_line(&interpreter, &env, "let x = 5;");
        let result = interpreter.evaluate(&interpreter.parse("x + 1;").0, &env);
        assert_eq!(result.inspect(), "6");
    }
}
