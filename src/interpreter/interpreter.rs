use std::rc::Rc;

use crate::ast::Program;
use crate::environment::Environment;
use crate::evaluator;
use crate::lexer::Lexer;
use crate::object::Object;
use crate::parser::{self, Parser};

/*
Process-wide per-interpreter state. The original C `Monkey` struct owns a
keyword table and the three interned singletons so they can be released
together at shutdown; in Rust the keyword table is a `Lazy` static (see
`crate::token::KEYWORDS`) and the singletons live behind thread-local
`Rc<Object>`s (see `crate::object::singleton_bool`/`singleton_null`), so
`Interpreter` itself carries no fields. It still exists as the single
named entry point section 6 describes: callers construct one
`Interpreter`, then drive lexing, parsing, and evaluation through it
rather than reaching for the free functions directly. Dropping it (no
explicit `destroy_interpreter` is needed) frees whatever it touched, same
as any other Rust value.
*/
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Interpreter
    }

    /// Constructs a lexer over `input`, mainly useful for token-stream tests.
    pub fn lex(&self, input: &str) -> Lexer {
        Lexer::new(input)
    }

    /// Lexes and parses `input`, returning the program plus any accumulated
    /// parser error messages (empty on success).
    pub fn parse(&self, input: &str) -> (Program, Vec<String>) {
        parser::parse(input)
    }

    pub fn new_parser(&self, lexer: Lexer) -> Parser {
        Parser::new(lexer)
    }

    pub fn evaluate(&self, program: &Program, env: &Environment) -> Rc<Object> {
        evaluator::evaluate(program, env)
    }
}
