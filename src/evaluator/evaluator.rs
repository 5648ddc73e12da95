use std::rc::Rc;

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::environment::Environment;
use crate::object::{eq_by_identity, singleton_bool, singleton_null, FunctionObject, Object};

/*
A pure function from `(node, env)` to `Rc<Object>`: no exceptions, no early
`return` out of Rust's own control flow for Monkey-level `return` or
errors. `Object::ReturnValue` and `Object::Error` are ordinary values that
propagate by being handed back up the call chain, exactly as the spec's
"two error planes" design calls for (parser errors are a separate,
string-only channel entirely - see the parser module).
*/
pub fn evaluate(program: &Program, env: &Environment) -> Rc<Object> {
    eval_program(program, env)
}

fn eval_program(program: &Program, env: &Environment) -> Rc<Object> {
    let mut result = singleton_null();

    for stmt in &program.statements {
        result = eval_statement(stmt, env);

        match result.as_ref() {
            Object::ReturnValue(value) => return Rc::clone(value),
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Rc<Object> {
    let mut result = singleton_null();

    for stmt in &block.statements {
        result = eval_statement(stmt, env);

        if matches!(result.as_ref(), Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(stmt: &Statement, env: &Environment) -> Rc<Object> {
    match stmt {
        Statement::Let { name, value, .. } => {
            let evaluated = eval_expression(value, env);
            if evaluated.is_error() {
                return evaluated;
            }
            env.set(name.name.clone(), evaluated);
            singleton_null()
        }
        Statement::Return { value, .. } => {
            let evaluated = eval_expression(value, env);
            if evaluated.is_error() {
                return evaluated;
            }
            Rc::new(Object::ReturnValue(evaluated))
        }
        Statement::ExpressionStmt { expr, .. } => eval_expression(expr, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_expression(expr: &Expression, env: &Environment) -> Rc<Object> {
    match expr {
        Expression::IntegerLiteral { value, .. } => Rc::new(Object::Integer(*value)),
        Expression::BooleanLiteral { value, .. } => singleton_bool(*value),
        Expression::Identifier(ident) => match env.get(&ident.name) {
            Some(value) => value,
            None => error(format!("identifier not found: {}", ident.name)),
        },
        Expression::Prefix { operator, right, .. } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral {
            parameters, body, ..
        } => Rc::new(Object::Function(Rc::new(FunctionObject {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        }))),
        Expression::Call {
            function,
            arguments,
            ..
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }

            let mut args = Vec::with_capacity(arguments.len());
            for arg in arguments {
                let evaluated = eval_expression(arg, env);
                if evaluated.is_error() {
                    return evaluated;
                }
                args.push(evaluated);
            }

            apply_function(function, args)
        }
    }
}

fn eval_prefix_expression(operator: &str, right: Rc<Object>) -> Rc<Object> {
    match operator {
        "!" => singleton_bool(!right.is_truthy()),
        "-" => match right.as_ref() {
            Object::Integer(value) => Rc::new(Object::Integer(value.wrapping_neg())),
            other => error(format!("unknown operator: -{}", other.type_text())),
        },
        other => error(format!("unknown operator: {other}{}", right.type_text())),
    }
}

fn eval_infix_expression(operator: &str, left: Rc<Object>, right: Rc<Object>) -> Rc<Object> {
    if let (Object::Integer(left), Object::Integer(right)) = (left.as_ref(), right.as_ref()) {
        return eval_integer_infix_expression(operator, *left, *right);
    }

    if operator == "==" {
        return singleton_bool(eq_by_identity(&left, &right));
    }
    if operator == "!=" {
        return singleton_bool(!eq_by_identity(&left, &right));
    }

    if left.type_text() != right.type_text() {
        return error(format!(
            "type mismatch: {} {operator} {}",
            left.type_text(),
            right.type_text()
        ));
    }

    error(format!(
        "unknown operator: {} {operator} {}",
        left.type_text(),
        right.type_text()
    ))
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Integer(left.wrapping_add(right))),
        "-" => Rc::new(Object::Integer(left.wrapping_sub(right))),
        "*" => Rc::new(Object::Integer(left.wrapping_mul(right))),
        "/" => {
            if right == 0 {
                error("divide by zero".to_string())
            } else {
                Rc::new(Object::Integer(left.wrapping_div(right)))
            }
        }
        "<" => singleton_bool(left < right),
        ">" => singleton_bool(left > right),
        "==" => singleton_bool(left == right),
        "!=" => singleton_bool(left != right),
        other => error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

fn eval_if_expression(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Environment,
) -> Rc<Object> {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block_statement(alternative, env)
    } else {
        singleton_null()
    }
}

fn apply_function(function: Rc<Object>, args: Vec<Rc<Object>>) -> Rc<Object> {
    let Object::Function(function) = function.as_ref() else {
        return error(format!("not a function: {}", function.type_text()));
    };

    let call_env = Environment::new_enclosed(function.env.clone());
    for (param, arg) in function.parameters.iter().zip(args) {
        call_env.set(param.name.clone(), arg);
    }

    log::trace!(
        "evaluator: applying function with {} parameter(s)",
        function.parameters.len()
    );
    let result = eval_block_statement(&function.body, &call_env);
    match result.as_ref() {
        Object::ReturnValue(value) => Rc::clone(value),
        _ => result,
    }
}

fn error(message: String) -> Rc<Object> {
    log::error!("evaluator: {message}");
    Rc::new(Object::Error(message))
}
