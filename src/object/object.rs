use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;

/*
The C source gives every object a `freeable` flag so the three singletons
(`true`, `false`, `null`) survive `DestroyObject` calls made against them,
and relies on pointer equality between those singletons for the `==`/`!=`
identity fallback. The direct Rust translation of "exactly one interned
instance per interpreter, compared by pointer" is `Rc<Object>` plus
thread-local singletons: every Boolean/Null value handed out by the
evaluator is a clone of the same allocation (see `singleton_bool`/
`singleton_null`), so `Rc::ptr_eq` on two `Object::Boolean(true)`s that both
came from the singleton is true, while two *hand-built* `Rc::new(Object::Integer(5))`s
are correctly pointer-distinct even though they're equal by value - the
same "two fresh integers with equal value compare unequal" quirk the
source document calls out.
*/
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    ReturnValue(Rc<Object>),
    Error(String),
    Function(Rc<FunctionObject>),
}

#[derive(Debug)]
pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Environment,
}

impl Object {
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Boolean(value) => value.to_string(),
            Object::Null => "null".to_string(),
            Object::ReturnValue(inner) => inner.inspect(),
            Object::Error(message) => format!("ERROR: {message}"),
            Object::Function(func) => {
                let params = func
                    .parameters
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("fn({params}) {{\n{}\n}}", func.body)
            }
        }
    }

    pub fn type_text(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNCTION",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}

thread_local! {
    static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
    static NULL: Rc<Object> = Rc::new(Object::Null);
}

/// The interned `true`/`false` singleton for this thread's interpreter.
pub fn singleton_bool(value: bool) -> Rc<Object> {
    if value {
        TRUE.with(|t| t.clone())
    } else {
        FALSE.with(|f| f.clone())
    }
}

/// The interned `null` singleton for this thread's interpreter.
pub fn singleton_null() -> Rc<Object> {
    NULL.with(|n| n.clone())
}

/// Reference-identity fallback used by the evaluator's `==`/`!=` path for
/// anything that isn't a pair of integers handled by the dedicated integer
/// arithmetic path. `Rc::ptr_eq` is meaningful here precisely because
/// booleans and null always flow through the interned singletons above.
pub fn eq_by_identity(left: &Rc<Object>, right: &Rc<Object>) -> bool {
    match (left.as_ref(), right.as_ref()) {
        (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
        _ => Rc::ptr_eq(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_singletons_are_pointer_identical() {
        let a = singleton_bool(true);
        let b = singleton_bool(true);
        assert!(eq_by_identity(&a, &b));
    }

    #[test]
    fn true_and_false_are_distinct_singletons() {
        assert!(!eq_by_identity(&singleton_bool(true), &singleton_bool(false)));
    }

    #[test]
    fn nulls_are_always_identical() {
        assert!(eq_by_identity(&singleton_null(), &singleton_null()));
    }

    #[test]
    fn distinct_fresh_integers_are_not_identity_equal() {
        let a = Rc::new(Object::Integer(5));
        let b = Rc::new(Object::Integer(5));
        assert!(!eq_by_identity(&a, &b));
    }

    #[test]
    fn inspect_formats_match_the_spec() {
        assert_eq!(Object::Integer(42).inspect(), "42");
        assert_eq!(Object::Boolean(false).inspect(), "false");
        assert_eq!(Object::Null.inspect(), "null");
        assert_eq!(
            Object::ReturnValue(Rc::new(Object::Integer(3))).inspect(),
            "3"
        );
        assert_eq!(
            Object::Error("identifier not found: x".to_string()).inspect(),
            "ERROR: identifier not found: x"
        );
    }
}
