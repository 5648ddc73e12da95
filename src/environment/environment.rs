use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

type ObjRef = Rc<Object>;

/*
The original C environment is copied whenever a closure is created, which
sidesteps reference cycles at the cost of closures never observing later
mutation of their defining scope (see the design notes in SPEC_FULL.md).
This port instead shares the scope behind `Rc<RefCell<_>>`, the idiomatic
Rust equivalent of "the environment a closure captures is the live one,"
which is also the canonical Monkey behavior the book describes. A function
stored back into the environment that captured it does form a reference
cycle (the env's map holds a `Function` whose `env` points back at it), but
interpreter instances are short-lived and this is the same trade-off most
tree-walking interpreters in this ecosystem accept rather than reaching for
a tracing collector.
*/
#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<Inner>>);

#[derive(Debug)]
struct Inner {
    store: HashMap<String, ObjRef>,
    outer: Option<Environment>,
}

impl Environment {
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(Inner {
            store: HashMap::new(),
            outer: None,
        })))
    }

    pub fn new_enclosed(outer: Environment) -> Self {
        Environment(Rc::new(RefCell::new(Inner {
            store: HashMap::new(),
            outer: Some(outer),
        })))
    }

    pub fn get(&self, name: &str) -> Option<ObjRef> {
        let inner = self.0.borrow();
        if let Some(value) = inner.store.get(name) {
            return Some(Rc::clone(value));
        }
        inner.outer.as_ref().and_then(|outer| outer.get(name))
    }

    pub fn set(&self, name: impl Into<String>, value: ObjRef) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_falls_through_to_outer_scope() {
        let outer = Environment::new();
        outer.set("x", Rc::new(Object::Integer(5)));
        let inner = Environment::new_enclosed(outer);
        assert!(matches!(inner.get("x").as_deref(), Some(Object::Integer(5))));
    }

    #[test]
    fn set_never_traverses_into_outer_scope() {
        let outer = Environment::new();
        outer.set("x", Rc::new(Object::Integer(5)));
        let inner = Environment::new_enclosed(outer.clone());
        inner.set("x", Rc::new(Object::Integer(10)));
        assert!(matches!(inner.get("x").as_deref(), Some(Object::Integer(10))));
        assert!(matches!(outer.get("x").as_deref(), Some(Object::Integer(5))));
    }

    #[test]
    fn missing_identifier_is_none() {
        let env = Environment::new();
        assert!(env.get("missing").is_none());
    }

    #[test]
    fn shared_environment_observes_mutation_through_clones() {
        let env = Environment::new();
        let alias = env.clone();
        env.set("x", Rc::new(Object::Integer(1)));
        alias.set("x", Rc::new(Object::Integer(2)));
        assert!(matches!(env.get("x").as_deref(), Some(Object::Integer(2))));
    }
}
