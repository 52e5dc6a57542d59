//! Name-binding environments with lexical enclosing lookup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Object;

/// A mapping from names to values, with an optional enclosing
/// environment forming a lookup chain.
///
/// Lookup walks outward until a binding is found or the chain is
/// exhausted; `variable` always binds into the innermost environment,
/// shadowing any outer binding. Environments are shared (`Rc`) because
/// returned closures keep their defining environment alive after the
/// call that created it has finished.
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty top-level environment.
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// Used for function calls: the new environment's parent is the
    /// function's captured environment, not the caller's.
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    /// Looks up a name, walking enclosing environments outward.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this environment, replacing any existing local
    /// binding and shadowing outer ones.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
