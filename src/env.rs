// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A frame of symbol bindings with an optional parent frame.
///
/// Lookup walks the parent chain; definition is scoped to one frame. Values
/// are cloned on the way out, so the table stays independent of its callers.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new root environment with no parent
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child environment with a parent
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Binds a symbol in THIS frame, replacing any prior binding
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Binds a symbol in the topmost ancestor frame (the global scope)
    pub fn define_global(&self, name: String, value: Value) {
        match &self.parent {
            Some(parent) => parent.define_global(name, value),
            None => self.define(name, value),
        }
    }

    /// Looks up a symbol in this frame and parent frames recursively,
    /// returning a copy of the stored value
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }

        if let Some(ref parent) = self.parent {
            return parent.get(name);
        }

        None
    }

    /// Copies out this frame's bindings, sorted by symbol for stable output
    pub fn bindings(&self) -> Vec<(String, Value)> {
        let mut pairs: Vec<(String, Value)> = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        pairs
    }
}
