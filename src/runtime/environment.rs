use core::fmt;
use std::rc::Rc;
use std::cell::RefCell;
use std::collections::HashMap;
use crate::runtime::{Object, DefaultBuildHasher};


pub type Env = Rc<Environment>;

// Closures hold on to the environment they were created in,
// so scopes are shared and the bindings are mutated through a RefCell.
pub struct Environment {
    store: RefCell<HashMap<String, Object, DefaultBuildHasher>>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(Environment {
            store: RefCell::new(HashMap::default()),
            outer: None,
        })
    }

    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(Environment {
            store: RefCell::new(HashMap::default()),
            outer: Some(Rc::clone(outer)),
        })
    }

    pub fn outer(&self) -> Option<&Env> { self.outer.as_ref() }

    /// Looks up a name in this scope and then in each enclosing scope
    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds a name in this scope only, shadowing any outer binding
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.store.borrow_mut().insert(name.into(), value);
    }

    pub fn contains_local(&self, name: &str) -> bool {
        self.store.borrow().contains_key(name)
    }
}

// the stored values can refer back to this environment, so only the names are shown
impl fmt::Debug for Environment {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        let mut names = store.keys().collect::<Vec<_>>();
        names.sort();

        fmt.debug_struct("Environment")
            .field("names", &names)
            .field("has_outer", &self.outer.is_some())
            .finish()
    }
}
