use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// One lexical scope: its own bindings and the scope it is nested in.
struct Scope {
    vars:   RefCell<HashMap<String, Object>>,
    parent: Option<Environment>,
}

/// A lexical environment: a chain of scope frames, innermost first.
///
/// Cloning an `Environment` shares the frame; it does not copy the bindings.
/// Functions keep their defining environment alive this way, so a frame lives
/// as long as anything that was created inside it.
///
/// Lookups only ever walk outward, towards the root frame.
///
/// # Example
/// ```
/// use gysp::interpreter::{environment::Environment, value::core::Object};
///
/// let root = Environment::new();
/// root.declare_and_set("x", Object::Int(1));
///
/// let inner = root.child();
/// inner.declare_and_set("x", Object::Int(2));
///
/// assert_eq!(inner.get("x").unwrap(), Object::Int(2));
/// assert_eq!(root.get("x").unwrap(), Object::Int(1));
/// ```
#[derive(Clone)]
pub struct Environment(Rc<Scope>);

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an empty root frame with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Scope { vars:   RefCell::new(HashMap::new()),
                             parent: None, }))
    }

    /// Creates a new, empty frame whose parent is this environment.
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(Scope { vars:   RefCell::new(HashMap::new()),
                             parent: Some(self.clone()), }))
    }

    /// Binds `name` to `nil` in the innermost frame.
    ///
    /// Redeclaring a name is not an error; the binding is reset to `nil`.
    pub fn declare(&self, name: &str) {
        self.declare_and_set(name, Object::NIL);
    }

    /// Binds `name` to `value` in the innermost frame, whether or not an outer
    /// frame already binds it.
    pub fn declare_and_set(&self, name: &str, value: Object) {
        self.0.vars.borrow_mut().insert(name.to_string(), value);
    }

    /// Looks up `name`, searching from the innermost frame outward.
    ///
    /// # Errors
    /// `RuntimeError::UnboundVariable` if no frame binds `name`.
    pub fn get(&self, name: &str) -> EvalResult<Object> {
        let mut frame = Some(self);
        while let Some(env) = frame {
            if let Some(value) = env.0.vars.borrow().get(name) {
                return Ok(value.clone());
            }
            frame = env.0.parent.as_ref();
        }

        Err(RuntimeError::UnboundVariable { name: name.to_string() })
    }

    /// Replaces the nearest existing binding of `name`.
    ///
    /// # Errors
    /// `RuntimeError::UnboundVariable` if no frame binds `name`.
    pub fn set(&self, name: &str, value: Object) -> EvalResult<()> {
        let mut frame = Some(self);
        while let Some(env) = frame {
            if let Some(slot) = env.0.vars.borrow_mut().get_mut(name) {
                *slot = value;
                return Ok(());
            }
            frame = env.0.parent.as_ref();
        }

        Err(RuntimeError::UnboundVariable { name: name.to_string() })
    }

    /// Returns `true` if this frame itself (not an ancestor) binds `name`.
    #[cfg(test)]
    pub(crate) fn binds_locally(&self, name: &str) -> bool {
        self.0.vars.borrow().contains_key(name)
    }

    /// Number of frames from this one up to and including the root.
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        std::iter::successors(Some(self), |env| env.0.parent.as_ref()).count()
    }
}

impl fmt::Debug for Environment {
    /// Lists the names bound in each frame. Values are left out because a
    /// function bound in a frame refers back to that frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frames = f.debug_list();
        let mut frame = Some(self);
        while let Some(env) = frame {
            let mut names = env.0.vars.borrow().keys().cloned().collect::<Vec<_>>();
            names.sort_unstable();
            frames.entry(&names);
            frame = env.0.parent.as_ref();
        }
        frames.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_binds_nil_in_the_innermost_frame() {
        let root = Environment::new();
        let inner = root.child();
        inner.declare("x");

        assert_eq!(inner.get("x"), Ok(Object::NIL));
        assert!(inner.binds_locally("x"));
        assert!(root.get("x").is_err());
    }

    #[test]
    fn redeclaring_resets_the_value() {
        let env = Environment::new();
        env.declare_and_set("x", Object::Int(5));
        env.declare("x");
        assert_eq!(env.get("x"), Ok(Object::NIL));
    }

    #[test]
    fn get_searches_outward() {
        let root = Environment::new();
        root.declare_and_set("a", Object::Int(1));
        let leaf = root.child().child();

        assert_eq!(leaf.get("a"), Ok(Object::Int(1)));
        assert_eq!(leaf.depth(), 3);
    }

    #[test]
    fn get_never_looks_into_child_frames() {
        let root = Environment::new();
        let inner = root.child();
        inner.declare_and_set("hidden", Object::TRUE);

        assert_eq!(root.get("hidden"),
                   Err(RuntimeError::UnboundVariable { name: "hidden".to_string() }));
    }

    #[test]
    fn set_mutates_the_nearest_binding() {
        let root = Environment::new();
        root.declare_and_set("x", Object::Int(1));
        let middle = root.child();
        middle.declare_and_set("x", Object::Int(2));
        let leaf = middle.child();

        leaf.set("x", Object::Int(3)).unwrap();

        assert_eq!(middle.get("x"), Ok(Object::Int(3)));
        assert_eq!(root.get("x"), Ok(Object::Int(1)));
        assert!(!leaf.binds_locally("x"));
    }

    #[test]
    fn set_on_an_unbound_name_fails() {
        let env = Environment::new().child();
        assert_eq!(env.set("nope", Object::NIL),
                   Err(RuntimeError::UnboundVariable { name: "nope".to_string() }));
    }

    #[test]
    fn clones_share_the_frame() {
        let env = Environment::new();
        let alias = env.clone();
        alias.declare_and_set("y", Object::from("shared"));
        assert_eq!(env.get("y"), Ok(Object::from("shared")));
    }
}
