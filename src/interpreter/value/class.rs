use std::{
    fmt,
    rc::{Rc, Weak},
};

use indexmap::IndexMap;

use crate::interpreter::value::core::Object;

/// A user-defined class: a name and the values its fields start with.
///
/// The initializers are evaluated once, when the `class` form runs; every
/// instance starts from a copy of them.
pub struct Class {
    /// The class name.
    pub name:   String,
    /// Field names and their initial values, in declaration order.
    pub fields: IndexMap<String, Object>,
}

impl Class {
    /// Creates an instance whose fields are copies of the initializers.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use gysp::interpreter::value::{class::Class, core::Object};
    ///
    /// let class = Rc::new(Class { name:   "Point".into(),
    ///                             fields: [("x".to_string(), Object::Int(0))].into_iter().collect(), });
    /// let point = class.instantiate();
    ///
    /// assert_eq!(point.field("x"), Some(&Object::Int(0)));
    /// assert!(Rc::ptr_eq(&point.class().unwrap(), &class));
    /// ```
    #[must_use]
    pub fn instantiate(self: &Rc<Self>) -> Instance {
        Instance { fields: self.fields.clone(),
                   class:  Rc::downgrade(self), }
    }
}

/// An instance of a [`Class`].
///
/// The back-reference to the class does not own it; it is used for identity
/// and rendering only.
pub struct Instance {
    fields: IndexMap<String, Object>,
    class:  Weak<Class>,
}

impl Instance {
    /// Returns the class the instance was created from, if it is still alive.
    #[must_use]
    pub fn class(&self) -> Option<Rc<Class>> {
        self.class.upgrade()
    }

    /// Looks up a field value.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Object> {
        self.fields.get(name)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class() {
            Some(class) => write!(f, "<{}", class.name)?,
            None => write!(f, "<instance")?,
        }
        for (name, value) in &self.fields {
            write!(f, " {name}={value:?}")?;
        }
        write!(f, ">")
    }
}
