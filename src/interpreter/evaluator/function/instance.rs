use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// Creates an instance of a class.
///
/// `(new Point)` copies the field values `Point` was declared with into a new
/// instance. The instance refers back to its class without owning it.
///
/// # Errors
/// `TypeMismatch` if the argument is not a class.
pub fn new(args: &[Object]) -> EvalResult<Object> {
    match args {
        [Object::Class(class)] => Ok(Object::Instance(Rc::new(class.instantiate()))),
        [other] => Err(RuntimeError::TypeMismatch { details: format!("'new' expects a class, found {}",
                                                                     other.type_name()) }),
        _ => Err(RuntimeError::InvalidArgument { details: format!("'new' expects one class, found {} arguments",
                                                                  args.len()) }),
    }
}
