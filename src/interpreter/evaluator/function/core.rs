use crate::interpreter::{
    environment::Environment,
    evaluator::{
        block, conditional, definition, for_loop,
        function::{arithmetic, instance, print, range},
    },
    value::{
        callable::{Arity, Macro, Primitive},
        core::Object,
    },
};

/// Defines primitives by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the primitive.
///
/// The macro produces:
/// - `PRIMITIVE_TABLE` (static table the standard environment binds),
/// - `PRIMITIVES` (public list of primitive names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static PRIMITIVE_TABLE: &[Primitive] = &[
            $(
                Primitive { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const PRIMITIVES: &[&str] = &[
            $($name,)*
        ];
    };
}

/// Defines special forms the same way `builtin_functions!` defines
/// primitives. Special forms check their own syntax, so they carry no arity.
macro_rules! special_forms {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static SPECIAL_FORM_TABLE: &[Macro] = &[
            $(
                Macro { name: $name, func: $func },
            )*
        ];
        pub const SPECIAL_FORMS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+"       => { arity: Arity::AtLeast(1), func: arithmetic::add },
    "-"       => { arity: Arity::AtLeast(1), func: arithmetic::sub },
    "*"       => { arity: Arity::AtLeast(1), func: arithmetic::mul },
    "/"       => { arity: Arity::AtLeast(1), func: arithmetic::div },
    "%"       => { arity: Arity::Exact(2), func: arithmetic::rem },
    "range"   => { arity: Arity::OneOf(&[1, 2, 3]), func: range::range },
    "print"   => { arity: Arity::AtLeast(0), func: print::print },
    "println" => { arity: Arity::AtLeast(0), func: print::println },
    "debug"   => { arity: Arity::AtLeast(0), func: print::debug },
    "new"     => { arity: Arity::Exact(1), func: instance::new },
}

special_forms! {
    "if"    => conditional::if_form,
    "let"   => block::let_form,
    "do"    => block::do_form,
    "for"   => for_loop::for_form,
    "fn"    => definition::fn_form,
    "def"   => definition::def_form,
    "set"   => definition::set_form,
    "class" => definition::class_form,
}

/// Creates the root environment of a program.
///
/// The frame binds the constants `nil`, `true` and `false`, every primitive
/// and every special form. It has no parent.
///
/// # Example
/// ```
/// use gysp::interpreter::{evaluator::function::core::standard_environment, value::core::Object};
///
/// let env = standard_environment();
///
/// assert_eq!(env.get("true").unwrap(), Object::TRUE);
/// assert!(matches!(env.get("range").unwrap(), Object::Prim(_)));
/// assert!(matches!(env.get("if").unwrap(), Object::Macro(_)));
/// ```
#[must_use]
pub fn standard_environment() -> Environment {
    let env = Environment::new();

    env.declare_and_set("nil", Object::NIL);
    env.declare_and_set("true", Object::TRUE);
    env.declare_and_set("false", Object::FALSE);

    for prim in PRIMITIVE_TABLE {
        env.declare_and_set(prim.name, Object::Prim(prim));
    }
    for form in SPECIAL_FORM_TABLE {
        env.declare_and_set(form.name, Object::Macro(form));
    }

    tracing::debug!(primitives = PRIMITIVES.len(),
                    special_forms = SPECIAL_FORMS.len(),
                    "built standard environment");
    env
}
