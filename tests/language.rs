use std::fs::{self};

use gysp::{
    error::{Error, LexError, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::standard_environment,
        value::{callable::Arity, complex::ComplexNumber, core::Object},
    },
    run, run_in,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_gysp_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("gysp example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No gysp examples found in book/src");
}

fn extract_gysp_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```gysp") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs `src` and compares the source-like rendering of its value.
fn assert_value(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(format!("{value:?}"), expected, "for script {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error from {src}, got {other:?}"),
    }
}

#[test]
fn literals_evaluate_to_their_values() {
    assert_eq!(run("42"), Ok(Object::Int(42)));
    assert_eq!(run("3.5"), Ok(Object::Float(3.5)));
    assert_eq!(run("1+2j"), Ok(Object::Complex(ComplexNumber::new(1.0, 2.0))));
    assert_eq!(run(r#""a\tb""#), Ok(Object::from("a\tb")));
    assert_eq!(run(r#""\x41é\101""#), Ok(Object::from("AéA")));
    assert_eq!(run(""), Ok(Object::NIL));
}

#[test]
fn program_value_is_the_last_form() {
    assert_value("1 2 3", "3");
    assert_value("(def x 4) (+ x 1)", "5");
}

#[test]
fn arithmetic_requires_one_operand_kind() {
    assert_value("(+ 1 2 3)", "6");
    assert_value(r#"(+ "a" "b")"#, r#""ab""#);
    assert_value("(* 1.5 2.0)", "3.0");
    assert_value("(- 10 4 3)", "3");
    assert_value("(- 5)", "-5");
    assert_value("(/ 7 2)", "3");
    assert_value("(% 7 3)", "1");
    assert_value("(+ 1+2j 2-1j)", "3+1j");

    assert!(matches!(runtime_error("(+ 1 1.0)"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(r#"(* "a" "b")"#), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn arithmetic_failures() {
    assert_eq!(runtime_error("(/ 1 0)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("(% 1.0 0.0)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("(* 9223372036854775807 2)"), RuntimeError::Overflow);
    assert!(matches!(runtime_error("(%  1)"), RuntimeError::ArityMismatch { .. }));
    assert!(matches!(runtime_error("(+)"), RuntimeError::ArityMismatch { .. }));
}

#[test]
fn range_builds_integer_lists() {
    assert_value("(range 0 10 3)", "[0 3 6 9]");
    assert_value("(range 5)", "[0 1 2 3 4]");
    assert_value("(range 2 5)", "[2 3 4]");
    assert_value("(range 5 0 -2)", "[5 3 1]");
    assert_value("(range 0)", "[]");

    assert!(matches!(runtime_error("(range 0 10 0)"), RuntimeError::InvalidArgument { .. }));
    assert!(matches!(runtime_error("(range 1.0)"), RuntimeError::TypeMismatch { .. }));
    assert_eq!(runtime_error("(range)"),
               RuntimeError::ArityMismatch { name:     "range".to_string(),
                                             expected: Arity::OneOf(&[1, 2, 3]),
                                             found:    0, });
}

#[test]
fn list_and_dict_constructors() {
    assert_value("[1 (+ 1 1) \"three\" []]", r#"[1 2 "three" []]"#);
    assert_value("{\"a\" 1 \"b\" (+ 1 1)}", r#"{"a" 1 "b" 2}"#);
    assert_value("{[1 2] \"first\" [1 2] \"second\"}", r#"{[1 2] "second"}"#);
    assert_value("{1 \"int\" 1.0 \"float\"}", r#"{1 "int" 1.0 "float"}"#);
}

#[test]
fn if_treats_only_nil_as_false() {
    assert_value("(if nil 1 2)", "2");
    assert_value("(if false 1 2)", "1");
    assert_value("(if 0 1 2)", "1");
    assert_value("(if [] 1 2)", "1");
    assert_value("(if nil 1)", "nil");
}

#[test]
fn if_evaluates_only_the_chosen_branch() {
    assert_value("(if true 1 (undefined-function))", "1");
    assert_value("(if nil (undefined-function) 2)", "2");
}

#[test]
fn inner_bindings_never_leak() {
    assert_value("(let [x 1] (let [x 2] x))", "2");
    assert_value("(let [x 1] (let [x 2] x) (do x))", "1");

    assert!(matches!(runtime_error("(let [y 1] y) y"), RuntimeError::UnboundVariable { .. }));
    assert!(matches!(runtime_error("(do (def inner 1)) inner"),
                     RuntimeError::UnboundVariable { .. }));
}

#[test]
fn let_bindings_resolve_in_the_enclosing_scope() {
    assert_value("(def a 10) (let [a 1 b a] b)", "10");
    assert_value("(let [] 5)", "5");
    assert_value("(let [x 1])", "nil");
    assert_value("(do)", "nil");
}

#[test]
fn functions_and_arity() {
    assert_value("(fn add [a b] (+ a b)) (add 2 5)", "7");
    assert_value("((fn [x] (* x x)) 9)", "81");
    assert_value("(fn nothing [])  (nothing)", "nil");

    assert_eq!(runtime_error("(fn f [a b] a) (f 1)"),
               RuntimeError::ArityMismatch { name:     "f".to_string(),
                                             expected: Arity::Exact(2),
                                             found:    1, });
    assert!(matches!(runtime_error("(fn f [a b] a) (f 1 2 3)"),
                     RuntimeError::ArityMismatch { found: 3, .. }));
    // The count is checked before any argument is evaluated.
    assert!(matches!(runtime_error("(fn f [a b] a) (f (missing))"),
                     RuntimeError::ArityMismatch { .. }));
}

#[test]
fn closures_see_their_defining_frame() {
    assert_value("(fn make-adder [n] (fn [x] (+ x n))) (def add5 (make-adder 5)) (add5 10)",
                 "15");
    assert_value(r"
        (fn make-counter []
          (def count 0)
          (fn [] (set count (+ count 1))))
        (def tick (make-counter))
        (tick) (tick) (tick)",
                 "3");
}

#[test]
fn function_bodies_run_in_a_fresh_frame() {
    assert!(matches!(runtime_error("(fn f [x] (def local x)) (f 1) local"),
                     RuntimeError::UnboundVariable { .. }));
    assert_value("(def x 1) (fn shadow [x] x) (shadow 2) x", "1");
}

#[test]
fn tail_calls_do_not_grow_the_stack() {
    assert_value(r#"
        (def remaining 100000)
        (fn spin []
          (def more nil)
          (for [_ (range 0 remaining 1000000000)] (set more true))
          (set remaining (- remaining 1))
          (if more (spin) "done"))
        (spin)"#,
                 r#""done""#);
}

#[test]
fn for_visits_every_combination_in_order() {
    assert_value(r"
        (def n 0)
        (for [a [1 2] b [10 20]]
          (set n (+ (* n 100) (+ a b))))
        n",
                 "11211222");
    assert_value("(def hits 0) (for [a [1 2 3] b []] (set hits (+ hits 1))) hits", "0");
    assert_value("(for [x [1 2]] x)", "nil");
}

#[test]
fn for_variables_stay_inside_the_loop() {
    assert!(matches!(runtime_error("(for [x [1]] x) x"), RuntimeError::UnboundVariable { .. }));
}

#[test]
fn for_sources_must_be_lists() {
    assert!(matches!(runtime_error("(for [x 5] x)"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("(for [x] x)"),
                     RuntimeError::InvalidSpecialForm { form: "for", .. }));
}

#[test]
fn definitions_and_assignment() {
    assert_value("(def x) x", "nil");
    assert_value("(def x 1) (set x 2) x", "2");
    assert_value("(def x 1) (do (set x 5)) x", "5");
    assert_value("(def x 1) (do (def x 5)) x", "1");
    assert_eq!(runtime_error("(set nope 1)"),
               RuntimeError::UnboundVariable { name: "nope".to_string() });
}

#[test]
fn malformed_special_forms() {
    for src in ["(let x 1)", "(let [x] x)", "(let [1 2] 3)", "(if)", "(if 1 2 3 4)", "(def 1 2)",
                "(set x)", "(fn)", "(fn name x)", "(fn [1] 1)", "(class Point)"]
    {
        assert!(matches!(runtime_error(src), RuntimeError::InvalidSpecialForm { .. }),
                "{src} should be rejected");
    }
}

#[test]
fn classes_and_instances() {
    assert_value("(class Point [x 1 y (+ 1 1)]) (new Point)", "<Point x=1 y=2>");
    assert_value("(class Point [x 1]) Point", "<class Point>");
    assert!(matches!(runtime_error("(new 1)"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn calling_non_callables_fails() {
    assert_eq!(runtime_error("(1 2)"), RuntimeError::NotCallable { found: "1".to_string() });
    assert!(matches!(runtime_error(r#"("f")"#), RuntimeError::NotCallable { .. }));
}

#[test]
fn qualified_names_are_not_implemented() {
    assert_eq!(runtime_error("(math.sqrt 4)"),
               RuntimeError::NotImplemented { name: "math.sqrt".to_string() });
    assert_eq!(runtime_error("str/join"),
               RuntimeError::NotImplemented { name: "str/join".to_string() });
    assert_value("(/ 8 2)", "4");
}

#[test]
fn qualified_names_cannot_be_bound() {
    for src in ["(def x.y 1)", "(fn a/b [] 1)", "(fn [p.q] p.q)", "(let [m.n 1] 2)",
                "(for [i.j [1]] 2)", "(class a.B [x 1])", "(class Point [x.y 1])",
                "(def x 1) (set x.y 2)"]
    {
        assert!(matches!(runtime_error(src), RuntimeError::NotImplemented { .. }),
                "{src} should be rejected");
    }
    assert_eq!(runtime_error("(def x.y 1)"),
               RuntimeError::NotImplemented { name: "x.y".to_string() });
}

#[test]
fn quote_forms_are_unbound() {
    assert_eq!(runtime_error("'x"), RuntimeError::UnboundVariable { name: "quote".to_string() });
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("(+ foo 1)");
}

#[test]
fn syntax_errors_are_reported() {
    assert!(matches!(run("(+ 1 2"), Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(run("(+ 1 2))"),
                     Err(Error::Parse(ParseError::UnexpectedClosingBracket { .. }))));
    assert!(matches!(run("()"), Err(Error::Parse(ParseError::EmptyCall { .. }))));
    assert!(matches!(run("{1}"), Err(Error::Parse(ParseError::OddDictEntries { .. }))));
    assert!(matches!(run(r#""\q""#), Err(Error::Lex(LexError::MalformedEscape { .. }))));
    assert!(matches!(run("\"open"), Err(Error::Lex(LexError::UnrecognizedInput { .. }))));
    assert!(matches!(run(&"(".repeat(100_000)),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
}

#[test]
fn errors_stop_the_program_but_keep_earlier_definitions() {
    let env = standard_environment();
    assert!(run_in("(def kept 1) (undefined) (def lost 2)", &env).is_err());
    assert_eq!(env.get("kept"), Ok(Object::Int(1)));
    assert!(env.get("lost").is_err());
}

#[test]
fn printing_returns_nil() {
    assert_value(r#"(print "a" 1) (println) (debug "quoted" [1])"#, "nil");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.gysp").expect("missing file");
    assert_success(&script);
}

#[test]
fn example_produces_its_final_value() {
    let contents = fs::read_to_string("tests/example.gysp").unwrap();
    assert_eq!(run(&contents), Ok(Object::Int(55)));
}
