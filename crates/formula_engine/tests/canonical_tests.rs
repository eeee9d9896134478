//! Canonical forms of small formulas, one rule at a time.

use formula_ast::{ArithmeticError, Node, Rational};
use formula_engine::{canonicalize, evaluate, CanonicalizeOptions, Canonicalizer, EvalError};
use formula_parser::parse;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn p(input: &str) -> Rc<Node> {
    parse(input).expect("parse failed")
}

fn canon(input: &str) -> String {
    canonicalize(&p(input)).to_polish()
}

fn value(input: &str) -> Rational {
    evaluate(&p(input)).expect("evaluation failed")
}

#[test]
fn test_double_negation() {
    assert_eq!(canonicalize(&p("-- -- 3")), p("3"));
    assert_eq!(canon("-- -- -- 3"), "-- 3");
    assert_eq!(canon("sqrt -- -- 9"), "sqrt 9");
}

#[test]
fn test_even_power_of_negation() {
    assert_eq!(canonicalize(&p("^ -- 2 4")), p("^ 2 4"));
    assert_eq!(canonicalize(&p("^ -- 2 3")), p("^ -- 2 3"));
    assert_eq!(canon("^ -- 2 -2"), "^ 2 -2");
    // Exponent is an expression that evaluates to an even integer
    assert_eq!(canon("^ -- 3 + 1 1"), "^ 3 + 1 1");
    // Even but not an integer power of a negation is left alone
    assert_eq!(canon("^ -- 3 1/2"), "^ -- 3 1/2");
}

#[test]
fn test_even_power_with_unevaluable_exponent_is_skipped() {
    assert_eq!(canon("^ -- 2 / 1 0"), "^ -- 2 / 1 0");
    assert_eq!(canon("^ -- 2 sqrt 2"), "^ -- 2 sqrt 2");
}

#[test]
fn test_declined_even_power_keeps_its_subtrees() {
    let e = p("^ -- -- 2 3");
    assert!(Rc::ptr_eq(&canonicalize(&e), &e));
    assert_eq!(canon("^ -- 2 + 1 -- 2"), "^ -- 2 + 1 -- 2");
    assert_eq!(canon("^ -- * 2 -- 3 sqrt 2"), "^ -- * 2 -- 3 sqrt 2");
}

#[test]
fn test_oversized_exponent_is_skipped_quickly() {
    // The exponent would have millions of bits; its evaluation is refused
    let started = Instant::now();
    assert_eq!(canon("^ -- 2 ^ ^ 9 1000 1000"), "^ -- 2 ^ ^ 9 1000 1000");
    assert!(started.elapsed() < Duration::from_secs(5));

    assert!(matches!(
        evaluate(&p("^ ^ 9 1000 1000")),
        Err(EvalError::Arithmetic(ArithmeticError::OperandTooLarge(_)))
    ));
}

#[test]
fn test_negation_folding() {
    assert_eq!(canonicalize(&p("+ 3 -- 2")), p("- 3 2"));
    assert_eq!(value("+ 3 -- 2"), Rational::from(1));
    assert_eq!(value("- 3 2"), Rational::new(1, 1).unwrap());

    assert_eq!(canon("- 3 -- 2"), "+ 3 2");
    assert_eq!(canon("- -- 3 2"), "-- + 3 2");
    assert_eq!(canon("+ -- 3 2"), "-- - 3 2");
}

#[test]
fn test_negation_through_products_and_quotients() {
    assert_eq!(canon("* -- 2 -- 5"), "* 2 5");
    assert_eq!(canon("/ -- 2 -- 5"), "/ 2 5");
    assert_eq!(canon("* -- 2 5"), "-- * 2 5");
    assert_eq!(canon("/ -- 2 5"), "-- / 2 5");
    assert_eq!(canon("* 2 -- 5"), "-- * 2 5");
    assert_eq!(canon("/ 2 -- 5"), "-- / 2 5");
}

#[test]
fn test_roots_merge() {
    assert_eq!(canon("* sqrt 2 sqrt 8"), "sqrt * 2 8");
    assert_eq!(canon("/ sqrt 8 sqrt 2"), "sqrt / 8 2");
    assert_eq!(value("* sqrt 4 sqrt 9"), value("sqrt * 4 9"));
}

#[test]
fn test_reassociation() {
    assert_eq!(canon("+ 1 + 2 3"), "+ + 1 2 3");
    assert_eq!(canon("* 1 * 2 3"), "* * 1 2 3");
    assert_eq!(canon("+ 1 + 2 + 3 4"), "+ + + 1 2 3 4");
}

#[test]
fn test_reassociation_keeps_signs() {
    assert_eq!(canon("- 5 - 3 1"), "+ - 5 3 1");
    assert_eq!(value("- 5 - 3 1"), Rational::from(3));
    assert_eq!(value("+ - 5 3 1"), Rational::from(3));

    assert_eq!(canon("/ 8 / 4 2"), "* / 8 4 2");
    assert_eq!(value("/ 8 / 4 2"), value("* / 8 4 2"));
}

#[test]
fn test_rules_apply_below_the_root() {
    assert_eq!(canon("! + 1 -- 1"), "! - 1 1");
    assert_eq!(canon("^ * 2 -- 3 2"), "^ * 2 3 2");
}

#[test]
fn test_equivalent_formulas_meet() {
    let forms = ["+ 4 -- 1", "- 4 1", "- 4 -- -- 1", "+ 4 -- -- -- 1"];
    let canonical: Vec<_> = forms.iter().map(|f| canon(f)).collect();
    assert!(canonical.iter().all(|c| c == "- 4 1"), "{:?}", canonical);
}

#[test]
fn test_recorded_steps_replay_the_rewrite() {
    let mut canonicalizer = Canonicalizer::with_options(CanonicalizeOptions { record_steps: true });
    let result = canonicalizer.canonicalize(&p("+ 3 -- 2"));
    assert_eq!(result.to_polish(), "- 3 2");

    let steps = canonicalizer.take_steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].rule_name, "Add Negated");
    assert_eq!(steps[0].description, "a + (--b) = a - b");
    assert_eq!(
        steps[0].to_string(),
        "a + (--b) = a - b  [Add Negated]: + 3 -- 2 -> - 3 2"
    );
}
