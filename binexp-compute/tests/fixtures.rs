//! Input / expected output pairs, grouped by the rule they exercise. Each input line is parsed,
//! simplified, and compared to the expected line in prefix notation.

use binexp_compute::symbolic::{error::DivisionByZero, simplify};
use binexp_parser::parser::{ast::Node, parse};
use pretty_assertions::assert_eq;

/// Runs every case through parse, simplify and prefix formatting.
fn run(cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        let words = input.split_whitespace().collect::<Vec<_>>();
        let node = parse(&words).unwrap();
        let simplified = simplify(node).unwrap();
        assert_eq!(simplified.to_prefix(), *expected, "input: {input}");
    }
}

#[test]
fn additive_identity() {
    run(&[
        ("+ x 0", "x"),
        ("+ 0 x", "x"),
        ("+ 0 + 0 y", "y"),
        ("- + a 0 b", "- a b"),
        ("+ 0 0", "0"),
    ]);
}

#[test]
fn multiplicative_identity() {
    run(&[
        ("* x 1", "x"),
        ("* 1 x", "x"),
        ("* 1 * 1 y", "y"),
        ("/ * a 1 b", "/ a b"),
        ("* 1 1", "1"),
    ]);
}

#[test]
fn multiplication_by_zero() {
    run(&[
        ("* x 0", "0"),
        ("* 0 x", "0"),
        ("* + a b 0", "0"),
        ("- y * 0 z", "- y 0"),
        ("* 0 0", "0"),
    ]);
}

#[test]
fn constant_folding() {
    run(&[
        ("+ 1 2", "3"),
        ("- 2 5", "-3"),
        ("* -4 3", "-12"),
        ("/ 9 2", "4"),
        ("/ -7 2", "-4"),
        ("% -7 2", "1"),
        ("% 7 -2", "-1"),
        ("* + 1 2 - 10 4", "18"),
        ("+ x * 2 3", "+ x 6"),
    ]);
}

#[test]
fn combined() {
    run(&[
        ("+ 0 * 1 x", "x"),
        ("+ 1 * 0 + 7 + 5 0", "1"),
        ("* x - 3 2", "x"),
        ("+ x * 1 0", "x"),
        ("* + 1 1 + x - 3 3", "* 2 x"),
        ("x", "x"),
        ("-12", "-12"),
    ]);
}

#[test]
fn division_by_zero() {
    for input in ["/ 5 0", "+ x / 1 - 3 3", "/ * 4 2 * y 0"] {
        let err = simplify(input.parse::<Node>().unwrap()).unwrap_err();
        assert!(err.is::<DivisionByZero>(), "input: {input}");
    }
}

#[test]
fn prefix_round_trip() {
    for input in ["+ x 0", "% / a -3 * b c", "q", "- -1 -2"] {
        let node = input.parse::<Node>().unwrap();
        let words = node.to_prefix();
        let words = words.split_whitespace().collect::<Vec<_>>();
        assert_eq!(parse(&words).unwrap().to_prefix(), node.to_prefix());
    }
}
