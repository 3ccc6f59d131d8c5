use symwire_core::{validate_operand, ConstSymbol, ErrorKind, Function, Operand, Parameter, Term};
use symwire_eval::{evaluate, evaluate_strict, Bindings, EvalError, Evaluator, Value};

fn number(term: &Term, bindings: &Bindings) -> f64 {
    evaluate(term, bindings)
        .expect("evaluation")
        .as_number()
        .expect("fully numeric result")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn integer_arithmetic() {
    let none = Bindings::new();
    assert_eq!(number(&Term::add([Operand::from(2), Operand::from(3)]), &none), 5.0);
    assert_eq!(number(&Term::pow(2, 10), &none), 1024.0);
    assert_eq!(
        number(&Term::mul([Operand::from(2), Operand::from(3), Operand::from(4)]), &none),
        24.0
    );
}

#[test]
fn bound_symbols_resolve() {
    let bindings = Bindings::new().with("x", 4.0).with("n", 3.0);
    let term = Term::add([Operand::from("x"), Operand::from(Term::pow("x", "n"))]);
    assert_eq!(number(&term, &bindings), 68.0);
}

#[test]
fn unbound_symbol_stays_symbolic() {
    let term = Term::add([
        Operand::from("x"),
        Operand::from(Term::mul([Operand::from(2), Operand::from(3)])),
    ]);
    let value = evaluate(&term, &Bindings::new()).unwrap();
    assert!(value.is_symbolic());
    assert!(value.free_symbols().contains("x"));
    assert_eq!(
        value,
        Value::Symbolic(Operand::Term(Term::add([Operand::from("x"), Operand::from(6)])))
    );
    assert_eq!(value.to_string(), "(x + 6)");
}

#[test]
fn strict_mode_reports_the_missing_symbol() {
    let term = Term::add([Operand::from("x"), Operand::from(1)]);
    let err = evaluate_strict(&term, &Bindings::new()).unwrap_err();
    assert_eq!(err, EvalError::UnboundSymbol { name: "x".into() });
    assert_eq!(err.kind(), ErrorKind::UnboundSymbol);
    assert!(err.is_recoverable());

    let value = evaluate_strict(&term, &Bindings::new().with("x", 1.0)).unwrap();
    assert_eq!(value, Value::Number(2.0));
}

#[test]
fn literal_zero_denominator_is_division_by_zero() {
    let one_over_zero = Parameter::rational(1, 0);
    let err = Evaluator::new()
        .evaluate_parameter(&one_over_zero, &Bindings::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert!(!err.is_recoverable());
}

#[test]
fn symbolic_denominator_bound_to_zero() {
    let term = Term::add([Operand::from(Parameter::rational(1, "n")), Operand::from(1)]);
    let err = evaluate(&term, &Bindings::new().with("n", 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(number(&term, &Bindings::new().with("n", 4.0)), 1.25);
}

#[test]
fn partially_resolved_rational_keeps_its_shape() {
    let nested = Parameter::rational(Parameter::rational(1, 2), "x");
    let value = Evaluator::new()
        .evaluate_parameter(&nested, &Bindings::new())
        .unwrap();
    assert_eq!(
        value,
        Value::Symbolic(Operand::Parameter(Parameter::rational(0.5f32, "x")))
    );
}

#[test]
fn tiny_denominator_binding_keeps_the_symbol() {
    let bindings = Bindings::new().with("x", 1e-50);
    let ratio = Parameter::rational("y", "x");
    let value = Evaluator::new().evaluate_parameter(&ratio, &bindings).unwrap();
    assert_eq!(value, Value::Symbolic(Operand::Parameter(ratio)));
    if let Value::Symbolic(residual) = &value {
        assert!(validate_operand(residual).is_ok());
    }
}

#[test]
fn inexact_subtrees_stay_unreduced_in_residuals() {
    let term = Term::add([Operand::from("z"), Operand::from(Term::modulo("y", "x"))]);
    let bindings = Bindings::new().with("x", 1e-50).with("y", 1.0);
    let value = evaluate(&term, &bindings).unwrap();
    assert_eq!(
        value,
        Value::Symbolic(Operand::Term(Term::add([
            Operand::from("z"),
            Operand::from(Term::modulo(1, "x")),
        ])))
    );
    let Value::Symbolic(residual) = value else {
        panic!("expected a residual");
    };
    assert!(validate_operand(&residual).is_ok());

    let full = bindings.with("z", 2.0);
    let again = Evaluator::new().evaluate_operand(&residual, &full).unwrap();
    assert_eq!(again, evaluate(&term, &full).unwrap());
}

#[test]
fn wide_and_named_values_are_not_narrowed() {
    let term = Term::mul([
        Operand::from("z"),
        Operand::from("big"),
        Operand::from(ConstSymbol::Pi),
        Operand::from(Term::add([Operand::from(1), Operand::from(2)])),
    ]);
    let value = evaluate(&term, &Bindings::new().with("big", f64::MAX)).unwrap();
    assert_eq!(
        value,
        Value::Symbolic(Operand::Term(Term::mul([
            Operand::from("z"),
            Operand::from("big"),
            Operand::from(ConstSymbol::Pi),
            Operand::from(3),
        ])))
    );
}

#[test]
fn floored_modulo() {
    let none = Bindings::new();
    assert_eq!(number(&Term::modulo(7, 3), &none), 1.0);
    assert_eq!(number(&Term::modulo(-7, 3), &none), 2.0);
    assert_eq!(number(&Term::modulo(7, -3), &none), -2.0);
}

#[test]
fn zero_modulus_fails_even_with_symbolic_dividend() {
    let none = Bindings::new();
    for term in [Term::modulo(7, 0), Term::modulo("x", 0)] {
        let err = evaluate(&term, &none).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }
}

#[test]
fn logarithms() {
    let none = Bindings::new();
    assert_close(number(&Term::log(8, 2), &none), 3.0);
    assert_close(number(&Term::ln(ConstSymbol::E), &none), 1.0);
    let err = evaluate(&Term::log("x", 1), &none).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn zero_to_negative_power() {
    let none = Bindings::new();
    let err = evaluate(&Term::pow(0, -1), &none).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(number(&Term::pow(0, 2), &none), 0.0);
}

#[test]
fn rounding_and_extrema() {
    let none = Bindings::new();
    assert_eq!(number(&Term::unary(Function::Floor, 2.5f32), &none), 2.0);
    assert_eq!(number(&Term::unary(Function::Ceiling, -2.5f32), &none), -2.0);
    assert_eq!(
        number(&Term::max([Operand::from(1), Operand::from(7), Operand::from(3)]), &none),
        7.0
    );
    assert_eq!(
        number(&Term::min([Operand::from(1), Operand::from(-7), Operand::from(3)]), &none),
        -7.0
    );
}

#[test]
fn named_constants() {
    let none = Bindings::new();
    assert_close(number(&Term::unary(Function::Cos, ConstSymbol::Pi), &none), -1.0);
    assert_close(number(&Term::unary(Function::Sin, 0), &none), 0.0);
    assert_eq!(
        number(&Term::max([Operand::from(1), Operand::from(ConstSymbol::Infinity)]), &none),
        f64::INFINITY
    );
}

#[test]
fn imaginary_unit_is_symbolic_or_non_real() {
    let term = Term::mul([Operand::from(2), Operand::from(ConstSymbol::ImaginaryUnit)]);
    let value = evaluate(&term, &Bindings::new()).unwrap();
    assert_eq!(value.to_string(), "(2*I)");
    assert!(value.free_symbols().is_empty());

    let err = evaluate_strict(&term, &Bindings::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonReal);
}

#[test]
fn invalid_trees_are_not_evaluated() {
    let err = evaluate(&Term::new(Function::Pow, [Operand::from(2)]), &Bindings::new()).unwrap_err();
    assert!(matches!(err, EvalError::Invalid(_)));
    assert_eq!(err.kind(), ErrorKind::Arity);

    let err = evaluate(&Term::add([Operand::from(""), Operand::from(1)]), &Bindings::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn bare_operands_evaluate() {
    let evaluator = Evaluator::new();
    assert!(!evaluator.is_strict());
    let value = evaluator
        .evaluate_operand(&Operand::from("y"), &Bindings::new().with("y", 2.5))
        .unwrap();
    assert_eq!(value, Value::Number(2.5));
}

#[test]
fn public_types_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Evaluator>();
    assert_send_sync::<Bindings>();
    assert_send_sync::<Value>();
    assert_send_sync::<EvalError>();
    assert_send_sync::<Term>();
}
