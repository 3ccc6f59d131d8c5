use symwire_core::{
    validate, validate_parameter, Arity, ErrorKind, Function, Operand, Parameter, SamplerConfig,
    Term, TermSampler, ValidationError,
};

fn a() -> Operand {
    Operand::from("a")
}

fn b() -> Operand {
    Operand::from("b")
}

#[test]
fn pow_requires_two_operands() {
    let err = validate(&Term::new(Function::Pow, [a()])).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Arity {
            function: Function::Pow,
            expected: Arity::Exactly(2),
            found: 1,
            ..
        }
    ));
    assert!(validate(&Term::new(Function::Pow, [a(), b()])).is_ok());
}

#[test]
fn arity_table() {
    let cases: [(Function, usize, bool); 16] = [
        (Function::Mod, 2, true),
        (Function::Mod, 3, false),
        (Function::Log, 1, true),
        (Function::Log, 2, true),
        (Function::Log, 3, false),
        (Function::Floor, 1, true),
        (Function::Ceiling, 2, false),
        (Function::Sin, 0, false),
        (Function::Cos, 1, true),
        (Function::Tan, 1, true),
        (Function::Add, 1, false),
        (Function::Add, 5, true),
        (Function::Mul, 2, true),
        (Function::Max, 1, false),
        (Function::Min, 3, true),
        (Function::Pow, 3, false),
    ];
    for (function, count, ok) in cases {
        let term = Term::new(function, (0..count).map(|idx| Operand::from(idx as i32)));
        assert_eq!(validate(&term).is_ok(), ok, "{function} with {count} operands");
    }
}

#[test]
fn sentinel_is_always_rejected() {
    for count in 0..4 {
        let term = Term::new(Function::None, (0..count).map(|_| a()));
        let err = validate(&term).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.code(), "reserved-function");
    }
    let nested = Term::add([a(), Operand::from(Term::new(Function::None, [b()]))]);
    assert_eq!(validate(&nested).unwrap_err().code(), "reserved-function");
}

#[test]
fn empty_symbol_is_rejected() {
    let term = Term::add([a(), Operand::from("")]);
    assert_eq!(validate(&term).unwrap_err().code(), "empty-symbol");
}

#[test]
fn literal_zero_denominator_is_rejected() {
    for zero in [Parameter::int(0), Parameter::float(0.0), Parameter::float(-0.0)] {
        let rational = Parameter::rational(1, zero);
        assert_eq!(validate_parameter(&rational).unwrap_err().code(), "zero-denominator");
    }
    let symbolic = Parameter::rational(1, Parameter::symbol("n"));
    assert!(validate_parameter(&symbolic).is_ok());
    let nested_zero = Parameter::rational(1, Parameter::rational(0, 5));
    assert!(validate_parameter(&nested_zero).is_ok());
}

#[test]
fn validate_is_idempotent() {
    let mut sampler = TermSampler::from_seed(99, SamplerConfig::default());
    for _ in 0..64 {
        let term = sampler.sample_term();
        let before = term.clone();
        let first = validate(&term);
        let second = validate(&term);
        assert_eq!(first, second);
        assert_eq!(term, before);
    }
    let bad = Term::new(Function::Tan, [a(), b()]);
    assert_eq!(validate(&bad), validate(&bad));
}
