use proptest::prelude::*;
use symwire_codec::{canonical_hash, decode, encode, from_json, to_json, StoreError};
use symwire_core::{
    ConstSymbol, ErrorKind, Function, Operand, Parameter, SamplerConfig, Term, TermSampler,
};

fn assert_round_trip(term: &Term) {
    let bytes = encode(term).expect("encode");
    let decoded = decode(&bytes).expect("decode");
    assert_eq!(&decoded, term);
}

#[test]
fn edge_values_round_trip() {
    let term = Term::max([
        Operand::from(i32::MIN),
        Operand::from(i32::MAX),
        Operand::from(-1),
        Operand::from(0),
        Operand::from(f32::NAN),
        Operand::from(-0.0f32),
        Operand::from(f32::INFINITY),
        Operand::from("ñ_qubits"),
        Operand::from(ConstSymbol::ImaginaryUnit),
    ]);
    assert_round_trip(&term);
}

#[test]
fn nested_rationals_round_trip() {
    let inner = Parameter::rational(Parameter::symbol("x"), -2);
    let outer = Parameter::rational(inner, Parameter::rational(3, ConstSymbol::E));
    let term = Term::log(Term::unary(Function::Ceiling, outer), 2);
    assert_round_trip(&term);
}

#[test]
fn operand_order_is_preserved() {
    let forward = Term::modulo("a", "b");
    let backward = Term::modulo("b", "a");
    let forward_bytes = encode(&forward).expect("encode");
    let backward_bytes = encode(&backward).expect("encode");
    assert_ne!(forward_bytes, backward_bytes);
    assert_eq!(decode(&forward_bytes).expect("decode"), forward);
}

#[test]
fn canonical_hash_tracks_structure() {
    let x_plus_zero = Term::add([Operand::from("x"), Operand::from(0)]);
    let zero_plus_x = Term::add([Operand::from(0), Operand::from("x")]);
    let a = canonical_hash(&x_plus_zero).expect("hash");
    let b = canonical_hash(&x_plus_zero.clone()).expect("hash");
    let c = canonical_hash(&zero_plus_x).expect("hash");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 64);
}

proptest! {
    #[test]
    fn sampled_trees_round_trip(seed in any::<u64>(), depth in 1usize..6, width in 2usize..6) {
        let config = SamplerConfig {
            max_depth: depth,
            max_operands: width,
            ..SamplerConfig::default()
        };
        let mut sampler = TermSampler::from_seed(seed, config);
        for _ in 0..4 {
            let term = sampler.sample_term();
            let bytes = encode(&term).unwrap();
            let decoded = decode(&bytes).unwrap();
            prop_assert_eq!(&decoded, &term);
            prop_assert_eq!(encode(&decoded).unwrap(), bytes);
        }
    }
}

fn floor_chain(levels: usize) -> Term {
    let mut term = Term::unary(Function::Floor, 1);
    for _ in 1..levels {
        term = Term::unary(Function::Floor, term);
    }
    term
}

#[test]
fn encode_refuses_trees_the_decoder_would_reject() {
    // 63 nested terms put the innermost leaf at message depth 127.
    let at_limit = floor_chain(63);
    let bytes = encode(&at_limit).expect("encode at the limit");
    assert_eq!(decode(&bytes).expect("decode at the limit"), at_limit);

    let too_deep = floor_chain(64);
    let err = encode(&too_deep).unwrap_err();
    assert_eq!(err.code(), "depth-exceeded");
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(canonical_hash(&too_deep).is_err());
}

#[test]
fn to_json_refuses_trees_from_json_would_reject() {
    let mut accepted = 0;
    for levels in 1..=60 {
        let term = floor_chain(levels);
        match to_json(&term) {
            Ok(json) => {
                assert_eq!(from_json(&json).expect("from json"), term);
                accepted = levels;
            }
            Err(err) => {
                assert!(matches!(
                    err,
                    StoreError::Invalid(ref inner) if inner.code() == "depth-exceeded"
                ));
            }
        }
    }
    assert_eq!(accepted, 42);
}
