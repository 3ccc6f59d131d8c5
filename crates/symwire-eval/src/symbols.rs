//! Free-symbol queries and literal substitution.

use std::collections::BTreeSet;

use symwire_core::{Operand, Parameter, Rational, Term};

use crate::bindings::Bindings;
use crate::value::exact_literal;

/// Names of every symbol in the tree, including those inside rationals.
pub fn free_symbols(term: &Term) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    collect_term(term, &mut names);
    names
}

/// Names of the symbols that `bindings` leaves unresolved.
pub fn unbound_symbols(term: &Term, bindings: &Bindings) -> BTreeSet<String> {
    free_symbols(term)
        .into_iter()
        .filter(|name| bindings.get(name).is_none())
        .collect()
}

/// Replaces every bound symbol by its literal value without evaluating
/// anything else. Unbound symbols are left in place, and so are bound
/// symbols whose value no leaf can hold exactly.
///
/// Binding a denominator symbol to zero yields a tree that no longer passes
/// validation; evaluating it reports a division by zero.
pub fn substitute(term: &Term, bindings: &Bindings) -> Term {
    Term {
        function: term.function,
        operands: term
            .operands
            .iter()
            .map(|operand| substitute_operand(operand, bindings))
            .collect(),
    }
}

pub(crate) fn substitute_operand(operand: &Operand, bindings: &Bindings) -> Operand {
    match operand {
        Operand::Term(inner) => Operand::Term(substitute(inner, bindings)),
        Operand::Parameter(parameter) => {
            Operand::Parameter(substitute_parameter(parameter, bindings))
        }
    }
}

pub(crate) fn substitute_parameter(parameter: &Parameter, bindings: &Bindings) -> Parameter {
    match parameter {
        Parameter::Symbol(name) => match bindings.get(name).and_then(exact_literal) {
            Some(leaf) => leaf,
            None => parameter.clone(),
        },
        Parameter::ConstRat(rational) => Parameter::ConstRat(Rational {
            numerator: Box::new(substitute_parameter(&rational.numerator, bindings)),
            denominator: Box::new(substitute_parameter(&rational.denominator, bindings)),
        }),
        _ => parameter.clone(),
    }
}

fn collect_term(term: &Term, names: &mut BTreeSet<String>) {
    for operand in &term.operands {
        collect_operand(operand, names);
    }
}

pub(crate) fn collect_operand(operand: &Operand, names: &mut BTreeSet<String>) {
    match operand {
        Operand::Term(term) => collect_term(term, names),
        Operand::Parameter(parameter) => collect_parameter(parameter, names),
    }
}

fn collect_parameter(parameter: &Parameter, names: &mut BTreeSet<String>) {
    match parameter {
        Parameter::Symbol(name) => {
            names.insert(name.clone());
        }
        Parameter::ConstRat(rational) => {
            collect_parameter(&rational.numerator, names);
            collect_parameter(&rational.denominator, names);
        }
        _ => {}
    }
}
