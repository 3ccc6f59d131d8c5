//! Seeded generator of random well-formed expression trees.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::function::{Arity, ConstSymbol, Function};
use crate::types::{Operand, Parameter, Rational, Term};

/// Shape limits for [`TermSampler`].
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Maximum term nesting; leaves are forced at this depth.
    pub max_depth: usize,
    /// Upper bound on operands for variadic functions.
    pub max_operands: usize,
    /// Symbol names to draw from; symbols are skipped when empty.
    pub symbols: Vec<String>,
    /// Integers are drawn from `-int_bound..=int_bound`.
    pub int_bound: i32,
    /// Probability that an operand recurses into a nested term.
    pub nesting_probability: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_operands: 4,
            symbols: vec!["n".into(), "x".into(), "eps".into()],
            int_bound: 64,
            nesting_probability: 0.4,
        }
    }
}

/// Deterministic tree generator; the same seed always yields the same trees.
#[derive(Debug, Clone)]
pub struct TermSampler {
    rng: StdRng,
    config: SamplerConfig,
}

impl TermSampler {
    /// Creates a sampler from a master seed.
    pub fn from_seed(seed: u64, config: SamplerConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// Draws a tree that passes [`validate`](crate::validate()).
    pub fn sample_term(&mut self) -> Term {
        self.term_at(1)
    }

    /// Draws a leaf value, possibly a rational.
    pub fn sample_parameter(&mut self) -> Parameter {
        self.parameter(true)
    }

    fn term_at(&mut self, depth: usize) -> Term {
        let function = *Function::APPLICABLE
            .choose(&mut self.rng)
            .unwrap_or(&Function::Add);
        let count = match function.arity() {
            Arity::Exactly(n) => n,
            Arity::OneOf(a, b) => {
                if self.rng.gen_bool(0.5) {
                    a
                } else {
                    b
                }
            }
            Arity::AtLeast(n) => self.rng.gen_range(n..=self.config.max_operands.max(n)),
            Arity::Reserved => 0,
        };
        let operands = (0..count).map(|_| self.operand_at(depth + 1)).collect();
        Term { function, operands }
    }

    fn operand_at(&mut self, depth: usize) -> Operand {
        if depth < self.config.max_depth && self.rng.gen_bool(self.config.nesting_probability) {
            Operand::Term(self.term_at(depth))
        } else {
            Operand::Parameter(self.parameter(true))
        }
    }

    fn parameter(&mut self, allow_rational: bool) -> Parameter {
        let bound = self.config.int_bound.max(1);
        match self.rng.gen_range(0..5) {
            0 if !self.config.symbols.is_empty() => {
                let idx = self.rng.gen_range(0..self.config.symbols.len());
                Parameter::Symbol(self.config.symbols[idx].clone())
            }
            1 if allow_rational => {
                let numerator = self.parameter(false);
                let magnitude = self.rng.gen_range(1..=bound);
                let denominator = if self.rng.gen_bool(0.5) {
                    magnitude
                } else {
                    -magnitude
                };
                Parameter::ConstRat(Rational::new(numerator, denominator))
            }
            2 => Parameter::ConstFloat(self.rng.gen_range(-bound..=bound) as f32 / 8.0),
            3 => {
                let symbol = *ConstSymbol::ALL
                    .choose(&mut self.rng)
                    .unwrap_or(&ConstSymbol::Pi);
                Parameter::ConstSymbol(symbol)
            }
            _ => Parameter::ConstInt(self.rng.gen_range(-bound..=bound)),
        }
    }
}
