//! Function tags, named constants, and arity descriptors.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Operation applied by a [`Term`](crate::Term) to its operands.
///
/// The discriminants are the stable wire values and must never be renumbered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Function {
    /// Reserved sentinel; never valid on a well-formed tree.
    #[default]
    None = 0,
    /// Variadic sum.
    Add = 1,
    /// Variadic product.
    Mul = 2,
    /// `base ^ exponent`.
    Pow = 3,
    /// `dividend mod modulus`.
    Mod = 4,
    /// Natural log of one operand, or `(value, base)` log of two.
    Log = 5,
    /// Round toward negative infinity.
    Floor = 6,
    /// Round toward positive infinity.
    Ceiling = 7,
    /// Variadic maximum.
    Max = 8,
    /// Variadic minimum.
    Min = 9,
    /// Sine (radians).
    Sin = 10,
    /// Cosine (radians).
    Cos = 11,
    /// Tangent (radians).
    Tan = 12,
}

impl Function {
    /// Every function tag except the reserved sentinel, in wire order.
    pub const APPLICABLE: [Function; 12] = [
        Function::Add,
        Function::Mul,
        Function::Pow,
        Function::Mod,
        Function::Log,
        Function::Floor,
        Function::Ceiling,
        Function::Max,
        Function::Min,
        Function::Sin,
        Function::Cos,
        Function::Tan,
    ];

    /// Returns the stable wire value.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a wire value back to a tag, rejecting unknown values.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Function::None),
            1..=12 => Some(Self::APPLICABLE[(value - 1) as usize]),
            _ => None,
        }
    }

    /// Returns the operand-count rule for this function.
    pub const fn arity(self) -> Arity {
        match self {
            Function::None => Arity::Reserved,
            Function::Pow | Function::Mod => Arity::Exactly(2),
            Function::Log => Arity::OneOf(1, 2),
            Function::Floor | Function::Ceiling | Function::Sin | Function::Cos | Function::Tan => {
                Arity::Exactly(1)
            }
            Function::Add | Function::Mul | Function::Max | Function::Min => Arity::AtLeast(2),
        }
    }

    /// Lower-case name used when rendering applications.
    pub const fn name(self) -> &'static str {
        match self {
            Function::None => "none",
            Function::Add => "add",
            Function::Mul => "mul",
            Function::Pow => "pow",
            Function::Mod => "mod",
            Function::Log => "log",
            Function::Floor => "floor",
            Function::Ceiling => "ceiling",
            Function::Max => "max",
            Function::Min => "min",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named mathematical constant carried by a parameter leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstSymbol {
    /// Ratio of a circle's circumference to its diameter.
    Pi = 0,
    /// Euler's number.
    E = 1,
    /// Euler–Mascheroni constant.
    EulerGamma = 2,
    /// Positive infinity.
    Infinity = 3,
    /// The imaginary unit `i`.
    ImaginaryUnit = 4,
}

impl ConstSymbol {
    /// All named constants in wire order.
    pub const ALL: [ConstSymbol; 5] = [
        ConstSymbol::Pi,
        ConstSymbol::E,
        ConstSymbol::EulerGamma,
        ConstSymbol::Infinity,
        ConstSymbol::ImaginaryUnit,
    ];

    /// Returns the stable wire value.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a wire value back to a constant, rejecting unknown values.
    pub fn from_i32(value: i32) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns the real value of the constant, if it has one.
    pub fn real_value(self) -> Option<f64> {
        match self {
            ConstSymbol::Pi => Some(std::f64::consts::PI),
            ConstSymbol::E => Some(std::f64::consts::E),
            ConstSymbol::EulerGamma => Some(EULER_GAMMA),
            ConstSymbol::Infinity => Some(f64::INFINITY),
            ConstSymbol::ImaginaryUnit => None,
        }
    }
}

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

impl Display for ConstSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConstSymbol::Pi => "pi",
            ConstSymbol::E => "E",
            ConstSymbol::EulerGamma => "EulerGamma",
            ConstSymbol::Infinity => "oo",
            ConstSymbol::ImaginaryUnit => "I",
        };
        f.write_str(label)
    }
}

/// Operand-count rule attached to each [`Function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly this many operands.
    Exactly(usize),
    /// Either of two counts.
    OneOf(usize, usize),
    /// At least this many operands.
    AtLeast(usize),
    /// No operand count is valid; the tag itself is rejected.
    Reserved,
}

impl Arity {
    /// Returns whether `count` operands satisfy the rule.
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::OneOf(a, b) => count == a || count == b,
            Arity::AtLeast(n) => count >= n,
            Arity::Reserved => false,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::OneOf(a, b) => write!(f, "{a} or {b}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
            Arity::Reserved => f.write_str("no"),
        }
    }
}
