//! Field numbers of the wire schema. These are part of the stable format.

pub(crate) mod term {
    pub(crate) const FUNCTION: u32 = 1;
    pub(crate) const OPERANDS: u32 = 2;
}

pub(crate) mod operand {
    pub(crate) const TERM: u32 = 1;
    pub(crate) const PARAMETER: u32 = 2;
}

pub(crate) mod parameter {
    pub(crate) const CONST_INT: u32 = 1;
    pub(crate) const SYMBOL: u32 = 2;
    pub(crate) const CONST_RAT: u32 = 3;
    pub(crate) const CONST_FLOAT: u32 = 4;
    pub(crate) const CONST_SYMBOL: u32 = 5;
}

pub(crate) mod rational {
    pub(crate) const NUMERATOR: u32 = 1;
    pub(crate) const DENOMINATOR: u32 = 2;
}
