pub mod decode;
pub mod encode;
pub mod eval;
pub mod hash;
pub mod store;
pub mod validate;
