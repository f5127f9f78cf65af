mod carry;
mod uint128;

pub use carry::*;
pub use uint128::*;
