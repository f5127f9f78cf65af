mod codec;
mod error;

pub use codec::*;
pub use error::*;
