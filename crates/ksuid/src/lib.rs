#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod base62;
mod error;
mod generator;
mod hex;
mod id;
mod rand;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub mod serde;
mod time;
mod uint128;

pub use crate::base62::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::hex::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
pub use crate::uint128::*;
