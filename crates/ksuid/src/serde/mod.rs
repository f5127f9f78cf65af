//! `#[serde(with = ...)]` helpers for [`crate::Ksuid`] fields.
//!
//! - [`as_base62`]: the 27-character text form.
//! - [`as_bytes`]: the 20-byte binary form.

mod ksuid;

pub use ksuid::*;
