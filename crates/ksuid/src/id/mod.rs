mod codec;
mod config;
mod formatter;
mod ksuid;
mod parts;

pub use codec::*;
pub use config::*;
pub use formatter::*;
pub use ksuid::*;
pub use parts::*;
