mod basic;
mod basic_mono;
mod interface;
#[cfg(feature = "lock")]
mod lock_mono;
#[cfg(feature = "lock")]
mod mutex;
mod status;

pub use basic::*;
pub use basic_mono::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "lock")))]
#[cfg(feature = "lock")]
pub use lock_mono::*;
#[cfg(feature = "lock")]
pub(crate) use mutex::*;
pub use status::*;
