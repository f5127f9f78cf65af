mod interface;
#[cfg(feature = "std")]
mod mono_clock;
#[cfg(feature = "std")]
mod system_clock;

pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use mono_clock::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use system_clock::*;

#[cfg(all(feature = "std", target_arch = "wasm32", target_os = "unknown"))]
pub(crate) use web_time::{Instant, SystemTime, UNIX_EPOCH};

#[cfg(all(feature = "std", not(all(target_arch = "wasm32", target_os = "unknown"))))]
pub(crate) use std::time::{Instant, SystemTime, UNIX_EPOCH};
