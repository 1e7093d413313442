//! Filesystem helpers shared by the install services.

mod error;
mod locate;
mod symlink;

pub use error::{FsError, Result};
pub use locate::locate;
pub use symlink::replace_symlink;
