//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path handling (`normalize_path`, `relative_path`)
//! - [`route`]: URL utilities (`root_url`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, relative_path};
pub use route::root_url;
