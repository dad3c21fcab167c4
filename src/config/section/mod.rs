//! Configuration section definitions.
//!
//! | Section              | Purpose                                  |
//! |----------------------|------------------------------------------|
//! | `[[output_targets]]` | Build destinations (`www`, `dist`, ...)  |
//! | `[dev_server]`       | Hot reload gate                          |

mod dev_server;
mod output;

pub use dev_server::DevServerConfig;
pub use output::{OutputKind, OutputTarget};

pub(crate) use output::validate as validate_output_targets;
