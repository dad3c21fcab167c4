//! Core types - pure abstractions shared across the codebase.

mod category;
mod context;
mod state;

pub use category::FileKind;
pub use context::{BuildContext, StyleMap};
pub use state::{is_shutdown, register_watcher, setup_shutdown_handler};
