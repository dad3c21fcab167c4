//! Command-line interface module.

mod args;
pub mod impact;
pub mod watch;

pub use args::{Cli, Commands};
