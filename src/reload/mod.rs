//! Reload Module
//!
//! Computes what a watch-mode rebuild must push to running clients.
//!
//! # Architecture
//!
//! ```text
//! ModuleRegistry ─┐
//!                 ├─> impact ──┐
//! BuildContext ───┤            ├─> payload -> HotReloadPayload | None
//!                 └─> styles ──┘
//! ProjectConfig ──────────────────┘  (gate + www targets)
//! ```
//!
//! Everything here is pure: no I/O, no global state, one snapshot per call.
//!
//! # Modules
//!
//! - `impact` - Component tags reachable from changed script files
//! - `styles` - Inline style delta and written stylesheet URLs
//! - `payload` - Feature gating and payload assembly

pub mod impact;
pub mod payload;
pub mod styles;

pub use payload::{HotReloadPayload, build as build_payload};
