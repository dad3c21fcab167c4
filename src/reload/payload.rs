//! Hot Reload Payload
//!
//! The minimal description of what one rebuild cycle changed, serialized as
//! JSON for the dev-server transport.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "componentsUpdated": ["my-bar", "my-foo"],
//!   "stylesUpdated": { "my-bar": ":host{color:red}" },
//!   "externalStylesUpdated": ["/build/app.css"]
//! }
//! ```
//!
//! Every field is optional and an absent field is omitted, never `null`.
//! Clients branch on key presence, so `{}` and `{"componentsUpdated":[]}`
//! are different messages and the latter is never produced.

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::core::{BuildContext, StyleMap};
use crate::registry::ModuleRegistry;

use super::{impact, styles};

/// What changed in a rebuild cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotReloadPayload {
    /// Sorted tags of components whose definitions must be reloaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components_updated: Option<Vec<String>>,

    /// Component tag → new inline style text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles_updated: Option<StyleMap>,

    /// Sorted root-relative URLs of rewritten stylesheets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_styles_updated: Option<Vec<String>>,
}

impl HotReloadPayload {
    pub fn builder() -> PayloadBuilder {
        PayloadBuilder::default()
    }

    /// True if no field is present.
    pub fn is_empty(&self) -> bool {
        self.components_updated.is_none()
            && self.styles_updated.is_none()
            && self.external_styles_updated.is_none()
    }

    /// Serialize to a single-line JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Short human-readable summary, e.g. `2 components, 1 stylesheet`.
    pub fn summary(&self) -> String {
        fn part(count: usize, noun: &str) -> String {
            if count == 1 {
                format!("1 {noun}")
            } else {
                format!("{count} {noun}s")
            }
        }

        let mut parts = Vec::with_capacity(3);
        if let Some(tags) = &self.components_updated {
            parts.push(part(tags.len(), "component"));
        }
        if let Some(styles) = &self.styles_updated {
            parts.push(part(styles.len(), "inline style"));
        }
        if let Some(urls) = &self.external_styles_updated {
            parts.push(part(urls.len(), "stylesheet"));
        }

        if parts.is_empty() {
            "no changes".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Attaches a field only when its value is present and non-empty.
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    payload: HotReloadPayload,
}

impl PayloadBuilder {
    pub fn components(mut self, tags: Option<Vec<String>>) -> Self {
        self.payload.components_updated = tags.filter(|t| !t.is_empty());
        self
    }

    pub fn styles(mut self, styles: Option<StyleMap>) -> Self {
        self.payload.styles_updated = styles.filter(|s| !s.is_empty());
        self
    }

    pub fn external_styles(mut self, urls: Option<Vec<String>>) -> Self {
        self.payload.external_styles_updated = urls.filter(|u| !u.is_empty());
        self
    }

    pub fn build(self) -> HotReloadPayload {
        self.payload
    }
}

/// Check whether a cycle is eligible for hot reload at all.
///
/// Requires an incremental rebuild and a dev server with hot reload enabled.
#[inline]
pub fn is_eligible(config: &ProjectConfig, ctx: &BuildContext) -> bool {
    ctx.is_rebuild && config.dev_server.as_ref().is_some_and(|d| d.hot_reload)
}

/// Compute the hot-reload payload for one build cycle.
///
/// Returns `None` outside eligible rebuild cycles. Inside one, always returns
/// a payload, possibly with every field absent.
///
/// Pure: reads the three snapshots and nothing else.
pub fn build(
    config: &ProjectConfig,
    registry: &ModuleRegistry,
    ctx: &BuildContext,
) -> Option<HotReloadPayload> {
    if !is_eligible(config, ctx) {
        return None;
    }

    let payload = HotReloadPayload::builder()
        .components(impact::resolve(registry, ctx.changed()))
        .styles(styles::inline_styles(ctx))
        .external_styles(styles::external_styles(&config.output_targets, ctx))
        .build();

    Some(payload)
}
