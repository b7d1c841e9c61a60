//! NAPI-exposed data structures.

use napi_derive::napi;
use spotlight_astro::Options;

/// Options accepted by `renderMarkdown` and the `SpotlightRenderer` constructor.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Process spotlight markers in code blocks. Defaults to true.
    pub enable_spotlight: Option<bool>,
    /// Enables GFM extensions. Defaults to true.
    pub gfm: Option<bool>,
    /// Pass raw HTML through unescaped. Defaults to false.
    pub allow_raw_html: Option<bool>,
}

impl From<RenderOptions> for Options {
    fn from(value: RenderOptions) -> Self {
        let defaults = Options::default();
        Options {
            enable_spotlight: value.enable_spotlight.unwrap_or(defaults.enable_spotlight),
            gfm: value.gfm.unwrap_or(defaults.gfm),
            allow_raw_html: value.allow_raw_html.unwrap_or(defaults.allow_raw_html),
        }
    }
}

/// Rendered HTML plus what the spotlight pass changed.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Serialized HTML.
    pub html: String,
    /// Code blocks visited.
    pub blocks_seen: u32,
    /// Code blocks that contained at least one marker.
    pub blocks_spotlighted: u32,
    /// Line nodes removed from the output.
    pub lines_removed: u32,
}

impl From<spotlight_astro::RenderResult> for RenderOutput {
    fn from(value: spotlight_astro::RenderResult) -> Self {
        let report = value.report;
        Self {
            html: value.html,
            blocks_seen: report.blocks_seen as u32,
            blocks_spotlighted: report.blocks_spotlighted as u32,
            lines_removed: report.lines_removed as u32,
        }
    }
}
