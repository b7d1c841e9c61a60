#![deny(missing_docs)]
//! Node.js bindings that surface spotlight's Rust implementation.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use serde_json::Value as JsonValue;
use spotlight_astro::Renderer;
use spotlight_core::{Node, SpotlightError};

/// Batch processing types and functions.
pub mod batch;
/// The reusable renderer class.
pub mod renderer;
/// NAPI-exposed data structures.
pub mod types;
pub use batch::*;
pub use renderer::SpotlightRenderer;
pub use types::*;

/// Applies spotlight classes to a HAST tree and returns the annotated tree.
///
/// Meant for rehype pipelines that already produced highlighted code blocks.
#[napi(js_name = "annotateHast")]
pub fn annotate_hast(tree: JsonValue) -> napi::Result<JsonValue> {
    let mut tree = Node::from_json_value(tree).map_err(convert_error)?;
    spotlight_core::annotate(&mut tree);
    tree.to_json_value().map_err(convert_error)
}

/// Renders Markdown to HTML with spotlighted code blocks.
#[napi(js_name = "renderMarkdown")]
pub fn render_markdown(input: String, options: Option<RenderOptions>) -> napi::Result<RenderOutput> {
    let options = options.unwrap_or_default().into();
    spotlight_astro::render_markdown(&input, &options)
        .map(RenderOutput::from)
        .map_err(convert_error)
}

/// Renders many Markdown documents in parallel with one set of options.
#[napi(js_name = "renderBatch")]
pub fn render_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> BatchProcessingResult {
    let options = options.unwrap_or_default();
    let renderer = Renderer::new(options.options.clone().unwrap_or_default().into());
    batch::run_batch(&renderer, inputs, &options)
}

/// Maps core errors onto NAPI statuses.
pub(crate) fn convert_error(err: SpotlightError) -> Error {
    match err {
        // A tree that does not decode is the caller's fault.
        SpotlightError::InvalidTree(e) => {
            Error::new(Status::InvalidArg, format!("Invalid tree: {}", e))
        }
        SpotlightError::MarkdownAdapter { message, location } => Error::from_reason(format!(
            "Markdown parser error at {}: {}",
            location, message
        )),
    }
}
