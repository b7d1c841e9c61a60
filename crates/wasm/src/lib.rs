use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use spotlight_astro::Options;
use spotlight_core::Node;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Plain objects instead of `Map`s, so property bags read like HAST in JS.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn parse_options(opts: JsValue) -> Result<Options, JsError> {
    if opts.is_undefined() || opts.is_null() {
        return Ok(Options::default());
    }
    serde_wasm_bindgen::from_value(opts).map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

/// Applies spotlight classes to a HAST tree and returns the annotated copy.
///
/// ```javascript
/// import { annotate_hast } from 'spotlight-wasm';
///
/// const tree = annotate_hast(hastFromShiki);
/// // tree.children[0].children[0].properties.className includes "has-spotlights"
/// ```
#[wasm_bindgen(js_name = annotate_hast)]
pub fn annotate_hast(tree: JsValue) -> Result<JsValue, JsError> {
    let mut tree: Node = serde_wasm_bindgen::from_value(tree)
        .map_err(|e| JsError::new(&format!("Invalid tree: {}", e)))?;
    spotlight_core::annotate(&mut tree);
    to_js(&tree)
}

/// Renders Markdown to HTML with spotlighted code blocks.
///
/// Returns `{ html, report: { blocksSeen, blocksSpotlighted, linesRemoved } }`.
#[wasm_bindgen(js_name = render_markdown)]
pub fn render_markdown(input: &str, opts: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(opts)?;
    let result = spotlight_astro::render_markdown(input, &options)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&result)
}
