//! The reusable renderer exposed as a JavaScript class.

use crate::batch::{BatchInput, BatchOptions, BatchProcessingResult, run_batch};
use crate::convert_error;
use crate::types::{RenderOptions, RenderOutput};
use napi_derive::napi;
use spotlight_astro::Renderer;

/// Stateful renderer exposed to Node callers.
#[napi]
pub struct SpotlightRenderer {
    inner: Renderer,
}

#[napi]
impl SpotlightRenderer {
    #[napi(constructor)]
    /// Creates a renderer that can be reused across many documents.
    pub fn new(options: Option<RenderOptions>) -> Self {
        Self {
            inner: Renderer::new(options.unwrap_or_default().into()),
        }
    }

    /// Renders one Markdown document to HTML.
    #[napi]
    pub fn render(&self, input: String) -> napi::Result<RenderOutput> {
        self.inner
            .render(&input)
            .map(RenderOutput::from)
            .map_err(convert_error)
    }

    /// Renders many documents in parallel using Rayon.
    ///
    /// The renderer's own options apply to every input; `options.options` is ignored.
    #[napi(js_name = "renderBatch")]
    pub fn render_batch(
        &self,
        inputs: Vec<BatchInput>,
        options: Option<BatchOptions>,
    ) -> BatchProcessingResult {
        run_batch(&self.inner, inputs, &options.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_constructor_options() {
        let renderer = SpotlightRenderer::new(Some(RenderOptions {
            enable_spotlight: Some(false),
            ..Default::default()
        }));
        let output = renderer
            .render("```\n// spotlight-start\nx\n```".to_string())
            .unwrap();
        assert!(output.html.contains("// spotlight-start"));
        assert_eq!(output.blocks_seen, 0);
    }

    #[test]
    fn batch_ignores_per_batch_render_options() {
        let renderer = SpotlightRenderer::new(None);
        let batch = renderer.render_batch(
            vec![BatchInput {
                id: "a.md".to_string(),
                source: "```\n// spotlight-start\nx\n```".to_string(),
            }],
            Some(BatchOptions {
                options: Some(RenderOptions {
                    enable_spotlight: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        );
        let output = batch.results[0].result.as_ref().unwrap();
        assert!(output.html.contains("has-spotlights"));
        assert_eq!(batch.stats.succeeded, 1);
    }
}
