//! MDAST → HAST renderer with spotlight annotation.
//!
//! This module lowers markdown-rs MDAST into the generic node tree from
//! `spotlight-core`, runs registered tree transforms plus the spotlight
//! annotator, and serializes the result to HTML.
//!
//! # Module Structure
//!
//! - `code` - Code block lowering in highlighter shape (`span.line` per line)
//! - `context` - Lowering context for tracking list/blockquote scope
//! - `render` - AST node lowering functions

pub mod code;
mod context;
pub mod render;

pub use context::{Context, Scope};

use render::render_node;
use serde::{Deserialize, Serialize};
use spotlight_core::{
    AnnotateReport, HastTransform, Node, ParseOptions, SpotlightAnnotator, SpotlightError,
    TransformPipeline, parse_mdast, to_html,
};

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Whether spotlight markers in code blocks are processed.
    #[serde(default = "default_enable_spotlight", alias = "enableSpotlight")]
    pub enable_spotlight: bool,
    /// Whether GitHub Flavored Markdown constructs are recognized.
    #[serde(default = "default_gfm")]
    pub gfm: bool,
    /// Whether raw HTML passes through unescaped.
    #[serde(default, alias = "allowRawHtml")]
    pub allow_raw_html: bool,
}

fn default_enable_spotlight() -> bool {
    true
}

fn default_gfm() -> bool {
    true
}

impl Options {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            gfm: self.gfm,
            raw_html: self.allow_raw_html,
            ..ParseOptions::markdown()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enable_spotlight: default_enable_spotlight(),
            gfm: default_gfm(),
            allow_raw_html: false,
        }
    }
}

/// Result of rendering one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResult {
    /// Serialized HTML.
    pub html: String,
    /// What the spotlight annotator changed.
    pub report: AnnotateReport,
}

/// Markdown renderer with an optional chain of tree transforms.
///
/// Registered transforms run after lowering and before the spotlight
/// annotator, so they can reshape code blocks the annotator then reads.
#[derive(Debug, Default)]
pub struct Renderer {
    options: Options,
    pipeline: TransformPipeline,
}

impl Renderer {
    /// Creates a renderer with the given options and no extra transforms.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            pipeline: TransformPipeline::new(),
        }
    }

    /// Returns the rendering options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Registers a transform that runs before spotlight annotation.
    pub fn add_transform<T: HastTransform + 'static>(&mut self, transform: T) {
        self.pipeline.add(transform);
    }

    /// Parses and lowers markdown into a tree without running any transform.
    pub fn to_tree(&self, input: &str) -> Result<Node, SpotlightError> {
        let mdast = parse_mdast(input, &self.options.parse_options())?;
        let mut ctx = Context::new(&self.options);
        let mut children = Vec::new();
        render_node(&mdast, &mut ctx, &mut children);
        Ok(Node::root(children))
    }

    /// Runs registered transforms and, when enabled, the spotlight annotator.
    pub fn transform_tree(&self, tree: &mut Node) -> AnnotateReport {
        self.pipeline.apply(tree);
        if self.options.enable_spotlight {
            SpotlightAnnotator::new().annotate_with_report(tree)
        } else {
            AnnotateReport::default()
        }
    }

    /// Renders markdown to HTML.
    pub fn render(&self, input: &str) -> Result<RenderResult, SpotlightError> {
        let mut tree = self.to_tree(input)?;
        let report = self.transform_tree(&mut tree);
        Ok(RenderResult {
            html: to_html(&tree),
            report,
        })
    }
}

/// Converts markdown to an annotated tree (entry point for tree consumers).
pub fn to_hast(input: &str, options: &Options) -> Result<Node, SpotlightError> {
    let renderer = Renderer::new(options.clone());
    let mut tree = renderer.to_tree(input)?;
    renderer.transform_tree(&mut tree);
    Ok(tree)
}

/// Converts markdown to HTML (entry point).
///
/// # Examples
///
/// ```
/// use spotlight_astro::{Options, render_markdown};
///
/// let input = "```js\nsetup();\n// spotlight-start\nrun();\n// spotlight-end\n```";
/// let result = render_markdown(input, &Options::default()).unwrap();
/// assert!(result.html.contains("has-spotlights"));
/// assert!(!result.html.contains("spotlight-start"));
/// ```
pub fn render_markdown(input: &str, options: &Options) -> Result<RenderResult, SpotlightError> {
    Renderer::new(options.clone()).render(input)
}
