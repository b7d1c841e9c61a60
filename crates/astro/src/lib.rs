#![deny(missing_docs)]
//! Spotlight Astro engine: Markdown to HAST lowering, spotlight annotation, and HTML output.

/// Rendering layer (MDAST → HAST renderer).
pub mod renderer;

pub use renderer::hast::code::{PRE_CLASS, code_block};
pub use renderer::{Options, RenderResult, Renderer, render_markdown, to_hast};
