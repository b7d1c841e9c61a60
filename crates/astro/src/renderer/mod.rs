#![allow(missing_docs)]
pub mod hast;

pub use hast::{Options, RenderResult, Renderer, render_markdown, to_hast};
