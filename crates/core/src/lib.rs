#![deny(missing_docs)]
//! Spotlight core: HAST node model, spotlight annotation, and HTML output.

/// Spotlight annotation for highlighted code blocks.
pub mod annotate;
/// Core error types.
pub mod error;
/// Generic HAST-shaped node tree.
pub mod hast;
/// HTML serialization.
pub mod html;
/// Spotlight marker detection and stripping.
pub mod markers;
/// Markdown parsing adapter.
pub mod parse;
/// Tree transform hooks.
pub mod transform;

pub use annotate::{AnnotateReport, SpotlightAnnotator, annotate};
pub use error::{SourceLocation, SpotlightError};
pub use hast::{Comment, Doctype, Element, Node, Properties, Raw, Root, Text, collect_text};
pub use html::to_html;
pub use markers::{
    LineKind, Marker, SPOTLIGHT_END, SPOTLIGHT_START, classify_line, contains_marker, marker_span,
    strip_markers,
};
pub use parse::{ParseOptions, parse_mdast};
pub use transform::{HastTransform, TransformPipeline};
