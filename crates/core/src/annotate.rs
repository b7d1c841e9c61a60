//! Spotlight annotation for highlighted code blocks.
//!
//! Walks a tree, finds every `pre > code` pair whose lines are rendered as
//! `span.line` children, strips the spotlight markers and tags each line with
//! `spotlight` or `dim` so a stylesheet can fade the code outside the region.
//! Blocks without markers are left alone apart from the trailing blank line
//! cleanup.

use crate::hast::{Element, Node};
use crate::markers::{LineKind, classify_line, contains_marker, marker_span};
use crate::transform::HastTransform;
use serde::Serialize;
use std::ops::Range;

/// Added to a `code` element that contains at least one marker.
pub const HAS_SPOTLIGHTS_CLASS: &str = "has-spotlights";
/// Added to lines inside a spotlight region.
pub const SPOTLIGHT_CLASS: &str = "spotlight";
/// Added to lines outside every spotlight region.
pub const DIM_CLASS: &str = "dim";
/// Identifies a rendered source line.
pub const LINE_CLASS: &str = "line";
/// Content of a spotlighted line that would otherwise render with no height.
pub const BLANK_LINE_PLACEHOLDER: &str = "\u{00A0}";

/// Counters collected during one annotation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateReport {
    /// `pre` elements visited.
    pub blocks_seen: usize,
    /// Code elements that received `has-spotlights`.
    pub blocks_spotlighted: usize,
    /// Line nodes removed (marker lines, emptied lines, trailing blank lines).
    pub lines_removed: usize,
}

impl AnnotateReport {
    fn merge(&mut self, other: AnnotateReport) {
        self.blocks_seen += other.blocks_seen;
        self.blocks_spotlighted += other.blocks_spotlighted;
        self.lines_removed += other.lines_removed;
    }
}

/// Tree transform that applies spotlight classes to code blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotlightAnnotator;

impl SpotlightAnnotator {
    /// Creates the annotator.
    pub fn new() -> Self {
        Self
    }

    /// Annotates every code block reachable from `tree`, in place.
    pub fn annotate(&self, tree: &mut Node) {
        self.annotate_with_report(tree);
    }

    /// Same as [`annotate`](Self::annotate) but returns what was changed.
    pub fn annotate_with_report(&self, tree: &mut Node) -> AnnotateReport {
        let mut report = AnnotateReport::default();
        visit(tree, &mut report);
        if report.blocks_spotlighted > 0 {
            log::debug!(
                "spotlight: annotated {} of {} code blocks, removed {} lines",
                report.blocks_spotlighted,
                report.blocks_seen,
                report.lines_removed
            );
        }
        report
    }
}

impl HastTransform for SpotlightAnnotator {
    fn transform(&self, tree: &mut Node) {
        self.annotate(tree);
    }
}

/// Annotates every code block reachable from `tree`, in place.
pub fn annotate(tree: &mut Node) {
    SpotlightAnnotator::new().annotate(tree);
}

fn visit(node: &mut Node, report: &mut AnnotateReport) {
    if let Node::Element(element) = node
        && element.is("pre")
    {
        report.merge(annotate_container(element));
    }

    if let Some(children) = node.children_mut() {
        for child in children {
            visit(child, report);
        }
    }
}

/// Processes one `pre` container.
fn annotate_container(pre: &mut Element) -> AnnotateReport {
    let mut report = AnnotateReport {
        blocks_seen: 1,
        ..Default::default()
    };

    let Some(code) = pre
        .children
        .iter_mut()
        .filter_map(Node::as_element_mut)
        .find(|el| el.is("code"))
    else {
        log::trace!("spotlight: skipping <pre> without a <code> child");
        return report;
    };

    report.lines_removed += drop_trailing_blank_line(code);

    let lines = line_indices(code);
    let texts: Vec<String> = lines
        .iter()
        .map(|&index| code.children[index].text_content())
        .collect();
    if !texts.iter().any(|text| contains_marker(text)) {
        return report;
    }

    code.add_class(HAS_SPOTLIGHTS_CLASS);
    report.blocks_spotlighted = 1;

    let mut removed = vec![false; code.children.len()];
    let mut spotlighting = false;

    for (&index, text) in lines.iter().zip(&texts) {
        match classify_line(text) {
            LineKind::MarkerOnly(marker) => {
                spotlighting = marker.spotlighting();
                mark_line_removed(&code.children, index, &mut removed);
            }
            LineKind::Inline(marker) => {
                spotlighting = marker.spotlighting();
                strip_marker_text(&mut code.children[index]);
                if code.children[index].text_content().trim().is_empty() {
                    mark_line_removed(&code.children, index, &mut removed);
                }
            }
            LineKind::Plain => {
                let Some(line) = code.children[index].as_element_mut() else {
                    continue;
                };
                if spotlighting {
                    line.add_class(SPOTLIGHT_CLASS);
                    if text.trim().is_empty() {
                        line.set_text(BLANK_LINE_PLACEHOLDER);
                    }
                } else {
                    line.add_class(DIM_CLASS);
                }
            }
        }
    }

    report.lines_removed += lines.iter().filter(|&&index| removed[index]).count();

    let children = std::mem::take(&mut code.children);
    code.children = children
        .into_iter()
        .zip(removed)
        .filter_map(|(child, remove)| (!remove).then_some(child))
        .collect();

    report
}

/// Indices of the `span.line` children of `code`, in order.
fn line_indices(code: &Element) -> Vec<usize> {
    code.children
        .iter()
        .enumerate()
        .filter(|(_, child)| is_line(child))
        .map(|(index, _)| index)
        .collect()
}

fn is_line(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|el| el.is("span") && el.has_class(LINE_CLASS))
}

fn is_separator(node: &Node) -> bool {
    node.as_text() == Some("\n")
}

/// Highlighters emit an empty final line when the source ends with a newline.
/// Drops it and the separator right before it; returns the number of lines removed.
fn drop_trailing_blank_line(code: &mut Element) -> usize {
    let Some(&last) = line_indices(code).last() else {
        return 0;
    };
    if !code.children[last].text_content().trim().is_empty() {
        return 0;
    }

    let start = if last > 0 && is_separator(&code.children[last - 1]) {
        last - 1
    } else {
        last
    };
    code.children.drain(start..=last);
    1
}

/// Flags the line at `index`, and the `"\n"` separator right after it, for removal.
fn mark_line_removed(children: &[Node], index: usize, removed: &mut [bool]) {
    removed[index] = true;
    if children.get(index + 1).is_some_and(is_separator) {
        removed[index + 1] = true;
    }
}

/// Strips every marker from the text of `line`.
///
/// Markers are located in the concatenated text, so one split across
/// several token spans is removed too.
fn strip_marker_text(line: &mut Node) {
    while let Some(span) = marker_span(&line.text_content()) {
        let Some(children) = line.children_mut() else {
            return;
        };
        remove_text_range(children, &span, &mut 0);
    }
}

/// Removes the bytes in `range` (offsets into the concatenated text) from
/// the text descendants of `children`. Text nodes left empty are dropped, as
/// are token elements whose whole text fell inside the range.
fn remove_text_range(children: &mut Vec<Node>, range: &Range<usize>, offset: &mut usize) {
    children.retain_mut(|child| {
        if let Node::Text(text) = child {
            let start = *offset;
            *offset += text.value.len();
            let from = range.start.max(start);
            let to = range.end.min(*offset);
            if from < to {
                text.value.replace_range(from - start..to - start, "");
                return !text.value.is_empty();
            }
            return true;
        }

        let Some(nested) = child.children_mut() else {
            return true;
        };
        let start = *offset;
        let had_children = !nested.is_empty();
        remove_text_range(nested, range, &mut *offset);
        !(had_children && nested.is_empty() && start < *offset)
    });
}
