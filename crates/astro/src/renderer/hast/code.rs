//! Code block lowering in the shape a syntax highlighter emits.
//!
//! Shiki and friends render a fence as
//! `<pre class="astro-code"><code><span class="line">..</span>\n<span class="line">..</span></code></pre>`.
//! No tokenization happens here; each line is a single text node, which is
//! all the spotlight annotator needs.

use spotlight_core::annotate::LINE_CLASS;
use spotlight_core::{Element, Node};

/// Class carried by every rendered code block container.
pub const PRE_CLASS: &str = "astro-code";

/// Builds the `pre > code > span.line` structure for a fenced code block.
pub fn code_block(value: &str, lang: Option<&str>) -> Element {
    let mut pre = Element::new("pre")
        .with_class(PRE_CLASS)
        .with_property("tabIndex", 0);
    let mut code = Element::new("code");

    if let Some(lang) = lang.filter(|l| !l.is_empty()) {
        pre = pre.with_property("dataLanguage", lang);
        code.add_class(&format!("language-{}", lang));
    }

    code.children = line_nodes(value);
    pre.with_children(vec![code.into()])
}

/// Splits `value` on `\n` into `span.line` elements joined by newline text nodes.
///
/// A trailing newline yields an empty final line, matching highlighter output.
pub fn line_nodes(value: &str) -> Vec<Node> {
    let mut children = Vec::new();
    for (index, line) in value.split('\n').enumerate() {
        if index > 0 {
            children.push(Node::text("\n"));
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        let span = Element::new("span").with_class(LINE_CLASS);
        let span = if line.is_empty() {
            span
        } else {
            span.with_children(vec![Node::text(line)])
        };
        children.push(span.into());
    }
    children
}
