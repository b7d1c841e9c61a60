//! HTML serialization for the node tree.

use crate::hast::{Element, Node};
use serde_json::Value as JsonValue;

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serializes a tree to an HTML string.
pub fn to_html(node: &Node) -> String {
    let mut out = String::with_capacity(1024);
    write_node(node, &mut out, false);
    out
}

fn write_node(node: &Node, out: &mut String, raw_text: bool) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                write_node(child, out, raw_text);
            }
        }
        Node::Element(element) => write_element(element, out),
        Node::Text(text) if raw_text => out.push_str(&text.value),
        Node::Text(text) => out.push_str(&html_escape::encode_text(&text.value)),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&comment.value);
            out.push_str("-->");
        }
        Node::Doctype(_) => out.push_str("<!doctype html>"),
        Node::Raw(raw) => out.push_str(&raw.value),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag_name);

    let classes = &element.properties.class_name;
    if !classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(
            &classes.join(" "),
        ));
        out.push('"');
    }

    for (name, value) in &element.properties.other {
        write_attribute(name, value, out);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag_name.as_str()) {
        return;
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&element.tag_name.as_str());
    for child in &element.children {
        write_node(child, out, raw_text);
    }

    out.push_str("</");
    out.push_str(&element.tag_name);
    out.push('>');
}

fn write_attribute(property: &str, value: &JsonValue, out: &mut String) {
    let value = match value {
        JsonValue::Null | JsonValue::Bool(false) => return,
        JsonValue::Bool(true) => {
            out.push(' ');
            out.push_str(&attribute_name(property));
            return;
        }
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                JsonValue::String(s) => Some(s.clone()),
                JsonValue::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" "),
        JsonValue::Object(_) => {
            log::debug!("Skipping object-valued property `{}` in HTML output", property);
            return;
        }
    };

    out.push(' ');
    out.push_str(&attribute_name(property));
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(&value));
    out.push('"');
}

/// Maps a HAST property name to its HTML attribute name.
///
/// `dataLineNumber` becomes `data-line-number`, `ariaLabel` becomes
/// `aria-label`, and other camelCase names are lowercased (`tabIndex`).
fn attribute_name(property: &str) -> String {
    for prefix in ["data", "aria"] {
        if let Some(rest) = property.strip_prefix(prefix)
            && rest.starts_with(|c: char| c.is_ascii_uppercase())
        {
            let mut name = String::with_capacity(property.len() + 4);
            name.push_str(prefix);
            for c in rest.chars() {
                if c.is_ascii_uppercase() {
                    name.push('-');
                    name.push(c.to_ascii_lowercase());
                } else {
                    name.push(c);
                }
            }
            return name;
        }
    }

    match property {
        "htmlFor" => "for".to_string(),
        "acceptCharset" => "accept-charset".to_string(),
        "httpEquiv" => "http-equiv".to_string(),
        _ => property.to_ascii_lowercase(),
    }
}
