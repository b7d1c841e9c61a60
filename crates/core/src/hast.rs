//! Generic HAST-shaped node tree.
//!
//! The JSON shape matches what unified/rehype hand around
//! (`{"type": "element", "tagName": "pre", "properties": {...}, "children": [...]}`),
//! so a tree can travel from a JavaScript host into Rust and back without a
//! bespoke schema.

use crate::SpotlightError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Document root holding top-level children.
    Root(Root),
    /// An element with a tag name, properties and children.
    Element(Element),
    /// A literal text value.
    Text(Text),
    /// An HTML comment, carried through opaquely.
    Comment(Comment),
    /// The `<!doctype html>` declaration of a full document.
    Doctype(Doctype),
    /// Verbatim HTML emitted without escaping.
    Raw(Raw),
}

/// Document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    /// Top-level nodes in document order.
    #[serde(default)]
    pub children: Vec<Node>,
    /// Source position reported by the producer, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<JsonValue>,
}

/// Element node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name (`pre`, `code`, `span`, ...).
    #[serde(rename = "tagName")]
    pub tag_name: String,
    /// Property bag, including the class list.
    #[serde(default)]
    pub properties: Properties,
    /// Child nodes in document order.
    #[serde(default)]
    pub children: Vec<Node>,
    /// Source position reported by the producer, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<JsonValue>,
}

/// Text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Literal text.
    pub value: String,
    /// Source position reported by the producer, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<JsonValue>,
}

/// Comment node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body without the `<!--` / `-->` delimiters.
    pub value: String,
    /// Source position reported by the producer, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<JsonValue>,
}

/// Doctype node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctype {
    /// Source position reported by the producer, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<JsonValue>,
}

/// Raw HTML node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raw {
    /// HTML emitted as-is.
    pub value: String,
    /// Source position reported by the producer, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<JsonValue>,
}

/// Element properties.
///
/// `class_name` is kept apart from the rest because it is an ordered set of
/// tokens the annotator edits; everything else is preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Class tokens in insertion order, without duplicates.
    #[serde(
        rename = "className",
        alias = "class",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_class_name"
    )]
    pub class_name: Vec<String>,
    /// Remaining properties keyed by their HAST property name.
    #[serde(flatten)]
    pub other: BTreeMap<String, JsonValue>,
}

fn deserialize_class_name<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ClassName {
        List(Vec<String>),
        Joined(String),
    }

    let mut classes = Vec::new();
    let tokens: Vec<String> = match Option::<ClassName>::deserialize(deserializer)? {
        Some(ClassName::List(list)) => list,
        Some(ClassName::Joined(joined)) => {
            joined.split_whitespace().map(str::to_string).collect()
        }
        None => Vec::new(),
    };
    for token in tokens {
        if !token.is_empty() && !classes.contains(&token) {
            classes.push(token);
        }
    }
    Ok(classes)
}

impl Element {
    /// Creates an element with no properties or children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::default(),
            children: Vec::new(),
            position: None,
        }
    }

    /// Builder-style class addition.
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder-style property assignment.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.properties.other.insert(name.into(), value.into());
        self
    }

    /// Builder-style child replacement.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Returns true when the tag name matches.
    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }

    /// Returns true when the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.properties.class_name.iter().any(|c| c == class)
    }

    /// Appends `class` unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.properties.class_name.push(class.to_string());
        }
    }

    /// Removes `class` if present.
    pub fn remove_class(&mut self, class: &str) {
        self.properties.class_name.retain(|c| c != class);
    }

    /// Concatenated value of every descendant text node, in document order.
    pub fn text_content(&self) -> String {
        let mut buffer = String::new();
        for child in &self.children {
            collect_text(child, &mut buffer);
        }
        buffer
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.children = vec![Node::text(value)];
    }
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            position: None,
        })
    }

    /// Creates a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root {
            children,
            position: None,
        })
    }

    /// Creates a raw HTML node.
    pub fn raw(value: impl Into<String>) -> Self {
        Node::Raw(Raw {
            value: value.into(),
            position: None,
        })
    }

    /// Returns the element if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the element mutably if this is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the text value if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            _ => None,
        }
    }

    /// Children of a root or element; `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Element(element) => Some(&element.children),
            Node::Text(_) | Node::Comment(_) | Node::Doctype(_) | Node::Raw(_) => None,
        }
    }

    /// Mutable children of a root or element; `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(root) => Some(&mut root.children),
            Node::Element(element) => Some(&mut element.children),
            Node::Text(_) | Node::Comment(_) | Node::Doctype(_) | Node::Raw(_) => None,
        }
    }

    /// Concatenated value of this node's text and all descendant text.
    pub fn text_content(&self) -> String {
        let mut buffer = String::new();
        collect_text(self, &mut buffer);
        buffer
    }

    /// Decodes a tree from HAST JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SpotlightError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a tree from an already-parsed JSON value.
    pub fn from_json_value(value: JsonValue) -> Result<Self, SpotlightError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encodes the tree as HAST JSON.
    pub fn to_json_value(&self) -> Result<JsonValue, SpotlightError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encodes the tree as a HAST JSON string.
    pub fn to_json_string(&self) -> Result<String, SpotlightError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Appends every descendant text value of `node` to `buffer`.
///
/// Comments and raw HTML are not visible text and are skipped.
pub fn collect_text(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(text) => buffer.push_str(&text.value),
        Node::Root(Root { children, .. }) | Node::Element(Element { children, .. }) => {
            for child in children {
                collect_text(child, buffer);
            }
        }
        Node::Comment(_) | Node::Doctype(_) | Node::Raw(_) => {}
    }
}
