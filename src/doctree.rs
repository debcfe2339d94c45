//! Neutral document-tree model exchanged with the host documentation tool
//!
//! The host adapter serializes each in-memory document into this shape before
//! invoking the plugin and reads the mutated tree back afterwards. Node kinds
//! the plugin interprets are first-class variants; everything else arrives as
//! a generic `element` and passes through untouched.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One source document: the path it was built from plus its node tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Absolute path of the source file this tree was generated from
    pub source: PathBuf,

    #[serde(default)]
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            children: Vec::new(),
        }
    }
}

/// A document-tree node.
///
/// Tagged by `kind` on the wire. `desc` is a described-object node (one
/// documented API symbol); `desc_signature` carries the symbol's module and
/// fully-qualified name. `only` restricts its children to one output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Section {
        #[serde(default)]
        classes: Vec<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        classes: Vec<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Only {
        expr: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    Reference {
        refuri: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reftitle: Option<String>,
        #[serde(default)]
        classes: Vec<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Inline {
        #[serde(default)]
        classes: Vec<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Raw {
        format: String,
        content: String,
    },
    Text {
        content: String,
    },
    Desc {
        #[serde(default)]
        domain: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    DescSignature {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        module: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fullname: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Host node kind the plugin does not interpret; carried through verbatim.
    Element {
        name: String,
        #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
        attrs: serde_json::Map<String, serde_json::Value>,
        #[serde(default)]
        children: Vec<Node>,
    },
}

impl Node {
    /// Plain text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    /// Raw markup emitted verbatim into HTML output.
    pub fn raw_html(content: impl Into<String>) -> Self {
        Node::Raw {
            format: "html".to_string(),
            content: content.into(),
        }
    }

    /// Child nodes; empty for leaf kinds.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children, .. }
            | Node::Paragraph { children, .. }
            | Node::Only { children, .. }
            | Node::Reference { children, .. }
            | Node::Inline { children, .. }
            | Node::Desc { children, .. }
            | Node::DescSignature { children, .. }
            | Node::Element { children, .. } => children,
            Node::Raw { .. } | Node::Text { .. } => &[],
        }
    }

    /// Mutable child list; `None` for leaf kinds.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Section { children, .. }
            | Node::Paragraph { children, .. }
            | Node::Only { children, .. }
            | Node::Reference { children, .. }
            | Node::Inline { children, .. }
            | Node::Desc { children, .. }
            | Node::DescSignature { children, .. }
            | Node::Element { children, .. } => Some(children),
            Node::Raw { .. } | Node::Text { .. } => None,
        }
    }

    /// CSS classes; empty for kinds that carry none.
    pub fn classes(&self) -> &[String] {
        match self {
            Node::Section { classes, .. }
            | Node::Paragraph { classes, .. }
            | Node::Reference { classes, .. }
            | Node::Inline { classes, .. } => classes,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }
}
