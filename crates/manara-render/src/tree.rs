//! The backend-neutral output tree.

use std::collections::BTreeMap;

use serde::Serialize;

use manara_types::{Dir, Language};

/// One element of the visual tree.
///
/// Deliberately HTML-shaped (tag, classes, attributes, inline style
/// properties, text, children) but not tied to any DOM library; tests
/// compare trees structurally and the web layer serializes them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VisualNode {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    /// A node with the given element tag.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// A text-bearing node.
    pub fn text_element(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn style(mut self, prop: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(prop.into(), value.into());
        self
    }

    pub fn child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = VisualNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for the first node with the given class.
    pub fn find_by_class(&self, class: &str) -> Option<&VisualNode> {
        if self.classes.iter().any(|c| c == class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }
}

/// A fully rendered page view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualTree {
    pub lang: Language,
    pub dir: Dir,
    /// Top-level block wrappers in render-sequence order.
    pub nodes: Vec<VisualNode>,
}

impl VisualTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chains() {
        let node = VisualNode::element("section")
            .class("hero")
            .attr("id", "top")
            .style("min-height", "100vh")
            .child(VisualNode::text_element("h1", "Welcome"));
        assert_eq!(node.tag, "section");
        assert_eq!(node.children[0].text.as_deref(), Some("Welcome"));
        assert!(node.find_by_class("hero").is_some());
        assert!(node.find_by_class("missing").is_none());
    }
}
