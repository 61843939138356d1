//! # Host Document
//!
//! The page labels are previewed in. Its body holds the visible preview
//! tree; the print compositor temporarily attaches its print root here.

use super::html::escape;
use super::node::Node;

/// A complete HTML page: title, stylesheet and body nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDocument {
    pub title: String,
    pub stylesheet: String,
    body: Vec<Node>,
}

impl HostDocument {
    pub fn new(title: impl Into<String>, stylesheet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: stylesheet.into(),
            body: Vec::new(),
        }
    }

    /// Top-level body nodes.
    pub fn body(&self) -> &[Node] {
        &self.body
    }

    /// Append a node to the end of the body.
    pub fn append(&mut self, node: impl Into<Node>) {
        self.body.push(node.into());
    }

    /// Detach the top-level node at `index`, returning it.
    pub fn detach_at(&mut self, index: usize) -> Option<Node> {
        (index < self.body.len()).then(|| self.body.remove(index))
    }

    /// Whether any node in the body carries `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.body.iter().find_map(|n| n.find_by_id(id))
    }

    /// Nodes carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Node> {
        self.body
            .iter()
            .flat_map(|n| n.find_all_by_class(class))
            .collect()
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"bn\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>");
        out.push_str(&escape(&self.title));
        out.push_str("</title>\n<style>\n");
        out.push_str(&self.stylesheet);
        out.push_str("\n</style>\n</head>\n<body>\n");
        for node in &self.body {
            node.write_html(&mut out);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}
