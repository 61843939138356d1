//! # Layout Components
//!
//! Components for arranging other components on the sheet.

use super::{Component, compile_children};
use crate::markup::{Element, Node};

/// Two components on one line, pushed to opposite edges.
///
/// ## Example
///
/// ```
/// use doselabel::components::{LabeledValue, Row};
///
/// let row = Row::new(
///     LabeledValue::new("ক্রমিক নং:", "F/12"),
///     LabeledValue::new("তারিখঃ", "০১/০১/২০২৫"),
/// );
/// ```
pub struct Row {
    left: Box<dyn Component>,
    right: Box<dyn Component>,
}

impl Row {
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: Component + 'static,
        R: Component + 'static,
    {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Component for Row {
    fn emit(&self, nodes: &mut Vec<Node>) {
        let mut left = Vec::new();
        self.left.emit(&mut left);
        let mut right = Vec::new();
        self.right.emit(&mut right);

        nodes.push(
            Element::new("div")
                .class("row")
                .child(Element::new("div").class("row-left").children(left))
                .child(Element::new("div").class("row-right").children(right))
                .into(),
        );
    }
}

/// A classed container grouping child components.
///
/// ## Example
///
/// ```
/// use doselabel::components::{Line, Section};
///
/// let footer = Section::new("doctor-info")
///     .child(Line::new("ত্রিফুল আরোগ্য নিকেতন").bold());
/// ```
pub struct Section {
    class: &'static str,
    children: Vec<Box<dyn Component>>,
}

impl Section {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            children: Vec::new(),
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }
}

impl Component for Section {
    fn emit(&self, nodes: &mut Vec<Node>) {
        nodes.push(
            Element::new("div")
                .class(self.class)
                .children(compile_children(&self.children))
                .into(),
        );
    }
}

/// A bullet list, one item per entry.
pub struct BulletList {
    items: Vec<String>,
    class: &'static str,
}

impl BulletList {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            class: "advice-list",
        }
    }
}

impl Component for BulletList {
    fn emit(&self, nodes: &mut Vec<Node>) {
        nodes.push(
            Element::new("ul")
                .class(self.class)
                .children(
                    self.items
                        .iter()
                        .map(|item| Element::new("li").text(item.clone())),
                )
                .into(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentExt, Line};

    #[test]
    fn test_row() {
        let html = Row::new(Line::inline("a"), Line::inline("b")).to_html();
        assert_eq!(
            html,
            r#"<div class="row"><div class="row-left"><span>a</span></div><div class="row-right"><span>b</span></div></div>"#
        );
    }

    #[test]
    fn test_section_children_in_order() {
        let nodes = Section::new("box")
            .child(Line::new("1"))
            .child(Line::new("2"))
            .compile();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].children().len(), 2);
        assert_eq!(nodes[0].text_content(), "12");
    }

    #[test]
    fn test_bullet_list() {
        let html = BulletList::new(["• a", "• b"]).to_html();
        assert_eq!(html, r#"<ul class="advice-list"><li>• a</li><li>• b</li></ul>"#);
    }
}
