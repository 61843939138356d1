//! # Declarative Components
//!
//! React-like components for building label sheets declaratively.
//!
//! ## Design Philosophy
//!
//! Instead of assembling markup by hand, you describe *what* goes on the
//! sheet:
//!
//! ```
//! use doselabel::components::*;
//!
//! let sheet = LabelSheet::new()
//!     .child(Heading::section("ঔষধ খাবার নিয়মাবলী"))
//!     .child(Line::new("প্রতিদিন সকালে").class("note"));
//!
//! // Compile to nodes (inspectable)
//! let nodes = sheet.compile();
//! assert_eq!(nodes.len(), 1);
//!
//! // Or straight to HTML
//! let html = sheet.to_html();
//! assert!(html.contains("prescription-sheet"));
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which emits markup
//! nodes. Components can be nested (containers hold children).

mod layout;
mod sections;
mod sheet;
mod text;

pub use layout::*;
pub use sections::*;
pub use sheet::*;
pub use text::*;

use crate::markup::Node;

/// Trait for declarative components.
///
/// Components emit markup nodes when compiled. This is the core abstraction
/// that enables the declarative sheet building pattern.
pub trait Component {
    /// Emit nodes for this component into the nodes vector.
    fn emit(&self, nodes: &mut Vec<Node>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to its top-level nodes.
    fn compile(&self) -> Vec<Node> {
        let mut nodes = Vec::new();
        self.emit(&mut nodes);
        nodes
    }

    /// Compile and serialize to HTML.
    fn to_html(&self) -> String {
        let mut out = String::new();
        for node in self.compile() {
            node.write_html(&mut out);
        }
        out
    }
}

// Blanket implementation for all components
impl<T: Component + ?Sized> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, nodes: &mut Vec<Node>) {
        self.as_ref().emit(nodes);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, nodes: &mut Vec<Node>) {
        (*self).emit(nodes);
    }
}

/// Compile a list of children into nodes.
pub(crate) fn compile_children(children: &[Box<dyn Component>]) -> Vec<Node> {
    let mut nodes = Vec::new();
    for child in children {
        child.emit(&mut nodes);
    }
    nodes
}
