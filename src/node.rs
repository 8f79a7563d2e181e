//! Node data model.
//!
//! A [`Document`] owns a flat list of [`Section`]s; sections and
//! [`Element`]s own ordered lists of [`Node`]s. Children are only ever
//! appended, and each container exclusively owns what it holds.

mod document;
mod element;
mod section;

pub use self::{
    document::{Document, DocumentGuard},
    element::Element,
    section::Section,
};

use crate::{config::RenderConfig, render::Render};
use std::fmt;

/// Any node that can sit in a container's children
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Section(Section),
}

impl Render for Node {
    fn render_into(&self, out: &mut String, config: &RenderConfig) {
        match self {
            Self::Element(element) => element.render_into(out, config),
            Self::Section(section) => section.render_into(out, config),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
