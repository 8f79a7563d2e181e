use super::Node;
use crate::{
    config::RenderConfig,
    render::{helpers, Render},
};
use std::fmt;

/// Top-level grouping node such as `head` or `body`. Sections carry no
/// attributes and no text, and are never void.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    tag: String,
    children: Vec<Node>,
}

impl Section {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    /// Scoped construction: hands the section to `populate`, then returns it
    pub fn build<F>(mut self, populate: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        populate(&mut self);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child at the end of the children list
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Render for Section {
    fn render_into(&self, out: &mut String, config: &RenderConfig) {
        out.push_str("\n<");
        out.push_str(&self.tag);
        out.push('>');
        for child in &self.children {
            child.render_into(out, config);
        }
        out.push('\n');
        helpers::push_close_tag(out, &self.tag);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
