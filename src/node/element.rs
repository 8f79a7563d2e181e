use super::Node;
use crate::{
    config::RenderConfig,
    render::{helpers, Render},
};
use indexmap::IndexMap;
use std::fmt;

/// A named markup element with attributes, inline text and children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    is_void: bool,
    text: String,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes, text or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Creates an element in one call.
    ///
    /// `classes`, when given, becomes a `class` attribute holding the names
    /// joined by single spaces, placed before every option. Each option is
    /// added in order with the underscores in its name turned into hyphens.
    pub fn with_options<C, S, I, K, V>(
        tag: impl Into<String>,
        classes: Option<C>,
        is_void: bool,
        options: I,
    ) -> Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut element = Self::new(tag).with_void(is_void);
        if let Some(classes) = classes {
            element = element.with_classes(classes);
        }
        element.with_attributes(options)
    }

    /// Scoped construction: hands the element to `populate`, then returns it
    pub fn build<F>(mut self, populate: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        populate(&mut self);
        self
    }

    /// Sets the `class` attribute to the space-joined class names. The
    /// attribute always comes first, whenever this is called.
    pub fn with_classes<C, S>(mut self, classes: C) -> Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = classes
            .into_iter()
            .map(|class| class.as_ref().to_string())
            .collect::<Vec<String>>()
            .join(" ");
        self.attributes.shift_insert(0, "class".to_string(), joined);
        self
    }

    /// Marks the element as void
    pub fn void(self) -> Self {
        self.with_void(true)
    }

    pub fn with_void(mut self, is_void: bool) -> Self {
        self.is_void = is_void;
        self
    }

    /// Adds one keyword-style attribute; `data_id` is stored as `data-id`
    pub fn with_attribute(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in attributes {
            self.set_attribute(name, value);
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Inserts or overwrites an attribute. An existing name keeps its position.
    pub fn set_attribute(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.attributes
            .insert(helpers::hyphenate(name.as_ref()), value.into());
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends a child at the end of the children list
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn is_void(&self) -> bool {
        self.is_void
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Render for Element {
    fn render_into(&self, out: &mut String, config: &RenderConfig) {
        let attrs = helpers::format_attributes(&self.attributes);
        helpers::push_open_tag(out, &self.tag, &attrs, config);

        // Children force the paired form even on a void element
        if !self.children.is_empty() {
            out.push_str(&self.text);
            for child in &self.children {
                child.render_into(out, config);
            }
            helpers::push_close_tag(out, &self.tag);
        } else if self.is_void {
            out.push('\n');
        } else {
            out.push_str(&self.text);
            helpers::push_close_tag(out, &self.tag);
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
