//! Rendering of node trees into markup text.
//!
//! Every node type implements [`Render`]. Containers render their children
//! by appending into the same output buffer, so a whole document is
//! assembled in one allocation-friendly pass.

use crate::config::RenderConfig;

/// Trait for rendering a node as markup
pub trait Render {
    /// Appends this node's markup to `out`
    fn render_into(&self, out: &mut String, config: &RenderConfig);

    /// Renders this node with the given configuration
    fn render_with(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        self.render_into(&mut out, config);
        out
    }

    /// Renders this node with the default configuration
    fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }
}

/// Helper functions shared by the node renderers
pub mod helpers {
    use crate::config::RenderConfig;
    use indexmap::IndexMap;

    /// Renders attributes as `name="value"` pairs separated by single spaces.
    /// Values are written verbatim.
    pub fn format_attributes(attributes: &IndexMap<String, String>) -> String {
        attributes
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Writes `\n<tag attrs>` for an element
    pub fn push_open_tag(out: &mut String, tag: &str, attrs: &str, config: &RenderConfig) {
        out.push_str("\n<");
        out.push_str(tag);
        if config.pad_empty_attributes || !attrs.is_empty() {
            out.push(' ');
            out.push_str(attrs);
        }
        out.push('>');
    }

    /// Writes `</tag>`
    pub fn push_close_tag(out: &mut String, tag: &str) {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    /// Rewrites every underscore in an attribute name to a hyphen
    pub fn hyphenate(name: &str) -> String {
        name.replace('_', "-")
    }
}
