//! tagforge: a small in-memory builder for markup documents
//!
//! This crate provides functionality to:
//! - Build a tree of elements with ordered attributes, text and children
//! - Group elements into top-level sections under a document root
//! - Render the tree to a markup string
//! - Write a document to a file at the end of a scoped build
//!
//! Nothing is escaped or validated: tag names, attribute values and text
//! are written exactly as given.
//!
//! # Examples
//! ```
//! use tagforge::{Document, Element, Render, Section};
//!
//! let doc = Document::new()
//!     .with_section(Section::new("head").with_child(Element::new("title").with_text("hello")))
//!     .with_section(
//!         Section::new("body").with_child(
//!             Element::new("img")
//!                 .void()
//!                 .with_attribute("src", "/icon.png"),
//!         ),
//!     );
//!
//! assert_eq!(
//!     doc.render(),
//!     "<html>\n<head>\n<title >hello</title>\n</head>\n<body>\n<img src=\"/icon.png\">\n\n</body>\n</html>"
//! );
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod render;
pub mod shared;
pub mod utils;

// Re-exports
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use node::{Document, DocumentGuard, Element, Node, Section};
pub use render::Render;
pub use shared::Shared;
