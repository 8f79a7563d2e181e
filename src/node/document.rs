//! Document root and its scoped persistence.
//!
//! A [`Document`] renders as `<html>`, its sections, then `\n</html>`. When
//! it has an output target, the scoped builders ([`Document::build`],
//! [`Document::try_build`]) and the [`DocumentGuard`] write the rendered
//! text there exactly once, however the population step ends.

use super::Section;
use crate::{
    config::RenderConfig,
    error::{Error, Result},
    render::{helpers, Render},
    utils::write_file,
};
use std::{
    fmt,
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, instrument, trace};

const ROOT_TAG: &str = "html";

/// Root container of a markup tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    output: Option<PathBuf>,
    sections: Vec<Section>,
}

impl Document {
    /// Creates a document with no output target
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document that is written to `path` at the end of a scoped build
    pub fn with_output(path: impl Into<PathBuf>) -> Self {
        Self {
            output: Some(path.into()),
            sections: Vec::new(),
        }
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Appends a section at the end of the document
    pub fn append(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Writes the rendered document to the output target, if there is one.
    /// Without a target this does nothing.
    #[instrument(skip(self), fields(output = ?self.output))]
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.output.as_deref() else {
            debug!("No output target, skipping write");
            return Ok(());
        };

        let rendered = self.render();
        debug!("Rendered {} bytes", rendered.len());
        write_file(path, &rendered)?;

        info!("Document written to {}", path.display());
        Ok(())
    }

    /// Wraps the document in a guard that saves it exactly once
    pub fn guard(self) -> DocumentGuard {
        DocumentGuard::new(self)
    }

    /// Scoped build: hands the document to `populate`, then saves it.
    ///
    /// The write also happens if `populate` panics, in which case a write
    /// failure can only be logged.
    pub fn build<F>(self, populate: F) -> Result<Self>
    where
        F: FnOnce(&mut Self),
    {
        let mut guard = self.guard();
        trace!("Populating document");
        populate(&mut *guard);
        guard.finish()
    }

    /// Scoped build with a fallible population step.
    ///
    /// The document is saved whether or not `populate` succeeds. A write
    /// failure takes precedence over a population failure; the latter is
    /// then logged. Otherwise a population failure is returned as
    /// [`Error::Populate`].
    pub fn try_build<F, E>(self, populate: F) -> Result<Self>
    where
        F: FnOnce(&mut Self) -> std::result::Result<(), E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let mut guard = self.guard();
        trace!("Populating document");
        let populated = populate(&mut *guard);

        match (populated, guard.finish()) {
            (Ok(()), written) => written,
            (Err(e), Ok(_)) => Err(Error::Populate(e.into())),
            (Err(e), Err(write_error)) => {
                let e = e.into();
                error!("Population failed before the write failed: {}", e);
                Err(write_error)
            }
        }
    }
}

impl Render for Document {
    fn render_into(&self, out: &mut String, config: &RenderConfig) {
        out.push('<');
        out.push_str(ROOT_TAG);
        out.push('>');
        for section in &self.sections {
            section.render_into(out, config);
        }
        out.push('\n');
        helpers::push_close_tag(out, ROOT_TAG);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Owns a [`Document`] while it is being populated and saves it exactly
/// once: on [`finish`](Self::finish), or on drop if `finish` was never
/// reached.
#[derive(Debug)]
pub struct DocumentGuard {
    document: Document,
    flushed: bool,
}

impl DocumentGuard {
    fn new(document: Document) -> Self {
        trace!("Document guard acquired");
        Self {
            document,
            flushed: false,
        }
    }

    /// Saves the document and hands it back
    pub fn finish(mut self) -> Result<Document> {
        self.flushed = true;
        let saved = self.document.save();
        let document = std::mem::take(&mut self.document);
        trace!("Document guard released");
        saved.map(|()| document)
    }
}

impl Deref for DocumentGuard {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.document
    }
}

impl DerefMut for DocumentGuard {
    fn deref_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl Drop for DocumentGuard {
    fn drop(&mut self) {
        if self.flushed {
            return;
        }
        self.flushed = true;
        if let Err(e) = self.document.save() {
            error!("Failed to save document on drop: {}", e);
        }
        trace!("Document guard released on drop");
    }
}
