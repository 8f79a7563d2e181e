//! Shared handles for building one tree from several threads.
//!
//! Nodes carry no internal synchronization. [`Shared`] puts a node behind a
//! read-write lock so appends (write lock) never overlap a render of the
//! same tree (read lock).

use crate::{config::RenderConfig, render::Render};
use parking_lot::RwLock;
use std::sync::Arc;

/// A node behind an `Arc<RwLock<_>>`; clones share the same tree
#[derive(Debug, Default)]
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(node: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(node)),
        }
    }

    /// Runs `f` with exclusive access to the node
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Runs `f` with shared access to the node
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Returns the node if this is the last handle, or the handle back otherwise
    pub fn into_inner(self) -> Result<T, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner()),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<T: Render> Shared<T> {
    pub fn render(&self) -> String {
        self.inner.read().render()
    }

    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.inner.read().render_with(config)
    }
}
