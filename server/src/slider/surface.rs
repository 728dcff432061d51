//! Document-wide pointer listener registry
//!
//! A slider only listens to document-level move/up events while a drag session
//! is active. The registration is held by a [`DragCapture`] guard: creating it
//! attaches the listener, dropping it detaches the listener. Every exit path
//! from a drag (pointer-up, slider teardown, an early return) therefore releases
//! the registration without an explicit cleanup call.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Identifier of one document-level listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct SurfaceInner {
    next_id: u64,
    listeners: BTreeSet<ListenerId>,
}

/// The document-level input surface shared by every slider on a page.
///
/// Cloning is cheap and yields a handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct DocumentSurface {
    inner: Arc<Mutex<SurfaceInner>>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attach a document-level listener for the duration of the returned guard.
    pub fn capture(&self) -> DragCapture {
        let id = {
            let mut inner = self.lock();
            let id = ListenerId(inner.next_id);
            inner.next_id += 1;
            inner.listeners.insert(id);
            id
        };
        trace!("Attached document pointer listener {:?}", id);
        DragCapture {
            id,
            surface: self.clone(),
        }
    }

    /// Listeners currently attached, in registration order.
    ///
    /// Hosts route document-wide move/up events to exactly these.
    pub fn listeners(&self) -> Vec<ListenerId> {
        self.lock().listeners.iter().copied().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.lock().listeners.contains(&id)
    }

    fn release(&self, id: ListenerId) {
        let removed = self.lock().listeners.remove(&id);
        if removed {
            trace!("Detached document pointer listener {:?}", id);
        }
    }
}

/// Scoped registration of a document-level pointer listener.
#[derive(Debug)]
pub struct DragCapture {
    id: ListenerId,
    surface: DocumentSurface,
}

impl DragCapture {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for DragCapture {
    fn drop(&mut self) {
        self.surface.release(self.id);
    }
}
