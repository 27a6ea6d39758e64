//! Modal surface lifecycle.
//!
//! A modal dialog borrows one native surface from the host for as long as it
//! is on screen. [`ModalHandle`] models that surface: acquired when the
//! dialog opens, released exactly once (on selection, external dismissal,
//! or host teardown), and idempotent about it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic source of handle ids, for log correlation.
static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// A host-owned native surface backing one modal dialog.
///
/// Releasing twice is a no-op; dropping an unreleased handle releases it.
#[derive(Debug)]
pub struct ModalHandle {
    id: u64,
    released: bool,
}

impl ModalHandle {
    /// Acquire a surface for a dialog that is about to show.
    pub fn acquire() -> Self {
        let id = NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(
            target: "horizon_passage::modal",
            id,
            "modal surface acquired"
        );
        Self {
            id,
            released: false,
        }
    }

    /// The handle's id, unique for the life of the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the surface has been given back already.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Give the surface back to the host. Idempotent.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        tracing::trace!(
            target: "horizon_passage::modal",
            id = self.id,
            "modal surface released"
        );
    }
}

impl Drop for ModalHandle {
    fn drop(&mut self) {
        self.release();
    }
}

static_assertions::assert_impl_all!(ModalHandle: Send, Sync);
