//! Error types for the Passage shell.

use crate::page::PageKind;

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the navigation shell.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An index-addressed operation was called with a position outside the
    /// addressable range.
    ///
    /// This is a caller programming error. It is never clamped or converted
    /// into a fallback selection; it surfaces immediately so the defect is
    /// visible at the call site.
    #[error("index {index} out of range for {count} entries")]
    IndexOutOfRange { index: usize, count: usize },

    /// A page's became-active hook reported a failure.
    ///
    /// The shell does not interpret the failure; it is carried to whoever
    /// requested the page change.
    #[error("activation of the {page} page failed")]
    PageActivation {
        page: PageKind,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }

    /// Create a page-activation error.
    pub fn activation(
        page: PageKind,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::PageActivation { page, source }
    }

    /// Check if this is the out-of-range variant.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
