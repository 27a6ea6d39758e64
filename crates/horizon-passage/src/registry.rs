//! Page registry implementation.
//!
//! This module provides [`PageRegistry`], the ordered, fixed-size collection
//! of the shell's logical pages. Page content is materialized at most once,
//! on first access, and lives in an arena for the registry's lifetime;
//! nothing is ever evicted or replaced.
//!
//! # Example
//!
//! ```
//! use horizon_passage::{PageContent, PageDescriptor, PageRegistry};
//!
//! struct Placeholder;
//! impl PageContent for Placeholder {}
//!
//! let mut registry = PageRegistry::new([
//!     PageDescriptor::new("Status", || Box::new(Placeholder)),
//!     PageDescriptor::new("Servers", || Box::new(Placeholder)),
//!     PageDescriptor::new("Settings", || Box::new(Placeholder)),
//! ]);
//!
//! assert_eq!(registry.count(), 3);
//! assert!(!registry.is_materialized(1).unwrap());
//! registry.get_mut(1).unwrap();
//! assert!(registry.is_materialized(1).unwrap());
//! ```

use slotmap::{SlotMap, new_key_type};

use crate::error::{Error, Result};
use crate::page::{ContentFactory, PAGE_COUNT, PageContent, PageDescriptor, PageKind};

new_key_type! {
    /// A stable key for materialized page content in the registry's arena.
    ///
    /// Keys are handed out once per page, on first access, and stay valid for
    /// the registry's lifetime; content is never removed.
    pub struct ContentId;
}

/// Per-position registry entry.
struct PageEntry {
    kind: PageKind,
    title: String,
    /// Consumed on first materialization.
    factory: Option<ContentFactory>,
    /// Arena key of the materialized content, once built.
    content: Option<ContentId>,
}

/// The ordered, fixed-size collection of the shell's logical pages.
///
/// Constructed with exactly [`PAGE_COUNT`] descriptors in presentation order
/// (`Status`, `ServerList`, `Settings`). Content handles are created lazily
/// by [`get_mut`](Self::get_mut) and cached in an arena thereafter. There is
/// no removal or insertion operation.
pub struct PageRegistry {
    entries: [PageEntry; PAGE_COUNT],
    arena: SlotMap<ContentId, Box<dyn PageContent>>,
}

impl PageRegistry {
    /// Create a registry from the three page descriptors, in presentation
    /// order.
    pub fn new(descriptors: [PageDescriptor; PAGE_COUNT]) -> Self {
        let mut kinds = PageKind::ALL.into_iter();
        let entries = descriptors.map(|descriptor| {
            let (title, factory) = descriptor.into_parts();
            let kind = kinds.next().unwrap_or(PageKind::Status);
            PageEntry {
                kind,
                title,
                factory: Some(factory),
                content: None,
            }
        });

        Self {
            entries,
            arena: SlotMap::with_key(),
        }
    }

    /// The number of pages. Always [`PAGE_COUNT`].
    pub fn count(&self) -> usize {
        PAGE_COUNT
    }

    /// The page identity at a position.
    pub fn kind(&self, index: usize) -> Result<PageKind> {
        self.check_index(index)?;
        Ok(self.entries[index].kind)
    }

    /// The display title at a position.
    pub fn title(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(&self.entries[index].title)
    }

    /// Whether the content at a position has been materialized yet.
    pub fn is_materialized(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.entries[index].content.is_some())
    }

    /// Get the content at a position, materializing it on first access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut dyn PageContent> {
        self.check_index(index)?;

        let entry = &mut self.entries[index];
        let id = match (entry.content, entry.factory.take()) {
            (Some(id), _) => id,
            (None, Some(factory)) => {
                let id = self.arena.insert(factory());
                entry.content = Some(id);
                tracing::debug!(
                    target: "horizon_passage::navigation",
                    page = %entry.kind,
                    "page content materialized"
                );
                id
            }
            // Construction puts a factory in every entry and the factory is
            // only taken when the content id is stored.
            (None, None) => unreachable!("page entry has neither content nor factory"),
        };

        Ok(self.arena[id].as_mut())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < PAGE_COUNT {
            Ok(())
        } else {
            Err(Error::out_of_range(index, PAGE_COUNT))
        }
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let materialized: Vec<PageKind> = self
            .entries
            .iter()
            .filter(|e| e.content.is_some())
            .map(|e| e.kind)
            .collect();
        f.debug_struct("PageRegistry")
            .field("count", &PAGE_COUNT)
            .field("materialized", &materialized)
            .finish()
    }
}

static_assertions::assert_impl_all!(PageRegistry: Send);
