//! Navigation coordinator implementation.
//!
//! This module provides [`NavigationCoordinator`], the single owner of the
//! shell's "which page is current" state. Page-change requests can come from
//! either visual surface or from another component (a page asking to jump to
//! a sibling page); all of them funnel through
//! [`request_page`](NavigationCoordinator::request_page), which keeps both
//! surfaces consistent even though only one is visible at a time.
//!
//! # Example
//!
//! ```
//! use horizon_passage::{
//!     NavigationCoordinator, PageContent, PageDescriptor, PageRegistry, VisualMode,
//! };
//!
//! struct Placeholder;
//! impl PageContent for Placeholder {}
//!
//! let registry = PageRegistry::new([
//!     PageDescriptor::new("Status", || Box::new(Placeholder)),
//!     PageDescriptor::new("Servers", || Box::new(Placeholder)),
//!     PageDescriptor::new("Settings", || Box::new(Placeholder)),
//! ]);
//!
//! let mut nav = NavigationCoordinator::new(registry, VisualMode::Compact).unwrap();
//! nav.request_page(1).unwrap();
//! assert_eq!(nav.current_page(), 1);
//! ```

use horizon_passage_core::IndexedChannel;

use crate::error::{Error, Result};
use crate::page::PageKind;
use crate::registry::PageRegistry;
use crate::surface::{IndicatorBarView, TabStripView};

/// The two supported navigation layouts.
///
/// Chosen once from the host environment's screen-width classification when
/// the coordinator is built, and never reevaluated afterward. This is a
/// startup branch, not a responsive switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualMode {
    /// Narrow layout: a swipeable tab strip drives navigation.
    Compact,
    /// Wide layout: a persistent indicator bar is shown instead and the tab
    /// strip stays hidden.
    Wide,
}

/// The single source of truth for the shell's navigation.
///
/// Exactly one page is current at any time. The visual mode is fixed for the
/// state's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    mode: VisualMode,
}

impl NavigationState {
    /// Create a state on the home page for the given mode.
    pub fn new(mode: VisualMode) -> Self {
        Self { current: 0, mode }
    }

    /// The current page position.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The fixed visual mode.
    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = index;
    }
}

/// Outcome of a back-navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackNavigation {
    /// The shell consumed the event by returning to the home page; the
    /// caller must suppress its default back behavior.
    Handled,
    /// Already on the home page; the caller performs its default back/exit
    /// behavior.
    NotHandled,
}

impl BackNavigation {
    /// Check if the shell consumed the back event.
    pub fn is_handled(&self) -> bool {
        matches!(self, BackNavigation::Handled)
    }
}

/// Coordinates one "current page" across the shell's visual surfaces.
///
/// The coordinator exclusively owns the [`NavigationState`] and the
/// [`PageRegistry`]. Both surfaces' render states are recomputed on every
/// page change, including the invisible one, so the surfaces can never
/// disagree.
///
/// # Channels
///
/// - `current_changed`: emitted with the new page position after every
///   completed page change
pub struct NavigationCoordinator {
    registry: PageRegistry,
    state: NavigationState,
    tab_strip: TabStripView,
    indicator_bar: IndicatorBarView,

    /// Channel notified with the new page position after a page change.
    pub current_changed: IndexedChannel<()>,
}

impl NavigationCoordinator {
    /// Create a coordinator over the given registry.
    ///
    /// `mode` comes from a read-once query of the host environment's layout
    /// classification. The home page (position 0) becomes active as part of
    /// construction, which materializes its content; a failure from its
    /// activation hook is returned unchanged.
    pub fn new(registry: PageRegistry, mode: VisualMode) -> Result<Self> {
        let state = NavigationState::new(mode);
        let mut coordinator = Self {
            tab_strip: TabStripView::render(&state),
            indicator_bar: IndicatorBarView::render(&state),
            registry,
            state,
            current_changed: IndexedChannel::new(),
        };

        coordinator.activate(0)?;
        Ok(coordinator)
    }

    /// The fixed visual mode.
    pub fn mode(&self) -> VisualMode {
        self.state.mode()
    }

    /// The current page position. O(1).
    pub fn current_page(&self) -> usize {
        self.state.current_index()
    }

    /// The current page identity.
    pub fn current_kind(&self) -> PageKind {
        PageKind::ALL[self.state.current_index()]
    }

    /// The navigation state both surfaces render from.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The Compact-mode tab strip's render state.
    pub fn tab_strip(&self) -> &TabStripView {
        &self.tab_strip
    }

    /// The Wide-mode indicator bar's render state.
    pub fn indicator_bar(&self) -> &IndicatorBarView {
        &self.indicator_bar
    }

    /// The page registry.
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Mutable access to the page registry.
    pub fn registry_mut(&mut self) -> &mut PageRegistry {
        &mut self.registry
    }

    /// Make the page at `index` current.
    ///
    /// Fails fast with [`Error::IndexOutOfRange`] for positions outside the
    /// registry, leaving all state untouched: an out-of-range request is a
    /// caller defect, never clamped to a fallback page. Requesting the page
    /// that is already current is an idempotent no-op.
    ///
    /// On an actual change the current index is set, both surfaces are
    /// recomputed synchronously, the target page's became-active hook runs
    /// (materializing the content on its first activation), and
    /// `current_changed` is notified.
    pub fn request_page(&mut self, index: usize) -> Result<()> {
        if index >= self.registry.count() {
            return Err(Error::out_of_range(index, self.registry.count()));
        }

        let from = self.state.current_index();
        if index == from {
            tracing::trace!(
                target: "horizon_passage::navigation",
                index,
                "page already current"
            );
            return Ok(());
        }

        self.state.set_current(index);
        self.tab_strip = TabStripView::render(&self.state);
        self.indicator_bar = IndicatorBarView::render(&self.state);

        tracing::debug!(
            target: "horizon_passage::navigation",
            from,
            to = index,
            "page changed"
        );

        self.activate(index)?;
        self.current_changed.emit(index, None);
        Ok(())
    }

    /// Handle a back-navigation event.
    ///
    /// Back always returns to the home page first: away from position 0 this
    /// behaves as `request_page(0)` and reports
    /// [`BackNavigation::Handled`]; on the home page it reports
    /// [`BackNavigation::NotHandled`] and the caller falls through to its
    /// default back/exit behavior.
    pub fn handle_back(&mut self) -> Result<BackNavigation> {
        if self.state.current_index() == 0 {
            return Ok(BackNavigation::NotHandled);
        }
        self.request_page(0)?;
        Ok(BackNavigation::Handled)
    }

    /// Run the became-active hook of the page at `index`.
    fn activate(&mut self, index: usize) -> Result<()> {
        let kind = PageKind::from_index(index).unwrap_or(PageKind::Status);
        let content = self.registry.get_mut(index)?;
        content
            .activated()
            .map_err(|source| Error::activation(kind, source))
    }
}

impl std::fmt::Debug for NavigationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationCoordinator")
            .field("state", &self.state)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(NavigationCoordinator: Send);
