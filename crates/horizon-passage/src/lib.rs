//! Multi-surface navigation for the Passage client shell.
//!
//! This crate coordinates the view state of a three-page client shell
//! (Status, Server List, Settings) across two alternative visual surfaces,
//! a swipeable tab strip for narrow layouts and a persistent indicator bar
//! for wide layouts, and provides the modal option-picking primitives the
//! shell's screens share:
//!
//! - **Page Registry**: The fixed, ordered page set with lazily materialized
//!   content
//! - **Navigation Coordinator**: The single owner of "which page is
//!   current", with a back-to-home rule and surface synchronization
//! - **Visual Surfaces**: Stateless render functions for the tab strip and
//!   indicator bar
//! - **Selectable-Option Dialog**: A modal resolving to exactly one selected
//!   index, built on the indexed event channel
//! - **Select**: A dropdown control backed by the dialog
//!
//! Everything runs synchronously on one logical thread; see
//! [`horizon_passage_core`] for the event primitives.
//!
//! # Navigation Example
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
//! let mut nav = NavigationCoordinator::new(registry, VisualMode::Compact)?;
//!
//! nav.request_page(1)?;
//! assert_eq!(nav.current_page(), 1);
//!
//! // Back returns to the home page first, then falls through to the host.
//! assert!(nav.handle_back()?.is_handled());
//! assert!(!nav.handle_back()?.is_handled());
//! # Ok::<(), horizon_passage::Error>(())
//! ```

mod error;
mod modal;
mod navigation;
mod options;
mod page;
mod registry;
mod select;
mod surface;

pub use error::{Error, Result};
pub use modal::ModalHandle;
pub use navigation::{BackNavigation, NavigationCoordinator, NavigationState, VisualMode};
pub use options::{
    IconRef, ImageRef, OptionRow, OptionVisual, OptionsDialog, OptionsDialogView, OptionsItem,
    SelectableOption,
};
pub use page::{ActivationError, ContentFactory, PAGE_COUNT, PageContent, PageDescriptor, PageKind};
pub use registry::{ContentId, PageRegistry};
pub use select::{Select, SelectOption, SelectView};
pub use surface::{
    DIMMED_EMPHASIS, FULL_EMPHASIS, IndicatorBar, IndicatorBarView, PRESSED_EMPHASIS,
    TabStripView,
};

// Re-export core types that users need at the shell API surface
pub use horizon_passage_core::{ClickGate, IndexedChannel, IndexedEvent};
