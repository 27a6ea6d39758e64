//! Selectable-option modal implementation.
//!
//! This module provides [`OptionsDialog`], the modal that presents an
//! ordered list of [`SelectableOption`]s and resolves to exactly one
//! selected index, or to nothing when dismissed without a choice.
//!
//! Each option row is an [`OptionsItem`]: an activation target registered on
//! the dialog's indexed event channel under its own list position. Disabled
//! rows never put an event on the channel.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use horizon_passage::{OptionsDialog, SelectableOption};
//!
//! let chosen = Arc::new(Mutex::new(None));
//! let chosen_clone = chosen.clone();
//!
//! let mut dialog = OptionsDialog::new(
//!     Some("Pick a server"),
//!     vec![
//!         SelectableOption::new("Fastest"),
//!         SelectableOption::new("Manual entry").with_disabled(true),
//!         SelectableOption::new("Recently used"),
//!     ],
//!     move |index| *chosen_clone.lock() = Some(index),
//! );
//!
//! dialog.open();
//! dialog.activate(2).unwrap();
//!
//! assert_eq!(*chosen.lock(), Some(2));
//! assert!(!dialog.is_open());
//! ```

use std::sync::Arc;

use horizon_passage_core::IndexedChannel;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::modal::ModalHandle;
use crate::surface::{DIMMED_EMPHASIS, FULL_EMPHASIS};

/// Opaque reference to an icon in the host's asset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRef(pub u32);

/// Opaque reference to a raster image in the host's asset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub u32);

/// The artwork shown next to an option's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionVisual {
    /// A vector icon.
    Icon(IconRef),
    /// A raster image.
    Image(ImageRef),
}

/// One entry of a selectable-option list.
///
/// Options have no identity beyond their list position. The icon and image
/// references are mutually exclusive in effect: when both are set, the icon
/// wins. The label is either the literal string or, when a template key is
/// present and the render-time resolver knows it, the resolved template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableOption {
    icon: Option<IconRef>,
    image: Option<ImageRef>,
    label: String,
    label_template: Option<String>,
    disabled: bool,
}

impl SelectableOption {
    /// Create an enabled option with a literal label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            icon: None,
            image: None,
            label: label.into(),
            label_template: None,
            disabled: false,
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the image using builder pattern.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the label template key using builder pattern.
    pub fn with_label_template(mut self, key: impl Into<String>) -> Self {
        self.label_template = Some(key.into());
        self
    }

    /// Set the disabled flag using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The literal label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the option can be activated.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The artwork to show, icon taking precedence over image.
    pub fn visual(&self) -> Option<OptionVisual> {
        if let Some(icon) = self.icon {
            Some(OptionVisual::Icon(icon))
        } else {
            self.image.map(OptionVisual::Image)
        }
    }

    /// Resolve the display label through a template resolver.
    ///
    /// The template key wins when present and known to the resolver; the
    /// literal label is the fallback.
    pub fn resolve_label(&self, resolver: &dyn Fn(&str) -> Option<String>) -> String {
        if let Some(key) = &self.label_template
            && let Some(resolved) = resolver(key)
        {
            return resolved;
        }
        self.label.clone()
    }
}

/// One rendered option row: an activation target tied to its list position.
///
/// Items report activation through the dialog's channel. A disabled item
/// swallows the activation; the channel never sees it.
pub struct OptionsItem {
    index: usize,
    disabled: bool,
    channel: Arc<IndexedChannel<()>>,
}

impl OptionsItem {
    fn new(index: usize, disabled: bool, channel: Arc<IndexedChannel<()>>) -> Self {
        Self {
            index,
            disabled,
            channel,
        }
    }

    /// The item's list position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the item is activatable.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The item's render emphasis.
    pub fn emphasis(&self) -> f32 {
        if self.disabled {
            DIMMED_EMPHASIS
        } else {
            FULL_EMPHASIS
        }
    }

    /// Activate the item.
    ///
    /// Disabled items ignore the activation entirely; enabled items report
    /// their position on the dialog's channel.
    pub fn activate(&self) {
        if self.disabled {
            tracing::trace!(
                target: "horizon_passage::modal",
                index = self.index,
                "activation of disabled option ignored"
            );
            return;
        }
        self.channel.emit(self.index, None);
    }
}

/// Lifecycle of an options dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogState {
    /// Built but not yet shown.
    Pending,
    /// On screen, accepting activations.
    Open,
    /// Gone; the native surface has been given back.
    Closed,
}

/// The single-shot result sink.
type SelectionCallback = Box<dyn FnOnce(usize) + Send>;

/// A rendered view of the dialog, ready for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsDialogView {
    /// The dialog title, if any.
    pub title: Option<String>,
    /// One row per option, in list order.
    pub rows: Vec<OptionRow>,
}

/// A rendered option row.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    /// The resolved display label.
    pub label: String,
    /// The artwork, icon taking precedence over image.
    pub visual: Option<OptionVisual>,
    /// Render emphasis; disabled rows are dimmed.
    pub emphasis: f32,
    /// Whether the row is activatable.
    pub disabled: bool,
}

/// A modal presenting an ordered option list, resolving to one selection.
///
/// The option list is shared-read: the dialog never mutates it. The result
/// callback is single-shot by construction: it is consumed on the first
/// selection, so a second invocation per dialog instance is impossible.
/// Dismissal without a selection ([`close`](Self::close), drop) never
/// invokes it.
pub struct OptionsDialog {
    title: Option<String>,
    options: Arc<Vec<SelectableOption>>,
    items: Vec<OptionsItem>,
    activations: Arc<IndexedChannel<()>>,
    selection: Arc<Mutex<Option<usize>>>,
    on_selected: Option<SelectionCallback>,
    handle: Option<ModalHandle>,
    state: DialogState,
}

impl OptionsDialog {
    /// Build a dialog over an option list with a single-shot result
    /// callback.
    ///
    /// The dialog starts hidden; call [`open`](Self::open) to show it.
    pub fn new<F>(title: Option<&str>, options: Vec<SelectableOption>, on_selected: F) -> Self
    where
        F: FnOnce(usize) + Send + 'static,
    {
        let options = Arc::new(options);
        let activations = Arc::new(IndexedChannel::new());
        let selection = Arc::new(Mutex::new(None));

        // Every row is an activation target on the dialog's channel, keyed
        // by its own position.
        let items = options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                OptionsItem::new(index, option.is_disabled(), activations.clone())
            })
            .collect();

        let selection_slot = selection.clone();
        activations.register(move |event| {
            *selection_slot.lock() = Some(event.index);
        });

        Self {
            title: title.map(str::to_owned),
            options,
            items,
            activations,
            selection,
            on_selected: Some(Box::new(on_selected)),
            handle: None,
            state: DialogState::Pending,
        }
    }

    /// The dialog title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The number of options presented.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// The rendered option rows, in list order.
    ///
    /// Empty once the dialog has closed; there is nothing left to activate.
    pub fn items(&self) -> &[OptionsItem] {
        &self.items
    }

    /// Whether the dialog is currently on screen.
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Show the dialog.
    ///
    /// Acquires the native modal surface. A dialog that has already been
    /// shown, whether open or closed, stays where it is; each instance resolves at
    /// most once.
    pub fn open(&mut self) {
        if self.state != DialogState::Pending {
            return;
        }
        self.handle = Some(ModalHandle::acquire());
        self.state = DialogState::Open;
    }

    /// Simulate/forward a user activation of the row at `index`.
    ///
    /// Out-of-range positions fail fast. Activating a disabled row is a
    /// silent no-op that leaves the dialog open. Activating an enabled row
    /// invokes the result callback exactly once with the row's position and
    /// closes the dialog. Activations on a dialog that is not on screen are
    /// dropped.
    pub fn activate(&mut self, index: usize) -> Result<()> {
        if index >= self.options.len() {
            return Err(Error::out_of_range(index, self.options.len()));
        }
        if self.state != DialogState::Open {
            tracing::trace!(
                target: "horizon_passage::modal",
                index,
                "activation on a dialog that is not open"
            );
            return Ok(());
        }

        self.items[index].activate();

        let choice = self.selection.lock().take();
        if let Some(choice) = choice {
            self.finish(choice);
        }
        Ok(())
    }

    /// Dismiss the dialog without a selection.
    ///
    /// The result callback is not invoked. Idempotent: closing an already
    /// closed (or never opened) dialog changes nothing beyond marking it
    /// closed.
    pub fn close(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
        if self.state != DialogState::Closed {
            self.state = DialogState::Closed;
            // Nothing is activatable once the dialog is gone.
            self.items.clear();
            self.activations.unregister();
        }
    }

    /// Render the dialog for the host to draw.
    ///
    /// Labels go through `resolver`: a template key wins when the resolver
    /// knows it, the literal label otherwise.
    pub fn view(&self, resolver: &dyn Fn(&str) -> Option<String>) -> OptionsDialogView {
        OptionsDialogView {
            title: self.title.clone(),
            rows: self
                .options
                .iter()
                .map(|option| OptionRow {
                    label: option.resolve_label(resolver),
                    visual: option.visual(),
                    emphasis: if option.is_disabled() {
                        DIMMED_EMPHASIS
                    } else {
                        FULL_EMPHASIS
                    },
                    disabled: option.is_disabled(),
                })
                .collect(),
        }
    }

    /// Deliver the selection and tear the dialog down.
    fn finish(&mut self, index: usize) {
        if let Some(callback) = self.on_selected.take() {
            callback(index);
        }
        self.close();
    }
}

impl Drop for OptionsDialog {
    fn drop(&mut self) {
        // Host teardown counts as external dismissal: surface back, callback
        // untouched.
        self.close();
    }
}

impl std::fmt::Debug for OptionsDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsDialog")
            .field("title", &self.title)
            .field("options", &self.options.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(OptionsDialog: Send);
