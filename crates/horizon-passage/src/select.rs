//! Select control implementation.
//!
//! A select is a dropdown-style control: it shows its currently selected
//! option and, on activation, opens an [`OptionsDialog`] over its option
//! list. The dialog's selection flows back into the control; dismissal
//! leaves the selection untouched.
//!
//! Activation is throttled: a rapid double-press opens the picker once.

use std::sync::Arc;

use horizon_passage_core::ClickGate;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::options::{IconRef, OptionsDialog, SelectableOption};

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// The display text.
    pub text: String,
    /// The opaque value reported to the host for this entry.
    pub value: String,
    /// Optional icon shown next to the text.
    pub icon: Option<IconRef>,
}

impl SelectOption {
    /// Create an entry without an icon.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            icon: None,
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// What the control currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// The selected entry's text.
    pub text: String,
    /// The selected entry's icon, if any.
    pub icon: Option<IconRef>,
}

/// Shared mutable state: the picker's result callback writes here.
struct SelectInner {
    options: Vec<SelectOption>,
    selected: usize,
}

/// A dropdown-style control backed by the selectable-option dialog.
///
/// The control owns its option list and selected index. Opening the picker
/// hands a read-only copy of the options to an [`OptionsDialog`] whose
/// result callback updates the selection.
pub struct Select {
    inner: Arc<Mutex<SelectInner>>,
    gate: ClickGate,
}

impl Select {
    /// Create a control over a non-empty option list with an initial
    /// selection.
    ///
    /// Fails fast when `selected` does not address an entry.
    pub fn new(options: Vec<SelectOption>, selected: usize) -> Result<Self> {
        if selected >= options.len() {
            return Err(Error::out_of_range(selected, options.len()));
        }
        Ok(Self {
            inner: Arc::new(Mutex::new(SelectInner { options, selected })),
            gate: ClickGate::new(),
        })
    }

    /// Replace the activation gate, e.g. to change the suppression window.
    pub fn with_gate(mut self, gate: ClickGate) -> Self {
        self.gate = gate;
        self
    }

    /// Replace the option list and selection together.
    pub fn set_values(&mut self, options: Vec<SelectOption>, selected: usize) -> Result<()> {
        if selected >= options.len() {
            return Err(Error::out_of_range(selected, options.len()));
        }
        let mut inner = self.inner.lock();
        inner.options = options;
        inner.selected = selected;
        Ok(())
    }

    /// The selected entry's position.
    pub fn selected_index(&self) -> usize {
        self.inner.lock().selected
    }

    /// The selected entry's opaque value.
    pub fn selected_value(&self) -> String {
        let inner = self.inner.lock();
        inner.options[inner.selected].value.clone()
    }

    /// What the control currently displays.
    pub fn view(&self) -> SelectView {
        let inner = self.inner.lock();
        let option = &inner.options[inner.selected];
        SelectView {
            text: option.text.clone(),
            icon: option.icon,
        }
    }

    /// Open the picker dialog, if the activation gate lets the press
    /// through.
    ///
    /// A suppressed press returns `None`; the control responds to a double
    /// tap once. The returned dialog is already open; its result callback
    /// moves the control's selection, and dismissal leaves it untouched.
    pub fn open_picker(&mut self) -> Option<OptionsDialog> {
        if !self.gate.try_acquire() {
            return None;
        }

        let rows: Vec<SelectableOption> = {
            let inner = self.inner.lock();
            inner
                .options
                .iter()
                .map(|option| {
                    let mut row = SelectableOption::new(option.text.clone());
                    if let Some(icon) = option.icon {
                        row = row.with_icon(icon);
                    }
                    row
                })
                .collect()
        };

        let inner = self.inner.clone();
        let mut dialog = OptionsDialog::new(None, rows, move |choice| {
            inner.lock().selected = choice;
        });
        dialog.open();
        Some(dialog)
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Select")
            .field("options", &inner.options.len())
            .field("selected", &inner.selected)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Select: Send);

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn region_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Fastest", "auto").with_icon(IconRef(3)),
            SelectOption::new("Europe", "eu"),
            SelectOption::new("Americas", "am"),
        ]
    }

    fn open_select() -> Select {
        // A zero-width gate keeps picker tests deterministic.
        Select::new(region_options(), 0)
            .unwrap()
            .with_gate(ClickGate::with_interval(Duration::ZERO))
    }

    #[test]
    fn test_initial_selection_validated() {
        assert!(Select::new(region_options(), 2).is_ok());
        assert!(
            Select::new(region_options(), 3)
                .unwrap_err()
                .is_out_of_range()
        );
    }

    #[test]
    fn test_view_shows_selected_entry() {
        let select = open_select();
        let view = select.view();
        assert_eq!(view.text, "Fastest");
        assert_eq!(view.icon, Some(IconRef(3)));
        assert_eq!(select.selected_value(), "auto");
    }

    #[test]
    fn test_picker_selection_moves_control() {
        let mut select = open_select();

        let mut dialog = select.open_picker().expect("gate is open");
        assert_eq!(dialog.option_count(), 3);

        dialog.activate(1).unwrap();
        assert!(!dialog.is_open());

        assert_eq!(select.selected_index(), 1);
        assert_eq!(select.selected_value(), "eu");
        assert_eq!(select.view().text, "Europe");
        assert_eq!(select.view().icon, None);
    }

    #[test]
    fn test_picker_dismissal_keeps_selection() {
        let mut select = open_select();

        let mut dialog = select.open_picker().expect("gate is open");
        dialog.close();

        assert_eq!(select.selected_index(), 0);
    }

    #[test]
    fn test_rapid_reopen_suppressed() {
        let mut select = Select::new(region_options(), 0)
            .unwrap()
            .with_gate(ClickGate::with_interval(Duration::from_secs(3600)));

        assert!(select.open_picker().is_some());
        assert!(select.open_picker().is_none());
    }

    #[test]
    fn test_set_values_resets_selection() {
        let mut select = open_select();

        select
            .set_values(vec![SelectOption::new("Asia", "as")], 0)
            .unwrap();
        assert_eq!(select.selected_value(), "as");

        assert!(
            select
                .set_values(vec![SelectOption::new("Asia", "as")], 1)
                .unwrap_err()
                .is_out_of_range()
        );
    }
}
