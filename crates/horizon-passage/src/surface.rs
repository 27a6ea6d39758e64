//! Visual surfaces for the navigation state.
//!
//! The shell shows the page switcher through one of two surfaces: a
//! swipeable tab strip in Compact mode, or a persistent indicator bar in
//! Wide mode. Neither surface owns the current-index value: each is a
//! stateless render function over [`NavigationState`], so the two can never
//! disagree about which page is current.

use horizon_passage_core::IndexedChannel;

use crate::error::{Error, Result};
use crate::navigation::{NavigationState, VisualMode};
use crate::page::{PAGE_COUNT, PageKind};

/// Emphasis of the selected indicator.
pub const FULL_EMPHASIS: f32 = 1.0;

/// Emphasis of unselected indicators and disabled rows.
pub const DIMMED_EMPHASIS: f32 = 0.4;

/// Emphasis of a control while a press is in flight.
pub const PRESSED_EMPHASIS: f32 = 0.5;

/// Render state of the Compact-mode tab strip.
///
/// The strip is recomputed on every page change; there is no animation state
/// beyond the instantaneous emphasis values.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStripView {
    /// Whether the strip is shown at all. Fixed by the visual mode.
    pub visible: bool,
    /// Per-tab emphasis: [`FULL_EMPHASIS`] for the selected tab,
    /// [`DIMMED_EMPHASIS`] for the rest.
    pub emphasis: [f32; PAGE_COUNT],
}

impl TabStripView {
    /// Render the strip for a navigation state.
    pub fn render(state: &NavigationState) -> Self {
        let mut emphasis = [DIMMED_EMPHASIS; PAGE_COUNT];
        emphasis[state.current_index()] = FULL_EMPHASIS;

        Self {
            visible: state.mode() == VisualMode::Compact,
            emphasis,
        }
    }
}

/// Render state of the Wide-mode indicator bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorBarView {
    /// Whether the bar is shown at all. Fixed by the visual mode.
    pub visible: bool,
    /// The selected page position.
    pub selected: usize,
    /// Whether the bar's auxiliary stats panel is shown. The panel is hidden
    /// while the status page is current and shown everywhere else.
    pub stats_visible: bool,
}

impl IndicatorBarView {
    /// Render the bar for a navigation state.
    pub fn render(state: &NavigationState) -> Self {
        Self {
            visible: state.mode() == VisualMode::Wide,
            selected: state.current_index(),
            stats_visible: state.current_index() != PageKind::Status.index(),
        }
    }
}

/// The clickable Wide-mode indicator bar.
///
/// The bar reports tab presses to its host through its [`IndexedChannel`];
/// it never changes the current page itself. The host's listener typically
/// forwards the index to
/// [`NavigationCoordinator::request_page`](crate::NavigationCoordinator::request_page).
pub struct IndicatorBar {
    /// Channel on which tab presses are reported, tagged with the tab
    /// position.
    pub clicks: IndexedChannel<()>,
    view: IndicatorBarView,
}

impl IndicatorBar {
    /// Create a bar rendered from the given state.
    pub fn new(state: &NavigationState) -> Self {
        Self {
            clicks: IndexedChannel::new(),
            view: IndicatorBarView::render(state),
        }
    }

    /// The bar's current render state.
    pub fn view(&self) -> &IndicatorBarView {
        &self.view
    }

    /// Recompute the render state after a navigation change.
    pub fn sync(&mut self, state: &NavigationState) {
        self.view = IndicatorBarView::render(state);
    }

    /// Report a press on the tab at `index`.
    ///
    /// Out-of-range presses are a caller defect and fail fast; valid presses
    /// are emitted to the registered listener, if any.
    pub fn press_tab(&self, index: usize) -> Result<()> {
        if index >= PAGE_COUNT {
            return Err(Error::out_of_range(index, PAGE_COUNT));
        }
        self.clicks.emit(index, None);
        Ok(())
    }
}

static_assertions::assert_impl_all!(IndicatorBar: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn test_tab_strip_emphasis_follows_selection() {
        let mut state = NavigationState::new(VisualMode::Compact);
        state.set_current(2);

        let view = TabStripView::render(&state);
        assert!(view.visible);
        assert_eq!(view.emphasis, [DIMMED_EMPHASIS, DIMMED_EMPHASIS, FULL_EMPHASIS]);
    }

    #[test]
    fn test_tab_strip_hidden_in_wide_mode() {
        let state = NavigationState::new(VisualMode::Wide);
        let view = TabStripView::render(&state);
        assert!(!view.visible);
    }

    #[test]
    fn test_indicator_bar_visibility_per_mode() {
        assert!(IndicatorBarView::render(&NavigationState::new(VisualMode::Wide)).visible);
        assert!(!IndicatorBarView::render(&NavigationState::new(VisualMode::Compact)).visible);
    }

    #[test]
    fn test_stats_panel_hidden_on_status_only() {
        let mut state = NavigationState::new(VisualMode::Wide);
        assert!(!IndicatorBarView::render(&state).stats_visible);

        state.set_current(1);
        assert!(IndicatorBarView::render(&state).stats_visible);

        state.set_current(2);
        assert!(IndicatorBarView::render(&state).stats_visible);

        state.set_current(0);
        assert!(!IndicatorBarView::render(&state).stats_visible);
    }

    #[test]
    fn test_press_tab_reports_index_to_listener() {
        let state = NavigationState::new(VisualMode::Wide);
        let bar = IndicatorBar::new(&state);

        let pressed = Arc::new(Mutex::new(Vec::new()));
        let pressed_clone = pressed.clone();
        bar.clicks.register(move |event| {
            pressed_clone.lock().push(event.index);
        });

        bar.press_tab(2).unwrap();
        bar.press_tab(0).unwrap();

        assert_eq!(*pressed.lock(), vec![2, 0]);
    }

    #[test]
    fn test_press_tab_out_of_range_fails_fast() {
        let state = NavigationState::new(VisualMode::Wide);
        let bar = IndicatorBar::new(&state);

        let pressed = Arc::new(Mutex::new(Vec::new()));
        let pressed_clone = pressed.clone();
        bar.clicks.register(move |event| {
            pressed_clone.lock().push(event.index);
        });

        assert!(bar.press_tab(PAGE_COUNT).unwrap_err().is_out_of_range());
        // The listener saw nothing.
        assert!(pressed.lock().is_empty());
    }
}
