//! Core systems for Horizon Passage.
//!
//! This crate provides the foundational primitives of the Horizon Passage
//! shell toolkit:
//!
//! - **Indexed Event Channel**: Single-slot, position-tagged activation
//!   events connecting list-rendering widgets to their host's response logic
//! - **Activation Throttle**: Minimum-interval suppression of rapid repeat
//!   activations
//!
//! Everything here is synchronous and same-thread by design: no operation
//! suspends, blocks, or spawns background work.
//!
//! # Indexed Event Example
//!
//! ```
//! use horizon_passage_core::IndexedChannel;
//!
//! // A top bar reports which of its tabs was pressed; the host screen is
//! // the single interested receiver.
//! let tab_clicks = IndexedChannel::<()>::new();
//!
//! tab_clicks.register(|event| {
//!     println!("tab {} pressed", event.index);
//! });
//!
//! tab_clicks.emit(1, None);
//! ```

mod channel;
pub mod logging;
mod throttle;

pub use channel::{IndexedChannel, IndexedEvent};
pub use throttle::{ClickGate, DEFAULT_CLICK_INTERVAL};
