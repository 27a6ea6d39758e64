//! Logging facilities for Horizon Passage.
//!
//! Horizon Passage uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] can be used with `tracing` filter directives
//! to select individual subsystems, e.g.
//! `RUST_LOG=horizon_passage_core::channel=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_passage_core";
    /// Indexed event channel target.
    pub const CHANNEL: &str = "horizon_passage_core::channel";
    /// Activation throttle target.
    pub const THROTTLE: &str = "horizon_passage_core::throttle";
    /// Navigation coordinator target (emitted by the shell crate).
    pub const NAVIGATION: &str = "horizon_passage::navigation";
    /// Modal/dialog lifecycle target (emitted by the shell crate).
    pub const MODAL: &str = "horizon_passage::modal";
}
