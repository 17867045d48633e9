//! Relay connectivity tracking and status pushes.
//!
//! The hub connection itself is driven elsewhere; it reports outcomes as
//! [`RelayEvent`]s. The [`RelayMonitor`] folds those into a single status
//! message, and the broadcaster pushes that message to the UI on a timer.

mod broadcaster;
mod message;
mod monitor;

pub use broadcaster::{current_status, spawn_status_broadcaster, STATUS_PUSH_INTERVAL};
pub use message::*;
pub use monitor::{HubState, RelayEvent, RelayMonitor};
