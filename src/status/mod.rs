//! IoT Hub relay status indicator.
//!
//! - **event**: the pushed `{ plugin, data }` messages and their decoding
//! - **display**: the status-to-label/category projection
//! - **projector**: reactive signals the navbar binds to

mod display;
mod event;
mod projector;

pub use display::{DisplayState, StyleCategory};
pub use event::{PluginMessage, StatusEvent};
pub use projector::StatusProjector;
