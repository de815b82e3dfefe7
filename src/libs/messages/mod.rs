//! User-facing message catalog.
//!
//! Every string the application prints goes through the [`Message`] enum so
//! the wording lives in one place. The `msg_*` macros in [`macros`] handle
//! the actual output and switch between plain console printing and the
//! tracing system when debug mode is on.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
