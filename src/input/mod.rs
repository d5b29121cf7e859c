//! Raw key input
//!
//! The wire shape of key-transition signals and an async source that
//! reads them as JSON lines.

mod signal;
mod source;

pub use signal::{KeySignal, SignalKind, SignalRecord};
pub use source::{parse_line, SignalError, SignalSource};
