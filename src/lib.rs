//! shortcut-listener: canonical keyboard shortcut combinations
//!
//! Normalizes raw key transitions into comparable [`KeyCombination`]s,
//! matches them against informal specifications such as `"cmd+option+k"`,
//! and emits scoped `down` / `up` notifications with repeats suppressed.

pub mod events;
pub mod input;
pub mod keys;
pub mod state;
pub mod surface;

pub use events::{CombinationEvent, Notification};
pub use input::{KeySignal, SignalKind, SignalRecord};
pub use keys::{KeyCombination, ModifierState};
pub use state::{Control, DispatchError, ListenerId, ListenerOptions, ShortcutState};
pub use surface::{SurfaceId, SurfaceTree};
