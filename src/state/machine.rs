//! Shortcut state machine
//!
//! Filters raw key signals by surface and repeat flag, normalizes the
//! survivors into combinations and fans them out to `down` / `up`
//! listeners in registration order.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::events::{CombinationEvent, Notification};
use crate::input::{KeySignal, SignalKind, SignalRecord};
use crate::keys::KeyCombination;
use crate::surface::{SurfaceId, SurfaceTree};

/// Callback receiving combination notifications.
///
/// An error is not caught: dispatch stops and hands it to the caller.
pub type Listener = Box<dyn FnMut(&CombinationEvent) -> anyhow::Result<()>>;

/// Handle returned by [`ShortcutState::on`], used to deregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors surfaced while dispatching a notification
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("{notification} listener {id} failed")]
    Listener {
        id: ListenerId,
        notification: Notification,
        #[source]
        source: anyhow::Error,
    },
}

/// Requests accepted by [`ShortcutState::run`] while it owns the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Same as [`ShortcutState::off`]
    Off {
        notification: Notification,
        id: ListenerId,
    },
}

/// Construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Only signals from this surface or its subtree are processed
    pub surface: SurfaceId,
}

impl ListenerOptions {
    /// Bind to `surface`
    pub fn new(surface: SurfaceId) -> Self {
        Self { surface }
    }

    /// Bind to the root surface of `tree`
    pub fn root_of(tree: &SurfaceTree) -> Self {
        Self::new(tree.root())
    }
}

/// Turns raw key signals on one surface into combination notifications
pub struct ShortcutState {
    surface: SurfaceId,
    listeners: HashMap<Notification, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl ShortcutState {
    /// Create a state machine with no listeners
    pub fn new(options: ListenerOptions) -> Self {
        Self {
            surface: options.surface,
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    /// The surface this state machine is bound to
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Register a listener for `notification`
    pub fn on<F>(&mut self, notification: Notification, listener: F) -> ListenerId
    where
        F: FnMut(&CombinationEvent) -> anyhow::Result<()> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(notification)
            .or_default()
            .push((id, Box::new(listener)));
        debug!(
            %notification,
            %id,
            count = self.listener_count(notification),
            "listener registered"
        );
        id
    }

    /// Deregister a listener previously registered for `notification`.
    ///
    /// Returns false if no such registration exists.
    pub fn off(&mut self, notification: Notification, id: ListenerId) -> bool {
        let Some(listeners) = self.listeners.get_mut(&notification) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = listeners.len() != before;
        if removed {
            debug!(%notification, %id, "listener removed");
        }
        removed
    }

    /// Number of listeners registered for `notification`
    pub fn listener_count(&self, notification: Notification) -> usize {
        self.listeners.get(&notification).map_or(0, Vec::len)
    }

    /// Process one raw signal.
    ///
    /// Returns the emitted event, or `None` when the signal was outside the
    /// bound surface or a key-down repeat.
    pub fn handle(
        &mut self,
        tree: &SurfaceTree,
        signal: &KeySignal,
    ) -> Result<Option<CombinationEvent>, DispatchError> {
        if !tree.contains(self.surface, signal.target) {
            debug!(
                target_surface = tree.name(signal.target).unwrap_or_default(),
                key = %signal.key,
                "signal outside bound surface"
            );
            return Ok(None);
        }

        let notification = match signal.kind {
            SignalKind::KeyDown if signal.repeat => {
                debug!(key = %signal.key, "discarding key repeat");
                return Ok(None);
            }
            SignalKind::KeyDown => Notification::Down,
            SignalKind::KeyUp => Notification::Up,
        };

        let keys = KeyCombination::normalize(&signal.key, signal.modifiers);
        debug!(key = keys.key().unwrap_or_default(), %notification, "normalized");
        let event = CombinationEvent::with_keys(notification, keys);
        self.dispatch(&event)?;
        Ok(Some(event))
    }

    /// Deliver `event` to its listeners in registration order
    fn dispatch(&mut self, event: &CombinationEvent) -> Result<(), DispatchError> {
        let notification = event.kind();
        let Some(listeners) = self.listeners.get_mut(&notification) else {
            return Ok(());
        };

        debug!(%notification, combination = %event, listeners = listeners.len(), "dispatching");
        for (id, listener) in listeners.iter_mut() {
            listener(event).map_err(|source| DispatchError::Listener {
                id: *id,
                notification,
                source,
            })?;
        }
        Ok(())
    }

    /// Process signals from a source until the signal channel closes.
    ///
    /// Targets are resolved against `tree` without modifying it. Pending
    /// [`Control`] requests are applied before the next signal, so a
    /// deregistration sent from a listener takes effect for every later
    /// dispatch. A closed control channel is simply no longer polled.
    /// The first listener failure stops the loop and is returned.
    pub async fn run(
        &mut self,
        tree: &SurfaceTree,
        mut signal_rx: mpsc::Receiver<SignalRecord>,
        mut control_rx: mpsc::Receiver<Control>,
    ) -> Result<(), DispatchError> {
        info!(surface = ?self.surface, "shortcut state machine started");
        let mut controls_open = true;

        loop {
            tokio::select! {
                biased;

                control = control_rx.recv(), if controls_open => match control {
                    Some(Control::Off { notification, id }) => {
                        self.off(notification, id);
                    }
                    None => controls_open = false,
                },

                record = signal_rx.recv() => match record {
                    Some(record) => {
                        let signal = record.resolve(tree);
                        self.handle(tree, &signal)?;
                    }
                    None => break,
                },
            }
        }

        info!("shortcut state machine stopped");
        Ok(())
    }
}
