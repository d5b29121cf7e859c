//! shortcut-listener: report keyboard shortcut combinations from a signal stream
//!
//! Reads raw key signals as JSON lines on stdin, e.g.
//! `{"type":"keydown","key":"k","ctrlKey":true,"target":"editor"}`,
//! and writes one JSON line per `down` / `up` notification to stdout,
//! listing which shortcuts from `SHORTCUT_WATCH` it matches.
//! Logs go to stderr, filtered by `RUST_LOG`.

mod config;
mod lifecycle;

use std::io::Write;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shortcut_listener::input::SignalSource;
use shortcut_listener::{CombinationEvent, ListenerOptions, Notification, ShortcutState, SurfaceTree};

use crate::config::Config;
use crate::lifecycle::ShutdownSignal;

/// One line of output
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    event: &'a CombinationEvent,
    matched: Vec<&'a str>,
}

fn report(config: &Config, event: &CombinationEvent) -> Result<()> {
    let line = serde_json::to_string(&Report {
        event,
        matched: config.matching(event),
    })?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").context("failed to write notification")?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "shortcut-listener starting");

    let config = Rc::new(Config::load()?);
    info!(scope = %config.scope, watched = config.watch.len(), "configuration loaded");

    let mut tree = SurfaceTree::new();
    let surface = tree.ensure_path(&config.scope);
    let mut state = ShortcutState::new(ListenerOptions::new(surface));

    for notification in [Notification::Down, Notification::Up] {
        let config = Rc::clone(&config);
        state.on(notification, move |event| report(&config, event));
    }

    // Source -> state machine
    let (signal_tx, signal_rx) = mpsc::channel(64);
    let source = SignalSource::new(BufReader::new(tokio::io::stdin()));
    let source_task = tokio::spawn(source.run(signal_tx));

    // Listeners stay registered for the whole process
    let (control_tx, control_rx) = mpsc::channel(1);
    drop(control_tx);

    let shutdown = ShutdownSignal::new();

    tokio::select! {
        result = state.run(&tree, signal_rx, control_rx) => {
            if let Err(e) = result {
                error!(error = %e, "notification listener failed");
                source_task.abort();
                return Err(e.into());
            }
            info!("input stream ended");
        }

        name = shutdown.wait() => {
            info!(signal = name, "shutdown signal received");
        }
    }

    source_task.abort();
    info!("shortcut-listener stopped");

    Ok(())
}
