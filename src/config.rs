//! Configuration loading and management

use anyhow::{bail, Result};

use shortcut_listener::CombinationEvent;

/// Environment variable naming the surface path to bind to
const SCOPE_VAR: &str = "SHORTCUT_SCOPE";
/// Environment variable listing `name=specification` shortcuts to report
const WATCH_VAR: &str = "SHORTCUT_WATCH";

/// A shortcut the binary reports matches for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedShortcut {
    pub name: String,
    pub specification: String,
}

/// Listener configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// `/`-separated surface path; empty binds to the root surface
    pub scope: String,

    /// Shortcuts checked against every notification
    pub watch: Vec<WatchedShortcut>,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self> {
        let scope = std::env::var(SCOPE_VAR).unwrap_or_default();
        let watch = std::env::var(WATCH_VAR).unwrap_or_default();
        Self::parse(&scope, &watch)
    }

    /// Build a configuration from raw values.
    ///
    /// `watch` is a `;`-separated list such as `save=ctrl+s;palette=cmd+shift+p`.
    pub fn parse(scope: &str, watch: &str) -> Result<Self> {
        let mut shortcuts = Vec::new();

        for entry in watch.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((name, specification)) = entry.split_once('=') else {
                bail!("{WATCH_VAR} entry {entry:?} is missing '='");
            };
            let (name, specification) = (name.trim(), specification.trim());
            if name.is_empty() || specification.is_empty() {
                bail!("{WATCH_VAR} entry {entry:?} needs both a name and a shortcut");
            }
            shortcuts.push(WatchedShortcut {
                name: name.to_owned(),
                specification: specification.to_owned(),
            });
        }

        Ok(Self {
            scope: scope.trim().to_owned(),
            watch: shortcuts,
        })
    }

    /// Names of the watched shortcuts `event` matches
    pub fn matching<'a>(&'a self, event: &CombinationEvent) -> Vec<&'a str> {
        self.watch
            .iter()
            .filter(|w| event.matches(&w.specification))
            .map(|w| w.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortcut_listener::{KeyCombination, Notification};

    #[test]
    fn test_config_parse() {
        let config = Config::parse(" editor/panel ", "save=ctrl+s; palette = cmd+shift+p ;").unwrap();
        assert_eq!(config.scope, "editor/panel");
        assert_eq!(
            config.watch,
            vec![
                WatchedShortcut {
                    name: "save".into(),
                    specification: "ctrl+s".into(),
                },
                WatchedShortcut {
                    name: "palette".into(),
                    specification: "cmd+shift+p".into(),
                },
            ]
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::parse("", "").unwrap();
        assert!(config.scope.is_empty());
        assert!(config.watch.is_empty());
    }

    #[test]
    fn test_config_rejects_malformed_entries() {
        assert!(Config::parse("", "save").is_err());
        assert!(Config::parse("", "=ctrl+s").is_err());
        assert!(Config::parse("", "save=").is_err());
    }

    #[test]
    fn test_matching_names() {
        let config = Config::parse("", "save=ctrl+s;also=CONTROL+S;quit=cmd+q").unwrap();
        let event = CombinationEvent::with_keys(
            Notification::Down,
            KeyCombination::from_tokens(["control", "s"]),
        );
        assert_eq!(config.matching(&event), vec!["save", "also"]);
    }
}
