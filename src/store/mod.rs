//! Link store.
//!
//! Owns everything persisted in the stash: the link table plus the two
//! scalar settings. The table lives in memory only as long as one
//! operation; every mutation loads the full table, changes it and
//! flushes it back, then announces the write so other processes can
//! refresh. Interested parties subscribe for those announcements.

pub mod table;

use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{Result, ShortlyError};
use crate::stash::Stash;
use crate::system::notify::Notifier;

pub use table::{LinkRecord, LinkTable};

/// Stash key holding the serialized link table
pub const URLS_KEY: &str = "urls";
/// Stash key holding the theme preference
pub const THEME_KEY: &str = "shortly_theme";
/// Stash key holding the last typed input
pub const LAST_INPUT_KEY: &str = "shortly_last_input";

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything that is not exactly "dark" reads as light
    pub fn parse(value: &str) -> Theme {
        if value == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Notification delivered to store subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// Another process announced a stash write
    ExternalChange,
}

pub struct LinkStore {
    stash: Stash,
    notifier: Notifier,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

impl LinkStore {
    pub fn open(config: &Config) -> Self {
        LinkStore {
            stash: Stash::open(config.stash_path()),
            notifier: Notifier::new(config),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Typed load: `Ok(None)` when nothing is stored yet, `Err` when the
    /// stored data exists but cannot be parsed.
    pub fn load_raw(&self) -> Result<Option<LinkTable>> {
        match self.stash.get(URLS_KEY)? {
            Some(json) => {
                let table = serde_json::from_str(&json).map_err(|e| {
                    ShortlyError::stash_corrupt(format!("Failed to parse link table: {}", e))
                })?;
                Ok(Some(table))
            }
            None => Ok(None),
        }
    }

    /// Boundary load: missing and corrupt state both collapse to an
    /// empty table. Corruption is logged, never surfaced.
    pub fn load(&self) -> LinkTable {
        match self.load_raw() {
            Ok(Some(table)) => table,
            Ok(None) => LinkTable::new(),
            Err(e) => {
                warn!("Unreadable link table, starting empty: {}", e);
                LinkTable::new()
            }
        }
    }

    /// Persist the full table and announce the write
    pub fn save(&self, table: &LinkTable) -> Result<()> {
        let json = serde_json::to_string(table)?;
        self.stash.set(URLS_KEY, &json)?;
        self.announce();
        Ok(())
    }

    /// Insert or overwrite one link
    pub fn put(&self, id: &str, target: &str) -> Result<()> {
        let mut table = self.load();
        table.put(id, target);
        self.save(&table)
    }

    /// Remove one link. `Ok(false)` when the identifier was absent;
    /// nothing is written in that case.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut table = self.load();
        if !table.remove(id) {
            return Ok(false);
        }
        self.save(&table)?;
        Ok(true)
    }

    /// Drop the whole table from the stash
    pub fn clear(&self) -> Result<()> {
        self.stash.remove(URLS_KEY)?;
        self.announce();
        Ok(())
    }

    /// Persisted theme, light when unset or unreadable
    pub fn theme(&self) -> Theme {
        match self.stash.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Unreadable theme setting, using default: {}", e);
                Theme::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.stash.set(THEME_KEY, theme.as_str())?;
        self.announce();
        Ok(())
    }

    /// Last text typed into the input box, empty when unset
    pub fn last_input(&self) -> String {
        match self.stash.get(LAST_INPUT_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => String::new(),
            Err(e) => {
                warn!("Unreadable draft input, using empty: {}", e);
                String::new()
            }
        }
    }

    /// Persist the input draft. Draft writes come only from the
    /// interactive session, which never notifies itself, so no
    /// announcement goes out.
    pub fn set_last_input(&self, value: &str) -> Result<()> {
        self.stash.set(LAST_INPUT_KEY, value)
    }

    /// Receive an event per externally announced stash write
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    /// Start the platform watcher; received announcements fan out to
    /// every subscriber
    pub fn watch(self: &Arc<Self>) {
        let store = Arc::clone(self);
        self.notifier
            .watch(move || store.broadcast(StoreEvent::ExternalChange));
    }

    fn broadcast(&self, event: StoreEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn announce(&self) {
        if let Err(e) = self.notifier.announce() {
            debug!("Change announcement skipped: {}", e);
        }
    }
}
