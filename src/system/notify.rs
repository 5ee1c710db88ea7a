//! Cross-process change announcements.
//!
//! Any process that writes the stash announces the write so a running
//! interactive session can refresh. On Unix the announcement is SIGUSR1
//! sent to the PID in the lockfile; where signals are unavailable a
//! trigger file is touched instead and the session polls its mtime.
//! Delivery is best effort in both directions.

use std::path::PathBuf;
use std::thread;

use tracing::debug;

use crate::config::Config;
use crate::errors::{Result, ShortlyError};
use crate::system::lockfile;

pub struct Notifier {
    lock_path: PathBuf,
    #[cfg_attr(unix, allow(dead_code))]
    trigger_path: PathBuf,
}

impl Notifier {
    pub fn new(config: &Config) -> Self {
        Notifier {
            lock_path: config.lock_path(),
            trigger_path: config.trigger_path(),
        }
    }

    /// Announce a stash write to a listening session, if any.
    ///
    /// Writers never notify themselves; the session applies its own
    /// mutations directly and only listens for everyone else's.
    #[cfg(unix)]
    pub fn announce(&self) -> Result<()> {
        use nix::sys::signal::{self, Signal};
        use nix::unistd::Pid;

        let Some(pid) = lockfile::read_pid(&self.lock_path) else {
            return Err(ShortlyError::notify("no running session to notify"));
        };
        if pid == std::process::id() {
            return Ok(());
        }
        signal::kill(Pid::from_raw(pid as i32), Signal::SIGUSR1)
            .map_err(|e| ShortlyError::notify(format!("Failed to send SIGUSR1: {}", e)))?;
        Ok(())
    }

    #[cfg(windows)]
    pub fn announce(&self) -> Result<()> {
        use std::fs;

        let Some(pid) = lockfile::read_pid(&self.lock_path) else {
            return Err(ShortlyError::notify("no running session to notify"));
        };
        if pid == std::process::id() {
            return Ok(());
        }
        if let Some(parent) = self.trigger_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.trigger_path, std::process::id().to_string())
            .map_err(|e| ShortlyError::notify(format!("Failed to touch trigger file: {}", e)))?;
        Ok(())
    }

    /// Spawn the platform watcher. `on_change` runs on the watcher thread
    /// once per received announcement.
    #[cfg(unix)]
    pub fn watch(&self, on_change: impl Fn() + Send + 'static) {
        use signal_hook::consts::SIGUSR1;
        use signal_hook::iterator::Signals;
        use tracing::warn;

        thread::spawn(move || {
            let mut signals = match Signals::new([SIGUSR1]) {
                Ok(signals) => signals,
                Err(e) => {
                    warn!("Failed to install SIGUSR1 handler: {}. Live refresh disabled.", e);
                    return;
                }
            };
            for _ in signals.forever() {
                debug!("Received SIGUSR1, stash changed externally");
                on_change();
            }
        });
    }

    #[cfg(windows)]
    pub fn watch(&self, on_change: impl Fn() + Send + 'static) {
        use std::fs;
        use std::time::{Duration, SystemTime};

        let trigger = self.trigger_path.clone();
        thread::spawn(move || {
            let mut last_check = SystemTime::now();
            loop {
                thread::sleep(Duration::from_millis(3000));

                if let Ok(metadata) = fs::metadata(&trigger)
                    && let Ok(modified) = metadata.modified()
                    && modified > last_check
                {
                    debug!("Trigger file touched, stash changed externally");
                    on_change();
                    last_check = SystemTime::now();
                    let _ = fs::remove_file(&trigger);
                }
            }
        });
    }
}
