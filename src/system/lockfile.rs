//! Single-instance lockfile.
//!
//! The interactive session takes a lock naming its PID. That PID doubles
//! as the address change announcements are delivered to, so the lockfile
//! lives next to the stash where every process can find it.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::errors::{Result, ShortlyError};

/// Held for the lifetime of the interactive session; dropping it removes
/// the lockfile.
#[derive(Debug)]
pub struct Lockfile {
    path: PathBuf,
}

impl Lockfile {
    /// Take the lock, replacing a stale one. Fails when another live
    /// session already holds it.
    pub fn acquire(path: PathBuf) -> Result<Lockfile> {
        if path.exists() {
            match read_pid(&path) {
                Some(old_pid) if is_alive(old_pid) => {
                    return Err(ShortlyError::lock(format!(
                        "another shortly session is already running (PID {}). If this is stale, delete {}",
                        old_pid,
                        path.display()
                    )));
                }
                Some(_) => {
                    info!("Stale lockfile detected, cleaning up...");
                    let _ = fs::remove_file(&path);
                }
                None => {
                    // unreadable contents, treat as stale
                    let _ = fs::remove_file(&path);
                }
            }
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let pid = std::process::id();
        fs::write(&path, pid.to_string())?;
        debug!("Session PID: {}", pid);
        Ok(Lockfile { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            error!("Failed to delete lockfile: {}", e);
        } else {
            info!("Lockfile cleaned: {}", self.path.display());
        }
    }
}

/// PID recorded in a lockfile, if one is readable
pub fn read_pid(path: &Path) -> Option<u32> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}

#[cfg(unix)]
fn is_alive(pid: u32) -> bool {
    use nix::sys::signal;
    use nix::unistd::Pid;

    // Signal 0 probes for existence without delivering anything
    signal::kill(Pid::from_raw(pid as i32), None).is_ok()
}

#[cfg(windows)]
fn is_alive(_pid: u32) -> bool {
    // No liveness probe without pulling in process APIs; an existing
    // lockfile counts as live and the error tells the user what to delete.
    true
}
