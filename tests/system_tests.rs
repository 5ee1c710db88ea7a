//! Lockfile and change notification tests

use shortly::config::Config;
use shortly::system::lockfile::{self, Lockfile};
use shortly::system::notify::Notifier;
use tempfile::TempDir;

fn temp_config() -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        data_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };
    (config, temp_dir)
}

// =============================================================================
// Lockfile tests
// =============================================================================

#[cfg(test)]
mod lockfile_tests {
    use super::*;

    #[test]
    fn test_acquire_writes_own_pid() {
        let (config, _temp) = temp_config();

        let lock = Lockfile::acquire(config.lock_path()).expect("acquire should succeed");
        assert_eq!(lockfile::read_pid(lock.path()), Some(std::process::id()));
    }

    #[test]
    fn test_release_removes_file() {
        let (config, _temp) = temp_config();

        {
            let _lock = Lockfile::acquire(config.lock_path()).unwrap();
            assert!(config.lock_path().exists());
        }
        assert!(!config.lock_path().exists());
    }

    #[test]
    fn test_second_acquire_fails_while_held() {
        let (config, _temp) = temp_config();

        let _lock = Lockfile::acquire(config.lock_path()).unwrap();
        let second = Lockfile::acquire(config.lock_path());

        assert!(second.is_err());
        assert_eq!(second.unwrap_err().code(), "E009");
    }
}

// =============================================================================
// Change notification tests (Unix: SIGUSR1)
// =============================================================================

#[cfg(unix)]
#[cfg(test)]
mod notify_tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use nix::sys::signal::{self, Signal};
    use nix::unistd::Pid;
    use shortly::store::LinkStore;

    use super::*;

    #[test]
    fn test_announce_without_session_fails() {
        let (config, _temp) = temp_config();

        let err = Notifier::new(&config)
            .announce()
            .expect_err("no session should mean no announcement");
        assert_eq!(err.code(), "E008");
    }

    #[test]
    fn test_announce_to_self_is_skipped() {
        let (config, _temp) = temp_config();

        // The lockfile holds our own PID, so the announcement short-circuits
        // instead of signalling ourselves.
        let _lock = Lockfile::acquire(config.lock_path()).unwrap();
        assert!(Notifier::new(&config).announce().is_ok());
    }

    #[test]
    fn test_watch_delivers_store_events() {
        let (config, _temp) = temp_config();

        let store = Arc::new(LinkStore::open(&config));
        let events = store.subscribe();
        store.watch();

        // Give the watcher thread time to register its signal handler
        // before raising SIGUSR1 against ourselves.
        thread::sleep(Duration::from_millis(500));
        signal::kill(Pid::this(), Signal::SIGUSR1).expect("kill should succeed");

        events
            .recv_timeout(Duration::from_secs(5))
            .expect("external change should reach subscribers");
    }
}
