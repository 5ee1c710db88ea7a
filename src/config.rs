use std::env;
use std::path::PathBuf;
use tracing::error;

/// Runtime configuration, resolved once at startup and passed explicitly.
///
/// Everything comes from environment variables (a `.env` file is honored);
/// every field has a working default so a bare `shortly` just runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the stash file, lockfile and logs
    pub data_dir: PathBuf,
    /// Base for generated short URLs, joined as `<base>#/<id>`
    pub base_url: String,
    /// QR image service endpoint
    pub qr_endpoint: String,
    /// QR image edge length in pixels
    pub qr_size: u32,
    /// Log filter in EnvFilter syntax
    pub log_filter: String,
    /// Log to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map(|d| d.join("shortly"))
            .unwrap_or_else(|| PathBuf::from(".shortly"));
        Config {
            data_dir,
            base_url: "shortly://local".to_string(),
            qr_endpoint: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size: 150,
            log_filter: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Build the configuration from the environment
    pub fn load() -> Self {
        let mut config = Self::default();
        config.override_with_env();
        config
    }

    fn override_with_env(&mut self) {
        if let Ok(dir) = env::var("SHORTLY_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(base_url) = env::var("SHORTLY_BASE_URL") {
            self.base_url = base_url;
        }
        if let Ok(endpoint) = env::var("SHORTLY_QR_ENDPOINT") {
            self.qr_endpoint = endpoint;
        }
        if let Ok(size) = env::var("SHORTLY_QR_SIZE") {
            if let Ok(size) = size.parse() {
                self.qr_size = size;
            } else {
                error!("Invalid SHORTLY_QR_SIZE: {}", size);
            }
        }
        if let Ok(filter) = env::var("SHORTLY_LOG") {
            self.log_filter = filter;
        }
        if let Ok(file) = env::var("SHORTLY_LOG_FILE") {
            self.log_file = Some(PathBuf::from(file));
        }
    }

    /// Path of the JSON stash file
    pub fn stash_path(&self) -> PathBuf {
        self.data_dir.join("stash.json")
    }

    /// Path of the single-instance lockfile
    pub fn lock_path(&self) -> PathBuf {
        self.data_dir.join("shortly.pid")
    }

    /// Path of the reload trigger file used where signals are unavailable
    pub fn trigger_path(&self) -> PathBuf {
        self.data_dir.join("shortly.reload")
    }
}
