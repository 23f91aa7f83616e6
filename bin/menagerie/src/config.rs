//! Process configuration, read once at startup and handed to each
//! component at construction.

use std::env;
use std::path::PathBuf;

/// Fallback shared secret; a warning is logged when it is left in place.
const DEFAULT_PASSWORD: &str = "letmein";

/// Fallback material for the session-cookie signing key. Key derivation
/// needs at least 32 bytes of input.
const DEFAULT_SESSION_KEY: &str =
    "an-unconfigured-menagerie-session-signing-key-override-in-production";

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Root of the served image tree
    pub store_root: PathBuf,
    /// Where deleted images are moved; outside the store root
    pub quarantine_dir: PathBuf,
    pub shared_secret: String,
    pub session_key: String,
}

impl AppConfig {
    /// Resolves every setting from the environment, with defaults suited
    /// to a local single-user deployment.
    pub fn from_env() -> Self {
        let shared_secret = env::var("MENAGERIE_PASSWORD").unwrap_or_else(|_| {
            log::warn!("MENAGERIE_PASSWORD not set, using the built-in password");
            DEFAULT_PASSWORD.to_string()
        });

        let session_key = match env::var("MENAGERIE_SESSION_KEY") {
            Ok(key) if key.len() >= 32 => key,
            Ok(_) => {
                log::warn!("MENAGERIE_SESSION_KEY shorter than 32 bytes, using the built-in key");
                DEFAULT_SESSION_KEY.to_string()
            }
            Err(_) => DEFAULT_SESSION_KEY.to_string(),
        };

        Self {
            host: env::var("MENAGERIE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("MENAGERIE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            store_root: env::var("MENAGERIE_STORE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            quarantine_dir: env::var("MENAGERIE_QUARANTINE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("deleted")),
            shared_secret,
            session_key,
        }
    }
}
