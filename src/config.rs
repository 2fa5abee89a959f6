use std::env;
use std::fmt::Display;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

/// Application-level constants
pub const APP_NAME: &str = "Vaidya";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen port for the HTTP server.
pub const DEFAULT_PORT: u16 = 5001;

/// Reference table shipped with the binary's source tree.
pub const DEFAULT_DATASET: &str = "resources/data/ayurvedic_treatments.csv";

/// Get the application data directory
/// ~/Vaidya/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Vaidya")
}

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Runtime configuration, resolved from environment variables with
/// logged defaults.
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub db_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let data_dir = env::var("VAIDYA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                info!("VAIDYA_DATA_DIR not set, using default data directory");
                app_data_dir()
            });

        let db_path = env::var("VAIDYA_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("accounts.db"));

        Self {
            host: try_load("VAIDYA_HOST", "127.0.0.1"),
            port: try_load("VAIDYA_PORT", &DEFAULT_PORT.to_string()),
            dataset_path: try_load("VAIDYA_DATASET", DEFAULT_DATASET),
            db_path,
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Vaidya"));
    }

    #[test]
    fn default_port_value() {
        assert_eq!(DEFAULT_PORT, 5001);
    }

    #[test]
    fn default_dataset_is_bundled_csv() {
        assert!(DEFAULT_DATASET.ends_with("ayurvedic_treatments.csv"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn log_filter_names_this_crate() {
        assert!(default_log_filter().contains("vaidya"));
    }
}
