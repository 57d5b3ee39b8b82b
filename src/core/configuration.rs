use serde::Deserialize;
use std::{fs, path::Path, time::Duration};
use tokio::{fs::File, io::AsyncReadExt};

use super::environment::{Environment, DEFAULT_LOCAL_URL};

pub mod sections;


pub use sections::{ApiConfiguration, CoreConfiguration, LogConfiguration};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DATA_DIRECTORY: &str = ".";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_RETENTION: usize = 7;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Configuration {
    #[serde(default)]
    pub api: ApiConfiguration,
    #[serde(default)]
    pub core: CoreConfiguration,
    #[serde(default)]
    pub log: LogConfiguration,
}

impl Configuration {
    pub fn environment(&self) -> Environment {
        self.api.environment.unwrap_or_default()
    }

    pub fn base_url(&self) -> String {
        let local_url = self.api.local_url.as_deref().unwrap_or(DEFAULT_LOCAL_URL);
        self.environment().base_url(local_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn data_directory(&self) -> &str {
        self.core
            .data_directory
            .as_deref()
            .unwrap_or(DEFAULT_DATA_DIRECTORY)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_retention(&self) -> usize {
        self.log.retention.unwrap_or(DEFAULT_LOG_RETENTION)
    }

    pub fn assert_data_dir_permissions(&self) -> Result<(), String> {
        let path = Path::new(self.data_directory());

        match path.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(format!("data dir does not exist: {}", path.display())),
            Err(e) => return Err(format!("cannot access data dir {}: {e}", path.display())),
        }

        let metadata = fs::metadata(path).map_err(|e| format!("cannot read metadata: {e}"))?;

        if !metadata.is_dir() {
            return Err("data dir is not a directory".to_string());
        }

        if metadata.permissions().readonly() {
            return Err("data dir cannot be readonly".to_string());
        }

        Ok(())
    }

    pub fn assert_timeout_is_positive(&self) -> Result<(), String> {
        match self.api.timeout {
            Some(0) => Err("api timeout must be at least one second".to_string()),
            _ => Ok(()),
        }
    }
}

pub async fn get_configuration(
    file_path: &str,
) -> Result<Configuration, Box<dyn std::error::Error + Send + Sync>> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("configuration file is missing: {file_path}"),
        )));
    }

    let mut file = File::open(path).await?;
    let mut buffer = vec![];

    file.read_to_end(&mut buffer).await?;

    let content = String::from_utf8(buffer)?;

    Ok(toml::from_str::<Configuration>(&content)?)
}
