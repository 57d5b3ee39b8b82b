use serde::Deserialize;

use crate::core::environment::Environment;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct CoreConfiguration {
    pub data_directory: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApiConfiguration {
    pub environment: Option<Environment>,
    pub local_url: Option<String>,
    /// seconds
    pub timeout: Option<u64>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct LogConfiguration {
    pub level: Option<String>,
    pub retention: Option<usize>,
}
