use serde::Deserialize;

pub const DEFAULT_LOCAL_URL: &str = "http://localhost:8080";
pub const STAGE_URL: &str = "https://gma-stage-abd1bb3327e8.herokuapp.com";
pub const PRODUCTION_URL: &str = "https://api.greenlakemartialarts.com";

/// Deployment the client talks to.
#[derive(Deserialize, clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Stage,
    Production,
}

impl Environment {
    /// Resolves the base URL; only `Local` depends on the caller.
    pub fn base_url(&self, local_url: &str) -> String {
        match self {
            Environment::Local => local_url.to_string(),
            Environment::Stage => STAGE_URL.to_string(),
            Environment::Production => PRODUCTION_URL.to_string(),
        }
    }
}
