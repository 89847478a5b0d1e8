use crate::options::CorsOptions;
use serde::Deserialize;
use std::time::Duration;

/// Deserializable form of [`CorsOptions`], e.g. a `[cors]` table in a TOML file.
///
/// Missing fields take the same defaults as [`CorsOptions::default`]. The max
/// age is given in whole seconds.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allow_all_origins: bool,
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age_secs: u64,
}

impl From<CorsConfig> for CorsOptions {
    fn from(config: CorsConfig) -> Self {
        CorsOptions {
            allow_all_origins: config.allow_all_origins,
            allow_origins: config.allow_origins,
            allow_credentials: config.allow_credentials,
            allow_methods: config.allow_methods,
            allow_headers: config.allow_headers,
            expose_headers: config.expose_headers,
            max_age: Duration::from_secs(config.max_age_secs),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
