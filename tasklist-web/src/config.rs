//! Frontend configuration module
//!
//! The client profile and API base URL are fixed at build time through the
//! `TASKLIST_PROFILE` and `TASKLIST_API_URL` environment variables.

use shared::config::{ClientConfig, ClientProfile, FeatureFlags};

/// Build-time settings of the web client
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    client: ClientConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::resolve(
                option_env!("TASKLIST_PROFILE"),
                option_env!("TASKLIST_API_URL"),
            ),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL every endpoint path is appended to
    pub fn api_url(&self) -> &str {
        &self.client.api_url
    }

    pub fn profile(&self) -> ClientProfile {
        self.client.profile
    }

    pub fn features(&self) -> FeatureFlags {
        self.client.features
    }
}

impl From<ClientConfig> for FrontendConfig {
    fn from(client: ClientConfig) -> Self {
        Self { client }
    }
}
