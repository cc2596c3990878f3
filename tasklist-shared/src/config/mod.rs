//! # Configuration
//!
//! Client profiles bundle the backend base URL with the feature flags of
//! each deployment.

use std::{fmt, str::FromStr};

/// Optional behaviors toggled per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Double-click titles to rename lists and tasks in place.
    pub inline_edit: bool,
    /// Show a date picker on the task form and due dates on task rows.
    pub due_dates: bool,
    /// Log in automatically right after a successful registration.
    pub auto_login: bool,
}

impl FeatureFlags {
    /// Every optional behavior enabled.
    pub const FULL: Self = Self {
        inline_edit: true,
        due_dates: true,
        auto_login: true,
    };

    /// Every optional behavior disabled.
    pub const BASIC: Self = Self {
        inline_edit: false,
        due_dates: false,
        auto_login: false,
    };
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::FULL
    }
}

/// Named deployment of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientProfile {
    /// Backend on port 5555 with inline editing, due dates and auto-login.
    #[default]
    Full,
    /// Backend on port 8080 with the plain feature set.
    Basic,
}

impl ClientProfile {
    /// Base URL of the REST API, including the `/api` prefix.
    #[must_use]
    pub fn default_api_url(self) -> &'static str {
        match self {
            Self::Full => "http://localhost:5555/api",
            Self::Basic => "http://localhost:8080/api",
        }
    }

    /// Behaviour switches of this profile.
    #[must_use]
    pub fn features(self) -> FeatureFlags {
        match self {
            Self::Full => FeatureFlags::FULL,
            Self::Basic => FeatureFlags::BASIC,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for ClientProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientProfile {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "basic" => Ok(Self::Basic),
            _ => Err("unknown client profile"),
        }
    }
}

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub profile: ClientProfile,
    pub api_url: String,
    pub features: FeatureFlags,
}

impl ClientConfig {
    /// Settings for `profile` with its default base URL.
    #[must_use]
    pub fn for_profile(profile: ClientProfile) -> Self {
        Self {
            profile,
            api_url: profile.default_api_url().to_string(),
            features: profile.features(),
        }
    }

    /// Resolve settings from optional raw values.
    ///
    /// An unknown profile name falls back to the default profile; a blank URL
    /// falls back to the profile's URL. Trailing slashes are trimmed.
    #[must_use]
    pub fn resolve(profile: Option<&str>, api_url: Option<&str>) -> Self {
        let profile = profile
            .and_then(|name| name.parse().ok())
            .unwrap_or_default();
        let mut config = Self::for_profile(profile);
        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_url = url.to_string();
        }
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_profile(ClientProfile::default())
    }
}
