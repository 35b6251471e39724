use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use validator::Validate;

use crate::api::models::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::api::{ClientConfig, ProfileKind};

pub const ENV_USERNAME: &str = "REGRU_USERNAME";
pub const ENV_PASSWORD: &str = "REGRU_PASSWORD";
pub const ENV_ZONE: &str = "REGRU_ZONE";

fn default_base_url() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_BASE_URL)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

#[derive(Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: Cow<'static, str>,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: Cow<'static, str>,

    #[validate(length(min = 1, message = "Zone cannot be empty"))]
    pub zone: Cow<'static, str>,

    #[serde(default)]
    pub profile: ProfileKind,

    #[serde(default = "default_base_url")]
    #[validate(length(min = 1, message = "Base URL cannot be empty"))]
    pub base_url: Cow<'static, str>,

    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, message = "Timeout must be at least one second"))]
    pub timeout_secs: u64,
}

impl Config {
    /// Environment values win over the file.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(username) = lookup(ENV_USERNAME) {
            self.username = Cow::Owned(username);
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = Cow::Owned(password);
        }
        if let Some(zone) = lookup(ENV_ZONE) {
            self.zone = Cow::Owned(zone);
        }
    }

    pub fn into_client_config(self) -> ClientConfig {
        ClientConfig::new(self.username, self.password, self.zone)
            .with_profile(self.profile.profile())
            .with_base_url(self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &"***")
            .field("password", &"***")
            .field("zone", &self.zone)
            .field("profile", &self.profile)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
