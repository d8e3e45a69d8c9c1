use std::env;

use crate::error::ConfigError;

pub const ENV_API_USER: &str = "NAMECHEAP_API_USER";
pub const ENV_API_KEY: &str = "NAMECHEAP_API_KEY";
pub const ENV_USER_NAME: &str = "NAMECHEAP_USER_NAME";
pub const ENV_CLIENT_IP: &str = "NAMECHEAP_CLIENT_IP";

/// Global parameters sent with every Namecheap command.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_user: String,
    api_key: String,
    user_name: String,
    client_ip: String,
}

impl Credentials {
    pub fn new(api_user: String, api_key: String, user_name: String, client_ip: String) -> Self {
        Self {
            api_user,
            api_key,
            user_name,
            client_ip,
        }
    }

    /// Reads credentials from `NAMECHEAP_*` variables. `NAMECHEAP_USER_NAME`
    /// falls back to the API user, which is what Namecheap expects for
    /// accounts acting on their own domains.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let api_user = require(ENV_API_USER)?;
        let api_key = require(ENV_API_KEY)?;
        let client_ip = require(ENV_CLIENT_IP)?;
        let user_name = lookup(ENV_USER_NAME)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| api_user.clone());

        Ok(Self::new(api_user, api_key, user_name, client_ip))
    }

    pub fn api_user(&self) -> &str {
        &self.api_user
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn client_ip(&self) -> &str {
        &self.client_ip
    }

    pub(crate) fn global_params(&self) -> [(&'static str, &str); 4] {
        [
            ("ApiUser", self.api_user()),
            ("ApiKey", self.api_key()),
            ("UserName", self.user_name()),
            ("ClientIp", self.client_ip()),
        ]
    }
}
