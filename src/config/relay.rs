//! Mail relay configuration
//!
//! The relay is addressed by three static tokens (service id, template id,
//! public key) plus an optional private access token. Defaults point at the
//! portfolio's own EmailJS account so the form works out of the box.

use serde::Deserialize;

/// EmailJS REST endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_portfolio";
pub const DEFAULT_TEMPLATE_ID: &str = "template_93kkmmi";
pub const DEFAULT_PUBLIC_KEY: &str = "5Y7k4v5_VCfXzXPto";

/// Resolved relay settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// POST target for the send request
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Sent as `user_id`
    pub public_key: String,
    /// Private key, only needed when the account enforces it
    pub access_token: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
            access_token: None,
        }
    }
}

/// Relay settings as loaded from config file
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FileRelay {
    pub endpoint: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub access_token: Option<String>,
}

impl FileRelay {
    /// Same shape, read from TERMFOLIO_RELAY_* environment variables
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            endpoint: var("TERMFOLIO_RELAY_ENDPOINT"),
            service_id: var("TERMFOLIO_RELAY_SERVICE_ID"),
            template_id: var("TERMFOLIO_RELAY_TEMPLATE_ID"),
            public_key: var("TERMFOLIO_RELAY_PUBLIC_KEY"),
            access_token: var("TERMFOLIO_RELAY_ACCESS_TOKEN"),
        }
    }
}

impl RelayConfig {
    /// Resolve env > file > default, field by field
    pub fn from_file(file: Option<FileRelay>, env: FileRelay) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            endpoint: env.endpoint.or(file.endpoint).unwrap_or(defaults.endpoint),
            service_id: env
                .service_id
                .or(file.service_id)
                .unwrap_or(defaults.service_id),
            template_id: env
                .template_id
                .or(file.template_id)
                .unwrap_or(defaults.template_id),
            public_key: env
                .public_key
                .or(file.public_key)
                .unwrap_or(defaults.public_key),
            access_token: env.access_token.or(file.access_token),
        }
    }
}
