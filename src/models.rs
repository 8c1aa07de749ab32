use serde::Serialize;
use serde_json::{Map, Value};

/// Byte ceiling for uploads stored on local disk (100 MiB)
pub const LOCAL_SIZE_LIMIT: u64 = 100 * 1024 * 1024;

pub const CLOUDINARY: &str = "cloudinary";

/// Which upload backend the host should use, and its parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UploadConfig {
    Cloudinary(CloudProvider),
    Local(LocalProvider),
}

impl UploadConfig {
    pub fn provider_name(&self) -> &str {
        match self {
            UploadConfig::Cloudinary(cloud) => &cloud.provider,
            UploadConfig::Local(_) => "local",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudProvider {
    pub provider: String,
    #[serde(rename = "providerOptions")]
    pub credentials: CloudCredentials,
    pub action_options: ActionOptions,
}

/// Credentials copied verbatim from the environment; absent values stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloudCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
}

impl CloudCredentials {
    /// Names of the credential fields that were not supplied
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("cloud_name", &self.cloud_name),
            ("api_key", &self.api_key),
            ("api_secret", &self.api_secret),
        ]
        .into_iter()
        .filter(|(_, v)| v.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Per-action backend options, left empty
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionOptions {
    pub upload: Map<String, Value>,
    pub delete: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalProvider {
    #[serde(rename = "sizeLimit")]
    pub size_limit_bytes: u64,
}

/// Resolved server runtime options
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub app_keys: Vec<String>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    pub level: String,
    pub expose_in_context: bool,
    pub requests: bool,
}
