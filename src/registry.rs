use serde::Serialize;
use serde_json::Value;

use crate::config::server_config;
use crate::env::Env;
use crate::error::AppError;
use crate::mode::RuntimeMode;
use crate::models::{LoggingConfig, ServerConfig, UploadConfig};
use crate::upload::upload_config;

/// Both producers' output, resolved once against one environment
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRegistry {
    pub mode: RuntimeMode,
    pub upload: UploadConfig,
    pub server: ServerConfig,
}

// ─── Document Shape ───────────────────────────────────────────────

#[derive(Serialize)]
struct Document<'a> {
    plugins: PluginsSection<'a>,
    server: ServerSection<'a>,
}

#[derive(Serialize)]
struct PluginsSection<'a> {
    upload: PluginEntry<'a>,
}

#[derive(Serialize)]
struct PluginEntry<'a> {
    config: &'a UploadConfig,
}

#[derive(Serialize)]
struct ServerSection<'a> {
    host: &'a str,
    port: u16,
    app: AppSection<'a>,
    logger: &'a LoggingConfig,
}

#[derive(Serialize)]
struct AppSection<'a> {
    keys: &'a [String],
}

/// Part of the document to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    All,
    Plugins,
    Server,
}

impl std::str::FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Section::All),
            "plugins" => Ok(Section::Plugins),
            "server" => Ok(Section::Server),
            other => Err(AppError::UnknownSection(other.to_string())),
        }
    }
}

/// Advisory finding about a resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingCloudCredential(&'static str),
    NoAppKeys,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingCloudCredential(field) => {
                write!(f, "Cloudinary credential '{}' is not set", field)
            }
            Diagnostic::NoAppKeys => write!(f, "APP_KEYS is empty"),
        }
    }
}

impl ConfigRegistry {
    /// Resolve the mode from `NODE_ENV` and run both producers
    pub fn load(env: &impl Env) -> Self {
        Self::load_with_mode(env, RuntimeMode::from_env(env))
    }

    pub fn load_with_mode(env: &impl Env, mode: RuntimeMode) -> Self {
        let registry = Self {
            mode,
            upload: upload_config(env, mode),
            server: server_config(env),
        };
        tracing::info!(
            "Resolved configuration: mode={} upload={} server={}:{}",
            registry.mode,
            registry.upload.provider_name(),
            registry.server.host,
            registry.server.port
        );
        registry
    }

    fn document(&self) -> Document<'_> {
        Document {
            plugins: PluginsSection {
                upload: PluginEntry { config: &self.upload },
            },
            server: ServerSection {
                host: &self.server.host,
                port: self.server.port,
                app: AppSection { keys: &self.server.app_keys },
                logger: &self.server.logging,
            },
        }
    }

    pub fn to_document(&self) -> Result<Value, AppError> {
        Ok(serde_json::to_value(self.document())?)
    }

    pub fn section(&self, section: Section) -> Result<Value, AppError> {
        let doc = self.document();
        let value = match section {
            Section::All => return self.to_document(),
            Section::Plugins => serde_json::to_value(&doc.plugins)?,
            Section::Server => serde_json::to_value(&doc.server)?,
        };
        Ok(value)
    }

    /// Things the host is likely to reject later. Never fatal here.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        if self.mode.is_production() {
            if let UploadConfig::Cloudinary(cloud) = &self.upload {
                found.extend(
                    cloud
                        .credentials
                        .missing()
                        .into_iter()
                        .map(Diagnostic::MissingCloudCredential),
                );
            }
        }
        if self.server.app_keys.iter().all(String::is_empty) {
            found.push(Diagnostic::NoAppKeys);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use serde_json::json;

    #[test]
    fn development_document_shape() {
        let env = MapEnv::new().with("APP_KEYS", "k1,k2");
        let doc = ConfigRegistry::load(&env).to_document().unwrap();
        assert_eq!(
            doc,
            json!({
                "plugins": { "upload": { "config": { "sizeLimit": 104857600 } } },
                "server": {
                    "host": "0.0.0.0",
                    "port": 1337,
                    "app": { "keys": ["k1", "k2"] },
                    "logger": { "level": "info", "exposeInContext": true, "requests": true }
                }
            })
        );
    }

    #[test]
    fn production_document_uses_cloudinary() {
        let env = MapEnv::new()
            .with("NODE_ENV", "production")
            .with("CLOUDINARY_NAME", "demo")
            .with("CLOUDINARY_KEY", "key")
            .with("CLOUDINARY_SECRET", "secret");
        let registry = ConfigRegistry::load(&env);
        assert_eq!(registry.mode, RuntimeMode::Production);

        let plugins = registry.section(Section::Plugins).unwrap();
        assert_eq!(plugins["upload"]["config"]["provider"], "cloudinary");
        assert_eq!(plugins["upload"]["config"]["providerOptions"]["api_secret"], "secret");
        assert!(plugins["upload"]["config"].get("sizeLimit").is_none());
    }

    #[test]
    fn explicit_mode_overrides_node_env() {
        let env = MapEnv::new().with("NODE_ENV", "production");
        let registry = ConfigRegistry::load_with_mode(&env, RuntimeMode::Development);
        assert!(matches!(registry.upload, UploadConfig::Local(_)));
    }

    #[test]
    fn server_section_only() {
        let env = MapEnv::new().with("HOST", "example.com").with("PORT", "8080");
        let server = ConfigRegistry::load(&env).section(Section::Server).unwrap();
        assert_eq!(server["host"], "example.com");
        assert_eq!(server["port"], 8080);
        assert!(server.get("plugins").is_none());
    }

    #[test]
    fn section_names() {
        assert_eq!("all".parse::<Section>().unwrap(), Section::All);
        assert_eq!("server".parse::<Section>().unwrap(), Section::Server);
        assert!(matches!(
            "database".parse::<Section>(),
            Err(AppError::UnknownSection(name)) if name == "database"
        ));
    }

    #[test]
    fn diagnostics_report_missing_values() {
        let env = MapEnv::new()
            .with("NODE_ENV", "production")
            .with("CLOUDINARY_NAME", "demo");
        let found = ConfigRegistry::load(&env).diagnostics();
        assert_eq!(
            found,
            vec![
                Diagnostic::MissingCloudCredential("api_key"),
                Diagnostic::MissingCloudCredential("api_secret"),
                Diagnostic::NoAppKeys,
            ]
        );
    }

    #[test]
    fn blank_app_keys_are_reported() {
        for raw in ["", ",", "[]"] {
            let env = MapEnv::new().with("APP_KEYS", raw);
            let found = ConfigRegistry::load(&env).diagnostics();
            assert_eq!(found, vec![Diagnostic::NoAppKeys], "APP_KEYS={raw:?}");
        }
    }

    #[test]
    fn diagnostics_clean_in_development_with_keys() {
        let env = MapEnv::new().with("APP_KEYS", "a");
        assert!(ConfigRegistry::load(&env).diagnostics().is_empty());
    }
}
