use crate::env::Env;
use crate::models::{LoggingConfig, ServerConfig};

pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const APP_KEYS: &str = "APP_KEYS";
pub const LOG_LEVEL: &str = "STRAPI_LOG_LEVEL";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 1337;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolve the server runtime options
pub fn server_config(env: &impl Env) -> ServerConfig {
    ServerConfig {
        host: env.string_or(HOST, DEFAULT_HOST),
        port: env.int_or(PORT, DEFAULT_PORT),
        app_keys: env.array(APP_KEYS),
        logging: LoggingConfig {
            level: env.string_or(LOG_LEVEL, DEFAULT_LOG_LEVEL), // debug, info, warn, error
            expose_in_context: true,
            requests: true,
        },
    }
}
