use crate::env::Env;
use crate::mode::RuntimeMode;
use crate::models::{
    ActionOptions, CloudCredentials, CloudProvider, LocalProvider, UploadConfig, CLOUDINARY,
    LOCAL_SIZE_LIMIT,
};

pub const CLOUDINARY_NAME: &str = "CLOUDINARY_NAME";
pub const CLOUDINARY_KEY: &str = "CLOUDINARY_KEY";
pub const CLOUDINARY_SECRET: &str = "CLOUDINARY_SECRET";

/// Pick the upload backend for `mode`.
///
/// Production stores files on Cloudinary with credentials read from the
/// environment; every other mode keeps them on local disk. Credentials are
/// not validated here, the backend rejects bad ones.
pub fn upload_config(env: &impl Env, mode: RuntimeMode) -> UploadConfig {
    match mode {
        RuntimeMode::Production => {
            tracing::debug!("Upload provider: {}", CLOUDINARY);
            UploadConfig::Cloudinary(CloudProvider {
                provider: CLOUDINARY.to_string(),
                credentials: CloudCredentials {
                    cloud_name: env.string(CLOUDINARY_NAME),
                    api_key: env.string(CLOUDINARY_KEY),
                    api_secret: env.string(CLOUDINARY_SECRET),
                },
                action_options: ActionOptions::default(),
            })
        }
        RuntimeMode::Development | RuntimeMode::Test => {
            tracing::debug!("Upload provider: local ({} bytes)", LOCAL_SIZE_LIMIT);
            UploadConfig::Local(LocalProvider {
                size_limit_bytes: LOCAL_SIZE_LIMIT,
            })
        }
    }
}
