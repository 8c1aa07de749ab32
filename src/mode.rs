use std::fmt;

use crate::env::Env;

pub const NODE_ENV: &str = "NODE_ENV";

/// Runtime mode the host is started in.
///
/// Only exact, lowercase names are recognized; anything else is `Development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    Production,
    #[default]
    Development,
    Test,
}

impl RuntimeMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "production" => Some(Self::Production),
            "development" => Some(Self::Development),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    /// Parse with the development fallback
    pub fn parse(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            if !name.is_empty() {
                tracing::warn!(
                    "Unrecognized {} value {:?}, falling back to {}",
                    NODE_ENV,
                    name,
                    Self::default()
                );
            }
            Self::default()
        })
    }

    pub fn from_env(env: &impl Env) -> Self {
        env.string(NODE_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn unset_is_development() {
        assert_eq!(RuntimeMode::from_env(&MapEnv::new()), RuntimeMode::Development);
    }

    #[test]
    fn recognized_names() {
        for mode in [RuntimeMode::Production, RuntimeMode::Development, RuntimeMode::Test] {
            let env = MapEnv::new().with(NODE_ENV, mode.as_str());
            assert_eq!(RuntimeMode::from_env(&env), mode);
        }
    }

    #[test]
    fn near_misses_fall_back() {
        for raw in ["Production", "prod", " production", "staging"] {
            let env = MapEnv::new().with(NODE_ENV, raw);
            let mode = RuntimeMode::from_env(&env);
            assert!(!mode.is_production(), "{raw:?} must not select production");
            assert_eq!(mode, RuntimeMode::Development);
        }
    }
}
