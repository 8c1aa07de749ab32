use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Read access to environment variables, injected into every provider.
///
/// Only `var` is required; the typed reads are built on top of it.
pub trait Env {
    fn var(&self, name: &str) -> Option<String>;

    fn string(&self, name: &str) -> Option<String> {
        self.var(name)
    }

    fn string_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_string())
    }

    /// Integer read. Values that do not parse fall back to `default`.
    ///
    /// The whole trimmed value must be an integer: `8080abc` is rejected
    /// rather than read as its numeric prefix.
    fn int_or<T>(&self, name: &str, default: T) -> T
    where
        T: FromStr + Display + Copy,
    {
        match self.var(name) {
            Some(raw) => match raw.trim().parse::<T>() {
                Ok(v) => v,
                Err(_) => {
                    tracing::warn!("{}={:?} is not a valid integer, using {}", name, raw, default);
                    default
                }
            },
            None => default,
        }
    }

    /// Delimited-list read. Unset yields an empty list.
    fn array(&self, name: &str) -> Vec<String> {
        self.var(name).map(|raw| parse_list(&raw)).unwrap_or_default()
    }
}

/// Parse `a,b,c`, `[a, b, c]` or `["a","b"]` into its items.
///
/// Empty items are kept, so `a,,b` has three items and a set-but-empty
/// value yields one empty item.
pub fn parse_list(raw: &str) -> Vec<String> {
    let inner = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(raw);

    inner
        .split(',')
        .map(|item| item.trim().trim_matches('"').to_string())
        .collect()
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl Env for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Overrides looked up first, then the base environment.
pub struct Layered<'a, B: Env> {
    overrides: &'a MapEnv,
    base: &'a B,
}

impl<'a, B: Env> Layered<'a, B> {
    pub fn new(overrides: &'a MapEnv, base: &'a B) -> Self {
        Self { overrides, base }
    }
}

impl<B: Env> Env for Layered<'_, B> {
    fn var(&self, name: &str) -> Option<String> {
        self.overrides.var(name).or_else(|| self.base.var(name))
    }
}
