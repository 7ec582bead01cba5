//! Layered application configuration.
//!
//! Resolution order (lowest to highest priority):
//! 1. built-in defaults
//! 2. `application.yaml`
//! 3. `application-{profile}.yaml`
//! 4. `.env`, then `.env.{profile}` (loaded into the process environment,
//!    never overwriting variables that are already set)
//! 5. environment variables, by the `app.database.url` ↔ `APP_DATABASE_URL`
//!    convention
//!
//! The profile comes from `RA_PROFILE`, falling back to the argument.

use std::collections::HashMap;
use std::path::Path;

pub const PROFILE_ENV: &str = "RA_PROFILE";

pub const DATABASE_URL: &str = "app.database.url";
pub const DATABASE_MAX_CONNECTIONS: &str = "app.database.max_connections";
pub const SERVER_ADDR: &str = "app.server.addr";

#[derive(Debug)]
pub enum ConfigError {
    NotFound(String),
    TypeMismatch { key: String, expected: &'static str },
    /// An I/O or YAML error while reading a config file.
    Load(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Config key not found: {key}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}")
            }
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A scalar configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Bool(bool),
    Null,
}

impl ConfigValue {
    fn from_yaml(value: &serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Bool(b) => ConfigValue::Bool(*b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::String(n.to_string()),
            },
            serde_yaml::Value::String(s) => ConfigValue::String(s.clone()),
            serde_yaml::Value::Null => ConfigValue::Null,
            other => ConfigValue::String(format!("{other:?}")),
        }
    }
}

/// Conversion from a [`ConfigValue`] into a concrete type.
pub trait FromConfigValue: Sized {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError>;
}

fn mismatch(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
    }
}

impl FromConfigValue for String {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::String(s) => Ok(s.clone()),
            ConfigValue::Integer(i) => Ok(i.to_string()),
            ConfigValue::Bool(b) => Ok(b.to_string()),
            ConfigValue::Null => Err(mismatch(key, "String")),
        }
    }
}

impl FromConfigValue for i64 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Integer(i) => Ok(*i),
            ConfigValue::String(s) => s.trim().parse().map_err(|_| mismatch(key, "i64")),
            _ => Err(mismatch(key, "i64")),
        }
    }
}

impl FromConfigValue for u32 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        let wide = i64::from_config_value(value, key).map_err(|_| mismatch(key, "u32"))?;
        u32::try_from(wide).map_err(|_| mismatch(key, "u32"))
    }
}

/// Flat key/value configuration with dot-separated keys.
#[derive(Debug, Clone)]
pub struct AppConfig {
    values: HashMap<String, ConfigValue>,
    profile: String,
}

impl AppConfig {
    /// Load configuration from the current working directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), profile)
    }

    /// Load configuration, looking for YAML and `.env` files in `dir`.
    pub fn load_from(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile = std::env::var(PROFILE_ENV).unwrap_or_else(|_| profile.to_string());
        let mut values = defaults();

        load_yaml_file(&dir.join("application.yaml"), &mut values)?;
        load_yaml_file(&dir.join(format!("application-{profile}.yaml")), &mut values)?;

        let _ = dotenvy::from_path(dir.join(".env"));
        let _ = dotenvy::from_path(dir.join(format!(".env.{profile}")));

        let keys: Vec<String> = values.keys().cloned().collect();
        for key in keys {
            if let Ok(env_val) = std::env::var(env_name(&key)) {
                values.insert(key, ConfigValue::String(env_val));
            }
        }

        tracing::debug!(%profile, keys = values.len(), "configuration loaded");
        Ok(AppConfig { values, profile })
    }

    /// Build a config from a YAML string on top of the defaults. No files or
    /// environment variables are consulted.
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut values = defaults();
        load_yaml_str(yaml, &mut values)?;
        Ok(AppConfig {
            values,
            profile: profile.to_string(),
        })
    }

    pub fn set(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))?;
        V::from_config_value(value, key)
    }

    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn settings(&self) -> Result<Settings, ConfigError> {
        Ok(Settings {
            database_url: self.get(DATABASE_URL)?,
            max_connections: self.get(DATABASE_MAX_CONNECTIONS)?,
            server_addr: self.get(SERVER_ADDR)?,
        })
    }
}

/// Typed view of the keys the server needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub server_addr: String,
}

fn defaults() -> HashMap<String, ConfigValue> {
    let mut values = HashMap::new();
    values.insert(DATABASE_URL.to_string(), ConfigValue::String("sqlite::memory:".into()));
    values.insert(DATABASE_MAX_CONNECTIONS.to_string(), ConfigValue::Integer(5));
    values.insert(SERVER_ADDR.to_string(), ConfigValue::String("0.0.0.0:8080".into()));
    values
}

/// `app.database.url` → `APP_DATABASE_URL`.
pub fn env_name(key: &str) -> String {
    key.replace('.', "_").to_uppercase()
}

fn load_yaml_file(path: &Path, values: &mut HashMap<String, ConfigValue>) -> Result<(), ConfigError> {
    if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load(e.to_string()))?;
        load_yaml_str(&content, values)?;
    }
    Ok(())
}

fn load_yaml_str(content: &str, values: &mut HashMap<String, ConfigValue>) -> Result<(), ConfigError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    flatten_yaml("", &yaml, values);
    Ok(())
}

/// Flatten a YAML tree into dot-separated keys. Sequences are skipped.
fn flatten_yaml(prefix: &str, value: &serde_yaml::Value, out: &mut HashMap<String, ConfigValue>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => format!("{other:?}"),
                };
                let full_key = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_yaml(&full_key, v, out);
            }
        }
        serde_yaml::Value::Sequence(_) => {}
        leaf => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), ConfigValue::from_yaml(leaf));
            }
        }
    }
}
