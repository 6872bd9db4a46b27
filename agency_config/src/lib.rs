use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};

use agency_models::email_address::EmailAddressWithName;
use anyhow::Context;
use config::{Environment, File, FileFormat};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use url::Url;

/// Defaults, always loaded first.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

pub const DEV_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.dev.toml");

/// Environment variable containing additional config files, separated like
/// `PATH`.
pub const CONFIG_PATHS_ENV: &str = "AGENCY_CONFIG";

/// Prefix of environment variables overriding single values, e.g.
/// `AGENCY__EMAIL__API_KEY`.
pub const ENV_PREFIX: &str = "AGENCY";

/// Load the config from the defaults, the files listed in `AGENCY_CONFIG`
/// and the environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    load_with(&paths, environment())
}

/// Load the config from the defaults, `paths` and `environment`, each
/// overriding the previous values.
pub fn load_with(
    paths: &[impl AsRef<Path>],
    environment: Environment,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(environment)
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Environment variables prefixed with `AGENCY__`, nested keys separated by
/// `__`. Empty variables are ignored.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .ignore_empty(true)
}

pub fn dev_config_path() -> PathBuf {
    DEV_CONFIG_PATH.into()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub audience: AudienceConfig,
    #[serde(default)]
    pub leads: LeadsConfig,
    pub contact: ContactConfig,
    pub bot_detection: Option<BotDetectionConfig>,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
    pub real_ip: Option<HttpRealIpConfig>,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HttpRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub api_url: Url,
    #[serde(default, deserialize_with = "secret")]
    pub api_key: Option<SecretString>,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Default, Deserialize)]
pub struct AudienceConfig {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeadsConfig {
    pub endpoint: Option<Url>,
    #[serde(default, deserialize_with = "secret")]
    pub token: Option<SecretString>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub inbox: EmailAddressWithName,
    pub brand: String,
    pub source_detail: String,
}

#[derive(Debug, Deserialize)]
pub struct BotDetectionConfig {
    pub verify_endpoint: Url,
    #[serde(default, deserialize_with = "secret")]
    pub secret: Option<SecretString>,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: String,
    /// Reported environment, e.g. `production` or `staging`.
    pub environment: Option<String>,
}

fn secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|secret| !secret.is_empty())
        .map(SecretString::from))
}
