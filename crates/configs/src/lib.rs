use std::io;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

/// Largest accepted `store.id_start`. Leaves the issuer room to count well past
/// any realistic number of creates without reaching `i64::MAX`, and keeps ids
/// exact for JSON clients that read numbers as doubles.
pub const MAX_ID_START: i64 = (1 << 53) - 1;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Heroes returned per page when paging with `lastHeroId`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Seed the built-in hero roster at startup.
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
    /// First identifier handed out by the issuer.
    #[serde(default = "default_id_start")]
    pub id_start: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            seed_defaults: default_seed_defaults(),
            id_start: default_id_start(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 5000 }
fn default_page_size() -> usize { 4 }
fn default_seed_defaults() -> bool { true }
fn default_id_start() -> i64 { 1 }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file if present, otherwise defaults with `SERVER_HOST`, `PORT`
    /// and `TOKIO_WORKER_THREADS` applied. Always normalized and validated.
    pub fn load_and_validate() -> Result<Self> {
        Self::load_with(&config_path(), |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load_and_validate`] with an explicit path and variable lookup.
    /// Only a missing file falls back to the environment; unreadable or
    /// malformed files are errors.
    pub fn load_with<F>(path: &str, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_vars(var)?,
            Err(e) => return Err(e.context(format!("cannot load config from {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whichever variables are set. A set but unparseable
    /// value is an error rather than a silent default.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(host) = var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = var("PORT") {
            cfg.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("PORT {port:?} is not a valid port: {e}"))?;
        }
        if let Some(threads) = var("TOKIO_WORKER_THREADS") {
            let threads = threads
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow!("TOKIO_WORKER_THREADS {threads:?} is not a number: {e}"))?;
            cfg.server.worker_threads = Some(threads);
        }
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.store.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(anyhow!("store.page_size must be >= 1"));
        }
        if !(1..=MAX_ID_START).contains(&self.id_start) {
            return Err(anyhow!("store.id_start must be in 1..={MAX_ID_START}"));
        }
        Ok(())
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|io| io.kind() == io::ErrorKind::NotFound)
}
