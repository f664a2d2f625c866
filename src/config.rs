use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "ENERGY_MORPH__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    /// `["*"]` allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            request_timeout_secs: 30,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible responses; entropy when unset
    pub random_seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Defaults, then the TOML file (if present), then `ENERGY_MORPH__SECTION__KEY`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does/not/exist.toml").unwrap();
        assert_eq!(cfg.server.port, 8001);
        assert!(cfg.server.allows_any_origin());
        assert!(cfg.simulation.random_seed.is_none());
    }

    #[test]
    fn test_file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "app.toml",
                r#"
                [server]
                port = 9000
                cors_origins = ["http://localhost:3000"]

                [simulation]
                random_seed = 7
                "#,
            )?;
            jail.set_env("ENERGY_MORPH__SERVER__PORT", "9100");

            let cfg = Config::load_from("app.toml").map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.port, 9100);
            assert_eq!(cfg.server.host, "0.0.0.0");
            assert!(!cfg.server.allows_any_origin());
            assert_eq!(cfg.simulation.random_seed, Some(7));
            Ok(())
        });
    }
}
