//! Server configuration: defaults, then YAML file, then `EMPLOYEES__*` env vars

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

pub const ENV_PREFIX: &str = "EMPLOYEES__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub employees: employee_service::Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, ignored when `RUST_LOG` is set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Layer defaults, the optional YAML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let cfg = AppConfig::load(None).expect("load");
            assert_eq!(cfg, AppConfig::default());
            assert_eq!(cfg.server.bind_addr.port(), 8080);
            assert_eq!(cfg.employees.base_path, "/api/v1");
            Ok(())
        });
    }

    #[test]
    fn test_yaml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "server.yaml",
                r#"
server:
  bind_addr: "0.0.0.0:9000"
employees:
  seed_demo_data: true
"#,
            )?;
            jail.set_env("EMPLOYEES__LOGGING__LEVEL", "debug");
            jail.set_env("EMPLOYEES__EMPLOYEES__BASE_PATH", "/api/v2");

            let cfg = AppConfig::load(Some(Path::new("server.yaml"))).expect("load");
            assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000".parse().expect("addr"));
            assert_eq!(cfg.logging.level, "debug");
            assert_eq!(cfg.employees.base_path, "/api/v2");
            assert!(cfg.employees.seed_demo_data);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            assert!(AppConfig::load(Some(Path::new("absent.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("server.yaml", "employees:\n  retention: 3\n")?;
            assert!(AppConfig::load(Some(Path::new("server.yaml"))).is_err());
            Ok(())
        });
    }
}
