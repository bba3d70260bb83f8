use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

// Default only; override SESSION_SECRET in any real deployment.
const DEFAULT_SESSION_SECRET: &str =
    "paws-rescue-dev-secret-0123456789-0123456789-0123456789-0123456789-0123456789";

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: String,
}

impl Server {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub path: String,
}

impl Database {
    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path)
    }
}

#[derive(Debug, Deserialize)]
pub struct Session {
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub session: Session,
}

impl Settings {
    /// Defaults, overridden by an optional `config.toml`, overridden by
    /// environment variables (`SERVER_PORT`, `DATABASE_PATH`, ...).
    pub fn new() -> Result<Self, ConfigError> {
        let config = Self::defaults(Config::builder())?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }

    fn defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", "3000")?
            .set_default("database.path", "paws.db")?
            .set_default("session.secret", DEFAULT_SESSION_SECRET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Defaults only; no file or environment source, so ambient variables
    // can't flip the assertions.
    #[test]
    fn defaults_build_a_usable_config() {
        let settings: Settings = Settings::defaults(Config::builder())
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.addr(), "0.0.0.0:3000");
        assert_eq!(settings.database.url(), "sqlite://paws.db");
        assert!(settings.session.secret.len() >= 64);
    }
}
