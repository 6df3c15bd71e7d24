//! Configuration management for the library catalog server

use config::{Config, ConfigError, Environment};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::{AppError, AppResult};

/// Database connection settings, one field per environment variable
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Driver identifier (`DIALECT`)
    pub dialect: String,
    pub host: String,
    /// Port as given in `DBPORT`, parsed only when connecting
    pub port: String,
    pub user: String,
    /// Database name (`NAME`)
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    /// Load configuration from the given environment source
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("log_level", "info")?
            .set_default("log_format", "pretty")?
            .add_source(environment)
            .build()?;

        Ok(Self {
            database: DatabaseConfig {
                dialect: settings.get_string("dialect")?,
                host: settings.get_string("host")?,
                port: settings.get_string("dbport")?,
                user: settings.get_string("user")?,
                name: settings.get_string("name")?,
                password: settings.get_string("password")?,
            },
            logging: LoggingConfig {
                level: settings.get_string("log_level")?,
                format: settings.get_string("log_format")?,
            },
        })
    }
}

impl DatabaseConfig {
    /// Build Postgres connection options (TLS disabled)
    pub fn connect_options(&self) -> AppResult<PgConnectOptions> {
        match self.dialect.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => {}
            other => {
                return Err(AppError::Connection(format!("unsupported dialect: {:?}", other)));
            }
        }

        let port: u16 = self
            .port
            .trim()
            .parse()
            .map_err(|_| AppError::Connection(format!("invalid port: {:?}", self.port)))?;

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable))
    }

    /// Connection description safe to log (password omitted)
    pub fn describe(&self) -> String {
        format!(
            "{}://{}@{}:{}/{}",
            self.dialect, self.user, self.host, self.port, self.name
        )
    }
}
