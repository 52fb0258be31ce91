//! Connection settings shared by every command.

use clap::Args;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::path::PathBuf;

/// PostgreSQL reference database, configured from `ELEC_LCA_DB_*`.
#[derive(Args, Debug, Clone)]
pub struct DbConfig {
    #[arg(long = "db-host", env = "ELEC_LCA_DB_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-name", env = "ELEC_LCA_DB_NAME", default_value = "electricity_lca")]
    pub name: String,

    #[arg(long = "db-login", env = "ELEC_LCA_DB_LOGIN", default_value = "postgres")]
    pub login: String,

    #[arg(long = "db-pwd", env = "ELEC_LCA_DB_PWD", default_value = "", hide_env_values = true)]
    pub password: String,

    #[arg(long = "db-port", env = "ELEC_LCA_DB_PORT", default_value_t = 5432)]
    pub port: u16,
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.login);
        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    /// Open a small pool. A connection failure is fatal for the command.
    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        log::info!(
            "connecting to {}@{}:{}/{}",
            self.login,
            self.host,
            self.port,
            self.name
        );
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_with(self.connect_options())
            .await?;
        Ok(pool)
    }
}

/// Where the page commands get their reference tables and API data from.
#[derive(Args, Debug, Clone)]
pub struct SourceConfig {
    /// Backend API base URL
    #[arg(long, env = "ELEC_LCA_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Read the reference tables from a snapshot directory instead of PostgreSQL
    #[arg(long)]
    pub reference_dir: Option<PathBuf>,

    #[command(flatten)]
    pub db: DbConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        source: SourceConfig,
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "--api-url",
            "http://api.example:9000/",
            "--db-host",
            "db.example",
            "--db-port",
            "6543",
            "--reference-dir",
            "fixtures/reference",
        ]);
        assert_eq!(cli.source.api_url, "http://api.example:9000/");
        assert_eq!(cli.source.db.host, "db.example");
        assert_eq!(cli.source.db.port, 6543);
        assert_eq!(
            cli.source.reference_dir,
            Some(PathBuf::from("fixtures/reference"))
        );
    }

    #[test]
    fn connect_options_carry_host_and_database() {
        let config = DbConfig {
            host: "db.example".to_string(),
            name: "lca".to_string(),
            login: "reader".to_string(),
            password: "secret".to_string(),
            port: 6543,
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.example");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("lca"));
        assert_eq!(options.get_username(), "reader");
    }
}
