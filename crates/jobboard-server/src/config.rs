use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use jobboard_api::{ApiConfig, router::normalize_base_path};
use jobboard_common::error::{JobboardError, Result};
use jobboard_storage::{DiskCollection, JobCollection, MemoryCollection};

const DB_NAME_ENV: &str = "JOBBOARD_DB_NAME";
const CORS_ORIGINS_ENV: &str = "JOBBOARD_CORS_ORIGINS";

#[derive(Parser, Debug)]
#[command(name = "jobboard", about = "Job listing management service")]
pub struct Cli {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8001")]
    pub port: u16,

    #[arg(long, default_value = "/api")]
    pub base_path: String,

    #[arg(long, value_enum, default_value_t = StorageKind::Disk)]
    pub storage: StorageKind,

    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Database directory under the data dir. Falls back to JOBBOARD_DB_NAME.
    #[arg(long)]
    pub db_name: Option<String>,

    /// Comma-separated allowed origins. Falls back to JOBBOARD_CORS_ORIGINS, then `*`.
    #[arg(long)]
    pub cors_origins: Option<String>,

    #[arg(long, default_value_t = false)]
    pub disable_maintenance_routes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve the HTTP API (default).
    Serve,
    /// Replace all stored jobs with the sample batch and exit.
    Seed,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Disk,
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub storage: StorageKind,
    pub data_dir: PathBuf,
    pub db_name: String,
    pub api: ApiConfig,
    pub command: Command,
}

impl ServerConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::resolve(
            cli,
            std::env::var(DB_NAME_ENV).ok(),
            std::env::var(CORS_ORIGINS_ENV).ok(),
        )
    }

    fn resolve(cli: Cli, env_db_name: Option<String>, env_cors: Option<String>) -> Result<Self> {
        if cli.port == 0 {
            return Err(JobboardError::InvalidArgument(
                "--port must be non-zero".to_string(),
            ));
        }

        let db_name = cli
            .db_name
            .or(env_db_name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "jobboard".to_string());

        let cors_origins = cli
            .cors_origins
            .or(env_cors)
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            addr: format!("{}:{}", cli.host, cli.port),
            storage: cli.storage,
            data_dir: PathBuf::from(cli.data_dir),
            db_name,
            api: ApiConfig {
                base_path: normalize_base_path(&cli.base_path)?,
                cors_origins,
                maintenance_routes: !cli.disable_maintenance_routes,
            },
            command: cli.command.unwrap_or(Command::Serve),
        })
    }

    pub async fn open_collection(&self) -> Result<Arc<dyn JobCollection>> {
        let collection: Arc<dyn JobCollection> = match self.storage {
            StorageKind::Disk => {
                Arc::new(DiskCollection::open(&self.data_dir, &self.db_name).await?)
            }
            StorageKind::Memory => Arc::new(MemoryCollection::new()),
        };
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("jobboard").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_serve_with_wildcard_cors() {
        let config = ServerConfig::resolve(parse(&[]), None, None).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8001");
        assert_eq!(config.command, Command::Serve);
        assert_eq!(config.storage, StorageKind::Disk);
        assert_eq!(config.db_name, "jobboard");
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.api.cors_origins, vec!["*".to_string()]);
        assert!(config.api.maintenance_routes);
    }

    #[test]
    fn flags_take_precedence_over_env() {
        let cli = parse(&[
            "--db-name",
            "from_flag",
            "--cors-origins",
            "http://a.test, http://b.test",
            "--base-path",
            "v1/",
            "--disable-maintenance-routes",
            "seed",
        ]);
        let config = ServerConfig::resolve(
            cli,
            Some("from_env".to_string()),
            Some("http://env.test".to_string()),
        )
        .unwrap();

        assert_eq!(config.db_name, "from_flag");
        assert_eq!(
            config.api.cors_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.api.base_path, "/v1");
        assert!(!config.api.maintenance_routes);
        assert_eq!(config.command, Command::Seed);
    }

    #[test]
    fn env_fills_missing_flags() {
        let config = ServerConfig::resolve(
            parse(&["--storage", "memory"]),
            Some("jobs_demo".to_string()),
            Some("http://env.test".to_string()),
        )
        .unwrap();
        assert_eq!(config.db_name, "jobs_demo");
        assert_eq!(config.api.cors_origins, vec!["http://env.test".to_string()]);
        assert_eq!(config.storage, StorageKind::Memory);
    }

    #[test]
    fn rejects_zero_port() {
        let err = ServerConfig::resolve(parse(&["--port", "0"]), None, None).unwrap_err();
        assert!(matches!(err, JobboardError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn opens_disk_collection_under_db_name() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_string_lossy().to_string();
        let config =
            ServerConfig::resolve(parse(&["--data-dir", &data_dir]), None, None).unwrap();

        let collection = config.open_collection().await.unwrap();
        collection.ping().await.unwrap();
        assert!(temp_dir.path().join("jobboard").join("jobs").is_dir());
    }
}
