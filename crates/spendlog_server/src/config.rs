use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "spendlog_server")]
#[command(about = "HTTP API for tracking expenses, installment plans and card bills")]
pub struct Args {
    /// SQLite database file; `:memory:` for a throwaway database
    /// (default: {data_dir}/spendlog.db)
    #[arg(long, env = "SPENDLOG_DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to the data directory (default: ~/.spendlog/)
    #[arg(short, long, env = "SPENDLOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, env = "SPENDLOG_BIND", default_value = "127.0.0.1:3001")]
    pub bind: SocketAddr,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, env = "SPENDLOG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Also write a daily rolling log file into this directory
    #[arg(long, env = "SPENDLOG_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Origin allowed to call the API; repeat for several. None allows any.
    #[arg(
        long = "allowed-origin",
        env = "SPENDLOG_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,
}

/// Resolved server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database: PathBuf,
    pub data_dir: PathBuf,
    pub bind: SocketAddr,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".spendlog")
}

impl ServerConfig {
    pub fn from_args(args: Args) -> Self {
        let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
        let database = args
            .database
            .unwrap_or_else(|| data_dir.join("spendlog.db"));
        Self {
            database,
            data_dir,
            bind: args.bind,
            log_level: args.log_level,
            log_dir: args.log_dir,
            allowed_origins: args
                .allowed_origins
                .into_iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }

    pub fn in_memory(&self) -> bool {
        self.database.as_os_str() == ":memory:"
    }
}
