use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "lumera", about = "Adaptive assessment service")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
    /// Print the JSON schema of the engine config file
    ConfigSchema,
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DATABASE_URL", help = "sqlite:// or postgres:// url")]
    pub(crate) database_url: Url,

    #[command(flatten)]
    pub(crate) db: Db,

    #[arg(long, help = "Create missing tables before serving")]
    pub(crate) migrate: bool,

    #[arg(short = 'c', long, help = "YAML file with engine settings, defaults apply without it")]
    pub(crate) engine_config: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Origins allowed by CORS")]
    pub(crate) origins: Vec<String>,

    #[arg(long = "sentry-dsn", env = "SENTRY_DSN", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", help = "Set the environment used by sentry")]
    pub(crate) env: String,
}
