use crate::opt::{Commands, Db, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use lumera_config::EngineConfig;
use lumera_core::diagnostic::DiagnosticEngine;
use lumera_core::practice::PracticeEngine;
use lumera_core::rewards::Rewards;
use lumera_utils::net::{ListenAddress, create_listener};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use url::Url;

mod app;
mod opt;
mod routes;
mod user;

const DEFAULT_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3030);

pub(crate) struct InnerAppConfig {
    diagnostic: DiagnosticEngine,
    practice: PracticeEngine,
}

#[derive(Clone)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(engine: &EngineConfig, rewards: Rewards) -> Self {
        Self(Arc::new(InnerAppConfig {
            diagnostic: DiagnosticEngine::new(engine, rewards.clone()),
            practice: PracticeEngine::new(engine, rewards),
        }))
    }

    pub fn diagnostic(&self) -> &DiagnosticEngine {
        &self.0.diagnostic
    }

    pub fn practice(&self) -> &PracticeEngine {
        &self.0.practice
    }
}

async fn run(opt: Run) -> Result<()> {
    let _guard = lumera_utils::tracing::setup(
        lumera_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn.clone())
            .env(opt.env.clone())
            .build(),
    )?;

    let engine = lumera_config::load(opt.engine_config.as_deref())
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to load engine config"))?;
    tracing::info!(?engine, "loaded engine config");

    let conn = Database::connect(build_connect_options(&opt.db, opt.database_url.clone())).await?;
    if opt.migrate {
        lumera_db::schema::apply(&conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to apply schema"))?;
        tracing::info!("database schema is up to date");
    }

    let app_config = AppConfig::new(&engine, Rewards::ledger(conn.clone()));
    let Run { host, port, origins, .. } = opt;
    let app = app::create_app(app_config, &origins, conn)?;

    let listener = create_listener(ListenAddress { host, port }, DEFAULT_ADDRESS).await?;
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: Url) -> ConnectOptions {
    let mut options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        options.max_connections(max_connections);
    }
    options.sqlx_logging_level(log::LevelFilter::Debug);
    options
}

fn print_config_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&lumera_config::json_schema())?);
    Ok(())
}

fn main() -> Result<()> {
    unsafe { env::set_var("RUST_BACKTRACE", "1") };

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
            Commands::ConfigSchema => print_config_schema()?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
