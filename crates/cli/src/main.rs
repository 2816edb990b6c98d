//! # Brighella
//!
//! HTTP front door that frames the page published in `_frame.<host>` TXT
//! records so the address bar keeps the original host.

mod bootstrap;
mod di;
mod server;

use brighella_api::AppState;
use brighella_domain::CliOverrides;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "brighella")]
#[command(version)]
#[command(about = "🎭 Masks DNS-published targets behind the requesting host")]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port (overrides PORT)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level or filter directive (e.g. "debug", "brighella=debug,hyper=warn")
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("🎭 Brighella starting...");
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        resolver = %config.dns.resolver,
        default_title = %config.frame.default_title,
        template = %config.template.path,
        "Configuration loaded"
    );

    let adapters = di::Adapters::new(&config);
    let use_cases = di::UseCases::new(&config, &adapters);

    let state = AppState {
        build_frame: use_cases.build_frame,
        renderer: adapters.renderer,
    };

    server::start_web_server(config.server.listen_address(), state).await
}
