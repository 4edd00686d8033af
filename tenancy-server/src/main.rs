use anyhow::Result;
use clap::Parser;
use tenancy::dataset::list_bundled_datasets;
use tenancy_server::config::ServerConfig;
use tenancy_server::server;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct ServerArgs {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// Port to listen on [env: PORT, default: 4001]
    #[clap(short, long)]
    port: Option<u16>,
    /// Address to bind [env: TENANCY_BIND_ADDR, default: 0.0.0.0]
    #[clap(short, long)]
    bind: Option<String>,
    /// Dataset file path or bundled dataset name [env: TENANCY_DATASET]
    #[clap(short, long)]
    dataset: Option<String>,
    #[clap(long)]
    cors_origin: Option<String>,
    /// Print the bundled dataset names and exit
    #[clap(long)]
    list_datasets: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    setup_logging(&args.log_level);

    if args.list_datasets {
        for name in list_bundled_datasets() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = ServerConfig::from_env()
        .with_port(args.port)
        .with_bind_addr(args.bind)
        .with_dataset(args.dataset.as_deref())
        .with_cors_origin(args.cors_origin);

    info!("Starting server on port {} with dataset {}", config.port, config.dataset);
    server::start_server(&config).await?;

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("async_graphql=warn,{}", log_level)))
        .without_time()
        .init();
}
