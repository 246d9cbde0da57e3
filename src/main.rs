//! Shopping Cart Optimizer API entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use cart_optimizer::services::FileSessionStore;
use cart_optimizer::{OptimizerError, OptimizerResult, OptimizerServer, logging};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "cart-optimizer")]
#[command(about = "Shopping cart optimization API server")]
struct Args {
    /// Host for the HTTP server
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value = "5050")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Base directory for the log file and persisted sessions
    #[arg(long, default_value = "./logs")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> OptimizerResult<()> {
    let args = Args::parse();

    logging::init_tracing(&args.log_level, &args.data_dir)?;

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| OptimizerError::ServerStartup(format!("Invalid bind address: {e}")))?;

    info!("Starting Shopping Cart Optimizer API at http://{bind_address}");

    let store = FileSessionStore::new(args.data_dir);
    let server = OptimizerServer::new(store);
    server.run(bind_address).await
}
