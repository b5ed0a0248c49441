use clap::{Parser, Subcommand};
use ferrous_probe_api::dto::CheckResponse;
use ferrous_probe_api::AppState;
use ferrous_probe_domain::{CliOverrides, QueryRequest};
use std::net::{IpAddr, SocketAddr};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "ferrous-probe")]
#[command(version)]
#[command(about = "Ferrous Probe - DNS propagation checker across public resolvers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long, global = true)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Start the HTTP API (default)
    Serve,

    /// Query every configured resolver once and print the JSON result
    Check {
        domain: String,

        /// Record type (A, AAAA, CNAME, MX, NS, PTR, SOA, SRV, TXT, CAA)
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let services = di::Services::new(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting Ferrous Probe v{}", env!("CARGO_PKG_VERSION"));

            let app_state = AppState {
                check_propagation: services.check_propagation,
            };

            let bind_ip: IpAddr = config.server.bind_address.parse()?;
            let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

            server::start_web_server(web_addr, app_state).await?;

            info!("Server shutdown complete");
        }
        Command::Check {
            domain,
            record_type,
        } => {
            let request =
                QueryRequest::from_params(Some(domain.as_str()), Some(record_type.as_str()))?;
            let response = services.check_propagation.execute(&request).await;

            println!(
                "{}",
                serde_json::to_string_pretty(&CheckResponse::from(response))?
            );
        }
    }

    Ok(())
}
