use actix_web::{App, HttpServer};
use clap::Parser;
use log::{error, info};

use clash_subconverter::interfaces::converter::{convert, ConvertRequest};
use clash_subconverter::settings::{override_listen, update_settings_from_file};
use clash_subconverter::utils::logging::{logger_builder, LOG_FILTER_ENV};
use clash_subconverter::web_handlers::interfaces;
use clash_subconverter::Settings;

/// Convert proxy share links and subscriptions into Clash configs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Subscription URL, share link or body to convert directly instead of starting the server
    #[arg(long, value_name = "SOURCE")]
    url: Option<String>,

    /// Output file path for the generated config (must be used with --url)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Name written into the generated config
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Check if only one of url or output is provided
    if args.url.is_some() != args.output.is_some() {
        eprintln!("Error: --url and -o/--output must be used together");
        std::process::exit(1);
    }

    if let Some(path) = args.config.as_deref() {
        if let Err(e) = update_settings_from_file(path) {
            eprintln!("Error: failed to load {}: {}", path, e);
            std::process::exit(1);
        }
    }

    // Initialize the logger; RUST_LOG wins over the configured level
    logger_builder(LOG_FILTER_ENV, &Settings::current().log_level).init();
    if let Some(path) = args.config.as_deref() {
        info!("Loaded settings from '{}'", path);
    }
    override_listen(args.address, args.port);

    let settings = Settings::current();

    if let (Some(source), Some(output_file)) = (args.url, args.output) {
        info!("Converting {} into {}", source, output_file);

        let request = ConvertRequest {
            subscription_url: Some(source),
            config_name: args.name,
        };
        let origin = format!("http://{}", settings.bind_address());

        match convert(&request, &origin, &settings).await {
            Ok(result) => match std::fs::write(&output_file, &result.yaml) {
                Ok(_) => info!(
                    "Wrote {} nodes to {} (share link: {})",
                    result.node_count, output_file, result.share_url
                ),
                Err(e) => {
                    error!("Failed to write to output file: {}", e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                error!("Conversion failed: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let listen_address = settings.bind_address();
    info!("Clash subconverter starting on {}", listen_address);

    HttpServer::new(|| App::new().configure(interfaces::config))
        .bind(listen_address)?
        .run()
        .await
}
