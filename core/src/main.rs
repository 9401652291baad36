use jetton_client::address::parse_address;
use jetton_client::scenario::run_capped_supply;
use jetton_client::{
    load_config, AppConfig, ClientError, JettonDataView, JettonMinter, JettonMinterConfig,
    JettonMinterContent, Sandbox,
};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: jetton-client [state|scenario]";

/// Deploy a fresh minter and print its state.
fn print_state(config: &AppConfig) -> Result<(), ClientError> {
    let mut sandbox = Sandbox::from_config(config)?;
    let admin = match &config.admin {
        Some(strkey) => parse_address(sandbox.env(), strkey)?,
        None => sandbox.treasury("deployer"),
    };

    let minter = JettonMinter::create_from_config(
        &sandbox,
        &JettonMinterConfig {
            admin,
            content: JettonMinterContent {
                uri: config.content_uri.clone(),
            },
            capped_supply: config.capped_supply(),
            price: config.price(),
        },
    )?;

    let view = JettonDataView::from_data(&minter.get_jetton_data())?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn main() -> ExitCode {
    // -------------------------------
    // Load configuration
    // -------------------------------
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // -------------------------------
    // Initialize Tracing / Logging
    // -------------------------------
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.rust_log.as_str()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("jetton-client initialized with config: {:?}", config);

    let args: Vec<String> = env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        None | Some("state") => print_state(&config),
        Some("scenario") => run_capped_supply(&config).and_then(|report| {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }),
        Some(other) => {
            eprintln!("Unknown command: {}\n{}", other, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
