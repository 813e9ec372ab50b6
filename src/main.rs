//! # Whisk Main Entry Point
//!
//! Parses the endpoint, loads settings and runs the command loop on a
//! blocking worker.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};
use whisk::cmd_args::CommandLineArgs;
use whisk::config::{self, WhiskConfig};
use whisk::{ConsoleLineReader, ConsoleOutput, Endpoint, Engine, HttpService, Output};

const WELCOME: &str = "Welcome to Whisk, the MatchaDB Tester!\nSammaTime22, 2021-2022";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let endpoint = Endpoint::with_overrides(cmd_args.protocol(), cmd_args.host(), cmd_args.port());

    let config_path = config::get_config_path();
    let settings = WhiskConfig::load(&config_path)?;
    tracing::debug!("Settings: {:?}", settings);

    let mut output = ConsoleOutput::new(settings.display, settings.color_enabled);
    output.general(WELCOME);

    // The loop blocks on stdin and on the HTTP client, so it gets its own thread
    tokio::task::spawn_blocking(move || run_engine(endpoint, settings, output))
        .await
        .map_err(|e| anyhow!("Command loop stopped unexpectedly: {e}"))?
}

fn run_engine(
    endpoint: Endpoint,
    settings: WhiskConfig,
    output: ConsoleOutput<std::io::Stdout>,
) -> Result<()> {
    let transport = HttpService::with_options(endpoint, settings.wire_format, settings.timeout)?;
    let reader = ConsoleLineReader::with_pointer(&settings.pointer)?;

    let mut engine = Engine::new(reader, output, transport);
    engine.run();
    Ok(())
}

fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_env(format!(
                "{}_LOG_LEVEL",
                env!("CARGO_PKG_NAME").to_uppercase()
            ))
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("rustyline=warn".parse().unwrap())
            .add_directive("rustls=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
