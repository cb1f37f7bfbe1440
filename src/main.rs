use akro::core::config;
use akro::core::controller::RequestController;
use akro::core::state::RequestState;
use akro::net;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "akro", about = "Explains tech acronyms via a remote endpoint")]
struct Args {
    /// Acronym to explain (e.g. API)
    acronym: String,

    /// Override the explanation endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to akro.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("akro.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("akro starting up");

    // Input shaping happens here, on the presentation side: the controller
    // receives the acronym exactly as handed over.
    if args.acronym.trim().is_empty() {
        eprintln!("Acronym cannot be empty.");
        return ExitCode::FAILURE;
    }
    let acronym = args.acronym.trim().to_uppercase();

    let config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&config, args.endpoint.as_deref());

    // Pre-flight gate: skip the request entirely when no link is up.
    if !net::is_network_available() {
        eprintln!("No internet connection.");
        return ExitCode::FAILURE;
    }

    let controller = match RequestController::new(resolved) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    controller.explain(&acronym).await;

    match controller.current_state() {
        RequestState::Success(explanation) => {
            println!("{explanation}");
            ExitCode::SUCCESS
        }
        RequestState::Error(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        // explain() always ends in a terminal state; these arms only keep
        // the match exhaustive.
        RequestState::Idle | RequestState::Loading => {
            eprintln!("request did not complete");
            ExitCode::FAILURE
        }
    }
}
