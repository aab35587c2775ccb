//! DAS1800 SCPI demo - Entry Point
//!
//! Runs the usual DAS1800 remote-control session against the configured
//! instrument and prints every reply.

use log::{error, info};
use std::process::ExitCode;

use das_scpi_client::config::AppConfig;
use das_scpi_client::error::ScpiError;
use das_scpi_client::error::handlers::{error_to_exit_code, handle_error};
use das_scpi_client::sequence::{das1800_demo, run};
use das_scpi_client::utils::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logging();

    let (client_config, demo_config) = match AppConfig::load() {
        Ok(config) => config.split(),
        Err(e) => {
            let err = ScpiError::from(e);
            handle_error(&err);
            return exit_code(&err);
        }
    };

    info!("Driving DAS1800 at {}", client_config.socket_addr());

    let steps = das1800_demo(&demo_config);
    match run(&client_config, &steps).await {
        Ok(summary) => {
            for (query, reply) in &summary.replies {
                if reply.is_empty() {
                    println!("{query:<14} -> (no answer)");
                } else {
                    println!("{query:<14} -> {reply}");
                }
            }
            info!(
                "Done: {} commands, {} answered queries, {} unanswered, {} reconnects",
                summary.sent, summary.answered, summary.unanswered, summary.reconnects
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            handle_error(&e);
            error!("Demo aborted");
            exit_code(&e)
        }
    }
}

fn exit_code(err: &ScpiError) -> ExitCode {
    ExitCode::from(error_to_exit_code(err))
}
