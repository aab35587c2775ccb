//! Module `runner`
//!
//! Runs a list of steps in order against one instrument.

use log::{info, warn};
use tokio::time;

use crate::client::ScpiClient;
use crate::config::ClientConfig;
use crate::error::ScpiResult;
use crate::protocol::display_text;
use crate::sequence::Step;

/// What happened over a run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub sent: usize,
    pub answered: usize,
    pub unanswered: usize,
    pub reconnects: usize,
    /// Each query with its reply, terminators stripped. Empty replies are kept.
    pub replies: Vec<(String, String)>,
}

/// Connects to the instrument and runs `steps` in order.
///
/// An unanswered query does not stop the run. A connection fault on the
/// first connect or on any `Reconnect` does.
pub async fn run(config: &ClientConfig, steps: &[Step]) -> ScpiResult<RunSummary> {
    let mut client = ScpiClient::connect(config).await?;
    let mut summary = RunSummary::default();

    for step in steps {
        match step {
            Step::Send(command) => {
                client.send(command).await?;
                summary.sent += 1;
            }
            Step::Query(command) => {
                let reply = client.query(command).await?;
                if reply.is_empty() {
                    summary.unanswered += 1;
                } else {
                    summary.answered += 1;
                }
                summary
                    .replies
                    .push((command.clone(), display_text(&reply)));
            }
            Step::Pause(duration) => {
                info!("Waiting {:?}", duration);
                time::sleep(*duration).await;
            }
            Step::Reconnect => {
                client.close().await;
                client = ScpiClient::connect(config).await?;
                summary.reconnects += 1;
            }
        }
    }

    client.close().await;

    if summary.unanswered > 0 {
        warn!("{} queries went unanswered", summary.unanswered);
    }

    Ok(summary)
}
