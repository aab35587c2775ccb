//! Module `steps`
//!
//! Defines the step type and the DAS1800 demo sequence.

use std::time::Duration;

use crate::config::DemoConfig;

/// One action in a command sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Fire-and-forget command.
    Send(String),
    /// Command answered by exactly one line.
    Query(String),
    /// Wait before the next step.
    Pause(Duration),
    /// Close the connection and open a fresh one.
    Reconnect,
}

impl Step {
    pub fn send(command: impl Into<String>) -> Self {
        Step::Send(command.into())
    }

    pub fn query(command: impl Into<String>) -> Self {
        Step::Query(command.into())
    }
}

/// Settle time the instrument needs after STORE.
const STORE_SETTLE: Duration = Duration::from_millis(200);

/// Builds the DAS1800 demo: remote mode, identification, a short recording,
/// a configuration store/recall round trip (which drops the session), then a
/// tour of the secondary settings before handing control back to the panel.
pub fn das1800_demo(demo: &DemoConfig) -> Vec<Step> {
    vec![
        Step::send("*REM"),
        Step::query("*IDN ?"),
        // Values of all active measures
        Step::query("RDC?"),
        // Idle, Waiting for trigger or Recording
        Step::query("REC ?"),
        Step::send("REC ON"),
        Step::Pause(demo.record_pause()),
        // Forces the trigger while waiting for one
        Step::send("REC trig"),
        Step::Pause(demo.record_pause()),
        Step::send("REC OFF"),
        // The target folder must already exist on the instrument
        Step::send(format!("STORE {}", demo.config_path)),
        Step::Pause(STORE_SETTLE),
        Step::send(format!("RECALL {}", demo.config_path)),
        Step::Pause(demo.recall_settle()),
        // RECALL closes the session
        Step::Reconnect,
        Step::send("*REM"),
        Step::query("*OPT ?"),
        Step::query(":DATe ?"),
        Step::query(":HOURS ?"),
        Step::send(format!(":FILE:NAME {}", demo.record_file_name)),
        Step::query(":FILE:NAME ?"),
        Step::send(format!(":MEMSpeed {}", demo.memory_speed)),
        Step::query(":MEMSpeed ?"),
        // SCOPE, REPLAY or SETUP
        Step::send(format!("SCREEN {}", demo.screen)),
        Step::send("*LOC"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_starts_remote_and_ends_local() {
        let steps = das1800_demo(&DemoConfig::default());
        assert_eq!(steps.first(), Some(&Step::send("*REM")));
        assert_eq!(steps.last(), Some(&Step::send("*LOC")));
    }

    #[test]
    fn test_demo_reconnects_after_recall_settle() {
        let demo = DemoConfig::default();
        let steps = das1800_demo(&demo);

        let recall = steps
            .iter()
            .position(|s| *s == Step::send("RECALL /internalDisk/my_config.acq_cfg"))
            .unwrap();
        assert_eq!(steps[recall + 1], Step::Pause(Duration::from_secs(30)));
        assert_eq!(steps[recall + 2], Step::Reconnect);
        assert_eq!(steps[recall + 3], Step::send("*REM"));
    }

    #[test]
    fn test_demo_uses_configured_values() {
        let demo = DemoConfig {
            record_file_name: "run_42".to_string(),
            memory_speed: 250,
            screen: "SETUP".to_string(),
            ..DemoConfig::default()
        };
        let steps = das1800_demo(&demo);

        assert!(steps.contains(&Step::send(":FILE:NAME run_42")));
        assert!(steps.contains(&Step::send(":MEMSpeed 250")));
        assert!(steps.contains(&Step::send("SCREEN SETUP")));
    }

    #[test]
    fn test_demo_query_steps_carry_query_marker() {
        for step in das1800_demo(&DemoConfig::default()) {
            match step {
                Step::Query(cmd) => assert!(cmd.contains('?'), "{cmd}"),
                Step::Send(cmd) => assert!(!cmd.contains('?'), "{cmd}"),
                _ => {}
            }
        }
    }
}
