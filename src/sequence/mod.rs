//! Command sequences
//!
//! A sequence is an ordered list of steps run against one instrument. The
//! DAS1800 demo reproduces the vendor's usual remote-control session.

pub mod runner;
pub mod steps;

pub use runner::{RunSummary, run};
pub use steps::{Step, das1800_demo};
