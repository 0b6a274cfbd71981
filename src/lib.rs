//! Latreport - latency distribution reports from message event logs.

pub mod aggregate;
pub mod buckets;
pub mod config;
pub mod error;
pub mod matcher;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod types;
