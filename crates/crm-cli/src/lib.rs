//! CLI library components for the CRM CSV tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
