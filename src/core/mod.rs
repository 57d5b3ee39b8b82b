pub mod cli;
pub mod common;
pub mod configuration;
pub mod core;
pub mod environment;
pub mod logger;
pub mod session;
pub mod telemetry;
