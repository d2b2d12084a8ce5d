mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
mod services;
pub mod types;
mod views;

pub use args::{Cli, Commands};
pub use commands::run;
