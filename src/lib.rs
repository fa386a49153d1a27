pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod notify;
pub mod release;
pub mod ui;

pub use error::{RelayError, Result};
