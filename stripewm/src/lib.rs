//! User-facing half of stripewm: the TOML configuration loader and
//! logging setup. The window management engine lives in `stripewm-core`.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod logging;

pub use config::Config;
