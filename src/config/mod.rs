//! Configuration module
//!
//! Client and display settings, loaded from a TOML file in the user's
//! config directory.

pub mod config;
