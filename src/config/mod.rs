//! Configuration loading
//!
//! Handles loading scan defaults from config files, with CLI flags taking
//! precedence over file values over built-in defaults.

pub mod loader;

pub use loader::load_config;
