//! Utilities

pub mod config_store;
