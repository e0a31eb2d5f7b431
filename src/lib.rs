//! Converse GUI Library
//!
//! This crate provides the main application logic for the Converse GUI
//! client, a native desktop shell for the Converse chat application.

pub mod app;
pub mod components;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
