//! Application Layer
//!
//! Contains app initialization, window management, global entities,
//! navigation, and the shell.

pub mod application;
pub mod entities;
pub mod navigation;
pub mod shell;
