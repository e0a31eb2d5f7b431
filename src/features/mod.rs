//! Features - Page Views

pub mod home;
