//! Eventing - Application Event Channel

pub mod app_event;

pub use app_event::{AppEvent, EventBus};
