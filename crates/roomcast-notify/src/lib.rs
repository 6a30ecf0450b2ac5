//! # roomcast-notify
//!
//! Notification fan-out for room changes: trigger adapters project
//! room-change events into dispatches, and the dispatcher resolves room
//! members to push tokens and issues one multicast per event.

pub mod dispatcher;
pub mod formatter;
pub mod lookup;
pub mod outcome;
pub mod payload;
pub mod triggers;

pub use dispatcher::NotificationDispatcher;
pub use formatter::NotificationFormatter;
pub use outcome::DispatchOutcome;
pub use payload::NotificationPayload;
pub use triggers::{DispatchRequest, TriggerHandler};
