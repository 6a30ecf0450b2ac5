//! HTTP-level integration tests driving the full router against the
//! in-memory store and the recording push service.

mod client_config_test;
mod health_test;
mod helpers;
mod triggers_test;
