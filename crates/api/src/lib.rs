//! HTTP API: server, routing, and request/response mapping.

pub mod app;
pub mod state;
