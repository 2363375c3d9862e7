//! Ward - single-request HTML file responder
//!
//! Core library for request parsing, response decisions and the
//! per-connection handler.

pub mod config;
pub mod http;
pub mod server;
