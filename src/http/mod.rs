//! HTTP protocol implementation.
//!
//! Each accepted connection carries exactly one request and is closed once
//! the response has been written.
//!
//! # Architecture
//!
//! - **`parser`**: Reads the request head and extracts the requested path
//! - **`request`**: The parsed request and its location under the document root
//! - **`mime`**: Content-type guessing for located files
//! - **`response`**: Status codes and the OK / NOT FOUND decision
//! - **`placeholder`**: Date and host name substitution for served files
//! - **`writer`**: Writes the header block and the body
//! - **`connection`**: The per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Parsing   │ ← Read request head up to the blank line
//!        └──────┬──────┘
//!               │ Path resolved (or not)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Decide, write headers and body, flush
//!        └──────┬───────────┘
//!               │ Done, or transport error
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Stream dropped
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//! use ward::config::Config;
//! use ward::http::connection::{Connection, Site};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let site = Arc::new(Site::from_config(&Config::default()));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let site = site.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, site).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod placeholder;
