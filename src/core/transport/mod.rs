//! Transport layer for the MCP server.
//!
//! This module provides the two transport implementations:
//! - **STDIO**: Standard input/output (default for MCP)
//! - **HTTP**: axum server with JSON-RPC over POST, an SSE handshake
//!   endpoint, and REST tool routes under the configured API prefix
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
