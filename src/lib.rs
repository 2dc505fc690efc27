//! OpenTofu MCP Server Library
//!
//! This crate provides the Model Control Plane server for the OpenTofu
//! registry, organized into a small core and domain modules.
//!
//! # Architecture
//!
//! - **core**: Shared infrastructure — settings, error handling, the server
//!   handler, and the transport layer (stdio and HTTP)
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use opentofu_mcp_server::core::{McpServer, Settings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_env()?;
//!     let server = McpServer::new(settings);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Error, McpServer, Result, Settings};
