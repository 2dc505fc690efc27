//! STDIO transport implementation.
//!
//! Process-pipe transport for MCP clients that spawn the server directly -
//! the default mode.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    ///
    /// Serves the MCP protocol over stdin/stdout and blocks until the client
    /// closes the pipe.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "{} ready - communicating via stdin/stdout",
            server.name()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport closed");
        Ok(())
    }
}
