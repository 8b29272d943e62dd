//! MCP protocol plumbing.
//!
//! Implements the Model Context Protocol over JSON-RPC 2.0 on stdio:
//! `initialize`, `ping`, `tools/list`, and `tools/call`. Tool failures are
//! already folded into the tool's text output, so the JSON-RPC error channel
//! is reserved for malformed requests.

mod rpc;
mod server;

pub use server::McpServer;
