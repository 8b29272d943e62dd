//! Integration tests for dbsql-bridge.

pub mod mcp_test;
pub mod tools_test;
