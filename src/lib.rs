//! dbsql-bridge - MCP server exposing SQL warehouse tools to AI agents.
//!
//! This library exposes the core modules for use in integration tests.

pub mod config;
pub mod error;
pub mod mcp;
pub mod render;
pub mod statement;
pub mod tools;
pub mod warehouse;
