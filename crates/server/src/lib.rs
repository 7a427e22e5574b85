//! MCP Kubernetes server
//!
//! Exposes the natural-language kubectl translator over HTTP.

pub mod api;
pub mod config;
