//! HTTP transport for the licensing API.

pub mod http;
