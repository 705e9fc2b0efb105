//! Wire documents and domain types for the licensing API.

pub mod models;
