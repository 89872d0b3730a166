//! API module
//!
//! Contains the HTTP client for the remote dashboard backend.

pub mod client;

pub use client::ApiClient;
