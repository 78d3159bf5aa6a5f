//! Remote side of the data layer: wire DTOs and the HTTP client.

pub mod client;
pub mod responses;

pub use client::ApiClient;
