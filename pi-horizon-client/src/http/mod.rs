//! HTTP transport for Horizon requests

mod client;

pub use client::HttpClient;
