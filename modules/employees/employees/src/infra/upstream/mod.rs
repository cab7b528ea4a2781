//! HTTP adapter for the remote employee service.

pub mod client;
pub mod envelope;

pub use client::HttpEmployeeGateway;
