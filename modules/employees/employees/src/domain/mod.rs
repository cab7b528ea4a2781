pub mod aggregate;
pub mod error;
pub mod gateway;
pub mod local_client;
pub mod service;
pub mod validation;
