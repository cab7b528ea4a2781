//! Employees module.
//!
//! A resilient, cached facade over the remote employee service:
//! - `infra::upstream`: HTTP gateway and wire envelope
//! - `infra::resilience`: bounded retry with exponential backoff
//! - `infra::cache`: per-operation TTL caches
//! - `domain`: queries, aggregations, create and delete
//! - `api::rest`: REST endpoints with RFC 9457 problems

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use employees_sdk::{Employee, EmployeesClientV1, EmployeesError, NewEmployee};

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use config::EmployeesConfig;
pub use module::EmployeesModule;

#[cfg(test)]
mod config_tests;
