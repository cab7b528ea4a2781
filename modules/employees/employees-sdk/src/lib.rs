//! Employees SDK
//!
//! This crate provides the public API for the `employees` module:
//! - `EmployeesClientV1` trait
//! - Model types (`Employee`, `NewEmployee`)
//! - Error type (`EmployeesError`)
//!
//! ## Usage
//!
//! ```ignore
//! use employees_sdk::EmployeesClientV1;
//!
//! let client: Arc<dyn EmployeesClientV1> = module.client();
//!
//! let all = client.fetch_all().await?;
//! let top = client.top_ten_names_by_salary().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod models;

pub use client::EmployeesClientV1;
pub use errors::EmployeesError;
pub use models::{Employee, NewEmployee};
