pub mod cache;
pub mod resilience;
pub mod upstream;
