pub mod config;
pub mod error;
pub mod schedule;
pub mod service;
pub mod store;
