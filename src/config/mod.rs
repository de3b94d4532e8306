//! Configuration for the tier list engine and its CLI front-end

pub mod app;

pub use app::{AppConfig, ServiceSettings};
