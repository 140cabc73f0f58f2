pub mod domain;
pub mod ports;
pub mod adapters;
pub mod service;
pub mod config;

pub use domain::*;
pub use ports::*;
pub use service::*;
pub use config::*;
