//! Metric classification domain

pub mod classifier;
pub mod ports;
pub mod service;

pub use classifier::{classify, classify_batch};
pub use ports::*;
pub use service::*;
