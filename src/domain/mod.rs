//! Core domain types and logic.

pub mod price_series;
pub mod config;
pub mod universe;
pub mod indicator;
pub mod frame;
pub mod features;
pub mod model;
pub mod validation;
pub mod analysis;
pub mod ranker;
pub mod error;
