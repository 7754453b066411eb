//! # Data Transfer Objects

pub mod setup_plan;
