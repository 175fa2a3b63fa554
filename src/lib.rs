//! Sensor Panel - live sensor readings polled from a sensor-data endpoint
//!
//! This library exposes the core modules for testing and reuse.

pub mod client;
pub mod common;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod panel;
pub mod poll;
pub mod schema;
