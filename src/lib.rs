//! Stackpulse: a terminal navigator for Docker Swarm stacks.
//!
//! This library exposes the core modules for use by the binary and by tests.

pub mod app;
pub mod directory;
pub mod docker;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod swarm;
pub mod view;
