//! boostgram - Mock Instagram growth-services ordering API
//!
//! A REST API that simulates a follower/like/view ordering platform.
//! Every number a client sees is hardcoded or freshly randomized; no
//! order is ever stored, fulfilled or charged.
//!
//! # Modules
//!
//! - [`catalog`] - The fixed three-service catalog
//! - [`username`] - Instagram handle format validation
//! - [`simulation`] - Pseudo-random stats, order ids and progress
//! - [`models`] - Order record types
//! - [`gateway`] - HTTP router, handlers and server lifecycle
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - tracing setup with rolling file output

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod simulation;
pub mod username;

// Convenient re-exports at crate root
pub use catalog::ServiceInfo;
pub use models::{Order, OrderStatus};
pub use simulation::SiteStats;
pub use username::is_valid_username;
