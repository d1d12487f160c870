//! # Blog Post API Server
//!
//! actix-web application exposing the `/blogposts` resource.
//! The binary in `main.rs` wires configuration, telemetry and state together;
//! the pieces live here so the integration tests can start the same server.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod startup;
pub mod state;
pub mod telemetry;
