//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Database connection and migrations (db)
//! - Challenge catalog seeding (seed)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Password hashing and session tokens (auth)
//! - Application state (state)

pub mod auth;
pub mod config;
pub mod db;
pub mod seed;
pub mod server;
pub mod state;

pub use state::AppState;
