pub mod auth;
pub mod config;
pub mod schedule;
pub mod server;
pub mod types;

pub use server::create_router;
