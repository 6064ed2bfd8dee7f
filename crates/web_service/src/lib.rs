pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod server;
pub mod services;

pub use config::ServiceConfig;
pub use error::AppError;
pub use server::AppState;
