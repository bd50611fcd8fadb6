//! Shared types, errors, and configuration for Presage.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Application-wide error types
//! - Configuration management
//! - Email delivery via SMTP

pub mod config;
pub mod email;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use email::{EmailAttachment, EmailError, EmailService};
pub use error::{AppError, AppResult};
