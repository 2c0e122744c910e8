//! # Try-On Core
//!
//! Core types shared by the try-on gateway crates.
//!
//! - [`errors`]: the application error type and its HTTP response mapping
//!
//! # Example
//!
//! ```ignore
//! use tryon_core::AppError;
//!
//! let error = AppError::forbidden(anyhow::anyhow!("Origin not allowed"));
//! ```

pub mod errors;

pub use errors::AppError;
