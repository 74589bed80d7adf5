//! # CreateMate Core
//!
//! The domain layer of the CreateMate client.
//! This crate holds the data model, form coercion, rendering and the ports
//! that adapters implement. It performs no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod render;

pub use error::{ApiError, FormError};
