//! # CreateMate Shared
//!
//! Wire types exchanged with the CreateMate HTTP API.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
