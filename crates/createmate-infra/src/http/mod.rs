//! HTTP implementation of the content API.

mod client;

pub use client::{HttpApiConfig, HttpContentApi, REQUEST_ID_HEADER};
