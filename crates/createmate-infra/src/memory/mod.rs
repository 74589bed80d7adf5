//! In-memory stand-ins for remote collaborators.

mod api;

pub use api::InMemoryContentApi;
