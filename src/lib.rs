//! Airports API Library
//!
//! Loads airport reference data from an upstream API into an immutable
//! in-memory store and serves filtered views of it over HTTP.

pub mod cache;
pub mod cli;
pub mod data;
pub mod server;
