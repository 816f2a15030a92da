#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Transport layer for pokerep
//!
//! This crate performs the HTTP calls to the report backend and normalizes
//! responses and errors into a uniform result shape. Non-2xx statuses fail
//! the call without parsing the body; successful bodies are parsed as JSON
//! and list responses pass through permissive envelope unwrapping for
//! backend compatibility.

mod client;
mod envelope;

pub use client::{NetClient, NetConfig};
pub use envelope::unwrap_collection;
