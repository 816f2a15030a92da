#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the pokerep client
//!
//! This crate provides the data model shared across the system: report
//! records as the backend serves them, the creation request payload, the
//! delete-response shapes, and quantity input validation.

pub mod quantity;
pub mod report;

pub use quantity::{parse_quantity, QuantityField};
pub use report::{
    BlobDeletion, DeleteOutcome, DeleteResponseEntry, Report, ReportId, ReportRequest,
};
