//! Outbound adapters implementing the document store ports.

pub mod memory;
pub mod persistence;
