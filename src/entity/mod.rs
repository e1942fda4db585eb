//! Entity module for the in-memory records

pub mod posts;
pub mod trades;
