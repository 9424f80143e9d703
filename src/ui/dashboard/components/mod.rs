//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod details;
pub mod footer;
pub mod header;
pub mod input;
pub mod logs;
pub mod raw;
pub mod stats;
pub mod whois;
