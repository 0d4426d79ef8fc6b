//! API Layer
//!
//! Typed HTTP client for the inventory backend.

pub mod client;

pub use client::*;
