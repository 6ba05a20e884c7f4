//! Networking modules for the augmentation backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client, endpoint layout, and error mapping; `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
