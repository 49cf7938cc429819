//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls (session resolution included) and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
