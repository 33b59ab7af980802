//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport concerns (base URL, credential attachment, the
//! authorization-rejection policy), `api` exposes the auth service
//! operations, and `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
