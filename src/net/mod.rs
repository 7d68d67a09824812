//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the request/response model and the transport seam,
//! `auth_fetch` wraps session-bound calls, `api` covers the public endpoints,
//! and `types` defines the wire schema.

pub mod api;
pub mod auth_fetch;
pub mod http;
pub mod types;
