//! Networking modules for the catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the authenticated catalog request and `types` defines the
//! wire schema plus its mapping to UI products.

pub mod api;
pub mod types;
