//! Client-side state modules.

pub mod catalog;
