//! Catalog state owned by a mounted products section.
//!
//! DESIGN
//! ======
//! The list is replaced wholesale by a successful load and never merged.
//! Failures leave the list untouched and only move the phase, so a failed
//! first load still shows an empty list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::api::CatalogError;
use crate::net::types::Product;

/// Lifecycle of a single catalog load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Nothing loaded yet.
    #[default]
    Empty,
    /// Products were replaced by a successful load.
    Loaded,
    /// The load failed; carries the message shown to the user.
    Failed(String),
}

/// Product list plus load phase for one products section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products_list: Vec<Product>,
    pub phase: CatalogPhase,
}

impl CatalogState {
    /// Fold the outcome of a catalog load into the state.
    pub fn apply(&mut self, outcome: Result<Vec<Product>, CatalogError>) {
        match outcome {
            Ok(products) => {
                self.products_list = products;
                self.phase = CatalogPhase::Loaded;
            }
            Err(err) => {
                self.phase = CatalogPhase::Failed(err.to_string());
            }
        }
    }

    /// Message for a failed load, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            CatalogPhase::Failed(message) => Some(message),
            CatalogPhase::Empty | CatalogPhase::Loaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, CatalogPhase::Loaded)
    }
}
