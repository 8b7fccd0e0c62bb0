//! Products section: loads the catalog on mount and lists it as cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mounted section owns its `CatalogState` and issues exactly one
//! catalog load from the browser. The load is tied to the section's lifetime:
//! once the section is cleaned up, a late response is dropped instead of
//! writing into disposed state.

#[cfg(test)]
#[path = "all_products_section_test.rs"]
mod all_products_section_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::api::{CatalogConfig, CatalogError};
use crate::net::types::Product;
use crate::state::catalog::CatalogState;

/// Heading shown above the product list.
pub const PRODUCTS_HEADING: &str = "All Products";

/// Catalog section for the products page.
///
/// `token` is the session bearer token; `None` still sends the request with
/// an empty bearer token.
#[component]
pub fn AllProductsSection(
    token: Option<String>,
    #[prop(optional)] config: Option<CatalogConfig>,
) -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let config = config.unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            log::info!("loading catalog from {}", config.endpoint);
            let outcome = crate::net::api::load_catalog(&config, token.as_deref()).await;
            match &outcome {
                Ok(products) => log::info!("catalog loaded: {} products", products.len()),
                Err(e) => log::warn!("catalog load failed: {e}"),
            }
            // Skip notifying subscribers when the late response is dropped.
            let applied = catalog.try_maybe_update(|state| {
                let applied = settle(&alive_task, state, outcome);
                (applied, applied)
            });
            if applied != Some(true) {
                log::debug!("products section unmounted; dropping catalog response");
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, config);
    }

    let products = Signal::derive(move || catalog.with(|state| state.products_list.clone()));

    view! {
        <ProductsList products=products/>
        <Show when=move || catalog.with(|state| state.error().is_some())>
            <p class="products-list-error">
                {move || catalog.with(|state| state.error().map(str::to_owned).unwrap_or_default())}
            </p>
        </Show>
    }
}

/// Heading plus one card per product, keyed by product id.
///
/// An empty list renders the heading and an empty list element.
#[component]
pub fn ProductsList(products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div>
            <h1 class="products-list-heading">{PRODUCTS_HEADING}</h1>
            <ul class="products-list">
                <For
                    each=move || products.get()
                    key=product_key
                    children=move |product: Product| view! { <ProductCard product=product/> }
                />
            </ul>
        </div>
    }
}

/// Fold a finished load into `state` unless the section has been cleaned up.
///
/// Returns whether the outcome was applied.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn settle(alive: &AtomicBool, state: &mut CatalogState, outcome: Result<Vec<Product>, CatalogError>) -> bool {
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    state.apply(outcome);
    true
}

fn product_key(product: &Product) -> String {
    product.id.clone()
}
