use super::*;

fn shirt() -> Product {
    Product {
        id: "1".to_owned(),
        title: "Shirt".to_owned(),
        brand: "Acme".to_owned(),
        price: 100.0,
        image_url: "http://x/1.png".to_owned(),
        rating: 4.0,
    }
}

#[test]
fn product_key_is_product_id() {
    assert_eq!(product_key(&shirt()), "1");
}

#[test]
fn heading_reads_all_products() {
    assert_eq!(PRODUCTS_HEADING, "All Products");
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_after_cleanup_leaves_state_untouched() {
    let alive = AtomicBool::new(false);
    let mut state = CatalogState::default();

    assert!(!settle(&alive, &mut state, Ok(vec![shirt()])));
    assert_eq!(state, CatalogState::default());
}

#[test]
fn settle_after_cleanup_ignores_failures_too() {
    let alive = AtomicBool::new(false);
    let mut state = CatalogState::default();

    assert!(!settle(&alive, &mut state, Err(CatalogError::Status(401))));
    assert!(state.error().is_none());
}

#[test]
fn settle_while_mounted_applies_outcome() {
    let alive = AtomicBool::new(true);
    let mut state = CatalogState::default();

    assert!(settle(&alive, &mut state, Ok(vec![shirt()])));
    assert!(state.is_loaded());
    assert_eq!(state.products_list, vec![shirt()]);
}

#[test]
fn settle_observes_cleanup_between_loads() {
    let alive = AtomicBool::new(true);
    let mut state = CatalogState::default();
    assert!(settle(&alive, &mut state, Ok(vec![shirt()])));

    alive.store(false, Ordering::Relaxed);
    assert!(!settle(&alive, &mut state, Ok(Vec::new())));
    assert_eq!(state.products_list, vec![shirt()]);
}

// =============================================================
// SSR markup
// =============================================================

#[cfg(feature = "ssr")]
mod markup {
    use super::*;
    use crate::net::api::decode_products;

    fn render_list(products: Vec<Product>) -> String {
        let owner = leptos::reactive::owner::Owner::new();
        owner.with(|| {
            let products = Signal::derive(move || products.clone());
            view! { <ProductsList products=products/> }.to_html()
        })
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"product-item\"").count()
    }

    #[test]
    fn empty_catalog_renders_heading_without_cards() {
        let html = render_list(Vec::new());
        assert!(html.contains("All Products"));
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn shirt_response_renders_one_shirt_card() {
        let body = r#"{"products":[{"id":"1","title":"Shirt","brand":"Acme","price":100,"image_url":"http://x/1.png","rating":4}]}"#;
        let mut state = CatalogState::default();
        state.apply(decode_products(body));
        assert_eq!(state.products_list, vec![shirt()]);

        let html = render_list(state.products_list);
        assert_eq!(card_count(&html), 1);
        assert!(html.contains("Shirt"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let products = vec![shirt(), Product { id: "2".to_owned(), title: "Shoe".to_owned(), ..shirt() }];
        assert_eq!(render_list(products.clone()), render_list(products));
    }

    #[test]
    fn section_renders_empty_list_on_server() {
        let owner = leptos::reactive::owner::Owner::new();
        let html = owner.with(|| view! { <AllProductsSection token=Some("t".to_owned())/> }.to_html());
        assert!(html.contains("All Products"));
        assert_eq!(card_count(&html), 0);
        assert!(!html.contains("products-list-error"));
    }
}
