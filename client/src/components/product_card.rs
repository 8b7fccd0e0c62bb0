//! Card component for a single catalog product.
//!
//! DESIGN
//! ======
//! Display text is computed by `ProductCardView` so the wording can be
//! checked without rendering markup.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

const STAR_ICON_URL: &str = "https://assets.ccbp.in/frontend/react-js/star-img.png";

/// Display strings for one product card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCardView {
    pub image_url: String,
    pub title: String,
    pub brand_line: String,
    pub price_line: String,
    pub rating_label: String,
}

impl ProductCardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            image_url: product.image_url.clone(),
            title: product.title.clone(),
            brand_line: format!("by {}", product.brand),
            price_line: format!("Rs {}/-", product.price),
            rating_label: product.rating.to_string(),
        }
    }
}

/// A list item showing thumbnail, title, brand, price and rating.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let card = ProductCardView::from_product(&product);

    view! {
        <li class="product-item">
            <img src=card.image_url alt="product" class="thumbnail"/>
            <h1 class="title">{card.title}</h1>
            <p class="brand">{card.brand_line}</p>
            <div class="product-details">
                <p class="price">{card.price_line}</p>
                <div class="rating-container">
                    <p class="rating">{card.rating_label}</p>
                    <img src=STAR_ICON_URL alt="star" class="star"/>
                </div>
            </div>
        </li>
    }
}
