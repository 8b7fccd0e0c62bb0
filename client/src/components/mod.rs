//! UI components for the products page.

pub mod all_products_section;
pub mod product_card;
