//! Root application component with routing and the HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::all_products_section::AllProductsSection;
use crate::net::api::CatalogConfig;
use crate::util::cookie::read_cookie;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The catalog section owns its own state, so no shared contexts are provided
/// beyond the meta context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductsPage/>
            </Routes>
        </Router>
    }
}

/// Products route. Reads the session credential and mounts the catalog.
#[component]
fn ProductsPage() -> impl IntoView {
    let config = CatalogConfig::default();
    let token = read_cookie(&config.credential_cookie);

    view! {
        <main class="products-page">
            <AllProductsSection token=token config=config/>
        </main>
    }
}
