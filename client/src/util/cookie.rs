//! Browser cookie lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is issued elsewhere and stored as a cookie. Pages read
//! it here and hand it to the catalog loader, which never touches ambient
//! storage itself.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
///
/// Values are percent-decoded; a value that does not decode to UTF-8 is
/// returned as stored. Empty values count as absent.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_value(value.trim()))
        .filter(|value| !value.is_empty())
}

fn decode_value(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}

/// Read a cookie from the current document.
///
/// Always `None` on the server.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html.cookie().ok()?;
        find_cookie(&cookies, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
