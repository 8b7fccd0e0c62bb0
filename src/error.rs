//! Host startup errors.

/// Errors that stop the storefront host from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The `[package.metadata.leptos]` section is missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    /// The HTTP server stopped with an error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
