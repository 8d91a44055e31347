//! GraphQL introspection execution and wire types.
//!
//! This crate fetches a GraphQL server's schema via the standard
//! introspection query and exposes it as typed data for code generation.
//!
//! # Examples
//!
//! ```no_run
//! use graphql_introspect::introspect_url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let response = introspect_url("https://api.example.com/graphql").await?;
//!     println!("schema has {} types", response.data.schema.types.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;
mod types;

pub use client::IntrospectionClient;
pub use error::{IntrospectionError, Result};
pub use query::INTROSPECTION_QUERY;
pub use types::*;

/// Introspects a GraphQL endpoint with default client settings.
///
/// Convenience wrapper around [`IntrospectionClient::execute`].
///
/// # Errors
///
/// Returns an error if the request fails, the server returns an HTTP error,
/// the response reports GraphQL errors, or the response cannot be parsed.
pub async fn introspect_url(url: &str) -> Result<IntrospectionResponse> {
    IntrospectionClient::new().execute(url).await
}
