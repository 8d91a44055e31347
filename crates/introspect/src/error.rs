use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

/// Failures while fetching or decoding an introspection document.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("failed to parse introspection response: {0}")]
    Parse(String),

    #[error("introspection response contains GraphQL errors: {0}")]
    Graphql(String),
}
