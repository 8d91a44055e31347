use graphql_introspect::{IntrospectionError, TypeKind};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

/// Failures that abort a generation run.
///
/// None of these are recovered from: there is no per-artifact partial
/// success, and files already written when a later step fails stay on disk.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The introspection fetch or decode failed.
    #[error(transparent)]
    Fetch(#[from] IntrospectionError),

    /// The fetched schema does not have the expected shape.
    #[error("schema shape error: {0}")]
    Schema(String),

    /// A type reference's kind has no resolution rule.
    #[error("unsupported type kind: {0}")]
    UnsupportedTypeKind(TypeKind),

    /// A wrapper without an inner type, or a leaf without a name.
    #[error("malformed type reference: {0}")]
    MalformedTypeRef(String),

    /// Wrapper nesting deeper than any well-formed schema produces,
    /// indicating cyclic introspection data.
    #[error("type reference nesting exceeds {0} wrapper layers")]
    WrapperDepthExceeded(usize),

    #[error("template compilation failed: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("template rendering failed: {0}")]
    TemplateRender(#[from] handlebars::RenderError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
