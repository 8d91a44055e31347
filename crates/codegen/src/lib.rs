//! Client-code generation from a GraphQL introspection result.
//!
//! The pipeline turns a server's introspection document into five TypeScript
//! artifacts: runtime request plumbing, a barrel file, one typed request
//! wrapper per root query field, static client type stubs, and type
//! definitions for every schema type.
//!
//! The interesting parts are [`resolve_type`] (flattening GraphQL's wrapped
//! type references into TypeScript type expressions), [`extract_endpoints`]
//! (deriving per-query render records from the root `Query` type) and
//! [`assemble`] (routing render data to artifacts). Everything else is
//! template rendering and file IO around them.

mod endpoints;
mod error;
mod generator;
mod render;
mod resolve;
mod templates;
mod typescript;

pub use endpoints::{extract_endpoints, Endpoint};
pub use error::{CodegenError, Result};
pub use generator::{generate, generate_from_introspection, GenerateSummary};
pub use render::{assemble, Artifact, RenderData};
pub use resolve::{resolve_type, strip_list_suffix, MAX_WRAPPER_DEPTH};
pub use templates::Templates;
pub use typescript::generate_type_definitions;
