//! Resolution of GraphQL type references into TypeScript type expressions.

use crate::{CodegenError, Result};
use graphql_introspect::{IntrospectionTypeRef, TypeKind};

/// Hard cap on wrapper recursion.
///
/// Wrapper nesting in real schemas is a handful of layers at most; anything
/// past this indicates cyclic introspection data, and the resolver fails
/// loudly instead of overflowing the stack.
pub const MAX_WRAPPER_DEPTH: usize = 32;

/// Resolves a type reference to a TypeScript type expression.
///
/// `NON_NULL` wrappers are unwrapped without a trace: nullability is not
/// represented in the output, so a nullable `String` and a non-null `String!`
/// resolve to the same expression. This is a known simplification and the
/// intended behavior, not an oversight to fix.
///
/// `LIST` wrappers append `[]` to the element expression. `SCALAR`, `ENUM`
/// and `OBJECT` leaves resolve to their own name, unchanged. Every other kind
/// has no resolution rule and fails the run.
///
/// # Examples
///
/// ```
/// use graphql_client_codegen::resolve_type;
/// use graphql_introspect::{IntrospectionTypeRef, TypeKind};
///
/// let posts = IntrospectionTypeRef::non_null(IntrospectionTypeRef::list(
///     IntrospectionTypeRef::non_null(IntrospectionTypeRef::named(TypeKind::Object, "Post")),
/// ));
/// assert_eq!(resolve_type(&posts).unwrap(), "Post[]");
/// ```
pub fn resolve_type(type_ref: &IntrospectionTypeRef) -> Result<String> {
    resolve_at_depth(type_ref, 0)
}

fn resolve_at_depth(type_ref: &IntrospectionTypeRef, depth: usize) -> Result<String> {
    if depth > MAX_WRAPPER_DEPTH {
        return Err(CodegenError::WrapperDepthExceeded(MAX_WRAPPER_DEPTH));
    }

    match type_ref.kind {
        TypeKind::NonNull => resolve_at_depth(inner_ref(type_ref)?, depth + 1),
        TypeKind::List => {
            let element = resolve_at_depth(inner_ref(type_ref)?, depth + 1)?;
            Ok(format!("{element}[]"))
        }
        TypeKind::Scalar | TypeKind::Enum | TypeKind::Object => {
            type_ref.name.clone().ok_or_else(|| {
                CodegenError::MalformedTypeRef(format!("{} leaf without a name", type_ref.kind))
            })
        }
        kind => Err(CodegenError::UnsupportedTypeKind(kind)),
    }
}

pub(crate) fn inner_ref(type_ref: &IntrospectionTypeRef) -> Result<&IntrospectionTypeRef> {
    type_ref.of_type.as_deref().ok_or_else(|| {
        CodegenError::MalformedTypeRef(format!("{} wrapper without an inner type", type_ref.kind))
    })
}

/// Removes at most one trailing `[]` from a resolved type expression.
///
/// Used where generated code must name the element type directly. Idempotent
/// once the suffix is gone.
#[must_use]
pub fn strip_list_suffix(expression: &str) -> &str {
    expression.strip_suffix("[]").unwrap_or(expression)
}
