//! Wire types for GraphQL introspection responses.
//!
//! These types mirror the JSON shape of the standard introspection query
//! result (`data.__schema`) and deserialize with serde. A document that is
//! not a non-null object of this shape fails deserialization outright.

use serde::{Deserialize, Serialize};

/// Top-level introspection response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    pub data: IntrospectionData,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Schema information from introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    pub query_type: Option<RootTypeRef>,
    pub mutation_type: Option<RootTypeRef>,
    pub subscription_type: Option<RootTypeRef>,
    pub types: Vec<IntrospectionType>,
}

/// Name-only reference to a root operation type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootTypeRef {
    pub name: String,
}

/// One type definition from the schema's type list, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IntrospectionType {
    #[serde(rename = "SCALAR")]
    Scalar(ScalarType),
    #[serde(rename = "OBJECT")]
    Object(ObjectType),
    #[serde(rename = "INTERFACE")]
    Interface(InterfaceType),
    #[serde(rename = "UNION")]
    Union(UnionType),
    #[serde(rename = "ENUM")]
    Enum(EnumType),
    #[serde(rename = "INPUT_OBJECT")]
    InputObject(InputObjectType),
}

impl IntrospectionType {
    /// The type's own name, regardless of kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.name,
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

/// Object type definition.
///
/// `fields` stays `Option` on purpose: a server that omits the field list
/// entirely produced a malformed introspection result, and the consumer must
/// be able to tell that apart from an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub possible_types: Vec<RootTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub enum_values: Vec<EnumValueDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub input_fields: Vec<InputValueDef>,
}

/// One field of an object or interface type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<InputValueDef>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// A field argument or input-object field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// A possibly-wrapped type reference.
///
/// `NON_NULL` and `LIST` wrappers carry an inner reference in `of_type`;
/// leaf kinds carry a `name`. Wrapping nests finitely in well-formed
/// introspection data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}

impl IntrospectionTypeRef {
    /// A leaf reference to a named type.
    #[must_use]
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// Wraps a reference in a `NON_NULL` layer.
    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Wraps a reference in a `LIST` layer.
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }
}

/// The `kind` discriminant of a type reference.
///
/// `Unknown` absorbs kinds this tool does not recognize so that rejection
/// happens in the consumer with a typed error naming the kind, not inside
/// serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    #[serde(other)]
    Unknown,
}

impl TypeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
