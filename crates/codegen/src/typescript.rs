//! TypeScript type-definition generation from an introspected schema.
//!
//! In-repo stand-in for an external type-definition generator. The seam is
//! deliberately narrow, one function from schema to text, and the rest of the
//! pipeline treats the returned text as opaque, so this module can be swapped
//! for a different backend without touching the core logic.

use crate::resolve::{inner_ref, MAX_WRAPPER_DEPTH};
use crate::{CodegenError, Result};
use graphql_introspect::{FieldDef, IntrospectionSchema, IntrospectionType, IntrospectionTypeRef, TypeKind};
use std::fmt::Write;

/// Built-in GraphQL scalars and their native TypeScript spelling.
const BUILTIN_SCALARS: &[(&str, &str)] = &[
    ("Int", "number"),
    ("Float", "number"),
    ("String", "string"),
    ("Boolean", "boolean"),
    ("ID", "string"),
];

fn builtin_ts_name(name: &str) -> Option<&'static str> {
    BUILTIN_SCALARS
        .iter()
        .find(|(graphql, _)| *graphql == name)
        .map(|(_, ts)| *ts)
}

/// Emits TypeScript type definitions for every schema type.
///
/// Introspection types (`__`-prefixed) and built-in scalars are skipped;
/// objects and interfaces become `export interface`, enums become
/// string-literal unions, unions become type unions, input objects become
/// interfaces with optional fields, and custom scalars become opaque
/// aliases. Descriptions and deprecations are carried over as JSDoc.
#[tracing::instrument(skip(schema), fields(types = schema.types.len()))]
pub fn generate_type_definitions(schema: &IntrospectionSchema) -> Result<String> {
    let mut out = String::new();
    let mut types_written = 0usize;

    for type_def in &schema.types {
        let name = type_def.name();
        if name.starts_with("__") || builtin_ts_name(name).is_some() {
            continue;
        }

        if types_written > 0 {
            out.push('\n');
        }
        write_type(&mut out, type_def)?;
        types_written += 1;
    }

    tracing::debug!(types_written, length = out.len(), "Type definitions generated");
    Ok(out)
}

fn write_type(out: &mut String, type_def: &IntrospectionType) -> Result<()> {
    match type_def {
        IntrospectionType::Scalar(t) => {
            write_jsdoc(out, t.description.as_deref(), None, 0);
            writeln!(out, "export type {} = unknown;", t.name).unwrap();
        }
        IntrospectionType::Object(t) => {
            write_jsdoc(out, t.description.as_deref(), None, 0);
            writeln!(out, "export interface {} {{", t.name).unwrap();
            for field in t.fields.as_deref().unwrap_or_default() {
                write_field(out, field)?;
            }
            out.push_str("}\n");
        }
        IntrospectionType::Interface(t) => {
            write_jsdoc(out, t.description.as_deref(), None, 0);
            writeln!(out, "export interface {} {{", t.name).unwrap();
            for field in t.fields.as_deref().unwrap_or_default() {
                write_field(out, field)?;
            }
            out.push_str("}\n");
        }
        IntrospectionType::Union(t) => {
            write_jsdoc(out, t.description.as_deref(), None, 0);
            let members: Vec<&str> = t.possible_types.iter().map(|m| m.name.as_str()).collect();
            if members.is_empty() {
                writeln!(out, "export type {} = never;", t.name).unwrap();
            } else {
                writeln!(out, "export type {} = {};", t.name, members.join(" | ")).unwrap();
            }
        }
        IntrospectionType::Enum(t) => {
            write_jsdoc(out, t.description.as_deref(), None, 0);
            if t.enum_values.is_empty() {
                writeln!(out, "export type {} = never;", t.name).unwrap();
            } else {
                writeln!(out, "export type {} =", t.name).unwrap();
                let last = t.enum_values.len() - 1;
                for (i, value) in t.enum_values.iter().enumerate() {
                    let terminator = if i == last { ";" } else { "" };
                    writeln!(out, "  | '{}'{}", value.name, terminator).unwrap();
                }
            }
        }
        IntrospectionType::InputObject(t) => {
            write_jsdoc(out, t.description.as_deref(), None, 0);
            writeln!(out, "export interface {} {{", t.name).unwrap();
            for field in &t.input_fields {
                write_jsdoc(out, field.description.as_deref(), None, 1);
                let optional = if field.type_ref.kind == TypeKind::NonNull {
                    ""
                } else {
                    "?"
                };
                let ts = ts_type(&field.type_ref)?;
                writeln!(out, "  {}{}: {};", field.name, optional, ts).unwrap();
            }
            out.push_str("}\n");
        }
    }
    Ok(())
}

fn write_field(out: &mut String, field: &FieldDef) -> Result<()> {
    let deprecation = field
        .is_deprecated
        .then(|| field.deprecation_reason.as_deref().unwrap_or(""));
    write_jsdoc(out, field.description.as_deref(), deprecation, 1);

    let ts = ts_type(&field.type_ref)?;
    writeln!(out, "  {}: {};", field.name, ts).unwrap();
    Ok(())
}

fn write_jsdoc(out: &mut String, description: Option<&str>, deprecation: Option<&str>, indent: usize) {
    if description.is_none() && deprecation.is_none() {
        return;
    }
    let pad = "  ".repeat(indent);

    if let (Some(desc), None) = (description, deprecation) {
        if !desc.contains('\n') {
            writeln!(out, "{pad}/** {desc} */").unwrap();
            return;
        }
    }

    writeln!(out, "{pad}/**").unwrap();
    if let Some(desc) = description {
        for line in desc.lines() {
            writeln!(out, "{pad} * {line}").unwrap();
        }
    }
    if let Some(reason) = deprecation {
        if reason.is_empty() {
            writeln!(out, "{pad} * @deprecated").unwrap();
        } else {
            writeln!(out, "{pad} * @deprecated {reason}").unwrap();
        }
    }
    writeln!(out, "{pad} */").unwrap();
}

/// TypeScript expression for a field or input type reference.
///
/// Unlike the endpoint resolver, model fields may legitimately reference
/// interfaces, unions and input objects, so every named kind resolves here.
/// The nullability simplification is shared: `NON_NULL` unwraps invisibly.
fn ts_type(type_ref: &IntrospectionTypeRef) -> Result<String> {
    ts_type_at_depth(type_ref, 0)
}

fn ts_type_at_depth(type_ref: &IntrospectionTypeRef, depth: usize) -> Result<String> {
    if depth > MAX_WRAPPER_DEPTH {
        return Err(CodegenError::WrapperDepthExceeded(MAX_WRAPPER_DEPTH));
    }

    match type_ref.kind {
        TypeKind::NonNull => ts_type_at_depth(inner_ref(type_ref)?, depth + 1),
        TypeKind::List => {
            let element = ts_type_at_depth(inner_ref(type_ref)?, depth + 1)?;
            Ok(format!("{element}[]"))
        }
        TypeKind::Scalar
        | TypeKind::Object
        | TypeKind::Interface
        | TypeKind::Union
        | TypeKind::Enum
        | TypeKind::InputObject => {
            let name = type_ref.name.as_deref().ok_or_else(|| {
                CodegenError::MalformedTypeRef(format!("{} leaf without a name", type_ref.kind))
            })?;
            Ok(builtin_ts_name(name).unwrap_or(name).to_string())
        }
        kind => Err(CodegenError::UnsupportedTypeKind(kind)),
    }
}
