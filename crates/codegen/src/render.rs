//! Artifact table and render-data assembly.

use crate::Endpoint;
use serde::Serialize;

/// The five generated artifacts, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Runtime request plumbing.
    Core,
    /// Barrel file re-exporting the other artifacts.
    Index,
    /// One typed request wrapper per root query field.
    Client,
    /// Static client-side type stubs.
    TypesClient,
    /// Type definitions for every schema type.
    TypesApi,
}

impl Artifact {
    pub const ALL: [Self; 5] = [
        Self::Core,
        Self::Index,
        Self::Client,
        Self::TypesClient,
        Self::TypesApi,
    ];

    /// Name of the template this artifact renders from.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Index => "index",
            Self::Client => "client",
            Self::TypesClient => "types-client",
            Self::TypesApi => "types-api",
        }
    }

    /// File name the rendered artifact is written to.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Core => "core.ts",
            Self::Index => "index.ts",
            Self::Client => "client.ts",
            Self::TypesClient => "types-client.ts",
            Self::TypesApi => "types-api.ts",
        }
    }
}

/// The data bundle handed to one artifact's template.
///
/// Serializes untagged: the client artifact sees `{"endpoints": [...]}`, the
/// API-types artifact sees `{"rawText": "..."}`, parameter-free artifacts see
/// `{}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RenderData {
    Endpoints {
        endpoints: Vec<Endpoint>,
    },
    #[serde(rename_all = "camelCase")]
    RawText {
        raw_text: String,
    },
    Empty {},
}

/// Routes an artifact to its bundle shape. Pure routing of already-validated
/// data; nothing here can fail.
#[must_use]
pub fn assemble(artifact: Artifact, endpoints: &[Endpoint], api_types: &str) -> RenderData {
    match artifact {
        Artifact::Client => RenderData::Endpoints {
            endpoints: endpoints.to_vec(),
        },
        Artifact::TypesApi => RenderData::RawText {
            raw_text: api_types.to_string(),
        },
        Artifact::Core | Artifact::Index | Artifact::TypesClient => RenderData::Empty {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_endpoint() -> Endpoint {
        Endpoint {
            query_name: "posts".to_string(),
            upper_query_name: "Posts".to_string(),
            has_args: false,
            return_type: "Post[]".to_string(),
            base_return_type: "Post".to_string(),
        }
    }

    #[test]
    fn each_artifact_gets_exactly_one_shape() {
        let endpoints = vec![sample_endpoint()];

        for artifact in Artifact::ALL {
            let data = assemble(artifact, &endpoints, "export type X = string;");
            match artifact {
                Artifact::Client => assert!(matches!(data, RenderData::Endpoints { .. })),
                Artifact::TypesApi => assert!(matches!(data, RenderData::RawText { .. })),
                _ => assert!(matches!(data, RenderData::Empty {})),
            }
        }
    }

    #[test]
    fn serialized_shapes_match_template_expectations() {
        let endpoints = vec![sample_endpoint()];

        let client = serde_json::to_value(assemble(Artifact::Client, &endpoints, "")).unwrap();
        assert_eq!(
            client,
            serde_json::json!({
                "endpoints": [{
                    "queryName": "posts",
                    "upperQueryName": "Posts",
                    "hasArgs": false,
                    "returnType": "Post[]",
                    "baseReturnType": "Post"
                }]
            })
        );

        let types_api =
            serde_json::to_value(assemble(Artifact::TypesApi, &endpoints, "text")).unwrap();
        assert_eq!(types_api, serde_json::json!({ "rawText": "text" }));

        let core = serde_json::to_value(assemble(Artifact::Core, &endpoints, "")).unwrap();
        assert_eq!(core, serde_json::json!({}));
    }

    #[test]
    fn artifact_names_are_fixed() {
        let file_names: Vec<_> = Artifact::ALL.iter().map(|a| a.file_name()).collect();
        assert_eq!(
            file_names,
            vec![
                "core.ts",
                "index.ts",
                "client.ts",
                "types-client.ts",
                "types-api.ts"
            ]
        );
    }
}
