//! The generation pipeline: fetch, derive render data, render, write.

use crate::endpoints::extract_endpoints;
use crate::render::{assemble, Artifact};
use crate::templates::Templates;
use crate::typescript::generate_type_definitions;
use crate::{CodegenError, Result};
use graphql_gen_config::CodegenConfig;
use graphql_introspect::{IntrospectionClient, IntrospectionResponse};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What a generation run produced.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Number of root query fields turned into client wrappers.
    pub endpoints: usize,
    /// Paths of the written artifacts, in generation order.
    pub files: Vec<PathBuf>,
}

/// Runs the whole pipeline: fetch the introspection document from the
/// configured endpoint, then generate the artifacts into the configured
/// output folder.
#[tracing::instrument(skip(config), fields(url = %config.specification_url))]
pub async fn generate(config: &CodegenConfig) -> Result<GenerateSummary> {
    tracing::info!("Fetching specification");
    let client = IntrospectionClient::new()
        .with_headers(config.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .with_timeout(Duration::from_secs(config.timeout_secs))
        .with_retries(config.retry);

    let response = client.execute(&config.specification_url).await?;

    generate_from_introspection(&response, &config.output_folder)
}

/// The pipeline after the fetch, synchronous and network-free.
///
/// Artifacts are generated strictly in [`Artifact::ALL`] order. A failure
/// aborts the run; files already written stay on disk as-is.
pub fn generate_from_introspection(
    response: &IntrospectionResponse,
    output_folder: &Path,
) -> Result<GenerateSummary> {
    let schema = &response.data.schema;

    let endpoints = extract_endpoints(schema)?;
    tracing::info!(endpoints = endpoints.len(), "Extracted query endpoints");

    let api_types = generate_type_definitions(schema)?;
    let templates = Templates::new()?;

    fs::create_dir_all(output_folder)?;

    let mut files = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let data = assemble(artifact, &endpoints, &api_types);
        let rendered = templates.render(artifact, &data)?;

        let path = output_folder.join(artifact.file_name());
        tracing::debug!(file = %path.display(), "Writing artifact");
        fs::write(&path, rendered).map_err(|source| CodegenError::Write {
            path: path.clone(),
            source,
        })?;
        files.push(path);
    }

    Ok(GenerateSummary {
        endpoints: endpoints.len(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> IntrospectionResponse {
        serde_json::from_value(serde_json::json!({
            "data": { "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
                "types": [
                    {
                        "kind": "OBJECT",
                        "name": "Query",
                        "description": null,
                        "fields": [{
                            "name": "posts",
                            "args": [],
                            "type": {
                                "kind": "NON_NULL",
                                "name": null,
                                "ofType": {
                                    "kind": "LIST",
                                    "name": null,
                                    "ofType": {
                                        "kind": "NON_NULL",
                                        "name": null,
                                        "ofType": { "kind": "OBJECT", "name": "Post", "ofType": null }
                                    }
                                }
                            }
                        }]
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Post",
                        "description": null,
                        "fields": [{
                            "name": "title",
                            "args": [],
                            "type": {
                                "kind": "NON_NULL",
                                "name": null,
                                "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
                            }
                        }]
                    }
                ]
            }}
        }))
        .unwrap()
    }

    #[test]
    fn writes_all_five_artifacts() {
        let out_dir = tempfile::tempdir().unwrap();
        let target = out_dir.path().join("generated");

        let summary = generate_from_introspection(&sample_response(), &target).unwrap();

        assert_eq!(summary.endpoints, 1);
        assert_eq!(summary.files.len(), 5);
        for name in [
            "core.ts",
            "index.ts",
            "client.ts",
            "types-client.ts",
            "types-api.ts",
        ] {
            assert!(target.join(name).is_file(), "missing artifact {name}");
        }

        let client = fs::read_to_string(target.join("client.ts")).unwrap();
        assert!(client.contains("export async function posts()"));
        assert!(client.contains("Promise<QueryResult<Post[]>>"));

        let types_api = fs::read_to_string(target.join("types-api.ts")).unwrap();
        assert!(types_api.contains("export interface Post {"));
        assert!(types_api.contains("  title: string;"));
    }

    #[test]
    fn schema_error_aborts_before_any_file_is_written() {
        let response: IntrospectionResponse = serde_json::from_value(serde_json::json!({
            "data": { "__schema": {
                "queryType": null,
                "mutationType": null,
                "subscriptionType": null,
                "types": []
            }}
        }))
        .unwrap();

        let out_dir = tempfile::tempdir().unwrap();
        let target = out_dir.path().join("generated");

        let result = generate_from_introspection(&response, &target);
        assert!(matches!(result, Err(CodegenError::Schema(_))));
        assert!(!target.exists());
    }
}
