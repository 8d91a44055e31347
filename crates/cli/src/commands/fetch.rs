//! The `fetch` command: dump the raw introspection JSON from an endpoint.

use anyhow::{Context, Result};
use colored::Colorize;
use graphql_introspect::IntrospectionClient;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Parses a header string in "Name: Value" format.
fn parse_header(header: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = header.splitn(2, ':').collect();
    if parts.len() != 2 {
        anyhow::bail!("Invalid header format: '{header}'. Expected 'Header-Name: Header-Value'");
    }
    let name = parts[0].trim().to_string();
    let value = parts[1].trim().to_string();
    if name.is_empty() {
        anyhow::bail!("Header name cannot be empty");
    }
    Ok((name, value))
}

#[tracing::instrument(skip(headers))]
pub async fn run(
    url: String,
    output: Option<PathBuf>,
    headers: Vec<String>,
    timeout: u64,
    retry: u32,
) -> Result<()> {
    let start_time = std::time::Instant::now();

    let parsed_headers: Vec<(String, String)> = headers
        .iter()
        .map(|h| parse_header(h))
        .collect::<Result<Vec<_>>>()
        .context("Failed to parse headers")?;

    let client = IntrospectionClient::new()
        .with_headers(parsed_headers)
        .with_timeout(Duration::from_secs(timeout))
        .with_retries(retry);

    // No spinner when writing to stdout.
    let spinner = output
        .is_some()
        .then(|| crate::progress::spinner(&format!("Fetching schema from {url}...")));

    let response = client
        .execute_raw(&url)
        .await
        .with_context(|| format!("Failed to fetch schema from {url}"))?;
    let content = serde_json::to_string_pretty(&response)
        .context("Failed to serialize introspection response")?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if let Some(path) = output {
        std::fs::write(&path, &content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!(
            "{} Schema downloaded to {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
        println!(
            "  {} {:.2}s",
            "⏱".dimmed(),
            start_time.elapsed().as_secs_f64()
        );
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        if !content.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
    }

    Ok(())
}
