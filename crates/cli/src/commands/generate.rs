//! The `generate` command: run the whole pipeline from a config file.

use anyhow::{Context, Result};
use colored::Colorize;
use graphql_gen_config::{find_config, load_config};
use std::path::PathBuf;

#[tracing::instrument(skip_all)]
pub async fn run(
    config_path: Option<PathBuf>,
    url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let start_time = std::time::Instant::now();

    let config_path = if let Some(path) = config_path {
        path
    } else {
        let current_dir = std::env::current_dir()?;
        find_config(&current_dir)
            .context("Failed to search for config")?
            .context(
                "No codegen config file found. Create a .codegenrc.yml with \
                 'specification_url' and 'output_folder', or pass --config",
            )?
    };

    let mut config = load_config(&config_path).context("Failed to load config")?;

    // CLI flags win over the config file.
    if let Some(url) = url {
        config.specification_url = url;
    }
    if let Some(output) = output {
        config.output_folder = output;
    }

    let spinner = crate::progress::spinner(&format!(
        "Generating client from {}...",
        config.specification_url
    ));
    let result = graphql_client_codegen::generate(&config).await;
    spinner.finish_and_clear();

    let summary = result.context("Code generation failed")?;

    println!("{}", "✓ Client generated successfully".green());
    for file in &summary.files {
        println!("  {}", file.display().to_string().cyan());
    }
    println!(
        "  {} endpoints: {}, total: {:.2}s",
        "⏱".dimmed(),
        summary.endpoints,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
