use crate::{CodegenConfig, ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference.
const CONFIG_FILES: &[&str] = &[
    ".codegenrc.yml",
    ".codegenrc.yaml",
    ".codegenrc.json",
    "codegen.config.yml",
    "codegen.config.yaml",
    "codegen.config.json",
];

/// Finds a codegen config file by walking up the directory tree from the
/// given start directory.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.exists() && config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Ok(Some(config_path));
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    Ok(None)
}

/// Loads a codegen config from the specified path.
/// The format is detected from the file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<CodegenConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        url = %config.specification_url,
        output = %config.output_folder.display(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Loads a codegen config from a string.
/// The path is used for error messages and format detection.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<CodegenConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;

    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<CodegenConfig> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<CodegenConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Checks invariants the type system can't: a usable URL and a non-empty
/// output folder.
fn validate_config(config: &CodegenConfig, path: &Path) -> Result<()> {
    let url = config.specification_url.trim();
    if url.is_empty() {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: "specification_url must not be empty".to_string(),
        });
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: format!("specification_url must be an http(s) URL, got '{url}'"),
        });
    }

    if config.output_folder.as_os_str().is_empty() {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: "output_folder must not be empty".to_string(),
        });
    }

    Ok(())
}
