//! Configuration surface for the client generator.
//!
//! A config file names the GraphQL endpoint to introspect
//! (`specification_url`) and the directory the generated artifacts land in
//! (`output_folder`), plus optional fetch settings. Files are discovered by
//! walking up from the working directory and parsed from YAML or JSON.

mod config;
mod error;
mod loader;

pub use config::CodegenConfig;
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str};
