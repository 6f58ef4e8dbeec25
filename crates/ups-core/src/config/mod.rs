//! Manifest configuration
//!
//! The manifest (`ups.toml`, or a `.json` file with the same shape) declares
//! the spaces and user-provided services to deploy. Lookup order:
//! - an explicit path
//! - `./ups.toml`
//! - `<config_dir>/ups-manager/ups.toml`

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{ManifestFormat, parse_manifest, parse_manifest_json_str, parse_manifest_str, to_toml};
pub use paths::{
    MANIFEST_FILE_NAME, global_config_dir, project_manifest_path, resolve_manifest_path,
};
pub use schema::{CfSettings, ManifestConfig, ServiceEntry, SpaceEntry};
pub use store::ManifestStore;
