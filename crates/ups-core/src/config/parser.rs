//! Manifest parser with helpful error messages

use super::schema::ManifestConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Manifest file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    /// Pick the format from a file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            _ => ManifestFormat::Toml,
        }
    }
}

/// Parse a manifest file with detailed error messages
pub fn parse_manifest(path: &Path) -> Result<ManifestConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    let parsed = match ManifestFormat::from_path(path) {
        ManifestFormat::Toml => parse_manifest_str(&content),
        ManifestFormat::Json => parse_manifest_json_str(&content),
    };
    parsed.with_context(|| format!("Failed to parse manifest: {}", path.display()))
}

/// Parse TOML manifest content from string
pub fn parse_manifest_str(content: &str) -> Result<ManifestConfig> {
    let config: ManifestConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    config.validate()?;

    Ok(config)
}

/// Parse JSON manifest content from string
pub fn parse_manifest_json_str(content: &str) -> Result<ManifestConfig> {
    let config: ManifestConfig = serde_json::from_str(content).map_err(|e| {
        let context = manifest_excerpt(content, e.line());
        anyhow::anyhow!(
            "JSON parsing error at line {}:\n{}\n\nError: {}",
            e.line(),
            context,
            e
        )
    })?;

    config.validate()?;

    Ok(config)
}

/// Enhance TOML parsing errors with helpful context
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let error_msg = error.to_string();

    let line_hint = error.span().map(|span| {
        let offset = span.start.min(content.len());
        content.as_bytes()[..offset]
            .iter()
            .filter(|b| **b == b'\n')
            .count()
            + 1
    });

    if let Some(line_num) = line_hint {
        let context = manifest_excerpt(content, line_num);
        anyhow::anyhow!(
            "TOML parsing error at line {}:\n{}\n\nError: {}",
            line_num,
            context,
            error_msg
        )
    } else {
        anyhow::anyhow!("TOML parsing error: {}", error_msg)
    }
}

/// Manifest lines surrounding `line_num` (1-based), with the offending line marked.
fn manifest_excerpt(content: &str, line_num: usize) -> String {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .skip(line_num.saturating_sub(2))
        .take_while(|(num, _)| *num <= line_num + 1)
        .map(|(num, line)| {
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render spaces and services back into `ups.toml` form.
pub fn to_toml(config: &ManifestConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Could not render manifest spaces as TOML")
}
