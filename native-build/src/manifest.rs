use std::path::PathBuf;

use serde::Deserialize;

use crate::cmd::ExecResult;

pub const MANIFEST_NAME: &str = "native.json";

/// Describes the C sources making up one static library.
#[derive(Deserialize, Debug)]
pub struct NativeManifest {
    library: String,
    sources: Vec<String>,
    #[serde(default)]
    flags: Vec<String>,
}

impl NativeManifest {
    /// Reads the manifest at `path`, which may name the file itself or the
    /// directory holding it.
    pub fn new<T>(path: T) -> ExecResult<Self>
    where
        T: Into<PathBuf>, {
        let path = path.into();

        let path = if path.ends_with(MANIFEST_NAME) {
            path
        } else {
            path.join(MANIFEST_NAME)
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ExecResult<Self> {
        let manifest: NativeManifest = serde_json::from_str(content)?;

        if manifest.library.is_empty() {
            return Err("native manifest has an empty library name".into());
        }
        if manifest.sources.is_empty() {
            return Err(format!("native manifest for {} lists no sources", manifest.library).into());
        }

        Ok(manifest)
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }
}
