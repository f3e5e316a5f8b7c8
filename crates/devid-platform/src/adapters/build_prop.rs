//! Platform context backed by a `build.prop` file
//! 基于 build.prop 文件的平台上下文

use std::path::{Path, PathBuf};

use devid_core::ports::{PlatformContextPort, PlatformReadError};
use devid_core::DescriptorField;

use crate::properties::PropertyMap;

/// Reads descriptors from a `build.prop` file and the installation id from a
/// plain text file.
///
/// Files are read on every call; nothing is cached between derivations.
#[derive(Debug, Clone)]
pub struct BuildPropPlatformContext {
    build_prop_path: PathBuf,
    installation_id_path: Option<PathBuf>,
}

impl BuildPropPlatformContext {
    pub fn new(build_prop_path: impl Into<PathBuf>) -> Self {
        Self {
            build_prop_path: build_prop_path.into(),
            installation_id_path: None,
        }
    }

    pub fn with_installation_id_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.installation_id_path = Some(path.into());
        self
    }

    pub fn build_prop_path(&self) -> &Path {
        &self.build_prop_path
    }

    fn load_properties(&self) -> Result<PropertyMap, PlatformReadError> {
        let content = std::fs::read_to_string(&self.build_prop_path).map_err(|e| {
            PlatformReadError::Source(format!(
                "failed to read {}: {}",
                self.build_prop_path.display(),
                e
            ))
        })?;
        Ok(PropertyMap::parse(&content))
    }
}

impl PlatformContextPort for BuildPropPlatformContext {
    fn installation_id(&self) -> Result<String, PlatformReadError> {
        let path = self
            .installation_id_path
            .as_ref()
            .ok_or_else(|| PlatformReadError::NotAvailable("installation id".to_string()))?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            PlatformReadError::Source(format!("failed to read {}: {}", path.display(), e))
        })?;

        let id = content.trim();
        if id.is_empty() {
            return Err(PlatformReadError::NotAvailable("installation id".to_string()));
        }

        tracing::debug!(path = %path.display(), "Read installation id from file");
        Ok(id.to_string())
    }

    fn descriptor(&self, field: DescriptorField) -> Result<String, PlatformReadError> {
        Ok(self.load_properties()?.descriptor(field))
    }
}
