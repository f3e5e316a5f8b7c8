//! In-memory platform context
//! 内存平台上下文

use std::collections::HashMap;

use devid_core::config::StaticPlatformValues;
use devid_core::ports::{PlatformContextPort, PlatformReadError};
use devid_core::DescriptorField;

/// Platform context with fixed values. Unset values read as unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticPlatformContext {
    installation_id: Option<String>,
    descriptors: HashMap<DescriptorField, String>,
}

impl StaticPlatformContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installation_id(mut self, installation_id: impl Into<String>) -> Self {
        self.installation_id = Some(installation_id.into());
        self
    }

    pub fn with_descriptor(mut self, field: DescriptorField, value: impl Into<String>) -> Self {
        self.descriptors.insert(field, value.into());
        self
    }

    pub fn from_values(values: &StaticPlatformValues) -> Self {
        Self {
            installation_id: values.installation_id.clone(),
            descriptors: values.descriptors.iter().cloned().collect(),
        }
    }
}

impl PlatformContextPort for StaticPlatformContext {
    fn installation_id(&self) -> Result<String, PlatformReadError> {
        self.installation_id
            .clone()
            .ok_or_else(|| PlatformReadError::NotAvailable("installation id".to_string()))
    }

    fn descriptor(&self, field: DescriptorField) -> Result<String, PlatformReadError> {
        self.descriptors
            .get(&field)
            .cloned()
            .ok_or_else(|| PlatformReadError::NotAvailable(field.to_string()))
    }
}
