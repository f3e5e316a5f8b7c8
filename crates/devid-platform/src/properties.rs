//! Android system property helpers.
//!
//! Maps descriptor fields to the properties the platform build descriptors
//! are read from, and parses `build.prop` style files.

use std::collections::HashMap;

use devid_core::DescriptorField;

/// Value the platform reports for a build property that is not set.
pub const UNKNOWN: &str = "unknown";

/// System property backing a descriptor field.
pub fn android_property_key(field: DescriptorField) -> &'static str {
    match field {
        DescriptorField::Board => "ro.product.board",
        DescriptorField::Brand => "ro.product.brand",
        DescriptorField::Device => "ro.product.device",
        DescriptorField::Hardware => "ro.hardware",
        DescriptorField::BuildId => "ro.build.id",
        DescriptorField::Model => "ro.product.model",
        DescriptorField::Product => "ro.product.name",
    }
}

/// Parsed `key=value` property file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: HashMap<String, String>,
}

impl PropertyMap {
    /// Parse `build.prop` content.
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. Keys and
    /// values are trimmed. Read-only properties cannot be redefined, so the
    /// first definition of a key wins.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            entries
                .entry(key.to_string())
                .or_insert_with(|| value.trim().to_string());
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Descriptor value, or [`UNKNOWN`] when the property is unset or empty.
    pub fn descriptor(&self, field: DescriptorField) -> String {
        match self.get(android_property_key(field)) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => UNKNOWN.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
