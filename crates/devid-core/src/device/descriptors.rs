use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::ports::{PlatformContextPort, PlatformReadError};

/// Hardware / build descriptor exposed by the host platform.
/// 宿主平台提供的硬件/构建描述字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorField {
    Board,
    Brand,
    Device,
    Hardware,
    BuildId,
    Model,
    Product,
}

impl DescriptorField {
    /// All fields, in the order they contribute to the pseudo-hardware id.
    pub const ALL: [DescriptorField; 7] = [
        DescriptorField::Board,
        DescriptorField::Brand,
        DescriptorField::Device,
        DescriptorField::Hardware,
        DescriptorField::BuildId,
        DescriptorField::Model,
        DescriptorField::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorField::Board => "board",
            DescriptorField::Brand => "brand",
            DescriptorField::Device => "device",
            DescriptorField::Hardware => "hardware",
            DescriptorField::BuildId => "build_id",
            DescriptorField::Model => "model",
            DescriptorField::Product => "product",
        }
    }
}

impl Display for DescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DescriptorField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DescriptorField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown descriptor field: {s}"))
    }
}

/// Snapshot of the seven descriptor values, read once per derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HardwareDescriptors {
    pub board: String,
    pub brand: String,
    pub device: String,
    pub hardware: String,
    pub build_id: String,
    pub model: String,
    pub product: String,
}

impl HardwareDescriptors {
    /// Read every field from the platform, stopping at the first failure.
    pub fn collect(platform: &dyn PlatformContextPort) -> Result<Self, PlatformReadError> {
        Ok(Self {
            board: platform.descriptor(DescriptorField::Board)?,
            brand: platform.descriptor(DescriptorField::Brand)?,
            device: platform.descriptor(DescriptorField::Device)?,
            hardware: platform.descriptor(DescriptorField::Hardware)?,
            build_id: platform.descriptor(DescriptorField::BuildId)?,
            model: platform.descriptor(DescriptorField::Model)?,
            product: platform.descriptor(DescriptorField::Product)?,
        })
    }

    pub fn get(&self, field: DescriptorField) -> &str {
        match field {
            DescriptorField::Board => &self.board,
            DescriptorField::Brand => &self.brand,
            DescriptorField::Device => &self.device,
            DescriptorField::Hardware => &self.hardware,
            DescriptorField::BuildId => &self.build_id,
            DescriptorField::Model => &self.model,
            DescriptorField::Product => &self.product,
        }
    }

    /// One decimal digit per field: its length in UTF-16 code units, modulo 10.
    pub fn length_digits(&self) -> String {
        DescriptorField::ALL
            .iter()
            .map(|field| {
                let len = self.get(*field).encode_utf16().count();
                char::from(b'0' + (len % 10) as u8)
            })
            .collect()
    }
}
