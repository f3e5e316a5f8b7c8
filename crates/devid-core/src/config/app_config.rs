use std::path::PathBuf;

use crate::device::DescriptorField;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub platform: PlatformConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Where platform values are read from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformConfig {
    /// Source name (may be empty - wiring picks the platform default)
    /// 来源名称（可能为空 - 由装配层选择平台默认值）
    pub source: String,

    /// `build.prop` file path (path info only, no existence check)
    pub build_prop_path: PathBuf,

    /// File holding the installation identifier (path info only)
    pub installation_id_path: PathBuf,

    /// Values for the in-memory source
    pub static_values: StaticPlatformValues,
}

/// Values for the `static` platform source. Unset entries read as unavailable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticPlatformValues {
    pub installation_id: Option<String>,
    pub descriptors: Vec<(DescriptorField, String)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingConfig {
    /// Tracing filter directive (empty - use build defaults)
    pub level: String,

    /// Directory for the log file (empty - no file output)
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// `text` or `json` (not validated here)
    pub format: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let platform = toml_value.get("platform");
        let logging = toml_value.get("logging");
        let output = toml_value.get("output");

        Ok(Self {
            platform: PlatformConfig {
                source: str_at(platform, "source").to_string(),
                build_prop_path: PathBuf::from(str_at(platform, "build_prop_path")),
                installation_id_path: PathBuf::from(str_at(platform, "installation_id_path")),
                static_values: StaticPlatformValues::from_toml(
                    platform.and_then(|p| p.get("static")),
                ),
            },
            logging: LoggingConfig {
                level: str_at(logging, "level").to_string(),
                log_dir: PathBuf::from(str_at(logging, "log_dir")),
            },
            output: OutputConfig {
                format: str_at(output, "format").to_string(),
            },
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self::default()
    }
}

impl StaticPlatformValues {
    fn from_toml(table: Option<&toml::Value>) -> Self {
        let Some(table) = table else {
            return Self::default();
        };

        let descriptors = DescriptorField::ALL
            .into_iter()
            .filter_map(|field| {
                table
                    .get(field.as_str())
                    .and_then(|v| v.as_str())
                    .map(|value| (field, value.to_string()))
            })
            .collect();

        Self {
            installation_id: table
                .get("installation_id")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            descriptors,
        }
    }
}

fn str_at<'a>(section: Option<&'a toml::Value>, key: &str) -> &'a str {
    section
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}
