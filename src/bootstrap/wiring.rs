//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Pick the platform adapter from config / 根据配置选择平台适配器
//! - ✅ Create infra implementations (digest, random) / 创建 infra 层具体实现
//! - ✅ Inject all dependencies into the use case / 将所有依赖注入到用例
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on devid-infra + devid-platform + devid-app simultaneously.**
//! > **这是唯一允许同时依赖 devid-infra、devid-platform 和 devid-app 的地方。**

use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use devid_app::GetDeviceId;
use devid_core::config::PlatformConfig;
use devid_core::ports::PlatformContextPort;
use devid_infra::{Sha1Digest, UuidV4Generator};
use devid_platform::{BuildPropPlatformContext, GetpropPlatformContext, StaticPlatformContext};

const DEFAULT_BUILD_PROP_PATH: &str = "/system/build.prop";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("unknown platform source: {0:?} (expected getprop, build_prop or static)")]
    UnknownPlatformSource(String),
}

/// Where platform values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSource {
    Getprop,
    BuildProp,
    Static,
}

impl PlatformSource {
    /// `getprop` on Android, `build.prop` file elsewhere.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "android") {
            PlatformSource::Getprop
        } else {
            PlatformSource::BuildProp
        }
    }

    /// Resolve a configured name; empty means the platform default.
    pub fn resolve(name: &str) -> WiringResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Self::platform_default());
        }
        name.parse()
    }
}

impl FromStr for PlatformSource {
    type Err = WiringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getprop" => Ok(PlatformSource::Getprop),
            "build_prop" | "build-prop" => Ok(PlatformSource::BuildProp),
            "static" => Ok(PlatformSource::Static),
            other => Err(WiringError::UnknownPlatformSource(other.to_string())),
        }
    }
}

impl Display for PlatformSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformSource::Getprop => write!(f, "getprop"),
            PlatformSource::BuildProp => write!(f, "build_prop"),
            PlatformSource::Static => write!(f, "static"),
        }
    }
}

/// Create the platform adapter for the configured source.
pub fn build_platform_context(
    source: PlatformSource,
    config: &PlatformConfig,
) -> Arc<dyn PlatformContextPort> {
    match source {
        PlatformSource::Getprop => Arc::new(GetpropPlatformContext::new()),
        PlatformSource::BuildProp => {
            let build_prop_path = if config.build_prop_path.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_BUILD_PROP_PATH)
            } else {
                config.build_prop_path.clone()
            };

            let mut context = BuildPropPlatformContext::new(build_prop_path);
            if !config.installation_id_path.as_os_str().is_empty() {
                context = context.with_installation_id_path(config.installation_id_path.clone());
            }
            Arc::new(context)
        }
        PlatformSource::Static => {
            Arc::new(StaticPlatformContext::from_values(&config.static_values))
        }
    }
}

/// Assemble the device id use case.
///
/// `source_override` (from the command line) takes precedence over `config.source`.
pub fn wire_get_device_id(
    config: &PlatformConfig,
    source_override: Option<&str>,
) -> WiringResult<GetDeviceId> {
    let source = PlatformSource::resolve(source_override.unwrap_or(&config.source))?;
    tracing::debug!(%source, "Wiring platform source");

    Ok(GetDeviceId::new(
        build_platform_context(source, config),
        Arc::new(Sha1Digest),
        Arc::new(UuidV4Generator),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devid_core::DescriptorField;

    #[test]
    fn test_resolve_known_sources() {
        assert_eq!(PlatformSource::resolve("getprop").unwrap(), PlatformSource::Getprop);
        assert_eq!(PlatformSource::resolve("build_prop").unwrap(), PlatformSource::BuildProp);
        assert_eq!(PlatformSource::resolve("build-prop").unwrap(), PlatformSource::BuildProp);
        assert_eq!(PlatformSource::resolve(" static ").unwrap(), PlatformSource::Static);
    }

    #[test]
    fn test_empty_source_uses_platform_default() {
        assert_eq!(
            PlatformSource::resolve("").unwrap(),
            PlatformSource::platform_default()
        );
    }

    #[test]
    fn test_unknown_source_is_error() {
        let err = PlatformSource::resolve("registry").unwrap_err();
        assert!(matches!(err, WiringError::UnknownPlatformSource(ref name) if name == "registry"));
    }

    #[test]
    fn test_override_beats_config() {
        let mut config = PlatformConfig::default();
        config.source = "registry".to_string();
        // The bad configured source is never consulted.
        assert!(wire_get_device_id(&config, Some("static")).is_ok());
        assert!(wire_get_device_id(&config, None).is_err());
    }

    #[test]
    fn test_static_source_reads_configured_values() {
        let mut config = PlatformConfig::default();
        config.static_values.installation_id = Some("abc123".to_string());
        config
            .static_values
            .descriptors
            .push((DescriptorField::Model, "Mi 9".to_string()));

        let context = build_platform_context(PlatformSource::Static, &config);

        assert_eq!(context.installation_id().unwrap(), "abc123");
        assert_eq!(context.descriptor(DescriptorField::Model).unwrap(), "Mi 9");
    }
}
