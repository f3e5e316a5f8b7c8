//! Platform context backed by the Android `getprop` / `settings` tools
//! 基于 Android getprop / settings 命令的平台上下文

use std::process::{Command, Output};

use devid_core::ports::{PlatformContextPort, PlatformReadError};
use devid_core::DescriptorField;

use crate::properties::{android_property_key, UNKNOWN};

const GETPROP_PROGRAM: &str = "getprop";
const SETTINGS_PROGRAM: &str = "settings";

/// Runs `getprop <key>` per descriptor and `settings get secure android_id`
/// for the installation id.
#[derive(Debug, Clone)]
pub struct GetpropPlatformContext {
    getprop_program: String,
    settings_program: String,
}

impl GetpropPlatformContext {
    pub fn new() -> Self {
        Self {
            getprop_program: GETPROP_PROGRAM.to_string(),
            settings_program: SETTINGS_PROGRAM.to_string(),
        }
    }

    /// Use other executables in place of `getprop` and `settings`.
    pub fn with_programs(getprop: impl Into<String>, settings: impl Into<String>) -> Self {
        Self {
            getprop_program: getprop.into(),
            settings_program: settings.into(),
        }
    }

    fn run(program: &str, args: &[&str]) -> Result<String, PlatformReadError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| PlatformReadError::Source(format!("failed to execute {program}: {e}")))?;

        stdout_of(program, &output)
    }
}

impl Default for GetpropPlatformContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformContextPort for GetpropPlatformContext {
    fn installation_id(&self) -> Result<String, PlatformReadError> {
        let raw = Self::run(&self.settings_program, &["get", "secure", "android_id"])?;
        parse_settings_value(&raw)
            .ok_or_else(|| PlatformReadError::NotAvailable("installation id".to_string()))
    }

    fn descriptor(&self, field: DescriptorField) -> Result<String, PlatformReadError> {
        let key = android_property_key(field);
        let raw = Self::run(&self.getprop_program, &[key])?;
        let value = parse_getprop_value(&raw);
        tracing::trace!(%field, key, value = %value, "Read system property");
        Ok(value)
    }
}

fn stdout_of(program: &str, output: &Output) -> Result<String, PlatformReadError> {
    if !output.status.success() {
        return Err(PlatformReadError::Source(format!(
            "{program} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// `getprop` prints an empty line for unset properties.
fn parse_getprop_value(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

/// `settings get` prints `null` when the setting is absent.
fn parse_settings_value(raw: &str) -> Option<String> {
    match raw.trim() {
        "" | "null" => None,
        value => Some(value.to_string()),
    }
}
