//! Command-line run loop: config → tracing → wiring → derive → print.

use anyhow::Context;
use serde_json::json;
use std::io::Write;

use devid_app::{DeviceIdOrigin, DeviceIdReport};

use super::config::resolve_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_get_device_id;
use crate::cli::Cli;

/// Output rendering chosen from flags and config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode {
    pub json: bool,
    pub explain: bool,
}

impl OutputMode {
    pub fn resolve(cli: &Cli, configured_format: &str) -> Self {
        Self {
            json: cli.json || configured_format.trim().eq_ignore_ascii_case("json"),
            explain: cli.explain,
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref())?;

    init_tracing_subscriber(&config.logging).context("Failed to initialize tracing")?;

    let usecase = wire_get_device_id(&config.platform, cli.source.as_deref())?;
    let report = usecase.execute_detailed();

    let mode = OutputMode::resolve(&cli, &config.output.format);
    let rendered = render(&report, mode)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write device id")?;

    Ok(())
}

/// Render a report for stdout.
pub fn render(report: &DeviceIdReport, mode: OutputMode) -> anyhow::Result<String> {
    match (mode.json, mode.explain) {
        (false, false) => Ok(report.device_id.to_string()),
        (true, false) => Ok(serde_json::to_string(&json!({ "deviceId": report.device_id }))?),
        (true, true) => Ok(serde_json::to_string_pretty(report)?),
        (false, true) => Ok(render_explanation(report)),
    }
}

fn render_explanation(report: &DeviceIdReport) -> String {
    let origin = match report.origin {
        DeviceIdOrigin::Digest => "digest",
        DeviceIdOrigin::RandomFallback => "random_fallback",
    };

    format!(
        "device_id: {}\norigin: {}\ninstallation_id_available: {}\ndescriptors_available: {}\npseudo_hardware_id: {}",
        report.device_id,
        origin,
        report.installation_id_available,
        report.descriptors_available,
        report.pseudo_hardware_id.as_deref().unwrap_or("-"),
    )
}
