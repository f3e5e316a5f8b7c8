//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Choosing a platform source for an empty `source`, or a default
//! `build.prop` path, is wiring policy and lives in the binary crate.

pub mod app_config;

pub use app_config::{AppConfig, LoggingConfig, OutputConfig, PlatformConfig, StaticPlatformValues};
