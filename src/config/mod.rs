//! Settings validation
//!
//! This module contains the foundational types for range settings:
//! - `SettingsSchema` - Trait for declaring a static settings schema
//! - `SettingMetadata` - Default and allowed values for one key
//! - `Settings` - The resolved, read-only result
//! - `sanitize` - The filter that turns a candidate map into `Settings`

mod schema;
mod types;

pub use schema::{SettingMetadata, SettingOption, SettingsSchema, opt, sanitize};

pub use types::Settings;
