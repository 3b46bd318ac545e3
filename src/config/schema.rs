//! Settings schema trait, metadata types and the sanitizing filter
//!
//! # Overview
//!
//! Ranges that accept settings declare a small, static schema: for every key,
//! a default value and the list of values that key may take. Candidate
//! settings handed to a constructor are run through [`sanitize`], which never
//! fails:
//!
//! 1. keys the schema does not know are dropped,
//! 2. values outside a key's allowed list are dropped,
//! 3. every declared key is filled in, the surviving candidate value winning
//!    over the declared default.
//!
//! ```
//! use rangekit::{opt, settings, SettingMetadata, SettingsSchema};
//! use serde_json::{json, Value};
//! use std::collections::HashMap;
//!
//! struct Rounding;
//!
//! impl SettingsSchema for Rounding {
//!     fn get_metadata() -> HashMap<String, SettingMetadata> {
//!         settings! {
//!             "mode" => SettingMetadata::select("nearest", vec![
//!                 opt("nearest", "Nearest"),
//!                 opt("floor", "Floor"),
//!             ]),
//!         }
//!     }
//! }
//!
//! let candidate: HashMap<String, Value> = settings! {
//!     "mode" => json!("ceil"),
//!     "color" => json!("red"),
//! };
//! let resolved = Rounding::validate_settings(&candidate);
//!
//! assert_eq!(resolved.get_str("mode"), Some("nearest"));
//! assert!(!resolved.contains_key("color"));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::types::Settings;

// =============================================================================
// Setting Metadata
// =============================================================================

/// Metadata for a single setting key: its default and its allowed values
///
/// # Example
///
/// ```
/// use rangekit::{opt, SettingMetadata};
/// use serde_json::json;
///
/// let charset = SettingMetadata::select("unicode", vec![
///     opt("unicode", "Unicode"),
///     opt("ascii", "ASCII"),
/// ])
/// .meta_str("description", "Characters accepted as bounds and values");
///
/// assert!(charset.validate(&json!("ascii")).is_ok());
/// assert!(charset.validate(&json!("latin1")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingMetadata {
    /// Default value
    pub default: Value,

    /// Values this setting may take
    pub options: Vec<SettingOption>,

    /// Free-form descriptive metadata (labels, descriptions)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
}

impl SettingMetadata {
    /// Create a select setting
    ///
    /// **Options are required** - a key with no allowed values could never
    /// take anything but its default.
    pub fn select(default: impl Into<String>, options: Vec<SettingOption>) -> Self {
        Self {
            default: Value::String(default.into()),
            options,
            metadata: HashMap::new(),
        }
    }

    /// Add custom string metadata
    #[must_use]
    pub fn meta_str(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata
            .insert(key.to_string(), Value::String(value.into()));
        self
    }

    /// Get metadata value as string
    pub fn get_meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }

    /// The allowed values, in declaration order
    pub fn allowed_values(&self) -> Vec<Value> {
        self.options.iter().map(|opt| opt.value.clone()).collect()
    }

    /// Check whether `value` is one of the options
    pub fn allows(&self, value: &Value) -> bool {
        self.options.iter().any(|opt| opt.value == *value)
    }

    /// Validate a value against this setting's options
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        if self.allows(value) {
            Ok(())
        } else {
            Err(format!("Value {value} must be one of the available options"))
        }
    }

    /// Validate the schema definition itself
    ///
    /// Checks that options exist and that the default is one of them.
    pub fn validate_schema(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err("Select type must have options defined".to_string());
        }

        self.validate(&self.default)
            .map_err(|e| format!("Default value is invalid: {e}"))?;

        Ok(())
    }
}

// =============================================================================
// Setting Option
// =============================================================================

/// One allowed value of a setting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingOption {
    /// Value to store
    pub value: Value,
    /// Display label
    pub label: String,
}

impl SettingOption {
    /// Create a simple string option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: Value::String(value.into()),
            label: label.into(),
        }
    }
}

// =============================================================================
// Settings Schema Trait
// =============================================================================

/// Trait for types that validate their settings against a static schema
///
/// Implementors only provide [`get_metadata`](SettingsSchema::get_metadata);
/// the lookups and the validation itself are derived from it.
pub trait SettingsSchema {
    /// Get metadata for all settings, keyed by setting name
    fn get_metadata() -> HashMap<String, SettingMetadata>;

    /// Allowed values per key
    #[must_use]
    fn possible_values() -> HashMap<String, Vec<Value>> {
        Self::get_metadata()
            .into_iter()
            .map(|(key, meta)| {
                let allowed = meta.allowed_values();
                (key, allowed)
            })
            .collect()
    }

    /// Default value per key
    #[must_use]
    fn default_values() -> HashMap<String, Value> {
        Self::get_metadata()
            .into_iter()
            .map(|(key, meta)| (key, meta.default))
            .collect()
    }

    /// Resolve `candidate` against this schema, see [`sanitize`]
    #[must_use]
    fn validate_settings(candidate: &HashMap<String, Value>) -> Settings {
        sanitize(candidate, &Self::possible_values(), &Self::default_values())
    }
}

// Schema with no keys, always resolving to empty settings
impl SettingsSchema for () {
    fn get_metadata() -> HashMap<String, SettingMetadata> {
        HashMap::new()
    }
}

// =============================================================================
// Sanitizer
// =============================================================================

/// Filter `candidate` down to known keys with allowed values, then fill in
/// `defaults` for everything missing.
///
/// The result holds exactly the keys of `defaults`. Nothing here fails:
/// unknown keys and disallowed values are dropped and logged at debug level.
#[must_use]
pub fn sanitize(
    candidate: &HashMap<String, Value>,
    possible: &HashMap<String, Vec<Value>>,
    defaults: &HashMap<String, Value>,
) -> Settings {
    let valid: HashMap<&str, &Value> = candidate
        .iter()
        .filter(|(key, value)| match possible.get(key.as_str()) {
            None => {
                debug!("Dropping unknown setting '{key}'");
                false
            }
            Some(allowed) if !allowed.contains(value) => {
                debug!("Dropping setting '{key}': {value} is not an allowed value");
                false
            }
            Some(_) => true,
        })
        .map(|(key, value)| (key.as_str(), value))
        .collect();

    defaults
        .iter()
        .map(|(key, default)| {
            let value = valid.get(key.as_str()).copied().unwrap_or(default);
            (key.clone(), value.clone())
        })
        .collect()
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Shorthand for creating a `SettingOption`
///
/// # Example
/// ```rust
/// use rangekit::opt;
/// let options = vec![opt("int", "Integer"), opt("float", "Float")];
/// ```
pub fn opt(value: impl Into<String>, label: impl Into<String>) -> SettingOption {
    SettingOption::new(value, label)
}

/// Macro for building a `HashMap<String, _>` of settings or metadata
///
/// # Example
/// ```rust
/// use rangekit::{settings, NumericRange};
/// use serde_json::json;
///
/// let range = NumericRange::with_settings(1, 10, &settings! {
///     "type" => json!("int"),
/// })?;
/// assert_eq!(range.settings().get_str("type"), Some("int"));
/// # Ok::<(), rangekit::Error>(())
/// ```
#[macro_export]
macro_rules! settings {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = std::collections::HashMap::new();
        $(
            map.insert($key.to_string(), $value);
        )*
        map
    }};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Sample;

    impl SettingsSchema for Sample {
        fn get_metadata() -> HashMap<String, SettingMetadata> {
            settings! {
                "type" => SettingMetadata::select("numeric", vec![
                    opt("int", "Integer"),
                    opt("float", "Float"),
                    opt("numeric", "Any number"),
                ]),
            }
        }
    }

    #[test]
    fn test_select_metadata() {
        let setting =
            SettingMetadata::select("en", vec![opt("en", "English"), opt("tr", "Turkish")])
                .meta_str("label", "Language");

        assert_eq!(setting.default, json!("en"));
        assert_eq!(setting.allowed_values(), vec![json!("en"), json!("tr")]);
        assert_eq!(setting.get_meta_str("label"), Some("Language"));
        assert!(setting.allows(&json!("tr")));
        assert!(!setting.allows(&json!("de")));
    }

    #[test]
    fn test_schema_validation() {
        let valid = SettingMetadata::select("a", vec![opt("a", "A"), opt("b", "B")]);
        assert!(valid.validate_schema().is_ok());

        let bad_default = SettingMetadata::select("c", vec![opt("a", "A")]);
        assert!(bad_default.validate_schema().is_err());

        let no_options = SettingMetadata::select("a", Vec::new());
        assert_eq!(
            no_options.validate_schema().unwrap_err(),
            "Select type must have options defined"
        );
    }

    #[test]
    fn test_sanitize_keeps_valid_candidate() {
        let resolved = Sample::validate_settings(&settings! { "type" => json!("int") });

        assert_eq!(resolved.get("type"), Some(&json!("int")));
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_sanitize_drops_unknown_keys_and_invalid_values() {
        let resolved = Sample::validate_settings(&settings! {
            "type" => json!("string"),
            "precision" => json!(3),
        });

        assert_eq!(resolved.get_str("type"), Some("numeric"));
        assert!(!resolved.contains_key("precision"));
    }

    #[test]
    fn test_sanitize_empty_candidate_yields_defaults() {
        let resolved = Sample::validate_settings(&HashMap::new());

        assert_eq!(resolved.get_str("type"), Some("numeric"));
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_sanitize_output_keys_follow_defaults() {
        // "b" is allowed but has no default, "c" has a default but no options
        let possible: HashMap<String, Vec<Value>> = settings! {
            "a" => vec![json!(1), json!(2)],
            "b" => vec![json!(true)],
        };
        let defaults: HashMap<String, Value> = settings! {
            "a" => json!(1),
            "c" => json!("fixed"),
        };
        let candidate: HashMap<String, Value> = settings! {
            "a" => json!(2),
            "b" => json!(true),
            "c" => json!("other"),
        };

        let resolved = sanitize(&candidate, &possible, &defaults);

        assert_eq!(resolved.get("a"), Some(&json!(2)));
        assert_eq!(resolved.get_str("c"), Some("fixed"));
        assert!(!resolved.contains_key("b"));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_sanitize_compares_json_values_exactly() {
        let resolved = Sample::validate_settings(&settings! { "type" => json!(["int"]) });
        assert_eq!(resolved.get_str("type"), Some("numeric"));
    }

    #[test]
    fn test_unit_schema_is_empty() {
        let resolved = <()>::validate_settings(&settings! { "type" => json!("int") });
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_serialization() {
        let setting = SettingMetadata::select("ascii", vec![opt("ascii", "ASCII")])
            .meta_str("description", "Accepted characters");

        let json = serde_json::to_string(&setting).unwrap();
        let deserialized: SettingMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(setting, deserialized);
    }
}
