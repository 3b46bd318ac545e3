//! Character ranges, ordered by code point

use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use super::{OrderedRange, ordered};
use crate::config::{SettingMetadata, Settings, SettingsSchema, opt};
use crate::error::{Error, Operation, Result};
use crate::settings;

/// The `charset` setting of a character range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Any Unicode scalar value
    #[default]
    Unicode,
    /// ASCII only
    Ascii,
}

impl Charset {
    pub const ALL: [Charset; 2] = [Charset::Unicode, Charset::Ascii];

    /// Setting value for this charset
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Charset::Unicode => "unicode",
            Charset::Ascii => "ascii",
        }
    }

    /// Read a resolved `charset` setting value
    pub fn from_setting(value: &Value) -> Option<Self> {
        let name = value.as_str()?;
        Self::ALL.into_iter().find(|charset| charset.as_str() == name)
    }

    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Charset::Unicode => true,
            Charset::Ascii => c.is_ascii(),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Charset::Unicode => "single character",
            Charset::Ascii => "single ASCII character",
        }
    }

    /// Parse `input` as exactly one accepted character
    fn single_char(self, input: &str, operation: Operation) -> Result<char> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if self.accepts(c) => Ok(c),
            _ => Err(Error::invalid_argument(
                operation,
                self.expected(),
                format!("{input:?}"),
            )),
        }
    }
}

/// An immutable range of characters
///
/// Characters compare by code point, so every uppercase ASCII letter comes
/// before every lowercase one.
///
/// # Example
///
/// ```
/// use rangekit::{CharacterRange, Containment, OrderedRange};
///
/// let range = CharacterRange::new("U", "G")?;
/// assert_eq!(range.contains("A")?, Containment::Before);
/// assert_eq!(range.clamp("X")?, ('U', Containment::After));
/// assert!(range.contains("AB").is_err());
/// # Ok::<(), rangekit::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRange {
    start: char,
    end: char,
    charset: Charset,
    settings: Settings,
}

impl SettingsSchema for CharacterRange {
    fn get_metadata() -> HashMap<String, SettingMetadata> {
        settings! {
            "charset" => SettingMetadata::select(Charset::default().as_str(), vec![
                opt("unicode", "Unicode"),
                opt("ascii", "ASCII"),
            ])
            .meta_str("description", "Characters accepted as bounds and values"),
        }
    }
}

impl CharacterRange {
    /// Create a range from two single-character strings
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if a bound is not exactly one character.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        Self::with_settings(start, end, &HashMap::new())
    }

    /// Create a range with settings
    ///
    /// Unknown keys and invalid values in `settings` are ignored.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if a bound is not exactly one character
    /// of the resolved `charset`.
    pub fn with_settings(
        start: &str,
        end: &str,
        settings: &HashMap<String, Value>,
    ) -> Result<Self> {
        let settings = Self::validate_settings(settings);
        let charset = settings
            .get("charset")
            .and_then(Charset::from_setting)
            .unwrap_or_default();

        let start = charset.single_char(start, Operation::New)?;
        let end = charset.single_char(end, Operation::New)?;

        Ok(Self::build(start, end, charset, settings))
    }

    /// Create a range from two characters with default settings
    #[must_use]
    pub fn from_chars(start: char, end: char) -> Self {
        Self::build(
            start,
            end,
            Charset::default(),
            Self::validate_settings(&HashMap::new()),
        )
    }

    fn build(start: char, end: char, charset: Charset, settings: Settings) -> Self {
        let (start, end) = ordered(start, end);
        debug!(
            "Created character range [{start:?}, {end:?}] (U+{:04X}..U+{:04X})",
            u32::from(start),
            u32::from(end)
        );

        Self {
            start,
            end,
            charset,
            settings,
        }
    }

    /// The resolved `charset` setting
    #[must_use]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// The resolved settings
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl OrderedRange for CharacterRange {
    type Value = char;
    type Input = str;

    fn start(&self) -> &char {
        &self.start
    }

    fn end(&self) -> &char {
        &self.end
    }

    fn resolve(&self, input: &str, operation: Operation) -> Result<char> {
        self.charset.single_char(input, operation)
    }
}

impl fmt::Display for CharacterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
