//! Numeric ranges

use log::debug;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use super::{OrderedRange, ordered};
use crate::config::{SettingMetadata, Settings, SettingsSchema, opt};
use crate::error::{Error, Operation, Result};
use crate::settings;

// =============================================================================
// Number
// =============================================================================

/// An integer or floating-point value
///
/// Integers and floats compare by numeric value, so `Int(2) == Float(2.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Any number. NaN is rejected separately, see [`NumericType::accepts`]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        true
    }

    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    /// Value as `f64` (large integers lose precision)
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Int(i), Number::Float(f)) => cmp_int_float(*i, *f),
            (Number::Float(f), Number::Int(i)) => cmp_int_float(*i, *f).map(Ordering::reverse),
        }
    }
}

/// Exact comparison of an integer with a float, without rounding the integer
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    // `i64::MAX as f64` is 2^63, one past the largest i64
    if f >= i64::MAX as f64 {
        return Some(Ordering::Less);
    }
    if f < i64::MIN as f64 {
        return Some(Ordering::Greater);
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f),
        ord => Some(ord),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

// =============================================================================
// Numeric Type Setting
// =============================================================================

/// The `type` setting of a numeric range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumericType {
    /// Integers only
    Int,
    /// Floats only
    Float,
    /// Integers and floats
    #[default]
    Numeric,
}

// Indexed by `NumericType as usize`
const VALIDATORS: [fn(&Number) -> bool; 3] = [Number::is_int, Number::is_float, Number::is_numeric];

impl NumericType {
    pub const ALL: [NumericType; 3] = [NumericType::Int, NumericType::Float, NumericType::Numeric];

    /// Setting value for this type
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NumericType::Int => "int",
            NumericType::Float => "float",
            NumericType::Numeric => "numeric",
        }
    }

    /// Read a resolved `type` setting value
    pub fn from_setting(value: &Value) -> Option<Self> {
        let name = value.as_str()?;
        Self::ALL.into_iter().find(|ty| ty.as_str() == name)
    }

    /// Whether a value of this type may be used with the range. NaN never is.
    #[must_use]
    pub fn accepts(self, number: &Number) -> bool {
        !number.is_nan() && VALIDATORS[self as usize](number)
    }

    fn check(self, number: Number, operation: Operation) -> Result<Number> {
        if self.accepts(&number) {
            Ok(number)
        } else {
            Err(Error::invalid_argument(operation, self.as_str(), number))
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Numeric Range
// =============================================================================

/// An immutable range of numbers
///
/// # Example
///
/// ```
/// use rangekit::{settings, Containment, Number, NumericRange, OrderedRange};
/// use serde_json::json;
///
/// let range = NumericRange::with_settings(10, 1, &settings! { "type" => json!("int") })?;
/// assert_eq!(range.start(), &Number::Int(1));
///
/// assert_eq!(range.clamp(&42.into())?, (Number::Int(10), Containment::After));
/// assert!(range.contains(&Number::Float(2.5)).is_err());
/// # Ok::<(), rangekit::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericRange {
    start: Number,
    end: Number,
    numeric_type: NumericType,
    settings: Settings,
}

impl SettingsSchema for NumericRange {
    fn get_metadata() -> HashMap<String, SettingMetadata> {
        settings! {
            "type" => SettingMetadata::select(NumericType::default().as_str(), vec![
                opt("int", "Integer"),
                opt("float", "Float"),
                opt("numeric", "Integer or float"),
            ])
            .meta_str("description", "Kind of number accepted as bounds and values"),
        }
    }
}

impl NumericRange {
    /// Create a range accepting any number
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if a bound is NaN.
    pub fn new(start: impl Into<Number>, end: impl Into<Number>) -> Result<Self> {
        Self::with_settings(start, end, &HashMap::new())
    }

    /// Create a range with settings
    ///
    /// Unknown keys and invalid values in `settings` are ignored.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if a bound does not match the resolved
    /// `type` setting.
    pub fn with_settings(
        start: impl Into<Number>,
        end: impl Into<Number>,
        settings: &HashMap<String, Value>,
    ) -> Result<Self> {
        let settings = Self::validate_settings(settings);
        let numeric_type = settings
            .get("type")
            .and_then(NumericType::from_setting)
            .unwrap_or_default();

        let start = numeric_type.check(start.into(), Operation::New)?;
        let end = numeric_type.check(end.into(), Operation::New)?;
        let (start, end) = ordered(start, end);

        debug!("Created numeric range [{start}, {end}] of type '{numeric_type}'");

        Ok(Self {
            start,
            end,
            numeric_type,
            settings,
        })
    }

    /// The resolved `type` setting
    #[must_use]
    pub fn numeric_type(&self) -> NumericType {
        self.numeric_type
    }

    /// The resolved settings
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl OrderedRange for NumericRange {
    type Value = Number;
    type Input = Number;

    fn start(&self) -> &Number {
        &self.start
    }

    fn end(&self) -> &Number {
        &self.end
    }

    fn resolve(&self, input: &Number, operation: Operation) -> Result<Number> {
        self.numeric_type.check(*input, operation)
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Containment;
    use serde_json::json;

    fn int_range(start: i64, end: i64) -> NumericRange {
        NumericRange::with_settings(start, end, &settings! { "type" => json!("int") }).unwrap()
    }

    #[test]
    fn test_number_ordering_across_kinds() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert!(Number::Int(2) < Number::Float(2.5));
        assert!(Number::Float(-0.5) < Number::Int(0));
        assert_eq!(Number::Float(f64::NAN).partial_cmp(&Number::Int(1)), None);
    }

    #[test]
    fn test_large_ints_compare_exactly_with_floats() {
        let above = Number::Int((1 << 53) + 1);
        let float = Number::Float(9007199254740992.0);

        assert!(above > float);
        assert!(float < above);
        assert_ne!(above, float);
        assert_eq!(float, Number::Int(1 << 53));

        assert!(Number::Int(i64::MAX) < Number::Float(i64::MAX as f64));
        assert!(Number::Int(i64::MIN) == Number::Float(i64::MIN as f64));
        assert!(Number::Int(i64::MIN) > Number::Float(-1e19));
        assert!(Number::Int(-3) < Number::Float(-2.5));
        assert!(Number::Int(-2) > Number::Float(-2.5));
        assert!(Number::Int(0) < Number::Float(f64::INFINITY));
        assert!(Number::Int(0) > Number::Float(f64::NEG_INFINITY));
    }

    #[test]
    fn test_large_int_range_contains_and_clamp() {
        let bound = (1i64 << 53) + 1;
        let range = NumericRange::new(bound, bound).unwrap();
        let below = Number::Float(9007199254740992.0);

        assert_eq!(range.contains(&below).unwrap(), Containment::Before);
        assert_eq!(range.clamp(&below).unwrap(), (Number::Int(bound), Containment::Before));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(-3).to_string(), "-3");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::from(0.25f32).to_string(), "0.25");
    }

    #[test]
    fn test_numeric_type_table() {
        assert!(NumericType::Int.accepts(&Number::Int(1)));
        assert!(!NumericType::Int.accepts(&Number::Float(1.0)));
        assert!(NumericType::Float.accepts(&Number::Float(1.0)));
        assert!(!NumericType::Float.accepts(&Number::Int(1)));
        assert!(NumericType::Numeric.accepts(&Number::Int(1)));
        assert!(NumericType::Numeric.accepts(&Number::Float(f64::INFINITY)));
        assert!(!NumericType::Numeric.accepts(&Number::Float(f64::NAN)));
    }

    #[test]
    fn test_numeric_type_from_setting() {
        assert_eq!(NumericType::from_setting(&json!("float")), Some(NumericType::Float));
        assert_eq!(NumericType::from_setting(&json!("string")), None);
        assert_eq!(NumericType::from_setting(&json!(1)), None);
    }

    #[test]
    fn test_default_settings() {
        let range = NumericRange::new(1, 5).unwrap();

        assert_eq!(range.numeric_type(), NumericType::Numeric);
        assert_eq!(range.settings().get_str("type"), Some("numeric"));
        assert_eq!(range.settings().len(), 1);
    }

    #[test]
    fn test_invalid_type_setting_falls_back() {
        let range =
            NumericRange::with_settings(1, 5, &settings! { "type" => json!("string") }).unwrap();

        assert_eq!(range.numeric_type(), NumericType::Numeric);
    }

    #[test]
    fn test_bounds_are_ordered() {
        let range = NumericRange::new(9.5, -2).unwrap();

        assert_eq!(range.start(), &Number::Int(-2));
        assert_eq!(range.end(), &Number::Float(9.5));
        assert_eq!(range.to_string(), "[-2, 9.5]");
    }

    #[test]
    fn test_contains_and_clamp() {
        let range = int_range(1, 10);

        assert_eq!(range.contains(&0.into()).unwrap(), Containment::Before);
        assert_eq!(range.contains(&1.into()).unwrap(), Containment::Within);
        assert_eq!(range.contains(&10.into()).unwrap(), Containment::Within);
        assert_eq!(range.contains(&11.into()).unwrap(), Containment::After);

        assert_eq!(range.clamp(&(-7).into()).unwrap(), (Number::Int(1), Containment::Before));
        assert_eq!(range.clamp(&4.into()).unwrap(), (Number::Int(4), Containment::Within));
    }

    #[test]
    fn test_int_range_rejects_float_bounds() {
        let err = NumericRange::with_settings(1, 2.5, &settings! { "type" => json!("int") })
            .unwrap_err();

        assert_eq!(err.operation(), Some(Operation::New));
        assert_eq!(err.to_string(), "new expects a(n) int as an argument, got 2.5");
    }

    #[test]
    fn test_float_range_rejects_int_values() {
        let range =
            NumericRange::with_settings(0.0, 1.0, &settings! { "type" => json!("float") }).unwrap();

        let err = range.clamp(&Number::Int(1)).unwrap_err();
        assert_eq!(err.operation(), Some(Operation::Clamp));
        assert!(range.contains(&Number::Float(0.5)).is_ok());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(NumericRange::new(f64::NAN, 1).unwrap_err().is_invalid_argument());

        let range = NumericRange::new(0, 1).unwrap();
        let err = range.contains(&Number::Float(f64::NAN)).unwrap_err();
        assert_eq!(err.operation(), Some(Operation::Contains));
    }

    #[test]
    fn test_schema_is_well_formed() {
        for (key, meta) in NumericRange::get_metadata() {
            assert!(meta.validate_schema().is_ok(), "bad schema for {key}");
        }
    }
}
