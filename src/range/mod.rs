//! Immutable ranges over ordered domains
//!
//! Every range stores two bounds with `start <= end`, whatever order they
//! were given in. [`OrderedRange`] supplies the shared queries:
//!
//! - [`contains`](OrderedRange::contains) reports where a value lies relative
//!   to the bounds as a [`Containment`] (`-1`, `0` or `+1`),
//! - [`clamp`](OrderedRange::clamp) projects an out-of-range value onto the
//!   nearest bound and returns it with the same [`Containment`].
//!
//! Implementors only describe how a raw input becomes a domain value
//! ([`resolve`](OrderedRange::resolve)); that is where character and numeric
//! ranges reject values outside their domain.

mod character;
mod datetime;
mod numeric;

pub use character::{Charset, CharacterRange};
pub use datetime::DateTimeRange;
pub use numeric::{Number, NumericRange, NumericType};

use log::trace;
use std::fmt;

use crate::error::{Operation, Result};

// =============================================================================
// Containment
// =============================================================================

/// Where a value lies relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Containment {
    /// Strictly before `start`
    Before = -1,
    /// Within `[start, end]`, bounds included
    Within = 0,
    /// Strictly after `end`
    After = 1,
}

impl Containment {
    /// The containment code: `-1`, `0` or `1`
    #[must_use]
    pub fn code(self) -> i8 {
        self as i8
    }

    #[must_use]
    pub fn is_within(self) -> bool {
        self == Containment::Within
    }
}

impl From<Containment> for i8 {
    fn from(containment: Containment) -> Self {
        containment.code()
    }
}

impl fmt::Display for Containment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Containment::Before => "before",
            Containment::Within => "within",
            Containment::After => "after",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Ordered Range Trait
// =============================================================================

/// Shared behavior of all ranges
pub trait OrderedRange {
    /// Domain value stored as a bound and returned by `clamp`
    type Value: Clone + PartialOrd + fmt::Debug;

    /// Raw input accepted by `contains` and `clamp`
    type Input: ?Sized;

    /// Lower bound
    fn start(&self) -> &Self::Value;

    /// Upper bound
    fn end(&self) -> &Self::Value;

    /// Turn a raw input into a domain value
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// naming `operation` when the input is outside the range's domain.
    fn resolve(&self, input: &Self::Input, operation: Operation) -> Result<Self::Value>;

    /// Position of an already resolved value
    fn position(&self, value: &Self::Value) -> Containment {
        if value < self.start() {
            Containment::Before
        } else if value > self.end() {
            Containment::After
        } else {
            Containment::Within
        }
    }

    /// Report whether `input` lies before, within or after the range
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` naming `contains` when the input is
    /// outside the range's domain.
    fn contains(&self, input: &Self::Input) -> Result<Containment> {
        let value = self.resolve(input, Operation::Contains)?;
        Ok(self.position(&value))
    }

    /// Clamp `input` to the bounds
    ///
    /// Returns the corrected value and the containment of the original input:
    /// `start` for [`Containment::Before`], `end` for [`Containment::After`],
    /// the input itself otherwise.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` naming `clamp` when the input is outside
    /// the range's domain.
    fn clamp(&self, input: &Self::Input) -> Result<(Self::Value, Containment)> {
        let value = self.resolve(input, Operation::Clamp)?;
        let containment = self.position(&value);

        let corrected = match containment {
            Containment::Before => self.start().clone(),
            Containment::After => self.end().clone(),
            Containment::Within => return Ok((value, containment)),
        };

        trace!("Clamped {value:?} to {corrected:?}");
        Ok((corrected, containment))
    }
}

/// Order two bounds so the lesser comes first
pub(crate) fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}
