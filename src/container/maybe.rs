//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<T>` type, which represents a value that
//! is either present (`Just(T)`) or absent (`Nothing`). This is commonly
//! used in functional programming for:
//!
//! - Expressing "no value" without sentinel values
//! - Chaining transformations that may produce nothing
//! - Converting to an [`Outcome`] once an error becomes relevant
//!
//! Presence is determined solely by which variant was constructed, never by
//! inspecting the payload: `Just(0)`, `Just("")` and `Just(false)` are all
//! present values.
//!
//! # Examples
//!
//! ```rust
//! use totality::container::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::Just(42);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Just(n) => println!("Got value: {}", n),
//!     Maybe::Nothing => println!("Got nothing"),
//! }
//!
//! // Using fold to handle both cases
//! let description = absent.fold(
//!     |n| format!("Value: {}", n),
//!     || "No value".to_string(),
//! );
//! assert_eq!(description, "No value");
//! ```

use std::fmt;
use std::hash::Hash;

use super::outcome::Outcome;

/// An optional value: either `Just(T)` or `Nothing`.
///
/// `Maybe<T>` makes absence explicit in the type system. Every operation
/// except [`unwrap`](Self::unwrap) and [`expect`](Self::expect) is total:
/// it inspects the variant and either transforms the payload or passes the
/// container through unchanged, never panicking on the container's behalf.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use totality::container::Maybe;
///
/// let value: Maybe<i32> = Maybe::Just(21);
/// let doubled = value.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Just(42));
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The present variant, holding exactly one value.
    Just(T),
    /// The absent variant, holding nothing.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(present.is_just());
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(!absent.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(absent.is_nothing());
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(!present.is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Reference Adaptation
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let text: Maybe<String> = Maybe::Just("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Just(5));
    /// assert!(text.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Just(v)`, returns `Just(function(v))`.
    /// If this is `Nothing`, returns `Nothing` and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(21);
    /// assert_eq!(present.map(|x| x * 2), Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a `Maybe`-returning function to the contained value if present.
    ///
    /// Unlike [`map`](Self::map), the function itself returns a `Maybe`, so
    /// chains of fallible lookups do not nest containers. `Nothing` passes
    /// through unchanged and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// fn checked_halve(value: i32) -> Maybe<i32> {
    ///     if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::Just(8).and_then(checked_halve), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(7).and_then(checked_halve), Maybe::Nothing);
    /// assert_eq!(Maybe::Nothing.and_then(checked_halve), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// A `Just` whose value satisfies the predicate is returned unchanged.
    /// A `Just` whose value fails the predicate, or an existing `Nothing`,
    /// becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).filter(|x| *x > 10), Maybe::Just(42));
    /// assert_eq!(Maybe::Just(42).filter(|x| *x > 100), Maybe::Nothing);
    /// assert_eq!(Maybe::<i32>::Nothing.filter(|x| *x > 10), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Maybe` by applying exactly one of two handlers.
    ///
    /// This is pattern matching as a function: `just_function` runs for
    /// `Just`, `nothing_function` for `Nothing`, and their results unify to
    /// a common type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// let result = present.fold(|n| n.to_string(), || "absent".to_string());
    /// assert_eq!(result, "42");
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// let result = absent.fold(|n| n.to_string(), || "absent".to_string());
    /// assert_eq!(result, "absent");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, just_function: F, nothing_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Just(value) => just_function(value),
            Self::Nothing => nothing_function(),
        }
    }

    // =========================================================================
    // Side-Effecting Inspection
    // =========================================================================

    /// Invokes a function with a reference to the value if present, for side
    /// effects, and returns the container unchanged in both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let present = Maybe::Just(42).tap(|value| seen.push(*value));
    /// assert_eq!(present, Maybe::Just(42));
    /// assert_eq!(seen, vec![42]);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing.tap(|value| seen.push(*value));
    /// assert_eq!(absent, Maybe::Nothing);
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// This is an escape hatch that converts the total container back into a
    /// partial, panicking operation. Prefer [`unwrap_or`](Self::unwrap_or),
    /// [`unwrap_or_else`](Self::unwrap_or_else) or [`fold`](Self::fold) at
    /// production call sites; `unwrap` is intended for prototyping and tests,
    /// where its distinct name keeps unsafe call sites easy to audit.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.unwrap(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value, panicking with a caller-supplied message
    /// if absent.
    ///
    /// Same escape-hatch caveat as [`unwrap`](Self::unwrap).
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.expect("value must be configured"), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    /// Returns the contained value or the given default.
    ///
    /// The default is evaluated eagerly by the caller. If the fallback is
    /// expensive to construct, use [`unwrap_or_else`](Self::unwrap_or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_or(0), 42);
    /// assert_eq!(Maybe::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes a default.
    ///
    /// `default_function` is only invoked when this is `Nothing`, so an
    /// expensive fallback costs nothing on the present path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_or_else(|| 0), 42);
    /// assert_eq!(Maybe::Nothing.unwrap_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default_function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default_function(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an [`Outcome`], using the supplied error for `Nothing`.
    ///
    /// `Maybe` carries no error intrinsically, so the caller provides the
    /// error value to use for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::{Maybe, Outcome};
    ///
    /// let present: Maybe<&str> = Maybe::Just("x");
    /// assert_eq!(present.into_outcome("missing"), Outcome::Success("x"));
    ///
    /// let absent: Maybe<&str> = Maybe::Nothing;
    /// assert_eq!(
    ///     absent.into_outcome("Required configuration is missing"),
    ///     Outcome::Failure("Required configuration is missing"),
    /// );
    /// ```
    #[inline]
    pub fn into_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error),
        }
    }

    /// Converts a standard `Option` into a `Maybe`.
    ///
    /// `Some(v)` becomes `Just(v)` and `None` becomes `Nothing`. Any other
    /// "falsy looking" payload (`0`, `""`, `false`) is an ordinary present
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(0)), Maybe::Just(0));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Converts into a standard `Option`, consuming the `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).into_option(), Some(42));
    /// assert_eq!(Maybe::<i32>::Nothing.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Sequence Combination
    // =========================================================================

    /// Combines an ordered sequence of `Maybe`s into a `Maybe` of values.
    ///
    /// Returns `Just` of all values in their original order when every
    /// element is present. Short-circuits to `Nothing` at the first absent
    /// element, without consuming the rest of the sequence. An empty input
    /// yields `Just(vec![])`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let all_present = vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)];
    /// assert_eq!(Maybe::combine(all_present), Maybe::Just(vec![1, 2, 3]));
    ///
    /// let with_absent = vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)];
    /// assert_eq!(Maybe::combine(with_absent), Maybe::Nothing);
    ///
    /// let empty: Vec<Maybe<i32>> = vec![];
    /// assert_eq!(Maybe::combine(empty), Maybe::Just(vec![]));
    /// ```
    pub fn combine<I>(maybes: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let iterator = maybes.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);

        for maybe in iterator {
            match maybe {
                Self::Just(value) => values.push(value),
                Self::Nothing => return Maybe::Nothing,
            }
        }

        Maybe::Just(values)
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Nothing`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::Just(42));
    ///
    /// let maybe: Maybe<i32> = None.into();
    /// assert_eq!(maybe, Maybe::Nothing);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Maybe;
    ///
    /// let option: Option<i32> = Maybe::Just(42).into();
    /// assert_eq!(option, Some(42));
    ///
    /// let option: Option<i32> = Maybe::Nothing.into();
    /// assert_eq!(option, None);
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
