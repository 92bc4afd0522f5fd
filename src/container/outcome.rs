//! Outcome type - the result of an operation that may fail.
//!
//! This module provides the `Outcome<T, E>` type, which represents either a
//! successful value (`Success(T)`) or a typed failure (`Failure(E)`). This
//! is commonly used in functional programming for:
//!
//! - Propagating errors explicitly through a chain of transformations
//! - Capturing a panicking computation as a value ([`Outcome::catch_panic`])
//! - Bridging to and from asynchronous computations (feature `async`)
//!
//! # Examples
//!
//! ```rust
//! use totality::container::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::from(input.parse::<i32>())
//!         .map_failure(|error| format!("invalid input: {error}"))
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! let failed = parse("twenty-one").map(|n| n * 2);
//! assert!(failed.is_failure());
//! ```

use std::fmt;
use std::hash::Hash;

use super::error::CaughtPanic;
use super::maybe::Maybe;

/// The outcome of an operation: either `Success(T)` or `Failure(E)`.
///
/// Every operation except [`unwrap`](Self::unwrap) and
/// [`expect`](Self::expect) is total: it inspects the variant and either
/// transforms a payload or passes the container through unchanged. Failures
/// are never silently dropped; the single deliberately lossy conversion is
/// [`into_maybe`](Self::into_maybe), which discards the error by name.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use totality::container::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Outcome::Success(84));
/// assert_eq!(failure.map(|x| x * 2), Outcome::Failure("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The success variant, holding the operation's value.
    Success(T),
    /// The failure variant, holding a caller-defined error value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
    /// assert!(failure.is_failure());
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Reference Adaptation
    // =========================================================================

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<String, String> = Outcome::Success("hello".to_string());
    /// let length = success.as_ref().map(|s| s.len());
    /// assert_eq!(length, Outcome::Success(5));
    /// assert!(success.is_success());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// If this is `Success(v)`, returns `Success(function(v))`.
    /// If this is `Failure(e)`, returns `Failure(e)` unchanged and
    /// `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(21);
    /// assert_eq!(success.map(|x| x * 2), Outcome::Success(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
    /// assert_eq!(failure.map(|x| x * 2), Outcome::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure value.
    ///
    /// If this is `Failure(e)`, returns `Failure(function(e))`.
    /// If this is `Success(v)`, returns `Success(v)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
    /// let annotated = failure.map_failure(|e| format!("step one: {e}"));
    /// assert_eq!(annotated, Outcome::Failure("step one: error".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// let unchanged = success.map_failure(|e| format!("step one: {e}"));
    /// assert_eq!(unchanged, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map_failure<F, G>(self, function: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies an `Outcome`-returning function to the success value.
    ///
    /// The success path becomes `function(value)`; the failure path passes
    /// through unchanged with `function` never invoked. Chains of fallible
    /// steps therefore do not nest containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// fn checked_halve(value: i32) -> Outcome<i32, String> {
    ///     if value % 2 == 0 {
    ///         Outcome::Success(value / 2)
    ///     } else {
    ///         Outcome::Failure(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Success(8).and_then(checked_halve), Outcome::Success(4));
    /// assert_eq!(
    ///     Outcome::Success(7).and_then(checked_halve),
    ///     Outcome::Failure("7 is odd".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Keeps a success only if it satisfies the predicate.
    ///
    /// A `Success` satisfying the predicate is returned unchanged. A
    /// `Success` failing it becomes `Failure(error_if_false)`. An existing
    /// `Failure` passes through with its original error, not
    /// `error_if_false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let kept: Outcome<i32, &str> = Outcome::Success(42).filter(|x| *x > 40, "too small");
    /// assert_eq!(kept, Outcome::Success(42));
    ///
    /// let rejected: Outcome<i32, &str> = Outcome::Success(42).filter(|x| *x > 100, "too small");
    /// assert_eq!(rejected, Outcome::Failure("too small"));
    ///
    /// let original: Outcome<i32, &str> = Outcome::Failure("earlier").filter(|x| *x > 100, "too small");
    /// assert_eq!(original, Outcome::Failure("earlier"));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, error_if_false: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error_if_false)
                }
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Outcome` by applying exactly one of two handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// let result = success.fold(|n| n.to_string(), |e| format!("failed: {e}"));
    /// assert_eq!(result, "42");
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// let result = failure.fold(|n| n.to_string(), |e| format!("failed: {e}"));
    /// assert_eq!(result, "failed: boom");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, success_function: F, failure_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    // =========================================================================
    // Side-Effecting Inspection
    // =========================================================================

    /// Invokes a function with a reference to the success value, for side
    /// effects, and returns the container unchanged in both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let success: Outcome<i32, String> = Outcome::Success(42).tap(|v| seen.push(*v));
    /// assert_eq!(success, Outcome::Success(42));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Invokes a function with a reference to the failure value, for side
    /// effects, and returns the container unchanged in both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let failure: Outcome<i32, String> =
    ///     Outcome::Failure("boom".to_string()).tap_failure(|e| seen.push(e.clone()));
    /// assert_eq!(failure, Outcome::Failure("boom".to_string()));
    /// assert_eq!(seen, vec!["boom".to_string()]);
    /// ```
    #[inline]
    pub fn tap_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the `Outcome`.
    ///
    /// This is an escape hatch that converts the total container back into a
    /// partial, panicking operation; its distinct name keeps unsafe call
    /// sites easy to audit. Prefer [`unwrap_or`](Self::unwrap_or),
    /// [`unwrap_or_else`](Self::unwrap_or_else) or [`fold`](Self::fold) at
    /// production call sites.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with a message containing the debug
    /// rendering of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Returns the success value, panicking with a caller-supplied message
    /// on failure.
    ///
    /// Same escape-hatch caveat as [`unwrap`](Self::unwrap).
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.expect("the computation must succeed"), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{message}"),
        }
    }

    /// Returns the success value or the given default.
    ///
    /// The default is evaluated eagerly by the caller. If the fallback is
    /// expensive to construct, use [`unwrap_or_else`](Self::unwrap_or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_or(0), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes a default from the error.
    ///
    /// `default_function` is only invoked on the failure path, so an
    /// expensive fallback costs nothing on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let success: Outcome<usize, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_or_else(|e| e.len()), 42);
    ///
    /// let failure: Outcome<usize, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default_function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => default_function(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Maybe`], discarding the error.
    ///
    /// `Success(v)` becomes `Just(v)`; `Failure(_)` becomes `Nothing`. This
    /// is a deliberate, lossy one-way conversion: the error value is
    /// intentionally dropped, and this is the only operation in the library
    /// that drops it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::{Maybe, Outcome};
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.into_maybe(), Maybe::Just(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
    /// assert_eq!(failure.into_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// Converts a standard `Result` into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::from_result(Ok(42));
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a standard `Result`, consuming the `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(outcome.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    // =========================================================================
    // Sequence Combination
    // =========================================================================

    /// Combines a sequence of `Outcome`s fail-fast, left to right.
    ///
    /// Returns `Success` of all values in their original order when every
    /// element succeeds. Short-circuits at the first `Failure`, returning
    /// that exact error value unwrapped, without consuming the rest of the
    /// sequence. An empty input yields `Success(vec![])`.
    ///
    /// See [`combine_all`](Self::combine_all) for the exhaustive,
    /// every-error-collected alternative; neither behavior is a default, the
    /// caller picks by name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let all: Vec<Outcome<i32, &str>> = vec![Outcome::Success(1), Outcome::Success(2)];
    /// assert_eq!(Outcome::combine(all), Outcome::Success(vec![1, 2]));
    ///
    /// let mixed: Vec<Outcome<i32, &str>> = vec![
    ///     Outcome::Success(1),
    ///     Outcome::Failure("e1"),
    ///     Outcome::Success(3),
    ///     Outcome::Failure("e2"),
    /// ];
    /// assert_eq!(Outcome::combine(mixed), Outcome::Failure("e1"));
    /// ```
    pub fn combine<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        let iterator = outcomes.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);

        for outcome in iterator {
            match outcome {
                Self::Success(value) => values.push(value),
                Self::Failure(error) => return Outcome::Failure(error),
            }
        }

        Outcome::Success(values)
    }

    /// Combines a sequence of `Outcome`s exhaustively, collecting every error.
    ///
    /// Returns `Success` of all values in their original order when zero
    /// failures exist; otherwise returns `Failure` of every error value in
    /// original order, rather than stopping at the first. An empty input
    /// yields `Success(vec![])`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let mixed: Vec<Outcome<i32, &str>> = vec![
    ///     Outcome::Success(1),
    ///     Outcome::Failure("e1"),
    ///     Outcome::Success(3),
    ///     Outcome::Failure("e2"),
    /// ];
    /// assert_eq!(Outcome::combine_all(mixed), Outcome::Failure(vec!["e1", "e2"]));
    /// ```
    pub fn combine_all<I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                Self::Success(value) => values.push(value),
                Self::Failure(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Outcome::Success(values)
        } else {
            Outcome::Failure(errors)
        }
    }
}

// =============================================================================
// Panic Boundary
// =============================================================================

impl<T> Outcome<T, CaughtPanic> {
    /// Runs a function, capturing a panic as a `Failure`.
    ///
    /// On normal return, produces `Success` of the returned value. If the
    /// function panics, the panic is caught and produced as
    /// `Failure(CaughtPanic)`; a `&str` or `String` panic payload becomes
    /// the error message, any other payload a fixed fallback message, so the
    /// error channel's type stays consistent.
    ///
    /// This is one of the two boundaries where the library converts the
    /// host's raise mechanism into a value (the other being the async
    /// bridge).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let parsed = Outcome::catch_panic(|| "42".parse::<i32>().unwrap());
    /// assert_eq!(parsed, Outcome::Success(42));
    ///
    /// let caught = Outcome::catch_panic(|| -> i32 { panic!("invalid json") });
    /// assert_eq!(caught.unwrap_or_else(|e| e.message().len() as i32), 12);
    /// ```
    pub fn catch_panic<F>(function: F) -> Self
    where
        F: FnOnce() -> T + std::panic::UnwindSafe,
    {
        match std::panic::catch_unwind(function) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(CaughtPanic::from_payload(payload.as_ref())),
        }
    }
}

// =============================================================================
// Async Bridging
// =============================================================================

#[cfg(feature = "async")]
impl<T, E> Outcome<T, E> {
    /// Awaits an external asynchronous computation, capturing its settlement.
    ///
    /// A future resolving to `Ok(v)` produces `Success(v)`; one resolving to
    /// `Err(e)` produces `Failure(e)` with the raw failure passed through
    /// unchanged. Use [`from_future_or_else`](Self::from_future_or_else) to
    /// transform the failure while bridging.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let settled = async { Ok::<_, String>(42) };
    /// assert_eq!(Outcome::from_future(settled).await, Outcome::Success(42));
    /// # }
    /// ```
    pub async fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>>,
    {
        Self::from_result(future.await)
    }

    /// Awaits an external asynchronous computation, transforming its failure.
    ///
    /// A future resolving to `Ok(v)` produces `Success(v)`; one resolving to
    /// `Err(raw)` produces `Failure(error_function(raw))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let settled = async { Err::<i32, _>("boom") };
    /// let outcome: Outcome<i32, String> =
    ///     Outcome::from_future_or_else(settled, |raw| format!("failed: {raw}")).await;
    /// assert_eq!(outcome, Outcome::Failure("failed: boom".to_string()));
    /// # }
    /// ```
    pub async fn from_future_or_else<Raw, Fut, F>(future: Fut, error_function: F) -> Self
    where
        Fut: Future<Output = Result<T, Raw>>,
        F: FnOnce(Raw) -> E,
    {
        match future.await {
            Ok(value) => Self::Success(value),
            Err(raw) => Self::Failure(error_function(raw)),
        }
    }

    /// Chains an asynchronous step on the success path.
    ///
    /// This is the async-aware counterpart to [`and_then`](Self::and_then),
    /// needed because an ordinary `and_then` cannot await a step that
    /// suspends. The success path awaits `step(value)` and returns its
    /// outcome; the failure path short-circuits with the existing error and
    /// `step` is never invoked. A caller holding an in-flight
    /// `Future<Output = Outcome<..>>` awaits it first, then chains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// async fn lookup(id: i32) -> Outcome<String, String> {
    ///     Outcome::Success(format!("user-{id}"))
    /// }
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let success: Outcome<i32, String> = Outcome::Success(7);
    /// assert_eq!(
    ///     success.and_then_async(lookup).await,
    ///     Outcome::Success("user-7".to_string()),
    /// );
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("no id".to_string());
    /// assert_eq!(
    ///     failure.and_then_async(lookup).await,
    ///     Outcome::Failure("no id".to_string()),
    /// );
    /// # }
    /// ```
    pub async fn and_then_async<U, F, Fut>(self, step: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => step(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

#[cfg(feature = "async")]
impl<T, E> std::future::IntoFuture for Outcome<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = std::future::Ready<Result<T, E>>;

    /// Bridges back out to the asynchronous world.
    ///
    /// Awaiting an `Outcome` settles immediately: a `Success` resolves with
    /// the value through the `Ok` channel and a `Failure` "rejects" through
    /// the `Err` channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.await, Ok(42));
    /// # }
    /// ```
    fn into_future(self) -> Self::IntoFuture {
        std::future::ready(self.into_result())
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Ok(42).into();
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let result: Result<i32, String> = Outcome::Success(42).into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_success_construction() {
        let value: Outcome<i32, String> = Outcome::Success(42);
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn test_failure_construction() {
        let value: Outcome<i32, String> = Outcome::Failure("error".to_string());
        assert!(value.is_failure());
        assert!(!value.is_success());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let outcome: Outcome<i32, String> = err.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn test_debug_rendering() {
        let success: Outcome<i32, String> = Outcome::Success(42);
        assert_eq!(format!("{success:?}"), "Success(42)");

        let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
        assert_eq!(format!("{failure:?}"), "Failure(\"boom\")");
    }
}
