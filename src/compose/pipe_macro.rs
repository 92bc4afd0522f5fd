//! The `pipe!` macro for eager left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which immediately threads a
//! value through a series of functions, in the order they are written.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. Application is
/// eager: every function has run by the time the macro expression
/// evaluates. For the lazy variant that builds a reusable function instead,
/// see [`flow!`](crate::flow!).
///
/// Each function must accept exactly the output type of its predecessor.
/// There is no error recovery built in: if any step panics, the panic
/// propagates normally. Intermediate values may or may not be containers;
/// the macro is container-agnostic by design.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once. This allows using functions that consume their
/// captured environment.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use totality::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipe!(x, f, g) = g(f(x)) = add_one(double(5)) = add_one(10) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Type conversion through pipeline
///
/// ```
/// use totality::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let result = pipe!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
///
/// ## Threading containers through a pipeline
///
/// ```
/// use totality::container::Maybe;
/// use totality::pipe;
///
/// let result = pipe!(
///     Maybe::Just(5),
///     |maybe: Maybe<i32>| maybe.map(|x| x * 2),
///     |maybe: Maybe<i32>| maybe.filter(|x| *x > 5),
/// );
/// assert_eq!(result, Maybe::Just(10));
/// ```
///
/// ## Equivalence with flow
///
/// ```
/// use totality::{flow, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// // pipe! applies immediately; flow! builds a function first
/// assert_eq!(pipe!(10, f, g), flow!(f, g)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
