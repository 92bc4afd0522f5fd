//! The `flow!` macro for lazy left-to-right function composition.
//!
//! This module provides the [`flow!`] macro which builds a new function
//! out of an ordered list of functions, without applying anything until
//! the built function is called.

/// Builds a function that threads its argument left to right through the
/// given functions.
///
/// `flow!(f, g, h)` returns a new function equivalent to `|x| h(g(f(x)))`.
/// Nothing is applied at build time; the returned closure may be called
/// repeatedly. This is the lazy counterpart of [`pipe!`](crate::pipe!):
///
/// ```text
/// flow!(f, g, h)(x) == pipe!(x, f, g, h)
/// ```
///
/// It is also [`compose!`](crate::compose!) with the argument order
/// reversed: `flow!(f, g, h)` is `compose!(h, g, f)`.
///
/// # Syntax
///
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g)` - Returns `|x| g(f(x))`
/// - `flow!(f, g, h, ...)` - Threads through any number of functions
///
/// # Type Requirements
///
/// All functions must implement the [`Fn`] trait so the built function is
/// itself reusable. The output type of each function must match the input
/// type of the next function in the chain, reading left to right.
///
/// # Examples
///
/// ## Building a reusable pipeline
///
/// ```
/// use totality::flow;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let transform = flow!(double, add_one);
/// assert_eq!(transform(5), 11);
/// assert_eq!(transform(10), 21);
/// ```
///
/// ## Zero application until called
///
/// ```
/// use std::cell::Cell;
/// use totality::flow;
///
/// let calls = Cell::new(0);
/// let count_and_double = |x: i32| {
///     calls.set(calls.get() + 1);
///     x * 2
/// };
///
/// let transform = flow!(count_and_double, |x: i32| x + 1);
/// assert_eq!(calls.get(), 0); // building the flow ran nothing
///
/// assert_eq!(transform(5), 11);
/// assert_eq!(calls.get(), 1);
/// ```
///
/// ## Container steps
///
/// ```
/// use totality::container::Maybe;
/// use totality::flow;
///
/// let parse_even = flow!(
///     |s: &str| Maybe::from(s.parse::<i32>().ok()),
///     |maybe: Maybe<i32>| maybe.filter(|n| n % 2 == 0),
/// );
///
/// assert_eq!(parse_even("42"), Maybe::Just(42));
/// assert_eq!(parse_even("41"), Maybe::Nothing);
/// assert_eq!(parse_even("x"), Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! flow {
    // Single function: the flow is the function itself
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: basic left-to-right chaining
    // flow!(f, g)(x) = g(f(x))
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more functions: recursive chaining
    // flow!(f, g, h, ...) = flow!(f, flow!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::flow!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_flow_single() {
        let double = |x: i32| x * 2;
        let flowed = flow!(double);
        assert_eq!(flowed(5), 10);
    }

    #[test]
    fn test_flow_two() {
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        let flowed = flow!(double, add_one);
        assert_eq!(flowed(5), 11);
    }

    #[test]
    fn test_flow_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let flowed = flow!(square, double, add_one);
        assert_eq!(flowed(3), 19);
    }

    #[test]
    fn test_flow_is_reusable() {
        let add_one = |x: i32| x + 1;
        let flowed = flow!(add_one, add_one);
        assert_eq!(flowed(0), 2);
        assert_eq!(flowed(40), 42);
    }
}
