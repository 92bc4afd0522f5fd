//! Function composition utilities.
//!
//! This module provides macros and functions for composing functions in a
//! functional programming style, in a left-to-right, readable order.
//!
//! # Overview
//!
//! - [`pipe!`]: Apply a value through an ordered list of functions, eagerly
//! - [`flow!`]: Build a new function from an ordered list of functions, lazily
//! - [`compose!`]: The right-to-left (mathematical notation) twin of `flow!`
//! - [`curry2!`] through [`curry5!`]: Convert multi-argument functions to curried form
//! - [`uncurry2`] through [`uncurry5`]: Convert curried chains back to positional form
//! - [`tupled2`] through [`tupled5`] and [`untupled2`] through [`untupled5`]:
//!   Convert between positional and tuple-accepting signatures
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! Everything here is container-agnostic: nothing inspects
//! [`Maybe`](crate::container::Maybe) or
//! [`Outcome`](crate::container::Outcome), which is why container
//! operations are consuming methods that closures can wrap freely. The
//! utilities are pure functions with no shared state and are trivially safe
//! to invoke concurrently from independent flows.
//!
//! # Examples
//!
//! ## Eager pipeline
//!
//! ```
//! use totality::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11);
//! ```
//!
//! ## Lazy pipeline
//!
//! ```
//! use totality::flow;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // flow!(f, g) builds |x| g(f(x)); nothing runs until called
//! let transform = flow!(double, add_one);
//! assert_eq!(transform(5), 11);
//! ```
//!
//! ## Currying
//!
//! ```
//! use totality::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let curried_add = curry2!(add);
//! let add_five = curried_add(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Mathematical Background
//!
//! ## Pipeline
//!
//! A pipeline reads left to right, matching the mental model of data
//! flowing through transformations:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! [`pipe!`] applies this immediately; [`flow!`] packages it as a function.
//!
//! ## Composition
//!
//! Mathematical composition reads right to left. Given `f: B -> C` and
//! `g: A -> B`, the composition `(f . g): A -> C` is:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! [`compose!`] implements this convention; `compose!(h, g, f)` and
//! `flow!(f, g, h)` denote the same function.
//!
//! ## Currying and Tupling
//!
//! Currying transforms a multi-argument function into a chain of
//! single-argument functions; tupling transforms it into a function of one
//! ordered fixed-size sequence:
//!
//! ```text
//! curry(f)(a)(b)(c) = f(a, b, c)
//! tupled(f)((a, b, c)) = f(a, b, c)
//! ```
//!
//! Both have exact inverses (`uncurry`, `untupled`); each round trip is a
//! behavioral identity.
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `flow!(f, flow!(g, h)) == flow!(flow!(f, g), h)`
//! - **Left Identity**: `flow!(identity, f) == f`
//! - **Right Identity**: `flow!(f, identity) == f`
//! - **Pipe Consistency**: `pipe!(x, f, g) == flow!(f, g)(x)`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod compose_macro;
mod curry_macro;
mod flow_macro;
mod pipe_macro;
mod tuple;
mod uncurry;
mod utils;

// Re-export helper functions
pub use tuple::{tupled2, tupled3, tupled4, tupled5, untupled2, untupled3, untupled4, untupled5};
pub use uncurry::{uncurry2, uncurry3, uncurry4, uncurry5};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::flow;
pub use crate::pipe;
