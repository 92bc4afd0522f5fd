//! # totality
//!
//! Total container abstractions and function composition utilities for Rust.
//!
//! ## Overview
//!
//! This library lets calling code express "a value may be absent" or "an
//! operation may fail" through the type system instead of through sentinel
//! values and panics, and compose transformations over those containers in
//! a left-to-right, readable order. It includes:
//!
//! - **Containers**: [`Maybe`](container::Maybe) for presence/absence,
//!   [`Outcome`](container::Outcome) for success/failure
//! - **Function Composition**: `pipe!`, `flow!`, `compose!`, curry macros
//! - **Signature Adapters**: uncurry, tupled and untupled functions
//! - **Combinators**: `identity`, `constant`, `flip`
//!
//! Every container operation is a total function over its container
//! argument: it inspects the variant and either transforms the payload or
//! passes the container through unchanged. The only operations that can
//! fail are the explicitly named `unwrap`/`expect` escape hatches.
//!
//! ## Feature Flags
//!
//! - `container`: The `Maybe` and `Outcome` container types
//! - `compose`: Function composition utilities
//! - `async`: Future-bridging operations on `Outcome`
//! - `serde`: `Serialize`/`Deserialize` support for the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use totality::container::{Maybe, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::from(input.parse::<i32>())
//!         .map_failure(|error| format!("not a number: {error}"))
//! }
//!
//! let result = parse("21").map(|n| n * 2);
//! assert_eq!(result, Outcome::Success(42));
//!
//! let absent: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(absent.unwrap_or(0), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use totality::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "compose")]
pub mod compose;
