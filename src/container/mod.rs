//! Total container abstractions.
//!
//! This module provides the two container types at the heart of the
//! library:
//!
//! - [`Maybe`]: presence or absence of a value
//! - [`Outcome`]: success or typed failure of an operation
//!
//! Both are closed sum types: construction is only possible through their
//! variants, every instance is immutable once constructed, and every
//! "transformation" returns a new container (or passes the existing one
//! through unchanged) rather than mutating in place. Because they are plain
//! immutable values, they can be freely shared across threads without
//! synchronization whenever their payloads can.
//!
//! Operations are written as consuming methods so they chain left to right,
//! and compose naturally with the [`pipe!`](crate::pipe) and
//! [`flow!`](crate::flow) utilities.
//!
//! # Examples
//!
//! ## Absence without sentinels
//!
//! ```rust
//! use totality::container::Maybe;
//!
//! fn find_port(configured: Option<u16>) -> Maybe<u16> {
//!     Maybe::from(configured).filter(|port| *port != 0)
//! }
//!
//! assert_eq!(find_port(Some(8080)), Maybe::Just(8080));
//! assert_eq!(find_port(Some(0)), Maybe::Nothing);
//! assert_eq!(find_port(None), Maybe::Nothing);
//! ```
//!
//! ## Failure as a value
//!
//! ```rust
//! use totality::container::Outcome;
//!
//! let results: Vec<Outcome<i32, String>> = vec![
//!     Outcome::Success(1),
//!     Outcome::Failure("second field is blank".to_string()),
//!     Outcome::Failure("third field is blank".to_string()),
//! ];
//!
//! // Exhaustive validation: every error is reported, in order.
//! let validated = Outcome::combine_all(results);
//! assert_eq!(
//!     validated,
//!     Outcome::Failure(vec![
//!         "second field is blank".to_string(),
//!         "third field is blank".to_string(),
//!     ]),
//! );
//! ```

mod error;
mod maybe;
mod outcome;

pub use error::CaughtPanic;
pub use maybe::Maybe;
pub use outcome::Outcome;
