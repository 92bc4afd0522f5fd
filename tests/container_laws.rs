//! Property-based tests for the container laws.
//!
//! Using proptest, we generate random inputs to verify the laws the
//! containers must satisfy:
//!
//! ## Functor Laws
//! - **Identity**: `c.map(|x| x)` is behaviorally equivalent to `c`
//! - **Composition**: `c.map(f).map(g)` equals `c.map(|x| g(f(x)))`
//!
//! ## Monad Law
//! - **Associativity**: `c.and_then(f).and_then(g)` equals
//!   `c.and_then(|x| f(x).and_then(g))`
//!
//! ## Combine Laws
//! - `combine` returns the error at the first failing position
//! - `combine_all` collects every failing element in original order

#![cfg(feature = "container")]

use proptest::prelude::*;
use totality::container::{Maybe, Outcome};

fn arbitrary_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(Maybe::Just), Just(Maybe::Nothing)]
}

fn arbitrary_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Success),
        "[a-z]{1,8}".prop_map(Outcome::Failure),
    ]
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity function changes nothing.
    #[test]
    fn prop_maybe_map_identity(maybe in arbitrary_maybe()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    /// Identity Law for Outcome, both variants.
    #[test]
    fn prop_outcome_map_identity(outcome in arbitrary_outcome()) {
        prop_assert_eq!(outcome.clone().map(|x| x), outcome);
    }

    /// Composition Law: mapping twice equals mapping the composition.
    #[test]
    fn prop_maybe_map_composition(maybe in arbitrary_maybe()) {
        let first = |x: i32| x.wrapping_add(1);
        let second = |x: i32| x.wrapping_mul(2);

        prop_assert_eq!(maybe.map(first).map(second), maybe.map(|x| second(first(x))));
    }

    /// Composition Law for Outcome.
    #[test]
    fn prop_outcome_map_composition(outcome in arbitrary_outcome()) {
        let first = |x: i32| x.wrapping_add(1);
        let second = |x: i32| x.wrapping_mul(2);

        prop_assert_eq!(
            outcome.clone().map(first).map(second),
            outcome.map(|x| second(first(x))),
        );
    }

    /// map_failure leaves the success payload and tag untouched.
    #[test]
    fn prop_outcome_map_failure_identity_on_success(value in any::<i32>()) {
        let outcome: Outcome<i32, String> = Outcome::Success(value);
        prop_assert_eq!(outcome.map_failure(|e| format!("{e}!")), Outcome::Success(value));
    }
}

// =============================================================================
// Monad Associativity
// =============================================================================

proptest! {
    /// `c.and_then(f).and_then(g)` == `c.and_then(|x| f(x).and_then(g))`
    #[test]
    fn prop_maybe_and_then_associativity(maybe in arbitrary_maybe()) {
        let f = |x: i32| {
            if x % 2 == 0 { Maybe::Just(x.wrapping_div(2)) } else { Maybe::Nothing }
        };
        let g = |x: i32| {
            if x >= 0 { Maybe::Just(x.wrapping_add(1)) } else { Maybe::Nothing }
        };

        prop_assert_eq!(
            maybe.and_then(f).and_then(g),
            maybe.and_then(|x| f(x).and_then(g)),
        );
    }

    /// Associativity for Outcome.
    #[test]
    fn prop_outcome_and_then_associativity(outcome in arbitrary_outcome()) {
        let f = |x: i32| {
            if x % 2 == 0 {
                Outcome::Success(x.wrapping_div(2))
            } else {
                Outcome::Failure("odd".to_string())
            }
        };
        let g = |x: i32| {
            if x >= 0 {
                Outcome::Success(x.wrapping_add(1))
            } else {
                Outcome::Failure("negative".to_string())
            }
        };

        prop_assert_eq!(
            outcome.clone().and_then(f).and_then(g),
            outcome.and_then(|x| f(x).and_then(g)),
        );
    }
}

// =============================================================================
// Combine Laws
// =============================================================================

proptest! {
    /// The returned error is the one at the first failing position.
    #[test]
    fn prop_outcome_combine_returns_first_error(
        values in proptest::collection::vec(any::<i32>(), 0..10),
        first_failure in 0_usize..10,
        second_failure in 0_usize..10,
    ) {
        let earlier = first_failure.min(second_failure);
        let later = first_failure.max(second_failure);

        let outcomes: Vec<Outcome<i32, usize>> = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if index == earlier || index == later {
                    Outcome::Failure(index)
                } else {
                    Outcome::Success(*value)
                }
            })
            .collect();

        let expected = if earlier < values.len() {
            Outcome::Failure(earlier)
        } else if later < values.len() {
            Outcome::Failure(later)
        } else {
            Outcome::Success(values)
        };

        prop_assert_eq!(Outcome::combine(outcomes), expected);
    }

    /// combine_all collects exactly the failing elements, in order.
    #[test]
    fn prop_outcome_combine_all_collects_every_error(
        variants in proptest::collection::vec(any::<bool>(), 0..20),
    ) {
        let outcomes: Vec<Outcome<usize, usize>> = variants
            .iter()
            .enumerate()
            .map(|(index, succeeds)| {
                if *succeeds { Outcome::Success(index) } else { Outcome::Failure(index) }
            })
            .collect();

        let expected_errors: Vec<usize> = variants
            .iter()
            .enumerate()
            .filter_map(|(index, succeeds)| (!succeeds).then_some(index))
            .collect();

        match Outcome::combine_all(outcomes) {
            Outcome::Success(values) => {
                prop_assert!(expected_errors.is_empty());
                prop_assert_eq!(values.len(), variants.len());
            }
            Outcome::Failure(errors) => prop_assert_eq!(errors, expected_errors),
        }
    }

    /// Maybe::combine preserves order when everything is present.
    #[test]
    fn prop_maybe_combine_preserves_order(
        values in proptest::collection::vec(any::<i32>(), 0..20),
    ) {
        let maybes: Vec<Maybe<i32>> = values.iter().copied().map(Maybe::Just).collect();
        prop_assert_eq!(Maybe::combine(maybes), Maybe::Just(values));
    }
}

// =============================================================================
// Conversion Laws
// =============================================================================

proptest! {
    /// Maybe <-> Option conversion is a lossless round trip.
    #[test]
    fn prop_maybe_option_roundtrip(option in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(Maybe::from(option).into_option(), option);
    }

    /// Outcome <-> Result conversion is a lossless round trip.
    #[test]
    fn prop_outcome_result_roundtrip(outcome in arbitrary_outcome()) {
        prop_assert_eq!(Outcome::from_result(outcome.clone().into_result()), outcome);
    }

    /// into_outcome then into_maybe recovers the original Maybe.
    #[test]
    fn prop_maybe_outcome_roundtrip(maybe in arbitrary_maybe()) {
        prop_assert_eq!(maybe.into_outcome("absent").into_maybe(), maybe);
    }
}
