//! The tupled/untupled function families for tuple adaptation.
//!
//! `tupled` adapts a function of fixed arity N into a function accepting
//! one N-tuple, which it spreads positionally into the wrapped function.
//! `untupled` is the inverse: it adapts a tuple-accepting function into one
//! taking N positional arguments. Tupling a function and then untupling the
//! result (or the other way around) yields a function behaviorally
//! identical to the original.
//!
//! Tuples of different arity are distinct types in Rust, so each arity from
//! 2 to 5 gets its own adapter; the bodies are generated from one template.
//!
//! # Examples
//!
//! ## Spreading a tuple into a function
//!
//! ```
//! use totality::compose::tupled2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_pair = tupled2(add);
//! assert_eq!(add_pair((5, 3)), 8);
//!
//! // Useful with iterators over tuples
//! let pairs = vec![(1, 2), (3, 4)];
//! let sums: Vec<i32> = pairs.into_iter().map(tupled2(add)).collect();
//! assert_eq!(sums, vec![3, 7]);
//! ```
//!
//! ## Back to positional arguments
//!
//! ```
//! use totality::compose::{tupled3, untupled3};
//!
//! fn volume(width: i32, height: i32, depth: i32) -> i32 { width * height * depth }
//!
//! let from_tuple = tupled3(volume);
//! let positional = untupled3(from_tuple);
//! assert_eq!(positional(2, 3, 4), 24);
//! ```

macro_rules! tuple_adapters {
    ($arity:literal, $($type_parameter:ident => $argument:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Adapts a ", stringify!($arity), "-argument function into one accepting a single ",
                stringify!($arity), "-tuple, spread positionally into the wrapped function.",
            )]
            #[inline]
            pub fn [<tupled $arity>]<$($type_parameter,)+ R, F>(
                function: F,
            ) -> impl Fn(($($type_parameter,)+)) -> R
            where
                F: Fn($($type_parameter),+) -> R,
            {
                move |($($argument,)+)| function($($argument),+)
            }

            #[doc = concat!(
                "Adapts a function accepting a single ", stringify!($arity),
                "-tuple into one taking ", stringify!($arity),
                " positional arguments, packaged into a tuple for the wrapped function.",
            )]
            #[inline]
            pub fn [<untupled $arity>]<$($type_parameter,)+ R, F>(
                function: F,
            ) -> impl Fn($($type_parameter),+) -> R
            where
                F: Fn(($($type_parameter,)+)) -> R,
            {
                move |$($argument),+| function(($($argument,)+))
            }
        }
    };
}

tuple_adapters!(2, A => first, B => second);
tuple_adapters!(3, A => first, B => second, C => third);
tuple_adapters!(4, A => first, B => second, C => third, D => fourth);
tuple_adapters!(5, A => first, B => second, C => third, D => fourth, E => fifth);
