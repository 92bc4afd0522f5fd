//! The uncurry function family for converting curried chains back to
//! positional functions.
//!
//! These functions invert the `curry2!` .. `curry5!` macros: given a chain
//! of nested single-argument functions, they return one function accepting
//! all arguments positionally and threading them through the chain in
//! order. Currying a function and then uncurrying the chain yields a
//! function behaviorally identical to the original.

/// Converts a chain of 2 nested unary functions into a 2-argument function.
///
/// # Examples
///
/// ```
/// use totality::compose::uncurry2;
/// use totality::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let uncurried = uncurry2(curry2!(add));
/// assert_eq!(uncurried(5, 3), add(5, 3));
/// ```
///
/// Hand-written chains work too:
///
/// ```
/// use totality::compose::uncurry2;
///
/// let chain = |first: i32| move |second: i32| first + second;
/// let add = uncurry2(chain);
/// assert_eq!(add(5, 3), 8);
/// ```
#[inline]
pub fn uncurry2<A, B, R, F, G>(chain: F) -> impl Fn(A, B) -> R
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> R,
{
    move |first, second| chain(first)(second)
}

/// Converts a chain of 3 nested unary functions into a 3-argument function.
///
/// # Examples
///
/// ```
/// use totality::compose::uncurry3;
/// use totality::curry3;
///
/// fn add_three(a: i32, b: i32, c: i32) -> i32 { a + b + c }
///
/// let uncurried = uncurry3(curry3!(add_three));
/// assert_eq!(uncurried(1, 2, 3), 6);
/// ```
#[inline]
pub fn uncurry3<A, B, C, R, F, G, H>(chain: F) -> impl Fn(A, B, C) -> R
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> H,
    H: FnOnce(C) -> R,
{
    move |first, second, third| chain(first)(second)(third)
}

/// Converts a chain of 4 nested unary functions into a 4-argument function.
#[inline]
pub fn uncurry4<A, B, C, D, R, F, G, H, I>(chain: F) -> impl Fn(A, B, C, D) -> R
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> H,
    H: FnOnce(C) -> I,
    I: FnOnce(D) -> R,
{
    move |first, second, third, fourth| chain(first)(second)(third)(fourth)
}

/// Converts a chain of 5 nested unary functions into a 5-argument function.
#[inline]
pub fn uncurry5<A, B, C, D, E, R, F, G, H, I, J>(chain: F) -> impl Fn(A, B, C, D, E) -> R
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> H,
    H: FnOnce(C) -> I,
    I: FnOnce(D) -> J,
    J: FnOnce(E) -> R,
{
    move |first, second, third, fourth, fifth| chain(first)(second)(third)(fourth)(fifth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{curry2, curry5};

    #[test]
    fn test_uncurry2_roundtrip() {
        fn subtract(minuend: i32, subtrahend: i32) -> i32 {
            minuend - subtrahend
        }

        let uncurried = uncurry2(curry2!(subtract));
        assert_eq!(uncurried(10, 3), subtract(10, 3));
    }

    #[test]
    fn test_uncurry3_with_hand_written_chain() {
        let chain = |a: i32| move |b: i32| move |c: i32| a * b * c;
        let product = uncurry3(chain);
        assert_eq!(product(2, 3, 4), 24);
    }

    #[test]
    fn test_uncurry5_roundtrip() {
        fn sum(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
            a + b + c + d + e
        }

        let uncurried = uncurry5(curry5!(sum));
        assert_eq!(uncurried(1, 2, 3, 4, 5), 15);
    }
}
