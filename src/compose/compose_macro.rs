//! The `compose!` macro.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs first.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use fprelude::compose;
/// use fprelude::prelude::*;
///
/// let initials = compose!(
///     |letters: Vec<char>| letters.into_iter().collect::<String>(),
///     |split: Vec<String>| split.iter().filter_map(|w| w.chars().next()).collect::<Vec<_>>(),
///     |text: &str| words(text),
/// );
/// assert_eq!(initials("point free style"), "pfs");
/// ```
///
/// ```
/// use fprelude::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(compose!(f, compose!(g, h))(10), compose!(compose!(f, g), h)(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |argument| outer(inner(argument))
    }};
}

#[cfg(test)]
mod tests {
    use crate::combinator::identity;

    #[test]
    fn single_function_is_returned_as_is() {
        let negate = |x: i32| -x;
        assert_eq!(compose!(negate)(4), -4);
    }

    #[test]
    fn rightmost_runs_first() {
        let exclaim = |s: String| s + "!";
        let shout = |s: &str| s.to_uppercase();
        assert_eq!(compose!(exclaim, shout)("hi"), "HI!");
    }

    #[test]
    fn identity_is_neutral() {
        let triple = |x: i32| x * 3;
        assert_eq!(compose!(identity, triple)(5), 15);
        assert_eq!(compose!(triple, identity)(5), 15);
    }

    #[test]
    fn types_flow_through_the_chain() {
        let length = |s: String| s.len();
        let render = |x: u64| x.to_string();
        let square = |x: u64| x * x;
        assert_eq!(compose!(length, render, square)(1_000), 7);
    }
}
