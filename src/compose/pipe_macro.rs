//! The `pipe!` macro.

/// Composes functions from left to right, or threads a value through them.
///
/// - `pipe!(f, g, h)` builds `|x| h(g(f(x)))`: the leftmost function runs
///   first. `pipe!(f, g, h)` equals `compose!(h, g, f)`.
/// - `pipe!(value => f, g, h)` applies the chain to `value` at once. Each
///   function is called exactly once, so `FnOnce` is enough.
///
/// # Examples
///
/// ```
/// use fprelude::prelude::*;
/// use fprelude::pipe;
///
/// let evens_doubled = pipe!(
///     |xs: Vec<i32>| filter(|x: &i32| x % 2 == 0, xs),
///     |xs: Result<Vec<i32>>| xs.and_then(|xs| map(|x: i32| x * 2, xs)),
/// );
/// assert_eq!(evens_doubled(vec![1, 2, 3, 4]).unwrap(), vec![4, 8]);
///
/// let total = pipe!(vec![1, 2, 3] => |xs: Vec<i32>| foldl(|a, b| a + b, 0, xs));
/// assert_eq!(total, Ok(6));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr => $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr => $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value) => $($rest),+)
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::pipe!($($rest),+);
        move |argument| rest(first(argument))
    }};
}
