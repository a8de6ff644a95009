//! The `partial!` macro.

/// Fixes some arguments of a two- or three-argument function.
///
/// Write `__` for every argument that stays open; the result is a closure
/// over the open arguments, in their original order. Fixed arguments are
/// evaluated once and cloned on every call, so the closure implements `Fn`.
/// With every argument fixed the result is a thunk.
///
/// `__` is matched as a literal token. Do not import anything named `__`.
///
/// # Examples
///
/// ```
/// use fprelude::{curry3, partial};
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let flat = partial!(volume, __, __, 1);
/// assert_eq!(flat(3, 4), 12);
///
/// let mixed = partial!(volume, 1, __, __);
/// assert_eq!(mixed(2, 3), curry3!(volume)(1)(2)(3));
/// assert_eq!(mixed(2, 3), volume(1, 2, 3));
/// ```
///
/// ```
/// use fprelude::partial;
///
/// let greet = |greeting: &str, name: String| format!("{greeting}, {name}");
/// let hello = partial!(greet, "hello", __);
/// assert_eq!(hello(String::from("ada")), "hello, ada");
///
/// let thunk = partial!(greet, "hi", String::from("bob"));
/// assert_eq!(thunk(), "hi, bob");
/// assert_eq!(thunk(), "hi, bob");
/// ```
#[macro_export]
macro_rules! partial {
    // three arguments
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::core::clone::Clone::clone(&first), second, third)
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, ::core::clone::Clone::clone(&second), third)
    }};
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, ::core::clone::Clone::clone(&third))
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                third,
            )
        }
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| {
            function(
                ::core::clone::Clone::clone(&first),
                second,
                ::core::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| {
            function(
                first,
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
            )
        }
    }};

    // two arguments
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::core::clone::Clone::clone(&first), second)
    }};
    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::core::clone::Clone::clone(&second))
    }};
    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
            )
        }
    }};
}
