//! Combinators over functions.
//!
//! - [`identity`]: the I combinator
//! - [`constant`]: the K combinator
//! - [`flip`]: the C combinator
//! - [`compose`] / [`pipe`]: two-function composition, right-to-left and
//!   left-to-right
//! - [`partial_left`] / [`partial_right`]: fix one argument of a binary
//!   function
//! - [`splat`] / [`unsplat`]: move between a binary function and one taking
//!   a pair
//!
//! The [`compose!`](crate::compose!), [`pipe!`](crate::pipe!) and
//! [`partial!`](crate::partial!) macros generalize these to any arity.

/// Returns the value unchanged.
///
/// `compose(identity, f)` and `compose(f, identity)` behave like `f`.
///
/// # Examples
///
/// ```
/// use fprelude::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Short alias of [`identity`].
#[inline]
pub fn id<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns `value`.
///
/// # Examples
///
/// ```
/// use fprelude::combinator::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Negates a predicate.
///
/// # Examples
///
/// ```
/// use fprelude::combinator::not;
///
/// let odd = not(|n: i32| n % 2 == 0);
/// assert!(odd(3));
/// assert!(!odd(4));
/// ```
#[inline]
pub fn not<A, P>(predicate: P) -> impl Fn(A) -> bool
where
    P: Fn(A) -> bool,
{
    move |argument| !predicate(argument)
}

/// Swaps the arguments of a binary function.
///
/// `flip(flip(f))(a, b) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use fprelude::combinator::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`.
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |argument| outer(inner(argument))
}

/// Left-to-right composition: `pipe(f, g)(x) == g(f(x))`.
///
/// The first argument runs first. For the nesting order `f(g(x))` use
/// [`compose`]; `pipe(f, g)` equals `compose(g, f)`.
///
/// # Examples
///
/// ```
/// use fprelude::combinator::pipe;
///
/// let shout = pipe(|s: &str| s.to_uppercase(), |s: String| s + "!");
/// assert_eq!(shout("hey"), "HEY!");
/// ```
#[inline]
pub fn pipe<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |argument| second(first(argument))
}

/// Fixes the first argument of a binary function.
#[inline]
pub fn partial_left<A, B, C, F>(function: F, first: A) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |second| function(first.clone(), second)
}

/// Fixes the second argument of a binary function.
///
/// # Examples
///
/// ```
/// use fprelude::combinator::partial_right;
///
/// let halve = partial_right(|n: f64, d: f64| n / d, 2.0);
/// assert!((halve(9.0) - 4.5).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn partial_right<A, B, C, F>(function: F, second: B) -> impl Fn(A) -> C
where
    B: Clone,
    F: Fn(A, B) -> C,
{
    move |first| function(first, second.clone())
}

/// Turns a binary function into one taking a pair.
///
/// # Examples
///
/// ```
/// use fprelude::prelude::*;
///
/// let sums = map(splat(|a: i32, b: i32| a + b), zip2(vec![1, 2], vec![10, 20]).unwrap());
/// assert_eq!(sums.unwrap(), vec![11, 22]);
/// ```
#[inline]
pub fn splat<A, B, C, F>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(first, second)| function(first, second)
}

/// Turns a function taking a pair into a binary function.
#[inline]
pub fn unsplat<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn((A, B)) -> C,
{
    move |first, second| function((first, second))
}

/// Orders two values through the [`Ordered`](crate::typeclass::Ordered)
/// type class, for use with `sort_by`.
///
/// # Examples
///
/// ```
/// use fprelude::combinator::compare_ord;
///
/// let mut words = vec!["pear", "fig", "apple"];
/// words.sort_by(compare_ord);
/// assert_eq!(words, vec!["apple", "fig", "pear"]);
/// ```
#[cfg(feature = "typeclass")]
#[inline]
pub fn compare_ord<T: crate::typeclass::Ordered>(left: &T, right: &T) -> std::cmp::Ordering {
    left.compare(right)
}
