//! Fixed-arity currying.
//!
//! `curryN!(f)` turns an `N`-argument function into `N` nested one-argument
//! closures. The arity is chosen by the macro name at compile time.
//!
//! The function is shared behind an `Rc` and every captured argument is
//! cloned when the next level is called, so each intermediate closure is
//! `Fn` and can be applied any number of times. Arguments must be `Clone`.
//!
//! [`curry3_1_2!`](crate::curry3_1_2!) splits a three-argument function
//! into one argument and then the remaining two, so
//! `curry3_1_2!(f)(1)(2, 3) == curry3!(f)(1)(2)(3) == f(1, 2, 3)`. Other
//! groupings go through [`partial!`](crate::partial!).

/// Curries a two-argument function.
///
/// # Examples
///
/// ```
/// use fprelude::curry2;
///
/// let power = curry2!(|base: u64, exponent: u32| base.pow(exponent));
/// let power_of_two = power(2);
/// assert_eq!(power_of_two(10), 1024);
/// assert_eq!(power_of_two(3), 8);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::core::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// # Examples
///
/// ```
/// use fprelude::curry3;
///
/// let clamp = curry3!(|low: i32, high: i32, value: i32| value.max(low).min(high));
/// let percent = clamp(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::core::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::core::clone::Clone::clone(&first),
                        ::core::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a three-argument function into the first argument and then the
/// remaining two.
///
/// # Examples
///
/// ```
/// use fprelude::curry3_1_2;
///
/// let volume = curry3_1_2!(|depth: u32, width: u32, height: u32| depth * width * height);
/// let slab = volume(2);
/// assert_eq!(slab(3, 4), 24);
/// assert_eq!(slab(1, 1), 2);
/// ```
#[macro_export]
macro_rules! curry3_1_2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second, third| function(::core::clone::Clone::clone(&first), second, third)
        }
    }};
}

/// Curries a four-argument function.
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::core::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::core::clone::Clone::clone(&first);
                    let second = ::core::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::core::clone::Clone::clone(&first),
                            ::core::clone::Clone::clone(&second),
                            ::core::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
